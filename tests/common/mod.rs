//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;

use insurance_store::company::{create_claim, create_policy, delete_policy, InsuranceAction};
use proptest::prelude::*;
use tempfile::TempDir;

const NAMES: [&str; 3] = ["Alex", "Sam", "Kim"];

/// A customer name from a small set, so deletes hit earlier creations.
pub fn name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES.to_vec()).prop_map(str::to_string)
}

/// Any single action. Claim amounts include negatives; premiums are the default.
pub fn action() -> impl Strategy<Value = InsuranceAction> {
    prop_oneof![
        name().prop_map(|name| create_policy(name)),
        (name(), -500i64..500).prop_map(|(name, amount)| create_claim(name, amount)),
        name().prop_map(|name| delete_policy(name)),
    ]
}

pub fn action_sequence() -> impl Strategy<Value = Vec<InsuranceAction>> {
    prop::collection::vec(action(), 0..60)
}

/// One round of the demo: buy a policy, claim 100, cancel.
pub fn alex_round() -> [InsuranceAction; 3] {
    [
        create_policy("Alex"),
        create_claim("Alex", 100),
        delete_policy("Alex"),
    ]
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
