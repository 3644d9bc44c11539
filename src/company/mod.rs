//! Insurance company example.
//!
//! Three departments each own one slice of the company state:
//! - `claims.rs` - History of every claim filed
//! - `accounting.rs` - Balance of the company
//! - `policies.rs` - Names of current policy holders
//!
//! `CREATE_CLAIM` is handled by two departments in the same dispatch: it is
//! recorded in the history and paid out of the balance.

mod accounting;
mod actions;
mod claims;
mod policies;

use serde::Serialize;

use crate::combine_reducers;
use crate::redux::Store;

pub use accounting::{AccountingReducer, DEFAULT_STARTING_BALANCE};
pub use actions::{
    create_claim, create_policy, create_policy_with_premium, delete_policy, Claim,
    InsuranceAction, DEFAULT_POLICY_PREMIUM,
};
pub use claims::ClaimsHistoryReducer;
pub use policies::PoliciesReducer;

combine_reducers! {
    /// All departments wired into one reducer.
    pub struct CompanyReducer for InsuranceAction =>
    /// Snapshot of the whole company.
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    CompanyState {
        claims_history: ClaimsHistoryReducer,
        accounting: AccountingReducer,
        policies: PoliciesReducer,
    }
}

impl CompanyReducer {
    pub fn new(starting_balance: i64) -> Self {
        Self {
            claims_history: ClaimsHistoryReducer,
            accounting: AccountingReducer::new(starting_balance),
            policies: PoliciesReducer,
        }
    }
}

impl Default for CompanyReducer {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_BALANCE)
    }
}

/// The insurance company as a whole.
pub type Company = Store<CompanyReducer>;
