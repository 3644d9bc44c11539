//! Actions accepted by the insurance company store, and their creators.

use serde::{Deserialize, Serialize};

use crate::redux::Action;

/// Premium charged for a new policy unless configured otherwise.
pub const DEFAULT_POLICY_PREMIUM: i64 = 20;

/// Forms dropped off at the company.
///
/// Serializes as `{"type": "CREATE_CLAIM", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsuranceAction {
    /// A customer asks to be paid out.
    CreateClaim(Claim),

    /// A customer signs up and pays the premium.
    CreatePolicy {
        name: String,
        amount: i64,
    },

    /// A customer cancels every policy held under `name`.
    DeletePolicy {
        name: String,
    },
}

/// Claim payload, also the entry type of the claims history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub name: String,
    pub amount_of_money_to_collect: i64,
}

impl Action for InsuranceAction {
    fn kind(&self) -> &'static str {
        match self {
            InsuranceAction::CreateClaim(_) => "CREATE_CLAIM",
            InsuranceAction::CreatePolicy { .. } => "CREATE_POLICY",
            InsuranceAction::DeletePolicy { .. } => "DELETE_POLICY",
        }
    }
}

pub fn create_claim(
    name: impl Into<String>,
    amount_of_money_to_collect: i64,
) -> InsuranceAction {
    InsuranceAction::CreateClaim(Claim {
        name: name.into(),
        amount_of_money_to_collect,
    })
}

pub fn create_policy(name: impl Into<String>) -> InsuranceAction {
    create_policy_with_premium(name, DEFAULT_POLICY_PREMIUM)
}

pub fn create_policy_with_premium(name: impl Into<String>, amount: i64) -> InsuranceAction {
    InsuranceAction::CreatePolicy {
        name: name.into(),
        amount,
    }
}

pub fn delete_policy(name: impl Into<String>) -> InsuranceAction {
    InsuranceAction::DeletePolicy { name: name.into() }
}
