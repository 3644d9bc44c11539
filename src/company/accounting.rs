//! Accounting department: the company's bag of money.

use crate::redux::Reducer;

use super::actions::InsuranceAction;

/// Balance the company opens with unless configured otherwise.
pub const DEFAULT_STARTING_BALANCE: i64 = 100;

/// Tracks the balance. Premiums come in, claims go out.
///
/// The balance may go negative; claims are never refused. Arithmetic
/// saturates at the `i64` bounds instead of overflowing.
#[derive(Debug, Clone)]
pub struct AccountingReducer {
    starting_balance: i64,
}

impl AccountingReducer {
    pub fn new(starting_balance: i64) -> Self {
        Self { starting_balance }
    }
}

impl Default for AccountingReducer {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_BALANCE)
    }
}

impl Reducer for AccountingReducer {
    type State = i64;
    type Action = InsuranceAction;

    fn initial_state(&self) -> Self::State {
        self.starting_balance
    }

    fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            InsuranceAction::CreateClaim(claim) => {
                state.saturating_sub(claim.amount_of_money_to_collect)
            }
            InsuranceAction::CreatePolicy { amount, .. } => state.saturating_add(*amount),
            InsuranceAction::DeletePolicy { .. } => state,
        }
    }
}
