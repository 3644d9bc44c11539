//! Claims history department.

use crate::redux::Reducer;

use super::actions::{Claim, InsuranceAction};

/// Keeps every claim ever filed, in filing order.
#[derive(Debug, Clone, Default)]
pub struct ClaimsHistoryReducer;

impl Reducer for ClaimsHistoryReducer {
    type State = Vec<Claim>;
    type Action = InsuranceAction;

    fn initial_state(&self) -> Self::State {
        Vec::new()
    }

    fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            InsuranceAction::CreateClaim(claim) => {
                let mut claims = state;
                claims.push(claim.clone());
                claims
            }
            InsuranceAction::CreatePolicy { .. } | InsuranceAction::DeletePolicy { .. } => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::actions::{create_claim, create_policy, delete_policy};

    #[test]
    fn starts_empty() {
        assert!(ClaimsHistoryReducer.initial_state().is_empty());
    }

    #[test]
    fn create_claim_appends_in_order() {
        let r = ClaimsHistoryReducer;
        let state = r.reduce(Vec::new(), &create_claim("Alex", 100));
        let state = r.reduce(state, &create_claim("Sam", 40));
        let names: Vec<_> = state.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alex", "Sam"]);
        assert_eq!(state[1].amount_of_money_to_collect, 40);
    }

    #[test]
    fn policy_actions_pass_through() {
        let r = ClaimsHistoryReducer;
        let before = r.reduce(Vec::new(), &create_claim("Alex", 100));
        let after = r.reduce(before.clone(), &create_policy("Alex"));
        let after = r.reduce(after, &delete_policy("Alex"));
        assert_eq!(after, before);
    }
}
