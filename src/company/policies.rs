//! Policies department: names of current policy holders.

use crate::redux::Reducer;

use super::actions::InsuranceAction;

#[derive(Debug, Clone, Default)]
pub struct PoliciesReducer;

impl Reducer for PoliciesReducer {
    type State = Vec<String>;
    type Action = InsuranceAction;

    fn initial_state(&self) -> Self::State {
        Vec::new()
    }

    fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            InsuranceAction::CreatePolicy { name, .. } => {
                let mut policies = state;
                policies.push(name.clone());
                policies
            }
            // Removes every matching entry, not just the first.
            InsuranceAction::DeletePolicy { name } => {
                state.into_iter().filter(|policy| policy != name).collect()
            }
            InsuranceAction::CreateClaim(_) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::actions::{create_claim, create_policy, delete_policy};

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn create_policy_appends_name() {
        let r = PoliciesReducer;
        let state = r.reduce(Vec::new(), &create_policy("Alex"));
        let state = r.reduce(state, &create_policy("Sam"));
        assert_eq!(state, names(&["Alex", "Sam"]));
    }

    #[test]
    fn delete_policy_removes_every_match() {
        let r = PoliciesReducer;
        let state = r.reduce(names(&["Alex", "Sam", "Alex"]), &delete_policy("Alex"));
        assert_eq!(state, names(&["Sam"]));
    }

    #[test]
    fn deleting_absent_name_is_noop() {
        let r = PoliciesReducer;
        let state = r.reduce(names(&["Sam"]), &delete_policy("Alex"));
        assert_eq!(state, names(&["Sam"]));
    }

    #[test]
    fn claims_pass_through() {
        let r = PoliciesReducer;
        let state = r.reduce(names(&["Alex"]), &create_claim("Alex", 10));
        assert_eq!(state, names(&["Alex"]));
    }
}
