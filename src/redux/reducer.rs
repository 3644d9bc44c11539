//! Reducer trait for unidirectional state management.

use super::action::Action;
use super::state::SliceState;

/// Reducer transforms one slice of state based on actions.
///
/// The reducer is the only place where its slice changes.
/// It must be a pure function: (State, &Action) -> State
pub trait Reducer {
    /// The state type this reducer owns.
    type State: SliceState;

    /// The action type this reducer handles.
    type Action: Action;

    /// State used when there is no prior value, i.e. at store initialization.
    fn initial_state(&self) -> Self::State;

    /// Process an action and return the new state.
    ///
    /// Actions this reducer does not handle must return `state` unchanged.
    /// This should be a pure function with no side effects.
    fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State;
}
