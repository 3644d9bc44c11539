//! Unidirectional state management primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store::dispatch ──→ combined Reducer ──→ slice Reducers
//!                  ↑                                       │
//!                  └──────────── new composite State ←─────┘
//! ```
//!
//! - **Action**: Immutable description of one requested state transition
//! - **Reducer**: Pure function `(State, &Action) -> State` owning one slice
//! - **Combined reducer**: Named slice reducers assembled by [`combine_reducers!`]
//! - **Store**: Holds the current composite state and runs dispatches
//!
//! [`combine_reducers!`]: crate::combine_reducers

mod action;
mod combine;
mod error;
mod reducer;
mod shared;
mod state;
mod store;

pub use action::Action;
pub use error::StoreError;
pub use reducer::Reducer;
pub use shared::SharedStore;
pub use state::SliceState;
pub use store::{Listener, ListenerId, Store, Transition};
