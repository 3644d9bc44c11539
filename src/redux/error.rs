//! Errors raised by the shared store.

use thiserror::Error;

/// Errors surfaced by [`SharedStore`](super::SharedStore).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A listener tried to dispatch while the store was still notifying.
    #[error("Dispatch of '{kind}' rejected: store is already dispatching on this thread")]
    ReentrantDispatch { kind: &'static str },

    /// A listener tried to subscribe or unsubscribe during a dispatch.
    #[error("Store is busy dispatching on this thread")]
    Busy,
}
