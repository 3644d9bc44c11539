//! Base trait for actions dispatched to a store.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions are closed enums: each variant is one kind of transition and
/// carries its own payload shape, so reducers match on them exhaustively.
pub trait Action: Debug + Send + 'static {
    /// Stable tag for this action's kind, used in logs.
    fn kind(&self) -> &'static str;
}
