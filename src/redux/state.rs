//! Base trait for state slices.

use std::fmt::Debug;

/// Marker trait for state values owned by a reducer.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
/// - Self-contained (no handles to external resources)
pub trait SliceState: Clone + PartialEq + Debug + Send + 'static {}

impl<T> SliceState for T where T: Clone + PartialEq + Debug + Send + 'static {}
