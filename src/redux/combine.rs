//! Composition of named slice reducers into one reducer.

/// Combine named slice reducers into a single reducer over a composite state.
///
/// Generates:
/// - a composite state struct with one public field per slice,
/// - a combined reducer struct holding one slice reducer per field,
/// - a [`Reducer`](crate::redux::Reducer) impl that runs every slice reducer
///   on every action and reassembles the composite state.
///
/// Slices are fixed at compile time. Each field's next value depends only on
/// its own prior value and the action.
///
/// ```
/// use insurance_store::combine_reducers;
/// use insurance_store::redux::{Action, Reducer};
///
/// #[derive(Debug)]
/// pub enum Tick { Up }
///
/// impl Action for Tick {
///     fn kind(&self) -> &'static str { "UP" }
/// }
///
/// #[derive(Debug, Clone)]
/// pub struct Counter;
///
/// impl Reducer for Counter {
///     type State = u32;
///     type Action = Tick;
///     fn initial_state(&self) -> u32 { 0 }
///     fn reduce(&self, state: u32, action: &Tick) -> u32 {
///         match action { Tick::Up => state + 1 }
///     }
/// }
///
/// combine_reducers! {
///     pub struct Root for Tick => RootState {
///         left: Counter,
///         right: Counter,
///     }
/// }
///
/// let root = Root { left: Counter, right: Counter };
/// let state = root.reduce(root.initial_state(), &Tick::Up);
/// assert_eq!(state, RootState { left: 1, right: 1 });
/// ```
#[macro_export]
macro_rules! combine_reducers {
    (
        $(#[$reducer_meta:meta])*
        $vis:vis struct $reducer:ident for $action:ty => $(#[$state_meta:meta])* $state:ident {
            $( $(#[$field_meta:meta])* $field:ident : $slice:ty ),+ $(,)?
        }
    ) => {
        $(#[$state_meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $state {
            $(
                $(#[$field_meta])*
                pub $field: <$slice as $crate::redux::Reducer>::State,
            )+
        }

        $(#[$reducer_meta])*
        #[derive(Debug, Clone)]
        $vis struct $reducer {
            $( pub $field: $slice, )+
        }

        impl $crate::redux::Reducer for $reducer {
            type State = $state;
            type Action = $action;

            fn initial_state(&self) -> Self::State {
                $state {
                    $( $field: $crate::redux::Reducer::initial_state(&self.$field), )+
                }
            }

            fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State {
                $state {
                    $( $field: $crate::redux::Reducer::reduce(&self.$field, state.$field, action), )+
                }
            }
        }
    };
}
