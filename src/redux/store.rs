//! Owned, single-writer store.

use super::action::Action;
use super::reducer::Reducer;

/// Callback invoked after every state replacement.
pub type Listener<S> = Box<dyn FnMut(&S, &Transition) + Send>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Outcome of a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Generation of the state after this dispatch. Initialization is 0.
    pub generation: u64,
    /// Whether the new state differs from the previous one.
    pub changed: bool,
}

/// Holds the current composite state and applies dispatched actions.
///
/// Dispatch takes `&mut self`, so neither a reducer nor a listener can
/// dispatch back into the store while a dispatch is running.
pub struct Store<R: Reducer> {
    reducer: R,
    state: R::State,
    generation: u64,
    listeners: Vec<(ListenerId, Listener<R::State>)>,
    next_listener_id: u64,
}

impl<R: Reducer> Store<R> {
    /// Create a store and populate every slice with its initial state.
    pub fn new(reducer: R) -> Self {
        let state = reducer.initial_state();
        tracing::debug!(state = ?state, "Store initialized");
        Self {
            reducer,
            state,
            generation: 0,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Current composite state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of dispatches applied since initialization.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Run `action` through the reducer, replace the state, then notify
    /// every listener.
    ///
    /// Listeners run even when the new state equals the old one.
    pub fn dispatch(&mut self, action: &R::Action) -> Transition {
        let next = self.reducer.reduce(self.state.clone(), action);
        let changed = next != self.state;
        self.state = next;
        self.generation += 1;

        let transition = Transition {
            generation: self.generation,
            changed,
        };

        tracing::debug!(
            kind = Action::kind(action),
            generation = transition.generation,
            changed = transition.changed,
            "Action dispatched"
        );

        for (_, listener) in &mut self.listeners {
            listener(&self.state, &transition);
        }

        transition
    }

    /// Register a listener called after every dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&R::State, &Transition) + Send + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::debug!(listener = id.0, "Listener subscribed");
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::debug!(listener = id.0, "Listener unsubscribed");
        }
        removed
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<R: Reducer + Default> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}
