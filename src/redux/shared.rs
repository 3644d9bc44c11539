//! Store handle that can be shared across threads.

use std::cell::RefCell;
use std::sync::Arc;

use parking_lot::ReentrantMutex;

use super::action::Action;
use super::error::StoreError;
use super::reducer::Reducer;
use super::store::{ListenerId, Store, Transition};

/// Cloneable handle to a [`Store`] with serialized dispatch.
///
/// Dispatches from different threads queue on the lock, so each one is a
/// single atomic read-modify-write of the composite state. A listener that
/// dispatches back into the same store from the notifying thread is rejected
/// with [`StoreError::ReentrantDispatch`] and the state is left untouched.
pub struct SharedStore<R: Reducer> {
    inner: Arc<ReentrantMutex<RefCell<Store<R>>>>,
}

impl<R: Reducer> Clone for SharedStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> SharedStore<R> {
    pub fn new(reducer: R) -> Self {
        Self::from_store(Store::new(reducer))
    }

    pub fn from_store(store: Store<R>) -> Self {
        Self {
            inner: Arc::new(ReentrantMutex::new(RefCell::new(store))),
        }
    }

    /// Dispatch an action, waiting for any dispatch on another thread.
    pub fn dispatch(&self, action: &R::Action) -> Result<Transition, StoreError> {
        let guard = self.inner.lock();
        let mut store = guard.try_borrow_mut().map_err(|_| {
            tracing::warn!(kind = Action::kind(action), "Re-entrant dispatch rejected");
            StoreError::ReentrantDispatch {
                kind: Action::kind(action),
            }
        })?;
        Ok(store.dispatch(action))
    }

    /// Snapshot of the current composite state.
    pub fn state(&self) -> Result<R::State, StoreError> {
        let guard = self.inner.lock();
        let store = guard.try_borrow().map_err(|_| StoreError::Busy)?;
        Ok(store.state().clone())
    }

    pub fn generation(&self) -> Result<u64, StoreError> {
        let guard = self.inner.lock();
        let store = guard.try_borrow().map_err(|_| StoreError::Busy)?;
        Ok(store.generation())
    }

    pub fn subscribe<F>(&self, listener: F) -> Result<ListenerId, StoreError>
    where
        F: FnMut(&R::State, &Transition) + Send + 'static,
    {
        let guard = self.inner.lock();
        let mut store = guard.try_borrow_mut().map_err(|_| StoreError::Busy)?;
        Ok(store.subscribe(listener))
    }

    pub fn unsubscribe(&self, id: ListenerId) -> Result<bool, StoreError> {
        let guard = self.inner.lock();
        let mut store = guard.try_borrow_mut().map_err(|_| StoreError::Busy)?;
        Ok(store.unsubscribe(id))
    }
}
