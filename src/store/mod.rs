//! The state container.
//!
//! A [`Store`] owns the one canonical snapshot of application state. It is
//! constructed explicitly and handed to consumers by reference; all state
//! transitions go through [`Store::dispatch`] on the thread that owns it.
//! Async work talks back to the store through a [`Dispatcher`], which is a
//! channel sender and can travel to other tasks.

mod combine;
pub mod thunk;

use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::StoreError;
pub use thunk::{dispatch_async, AsyncPhase, RequestId, RequestState, RequestStatus};

/// Root update function: `(snapshot, action) -> snapshot`
pub type ReduceFn<S, A> = fn(&Arc<S>, &A) -> Arc<S>;

type Listener<S> = Rc<dyn Fn(&Arc<S>)>;

struct Listeners<S> {
    next_id: u64,
    entries: Vec<(u64, Listener<S>)>,
}

pub struct Store<S, A> {
    state: RefCell<Arc<S>>,
    reducer: ReduceFn<S, A>,
    listeners: Rc<RefCell<Listeners<S>>>,
    dispatching: Cell<bool>,
    request_ids: Cell<u64>,
    sender: flume::Sender<A>,
    receiver: flume::Receiver<A>,
}

impl<S, A> std::fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("listeners", &self.listeners.borrow().entries.len())
            .field("queued", &self.receiver.len())
            .field("dispatching", &self.dispatching.get())
            .finish()
    }
}

impl<S: 'static, A: Debug> Store<S, A> {
    pub fn new(initial: S, reducer: ReduceFn<S, A>) -> Self {
        Self::with_state(Arc::new(initial), reducer)
    }

    pub fn with_state(initial: Arc<S>, reducer: ReduceFn<S, A>) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            state: RefCell::new(initial),
            reducer,
            listeners: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
            dispatching: Cell::new(false),
            request_ids: Cell::new(0),
            sender,
            receiver,
        }
    }

    /// The current snapshot. Cheap: this only bumps a reference count.
    pub fn get_state(&self) -> Arc<S> {
        Arc::clone(&self.state.borrow())
    }

    /// Run `action` through the root reducer, replace the snapshot and call
    /// every subscriber once, in subscription order.
    pub fn dispatch(&self, action: A) -> Result<(), StoreError> {
        if self.dispatching.replace(true) {
            log::error!("Rejected re-entrant dispatch of {action:?}");
            return Err(StoreError::ReentrantDispatch);
        }
        let _reset = ResetOnDrop(&self.dispatching);

        log::trace!("dispatch {action:?}");
        let next = {
            let current = self.state.borrow();
            (self.reducer)(&current, &action)
        };
        *self.state.borrow_mut() = Arc::clone(&next);

        // Snapshot the listeners so subscribing or unsubscribing from
        // inside a callback only takes effect on the next dispatch
        let listeners: Vec<Listener<S>> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next);
        }
        Ok(())
    }

    /// Parse a serialized action and dispatch it
    pub fn dispatch_json(&self, raw: &str) -> Result<(), StoreError>
    where
        A: DeserializeOwned,
    {
        let action: A = serde_json::from_str(raw).map_err(|e| {
            log::error!("Malformed action {raw:?}: {e}");
            StoreError::MalformedAction(e)
        })?;
        self.dispatch(action)
    }

    /// Register `listener`. It stays registered until the returned
    /// [`Subscription`] is dropped or explicitly unsubscribed.
    pub fn subscribe(&self, listener: impl Fn(&Arc<S>) + 'static) -> Subscription {
        let listener: Listener<S> = Rc::new(listener);
        let id = {
            let mut listeners = self.listeners.borrow_mut();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, listener));
            id
        };
        let weak: Weak<RefCell<Listeners<S>>> = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = weak.upgrade() {
                listeners.borrow_mut().entries.retain(|(i, _)| *i != id);
            }
        })
    }

    /// A handle that async tasks use to send actions back to this store
    pub fn dispatcher(&self) -> Dispatcher<A> {
        Dispatcher {
            sender: self.sender.clone(),
        }
    }

    /// Dispatch every action queued through a [`Dispatcher`], in arrival
    /// order. Returns how many were applied. Called during a dispatch it
    /// fails and leaves the queue untouched.
    pub fn process_pending(&self) -> Result<usize, StoreError> {
        self.ensure_idle()?;
        let mut applied = 0;
        while let Ok(action) = self.receiver.try_recv() {
            self.dispatch(action)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Wait for the next queued action and dispatch it
    pub async fn process_next(&self) -> Result<(), StoreError> {
        self.ensure_idle()?;
        let action = self
            .receiver
            .recv_async()
            .await
            .map_err(|_| StoreError::Disconnected)?;
        self.dispatch(action)
    }

    fn ensure_idle(&self) -> Result<(), StoreError> {
        if self.dispatching.get() {
            log::error!("Rejected draining the action queue during a dispatch");
            return Err(StoreError::ReentrantDispatch);
        }
        Ok(())
    }

    pub fn next_request_id(&self) -> RequestId {
        let id = self.request_ids.get() + 1;
        self.request_ids.set(id);
        RequestId(id)
    }
}

struct ResetOnDrop<'a>(&'a Cell<bool>);

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.0.set(false)
    }
}

/// Sends actions into a [`Store`] from anywhere, including other threads.
/// Actions are applied when the owner calls [`Store::process_pending`] or
/// [`Store::process_next`].
pub struct Dispatcher<A> {
    sender: flume::Sender<A>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<A> Dispatcher<A> {
    pub fn send(&self, action: A) -> Result<(), StoreError> {
        self.sender
            .send(action)
            .map_err(|_| StoreError::Disconnected)
    }
}

/// Removes its listener from the store when dropped.
pub struct Subscription(Option<Box<dyn FnOnce()>>);

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(unsubscribe)))
    }

    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.0.take() {
            unsubscribe()
        }
    }

    /// Keep the listener registered for the lifetime of the store
    pub fn detach(mut self) {
        self.0 = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.0.take() {
            unsubscribe()
        }
    }
}
