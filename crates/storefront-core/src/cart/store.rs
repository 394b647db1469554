//! Observable cart store.
//!
//! `CartStore` is a cheap, cloneable handle over one list of cart entries.
//! Every clone sees the same list, so the store can be handed to both the
//! app and the cart view. The handle is `!Send`: all mutation happens on
//! the UI thread.
//!
//! # Invariants
//!
//! 1. Entries keep insertion order; nothing is deduplicated.
//! 2. `version` increments exactly once per mutation.
//! 3. Subscribers are notified after the mutation, in registration order,
//!    and may read the store from inside the callback.
//! 4. Dropping a [`Subscription`] stops its callback immediately; the
//!    registration itself is pruned as soon as the store is not borrowed.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::catalog::CartEntry;
use crate::error::StoreError;

type Callback = Rc<dyn Fn(&[CartEntry])>;

struct Subscriber {
    alive: Rc<Cell<bool>>,
    callback: Callback,
}

struct Inner {
    entries: Vec<CartEntry>,
    visible: bool,
    version: u64,
    subscribers: Vec<Subscriber>,
}

impl Inner {
    /// Detach registrations whose guard was dropped. The caller drops them
    /// after releasing the borrow, since a callback may own a `Subscription`.
    fn prune(&mut self) -> Vec<Subscriber> {
        let (live, dead) = std::mem::take(&mut self.subscribers)
            .into_iter()
            .partition(|s| s.alive.get());
        self.subscribers = live;
        dead
    }
}

/// Shared, observable list of cart entries.
#[derive(Clone)]
pub struct CartStore {
    inner: Rc<RefCell<Inner>>,
}

impl CartStore {
    /// Create an empty, hidden cart.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                entries: Vec::new(),
                visible: false,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Append an entry.
    pub fn add(&self, entry: CartEntry) {
        self.mutate(|entries| entries.push(entry));
    }

    /// Remove the entry at `index` and return it.
    pub fn remove_at(&self, index: usize) -> Result<CartEntry, StoreError> {
        let len = self.len();
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }
        Ok(self.mutate(|entries| entries.remove(index)))
    }

    /// Replace the whole cart, e.g. with what the backend returned.
    pub fn replace_all(&self, entries: Vec<CartEntry>) {
        self.mutate(|current| *current = entries);
    }

    /// Snapshot of the current entries.
    pub fn entries(&self) -> Vec<CartEntry> {
        self.inner.borrow().entries.clone()
    }

    /// Entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<CartEntry> {
        self.inner.borrow().entries.get(index).cloned()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Mutation counter.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Whether the cart should be displayed.
    pub fn is_visible(&self) -> bool {
        self.inner.borrow().visible
    }

    /// Show or hide the cart.
    pub fn set_visible(&self, visible: bool) {
        self.inner.borrow_mut().visible = visible;
    }

    /// Flip visibility and return the new value.
    pub fn toggle_visibility(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.visible = !inner.visible;
        inner.visible
    }

    /// Register a change callback.
    ///
    /// The callback receives the entries after each mutation. It stays
    /// registered until the returned `Subscription` is dropped.
    pub fn subscribe(&self, callback: impl Fn(&[CartEntry]) + 'static) -> Subscription {
        let alive = Rc::new(Cell::new(true));
        let dead = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.push(Subscriber {
                alive: Rc::clone(&alive),
                callback: Rc::new(callback),
            });
            inner.prune()
        };
        drop(dead);

        Subscription {
            store: Rc::downgrade(&self.inner),
            alive,
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.alive.get())
            .count()
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut Vec<CartEntry>) -> R) -> R {
        let (result, snapshot, callbacks, dead) = {
            let mut inner = self.inner.borrow_mut();
            let result = f(&mut inner.entries);
            inner.version += 1;
            let dead = inner.prune();
            let callbacks: Vec<(Rc<Cell<bool>>, Callback)> = inner
                .subscribers
                .iter()
                .map(|s| (Rc::clone(&s.alive), Rc::clone(&s.callback)))
                .collect();
            (result, inner.entries.clone(), callbacks, dead)
        };
        drop(dead);

        tracing::trace!(len = snapshot.len(), subscribers = callbacks.len(), "cart changed");
        for (alive, callback) in callbacks {
            // An earlier callback may have dropped this subscription.
            if alive.get() {
                callback(&snapshot);
            }
        }
        result
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("CartStore")
            .field("entries", &inner.entries)
            .field("visible", &inner.visible)
            .field("version", &inner.version)
            .field(
                "subscribers",
                &inner.subscribers.iter().filter(|s| s.alive.get()).count(),
            )
            .finish()
    }
}

/// Guard for a store subscription; unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<RefCell<Inner>>,
    alive: Rc<Cell<bool>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.alive.set(false);
        let Some(inner) = self.store.upgrade() else {
            return;
        };
        let dead = match inner.try_borrow_mut() {
            Ok(mut inner) => inner.prune(),
            Err(_) => {
                tracing::trace!("cart store busy, subscription pruned on next change");
                return;
            }
        };
        drop(dead);
    }
}
