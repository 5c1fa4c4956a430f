use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, RwLock, Weak};

type Listener<T> = Arc<dyn Fn(&Arc<T>) + Send + Sync>;

struct ListenerSet<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

impl<T> ListenerSet<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

/// A thread-safe store for managing application state.
///
/// The store owns exactly one state bag at a time, held behind an `Arc` so
/// that every committed update replaces the bag wholesale. Consumers that
/// rely on identity-based change detection can compare snapshot pointers
/// with [`Arc::ptr_eq`].
///
/// Listeners registered with [`Store::subscribe`] are notified synchronously
/// after each commit, in registration order. A listener that panics is
/// isolated and logged; the remaining listeners in the pass still run.
///
/// # Examples
///
/// ```
/// use mural::Store;
///
/// #[derive(Clone)]
/// struct PanelState {
///     count: usize,
/// }
///
/// let store = Store::new(PanelState { count: 0 });
/// store.update(|state| state.count += 1);
/// assert_eq!(store.get().count, 1);
/// ```
pub struct Store<T> {
    state: Arc<RwLock<Arc<T>>>,
    listeners: Arc<Mutex<ListenerSet<T>>>,
}

impl<T: Send + Sync + 'static> Store<T> {
    /// Create a new store with the given initial state.
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(initial))),
            listeners: Arc::new(Mutex::new(ListenerSet::new())),
        }
    }

    /// Get a snapshot of the current state bag.
    ///
    /// The snapshot is the bag itself, not a copy; callers must treat it as
    /// immutable. Two snapshots taken with no commit in between are
    /// pointer-equal.
    pub fn snapshot(&self) -> Arc<T> {
        Arc::clone(&self.state.read().unwrap())
    }

    /// Get a clone of the current state.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        (*self.snapshot()).clone()
    }

    /// Read state without cloning.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let state = self.state.read().unwrap();
        f(state.as_ref())
    }

    /// Update the state using a function.
    ///
    /// The current bag is cloned, mutated in place by `f`, and committed as
    /// a new bag. Every call produces a fresh `Arc`, so listeners always
    /// fire; callers wanting to suppress a notification must guard before
    /// calling `update` rather than making a no-op mutation.
    pub fn update<F>(&self, f: F)
    where
        T: Clone,
        F: FnOnce(&mut T),
    {
        let next = {
            let current = self.state.read().unwrap();
            let mut bag = current.as_ref().clone();
            f(&mut bag);
            Arc::new(bag)
        };
        self.commit(next);
    }

    /// Replace the state bag via a whole-bag function.
    ///
    /// If `f` returns a bag that is pointer-equal to the current one, the
    /// call is a no-op: nothing is committed and no listener fires. Call
    /// sites use this to signal "no meaningful change" by returning the
    /// snapshot they were given.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use mural::Store;
    ///
    /// let store = Store::new(0);
    /// store.apply(|current| {
    ///     if **current > 10 {
    ///         Arc::clone(current) // unchanged, listeners stay quiet
    ///     } else {
    ///         Arc::new(**current + 1)
    ///     }
    /// });
    /// assert_eq!(store.get(), 1);
    /// ```
    pub fn apply<F>(&self, f: F)
    where
        F: FnOnce(&Arc<T>) -> Arc<T>,
    {
        let next = {
            let current = self.state.read().unwrap();
            let next = f(&current);
            if Arc::ptr_eq(&next, &current) {
                return;
            }
            next
        };
        self.commit(next);
    }

    /// Set a new state value.
    pub fn set(&self, new_state: T) {
        self.commit(Arc::new(new_state));
    }

    /// Subscribe to state changes.
    ///
    /// The callback is invoked with the new bag after every committed
    /// update. The returned [`Subscription`] removes exactly this callback;
    /// dropping it without calling [`Subscription::unsubscribe`] leaves the
    /// listener attached for the life of the store.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&Arc<T>) + Send + Sync + 'static,
    {
        let mut set = self.listeners.lock().unwrap();
        let id = set.next_id;
        set.next_id += 1;
        set.entries.push((id, Arc::new(callback)));
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    fn commit(&self, next: Arc<T>) {
        {
            let mut state = self.state.write().unwrap();
            *state = Arc::clone(&next);
        }
        self.notify(&next);
    }

    /// Notify all listeners of a state change.
    ///
    /// Iterates over a snapshot of the listener set taken at the start of
    /// the pass, so subscribing or unsubscribing from inside a listener
    /// cannot corrupt the pass.
    fn notify(&self, state: &Arc<T>) {
        let pass: Vec<Listener<T>> = {
            let set = self.listeners.lock().unwrap();
            set.entries.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in pass {
            if catch_unwind(AssertUnwindSafe(|| listener(state))).is_err() {
                tracing::error!("state listener panicked; continuing notification pass");
            }
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

/// Handle that removes a listener registered with [`Store::subscribe`].
///
/// Calling [`unsubscribe`](Subscription::unsubscribe) more than once is a
/// no-op, and it never panics, even if the store has already been dropped.
pub struct Subscription<T> {
    id: u64,
    listeners: Weak<Mutex<ListenerSet<T>>>,
}

impl<T> Subscription<T> {
    /// Remove the listener this handle was created for.
    pub fn unsubscribe(&self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        if let Ok(mut set) = listeners.lock() {
            set.entries.retain(|(id, _)| *id != self.id);
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug, PartialEq)]
    struct AppState {
        count: usize,
        name: String,
    }

    #[test]
    fn store_get_set() {
        let store = Store::new(AppState {
            count: 0,
            name: "test".to_string(),
        });

        assert_eq!(store.get().count, 0);

        store.set(AppState {
            count: 42,
            name: "updated".to_string(),
        });

        assert_eq!(store.get().count, 42);
        assert_eq!(store.get().name, "updated");
    }

    #[test]
    fn store_update() {
        let store = Store::new(AppState {
            count: 0,
            name: "test".to_string(),
        });

        store.update(|state| {
            state.count += 10;
        });

        assert_eq!(store.get().count, 10);
    }

    #[test]
    fn snapshot_identity_tracks_commits() {
        let store = Store::new(AppState {
            count: 0,
            name: "test".to_string(),
        });

        let before = store.snapshot();
        assert!(Arc::ptr_eq(&before, &store.snapshot()));

        store.update(|state| state.count += 1);
        assert!(!Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn store_subscribe() {
        let store = Store::new(AppState {
            count: 0,
            name: "test".to_string(),
        });

        let call_count = Arc::new(AtomicUsize::new(0));
        let call_count_clone = call_count.clone();

        store.subscribe(move |_state| {
            call_count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(call_count.load(Ordering::SeqCst), 0);

        store.update(|state| state.count += 1);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);

        store.update(|state| state.count += 1);
        assert_eq!(call_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn listeners_fire_in_registration_order() {
        let store = Store::new(0u32);
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            store.subscribe(move |_| order.lock().unwrap().push(tag));
        }

        store.update(|n| *n += 1);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn value_equal_update_still_notifies() {
        let store = Store::new(7u32);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);

        store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        // Same value, new bag: identity changed, so listeners fire.
        store.set(7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn apply_returning_current_bag_is_silent() {
        let store = Store::new(7u32);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);

        store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        let before = store.snapshot();
        store.apply(|current| Arc::clone(current));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));

        store.apply(|current| Arc::new(**current + 1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.get(), 8);
    }

    #[test]
    fn panicking_listener_does_not_stop_the_pass() {
        let store = Store::new(0u32);
        let reached = Arc::new(AtomicUsize::new(0));

        {
            let reached = Arc::clone(&reached);
            store.subscribe(move |_| {
                reached.fetch_add(1, Ordering::SeqCst);
            });
        }
        store.subscribe(|_| panic!("listener failure"));
        {
            let reached = Arc::clone(&reached);
            store.subscribe(move |_| {
                reached.fetch_add(1, Ordering::SeqCst);
            });
        }

        store.update(|n| *n += 1);
        assert_eq!(reached.load(Ordering::SeqCst), 2);

        // The store is still usable after the failed pass.
        store.update(|n| *n += 1);
        assert_eq!(reached.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let store = Store::new(0u32);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);

        let sub = store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.update(|n| *n += 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        sub.unsubscribe();
        sub.unsubscribe();

        store.update(|n| *n += 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_after_store_drop_is_a_noop() {
        let store = Store::new(0u32);
        let sub = store.subscribe(|_| {});
        drop(store);
        sub.unsubscribe();
    }

    #[test]
    fn unsubscribe_during_notification_keeps_the_pass_intact() {
        let store = Store::new(0u32);
        let calls = Arc::new(AtomicUsize::new(0));
        let slot: Arc<Mutex<Option<Subscription<u32>>>> = Arc::new(Mutex::new(None));

        {
            let slot = Arc::clone(&slot);
            store.subscribe(move |_| {
                if let Some(sub) = slot.lock().unwrap().take() {
                    sub.unsubscribe();
                }
            });
        }
        let second = {
            let calls = Arc::clone(&calls);
            store.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };
        *slot.lock().unwrap() = Some(second);

        // The second listener was removed mid-pass, but the pass iterates a
        // snapshot, so it still fires this time.
        store.update(|n| *n += 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        store.update(|n| *n += 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
