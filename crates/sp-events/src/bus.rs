use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`ListenerBus::subscribe`]; pass it back to
/// [`ListenerBus::unsubscribe`] to stop receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registry of zero-argument callbacks. Fan-out is synchronous and runs
/// in registration order; listeners pull whatever state they need after
/// being woken.
#[derive(Default)]
pub struct ListenerBus {
    inner: Mutex<Registry>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl ListenerBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut registry = self.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        ListenerId(id)
    }

    /// Removing an id that was never issued, or was already removed, is
    /// a no-op.
    pub fn unsubscribe(&self, id: ListenerId) {
        let mut registry = self.lock();
        registry.listeners.retain(|(entry, _)| *entry != id.0);
    }

    /// Invokes every registered listener exactly once, in registration
    /// order. Listeners are snapshotted first so a callback may
    /// subscribe or unsubscribe without deadlocking; changes take effect
    /// on the next notify.
    pub fn notify(&self) {
        let listeners: Vec<Listener> = self
            .lock()
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.lock().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().listeners.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn fan_out_runs_in_registration_order() {
        let bus = ListenerBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            bus.subscribe(move || order.lock().unwrap().push(tag));
        }

        bus.notify();

        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn each_listener_fires_once_per_notify() {
        let bus = ListenerBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let count = Arc::clone(&count);
            bus.subscribe(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        bus.notify();

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn unsubscribed_listener_receives_nothing() {
        let bus = ListenerBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        let id = {
            let count = Arc::clone(&count);
            bus.subscribe(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };

        bus.unsubscribe(id);
        bus.notify();
        bus.notify();

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn redundant_unsubscribe_is_a_no_op() {
        let bus = ListenerBus::new();
        let id = bus.subscribe(|| {});
        bus.unsubscribe(id);
        bus.unsubscribe(id);
        assert!(bus.is_empty());
    }
}
