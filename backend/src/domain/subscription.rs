//! Scoped outside-click listener registrations.
//!
//! Overlays (the date picker calendar, the SMART letter popup) listen for
//! clicks outside themselves only while they are open. A [`Subscription`] is
//! the handle for one such listener: it is registered when acquired and
//! unregistered when dropped, so closing, dropping the owner or any early
//! return all release it.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

pub type ListenerId = u64;

/// Registry the presentation layer consults to know which overlays want
/// outside-click notifications
pub trait ListenerRegistry: Send + Sync {
    fn register(&self, scope: &'static str) -> ListenerId;
    fn unregister(&self, id: ListenerId);
}

/// Live registration; unregisters itself on drop
pub struct Subscription {
    id: ListenerId,
    scope: &'static str,
    registry: Arc<dyn ListenerRegistry>,
}

impl Subscription {
    pub fn acquire(registry: &Arc<dyn ListenerRegistry>, scope: &'static str) -> Self {
        let id = registry.register(scope);
        log::debug!("👂 Listener {} registered for {}", id, scope);
        Self {
            id,
            scope,
            registry: Arc::clone(registry),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn scope(&self) -> &'static str {
        self.scope
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.registry.unregister(self.id);
        log::debug!("🧹 Listener {} released for {}", self.id, self.scope);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("scope", &self.scope)
            .finish()
    }
}

/// In-memory registry of outside-click listeners
#[derive(Debug, Default)]
pub struct OutsideClickRegistry {
    next_id: AtomicU64,
    active: Mutex<HashMap<ListenerId, &'static str>>,
}

impl OutsideClickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners currently registered
    pub fn active_count(&self) -> usize {
        self.active.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Scopes with a live listener, sorted
    pub fn active_scopes(&self) -> Vec<&'static str> {
        let mut scopes: Vec<&'static str> = self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .copied()
            .collect();
        scopes.sort_unstable();
        scopes
    }
}

impl ListenerRegistry for OutsideClickRegistry {
    fn register(&self, scope: &'static str) -> ListenerId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, scope);
        id
    }

    fn unregister(&self, id: ListenerId) {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> (Arc<OutsideClickRegistry>, Arc<dyn ListenerRegistry>) {
        let concrete = Arc::new(OutsideClickRegistry::new());
        let dynamic: Arc<dyn ListenerRegistry> = concrete.clone();
        (concrete, dynamic)
    }

    #[test]
    fn test_acquire_and_drop() {
        let (concrete, dynamic) = registry();

        let subscription = Subscription::acquire(&dynamic, "date-picker");
        assert_eq!(concrete.active_count(), 1);
        assert_eq!(concrete.active_scopes(), vec!["date-picker"]);
        assert_eq!(subscription.scope(), "date-picker");

        drop(subscription);
        assert_eq!(concrete.active_count(), 0);
        assert!(concrete.active_scopes().is_empty());
    }

    #[test]
    fn test_ids_are_distinct() {
        let (concrete, dynamic) = registry();

        let a = Subscription::acquire(&dynamic, "date-picker");
        let b = Subscription::acquire(&dynamic, "smart-guide");
        assert_ne!(a.id(), b.id());
        assert_eq!(concrete.active_scopes(), vec!["date-picker", "smart-guide"]);
    }

    #[test]
    fn test_released_on_early_exit() {
        fn open_then_fail(registry: &Arc<dyn ListenerRegistry>) -> Result<(), &'static str> {
            let _subscription = Subscription::acquire(registry, "date-picker");
            Err("bail")
        }

        let (concrete, dynamic) = registry();

        assert!(open_then_fail(&dynamic).is_err());
        assert_eq!(concrete.active_count(), 0);
    }

    #[test]
    fn test_repeated_cycles_do_not_accumulate() {
        let (concrete, dynamic) = registry();

        for _ in 0..100 {
            let _subscription = Subscription::acquire(&dynamic, "date-picker");
            assert_eq!(concrete.active_count(), 1);
        }
        assert_eq!(concrete.active_count(), 0);
    }
}
