//! Per-collection mutual exclusion.
//!
//! One mutex per collection name, created on first use and kept for the life of
//! the registry. The outer mutex only guards the map; callers lock the returned
//! collection mutex themselves around their filesystem work.
//!
//! Both levels use `parking_lot::Mutex`, which does not poison on panic.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Lock held for the duration of a write or delete in one collection.
pub type CollectionLock = Arc<Mutex<()>>;

#[derive(Debug, Default)]
pub struct LockRegistry {
  locks: Mutex<HashMap<String, CollectionLock>>,
}

impl LockRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Return the lock for `collection`, creating it if this is the first request.
  pub fn acquire_or_create(&self, collection: &str) -> CollectionLock {
    let mut locks = self.locks.lock();
    if let Some(lock) = locks.get(collection) {
      return Arc::clone(lock);
    }

    let lock = CollectionLock::default();
    locks.insert(collection.to_string(), Arc::clone(&lock));
    lock
  }

  /// Number of collections that have a registered lock.
  pub fn len(&self) -> usize {
    self.locks.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::thread;

  #[test]
  fn same_name_returns_same_lock() {
    let registry = LockRegistry::new();
    let a = registry.acquire_or_create("users");
    let b = registry.acquire_or_create("users");
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(registry.len(), 1);
  }

  #[test]
  fn different_names_are_independent() {
    let registry = LockRegistry::new();
    let users = registry.acquire_or_create("users");
    let orders = registry.acquire_or_create("orders");
    assert!(!Arc::ptr_eq(&users, &orders));

    let _held = users.lock();
    assert!(orders.try_lock().is_some());
    assert!(users.try_lock().is_none());
  }

  #[test]
  fn concurrent_creation_yields_one_lock() {
    let registry = Arc::new(LockRegistry::new());

    let handles: Vec<_> = (0..16)
      .map(|_| {
        let registry = Arc::clone(&registry);
        thread::spawn(move || registry.acquire_or_create("shared"))
      })
      .collect();

    let locks: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(locks.iter().all(|l| Arc::ptr_eq(l, &locks[0])));
    assert_eq!(registry.len(), 1);
  }

  #[test]
  fn collection_lock_serializes_critical_sections() {
    let registry = Arc::new(LockRegistry::new());
    let inside = Arc::new(AtomicUsize::new(0));
    let max_seen = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
      .map(|_| {
        let registry = Arc::clone(&registry);
        let inside = Arc::clone(&inside);
        let max_seen = Arc::clone(&max_seen);
        thread::spawn(move || {
          let lock = registry.acquire_or_create("users");
          let _guard = lock.lock();
          let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
          max_seen.fetch_max(now, Ordering::SeqCst);
          thread::sleep(std::time::Duration::from_millis(2));
          inside.fetch_sub(1, Ordering::SeqCst);
        })
      })
      .collect();

    for handle in handles {
      handle.join().unwrap();
    }
    assert_eq!(max_seen.load(Ordering::SeqCst), 1);
  }
}
