use company_registry_domain::{Entity, ID};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Useful functions for creating inmemory repositories

// Every write is a single map insert, so a poisoned lock never guards a
// half-written value and it is safe to keep using the map.
fn lock<T>(collection: &Mutex<HashMap<ID, T>>) -> MutexGuard<'_, HashMap<ID, T>> {
    collection.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Inserts `val`, replacing any value stored under the same id
pub fn upsert<T: Clone + Entity>(val: &T, collection: &Mutex<HashMap<ID, T>>) {
    let mut collection = lock(collection);
    collection.insert(val.id().clone(), val.clone());
}

/// Copies out every stored value while holding the lock
pub fn find_all<T: Clone>(collection: &Mutex<HashMap<ID, T>>) -> Vec<T> {
    let collection = lock(collection);
    collection.values().cloned().collect()
}
