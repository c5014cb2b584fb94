pub mod inmemory_repo;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// A panic while holding one of these locks leaves plain data behind,
/// so a poisoned lock is still safe to use.
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
