//! Lock helpers shared by the registries and the product store.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// Validation always runs before the first write, so a poisoned lock still
// guards consistent state and can be taken over.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
