//! Access guards for [`OrderedMap`](crate::OrderedMap).
//!
//! The guard is a strategy chosen through the map's type parameter, so the
//! locking mode is fixed for the lifetime of a map and carried over to its
//! clones:
//!
//! - [`SyncGuard`]: a `parking_lot` read/write lock. Readers share, writers are
//!   exclusive. The map is `Send + Sync`.
//! - [`LocalGuard`]: a `RefCell` with no locking at all. The map is `!Sync`, so
//!   the compiler rejects sharing it across threads.
//!
//! ```rust
//! use serde_ordermap::{LocalOrderedMap, OrderedMap};
//!
//! let shared = OrderedMap::new();
//! assert!(shared.is_safe());
//!
//! let local = LocalOrderedMap::new_local();
//! assert!(!local.is_safe());
//! assert!(!local.clone().is_safe());
//! ```
//!
//! Neither guard is reentrant: a callback passed to
//! [`OrderedMap::iterate`](crate::OrderedMap::iterate) or
//! [`OrderedMap::sort_by`](crate::OrderedMap::sort_by) must not call back into
//! the same map. With `SyncGuard` that deadlocks; with `LocalGuard` it panics.

use crate::map::Entries;
use parking_lot::RwLock;
use std::cell::RefCell;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::SyncGuard {}
    impl Sealed for super::LocalGuard {}
}

/// Shared/exclusive access to a map's entries.
///
/// This trait is sealed; the two implementations are [`SyncGuard`] and
/// [`LocalGuard`].
pub trait Guard: sealed::Sealed + Sized {
    /// Wraps `entries` in a new guard.
    fn new(entries: Entries) -> Self;

    /// `true` when the guard performs real mutual exclusion.
    fn is_safe(&self) -> bool;

    /// Runs `f` with shared access.
    fn read<R>(&self, f: impl FnOnce(&Entries) -> R) -> R;

    /// Runs `f` with exclusive access.
    fn write<R>(&self, f: impl FnOnce(&mut Entries) -> R) -> R;

    /// Exclusive access through `&mut self`; never locks.
    fn get_mut(&mut self) -> &mut Entries;

    /// Consumes the guard and returns the entries.
    fn into_inner(self) -> Entries;
}

/// Read/write lock guard.
#[derive(Debug, Default)]
pub struct SyncGuard(RwLock<Entries>);

impl Guard for SyncGuard {
    fn new(entries: Entries) -> Self {
        SyncGuard(RwLock::new(entries))
    }

    #[inline]
    fn is_safe(&self) -> bool {
        true
    }

    #[inline]
    fn read<R>(&self, f: impl FnOnce(&Entries) -> R) -> R {
        f(&*self.0.read())
    }

    #[inline]
    fn write<R>(&self, f: impl FnOnce(&mut Entries) -> R) -> R {
        f(&mut *self.0.write())
    }

    #[inline]
    fn get_mut(&mut self) -> &mut Entries {
        self.0.get_mut()
    }

    fn into_inner(self) -> Entries {
        self.0.into_inner()
    }
}

/// Single-threaded guard without locking.
#[derive(Debug, Default)]
pub struct LocalGuard(RefCell<Entries>);

impl Guard for LocalGuard {
    fn new(entries: Entries) -> Self {
        LocalGuard(RefCell::new(entries))
    }

    #[inline]
    fn is_safe(&self) -> bool {
        false
    }

    #[inline]
    fn read<R>(&self, f: impl FnOnce(&Entries) -> R) -> R {
        f(&*self.0.borrow())
    }

    #[inline]
    fn write<R>(&self, f: impl FnOnce(&mut Entries) -> R) -> R {
        f(&mut *self.0.borrow_mut())
    }

    #[inline]
    fn get_mut(&mut self) -> &mut Entries {
        self.0.get_mut()
    }

    fn into_inner(self) -> Entries {
        self.0.into_inner()
    }
}
