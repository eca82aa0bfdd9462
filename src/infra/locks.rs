//! In-process per-resource locks for booking serialization.
//!
//! `validate + insert` is a check-then-act sequence; two concurrent requests
//! for overlapping windows on the same resource could otherwise both pass the
//! conflict check before either has written its row. Bookings therefore hold
//! an exclusive section over every resource id they touch for the whole
//! validate-and-persist span.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// A keyed set of async mutexes, one per resource id.
///
/// Locks are acquired in ascending id order with duplicates collapsed, so two
/// bookings sharing any resource cannot deadlock on each other.
#[derive(Default)]
pub struct ResourceLockSet {
    registry: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl ResourceLockSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire exclusive access to every given resource id.
    ///
    /// The returned guard releases all locks when dropped.
    pub async fn acquire(&self, resource_ids: &[Uuid]) -> ResourceLockGuard {
        let mut ids = resource_ids.to_vec();
        ids.sort();
        ids.dedup();

        let handles: Vec<Arc<Mutex<()>>> = {
            let mut registry = self.registry.lock().await;
            ids.iter()
                .map(|id| registry.entry(*id).or_default().clone())
                .collect()
        };

        let mut guards = Vec::with_capacity(handles.len());
        for (id, handle) in ids.iter().zip(handles) {
            guards.push(handle.lock_owned().await);
            tracing::trace!(resource_id = %id, "resource lock acquired");
        }

        ResourceLockGuard { _guards: guards }
    }
}

/// Holds the acquired locks; dropping it releases every resource.
pub struct ResourceLockGuard {
    _guards: Vec<OwnedMutexGuard<()>>,
}
