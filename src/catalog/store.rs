// src/catalog/store.rs

use crate::catalog::{CatalogError, CatalogSource};
use crate::domain::Bike;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, RwLock, TryLockError};
use std::time::Duration;
use tracing::{debug, error, info};

#[derive(Default)]
struct Snapshot {
    bikes: Arc<Vec<Bike>>,
    loaded_at: Option<DateTime<Utc>>,
    /// Last fetch attempt, successful or not. Staleness is measured from here
    /// so a dead API is retried once per interval, not once per request.
    attempted_at: Option<DateTime<Utc>>,
}

/// The catalog currently being served, shared by every worker thread.
///
/// Readers get an `Arc` to an immutable snapshot; a refresh builds a new
/// snapshot and swaps it in. A failed refresh keeps whatever was there before
/// (empty until the first success).
#[derive(Clone, Default)]
pub struct CatalogStore {
    snapshot: Arc<RwLock<Snapshot>>,
    refreshing: Arc<Mutex<()>>,
    max_age: Option<Duration>,
}

impl CatalogStore {
    /// `max_age` of `None` means the catalog is only loaded by explicit
    /// `refresh` calls.
    pub fn new(max_age: Option<Duration>) -> Self {
        Self {
            max_age,
            ..Self::default()
        }
    }

    /// A store pre-filled with `bikes`, as if a fetch had just succeeded.
    pub fn seeded(bikes: Vec<Bike>, max_age: Option<Duration>) -> Self {
        let store = Self::new(max_age);
        store.swap(bikes, Utc::now());
        store
    }

    pub fn current(&self) -> Arc<Vec<Bike>> {
        Arc::clone(&self.read().bikes)
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.read().loaded_at
    }

    /// Fetches from `source` and swaps the snapshot in. Returns the number of
    /// bikes now held; on error the previous snapshot stays in place.
    pub fn refresh(&self, source: &dyn CatalogSource) -> Result<usize, CatalogError> {
        match source.fetch_bikes() {
            Ok(bikes) => {
                let count = bikes.len();
                self.swap(bikes, Utc::now());
                info!(count, "catalog snapshot replaced");
                Ok(count)
            }
            Err(e) => {
                let held = {
                    let mut snapshot = self.write();
                    snapshot.attempted_at = Some(Utc::now());
                    snapshot.bikes.len()
                };
                error!(error = %e, held, "failed to fetch bikes, keeping current catalog");
                Err(e)
            }
        }
    }

    /// True once `max_age` has passed since the last fetch attempt, or when no
    /// attempt has been made yet.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        let Some(max_age) = self.max_age else {
            return false;
        };
        match self.read().attempted_at {
            None => true,
            Some(attempted_at) => match chrono::Duration::from_std(max_age) {
                Ok(max_age) => now - attempted_at >= max_age,
                Err(_) => false,
            },
        }
    }

    /// Refreshes when the snapshot is stale. If another thread is already
    /// refreshing, returns immediately and the caller serves the current
    /// snapshot.
    pub fn refresh_if_stale(&self, source: &dyn CatalogSource) {
        if !self.is_stale(Utc::now()) {
            return;
        }
        let _guard = match self.refreshing.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(e)) => e.into_inner(),
            Err(TryLockError::WouldBlock) => return,
        };
        // Another thread may have finished a refresh while we waited on the lock.
        if self.is_stale(Utc::now()) && self.refresh(source).is_err() {
            debug!("serving previous snapshot until the next refresh interval");
        }
    }

    fn swap(&self, bikes: Vec<Bike>, loaded_at: DateTime<Utc>) {
        *self.write() = Snapshot {
            bikes: Arc::new(bikes),
            loaded_at: Some(loaded_at),
            attempted_at: Some(loaded_at),
        };
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Snapshot> {
        self.snapshot.write().unwrap_or_else(|e| e.into_inner())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Snapshot> {
        self.snapshot.read().unwrap_or_else(|e| e.into_inner())
    }
}
