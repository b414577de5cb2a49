// state.rs
use crate::catalog::{CatalogSource, CatalogStore};
use crate::domain::Bike;
use std::sync::Arc;

/// Shared by every worker thread; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogStore,
    source: Arc<dyn CatalogSource>,
    pub region: String,
}

impl AppState {
    pub fn new(catalog: CatalogStore, source: Arc<dyn CatalogSource>, region: String) -> Self {
        Self {
            catalog,
            source,
            region,
        }
    }

    /// The catalog to render, refreshed first if it has gone stale.
    pub fn bikes(&self) -> Arc<Vec<Bike>> {
        self.catalog.refresh_if_stale(self.source.as_ref());
        self.catalog.current()
    }
}
