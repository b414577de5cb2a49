mod catalog_error;
mod client;
pub mod images;
mod store;

pub use catalog_error::CatalogError;
pub use client::HttpCatalogClient;
pub use store::CatalogStore;

use crate::domain::Bike;

/// Where the catalog comes from. The server only ever sees this trait, so
/// tests can swap the HTTP client for a fixed list.
pub trait CatalogSource: Send + Sync {
    fn fetch_bikes(&self) -> Result<Vec<Bike>, CatalogError>;
}
