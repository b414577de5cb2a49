pub mod bike;
pub mod filter_engine;
pub mod filters;
pub mod options;
pub mod sort;

pub use bike::Bike;
pub use filters::{FilterDimension, FilterSelection};
pub use sort::SortKey;
