pub mod detail;
pub mod listing;

pub use detail::bike_detail_page;
pub use listing::{listing_page, ListingVm};
