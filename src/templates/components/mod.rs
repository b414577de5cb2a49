pub mod card;
pub mod error;
pub mod filters;

pub use card::{bike_card, booked_badge};
pub use error::error_page;
pub use filters::{filter_sidebar, sort_select};
