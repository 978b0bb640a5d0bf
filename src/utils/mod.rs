//! Utility functions

pub mod precision;
pub mod time;

pub use precision::{format_fixed, truncate_to_places, PRICE_DECIMALS, SIZE_DECIMALS};
pub use time::now_secs;
