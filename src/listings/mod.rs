mod client;
mod fallback;
mod listing_error;
mod models;

pub use client::{ListingClient, ListingSource};
pub use fallback::FallbackProvider;
pub use listing_error::ListingError;
pub use models::RawListingRecord;
