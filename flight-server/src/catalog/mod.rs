//! Static reference catalogs.
//!
//! The airport and offer catalogs are process-wide, read-only tables,
//! initialized once before first use. No writer ever exists, so they
//! can be shared freely across request handlers.

mod airports;
mod offers;

pub use airports::{AirportCatalog, sample_airports};
pub use offers::{OfferCatalog, sample_offers};
