//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::FlightOffer;

/// Raw search parameters, as they arrive in a query string.
///
/// Everything is optional at this layer; validation happens when a
/// `SearchQuery` is built from these values.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Origin airport code
    pub from: Option<String>,

    /// Destination airport code
    pub to: Option<String>,

    /// ISO calendar date (informational only)
    pub date: Option<String>,

    /// Path of the page the search was submitted from
    pub path: Option<String>,
}

impl SearchParams {
    /// A parameter counts as provided only when non-empty after trimming.
    pub fn provided(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}

/// Form body for selecting an offer.
#[derive(Debug, Deserialize)]
pub struct SelectForm {
    /// Offer id from the chosen card
    pub id: String,
}

/// JSON confirmation of a selection.
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    /// Confirmation summary
    pub message: String,

    /// The full selected offer
    pub offer: FlightOffer,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
