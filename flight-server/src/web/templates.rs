//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Airport;
use crate::presenter::{GuidanceView, NoFlightsView, OfferCard, ResultsView};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Search page with the flight search form.
///
/// When the page is opened with a full set of query parameters, the
/// lookup runs immediately and `results`/`no_flights` carry the
/// inline outcome.
#[derive(Template)]
#[template(path = "index.html")]
pub struct SearchPageTemplate {
    pub airports: Vec<AirportOptionView>,
    pub form: SearchFormView,
    pub validation: Option<String>,
    pub results: Option<ResultsView>,
    pub no_flights: Option<NoFlightsView>,
}

/// Results page, populated state.
#[derive(Template)]
#[template(path = "flights_results.html")]
pub struct FlightResultsTemplate {
    pub view: ResultsView,
}

/// Results page, empty state.
#[derive(Template)]
#[template(path = "flights_empty.html")]
pub struct NoFlightsTemplate {
    pub view: NoFlightsView,
}

/// Results page, guidance state (no usable parameters).
#[derive(Template)]
#[template(path = "flights_guidance.html")]
pub struct GuidanceTemplate {
    pub view: GuidanceView,
}

/// Selection confirmation page.
#[derive(Template)]
#[template(path = "confirmation.html")]
pub struct ConfirmationTemplate {
    pub message: String,
    pub card: OfferCard,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Airport entry for the search form dropdowns.
#[derive(Debug, Clone)]
pub struct AirportOptionView {
    pub code: String,
    pub name: String,
    pub city: String,
}

impl AirportOptionView {
    /// Create from a catalog Airport.
    pub fn from_airport(airport: &Airport) -> Self {
        Self {
            code: airport.code.to_string(),
            name: airport.name.clone(),
            city: airport.city.clone(),
        }
    }

    /// Dropdown label, e.g. "AMS — Amsterdam (Amsterdam Airport Schiphol)".
    pub fn label(&self) -> String {
        format!("{} — {} ({})", self.code, self.city, self.name)
    }
}

/// Current form field values, echoed back into the inputs.
#[derive(Debug, Clone, Default)]
pub struct SearchFormView {
    pub from: String,
    pub to: String,
    pub date: String,
    /// Page path carried through the form for URL derivation
    pub path: String,
}
