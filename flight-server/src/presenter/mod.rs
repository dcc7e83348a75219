//! Results presentation.
//!
//! Turns a resolved route into a [`RenderPlan`]: a presentation-ready
//! description of what the results view should display, independent of
//! any rendering technology. The web layer renders plans as HTML or
//! JSON; the derivation itself is pure and synchronous — the catalogs
//! are resident in memory, so there is no loading state and no retry.

mod select;

pub use select::{Command, SelectionConfirmed, handle_command};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{AirportCode, FlightOffer};
use crate::search::RouteMatch;

/// Fixed disclaimer shown above every populated results list.
pub const DISCLAIMER: &str = "Presented fares are per passenger, including fees and taxes. \
     Additional services and amenities may vary per flight or change in time.";

/// An ephemeral search query carried via URL parameters.
///
/// Constructed fresh per page load, never persisted. The `date` is
/// informational only: it is echoed in the empty-state message but
/// never filters offers (any date is accepted once the airport pair
/// matches).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    pub from: AirportCode,
    pub to: AirportCode,
    pub date: Option<NaiveDate>,
}

impl SearchQuery {
    /// Build a query from raw URL parameter values.
    ///
    /// Returns `None` when origin or destination is absent or not a
    /// normalizable 3-letter code; that is the guidance state, not an
    /// error. An unparseable date is treated as absent.
    pub fn from_params(from: Option<&str>, to: Option<&str>, date: Option<&str>) -> Option<Self> {
        let from = AirportCode::parse_normalized(from?).ok()?;
        let to = AirportCode::parse_normalized(to?).ok()?;
        let date = date.and_then(|d| d.parse::<NaiveDate>().ok());

        Some(Self { from, to, date })
    }
}

/// The resolved, presentation-ready description of a results view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum RenderPlan {
    /// No usable search parameters: direct the user back to the form.
    /// Distinct from the zero-results state.
    Guidance(GuidanceView),

    /// A valid pair with no offers registered for it.
    NoFlights(NoFlightsView),

    /// One card per offer, in catalog order.
    Results(ResultsView),
}

/// Guidance back to the search surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidanceView {
    pub message: String,
    pub hint: String,
    pub back_href: String,
}

/// Empty-state view for a route with no offers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoFlightsView {
    pub message: String,
    pub suggestion: String,
    pub back_href: String,
}

/// Populated results view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub title: String,
    pub disclaimer: String,
    pub cards: Vec<OfferCard>,
}

/// One offer, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferCard {
    /// Offer id, carried by the selection action
    pub offer_id: String,

    /// Destination image URL
    pub image: String,

    /// Image alt text, e.g. "Tulum destination"
    pub image_alt: String,

    /// E.g. "Amsterdam (AMS) to Tulum (TQO)"
    pub route_description: String,

    /// Origin code and departure time
    pub departure: TimeEntry,

    /// Destination code and arrival time
    pub arrival: TimeEntry,

    /// Fare tier label
    pub fare_class: String,

    /// E.g. "$550.00"
    pub price_display: String,
}

/// An airport code paired with a display time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub airport: String,
    pub time: String,
}

/// The guidance plan for a results page opened without parameters.
pub fn guidance() -> RenderPlan {
    RenderPlan::Guidance(GuidanceView {
        message: "Please provide flight search parameters.".into(),
        hint: "Use the flight search form to find flights.".into(),
        back_href: "/".into(),
    })
}

/// Derive the render plan for a resolved route.
pub fn present(matched: &RouteMatch, query: &SearchQuery) -> RenderPlan {
    if matched.offers.is_empty() {
        return RenderPlan::NoFlights(no_flights_view(query));
    }

    let from_city = city_or_code(matched.from_airport.as_ref().map(|a| a.city.as_str()), query.from);
    let to_city = city_or_code(matched.to_airport.as_ref().map(|a| a.city.as_str()), query.to);

    RenderPlan::Results(ResultsView {
        title: format!("One-Way connections from {from_city} to {to_city}"),
        disclaimer: DISCLAIMER.into(),
        cards: matched.offers.iter().map(offer_card).collect(),
    })
}

fn no_flights_view(query: &SearchQuery) -> NoFlightsView {
    let date_clause = query
        .date
        .map(|d| format!(" on {}", format_date(d)))
        .unwrap_or_default();

    NoFlightsView {
        message: format!(
            "No flights found for {} to {}{}",
            query.from, query.to, date_clause
        ),
        suggestion: "Please try different airports or dates.".into(),
        back_href: "/".into(),
    }
}

/// Build the display card for a single offer.
pub fn offer_card(offer: &FlightOffer) -> OfferCard {
    OfferCard {
        offer_id: offer.id.clone(),
        image: offer.image.clone(),
        image_alt: format!("{} destination", offer.to_name),
        route_description: format!(
            "{} ({}) to {} ({})",
            offer.from_name, offer.from, offer.to_name, offer.to
        ),
        departure: TimeEntry {
            airport: offer.from.to_string(),
            time: offer.departure_time.clone(),
        },
        arrival: TimeEntry {
            airport: offer.to.to_string(),
            time: offer.arrival_time.clone(),
        },
        fare_class: offer.class.clone(),
        price_display: format_price(offer.price),
    }
}

fn city_or_code(city: Option<&str>, code: AirportCode) -> String {
    city.map(str::to_owned).unwrap_or_else(|| code.to_string())
}

/// Format a calendar date as `MM/DD/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Format a fare as `$` plus the amount with exactly two decimals.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_airports, sample_offers};
    use crate::search::RouteResolver;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn resolver() -> RouteResolver {
        RouteResolver::new(sample_airports(), sample_offers())
    }

    fn query(from: &str, to: &str, date: Option<&str>) -> SearchQuery {
        SearchQuery::from_params(Some(from), Some(to), date).unwrap()
    }

    #[test]
    fn query_from_params_requires_both_codes() {
        assert!(SearchQuery::from_params(None, Some("TQO"), None).is_none());
        assert!(SearchQuery::from_params(Some("AMS"), None, None).is_none());
        assert!(SearchQuery::from_params(None, None, None).is_none());
    }

    #[test]
    fn query_from_params_rejects_malformed_codes() {
        assert!(SearchQuery::from_params(Some("AMST"), Some("TQO"), None).is_none());
        assert!(SearchQuery::from_params(Some("AMS"), Some("T1"), None).is_none());
    }

    #[test]
    fn query_from_params_normalizes_case() {
        let q = SearchQuery::from_params(Some("ams"), Some("tqo"), None).unwrap();
        assert_eq!(q.from.as_str(), "AMS");
        assert_eq!(q.to.as_str(), "TQO");
    }

    #[test]
    fn query_from_params_tolerates_bad_date() {
        let q = SearchQuery::from_params(Some("AMS"), Some("TQO"), Some("not-a-date")).unwrap();
        assert!(q.date.is_none());

        let q = SearchQuery::from_params(Some("AMS"), Some("TQO"), Some("2025-05-01")).unwrap();
        assert_eq!(q.date, Some(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()));
    }

    #[test]
    fn populated_plan_for_known_route() {
        let q = query("AMS", "TQO", None);
        let matched = resolver().resolve(q.from, q.to);
        let plan = present(&matched, &q);

        let RenderPlan::Results(view) = plan else {
            panic!("expected populated results");
        };
        assert_eq!(view.title, "One-Way connections from Amsterdam to Tulum");
        assert_eq!(view.disclaimer, DISCLAIMER);
        assert_eq!(view.cards.len(), 2);

        let first = &view.cards[0];
        assert_eq!(first.route_description, "Amsterdam (AMS) to Tulum (TQO)");
        assert_eq!(first.image_alt, "Tulum destination");
        assert_eq!(first.departure.airport, "AMS");
        assert_eq!(first.departure.time, "5:15 PM");
        assert_eq!(first.arrival.airport, "TQO");
        assert_eq!(first.arrival.time, "3:30 AM");
        assert_eq!(first.fare_class, "Standard");
        assert_eq!(first.price_display, "$550.00");

        assert_eq!(view.cards[1].price_display, "$625.00");
        assert_eq!(view.cards[1].fare_class, "Business");
    }

    #[test]
    fn title_falls_back_to_raw_codes_on_catalog_miss() {
        // A route registered under codes the airport catalog doesn't know.
        let matched = RouteMatch {
            offers: resolver().resolve(code("AMS"), code("TQO")).offers,
            from_airport: None,
            to_airport: None,
        };
        let q = query("AMS", "TQO", None);

        let RenderPlan::Results(view) = present(&matched, &q) else {
            panic!("expected populated results");
        };
        assert_eq!(view.title, "One-Way connections from AMS to TQO");
    }

    #[test]
    fn empty_plan_without_date() {
        let q = query("WAW", "LAS", None);
        let matched = resolver().resolve(q.from, q.to);

        let RenderPlan::NoFlights(view) = present(&matched, &q) else {
            panic!("expected empty state");
        };
        assert_eq!(view.message, "No flights found for WAW to LAS");
        assert_eq!(view.suggestion, "Please try different airports or dates.");
        assert_eq!(view.back_href, "/");
    }

    #[test]
    fn empty_plan_with_date_clause() {
        let q = query("WAW", "LAS", Some("2025-05-01"));
        let matched = resolver().resolve(q.from, q.to);

        let RenderPlan::NoFlights(view) = present(&matched, &q) else {
            panic!("expected empty state");
        };
        assert_eq!(view.message, "No flights found for WAW to LAS on 05/01/2025");
    }

    #[test]
    fn date_never_filters_offers() {
        let dated = query("AMS", "TQO", Some("1999-01-01"));
        let matched = resolver().resolve(dated.from, dated.to);

        let RenderPlan::Results(view) = present(&matched, &dated) else {
            panic!("expected populated results despite the date");
        };
        assert_eq!(view.cards.len(), 2);
    }

    #[test]
    fn guidance_plan_is_distinct_from_empty() {
        let plan = guidance();
        let RenderPlan::Guidance(view) = &plan else {
            panic!("expected guidance");
        };
        assert_eq!(view.message, "Please provide flight search parameters.");
        assert_eq!(view.back_href, "/");

        let q = query("WAW", "LAS", None);
        let matched = resolver().resolve(q.from, q.to);
        assert_ne!(plan, present(&matched, &q));
    }

    #[test]
    fn date_formatting_is_mm_dd_yyyy() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert_eq!(format_date(date), "05/01/2025");

        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_date(date), "12/31/2025");
    }

    #[test]
    fn price_formatting_always_two_decimals() {
        assert_eq!(format_price(550.0), "$550.00");
        assert_eq!(format_price(625.5), "$625.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1234.567), "$1234.57");
    }

    #[test]
    fn plan_serializes_with_view_tag() {
        let json = serde_json::to_value(guidance()).unwrap();
        assert_eq!(json["view"], "guidance");
        assert_eq!(json["message"], "Please provide flight search parameters.");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Prices always render with a dollar sign and two decimals.
        #[test]
        fn price_always_two_decimals(price in 0.0f64..1_000_000.0) {
            let display = format_price(price);
            prop_assert!(display.starts_with('$'));
            let decimals = display.rsplit('.').next().unwrap();
            prop_assert_eq!(decimals.len(), 2);
        }

        /// Date formatting is always 10 characters with slashes in place.
        #[test]
        fn date_always_mm_dd_yyyy(year in 1970i32..2100, month in 1u32..=12, day in 1u32..=28) {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let display = format_date(date);
            prop_assert_eq!(display.len(), 10);
            prop_assert_eq!(display.as_bytes()[2], b'/');
            prop_assert_eq!(display.as_bytes()[5], b'/');
        }
    }
}
