//! Route resolution.
//!
//! The resolver answers one question: which offers exist for a given
//! origin/destination pair, and how should those endpoints be
//! displayed? It is a pure lookup over the immutable catalogs; there
//! is no fuzzy matching, no alternate-route suggestion, and no sorting
//! by price or duration.

use tracing::debug;

use crate::catalog::{AirportCatalog, OfferCatalog};
use crate::domain::{Airport, AirportCode, FlightOffer, RouteKey};

/// The outcome of resolving an origin/destination pair.
///
/// An unknown route yields empty `offers`; an unknown airport code
/// yields `None` for the corresponding display record. Neither is an
/// error.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Matching offers in catalog registration order
    pub offers: Vec<FlightOffer>,

    /// Display record for the origin, if the code is in the catalog
    pub from_airport: Option<Airport>,

    /// Display record for the destination, if the code is in the catalog
    pub to_airport: Option<Airport>,
}

/// Pure route lookup over the injected catalogs.
///
/// Constructed once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct RouteResolver {
    airports: AirportCatalog,
    offers: OfferCatalog,
}

impl RouteResolver {
    /// Create a resolver over the given catalogs.
    pub fn new(airports: AirportCatalog, offers: OfferCatalog) -> Self {
        Self { airports, offers }
    }

    /// Resolve an origin/destination pair to its offers and endpoints.
    pub fn resolve(&self, from: AirportCode, to: AirportCode) -> RouteMatch {
        let key = RouteKey::new(from, to);
        let offers = self.offers.for_route(&key).to_vec();

        debug!(route = %key, matches = offers.len(), "resolved route");

        RouteMatch {
            offers,
            from_airport: self.airports.get(&from).cloned(),
            to_airport: self.airports.get(&to).cloned(),
        }
    }

    /// Look up a single offer by id (used by the selection flow).
    pub fn offer_by_id(&self, id: &str) -> Option<&FlightOffer> {
        self.offers.by_id(id)
    }

    /// The airport catalog (used to populate the search form).
    pub fn airports(&self) -> &AirportCatalog {
        &self.airports
    }
}
