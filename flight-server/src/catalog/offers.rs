//! Flight offer catalog.

use std::collections::HashMap;

use crate::domain::{AirportCode, FlightOffer, RouteKey};

/// Read-only offer lookup, keyed by route.
///
/// Offers on the same route keep the order they were registered in;
/// that order is the presentation order (the first offer listed is not
/// necessarily the cheapest).
#[derive(Debug, Clone)]
pub struct OfferCatalog {
    routes: HashMap<RouteKey, Vec<FlightOffer>>,
}

impl OfferCatalog {
    /// Build a catalog from offer records, grouping by route key.
    pub fn new(offers: Vec<FlightOffer>) -> Self {
        let mut routes: HashMap<RouteKey, Vec<FlightOffer>> = HashMap::new();
        for offer in offers {
            routes.entry(offer.route_key()).or_default().push(offer);
        }
        Self { routes }
    }

    /// Offers registered under a route, in registration order.
    ///
    /// A route with no offers yields an empty slice, never an error.
    pub fn for_route(&self, key: &RouteKey) -> &[FlightOffer] {
        self.routes.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up a single offer by id, across all routes.
    pub fn by_id(&self, id: &str) -> Option<&FlightOffer> {
        self.routes
            .values()
            .flat_map(|offers| offers.iter())
            .find(|offer| offer.id == id)
    }

    /// Number of distinct routes with at least one offer.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

/// The built-in offer catalog.
///
/// In production this would come from an inventory API; the sample set
/// mirrors the one-way connections the original site ships with.
pub fn sample_offers() -> OfferCatalog {
    #[allow(clippy::too_many_arguments)]
    fn offer(
        id: &str,
        from: &str,
        to: &str,
        from_name: &str,
        to_name: &str,
        departure_time: &str,
        arrival_time: &str,
        price: f64,
        class: &str,
        image: &str,
    ) -> FlightOffer {
        FlightOffer {
            id: id.into(),
            from: AirportCode::parse(from).unwrap(),
            to: AirportCode::parse(to).unwrap(),
            from_name: from_name.into(),
            to_name: to_name.into(),
            departure_time: departure_time.into(),
            arrival_time: arrival_time.into(),
            price,
            class: class.into(),
            image: image.into(),
        }
    }

    OfferCatalog::new(vec![
        offer(
            "1", "AMS", "TQO", "Amsterdam", "Tulum",
            "5:15 PM", "3:30 AM", 550.00, "Standard",
            "https://t4.ftcdn.net/jpg/03/30/53/47/240_F_330534715_1vke3762QI4yYRsnSXNaE8NGDUF8xzno.jpg",
        ),
        offer(
            "2", "AMS", "TQO", "Amsterdam", "Tulum",
            "8:30 AM", "6:45 PM", 625.00, "Business",
            "https://t3.ftcdn.net/jpg/17/40/03/60/240_F_1740036054_pyNaH8LuAe27d9KpFTZSjNAY844g6WJV.jpg",
        ),
        offer(
            "3", "WAW", "TQO", "Warsaw", "Tulum",
            "10:00 AM", "8:15 PM", 680.00, "Standard",
            "https://t4.ftcdn.net/jpg/16/22/86/51/240_F_1622865138_g9NtaEIxizg8ZY1bpNCqJiqbQl9mqFvB.jpg",
        ),
        offer(
            "4", "LHR", "TQO", "London", "Tulum",
            "2:00 PM", "11:30 PM", 720.00, "Standard",
            "https://t4.ftcdn.net/jpg/09/33/35/09/240_F_933350998_f9ATUKob9OVKFGS0zNetT28Ub4NTSwEN.jpg",
        ),
        offer(
            "5", "JFK", "TQO", "New York", "Tulum",
            "9:00 AM", "1:30 PM", 450.00, "Standard",
            "https://t3.ftcdn.net/jpg/05/61/35/04/240_F_561350476_Oz0OHoStNdPdsiDVY6K2DQG2SqyYlSgI.jpg",
        ),
    ])
}
