//! Flight offer records.

use serde::Serialize;

use super::{AirportCode, RouteKey};

/// A bookable one-way flight offer.
///
/// Offers are immutable catalog records. Departure and arrival times are
/// display-formatted local times exactly as the catalog supplies them;
/// there is no timezone modeling. The order offers are registered in is
/// the order they are presented in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightOffer {
    /// Unique offer id
    pub id: String,

    /// Origin airport code
    pub from: AirportCode,

    /// Destination airport code
    pub to: AirportCode,

    /// Origin display name, e.g. "Amsterdam"
    pub from_name: String,

    /// Destination display name, e.g. "Tulum"
    pub to_name: String,

    /// Local departure time, display-formatted (e.g. "5:15 PM")
    pub departure_time: String,

    /// Local arrival time, display-formatted
    pub arrival_time: String,

    /// Fare per passenger; non-negative, rendered with two decimals
    pub price: f64,

    /// Fare tier label, e.g. "Standard" or "Business"
    pub class: String,

    /// Destination image asset URL
    pub image: String,
}

impl FlightOffer {
    /// The route key this offer is registered under.
    pub fn route_key(&self) -> RouteKey {
        RouteKey::new(self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AirportCode;

    #[test]
    fn route_key_matches_endpoints() {
        let offer = FlightOffer {
            id: "1".into(),
            from: AirportCode::parse("AMS").unwrap(),
            to: AirportCode::parse("TQO").unwrap(),
            from_name: "Amsterdam".into(),
            to_name: "Tulum".into(),
            departure_time: "5:15 PM".into(),
            arrival_time: "3:30 AM".into(),
            price: 550.0,
            class: "Standard".into(),
            image: "https://example.com/tulum.jpg".into(),
        };

        assert_eq!(offer.route_key().to_string(), "AMS-TQO");
    }
}
