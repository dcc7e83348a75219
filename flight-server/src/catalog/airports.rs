//! Airport reference catalog.

use std::collections::HashMap;

use crate::domain::{Airport, AirportCode};

/// Read-only airport lookup.
///
/// Built once before first use and never mutated; iteration order is
/// the registration order, which is what the search form displays.
#[derive(Debug, Clone)]
pub struct AirportCatalog {
    airports: Vec<Airport>,
    by_code: HashMap<AirportCode, usize>,
}

impl AirportCatalog {
    /// Build a catalog from airport records.
    ///
    /// If the same code appears twice, the first registration wins.
    pub fn new(airports: Vec<Airport>) -> Self {
        let mut by_code = HashMap::with_capacity(airports.len());
        for (idx, airport) in airports.iter().enumerate() {
            by_code.entry(airport.code).or_insert(idx);
        }
        Self { airports, by_code }
    }

    /// Look up an airport by code.
    ///
    /// A code not in the catalog is not an error; callers fall back to
    /// displaying the raw code.
    pub fn get(&self, code: &AirportCode) -> Option<&Airport> {
        self.by_code.get(code).map(|&idx| &self.airports[idx])
    }

    /// All airports in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }

    /// Number of airports in the catalog.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

/// The built-in airport catalog.
///
/// In production this would come from a reference-data service; the
/// sample set matches the destinations served by the offer catalog.
pub fn sample_airports() -> AirportCatalog {
    fn airport(code: &str, name: &str, city: &str) -> Airport {
        // Codes here are compile-time constants; parse cannot fail.
        Airport::new(AirportCode::parse(code).unwrap(), name, city)
    }

    AirportCatalog::new(vec![
        airport("WAW", "Warsaw Chopin Airport", "Warsaw"),
        airport("LHR", "London Heathrow", "London"),
        airport("CDG", "Charles de Gaulle", "Paris"),
        airport("ORD", "O'Hare International", "Chicago"),
        airport("LAS", "McCarran International", "Las Vegas"),
        airport("JFK", "John F. Kennedy International", "New York"),
        airport("MBJ", "Sangster International", "Montego Bay"),
        airport("AMS", "Amsterdam Airport Schiphol", "Amsterdam"),
        airport("TXL", "Berlin Tegel", "Berlin"),
        airport("HND", "Haneda Airport", "Tokyo"),
        airport("SFR", "San Francisco International", "San Francisco"),
        airport("CUN", "Cancún International", "Cancún"),
        airport("DEL", "Indira Gandhi International", "Delhi"),
        airport("TQO", "Tulum International", "Tulum"),
    ])
}
