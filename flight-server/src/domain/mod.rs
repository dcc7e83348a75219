//! Domain types for the flight search server.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod airport;
mod offer;
mod route;

pub use airport::{Airport, AirportCode, InvalidAirportCode};
pub use offer::FlightOffer;
pub use route::RouteKey;
