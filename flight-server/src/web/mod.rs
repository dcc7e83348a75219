//! Web layer for the flight search server.
//!
//! Provides the search page, the results page, and the selection
//! endpoint as thin callers over the resolver/presenter core.

mod config;
mod dto;
mod routes;
mod state;
pub mod templates;

pub use config::SiteContext;
pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
