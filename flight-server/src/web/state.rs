//! Application state for the web layer.

use std::sync::Arc;

use crate::search::RouteResolver;

use super::config::SiteContext;

/// Shared application state.
///
/// The resolver owns the read-only catalogs; no handler ever mutates
/// anything here.
#[derive(Clone)]
pub struct AppState {
    /// Route resolver over the airport and offer catalogs
    pub resolver: Arc<RouteResolver>,

    /// Site context (authoring flag, language/prefix overrides)
    pub site: Arc<SiteContext>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(resolver: RouteResolver, site: SiteContext) -> Self {
        Self {
            resolver: Arc::new(resolver),
            site: Arc::new(site),
        }
    }
}
