//! Site context configuration.

use crate::navigation::PathDetails;

/// How the hosting environment classifies and decorates page paths.
///
/// The authoring flag and any language/prefix overrides come from the
/// environment at startup; when no override is set, language details
/// are derived from the page path itself.
#[derive(Debug, Clone, Default)]
pub struct SiteContext {
    /// Whether pages are served in the CMS authoring (preview) context
    pub authoring: bool,

    /// Forced language code, overriding path detection
    pub lang_code: Option<String>,

    /// Forced site prefix, used together with `lang_code`
    pub prefix: Option<String>,
}

impl SiteContext {
    /// Read the site context from the environment.
    ///
    /// * `FLIGHT_AUTHORING` — "1" or "true" enables the authoring context
    /// * `FLIGHT_LANG` — forces a language code (e.g. "en")
    /// * `FLIGHT_PREFIX` — site prefix used with the forced language
    pub fn from_env() -> Self {
        let authoring = std::env::var("FLIGHT_AUTHORING")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            authoring,
            lang_code: std::env::var("FLIGHT_LANG").ok().filter(|v| !v.is_empty()),
            prefix: std::env::var("FLIGHT_PREFIX").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Path details for a given page path.
    ///
    /// An environment override wins; otherwise the details are derived
    /// from the path.
    pub fn details_for(&self, path: &str) -> PathDetails {
        match &self.lang_code {
            Some(lang) => PathDetails {
                lang_code: Some(lang.clone()),
                prefix: self.prefix.clone(),
            },
            None => PathDetails::from_path(path),
        }
    }
}
