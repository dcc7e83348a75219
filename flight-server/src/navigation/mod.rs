//! Results-page URL generation.
//!
//! The search surface and the results surface share no process state;
//! their only contract is the URL produced here. The target path
//! depends on which of three mutually exclusive shapes the current
//! location has: an authoring (CMS preview) path, a live path with a
//! detected language segment, or a plain live path.

use crate::presenter::SearchQuery;

/// Results-page segment on the live site.
const RESULTS_SEGMENT: &str = "flights";

/// Results-page segment in the authoring context, where page paths
/// carry an `.html` extension.
const AUTHORING_RESULTS_SEGMENT: &str = "flights.html";

/// Language and site-prefix context derived from the current URL path.
///
/// Supplied by the hosting environment; see [`PathDetails::from_path`]
/// for the default derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathDetails {
    /// Detected language code, e.g. "en"
    pub lang_code: Option<String>,

    /// Site prefix preceding the language segment, e.g. "/web/site"
    pub prefix: Option<String>,
}

impl PathDetails {
    /// No language, no prefix.
    pub fn none() -> Self {
        Self::default()
    }

    /// Derive language and prefix from a live-site path.
    ///
    /// The first 2-letter lowercase segment is taken as the language
    /// code; any segments before it form the prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::navigation::PathDetails;
    ///
    /// let details = PathDetails::from_path("/en/home");
    /// assert_eq!(details.lang_code.as_deref(), Some("en"));
    /// assert_eq!(details.prefix, None);
    ///
    /// let details = PathDetails::from_path("/web/wknd-fly/home");
    /// assert_eq!(details.lang_code, None);
    /// ```
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let lang_idx = segments
            .iter()
            .position(|s| s.len() == 2 && s.chars().all(|c| c.is_ascii_lowercase()));

        match lang_idx {
            Some(idx) => {
                let prefix = if idx > 0 {
                    Some(format!("/{}", segments[..idx].join("/")))
                } else {
                    None
                };
                Self {
                    lang_code: Some(segments[idx].to_string()),
                    prefix,
                }
            }
            None => Self::none(),
        }
    }
}

/// Build the results-page URL for a search.
///
/// The path derivation is a three-way decision, not a fallback chain:
///
/// 1. Authoring context: the final path segment is replaced with the
///    fixed authoring results segment, preserving everything before it.
/// 2. Live with a detected language: `{prefix}/{lang}/flights`, or
///    `/{lang}/flights` when there is no prefix.
/// 3. Live without a language: the final non-empty segment is replaced
///    with `flights`; a segmentless path yields `/flights`.
///
/// The query string carries `from`, `to`, and — only when present —
/// `date`, in that order, with percent-encoded values.
///
/// # Example
///
/// ```
/// use flight_server::navigation::{PathDetails, build_results_url};
/// use flight_server::presenter::SearchQuery;
///
/// let query = SearchQuery::from_params(Some("AMS"), Some("TQO"), Some("2025-05-01")).unwrap();
/// let details = PathDetails { lang_code: Some("en".into()), prefix: None };
/// let url = build_results_url("/en/home", false, &details, &query);
/// assert_eq!(url, "/en/flights?from=AMS&to=TQO&date=2025-05-01");
/// ```
pub fn build_results_url(
    current_path: &str,
    is_authoring: bool,
    details: &PathDetails,
    query: &SearchQuery,
) -> String {
    let path = if is_authoring {
        replace_last_segment(current_path, AUTHORING_RESULTS_SEGMENT)
    } else if let Some(lang) = details.lang_code.as_deref() {
        match details.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => {
                format!("{prefix}/{lang}/{RESULTS_SEGMENT}")
            }
            _ => format!("/{lang}/{RESULTS_SEGMENT}"),
        }
    } else {
        let trimmed = current_path.trim_end_matches('/');
        if trimmed.is_empty() {
            format!("/{RESULTS_SEGMENT}")
        } else {
            replace_last_segment(trimmed, RESULTS_SEGMENT)
        }
    };

    format!("{path}?{}", query_string(query))
}

/// Build the `from`/`to`/`date` query string for a search.
///
/// Parameter order is fixed; `date` is omitted when absent. This is
/// the exact shape the results surface parses back out.
pub fn query_string(query: &SearchQuery) -> String {
    let mut qs = format!(
        "from={}&to={}",
        urlencoding::encode(query.from.as_str()),
        urlencoding::encode(query.to.as_str()),
    );

    if let Some(date) = query.date {
        let iso = date.format("%Y-%m-%d").to_string();
        qs.push_str(&format!("&date={}", urlencoding::encode(&iso)));
    }

    qs
}

/// Whether a path's final segment is one this module produces as a
/// results-page target.
///
/// The web layer serves any such path (`/en/flights`,
/// `/web/site/en/flights`, `…/flights.html`) from the results page, so
/// every URL [`build_results_url`] can derive has a matching route.
pub fn is_results_path(path: &str) -> bool {
    let last = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    last == RESULTS_SEGMENT || last == AUTHORING_RESULTS_SEGMENT
}

/// Replace the segment after the last `/` with `segment`.
fn replace_last_segment(path: &str, segment: &str) -> String {
    match path.rfind('/') {
        Some(idx) => format!("{}/{}", &path[..idx], segment),
        None => format!("/{segment}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(from: &str, to: &str, date: Option<&str>) -> SearchQuery {
        SearchQuery::from_params(Some(from), Some(to), date).unwrap()
    }

    #[test]
    fn authoring_replaces_final_segment() {
        let url = build_results_url(
            "/content/wknd-fly/language-masters/en/home.html",
            true,
            &PathDetails::none(),
            &query("AMS", "TQO", Some("2025-05-01")),
        );
        assert_eq!(
            url,
            "/content/wknd-fly/language-masters/en/flights.html?from=AMS&to=TQO&date=2025-05-01"
        );
    }

    #[test]
    fn live_with_language_and_no_prefix() {
        let details = PathDetails {
            lang_code: Some("en".into()),
            prefix: None,
        };
        let url = build_results_url(
            "/en/home",
            false,
            &details,
            &query("AMS", "TQO", Some("2025-05-01")),
        );
        assert_eq!(url, "/en/flights?from=AMS&to=TQO&date=2025-05-01");
    }

    #[test]
    fn live_with_language_and_prefix() {
        let details = PathDetails {
            lang_code: Some("en".into()),
            prefix: Some("/web/wknd-fly".into()),
        };
        let url = build_results_url("/web/wknd-fly/en/home", false, &details, &query("AMS", "TQO", None));
        assert_eq!(url, "/web/wknd-fly/en/flights?from=AMS&to=TQO");
    }

    #[test]
    fn live_without_language_replaces_final_segment() {
        let url = build_results_url(
            "/web/wknd-fly/home",
            false,
            &PathDetails::none(),
            &query("AMS", "TQO", Some("2025-05-01")),
        );
        assert_eq!(
            url,
            "/web/wknd-fly/flights?from=AMS&to=TQO&date=2025-05-01"
        );
    }

    #[test]
    fn live_without_language_ignores_trailing_slash() {
        let url = build_results_url("/home/", false, &PathDetails::none(), &query("AMS", "TQO", None));
        assert_eq!(url, "/flights?from=AMS&to=TQO");
    }

    #[test]
    fn segmentless_path_yields_root_flights() {
        for path in ["", "/"] {
            let url = build_results_url(path, false, &PathDetails::none(), &query("AMS", "TQO", None));
            assert_eq!(url, "/flights?from=AMS&to=TQO", "path {path:?}");
        }
    }

    #[test]
    fn date_is_omitted_when_absent() {
        let url = build_results_url("/en/home", false, &PathDetails::none(), &query("WAW", "LAS", None));
        assert_eq!(url, "/en/flights?from=WAW&to=LAS");
    }

    #[test]
    fn parameter_order_is_from_to_date() {
        let qs = query_string(&query("JFK", "TQO", Some("2025-07-04")));
        assert_eq!(qs, "from=JFK&to=TQO&date=2025-07-04");
    }

    #[test]
    fn results_paths_cover_every_built_shape() {
        assert!(is_results_path("/flights"));
        assert!(is_results_path("/en/flights"));
        assert!(is_results_path("/web/wknd-fly/en/flights"));
        assert!(is_results_path(
            "/content/wknd-fly/language-masters/en/flights.html"
        ));
        assert!(is_results_path("/en/flights/"));
    }

    #[test]
    fn non_results_paths_do_not_match() {
        assert!(!is_results_path("/en/home"));
        assert!(!is_results_path("/flights/select"));
        assert!(!is_results_path("/"));
    }

    #[test]
    fn details_from_path_detects_language() {
        let details = PathDetails::from_path("/en/home");
        assert_eq!(details.lang_code.as_deref(), Some("en"));
        assert_eq!(details.prefix, None);
    }

    #[test]
    fn details_from_path_detects_prefixed_language() {
        let details = PathDetails::from_path("/web/wknd-fly/de/home");
        assert_eq!(details.lang_code.as_deref(), Some("de"));
        assert_eq!(details.prefix.as_deref(), Some("/web/wknd-fly"));
    }

    #[test]
    fn details_from_path_without_language() {
        assert_eq!(PathDetails::from_path("/web/wknd-fly/home"), PathDetails::none());
        assert_eq!(PathDetails::from_path("/"), PathDetails::none());
    }
}
