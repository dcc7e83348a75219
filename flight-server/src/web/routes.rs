//! HTTP route handlers.
//!
//! Two page surfaces, connected only through the query string the
//! navigation builder produces: the search page writes it, the results
//! page reads it back.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{OriginalUri, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::info;

use crate::navigation::{build_results_url, is_results_path};
use crate::presenter::{
    Command, GuidanceView, NoFlightsView, RenderPlan, ResultsView, SearchQuery, guidance,
    handle_command, offer_card, present,
};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/search", get(do_search))
        .route("/flights", get(flights_page))
        .route("/flights/select", post(select_offer))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(results_path_dispatch)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Search page.
///
/// Query parameters prefill the form; when `from`, `to` and `date` are
/// all present, the lookup runs immediately and its outcome is
/// rendered inline below the form.
async fn index_page(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let form = SearchFormView {
        from: params.from.clone().unwrap_or_default(),
        to: params.to.clone().unwrap_or_default(),
        date: params.date.clone().unwrap_or_default(),
        path: uri.path().to_string(),
    };

    let mut validation = None;
    let mut results = None;
    let mut no_flights = None;

    let all_present = SearchParams::provided(&params.from).is_some()
        && SearchParams::provided(&params.to).is_some()
        && SearchParams::provided(&params.date).is_some();

    if all_present {
        match SearchQuery::from_params(
            SearchParams::provided(&params.from),
            SearchParams::provided(&params.to),
            SearchParams::provided(&params.date),
        ) {
            Some(query) => {
                let matched = state.resolver.resolve(query.from, query.to);
                match present(&matched, &query) {
                    RenderPlan::Results(view) => results = Some(view),
                    RenderPlan::NoFlights(view) => no_flights = Some(view),
                    RenderPlan::Guidance(_) => {}
                }
            }
            None => validation = Some("Airport codes must be 3 letters, like AMS.".to_string()),
        }
    }

    render_search_page(&state, form, validation, results, no_flights)
}

/// Validate a search submission and redirect to the results page.
///
/// Missing inputs re-render the form with a blocking validation
/// message; no navigation occurs.
async fn do_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let path = SearchParams::provided(&params.path)
        .unwrap_or("/")
        .to_string();

    let form = SearchFormView {
        from: params.from.clone().unwrap_or_default(),
        to: params.to.clone().unwrap_or_default(),
        date: params.date.clone().unwrap_or_default(),
        path: path.clone(),
    };

    let from = SearchParams::provided(&params.from);
    let to = SearchParams::provided(&params.to);
    let (Some(from), Some(to)) = (from, to) else {
        let message = "Please select both From and To airports".to_string();
        return render_search_page(&state, form, Some(message), None, None);
    };

    let Some(date) = SearchParams::provided(&params.date) else {
        let message = "Please select a date".to_string();
        return render_search_page(&state, form, Some(message), None, None);
    };

    let Some(query) = SearchQuery::from_params(Some(from), Some(to), Some(date)) else {
        let message = "Airport codes must be 3 letters, like AMS.".to_string();
        return render_search_page(&state, form, Some(message), None, None);
    };

    let details = state.site.details_for(&path);
    let url = build_results_url(&path, state.site.authoring, &details, &query);
    info!(%url, "search submitted");

    Ok(Redirect::to(&url).into_response())
}

/// Results page.
///
/// Parses the query string written by the search surface, resolves the
/// route, and renders the resulting plan as HTML or JSON.
async fn flights_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let plan = match SearchQuery::from_params(
        SearchParams::provided(&params.from),
        SearchParams::provided(&params.to),
        SearchParams::provided(&params.date),
    ) {
        Some(query) => {
            let matched = state.resolver.resolve(query.from, query.to);
            present(&matched, &query)
        }
        None => guidance(),
    };

    if accepts_html(&headers) {
        let html = match plan {
            RenderPlan::Results(view) => FlightResultsTemplate { view }.render(),
            RenderPlan::NoFlights(view) => NoFlightsTemplate { view }.render(),
            RenderPlan::Guidance(view) => GuidanceTemplate { view }.render(),
        }
        .map_err(template_error)?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(plan).into_response())
    }
}

/// Serve language- and prefix-decorated results paths.
///
/// The search redirect targets whatever path shape the navigation
/// builder derived from the incoming location (`/en/flights`,
/// `/web/site/en/flights`, `…/flights.html`); any unrouted path whose
/// final segment is a results segment is handled by the results page.
async fn results_path_dispatch(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    if is_results_path(uri.path()) {
        return flights_page(State(state), headers, Query(params)).await;
    }

    Err(AppError::NotFound {
        message: format!("No page at {}", uri.path()),
    })
}

/// Handle an offer selection.
///
/// Runs the `SelectOffer` reducer; the confirmation view is the
/// extension point a real booking flow would replace.
async fn select_offer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SelectForm>,
) -> Result<Response, AppError> {
    let command = Command::SelectOffer(form.id.clone());

    match handle_command(&state.resolver, &command) {
        Some(confirmed) => {
            if accepts_html(&headers) {
                let template = ConfirmationTemplate {
                    message: confirmed.message,
                    card: offer_card(&confirmed.offer),
                };
                let html = template.render().map_err(template_error)?;
                Ok(Html(html).into_response())
            } else {
                Ok(Json(SelectionResponse {
                    message: confirmed.message,
                    offer: confirmed.offer,
                })
                .into_response())
            }
        }
        None if accepts_html(&headers) => {
            let view = GuidanceView {
                message: format!("Flight offer {} is no longer available.", form.id),
                hint: "Use the flight search form to find flights.".into(),
                back_href: "/".into(),
            };
            let html = GuidanceTemplate { view }.render().map_err(template_error)?;
            Ok(Html(html).into_response())
        }
        None => Err(AppError::NotFound {
            message: format!("Unknown offer id: {}", form.id),
        }),
    }
}

/// Render the search page with the given form state and inline outcome.
fn render_search_page(
    state: &AppState,
    form: SearchFormView,
    validation: Option<String>,
    results: Option<ResultsView>,
    no_flights: Option<NoFlightsView>,
) -> Result<Response, AppError> {
    let airports = state
        .resolver
        .airports()
        .iter()
        .map(AirportOptionView::from_airport)
        .collect();

    let template = SearchPageTemplate {
        airports,
        form,
        validation,
        results,
        no_flights,
    };
    let html = template.render().map_err(template_error)?;

    Ok(Html(html).into_response())
}

fn template_error(e: askama::Error) -> AppError {
    AppError::Internal {
        message: format!("Template error: {}", e),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
