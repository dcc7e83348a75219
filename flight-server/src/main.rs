use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use flight_server::catalog::{sample_airports, sample_offers};
use flight_server::search::RouteResolver;
use flight_server::web::{AppState, SiteContext, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Site context from environment (authoring flag, language overrides)
    let site = SiteContext::from_env();

    // Build the read-only catalogs and the resolver over them
    let airports = sample_airports();
    let offers = sample_offers();
    println!(
        "Loaded {} airports and {} routes",
        airports.len(),
        offers.route_count()
    );

    let resolver = RouteResolver::new(airports, offers);

    // Build app state
    let state = AppState::new(resolver, site);

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Flight Search listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the search form.");
    println!();
    println!("Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  GET  /search          - Validate and redirect to results");
    println!("  GET  /flights         - Results page (HTML or JSON)");
    println!("  POST /flights/select  - Select an offer");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
