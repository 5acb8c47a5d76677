use axum::{extract::Request, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;

use super::handlers::{device, health, plants, pots, telemetry, AppState};

pub fn create_router(state: AppState) -> Router {
    // Mobile app routes
    let app_routes = Router::new()
        .route(
            "/vegetal",
            get(plants::get_all_plants)
                .post(plants::create_plant)
                .put(plants::update_plant)
                .delete(plants::delete_plant),
        )
        .route(
            "/vaso",
            get(pots::get_all_pots)
                .put(pots::assign_pot)
                .delete(pots::deactivate_pot),
        )
        .route("/informacao", get(telemetry::get_all_telemetry).post(telemetry::ingest_reading));

    // Device routes; PUT /bomba is the app's manual trigger on the same path
    let device_routes = Router::new()
        .route("/bomba", get(device::poll_pumps).put(pots::activate_pump))
        .route("/ativo", get(device::get_active_pots));

    let public_routes = Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check));

    Router::new()
        .merge(public_routes)
        .merge(app_routes)
        .merge(device_routes)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request| {
                        tracing::span!(
                            Level::INFO,
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                        )
                    }),
                )
                .layer(CorsLayer::permissive()),
        )
}
