//! HTTP read API for the scheduling views.
//!
//! Exposes the resolver's projections as JSON endpoints, with structured
//! logging (tracing) and Prometheus metrics. The API is read-only: record
//! writes belong to the administration/profile collaborators, not this
//! surface.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use resolver::ScheduleResolver;
use store::ScheduleStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ScheduleStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/members/{id}/schedule",
            get(routes::schedules::member_schedule::<S>),
        )
        .route("/schedules", get(routes::schedules::list::<S>))
        .route("/events/{id}/roster", get(routes::rosters::event_roster::<S>))
        .route("/rosters", get(routes::rosters::list::<S>))
        .route("/positions", get(routes::rosters::positions::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the shared application state over the given store.
pub fn create_state<S: ScheduleStore>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        resolver: ScheduleResolver::new(store),
    })
}
