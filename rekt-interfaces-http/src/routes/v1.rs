use axum::routing::get;
use axum::Router;

use rekt_application::AppState;

use crate::handlers::{incident_handlers, ops_handlers, stats_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/rekts", get(incident_handlers::list_incidents))
        .route("/v1/rekts/summaries", get(incident_handlers::list_summaries))
        .route("/v1/rekts/search", get(incident_handlers::search_incidents))
        .route("/v1/chains", get(incident_handlers::list_chains))
        .route("/v1/dashboard", get(stats_handlers::get_dashboard))
        .route("/v1/stats/group", get(stats_handlers::group_stats))
        .route("/v1/stats/trend", get(stats_handlers::trend_stats))
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
