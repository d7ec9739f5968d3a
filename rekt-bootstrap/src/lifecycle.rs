use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use rekt_application::queries::dashboard_queries;
use rekt_application::AppState;
use rekt_domain::LimitQuery;
use rekt_interfaces_http::build_router;

use rekt_infrastructure::{AppConfig, ConfigFileRepository};

use crate::context::{export_taxonomy, AppContext};

fn build_router_with_layers(state: AppState) -> Router {
    build_router(state.clone())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(
            usize::try_from(state.config.max_body_bytes).unwrap_or(usize::MAX),
        ))
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            state.config.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_standalone() -> Result<()> {
    let context = AppContext::new().await?;
    let state = context.state;

    let app = build_router_with_layers(state.clone());
    let addr: std::net::SocketAddr = state.config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Fetches once, prints the dashboard as pretty JSON on stdout and returns.
pub async fn run_snapshot(limit: Option<usize>) -> Result<()> {
    let context = AppContext::new().await?;
    let dashboard = dashboard_queries::build_dashboard(&context.state, LimitQuery { limit }).await?;
    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}

/// Saves the resolved category taxonomy to `path` so it can be edited and
/// pointed at with `taxonomy_path`.
pub async fn run_write_taxonomy(path: &str) -> Result<()> {
    let config = AppConfig::load().await?;
    export_taxonomy(&config, &ConfigFileRepository::new(), path).await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
