use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::http::Method;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use backend_application::AppState;
use backend_domain::LogFeed;
use backend_infrastructure::{schedule_dashboard_refresh, HttpLogFeed};
use backend_interfaces_http::build_router;

use crate::context::AppContext;

fn build_router_with_layers(state: AppState) -> Router {
    build_router(state.clone())
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_origin(Any),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.request_timeout_seconds.max(1),
        )))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_standalone(allow_missing_db_config: bool) -> Result<()> {
    let context = AppContext::new(allow_missing_db_config).await?;
    let state = context.state;

    let app = build_router_with_layers(state.clone());
    let addr: std::net::SocketAddr = state.config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    // The dashboard polls this server's own /api/logs by default, so the
    // poller starts only once the listener is bound.
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    let feed: Arc<dyn LogFeed> = Arc::new(HttpLogFeed::new(
        state.config.logs_url.clone(),
        Duration::from_secs(state.config.request_timeout_seconds.max(1)),
    )?);
    let refresher = tokio::spawn(schedule_dashboard_refresh(
        state.clone(),
        feed,
        shutdown_rx,
    ));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            info!("shutdown signal received");
            let _ = shutdown_tx.send(());
        })
        .await?;

    let _ = refresher.await;
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
                tracing::warn!("sigterm handler unavailable: {}", err);
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
}
