//! # HTTP Server
//!
//! Builds the application router and runs it until shutdown.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::config::ServerConfig;
use super::fruit_routes::{fruit_routes, not_found_handler, AppState};
use super::method_override::method_override;
use super::observability_routes::health_routes;
use crate::observability::Logger;
use crate::store::FruitStore;

/// HTTP server for the fruit pages
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an already connected store
    pub fn new(config: ServerConfig, store: Arc<dyn FruitStore>) -> Self {
        let router = Self::build_router(AppState::new(store));
        Self { config, router }
    }

    /// Build the complete application
    ///
    /// The routes are mounted as the fallback of an otherwise empty router
    /// so that method override sees each request before route matching.
    pub fn build_router(state: AppState) -> Router {
        let routes = Router::new()
            .merge(health_routes())
            .merge(fruit_routes())
            .fallback(not_found_handler)
            .with_state(state);

        Router::new()
            .fallback_service(routes)
            .layer(middleware::from_fn(method_override))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C or SIGTERM, then let in-flight requests finish
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?.to_string();
        let url = format!("http://{}", addr);

        Logger::info("SERVER_LISTENING", &[("addr", &addr[..]), ("url", &url[..])]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::info("SERVER_SHUTDOWN", &[("addr", &addr[..])]);
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            Logger::warn("SIGNAL_HANDLER_FAILED", &[("error", e.to_string().as_str())]);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                Logger::warn("SIGNAL_HANDLER_FAILED", &[("error", e.to_string().as_str())]);
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
