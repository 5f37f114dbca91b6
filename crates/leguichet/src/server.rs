//! Server instance management

use axum::Router;
use http::{header, Method};
use leconcierge::{Catalog, Concierge};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::handlers::{create_router, AppState};

/// LeGuichet HTTP server
///
/// Owns the validated configuration and the concierge engine. Catalog and
/// configuration problems surface from `new`, before anything binds.
pub struct GuichetServer {
    /// Server configuration
    config: ServerConfig,

    /// Matching engine shared with every handler
    concierge: Arc<Concierge>,
}

impl GuichetServer {
    /// Create new server instance, loading the configured catalog
    pub fn new(config: ServerConfig) -> Result<Self, ApiError> {
        if let Err(e) = config.validate() {
            return Err(ApiError::internal(format!("Invalid config: {}", e)));
        }

        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path),
            None => Catalog::sample(),
        }
        .map_err(|e| {
            error!("Failed to load catalog: {}", e);
            ApiError::from(e)
        })?;

        Ok(Self::with_concierge(config, Arc::new(Concierge::new(catalog))))
    }

    /// Create a server around an existing engine
    pub fn with_concierge(config: ServerConfig, concierge: Arc<Concierge>) -> Self {
        Self { config, concierge }
    }

    /// Get socket address for binding
    pub fn socket_addr(&self) -> Result<SocketAddr, ApiError> {
        self.config
            .socket_addr()
            .map_err(|e| ApiError::internal(format!("Failed to parse address: {}", e)))
    }

    /// Build the application router with state and middleware
    pub fn router(&self) -> Result<Router, ApiError> {
        let state = AppState::new(Arc::clone(&self.concierge), self.config.clone());

        let origins = self
            .config
            .cors_header_values()
            .map_err(ApiError::internal)?;
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        let app = create_router().with_state(state).layer(cors);

        if self.config.enable_logging {
            Ok(app.layer(TraceLayer::new_for_http()))
        } else {
            Ok(app)
        }
    }

    /// Start server and run until a shutdown signal arrives
    pub async fn start(&self) -> Result<(), ApiError> {
        let addr = self.socket_addr()?;
        let app = self.router()?;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| {
                error!("Failed to bind to {}: {:?}", addr, e);
                ApiError::internal(format!("Failed to bind to {}: {}", addr, e))
            })?;

        info!("Server listening on: {}", self.server_url());

        axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_shutdown())
            .await
            .map_err(|e| ApiError::internal(format!("Server error: {}", e)))
    }

    /// Shared engine handle
    #[must_use]
    pub fn concierge(&self) -> Arc<Concierge> {
        Arc::clone(&self.concierge)
    }

    /// Get server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        self.config.server_url()
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn wait_for_shutdown() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received shutdown signal"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix;
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received TERM signal");
            }
            Err(e) => {
                error!("Failed to install TERM handler: {}", e);
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
