//! HTTP handlers for REST endpoints

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::Uri,
    routing::get,
    Json, Router,
};
use leconcierge::{Concierge, IntentPlan, PropertyDigest, QuickPrompt, TimelineEvent};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::sanitize::sanitize_intent;

/// Query parameters for the inventory endpoint
#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    /// Property to pin in front of the listing
    pub featured: Option<String>,
}

/// Health check body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the server is up
    pub status: String,

    /// Service name
    pub service: String,

    /// Crate version
    pub version: String,

    /// Recommendations in the current catalog
    pub recommendations: usize,
}

/// State shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Engine over the current catalog snapshot
    pub concierge: Arc<Concierge>,

    /// Immutable server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new AppState instance
    pub fn new(concierge: Arc<Concierge>, config: ServerConfig) -> Self {
        Self {
            concierge,
            config: Arc::new(config),
        }
    }
}

/// GET /api/health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        service: "leguichet".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        recommendations: state.concierge.snapshot().recommendation_count(),
    }))
}

/// GET /api/intent - Plan for the empty intent
pub async fn default_plan(State(state): State<AppState>) -> ApiResult<Json<IntentPlan>> {
    Ok(Json(state.concierge.generate_plan(None)))
}

/// POST /api/intent - Plan for `{ "intent": "..." }`
///
/// The body is parsed by hand so that only unparseable JSON is rejected;
/// any other shape is served as the empty intent.
pub async fn create_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<IntentPlan>> {
    let payload: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejecting intent payload: {}", e);
        ApiError::invalid_json()
    })?;

    let intent = sanitize_intent(payload.get("intent"), state.config.max_intent_length);
    debug!("Planning for intent: '{}'", intent);

    Ok(Json(state.concierge.generate_plan(Some(&intent))))
}

/// GET /api/prompts - Canned intents
pub async fn list_prompts(State(state): State<AppState>) -> ApiResult<Json<Vec<QuickPrompt>>> {
    Ok(Json(state.concierge.list_prompts()))
}

/// GET /api/properties - Ordered property inventory
pub async fn list_properties(
    Query(params): Query<InventoryQuery>,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PropertyDigest>>> {
    info!("Listing properties (featured={:?})", params.featured);
    Ok(Json(state.concierge.order_inventory(params.featured.as_deref())))
}

/// GET /api/properties/:id/timeline - Property timeline
pub async fn get_timeline(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TimelineEvent>>> {
    info!("Getting timeline for property: {}", id);
    Ok(Json(state.concierge.lookup_timeline(&id)))
}

/// Any unmatched route
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path())
}

/// Create router with all API endpoints
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/intent", get(default_plan).post(create_plan))
        .route("/api/prompts", get(list_prompts))
        .route("/api/properties", get(list_properties))
        .route("/api/properties/:id/timeline", get(get_timeline))
        .fallback(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_query_empty() {
        let query: InventoryQuery = serde_json::from_str("{}").unwrap();
        assert!(query.featured.is_none());
    }

    #[tokio::test]
    async fn test_create_plan_rejects_invalid_json() {
        let concierge = Arc::new(Concierge::new(leconcierge::Catalog::sample().unwrap()));
        let state = AppState::new(concierge, ServerConfig::default());

        let err = create_plan(State(state), Bytes::from_static(b"{ intent: "))
            .await
            .unwrap_err();
        assert_eq!(err.code.as_deref(), Some("INVALID_JSON"));
    }
}
