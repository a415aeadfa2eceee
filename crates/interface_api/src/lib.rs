//! HTTP API Layer
//!
//! This crate exposes the claims service over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims, health and API docs
//! - **Extract**: Lenient JSON body decoding
//! - **Middleware**: Request audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{claim_service, create_router};
//!
//! let service = claim_service(&config);
//! let app = create_router(service, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::{seed, ClaimService, ClaimStore};

use crate::config::ApiConfig;
use crate::handlers::{claims, docs, health};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: ClaimService,
    pub config: ApiConfig,
}

/// Builds the claim service, seeding the demonstration claims when enabled
pub fn claim_service(config: &ApiConfig) -> ClaimService {
    let store = if config.seed_sample_claims {
        ClaimStore::with_claims(seed::sample_claims())
    } else {
        ClaimStore::new()
    };
    tracing::info!(claims = store.len(), "Claim store initialized");
    ClaimService::new(Arc::new(store))
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Claim service backed by its store
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(service: ClaimService, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    Router::new()
        .route("/health", get(health::health_check))
        .route("/claims", get(claims::list_claims).post(claims::create_claim))
        .route("/claims/:id", get(claims::get_claim).patch(claims::update_status))
        .route("/api-docs", get(docs::docs_page))
        .route("/api-docs/openapi.json", get(docs::openapi_document))
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
