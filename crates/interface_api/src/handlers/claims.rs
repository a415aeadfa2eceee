//! Claims handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use core_kernel::ClaimId;
use domain_claims::ClaimError;

use crate::dto::claims::*;
use crate::extract::JsonObject;
use crate::{AppState, error::ApiError};

/// Resolves a path segment to a claim id; unparseable ids are simply unknown
fn claim_id(raw: &str) -> Result<ClaimId, ApiError> {
    ClaimId::parse_lenient(raw).ok_or_else(|| ClaimError::ClaimNotFound(raw.to_string()).into())
}

/// Creates a new claim in status `OPEN`
pub async fn create_claim(
    State(state): State<AppState>,
    JsonObject(payload): JsonObject,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let claim = state.service.create(&payload)?;
    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Lists claims, optionally filtered by `?status=`
pub async fn list_claims(
    State(state): State<AppState>,
    Query(query): Query<ListClaimsQuery>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let filter = query.status_filter()?;
    let claims = state.service.list(filter);
    Ok(Json(claims.into_iter().map(ClaimResponse::from).collect()))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id = claim_id(&id)?;
    let claim = state.service.get(id)?;
    Ok(Json(claim.into()))
}

/// Advances claim status to its designated successor
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonObject(payload): JsonObject,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id = claim_id(&id)?;
    let claim = state.service.advance_status(id, payload.get("status"))?;
    Ok(Json(claim.into()))
}
