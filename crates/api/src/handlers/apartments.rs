//! Handlers for the `/apartments` resource.
//!
//! Path identifiers are taken as raw strings so that a malformed id is
//! reported with the API's own error body. Extractor rejections are taken as
//! `Result`s for the same reason.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use estate_core::filter::ApartmentFilter;
use estate_db::models::apartment::Apartment;

use crate::error::AppResult;
use crate::listing::ApartmentSubmission;
use crate::query::ListApartmentsParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/apartments
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ListApartmentsParams>, QueryRejection>,
) -> AppResult<Json<Vec<Apartment>>> {
    let Query(params) = params?;
    let filter = ApartmentFilter::parse(
        params.search.as_deref(),
        params.min_price.as_deref(),
        params.max_price.as_deref(),
        params.rooms.as_deref(),
    )?;
    let apartments = state.apartments.list(&filter).await?;
    Ok(Json(apartments))
}

/// GET /api/apartments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Apartment>> {
    let Path(id) = id?;
    Ok(Json(state.apartments.get(&id).await?))
}

/// POST /api/apartments
///
/// Multipart (fields plus `images` files), JSON or urlencoded body.
pub async fn create(
    State(state): State<AppState>,
    submission: ApartmentSubmission,
) -> AppResult<(StatusCode, Json<Apartment>)> {
    let apartment = state
        .apartments
        .create(&submission.form, &submission.files)
        .await?;
    Ok((StatusCode::CREATED, Json(apartment)))
}

/// PATCH /api/apartments/{id}
///
/// Partial update: only submitted fields change. Submitted `images` replace
/// the stored list.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    submission: ApartmentSubmission,
) -> AppResult<Json<Apartment>> {
    let Path(id) = id?;
    let apartment = state
        .apartments
        .update(&id, &submission.form, &submission.files)
        .await?;
    Ok(Json(apartment))
}

/// DELETE /api/apartments/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id?;
    state.apartments.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Apartment deleted successfully.",
    }))
}
