//! Handlers for the travel resource.
//!
//! Request bodies and path ids are taken as `Result` extractors so that
//! malformed input is reported with the standard error body instead of
//! axum's plain-text rejections.
//!
//! PUT and PATCH resolve the record before looking at the body: a missing id
//! is always a 404, whatever the payload.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::travel::{TravelPayload, TravelResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all travel records in creation order.
///
/// # Endpoint
///
/// `GET /travels/`
pub async fn list_travels_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TravelResponse>>, AppError> {
    let travels = state.travel_service.list().await?;
    tracing::debug!(count = travels.len(), "Listing travels");

    Ok(Json(
        travels
            .into_iter()
            .map(|t| TravelResponse::from_travel(t, &state.base_url))
            .collect(),
    ))
}

/// Creates a travel record.
///
/// # Endpoint
///
/// `POST /travels/`
///
/// Responds with `201 Created` and a `Location` header pointing at the new record.
///
/// # Errors
///
/// Returns 400 if the body is malformed or a field is missing, blank or too long.
pub async fn create_travel_handler(
    State(state): State<AppState>,
    payload: Result<Json<TravelPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let travel = state
        .travel_service
        .create(payload.into_new_travel()?)
        .await?;
    let response = TravelResponse::from_travel(travel, &state.base_url);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, response.url.clone())],
        Json(response),
    ))
}

/// Retrieves one travel record.
///
/// # Endpoint
///
/// `GET /travels/{id}/`
///
/// # Errors
///
/// Returns 404 if no record has this id.
pub async fn get_travel_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<TravelResponse>, AppError> {
    let Path(id) = id?;

    let travel = state.travel_service.retrieve(id).await?;

    Ok(Json(TravelResponse::from_travel(travel, &state.base_url)))
}

/// Replaces both fields of a travel record.
///
/// # Endpoint
///
/// `PUT /travels/{id}/`
///
/// # Errors
///
/// Returns 404 if no record has this id.
/// Returns 400 if the body is malformed or a field is missing, blank or too long.
pub async fn replace_travel_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<TravelPayload>, JsonRejection>,
) -> Result<Json<TravelResponse>, AppError> {
    let Path(id) = id?;
    state.travel_service.retrieve(id).await?;

    let Json(payload) = payload?;

    let travel = state
        .travel_service
        .replace(id, payload.into_new_travel()?)
        .await?;

    Ok(Json(TravelResponse::from_travel(travel, &state.base_url)))
}

/// Partially updates a travel record.
///
/// # Endpoint
///
/// `PATCH /travels/{id}/`
///
/// Only fields present in the body are changed. A request without a body
/// (and without `Content-Type`) changes nothing and returns the record.
///
/// # Errors
///
/// Returns 404 if no record has this id.
/// Returns 400 if the body is malformed or a provided field is null, blank or too long.
pub async fn update_travel_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Option<Json<TravelPayload>>, JsonRejection>,
) -> Result<Json<TravelResponse>, AppError> {
    let Path(id) = id?;
    state.travel_service.retrieve(id).await?;

    let payload = payload?.map(|Json(payload)| payload).unwrap_or_default();

    let travel = state
        .travel_service
        .partial_update(id, payload.into_patch()?)
        .await?;

    Ok(Json(TravelResponse::from_travel(travel, &state.base_url)))
}

/// Deletes a travel record.
///
/// # Endpoint
///
/// `DELETE /travels/{id}/`
///
/// # Errors
///
/// Returns 404 if no record has this id.
pub async fn delete_travel_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;

    state.travel_service.destroy(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
