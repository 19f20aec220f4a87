//! Handler for the API root.

use axum::{Json, extract::State};

use crate::api::dto::root::ApiRootResponse;
use crate::api::dto::travel::travels_url;
use crate::state::AppState;

/// Lists the resource collections exposed by the API.
///
/// # Endpoint
///
/// `GET /`
///
/// ```json
/// { "travels": "http://localhost:3000/travels/" }
/// ```
pub async fn api_root_handler(State(state): State<AppState>) -> Json<ApiRootResponse> {
    Json(ApiRootResponse {
        travels: travels_url(&state.base_url),
    })
}
