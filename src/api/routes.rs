//! API route configuration.
//!
//! Access is unrestricted: no authentication layer is applied.

use crate::api::handlers::{
    create_travel_handler, delete_travel_handler, get_travel_handler, list_travels_handler,
    replace_travel_handler, update_travel_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Travel resource routes.
///
/// # Endpoints
///
/// - `GET    /travels`        - List travels
/// - `POST   /travels`        - Create a travel
/// - `GET    /travels/{id}`   - Retrieve a travel
/// - `PUT    /travels/{id}`   - Replace a travel
/// - `PATCH  /travels/{id}`   - Partially update a travel
/// - `DELETE /travels/{id}`   - Delete a travel
///
/// Trailing slashes are trimmed before routing, see [`crate::routes::app_router`].
pub fn travel_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/travels",
            get(list_travels_handler).post(create_travel_handler),
        )
        .route(
            "/travels/{id}",
            get(get_travel_handler)
                .put(replace_travel_handler)
                .patch(update_travel_handler)
                .delete(delete_travel_handler),
        )
}
