//! DTO for the API root endpoint.

use serde::Serialize;

/// Index of the resource collections served by the API.
#[derive(Debug, Serialize)]
pub struct ApiRootResponse {
    pub travels: String,
}
