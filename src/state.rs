//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::TravelService;
use crate::domain::repositories::TravelRepository;

/// Travel service over whichever repository the server was started with.
pub type DynTravelService = TravelService<dyn TravelRepository>;

/// State shared by all handlers.
///
/// Cheap to clone; the service is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub travel_service: Arc<DynTravelService>,
    /// Public base URL used to build self links, without a trailing slash.
    pub base_url: String,
}

impl AppState {
    pub fn new(repository: Arc<dyn TravelRepository>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            travel_service: Arc::new(TravelService::new(repository)),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
