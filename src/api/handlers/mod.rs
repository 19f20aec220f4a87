//! HTTP request handlers for API endpoints.

pub mod health;
pub mod root;
pub mod travels;

pub use health::health_handler;
pub use root::api_root_handler;
pub use travels::{
    create_travel_handler, delete_travel_handler, get_travel_handler, list_travels_handler,
    replace_travel_handler, update_travel_handler,
};
