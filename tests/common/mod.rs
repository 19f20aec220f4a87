#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use travel_api::api::routes::travel_routes;
use travel_api::infrastructure::persistence::MemoryTravelRepository;
use travel_api::state::AppState;

pub const BASE_URL: &str = "http://travel.test";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(MemoryTravelRepository::new()), BASE_URL)
}

pub fn make_server() -> TestServer {
    let app = travel_routes().with_state(create_test_state());
    TestServer::new(app).unwrap()
}

pub async fn create_travel(server: &TestServer, destination: &str, details: &str) -> Value {
    let response = server
        .post("/travels")
        .json(&json!({ "destination": destination, "details": details }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
