pub mod health;
pub mod puzzle;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(puzzle::list_categories))
        .route(
            "/puzzle",
            get(puzzle::new_puzzle).post(puzzle::custom_puzzle),
        )
        .route("/puzzle/check", axum::routing::post(puzzle::check_selection))
        .route("/puzzle/hint", axum::routing::post(puzzle::hint))
}
