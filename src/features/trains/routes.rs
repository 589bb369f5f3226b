//! Train routes

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::trains::handlers;
use crate::features::trains::services::TrainService;

/// Create routes for the trains feature
pub fn routes(service: Arc<TrainService>) -> Router {
    Router::new()
        .route(
            "/api/trains",
            get(handlers::list_trains).post(handlers::create_train),
        )
        .route("/api/trains/{train_no}", get(handlers::get_train))
        .with_state(service)
}
