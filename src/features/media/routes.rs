//! Media routes

use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::media::handlers;
use crate::features::media::services::MediaService;

/// Create routes for the media feature
pub fn routes(service: Arc<MediaService>) -> Router {
    Router::new()
        .route(
            "/api/complaints/{id}/media",
            get(handlers::list_media)
                .post(handlers::attach_media)
                .delete(handlers::delete_media_bulk),
        )
        .route("/api/media/{id}", delete(handlers::detach_media))
        .with_state(service)
}
