//! Complaint media attachments feature.
//!
//! Media rows (photos/videos by URL) belong to a complaint and are removed
//! with it through the FK cascade.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/complaints/{id}/media` | Attach media to a complaint |
//! | GET | `/api/complaints/{id}/media` | List media for a complaint |
//! | DELETE | `/api/complaints/{id}/media` | Delete selected media of a complaint |
//! | DELETE | `/api/media/{id}` | Delete a single media file |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::MediaService;
