//! Complaint lifecycle feature.
//!
//! Passengers lodge complaints against a journey (PNR and/or train), staff
//! move them through a forward-only status lifecycle, and the PNR check
//! outcome is tracked separately. Creating a complaint stores inline media
//! in the same transaction and triggers a background notification.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/complaints` | Lodge a complaint |
//! | GET | `/api/complaints` | List complaints (filter + paginate) |
//! | GET | `/api/complaints/{id}` | Get a complaint with its media |
//! | PATCH | `/api/complaints/{id}` | Partially update a complaint |
//! | DELETE | `/api/complaints/{id}` | Delete a complaint and its media |
//! | PATCH | `/api/complaints/{id}/status` | Move a complaint to a new status |
//! | PATCH | `/api/complaints/{id}/pnr` | Record a PNR check outcome |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ComplaintService;
