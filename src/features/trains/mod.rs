//! Train details feature.
//!
//! Maintains the train reference data that complaints are enriched
//! against (train number, name, depot, route and timings).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/trains` | List all train details |
//! | POST | `/api/trains` | Add a train |
//! | GET | `/api/trains/{train_no}` | Get a train by number |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TrainService;
