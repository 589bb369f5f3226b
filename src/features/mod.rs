//! Features layer - Vertical slices of the application
//!
//! Each feature owns its models, DTOs, services, handlers and routes.

pub mod complaints;
pub mod media;
pub mod trains;
