//! Museum Backend Module
//!
//! Exhibit, game and score management:
//! - `domain/` - Plain-record entities with explicit foreign keys
//! - `application/` - Exhibit and score services
//! - `infra/` - PostgreSQL repositories and the filesystem image store
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! Exhibit routes are protected by the auth crate's bearer middleware;
//! score routes are public (visitors submit game scores).

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{MuseumError, MuseumResult};
pub use infra::image_store::ImageStore;
pub use infra::postgres::PgMuseumRepository;
pub use presentation::router::{exhibits_router, scores_router};
