//! Infrastructure Layer

pub mod image_store;
pub mod postgres;

pub use image_store::ImageStore;
pub use postgres::PgMuseumRepository;
