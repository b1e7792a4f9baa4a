//! Domain Layer
//!
//! Employee entity and the directory trait it is looked up through.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{Employee, NewEmployee};
pub use repository::EmployeeRepository;
