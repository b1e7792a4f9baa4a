//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod token;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateOutput, AuthenticateUseCase};
pub use config::AuthConfig;
pub use token::{EmployeeClaims, TokenService};
