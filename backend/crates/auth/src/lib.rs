//! Auth (Employee Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Employee entity and directory trait
//! - `application/` - Authenticate use case, token service, config
//! - `infra/` - PostgreSQL employee directory
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Employee login with username + password
//! - Stateless signed bearer tokens (JWT, HMAC-SHA256)
//! - Bearer middleware for protecting other routers
//!
//! ## Security Model
//! - Passwords stored as salted PBKDF2-HMAC-SHA256 credentials
//! - Unknown user and wrong password are indistinguishable to callers
//! - Token validity is signature + expiry only; no server-side session

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{EmployeeClaims, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgEmployeeRepository;
pub use presentation::middleware::{AuthMiddlewareState, CurrentEmployee, require_employee_token};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
