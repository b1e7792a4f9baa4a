//! Repository Traits
//!
//! Interface for the employee directory. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::{Employee, NewEmployee};
use crate::error::AuthResult;

/// Employee directory trait
#[trait_variant::make(EmployeeRepository: Send)]
pub trait LocalEmployeeRepository {
    /// Find an active employee by exact username (case-sensitive)
    async fn find_active_by_username(&self, username: &str) -> AuthResult<Option<Employee>>;

    /// Insert a new employee, returning the stored record
    async fn create(&self, new: &NewEmployee) -> AuthResult<Employee>;

    /// Number of employee records (used by startup seeding)
    async fn count(&self) -> AuthResult<i64>;
}
