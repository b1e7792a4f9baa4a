//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::Employee;

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed bearer token
    pub token: String,
    /// Absolute token expiration (UTC)
    pub expiration: DateTime<Utc>,
    pub employee: EmployeeDto,
}

/// Employee as exposed over the API
///
/// The stored credential never leaves the server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub employee_id: i32,
    pub username: String,
    pub full_name: String,
    pub is_active: bool,
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id,
            username: employee.username.clone(),
            full_name: employee.full_name.clone(),
            is_active: employee.is_active,
        }
    }
}
