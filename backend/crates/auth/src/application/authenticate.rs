//! Authenticate Use Case
//!
//! Verifies a username/password pair against the employee directory
//! and issues a signed bearer token on success.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::application::token::{EmployeeClaims, TokenService};
use crate::domain::entity::Employee;
use crate::domain::repository::EmployeeRepository;
use crate::error::{AuthError, AuthResult};

/// Authenticate input
#[derive(Debug)]
pub struct AuthenticateInput {
    pub username: String,
    pub password: String,
}

/// Authenticate output
pub struct AuthenticateOutput {
    /// Signed bearer token
    pub token: String,
    /// Absolute expiration (UTC), second precision, same instant as
    /// the token's `exp` claim
    pub expiration: DateTime<Utc>,
    /// The authenticated employee record
    pub employee: Employee,
}

/// Authenticate use case
///
/// Stateless: nothing is written on success or failure. Denial is
/// `Ok(None)` uniformly for unknown user, inactive user and wrong
/// password; `Err` is reserved for infrastructure failures.
pub struct AuthenticateUseCase<R>
where
    R: EmployeeRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: TokenService,
}

impl<R> AuthenticateUseCase<R>
where
    R: EmployeeRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        let tokens = TokenService::new(&config);
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> AuthResult<Option<AuthenticateOutput>> {
        let Some(employee) = self.repo.find_active_by_username(&input.username).await? else {
            tracing::debug!("Login attempt for unknown or inactive user");
            return Ok(None);
        };

        // Key derivation is CPU-bound by design (100k rounds); keep it
        // off the async worker threads.
        let stored = employee.password_hash.clone();
        let password = input.password;
        let password_valid =
            tokio::task::spawn_blocking(move || platform::password::verify_password(&password, &stored))
                .await
                .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !password_valid {
            tracing::debug!("Password verification failed");
            return Ok(None);
        }

        let claims = EmployeeClaims::new(&employee, &self.config);
        let expiration = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AuthError::Internal("Token expiry out of range".to_string()))?;

        let token = self
            .tokens
            .issue(&claims)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(
            employee_id = employee.employee_id,
            username = %employee.username,
            "Employee signed in"
        );

        Ok(Some(AuthenticateOutput {
            token,
            expiration,
            employee,
        }))
    }
}
