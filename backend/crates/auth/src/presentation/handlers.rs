//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{AuthenticateInput, AuthenticateUseCase};
use crate::domain::repository::EmployeeRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{EmployeeDto, LoginRequest, LoginResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// POST /api/auth/login
///
/// Every denial surfaces as the same generic 401; callers cannot tell
/// an unknown username from a wrong password.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    let input = AuthenticateInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case
        .execute(input)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    Ok(Json(LoginResponse {
        token: output.token,
        expiration: output.expiration,
        employee: EmployeeDto::from(&output.employee),
    }))
}
