//! Auth Middleware
//!
//! Middleware for requiring a valid bearer token on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::error::AuthError;

/// Middleware state
///
/// Token verification is stateless, so the middleware only needs the
/// token service, not the employee directory.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<TokenService>,
}

/// The employee identity a verified token resolves to
///
/// Inserted into request extensions for downstream handlers. The
/// numeric id comes straight from the `employee_id` claim; there is no
/// parse-the-subject fallback.
#[derive(Debug, Clone)]
pub struct CurrentEmployee {
    pub employee_id: i32,
    pub username: String,
}

/// Middleware that requires a valid bearer token
pub async fn require_employee_token(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(token) = extract_bearer_token(req.headers()) else {
        return Err(AuthError::MissingToken.into_response());
    };

    let claims = match state.tokens.verify(&token) {
        Ok(claims) => claims,
        Err(_) => return Err(AuthError::TokenInvalid.into_response()),
    };

    req.extensions_mut().insert(CurrentEmployee {
        employee_id: claims.employee_id,
        username: claims.sub,
    });

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer ...` header
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(
            extract_bearer_token(&headers),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn test_extract_bearer_token_missing_or_malformed() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));
        assert_eq!(extract_bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(extract_bearer_token(&headers), None);
    }
}
