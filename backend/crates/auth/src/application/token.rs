//! Signed Bearer Tokens
//!
//! Compact three-segment JWTs (header.payload.signature, base64url)
//! signed with HMAC-SHA256. Tokens are stateless: validity is decided
//! entirely by signature and expiry at verification time.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::Employee;

/// Claims carried by an issued employee token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeClaims {
    /// Subject (username)
    pub sub: String,
    /// Unique token id, fresh per issuance; not tracked server-side
    pub jti: String,
    /// Stable numeric employee identifier
    pub employee_id: i32,
    /// Display name
    pub name: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration (unix seconds), always `iat + ttl`, computed once
    pub exp: i64,
}

impl EmployeeClaims {
    /// Build claims for an employee at the current instant
    pub fn new(employee: &Employee, config: &AuthConfig) -> Self {
        let iat = Utc::now().timestamp();

        Self {
            sub: employee.username.clone(),
            jti: Uuid::new_v4().to_string(),
            employee_id: employee.employee_id,
            name: employee.full_name.clone(),
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            iat,
            exp: iat + config.token_ttl_seconds(),
        }
    }
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token encoding error: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid or expired token")]
    Invalid,
}

/// Issues and verifies employee tokens with a symmetric key
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);

        Self {
            encoding_key: EncodingKey::from_secret(&config.signing_key),
            decoding_key: DecodingKey::from_secret(&config.signing_key),
            validation,
        }
    }

    /// Sign the claims into a compact HS256 JWT
    pub fn issue(&self, claims: &EmployeeClaims) -> Result<String, TokenError> {
        let header = Header::new(Algorithm::HS256);
        Ok(encode(&header, claims, &self.encoding_key)?)
    }

    /// Verify signature, expiry, issuer and audience
    pub fn verify(&self, token: &str) -> Result<EmployeeClaims, TokenError> {
        let data = decode::<EmployeeClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| TokenError::Invalid)?;
        Ok(data.claims)
    }
}
