//! Password Hashing and Verification
//!
//! Salted PBKDF2-HMAC-SHA256 credential handling:
//! - 16-byte random salt per credential, 32-byte derived key
//! - Fixed 100,000 iteration count for new credentials
//! - Stored credentials carry their own iteration count, so records
//!   hashed under an older setting keep verifying
//! - Constant-time comparison
//! - Zeroization of derived keys
//!
//! ## Stored format
//! `"{iterations}.{base64(salt)}.{base64(hash)}"`, base64 standard
//! alphabet with padding. The string must round-trip verbatim through
//! the `password_hash` column it is stored in.

use std::str::FromStr;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::crypto;

// ============================================================================
// Constants
// ============================================================================

/// Iteration count used when hashing new passwords
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes
pub const KEY_LEN: usize = 32;

// ============================================================================
// Stored credential
// ============================================================================

/// Error returned when a stored credential string cannot be parsed
///
/// Callers of [`verify_password`] never see this; malformed input is
/// treated as verification failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialParseError {
    /// Not exactly three dot-separated fields
    #[error("Expected 3 dot-separated fields, got {0}")]
    FieldCount(usize),

    /// Iteration count is not a positive integer
    #[error("Invalid iteration count")]
    InvalidIterations,

    /// Salt or hash field is not valid base64
    #[error("Invalid base64 field")]
    InvalidBase64,
}

/// Parsed form of a stored credential string
///
/// Immutable once created; a password change produces a whole new
/// record, never an in-place update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential {
    iterations: u32,
    salt: Vec<u8>,
    hash: Vec<u8>,
}

impl StoredCredential {
    /// Iteration count recorded in the credential
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl FromStr for StoredCredential {
    type Err = CredentialParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split('.').collect();
        if fields.len() != 3 {
            return Err(CredentialParseError::FieldCount(fields.len()));
        }

        let iterations: u32 = fields[0]
            .parse()
            .map_err(|_| CredentialParseError::InvalidIterations)?;
        if iterations == 0 {
            return Err(CredentialParseError::InvalidIterations);
        }

        let salt =
            crypto::from_base64(fields[1]).map_err(|_| CredentialParseError::InvalidBase64)?;
        let hash =
            crypto::from_base64(fields[2]).map_err(|_| CredentialParseError::InvalidBase64)?;

        Ok(Self {
            iterations,
            salt,
            hash,
        })
    }
}

// ============================================================================
// Hashing and verification
// ============================================================================

/// Hash a password into the stored credential format
///
/// Generates a fresh 16-byte random salt on every call, so hashing the
/// same password twice never produces the same string.
pub fn hash_password(plaintext: &str) -> String {
    let salt = crypto::random_bytes(SALT_LEN);
    let key = derive_key(plaintext.as_bytes(), &salt, PBKDF2_ITERATIONS);

    format!(
        "{}.{}.{}",
        PBKDF2_ITERATIONS,
        crypto::to_base64(&salt),
        crypto::to_base64(&key[..]),
    )
}

/// Verify a password against a stored credential string
///
/// Re-derives the key using the salt and iteration count recorded in
/// the stored string, not the current defaults. Malformed stored
/// strings (wrong field count, non-numeric iterations, bad base64)
/// yield `false`, never an error. The comparison is constant-time.
pub fn verify_password(plaintext: &str, stored: &str) -> bool {
    let Ok(credential) = stored.parse::<StoredCredential>() else {
        return false;
    };

    let derived = derive_key(plaintext.as_bytes(), &credential.salt, credential.iterations);

    crypto::constant_time_eq(&derived[..], &credential.hash)
}

/// PBKDF2-HMAC-SHA256 key derivation, always [`KEY_LEN`] bytes out
fn derive_key(password: &[u8], salt: &[u8], iterations: u32) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut key[..]);
    key
}

// ============================================================================
// Tests
// ============================================================================
