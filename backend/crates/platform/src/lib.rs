//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, Base64, constant-time compare)
//! - Password credential hashing (PBKDF2-HMAC-SHA256)

pub mod crypto;
pub mod password;
