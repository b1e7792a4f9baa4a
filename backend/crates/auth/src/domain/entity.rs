//! Employee Entity
//!
//! The employee directory record authentication runs against.

use std::fmt;

/// Employee record
///
/// `password_hash` holds the stored credential string in the
/// `"{iterations}.{base64(salt)}.{base64(hash)}"` format produced by
/// `platform::password::hash_password`. The string is opaque here; it
/// is only interpreted by the credential core.
#[derive(Clone)]
pub struct Employee {
    /// Stable numeric identifier
    pub employee_id: i32,
    /// Login name (unique, matched case-sensitively)
    pub username: String,
    /// Stored credential string
    pub password_hash: String,
    /// Display name carried into issued tokens
    pub full_name: String,
    /// Inactive employees cannot authenticate
    pub is_active: bool,
}

impl Employee {
    /// Whether this record may authenticate
    pub fn can_login(&self) -> bool {
        self.is_active
    }
}

impl fmt::Debug for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Employee")
            .field("employee_id", &self.employee_id)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("full_name", &self.full_name)
            .field("is_active", &self.is_active)
            .finish()
    }
}

/// Data for inserting a new employee (id is database-assigned)
#[derive(Clone)]
pub struct NewEmployee {
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub is_active: bool,
}

impl fmt::Debug for NewEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewEmployee")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("full_name", &self.full_name)
            .field("is_active", &self.is_active)
            .finish()
    }
}
