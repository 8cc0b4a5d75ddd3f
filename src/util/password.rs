//! Client-side password hashing.
//!
//! Raw passwords never leave the page: they are SHA-256 hashed before being
//! placed in a request body. The backend owns any further salting.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the raw password.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

/// Hash a password only when one was actually entered.
///
/// The old login script had this guard inverted (it hashed the empty case);
/// an absent password stays absent.
#[must_use]
pub fn hash_if_present(password: &str) -> Option<String> {
    if password.is_empty() {
        None
    } else {
        Some(hash_password(password))
    }
}
