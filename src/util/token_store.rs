//! Single read/write surface for the session token.
//!
//! The token lives in exactly one durable place: the `member_jwt` cookie.
//! (Two of the old page scripts disagreed on the key — `mebmer_jwt` was a
//! typo, not a second store.) Reads never refresh the expiry.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use crate::util::cookie;

/// Cookie holding the session token.
pub const TOKEN_COOKIE: &str = "member_jwt";

/// Fixed token lifetime, set once at login time.
const TOKEN_TTL_DAYS: u32 = 15;

/// Persist a freshly issued token.
pub fn save(token: &str) {
    cookie::write(TOKEN_COOKIE, token, TOKEN_TTL_DAYS);
}

/// The stored token, if any.
#[must_use]
pub fn load() -> Option<String> {
    cookie::read(TOKEN_COOKIE)
}

/// Drop the stored token; used on logout and when an authenticated call
/// reports the token invalid.
pub fn clear() {
    cookie::remove(TOKEN_COOKIE);
}

/// Precondition result for pages that need a token before acting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenGate {
    /// No usable token stored; go back to login without touching the API.
    Redirect,
    /// Token available for the authenticated call.
    Proceed(String),
}

/// Decide whether an authenticated action may proceed.
///
/// Every authenticated entry point on the info page runs through this, so
/// a missing token always means a login redirect and never a request with
/// an empty credential.
#[must_use]
pub fn gate(stored: Option<String>) -> TokenGate {
    match stored.filter(|t| !t.is_empty()) {
        Some(token) => TokenGate::Proceed(token),
        None => TokenGate::Redirect,
    }
}
