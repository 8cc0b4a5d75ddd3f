#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state shared across pages via context.
///
/// The cookie store stays authoritative for the token; this mirror exists so
/// view code can react to login/logout without re-reading the document.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    /// A request that may change auth state is in flight.
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
