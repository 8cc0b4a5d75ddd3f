//! Portal configuration.
//!
//! The old page scripts leaned on ambient globals for API base paths and
//! page URLs. Here they live in one immutable [`PortalConfig`] provided
//! via context so every page reads the same values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// A social login provider shown on the login page.
///
/// Providers that are not wired up yet carry `"#"` as their URL and the
/// login page surfaces a "coming soon" notice instead of navigating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialLogin {
    pub id: &'static str,
    pub label: &'static str,
    pub url: String,
}

/// Immutable portal-wide configuration: API base path and page routes.
#[derive(Clone, Debug)]
pub struct PortalConfig {
    /// REST API base path, e.g. `/api/v1`.
    pub api_base: String,
    /// Login page route.
    pub login_page: String,
    /// Member info page route.
    pub info_page: String,
    /// Social login providers in display order.
    pub social_logins: Vec<SocialLogin>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/v1".to_owned(),
            login_page: "/login".to_owned(),
            info_page: "/info".to_owned(),
            social_logins: vec![
                SocialLogin {
                    id: "google",
                    label: "Google",
                    url: "/oauth/google/login".to_owned(),
                },
                SocialLogin {
                    id: "naver",
                    label: "Naver",
                    url: "#".to_owned(),
                },
                SocialLogin {
                    id: "kakao",
                    label: "Kakao",
                    url: "#".to_owned(),
                },
                SocialLogin {
                    id: "de4bi",
                    label: "de4bi",
                    url: "#".to_owned(),
                },
            ],
        }
    }
}

impl PortalConfig {
    /// `POST` target for credential login.
    #[must_use]
    pub fn login_api_url(&self) -> String {
        format!("{}/members/login", self.api_base)
    }

    /// `GET` target for the authenticated member's profile.
    #[must_use]
    pub fn members_api_url(&self) -> String {
        format!("{}/members", self.api_base)
    }

    /// `PUT`/`DELETE` target for a specific member.
    #[must_use]
    pub fn member_api_url(&self, seq: i64) -> String {
        format!("{}/members/{seq}", self.api_base)
    }
}
