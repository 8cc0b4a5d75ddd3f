use super::*;

#[test]
fn api_urls_follow_base_path() {
    let config = PortalConfig::default();
    assert_eq!(config.login_api_url(), "/api/v1/members/login");
    assert_eq!(config.members_api_url(), "/api/v1/members");
    assert_eq!(config.member_api_url(7), "/api/v1/members/7");
}

#[test]
fn custom_base_path_is_respected() {
    let config = PortalConfig {
        api_base: "https://members.example.com/api/v2".to_owned(),
        ..PortalConfig::default()
    };
    assert_eq!(
        config.members_api_url(),
        "https://members.example.com/api/v2/members"
    );
}

#[test]
fn default_social_logins_cover_all_platforms() {
    let config = PortalConfig::default();
    let ids: Vec<&str> = config.social_logins.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["google", "naver", "kakao", "de4bi"]);

    // Only Google is launched; the rest are placeholders.
    assert_ne!(config.social_logins[0].url, "#");
    assert!(config.social_logins[1..].iter().all(|s| s.url == "#"));
}
