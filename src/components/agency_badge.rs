//! Authentication-agency badge.

#[cfg(test)]
#[path = "agency_badge_test.rs"]
mod agency_badge_test;

use leptos::prelude::*;

/// Map an `auth_agency` value to its icon URL and short label.
///
/// Exact string match against the values the backend stores (the provider
/// names arrive in Korean for the external agencies); anything else renders
/// the unknown badge.
#[must_use]
pub fn agency_badge(agency: &str) -> (&'static str, &'static str) {
    match agency {
        "de4bi" => ("/img/icon-de4bi.png", "D4"),
        "구글" => ("/img/icon-google.png", "GG"),
        "네이버" => ("/img/icon-naver.png", "NV"),
        "카카오" => ("/img/icon-kakao.png", "KA"),
        _ => ("/img/icon-unknown.png", "??"),
    }
}

/// Icon identifying which agency authenticated the member.
#[component]
pub fn AgencyBadge(agency: String) -> impl IntoView {
    let (src, alt) = agency_badge(&agency);
    view! { <img class="agency-badge" src=src alt=alt title=agency/> }
}
