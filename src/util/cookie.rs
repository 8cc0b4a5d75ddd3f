//! Cookie access: a pure codec for cookie strings plus thin browser
//! wrappers over `document.cookie`. Requires a browser environment for the
//! read/write half; the codec is plain string work.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

const SECONDS_PER_DAY: u64 = 86_400;

/// Render a `Set-Cookie`-style assignment for `document.cookie`.
///
/// Path-scoped to the site root with a fixed max-age; `SameSite=Lax` keeps
/// the cookie out of cross-site subrequests while still surviving the
/// top-level OAuth redirect back into the portal.
#[must_use]
pub fn format_set_cookie(name: &str, value: &str, ttl_days: u32) -> String {
    let max_age = u64::from(ttl_days) * SECONDS_PER_DAY;
    format!("{name}={value}; path=/; max-age={max_age}; samesite=lax")
}

/// Render an assignment that removes the cookie.
#[must_use]
pub fn format_clear_cookie(name: &str) -> String {
    format!("{name}=; path=/; max-age=0")
}

/// Find a cookie's value in a `document.cookie` string (`a=1; b=2; ...`).
///
/// The value is returned verbatim; tokens are cookie-safe as issued so no
/// decoding pass is applied.
#[must_use]
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
}

/// Read a cookie from the live document. Empty values count as absent.
#[must_use]
pub fn read(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let header = html_document()?.cookie().ok()?;
        find_cookie(&header, name).filter(|value| !value.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Write a cookie on the live document with the given expiry.
pub fn write(name: &str, value: &str, ttl_days: u32) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            if doc
                .set_cookie(&format_set_cookie(name, value, ttl_days))
                .is_err()
            {
                log::error!("failed to write cookie {name:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, value, ttl_days);
    }
}

/// Remove a cookie from the live document.
pub fn remove(name: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            if doc.set_cookie(&format_clear_cookie(name)).is_err() {
                log::error!("failed to remove cookie {name:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into().ok()
}
