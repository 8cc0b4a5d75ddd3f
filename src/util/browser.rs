//! Window-level browser calls shared by the pages. Off-browser (SSR or
//! tests) these degrade to log lines.

/// Blocking user-facing alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    log::warn!("alert (no browser): {message}");
}

/// Full-page navigation to a provider-owned URL (social login entry).
pub fn goto(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                log::error!("failed to navigate to {url}");
            }
            return;
        }
    }
    log::warn!("navigation requested off-browser: {url}");
}
