//! Post-login token handoff resolver.
//!
//! After the server (or an OAuth provider bounce) lands the browser back on
//! the login page with `?member_jwt=...`, the token has to reach whichever
//! context opened the login UI: the page itself, an opener window, or a
//! parent frame. The resolver walks `AwaitingToken -> TokenReceived ->
//! {Redirected | CallbackInvoked | Failed}` and always strips the token from
//! the visible URL first so it cannot leak through history, referrers, or a
//! shared link.
//!
//! Popup/iframe delivery uses a structured `postMessage` payload with a
//! fixed schema instead of resolving a caller-named global on the other
//! window; cross-origin embeddings cannot reliably expose globals, but they
//! can always receive a message. The `return_func` name is still forwarded
//! inside the payload so the embedding page can route it.
//!
//! The resolver must run at most once per token: after a popup delivery the
//! window is gone, so a second invocation is refused.

#[cfg(test)]
#[path = "handoff_test.rs"]
mod handoff_test;

use serde::{Deserialize, Serialize};

/// Embedding context of the login UI, read from the page parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameType {
    /// Full-page flow; also the fallback for unrecognized values.
    #[default]
    Page,
    /// Standalone popup window with an opener.
    Popup,
    /// Embedded frame with a parent window.
    Iframe,
}

impl FrameType {
    /// Parse a `frame_type` parameter; anything unrecognized is `Page`.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("popup") => Self::Popup,
            Some("iframe") => Self::Iframe,
            _ => Self::Page,
        }
    }
}

/// Where and how to deliver a freshly issued token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandoffRequest {
    pub frame_type: FrameType,
    /// Target for the `page` flow; the token is appended as a parameter.
    pub return_url: Option<String>,
    /// Opaque caller payload, forwarded untouched.
    pub return_data: Option<String>,
    /// Caller-side routing hint, forwarded inside the handoff message.
    pub return_func: Option<String>,
}

impl HandoffRequest {
    /// Build a request from the login page's parameters.
    ///
    /// Returns `None` when no handoff parameter is present at all, i.e. the
    /// visit has no caller context and the portal's own default flow applies.
    #[must_use]
    pub fn from_parts(
        frame_type: Option<String>,
        return_url: Option<String>,
        return_data: Option<String>,
        return_func: Option<String>,
    ) -> Option<Self> {
        if frame_type.is_none()
            && return_url.is_none()
            && return_data.is_none()
            && return_func.is_none()
        {
            return None;
        }
        Some(Self {
            frame_type: FrameType::parse(frame_type.as_deref()),
            return_url: return_url.filter(|v| !v.is_empty()),
            return_data: return_data.filter(|v| !v.is_empty()),
            return_func: return_func.filter(|v| !v.is_empty()),
        })
    }
}

/// Terminal state of one resolver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandoffOutcome {
    /// The page flow navigated to the return URL.
    Redirected,
    /// The token was posted to the opener/parent window.
    CallbackInvoked,
    /// No delivery was possible; logged, never a user-facing crash.
    Failed,
}

/// Discriminator of the cross-window handoff payload.
pub const HANDOFF_MESSAGE_KIND: &str = "member_jwt_handoff";

/// Fixed-schema payload posted to the opener/parent window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffMessage {
    pub kind: String,
    pub member_jwt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_func: Option<String>,
}

impl HandoffMessage {
    #[must_use]
    pub fn new(token: &str, request: &HandoffRequest) -> Self {
        Self {
            kind: HANDOFF_MESSAGE_KIND.to_owned(),
            member_jwt: token.to_owned(),
            return_data: request.return_data.clone(),
            return_func: request.return_func.clone(),
        }
    }
}

/// Compose the page-flow target URL.
///
/// The token rides as `member_jwt`; `return_data` is appended verbatim as a
/// second parameter. The receiving page owns any further decoding.
#[must_use]
pub fn build_return_url(return_url: &str, token: &str, return_data: Option<&str>) -> String {
    match return_data {
        Some(data) => format!("{return_url}?member_jwt={token}&return_data={data}"),
        None => format!("{return_url}?member_jwt={token}"),
    }
}

/// Derive the `postMessage` target origin from the return URL.
///
/// Absolute URLs pin delivery to their origin; anything else (no caller URL,
/// relative path, malformed value) falls back to the wildcard. The scheme
/// check is anchored to the start of the string so a relative URL that
/// merely embeds an absolute one in its query cannot produce a bogus origin.
#[must_use]
pub fn target_origin(return_url: Option<&str>) -> String {
    let Some(url) = return_url else {
        return "*".to_owned();
    };
    let Some(scheme_end) = url.find("://") else {
        return "*".to_owned();
    };
    let scheme = &url[..scheme_end];
    if scheme.is_empty()
        || !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return "*".to_owned();
    }
    let rest = &url[scheme_end + 3..];
    if rest.is_empty() {
        return "*".to_owned();
    }
    let authority_end = rest.find('/').map_or(url.len(), |i| scheme_end + 3 + i);
    url[..authority_end].to_owned()
}

/// What the resolver should do for a request, independent of the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryPlan {
    /// Page flow: replacing navigation to the composed return URL.
    Navigate(String),
    /// Popup flow: post to the opener, then close the window whether or not
    /// delivery succeeded.
    PostToOpener { json: String, origin: String },
    /// Iframe flow: post to the parent; the frame stays embedded.
    PostToParent { json: String, origin: String },
    /// Page flow without a return target; nothing deliverable.
    Undeliverable,
}

/// Decide how a token reaches the caller context.
#[must_use]
pub fn plan_delivery(request: &HandoffRequest, token: &str) -> DeliveryPlan {
    match request.frame_type {
        FrameType::Page => match request.return_url.as_deref().filter(|u| !u.is_empty()) {
            Some(return_url) => DeliveryPlan::Navigate(build_return_url(
                return_url,
                token,
                request.return_data.as_deref(),
            )),
            None => DeliveryPlan::Undeliverable,
        },
        FrameType::Popup | FrameType::Iframe => {
            let json = serde_json::to_string(&HandoffMessage::new(token, request))
                .unwrap_or_else(|err| {
                    log::error!("handoff message failed to serialize: {err}");
                    String::new()
                });
            let origin = target_origin(request.return_url.as_deref());
            if request.frame_type == FrameType::Popup {
                DeliveryPlan::PostToOpener { json, origin }
            } else {
                DeliveryPlan::PostToParent { json, origin }
            }
        }
    }
}

/// Whether a delivery attempt repeats the one already made.
///
/// The popup window is gone after the first delivery, so the same token is
/// never handed off twice; a different token (a fresh login in the same
/// instance) is allowed through.
#[must_use]
pub fn repeat_delivery(previous: Option<&str>, token: &str) -> bool {
    previous == Some(token)
}

/// Remove all query parameters from the visible URL via history replacement.
///
/// Runs unconditionally before any delivery so the token never survives in
/// the address bar, browser history, or a copied link.
pub fn strip_query() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let title = window.document().map(|d| d.title()).unwrap_or_default();
        let path = window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_owned());
        match window.history() {
            Ok(history) => {
                if history
                    .replace_state_with_url(&wasm_bindgen::JsValue::NULL, &title, Some(&path))
                    .is_err()
                {
                    log::error!("failed to strip query parameters from the visible url");
                }
            }
            Err(_) => log::error!("history api unavailable; query parameters left in place"),
        }
    }
}

/// Deliver a token to the context that initiated login.
///
/// Delivers each token at most once: the popup flow closes its window, so a
/// repeat run with the same token is refused with a log line. The query
/// strip still happens on the refused path.
pub fn resolve(request: &HandoffRequest, token: &str) -> HandoffOutcome {
    #[cfg(feature = "hydrate")]
    {
        resolve_in_browser(request, token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, token);
        HandoffOutcome::Failed
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static DELIVERED: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

#[cfg(feature = "hydrate")]
fn resolve_in_browser(request: &HandoffRequest, token: &str) -> HandoffOutcome {
    use wasm_bindgen::JsCast;

    // Mandatory first transition, even when delivery is refused below.
    strip_query();

    let refused = DELIVERED.with_borrow_mut(|last| {
        if repeat_delivery(last.as_deref(), token) {
            true
        } else {
            *last = Some(token.to_owned());
            false
        }
    });
    if refused {
        log::warn!("handoff already delivered this token; refusing to deliver it again");
        return HandoffOutcome::Failed;
    }

    let Some(window) = web_sys::window() else {
        return HandoffOutcome::Failed;
    };

    match plan_delivery(request, token) {
        DeliveryPlan::Navigate(target) => {
            // Replacing navigation: the login page must not stay in history.
            if window.location().replace(&target).is_err() {
                log::error!("failed to navigate to the return url");
                return HandoffOutcome::Failed;
            }
            HandoffOutcome::Redirected
        }
        DeliveryPlan::Undeliverable => {
            log::error!("page handoff without a return_url; nowhere to deliver the token");
            HandoffOutcome::Failed
        }
        DeliveryPlan::PostToOpener { json, origin } => {
            let delivered = match window.opener() {
                Ok(opener) if !opener.is_null() && !opener.is_undefined() => {
                    post_json(&opener.unchecked_into::<web_sys::Window>(), &json, &origin)
                }
                _ => {
                    log::error!("popup handoff without an opener window");
                    false
                }
            };
            // The popup closes no matter what; it has no further purpose.
            if window.close().is_err() {
                log::warn!("popup refused to close");
            }
            if delivered {
                HandoffOutcome::CallbackInvoked
            } else {
                HandoffOutcome::Failed
            }
        }
        DeliveryPlan::PostToParent { json, origin } => {
            let delivered = match window.parent() {
                Ok(Some(parent)) => post_json(&parent, &json, &origin),
                _ => {
                    log::error!("iframe handoff without a parent window");
                    false
                }
            };
            // The frame stays embedded; nothing to close.
            if delivered {
                HandoffOutcome::CallbackInvoked
            } else {
                HandoffOutcome::Failed
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn post_json(target: &web_sys::Window, json: &str, origin: &str) -> bool {
    if json.is_empty() {
        return false;
    }
    target
        .post_message(&wasm_bindgen::JsValue::from_str(json), origin)
        .is_ok()
}
