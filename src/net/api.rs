//! REST API client for the members backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a local sentinel since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response travels in the uniform `{result, data, message}` envelope.
//! Parsing is best-effort: a body that fails to parse is wrapped as raw data
//! and handed to the caller instead of raising, so a malformed response can
//! degrade the UI but never crash it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::PortalConfig;
use crate::net::types::{LoginRequest, UpdateMemberRequest};

/// Custom request header carrying the session token on authenticated calls.
pub const TOKEN_HEADER: &str = "member_jwt";

/// HTTP methods accepted by [`api_call`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// The uniform response envelope produced by every backend endpoint.
///
/// `result == true` implies `data` is valid for the endpoint;
/// `result == false` implies `message` explains the failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub result: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl ResultEnvelope {
    /// Parse a response body, falling back to wrapping the raw text when the
    /// body is not a valid envelope. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(envelope) => envelope,
            Err(err) => {
                log::warn!("response body is not a result envelope ({err}); keeping raw body");
                Self::from_raw(raw.to_owned())
            }
        }
    }

    /// Wrap an unparseable or transport-level payload so callers still
    /// receive a structured value.
    #[must_use]
    pub fn from_raw(raw: String) -> Self {
        Self {
            result: false,
            data: Value::String(raw),
            message: None,
        }
    }

    /// Whole-data accessor in string form. The login endpoint returns the
    /// issued token directly as `data`.
    #[must_use]
    pub fn data_str(&self) -> String {
        match &self.data {
            Value::String(s) => s.clone(),
            Value::Null => {
                log::warn!("result data is empty");
                String::new()
            }
            other => other.to_string(),
        }
    }
}

/// Whether an envelope reports success. `None`-safe: a missing envelope is
/// logged and treated as failure.
#[must_use]
pub fn is_success(envelope: Option<&ResultEnvelope>) -> bool {
    let Some(envelope) = envelope else {
        log::warn!("is_success called without an envelope");
        return false;
    };
    envelope.result
}

/// Single field from the envelope's data object, as a display string.
///
/// A missing key, a null value, or non-object data yields the empty-string
/// sentinel with a log line instead of a fault.
#[must_use]
pub fn data_field(envelope: &ResultEnvelope, key: &str) -> String {
    match envelope.data.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => {
            log::warn!("result data has no usable field {key:?}");
            String::new()
        }
        Some(other) => other.to_string(),
    }
}

/// Outcome of a single API call.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiOutcome {
    /// Rejected locally before dispatch; no network call was made.
    Invalid(&'static str),
    /// Transport success (2xx), envelope parsed best-effort.
    Done(ResultEnvelope),
    /// Transport failure (non-2xx or network error), payload best-effort.
    Fail(ResultEnvelope),
}

impl ApiOutcome {
    /// The envelope carried by `Done`/`Fail`, if any.
    #[must_use]
    pub fn envelope(&self) -> Option<&ResultEnvelope> {
        match self {
            Self::Done(envelope) | Self::Fail(envelope) => Some(envelope),
            Self::Invalid(_) => None,
        }
    }
}

/// Issue a request and normalize the response into an [`ApiOutcome`].
///
/// An empty `url` is rejected locally without dispatching. `body`, when
/// present, is serialized as JSON with `Content-Type: application/json`.
/// Transport metadata is logged for every completed call regardless of
/// outcome.
pub async fn api_call(
    method: HttpMethod,
    url: &str,
    headers: &[(&str, &str)],
    body: Option<&Value>,
) -> ApiOutcome {
    if url.trim().is_empty() {
        log::warn!("api_call rejected: empty url (method: {method})");
        return ApiOutcome::Invalid("missing url");
    }

    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        };
        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        let request = match body {
            Some(json) => builder.json(json),
            None => builder.build(),
        };
        let request = match request {
            Ok(request) => request,
            Err(err) => {
                log::error!("api_call({method} {url}) failed to build request: {err}");
                return ApiOutcome::Invalid("malformed request");
            }
        };

        match request.send().await {
            Ok(resp) => {
                let status = resp.status();
                let raw = resp.text().await.unwrap_or_default();
                // The "always" hook of the old client: transport metadata is
                // logged for every completed call.
                log::debug!("api_call({method} {url}) completed (status: {status})");
                let envelope = ResultEnvelope::parse(&raw);
                if resp.ok() {
                    ApiOutcome::Done(envelope)
                } else {
                    ApiOutcome::Fail(envelope)
                }
            }
            Err(err) => {
                log::debug!("api_call({method} {url}) completed (transport error: {err})");
                ApiOutcome::Fail(ResultEnvelope::from_raw(err.to_string()))
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (headers, body);
        ApiOutcome::Invalid("not available on server")
    }
}

/// `POST {api}/members/login` with the hashed credentials.
pub async fn login(config: &PortalConfig, request: &LoginRequest) -> ApiOutcome {
    let body = match serde_json::to_value(request) {
        Ok(body) => body,
        Err(err) => {
            log::error!("login request failed to serialize: {err}");
            return ApiOutcome::Invalid("malformed request");
        }
    };
    api_call(HttpMethod::Post, &config.login_api_url(), &[], Some(&body)).await
}

/// `GET {api}/members` for the member owning `token`.
pub async fn fetch_member(config: &PortalConfig, token: &str) -> ApiOutcome {
    api_call(
        HttpMethod::Get,
        &config.members_api_url(),
        &[(TOKEN_HEADER, token)],
        None,
    )
    .await
}

/// `PUT {api}/members/{seq}` applying a profile edit.
pub async fn update_member(
    config: &PortalConfig,
    token: &str,
    seq: i64,
    request: &UpdateMemberRequest,
) -> ApiOutcome {
    let body = match serde_json::to_value(request) {
        Ok(body) => body,
        Err(err) => {
            log::error!("update request failed to serialize: {err}");
            return ApiOutcome::Invalid("malformed request");
        }
    };
    api_call(
        HttpMethod::Put,
        &config.member_api_url(seq),
        &[(TOKEN_HEADER, token)],
        Some(&body),
    )
    .await
}

/// `DELETE {api}/members/{seq}` removing the account.
pub async fn delete_member(config: &PortalConfig, token: &str, seq: i64) -> ApiOutcome {
    api_call(
        HttpMethod::Delete,
        &config.member_api_url(seq),
        &[(TOKEN_HEADER, token)],
        None,
    )
    .await
}
