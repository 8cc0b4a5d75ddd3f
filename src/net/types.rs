//! Wire types exchanged with the members backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;
use serde_json::Value;

use crate::net::api::{self, ResultEnvelope};

/// Credential login request. `password` carries the client-side SHA-256
/// hash, never the raw password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

/// Profile edit request. Optional fields are omitted from the body when
/// the member left them untouched; passwords travel as hashes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateMemberRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// Display projection of a member record.
///
/// Only `name`/`nickname` are editable; everything else renders read-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberProfile {
    pub seq: i64,
    pub id: String,
    pub status: String,
    pub authority: String,
    pub auth_agency: String,
    pub name: String,
    pub nickname: String,
    pub join_date: String,
    pub last_login_date: String,
}

impl MemberProfile {
    /// Extract a profile from a member-info envelope field by field.
    ///
    /// Missing or malformed fields degrade to empty strings (or zero for
    /// `seq`) with a log line, matching the portal's never-crash policy for
    /// malformed responses.
    #[must_use]
    pub fn from_envelope(envelope: &ResultEnvelope) -> Self {
        let seq = envelope
            .data
            .get("seq")
            .and_then(Value::as_i64)
            .unwrap_or_else(|| {
                log::warn!("member info has no usable seq");
                0
            });
        Self {
            seq,
            id: api::data_field(envelope, "id"),
            status: api::data_field(envelope, "status"),
            authority: api::data_field(envelope, "authority"),
            auth_agency: api::data_field(envelope, "auth_agency"),
            name: api::data_field(envelope, "name"),
            nickname: api::data_field(envelope, "nickname"),
            join_date: api::data_field(envelope, "join_date"),
            last_login_date: api::data_field(envelope, "last_login_date"),
        }
    }
}
