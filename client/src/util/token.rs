//! Bearer token decoding and claim lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues compact `header.payload.signature` tokens. The browser
//! never verifies the signature; it only reads claims to decide whether a
//! session looks usable and who the user is. The backend remains the
//! authority on every request.
//!
//! ERROR HANDLING
//! ==============
//! Every function degrades to `None` (or "expired") on malformed input. A
//! corrupted or foreign token means "no session", never a crash.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use serde_json::{Map, Value};

use crate::util::clock;

/// Role claim names, in probe order.
pub const ROLE_CLAIMS: &[&str] = &[
    "role",
    "Role",
    "http://schemas.microsoft.com/ws/2008/06/identity/claims/role",
];

/// User id claim names, in probe order.
pub const USER_ID_CLAIMS: &[&str] = &[
    "sub",
    "nameid",
    "userId",
    "id",
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier",
];

/// Email claim names, in probe order.
pub const EMAIL_CLAIMS: &[&str] = &["email", "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress"];

/// Display name claim names, in probe order.
pub const NAME_CLAIMS: &[&str] = &[
    "name",
    "unique_name",
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name",
];

/// Decoded token payload: claim name -> JSON value.
#[derive(Clone, Debug, PartialEq)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Raw claim value, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Expiry in seconds since the Unix epoch.
    #[allow(clippy::cast_possible_truncation)]
    pub fn exp(&self) -> Option<i64> {
        match self.0.get("exp")? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.floor() as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// First claim from `names` that carries a usable value.
    ///
    /// Strings are returned as-is, numbers are stringified and arrays yield
    /// their first string element (tokens with several roles).
    pub fn first_of(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.0.get(*name).and_then(claim_text))
    }

    pub fn role(&self) -> Option<String> {
        self.first_of(ROLE_CLAIMS)
    }

    pub fn user_id(&self) -> Option<String> {
        self.first_of(USER_ID_CLAIMS)
    }

    pub fn email(&self) -> Option<String> {
        self.first_of(EMAIL_CLAIMS)
    }

    pub fn name(&self) -> Option<String> {
        self.first_of(NAME_CLAIMS)
    }

    /// Whether the claims are expired at `now_ms`. Missing `exp` counts as expired.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        match self.exp() {
            Some(exp) => exp.saturating_mul(1000) < now_ms,
            None => true,
        }
    }
}

fn claim_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => items.iter().find_map(|v| v.as_str().filter(|s| !s.is_empty()).map(str::to_owned)),
        _ => None,
    }
}

/// Decode the payload segment of `token`.
///
/// Returns `None` unless the token has exactly three segments and the middle
/// one is base64url-encoded JSON object text.
pub fn decode(token: &str) -> Option<Claims> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    if payload.is_empty() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| URL_SAFE.decode(payload))
        .ok()?;
    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(map) => Some(Claims(map)),
        _ => None,
    }
}

/// Whether `token` is unusable at `now_ms`: undecodable, missing `exp`, or past it.
pub fn is_expired_at(token: &str, now_ms: i64) -> bool {
    decode(token).map_or(true, |claims| claims.is_expired_at(now_ms))
}

/// [`is_expired_at`] against the current wall clock.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, clock::now_ms())
}

pub fn get_role(token: &str) -> Option<String> {
    decode(token)?.role()
}

pub fn get_user_id(token: &str) -> Option<String> {
    decode(token)?.user_id()
}

pub fn get_email(token: &str) -> Option<String> {
    decode(token)?.email()
}

pub fn get_name(token: &str) -> Option<String> {
    decode(token)?.name()
}
