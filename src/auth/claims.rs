// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer-token payload decoding and claims-based admin hints.
//!
//! Tokens are three dot-separated base64url segments; only the middle
//! (payload) segment is decoded, and the signature is NOT verified. Claims
//! are advisory: they gate UI navigation, nothing more; the backend
//! re-validates the token on every state-changing call. A malformed token of
//! any kind reads as "no claims", never as an error.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde_json::Value;

use crate::auth::admin::{is_admin_user, truthy};
use crate::models::Record;

/// Direct boolean-ish flags checked first on claims.
const DIRECT_FLAGS: [&str; 3] = ["isAdmin", "admin", "is_admin"];

/// Synonyms the backend has used for the role/profile string.
const ROLE_KEYS: [&str; 8] = [
    "role",
    "perfil",
    "permissao",
    "tipo",
    "tipoUsuario",
    "tipo_usuario",
    "papel",
    "grupo",
];

/// Synonyms for role/permission lists.
const ROLE_LIST_KEYS: [&str; 3] = ["roles", "permissoes", "scopes"];

/// Synonyms for the numeric access level.
const LEVEL_KEYS: [&str; 4] = ["nivel", "nivelAcesso", "nivel_acesso", "accessLevel"];

/// Access levels at or above this grant the admin hint.
const ADMIN_LEVEL_THRESHOLD: f64 = 7.0;

/// Decode the payload segment of a bearer token into JSON claims.
///
/// Tolerates both URL-safe and standard base64 alphabets, padded or not.
/// Returns `None` for anything that does not decode: fewer than two
/// segments, bad base64, bad JSON.
pub fn decode_token_claims(token: &str) -> Option<Value> {
    if token.is_empty() {
        return None;
    }

    let payload = token.split('.').nth(1)?;

    let bytes = match decode_base64_loose(payload) {
        Some(b) => b,
        None => {
            tracing::warn!("token payload is not decodable base64, treating as no claims");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(claims) => Some(claims),
        Err(err) => {
            tracing::warn!(error = %err, "token payload is not valid JSON, treating as no claims");
            None
        }
    }
}

fn decode_base64_loose(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| URL_SAFE.decode(segment))
        .or_else(|_| STANDARD_NO_PAD.decode(segment))
        .or_else(|_| STANDARD.decode(segment))
        .ok()
}

/// Whether decoded claims hint at administrator privileges.
///
/// Checks, in order: direct flags, the role string (first non-empty
/// synonym), role/permission lists, and finally the numeric access level.
pub fn is_claims_admin(claims: &Value) -> bool {
    if !claims.is_object() {
        return false;
    }

    let rec = Record::new(claims);

    if DIRECT_FLAGS
        .iter()
        .any(|k| rec.field(k).map(truthy).unwrap_or(false))
    {
        return true;
    }

    let role = ROLE_KEYS
        .iter()
        .map(|k| rec.str_or(k, ""))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_lowercase();
    if role == "admin"
        || role == "administrator"
        || ["adm", "geren", "super", "root"]
            .iter()
            .any(|f| role.contains(f))
    {
        return true;
    }

    if let Some(items) = ROLE_LIST_KEYS
        .iter()
        .filter_map(|k| rec.field(k).and_then(Value::as_array))
        .find(|a| !a.is_empty())
    {
        if items
            .iter()
            .any(|item| element_text(item).to_lowercase().contains("adm"))
        {
            return true;
        }
    }

    let level = LEVEL_KEYS
        .iter()
        .filter_map(|k| rec.field(k))
        .find_map(level_value)
        .unwrap_or(0.0);
    level >= ADMIN_LEVEL_THRESHOLD
}

/// Text of a role-list element: a plain string, or an object's `name`/`role`.
fn element_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Object(_) => {
            let rec = Record::new(item);
            let name = rec.str_or("name", "");
            if !name.is_empty() {
                name
            } else {
                rec.str_or("role", "")
            }
        }
        _ => String::new(),
    }
}

/// Numeric coercion for a level field. Non-numeric strings coerce to NaN so
/// the threshold comparison fails gracefully; zero and empty defer to the
/// next synonym.
fn level_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| *f != 0.0),
        Value::String(s) if !s.is_empty() => Some(s.trim().parse().unwrap_or(f64::NAN)),
        _ => None,
    }
}

/// The unified admin gate: the user record first, then the token's claims.
///
/// Token decoding failures are swallowed and fall back purely to the user
/// record verdict.
pub fn validate_admin_access(user: &Value, token: Option<&str>) -> bool {
    if is_admin_user(user) {
        return true;
    }

    if let Some(token) = token {
        if let Some(claims) = decode_token_claims(token) {
            return is_claims_admin(&claims);
        }
    }

    false
}
