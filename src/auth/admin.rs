// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin-privilege inference over schema-free user records.
//!
//! The backend's user shape is not under this client's control and has
//! drifted: the admin flag has appeared under different names, as strings,
//! numbers and nested objects, with Portuguese and English synonyms. These
//! predicates therefore scan broadly and err on the permissive side; a false
//! positive only opens a UI gate, the server still authorizes every
//! state-changing call. Callers depend on the exact coercion and matching
//! rules below, so tighten nothing here without a backend contract to match.

use serde_json::Value;

use crate::models::Record;

/// Direct boolean-ish flags checked before any scanning.
const DIRECT_FLAGS: [&str; 6] = ["isAdmin", "admin", "is_admin", "isAdm", "adm", "superuser"];

/// Words that by themselves mark a value as admin-like.
const ADMIN_WORDS: [&str; 4] = ["admin", "administrator", "administrador", "adm"];

/// Substrings that mark a value as admin-like wherever they appear.
const ADMIN_FRAGMENTS: [&str; 7] = ["admin", "adm", "geren", "manager", "super", "root", "owner"];

/// Key-name substrings worth inspecting during the structural scan
/// (roles, profiles, levels, permissions, groups, in both languages).
const KEY_HINTS: [&str; 18] = [
    "admin", "adm", "geren", "manager", "super", "root", "owner", "acess", "nivel", "role",
    "perfil", "permiss", "tipo", "papel", "grupo", "cargo", "func", "cat",
];

/// How deep the structural scan recurses into nested objects/arrays.
const MAX_SCAN_DEPTH: usize = 3;

/// Truthy coercion for admin flags: literal `true`, `1`, `"true"`, `"1"`,
/// or the locale's word for yes, `"sim"` (case-insensitive).
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => s == "true" || s == "1" || s.eq_ignore_ascii_case("sim"),
        _ => false,
    }
}

/// Whether a string reads as an admin-ish word.
pub(crate) fn adminish_word(text: &str) -> bool {
    let x = text.to_lowercase();
    ADMIN_WORDS.contains(&x.as_str()) || ADMIN_FRAGMENTS.iter().any(|f| x.contains(f))
}

fn key_matches(key: &str) -> bool {
    let k = key.to_lowercase();
    KEY_HINTS.iter().any(|hint| k.contains(hint))
}

/// Scalar rendering used when matching a field value as a word.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Depth-bounded recursive scan for any admin signal in a JSON value.
///
/// Strings match admin-ish words, numbers >= 1 count as access levels,
/// `true` booleans count, arrays are scanned element-wise, and objects are
/// scanned under every key whose name hints at roles or permissions. The
/// depth bound keeps termination guaranteed on any input.
pub fn has_admin_signal(value: &Value, depth: usize) -> bool {
    if depth > MAX_SCAN_DEPTH {
        return false;
    }

    match value {
        Value::Null => false,
        Value::String(s) => adminish_word(s),
        Value::Number(n) => n.as_f64().map(|f| f >= 1.0).unwrap_or(false),
        Value::Bool(b) => *b,
        Value::Array(items) => items.iter().any(|v| has_admin_signal(v, depth + 1)),
        Value::Object(map) => map.iter().any(|(key, v)| {
            key_matches(key)
                && (truthy(v) || adminish_word(&value_text(v)) || has_admin_signal(v, depth + 1))
        }),
    }
}

/// Decide whether a user record represents an administrator.
///
/// Checks the known direct flags first, then falls back to the structural
/// scan. Never fails on missing, renamed or wrongly-typed fields.
pub fn is_admin_user(user: &Value) -> bool {
    if !(user.is_object() || user.is_array()) {
        return false;
    }

    let rec = Record::new(user);
    if DIRECT_FLAGS
        .iter()
        .any(|k| rec.field(k).map(truthy).unwrap_or(false))
    {
        return true;
    }

    has_admin_signal(user, 0)
}
