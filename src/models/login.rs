// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login response unpacking.
//!
//! The backend has shipped several shapes for the login payload over time:
//! the user object under `usuario`, `user`, nested inside `data`, or as the
//! `data` value itself; the token under `token`, `data.token`, `accessToken`
//! or `access_token`. Each possibility is tried in order.

use serde_json::Value;

/// The authenticated pair pulled out of a login response.
#[derive(Debug, Clone)]
pub struct LoginSession {
    /// Schema-free user record as sent by the backend.
    pub user: Value,
    /// Opaque bearer token.
    pub token: String,
}

/// Missing pieces of a login response, reported distinctly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("user not found in response")]
    MissingUser,
    #[error("token not found in response")]
    MissingToken,
}

/// Extract the user object and bearer token from a login response body.
pub fn extract_login(response: &Value) -> Result<LoginSession, LoginError> {
    let user = [
        response.get("usuario"),
        response.get("user"),
        response.pointer("/data/usuario"),
        response.pointer("/data/user"),
        response.get("data"),
    ]
    .into_iter()
    .flatten()
    .find(|v| is_present(v))
    .cloned()
    .ok_or(LoginError::MissingUser)?;

    let token = [
        response.get("token"),
        response.pointer("/data/token"),
        response.get("accessToken"),
        response.get("access_token"),
    ]
    .into_iter()
    .flatten()
    .filter_map(Value::as_str)
    .find(|s| !s.is_empty())
    .map(str::to_string)
    .ok_or(LoginError::MissingToken)?;

    Ok(LoginSession { user, token })
}

/// Loose presence check: null, `false`, `0` and `""` all count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
