// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the agenda backend.
//!
//! Handles:
//! - Login (user object + bearer token extraction)
//! - Appointment listing, creation, update and deletion
//! - Bearer-token attachment when a token is available
//! - Error-message mapping for connectivity and server failures
//!
//! Nothing here retries: a failed call surfaces a message and the user
//! retries by re-tapping submit or refreshing.

use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{extract_login, Appointment, BookingPayload, LoginSession};

const LOGIN_PATH: &str = "/auterota/login";
const AGENDAMENTOS_PATH: &str = "/auterota/agendamentos";

/// Agenda backend API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// List-response wrapper used by the backend.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    /// Create a client against the configured backend.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client init failed: {e}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Authenticate and unpack the user/token pair from the response.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        let body = serde_json::json!({ "email": email, "password": password });

        tracing::debug!(url = %url, "login request");

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(AppError::Connection)?;

        let payload: Value = Self::check_response_json(response).await?;
        let session = extract_login(&payload)?;
        Ok(session)
    }

    /// Fetch the full appointment listing, normalizing each row.
    pub async fn list_appointments(&self, token: Option<&str>) -> Result<Vec<Appointment>> {
        let url = format!("{}{}", self.base_url, AGENDAMENTOS_PATH);

        let response = self
            .request(reqwest::Method::GET, &url, token)
            .send()
            .await
            .map_err(AppError::Connection)?;

        let envelope: ApiEnvelope = Self::check_response_json(response).await?;
        if !envelope.success {
            return Err(AppError::Api(envelope.message.unwrap_or_else(|| {
                "could not fetch appointments".to_string()
            })));
        }

        let rows = match envelope.data {
            Value::Array(rows) => rows,
            _ => Vec::new(),
        };

        Ok(rows.iter().map(Appointment::from_value).collect())
    }

    /// Create a new appointment.
    pub async fn create_appointment(
        &self,
        token: Option<&str>,
        payload: &BookingPayload,
    ) -> Result<()> {
        let url = format!("{}{}", self.base_url, AGENDAMENTOS_PATH);

        let response = self
            .request(reqwest::Method::POST, &url, token)
            .json(payload)
            .send()
            .await
            .map_err(AppError::Connection)?;

        Self::check_response(response).await
    }

    /// Update an existing appointment by id.
    pub async fn update_appointment(
        &self,
        token: Option<&str>,
        id: &str,
        payload: &BookingPayload,
    ) -> Result<()> {
        let url = format!("{}{}/{}", self.base_url, AGENDAMENTOS_PATH, id);

        let response = self
            .request(reqwest::Method::PUT, &url, token)
            .json(payload)
            .send()
            .await
            .map_err(AppError::Connection)?;

        Self::check_response(response).await
    }

    /// Delete an appointment by id.
    pub async fn delete_appointment(&self, token: Option<&str>, id: &str) -> Result<()> {
        let url = format!("{}{}/{}", self.base_url, AGENDAMENTOS_PATH, id);

        let response = self
            .request(reqwest::Method::DELETE, &url, token)
            .send()
            .await
            .map_err(AppError::Connection)?;

        Self::check_response(response).await
    }

    /// Build a request, attaching the bearer token when one is available.
    /// A missing token is not an error; the server decides whether the
    /// call needed one.
    fn request(
        &self,
        method: reqwest::Method,
        url: &str,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        tracing::debug!(method = %method, url = %url, "api request");

        let req = self.http.request(method, url);
        match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Check response status, discarding the body on success.
    async fn check_response(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::server_error(status.as_u16(), response).await)
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::server_error(status.as_u16(), response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("JSON parse error: {e}")))
    }

    /// Turn a non-2xx response into a user-facing server error: the body's
    /// `message` verbatim when present, otherwise status-coded wording.
    async fn server_error(status: u16, response: reqwest::Response) -> AppError {
        tracing::debug!(status, "server reported failure");

        let body: Option<Value> = response.json().await.ok();
        let server_message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        let message = match server_message {
            Some(m) => m,
            None => match status {
                404 => "backend not reachable, check that the server is running".to_string(),
                s if s >= 500 => "internal server error, try again later".to_string(),
                s => format!("request failed with HTTP {s}"),
            },
        };

        AppError::Server { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_from_default_config() {
        assert!(ApiClient::new(&Config::default()).is_ok());
    }

    #[test]
    fn test_envelope_tolerates_missing_fields() {
        let env: ApiEnvelope = serde_json::from_str("{}").unwrap();
        assert!(!env.success);
        assert!(env.data.is_null());
        assert!(env.message.is_none());

        let env: ApiEnvelope =
            serde_json::from_str(r#"{"success":true,"data":[{"id":1,"hora":"09:00"}]}"#).unwrap();
        assert!(env.success);
        assert_eq!(env.data.as_array().map(Vec::len), Some(1));
    }
}
