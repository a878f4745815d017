// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared across the client core.

use crate::models::LoginError;
use crate::scheduling::BookingError;

/// Application error type.
///
/// Validation failures are caught before any network traffic; connection and
/// server errors are surfaced to the user and retried only by an explicit
/// user action (re-tapping submit or pulling to refresh).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Transport-level failure: no HTTP status was obtained.
    #[error("connection error, check your network")]
    Connection(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The server answered 2xx but flagged the operation unsuccessful.
    #[error("{0}")]
    Api(String),

    /// A booking form rule was violated (never reaches the network layer).
    #[error(transparent)]
    Validation(#[from] BookingError),

    /// The login response was missing the user object or the token.
    #[error(transparent)]
    Login(#[from] LoginError),

    /// Reading or writing the persisted auth pair failed.
    #[error("auth storage error: {0}")]
    Storage(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status associated with the error, if one was obtained.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for the client core.
pub type Result<T> = std::result::Result<T, AppError>;
