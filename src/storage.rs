// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! On-device persistence of the authenticated session.
//!
//! Only two things survive between runs: the bearer token and the last-known
//! user record. They are stored as one JSON document so they can only ever
//! be written or erased together; there is no partial-update state to
//! recover from.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{AppError, Result};

/// The persisted token/user pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAuth {
    /// Opaque bearer token.
    pub token: String,
    /// Schema-free user record, as last returned by the backend.
    pub user: Value,
}

/// File-backed store for the auth pair.
#[derive(Debug, Clone)]
pub struct AuthStore {
    path: PathBuf,
}

impl AuthStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the persisted pair. A missing or unreadable file reads as
    /// signed out rather than an error.
    pub fn load(&self) -> Option<StoredAuth> {
        let bytes = fs::read(&self.path).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(auth) => Some(auth),
            Err(err) => {
                tracing::warn!(error = %err, path = %self.path.display(), "discarding corrupt auth store");
                None
            }
        }
    }

    /// Persist the pair, replacing whatever was there.
    pub fn save(&self, auth: &StoredAuth) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| AppError::Storage(e.to_string()))?;
            }
        }

        let bytes =
            serde_json::to_vec_pretty(auth).map_err(|e| AppError::Storage(e.to_string()))?;
        fs::write(&self.path, bytes).map_err(|e| AppError::Storage(e.to_string()))
    }

    /// Erase the pair. Already-absent state is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(e.to_string())),
        }
    }
}
