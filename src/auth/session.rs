// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-wide authenticated session.
//!
//! Lifecycle is explicit: `init` reads the persisted pair from a previous
//! run, `login`/`logout` write through to the store, and every transition is
//! published on a watch channel. The channel stands in for the browser's
//! cross-tab storage events: there is no analogous ambient signal outside a
//! browser, so login/logout announce themselves instead.

use std::sync::RwLock;

use serde_json::Value;
use tokio::sync::watch;

use crate::auth::claims::validate_admin_access;
use crate::error::Result;
use crate::models::Record;
use crate::storage::{AuthStore, StoredAuth};

/// The published session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    SignedOut,
    SignedIn { is_admin: bool },
}

/// Holder of the current token/user pair and its change signal.
pub struct AuthSession {
    store: AuthStore,
    current: RwLock<Option<StoredAuth>>,
    state_tx: watch::Sender<AuthState>,
}

impl AuthSession {
    /// Start the session from whatever a previous run persisted.
    pub fn init(store: AuthStore) -> Self {
        let current = store.load();
        let state = match &current {
            Some(auth) => AuthState::SignedIn {
                is_admin: validate_admin_access(&auth.user, Some(&auth.token)),
            },
            None => AuthState::SignedOut,
        };

        let (state_tx, _) = watch::channel(state);
        Self {
            store,
            current: RwLock::new(current),
            state_tx,
        }
    }

    /// Record a successful login: stamp the admin verdict onto the user
    /// record, persist the pair, publish the transition.
    ///
    /// Returns the admin verdict so the caller can gate navigation.
    pub fn login(&self, mut user: Value, token: String) -> Result<bool> {
        let is_admin = validate_admin_access(&user, Some(&token));

        // Stamp the verdict so later reads of the stored record agree with
        // the gate that admitted it.
        if let Some(map) = user.as_object_mut() {
            map.insert("isAdmin".to_string(), Value::Bool(is_admin));
        }

        let auth = StoredAuth { token, user };
        self.store.save(&auth)?;

        *self.write_lock() = Some(auth);
        self.state_tx.send_replace(AuthState::SignedIn { is_admin });
        tracing::info!(is_admin, "signed in");
        Ok(is_admin)
    }

    /// Erase the persisted pair and publish the sign-out.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;

        *self.write_lock() = None;
        self.state_tx.send_replace(AuthState::SignedOut);
        tracing::info!("signed out");
        Ok(())
    }

    /// The current bearer token, if signed in.
    pub fn token(&self) -> Option<String> {
        self.read_lock().as_ref().map(|a| a.token.clone())
    }

    /// The current user record, if signed in.
    pub fn user(&self) -> Option<Value> {
        self.read_lock().as_ref().map(|a| a.user.clone())
    }

    /// Signed in means both halves of the pair are present.
    pub fn is_logged_in(&self) -> bool {
        self.read_lock()
            .as_ref()
            .map(|a| !a.token.is_empty())
            .unwrap_or(false)
    }

    /// The stamped admin flag of the stored user record.
    pub fn is_admin(&self) -> bool {
        self.read_lock()
            .as_ref()
            .map(|a| Record::new(&a.user).bool_or("isAdmin", false))
            .unwrap_or(false)
    }

    /// Current published state.
    pub fn state(&self) -> AuthState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to login/logout transitions.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, Option<StoredAuth>> {
        self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Option<StoredAuth>> {
        self.current.write().unwrap_or_else(|e| e.into_inner())
    }
}
