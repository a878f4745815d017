// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login-payload extraction and session persistence tests.
//!
//! The backend has shipped several login-response shapes; these tests pin
//! every extraction path and the write-both/erase-both storage contract.

use agenda_admin::auth::{AuthSession, AuthState};
use agenda_admin::models::{extract_login, LoginError};
use agenda_admin::storage::AuthStore;
use serde_json::json;

fn temp_path(name: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("agenda-admin-it-{}-{}.json", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn test_every_known_login_shape() {
    let shapes = [
        json!({"usuario": {"nome": "Ana"}, "token": "t"}),
        json!({"user": {"nome": "Ana"}, "token": "t"}),
        json!({"data": {"usuario": {"nome": "Ana"}}, "token": "t"}),
        json!({"data": {"user": {"nome": "Ana"}, "token": "t"}}),
        json!({"data": {"nome": "Ana"}, "accessToken": "t"}),
        json!({"usuario": {"nome": "Ana"}, "access_token": "t"}),
    ];

    for shape in &shapes {
        let session = extract_login(shape).unwrap_or_else(|e| panic!("{shape}: {e}"));
        assert_eq!(session.token, "t", "shape: {shape}");
    }
}

#[test]
fn test_missing_pieces_reported_distinctly() {
    let no_user = json!({"token": "t"});
    assert_eq!(extract_login(&no_user).unwrap_err(), LoginError::MissingUser);
    assert_eq!(
        LoginError::MissingUser.to_string(),
        "user not found in response"
    );

    let no_token = json!({"usuario": {"nome": "Ana"}});
    assert_eq!(extract_login(&no_token).unwrap_err(), LoginError::MissingToken);
    assert_eq!(
        LoginError::MissingToken.to_string(),
        "token not found in response"
    );
}

#[test]
fn test_session_survives_restart() {
    let path = temp_path("restart");

    {
        let session = AuthSession::init(AuthStore::new(path.clone()));
        session
            .login(json!({"nome": "Ana", "perfil": "admin"}), "tok".to_string())
            .unwrap();
    }

    // A new process reads the same pair back
    let session = AuthSession::init(AuthStore::new(path.clone()));
    assert!(session.is_logged_in());
    assert!(session.is_admin());
    assert_eq!(session.state(), AuthState::SignedIn { is_admin: true });

    session.logout().unwrap();
    let session = AuthSession::init(AuthStore::new(path));
    assert!(!session.is_logged_in());
    assert_eq!(session.state(), AuthState::SignedOut);
}

#[test]
fn test_logout_erases_both_halves() {
    let path = temp_path("erase");
    let session = AuthSession::init(AuthStore::new(path.clone()));

    session.login(json!({"nome": "Ana"}), "tok".to_string()).unwrap();
    session.logout().unwrap();

    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
    assert!(!path.exists());
}
