// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin-access evaluation tests.
//!
//! The evaluator is intentionally permissive: the backend's user shape has
//! drifted over the years and these tests pin the exact coercions consuming
//! code relies on.

use agenda_admin::auth::{decode_token_claims, is_admin_user, is_claims_admin, validate_admin_access};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::{json, Value};

fn token_with_claims(claims: &Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap());
    format!("header.{payload}.signature")
}

#[test]
fn test_literal_is_admin_flag() {
    assert!(is_admin_user(&json!({"isAdmin": true})));
    assert!(is_admin_user(&json!({"isAdmin": true, "nome": "Ana", "extra": null})));
}

#[test]
fn test_truthy_flag_spellings() {
    assert!(is_admin_user(&json!({"admin": "true"})));
    assert!(is_admin_user(&json!({"is_admin": 1})));
    assert!(is_admin_user(&json!({"isAdm": "1"})));
    assert!(is_admin_user(&json!({"adm": "Sim"})));
    assert!(!is_admin_user(&json!({"isAdmin": "no"})));
}

#[test]
fn test_manager_tipo_matches_geren_fragment() {
    assert!(is_admin_user(&json!({"tipo": "gerente"})));
    assert!(is_admin_user(&json!({"cargo": "Gerência"})));
}

#[test]
fn test_access_level_threshold_in_claims() {
    assert!(is_claims_admin(&json!({"nivelAcesso": 7})));
    assert!(!is_claims_admin(&json!({"nivelAcesso": 6})));
}

#[test]
fn test_claims_via_token_roundtrip() {
    let user = json!({"nome": "Ana"});

    let admin_token = token_with_claims(&json!({"perfil": "administrador"}));
    assert!(validate_admin_access(&user, Some(&admin_token)));

    let plain_token = token_with_claims(&json!({"perfil": "cliente", "nivel": 2}));
    assert!(!validate_admin_access(&user, Some(&plain_token)));
}

#[test]
fn test_malformed_tokens_fall_back_to_user_verdict() {
    let admin_user = json!({"isAdmin": true});
    let plain_user = json!({"nome": "Ana"});

    for bad in ["", "nodots", "a.b", "h.%%%.s", "h.!.s"] {
        assert!(validate_admin_access(&admin_user, Some(bad)), "token: {bad:?}");
        assert!(!validate_admin_access(&plain_user, Some(bad)), "token: {bad:?}");
    }
}

#[test]
fn test_single_segment_token_has_no_claims() {
    assert_eq!(decode_token_claims("justonesegment"), None);
}

#[test]
fn test_nested_signal_within_depth_bound() {
    let user = json!({
        "perfil": {
            "permissoes": {"grupo": "gerencia"}
        }
    });
    assert!(is_admin_user(&user));
}

#[test]
fn test_unrelated_record_is_not_admin() {
    let user = json!({
        "id": 7,
        "email": "ana@example.com",
        "nome": "Ana",
        "endereco": {"rua": "Rua A", "numero": 10}
    });
    assert!(!is_admin_user(&user));
}
