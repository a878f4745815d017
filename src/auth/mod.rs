// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin-access evaluation and the authenticated session.

pub mod admin;
pub mod claims;
pub mod session;

pub use admin::{has_admin_signal, is_admin_user};
pub use claims::{decode_token_claims, is_claims_admin, validate_admin_access};
pub use session::{AuthSession, AuthState};
