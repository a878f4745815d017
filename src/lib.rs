// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Agenda-Admin: core logic for the barbershop appointment admin client.
//!
//! This crate owns everything below the UI: admin-privilege inference over
//! schema-free user records and token claims, slot availability and
//! conflict filtering, booking validation, date/phone formatting, the
//! backend API client, and persistence of the authenticated session.

pub mod api;
pub mod auth;
pub mod config;
pub mod datetime;
pub mod error;
pub mod format;
pub mod listing;
pub mod models;
pub mod scheduling;
pub mod storage;

pub use api::ApiClient;
pub use auth::{AuthSession, AuthState};
pub use config::Config;
pub use error::{AppError, Result};

/// Initialize structured JSON logging.
///
/// Host applications call this once at startup; `RUST_LOG` refines the
/// filter.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agenda_admin=debug".parse().expect("static directive"))
                .add_directive("info".parse().expect("static directive")),
        )
        .with(format)
        .init();
}
