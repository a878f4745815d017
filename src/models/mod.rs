// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data model types exchanged with the agenda backend.

pub mod appointment;
pub mod login;
pub mod record;

pub use appointment::{Appointment, BookingPayload, SERVICE_OPTIONS};
pub use login::{extract_login, LoginError, LoginSession};
pub use record::Record;
