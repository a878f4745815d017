// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pre-submission validation of the booking form.

use chrono::{DateTime, Local};

use crate::datetime::{self, CalendarDate};
use crate::format::phone_digits;
use crate::models::BookingPayload;

/// The booking form as typed: display-form date (`DD/MM/YYYY`), free-text
/// name and phone, an `HH:MM` slot.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub nome: String,
    pub telefone: String,
    pub servico: String,
    pub data: String,
    pub horario: String,
}

impl BookingForm {
    /// The cleaned wire body for a create/update call: trimmed name,
    /// digits-only phone, ISO date.
    pub fn payload(&self) -> BookingPayload {
        let data = self.data.trim();
        BookingPayload {
            nome: self.nome.trim().to_string(),
            telefone: phone_digits(&self.telefone),
            servico: self.servico.clone(),
            data: datetime::display_to_iso(data).unwrap_or_else(|| data.to_string()),
            horario: self.horario.clone(),
        }
    }
}

/// One violated rule, with its user-facing message. Checks run in a fixed
/// order and stop at the first violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("name is required")]
    MissingName,
    #[error("phone is required")]
    MissingPhone,
    #[error("date is required")]
    MissingDate,
    #[error("date must be in DD/MM/YYYY format")]
    BadDateFormat,
    #[error("cannot book a past date")]
    DateInPast,
    #[error("cannot book a time already gone today")]
    TimeInPast,
    #[error("this time slot is already taken, pick another one")]
    SlotTaken,
}

/// Validate a booking before submission.
///
/// `occupied` is the occupied-slot set for the form's date as computed by
/// the availability filter; the slot-conflict rule only applies to new
/// bookings (an edit keeps its own slot). Nothing here touches the network.
pub fn validate_booking(
    form: &BookingForm,
    occupied: &[String],
    is_editing: bool,
    now: &DateTime<Local>,
) -> Result<(), BookingError> {
    if form.nome.trim().is_empty() {
        return Err(BookingError::MissingName);
    }

    if form.telefone.trim().is_empty() {
        return Err(BookingError::MissingPhone);
    }

    let data = form.data.trim();
    if data.is_empty() {
        return Err(BookingError::MissingDate);
    }

    if !matches_display_format(data) {
        return Err(BookingError::BadDateFormat);
    }

    if datetime::is_date_in_past(data, CalendarDate::from_local(now)) {
        return Err(BookingError::DateInPast);
    }

    if datetime::is_time_in_past(data, &form.horario, now) {
        return Err(BookingError::TimeInPast);
    }

    if !is_editing && occupied.iter().any(|h| h == &form.horario) {
        return Err(BookingError::SlotTaken);
    }

    Ok(())
}

/// [`validate_booking`] against the wall clock.
pub fn validate_booking_now(
    form: &BookingForm,
    occupied: &[String],
    is_editing: bool,
) -> Result<(), BookingError> {
    validate_booking(form, occupied, is_editing, &Local::now())
}

/// Exactly `\d{2}/\d{2}/\d{4}`.
fn matches_display_format(data: &str) -> bool {
    let b = data.as_bytes();
    b.len() == 10
        && b[2] == b'/'
        && b[5] == b'/'
        && [0, 1, 3, 4, 6, 7, 8, 9]
            .iter()
            .all(|&i| b[i].is_ascii_digit())
}
