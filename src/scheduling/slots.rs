// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The daily slot catalog and the availability filter.

use crate::models::Appointment;

/// First bookable hour of the day.
pub const FIRST_SLOT_HOUR: u32 = 9;
/// Last bookable hour of the day (inclusive).
pub const LAST_SLOT_HOUR: u32 = 20;

/// The fixed daily catalog of hourly slots, `09:00` through `20:00`.
///
/// Not persisted anywhere; regenerated deterministically on demand.
pub fn time_slots() -> Vec<String> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .map(|hour| format!("{hour:02}:00"))
        .collect()
}

/// Slots already booked on `iso_date` (wire form `YYYY-MM-DD`).
///
/// When editing an existing appointment, its own slot is removed from the
/// occupied set so the editor can keep that slot selected without it reading
/// as taken by someone else.
pub fn occupied_slots(
    appointments: &[Appointment],
    iso_date: &str,
    editing: Option<&Appointment>,
) -> Vec<String> {
    let mut occupied: Vec<String> = appointments
        .iter()
        .filter(|a| a.data == iso_date)
        .map(|a| a.horario.clone())
        .collect();

    if let Some(editing) = editing {
        let own = editing.horario.as_str();
        if !own.is_empty() {
            occupied.retain(|h| h != own);
        }
    }

    occupied
}

/// The catalog minus the occupied slots, order preserved.
pub fn available_slots(occupied: &[String]) -> Vec<String> {
    time_slots()
        .into_iter()
        .filter(|slot| !occupied.iter().any(|o| o == slot))
        .collect()
}

/// Availability of the daily catalog for a (possibly not yet chosen) date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotAvailability {
    /// No date chosen yet: the full catalog, occupancy unresolved.
    Unresolved(Vec<String>),
    /// At least one slot is open on the chosen date.
    Open(Vec<String>),
    /// Every slot on the chosen date is taken. Surfaced as its own state so
    /// the UI can say "no slots available" instead of showing an empty list.
    FullyBooked,
}

impl SlotAvailability {
    /// The selectable slots in this state (empty when fully booked).
    pub fn slots(&self) -> &[String] {
        match self {
            SlotAvailability::Unresolved(slots) | SlotAvailability::Open(slots) => slots,
            SlotAvailability::FullyBooked => &[],
        }
    }
}

/// Compute availability for `iso_date` given the full appointment listing.
pub fn slot_availability(
    appointments: &[Appointment],
    iso_date: Option<&str>,
    editing: Option<&Appointment>,
) -> SlotAvailability {
    let date = match iso_date {
        Some(d) if !d.is_empty() => d,
        _ => return SlotAvailability::Unresolved(time_slots()),
    };

    let occupied = occupied_slots(appointments, date, editing);
    let available = available_slots(&occupied);

    if available.is_empty() {
        SlotAvailability::FullyBooked
    } else {
        SlotAvailability::Open(available)
    }
}

/// Keep the current selection if still available, otherwise fall back to the
/// first open slot. Purely a UI convenience, not a validation rule.
pub fn reselect_slot<'a>(current: &'a str, available: &'a [String]) -> Option<&'a str> {
    if available.iter().any(|s| s == current) {
        Some(current)
    } else {
        available.first().map(String::as_str)
    }
}
