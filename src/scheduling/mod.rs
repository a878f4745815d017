// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time-slot availability and booking-form validation.

pub mod slots;
pub mod validation;

pub use slots::{
    available_slots, occupied_slots, reselect_slot, slot_availability, time_slots, SlotAvailability,
};
pub use validation::{validate_booking, validate_booking_now, BookingError, BookingForm};
