// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Phone and date formatting tests.

use agenda_admin::datetime::{display_to_iso, format_date_display, iso_to_display};
use agenda_admin::format::{format_phone, normalize_text, phone_digits};

#[test]
fn test_eleven_digit_mobile() {
    assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
}

#[test]
fn test_ten_digit_landline() {
    assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
}

#[test]
fn test_other_digit_counts_pass_through() {
    assert_eq!(format_phone("123"), "123");
    assert_eq!(format_phone("119876543210"), "119876543210");
    assert_eq!(format_phone(""), "");
}

#[test]
fn test_reformatting_is_idempotent() {
    let formatted = format_phone("11987654321");
    assert_eq!(format_phone(&formatted), formatted);
    assert_eq!(phone_digits(&formatted), "11987654321");
}

#[test]
fn test_formats_partially_formatted_input() {
    assert_eq!(format_phone("11 98765-4321"), "(11) 98765-4321");
}

#[test]
fn test_date_wire_and_display_conversion() {
    assert_eq!(display_to_iso("10/06/2025").as_deref(), Some("2025-06-10"));
    assert_eq!(iso_to_display("2025-06-10").as_deref(), Some("10/06/2025"));
    assert_eq!(format_date_display("2025-06-10"), "10/06/2025");
    assert_eq!(format_date_display("10/06/2025"), "10/06/2025");
}

#[test]
fn test_search_normalization() {
    assert_eq!(normalize_text("São João!"), "sao joao");
    assert_eq!(normalize_text("  MARIA  "), "  maria  ");
}
