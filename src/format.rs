// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Phone and search-text formatting helpers.

/// Keep only the ASCII digits of a phone string.
///
/// This is the form sent to the backend.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format a Brazilian phone number for display.
///
/// 11 digits become `(DD) DDDDD-DDDD`, 10 become `(DD) DDDD-DDDD`; anything
/// else is passed through untouched. Re-formatting an already formatted
/// number is a no-op since only the digits are looked at.
pub fn format_phone(phone: &str) -> String {
    let digits = phone_digits(phone);

    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => phone.to_string(),
    }
}

/// Normalize a string for accent- and case-insensitive search.
///
/// Lowercases, folds Latin diacritics, and drops punctuation, keeping letters,
/// digits and whitespace.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(fold_diacritic)
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}
