// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filtering and ordering of the appointment listing.

use std::cmp::Ordering;

use crate::datetime::parse_date;
use crate::format::normalize_text;
use crate::models::Appointment;

/// Keep appointments whose name or phone contains the search term,
/// accent- and case-insensitively. An empty term keeps everything.
pub fn search_filter(appointments: &[Appointment], term: &str) -> Vec<Appointment> {
    let term = normalize_text(term.trim());
    if term.is_empty() {
        return appointments.to_vec();
    }

    appointments
        .iter()
        .filter(|a| {
            normalize_text(&a.nome).contains(&term) || normalize_text(&a.telefone).contains(&term)
        })
        .cloned()
        .collect()
}

/// Keep appointments inside the inclusive `[start, end]` date range.
///
/// Bounds are display-form dates; an unparseable bound applies no filter on
/// that side, while rows whose own date does not parse are excluded by any
/// active bound.
pub fn date_range_filter(
    appointments: &[Appointment],
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<Appointment> {
    let start = start.and_then(parse_date);
    let end = end.and_then(parse_date);

    appointments
        .iter()
        .filter(|a| {
            let row = parse_date(&a.data);
            let after_start = match start {
                Some(s) => row.map(|d| d >= s).unwrap_or(false),
                None => true,
            };
            let before_end = match end {
                Some(e) => row.map(|d| d <= e).unwrap_or(false),
                None => true,
            };
            after_start && before_end
        })
        .cloned()
        .collect()
}

/// Order by date, then by slot within the day. Rows whose dates do not parse
/// compare equal and keep their relative order.
pub fn sort_by_schedule(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| {
        match (parse_date(&a.data), parse_date(&b.data)) {
            (Some(da), Some(db)) if da != db => da.cmp(&db),
            (Some(_), Some(_)) => a.horario.cmp(&b.horario),
            _ => Ordering::Equal,
        }
    });
}

/// The listing pipeline: search, date range, chronological order.
pub fn filter_appointments(
    appointments: &[Appointment],
    term: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<Appointment> {
    let mut filtered = search_filter(appointments, term);
    if start.is_some() || end.is_some() {
        filtered = date_range_filter(&filtered, start, end);
    }
    sort_by_schedule(&mut filtered);
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appt(nome: &str, telefone: &str, data: &str, horario: &str) -> Appointment {
        Appointment {
            nome: nome.to_string(),
            telefone: telefone.to_string(),
            data: data.to_string(),
            horario: horario.to_string(),
            ..Appointment::default()
        }
    }

    #[test]
    fn test_search_matches_name_without_accents() {
        let list = vec![
            appt("João Silva", "11999998888", "2025-06-10", "09:00"),
            appt("Maria", "11888887777", "2025-06-10", "10:00"),
        ];

        let hits = search_filter(&list, "joao");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].nome, "João Silva");
    }

    #[test]
    fn test_search_matches_phone() {
        let list = vec![
            appt("João", "11999998888", "2025-06-10", "09:00"),
            appt("Maria", "11888887777", "2025-06-10", "10:00"),
        ];

        let hits = search_filter(&list, "8888877");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].nome, "Maria");
    }

    #[test]
    fn test_date_range_inclusive() {
        let list = vec![
            appt("A", "1", "2025-06-09", "09:00"),
            appt("B", "2", "2025-06-10", "09:00"),
            appt("C", "3", "2025-06-11", "09:00"),
            appt("D", "4", "not-a-date", "09:00"),
        ];

        let hits = date_range_filter(&list, Some("10/06/2025"), Some("11/06/2025"));
        let names: Vec<&str> = hits.iter().map(|a| a.nome.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_unparseable_bound_is_ignored() {
        let list = vec![appt("A", "1", "2025-06-09", "09:00")];
        let hits = date_range_filter(&list, Some("whenever"), None);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_sort_by_date_then_slot() {
        let mut list = vec![
            appt("late", "1", "2025-06-11", "09:00"),
            appt("second", "2", "2025-06-10", "14:00"),
            appt("first", "3", "2025-06-10", "09:00"),
        ];

        sort_by_schedule(&mut list);
        let names: Vec<&str> = list.iter().map(|a| a.nome.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "late"]);
    }
}
