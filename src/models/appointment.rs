// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Appointment entity and its wire-shape normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Record;

/// Services offered by the booking form. Stored values are free text; this
/// pair is only what the form itself proposes.
pub const SERVICE_OPTIONS: [&str; 2] = ["corte", "barba"];

/// Key synonyms the backend has historically used for the appointment id.
const ID_KEYS: [&str; 5] = ["id", "_id", "agendamento_id", "id_agendamento", "codigo"];

/// An appointment as held by the client.
///
/// The backend owns the entity; the client only carries transient copies
/// fetched fresh on every listing. `data` is the wire form `YYYY-MM-DD`,
/// `horario` an `HH:MM` slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub servico: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub horario: String,
}

impl Appointment {
    /// Normalize a raw backend row into an [`Appointment`].
    ///
    /// Never fails: the id is taken from the first of several synonym keys
    /// (string or number), `hora` is accepted as an alternate spelling of
    /// `horario`, and anything absent becomes empty.
    pub fn from_value(raw: &Value) -> Self {
        let rec = Record::new(raw);

        let id = ID_KEYS
            .iter()
            .filter_map(|k| rec.field(k))
            .find_map(id_text);

        let horario = {
            let h = rec.str_or("horario", "");
            if h.is_empty() {
                rec.str_or("hora", "")
            } else {
                h
            }
        };

        Self {
            id,
            nome: rec.str_or("nome", ""),
            telefone: rec.str_or("telefone", ""),
            servico: rec.str_or("servico", ""),
            data: rec.str_or("data", ""),
            horario,
        }
    }

    /// The appointment id, if a usable one was found on the wire.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Outgoing create/update body.
///
/// Holds the already-cleaned fields: trimmed name, digits-only phone,
/// ISO date, `HH:MM` slot.
#[derive(Debug, Clone, Serialize)]
pub struct BookingPayload {
    pub nome: String,
    pub telefone: String,
    pub servico: String,
    pub data: String,
    pub horario: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_id_synonyms() {
        let a = Appointment::from_value(&json!({"_id": "abc", "nome": "Ana"}));
        assert_eq!(a.id(), Some("abc"));

        let b = Appointment::from_value(&json!({"agendamento_id": 17}));
        assert_eq!(b.id(), Some("17"));

        let c = Appointment::from_value(&json!({"codigo": "A-9"}));
        assert_eq!(c.id(), Some("A-9"));
    }

    #[test]
    fn test_from_value_first_id_key_wins() {
        let a = Appointment::from_value(&json!({"id": 1, "_id": "shadow"}));
        assert_eq!(a.id(), Some("1"));
    }

    #[test]
    fn test_from_value_hora_alternate_key() {
        let a = Appointment::from_value(&json!({"hora": "14:00"}));
        assert_eq!(a.horario, "14:00");

        let b = Appointment::from_value(&json!({"horario": "09:00", "hora": "14:00"}));
        assert_eq!(b.horario, "09:00");
    }

    #[test]
    fn test_service_catalog() {
        assert_eq!(SERVICE_OPTIONS, ["corte", "barba"]);
    }

    #[test]
    fn test_from_value_tolerates_anything() {
        let a = Appointment::from_value(&json!({"nome": 123, "telefone": null}));
        assert_eq!(a.nome, "123");
        assert_eq!(a.telefone, "");
        assert_eq!(a.id(), None);

        let b = Appointment::from_value(&json!("not even an object"));
        assert_eq!(b.id(), None);
        assert_eq!(b.nome, "");
    }
}
