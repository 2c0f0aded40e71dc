//! Domain DTOs for the physician API.
//!
//! # Design
//! Rust field names are English; the wire names are the backend's Portuguese
//! keys (`idMedico`, `nome`, `especialidade`, `telefone`, `crm`, `email`).
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! The phone travels as a JSON string. One older page posted it as a JSON
//! number on update, so deserialization accepts either and normalizes to the
//! string form.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned physician identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MedicoId(pub i64);

impl fmt::Display for MedicoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for MedicoId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A physician record as stored by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medico {
    #[serde(rename = "idMedico")]
    pub id: MedicoId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "especialidade")]
    pub specialty: String,
    #[serde(rename = "telefone", deserialize_with = "phone_from_string_or_number")]
    pub phone: String,
    pub crm: String,
    pub email: String,
}

/// Request payload for registering a new physician. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NovoMedico {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "especialidade")]
    pub specialty: String,
    #[serde(rename = "telefone", deserialize_with = "phone_from_string_or_number")]
    pub phone: String,
    pub crm: String,
    pub email: String,
}

impl NovoMedico {
    /// Attach a server-assigned id.
    pub fn with_id(self, id: MedicoId) -> Medico {
        Medico {
            id,
            name: self.name,
            specialty: self.specialty,
            phone: self.phone,
            crm: self.crm,
            email: self.email,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PhoneRepr {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn phone_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match PhoneRepr::deserialize(deserializer)? {
        PhoneRepr::Text(text) => text,
        PhoneRepr::Integer(n) => n.to_string(),
        PhoneRepr::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medico_uses_backend_field_names() {
        let medico = Medico {
            id: MedicoId(7),
            name: "Ana".to_string(),
            specialty: "Cardiologia".to_string(),
            phone: "11988887777".to_string(),
            crm: "CRM-SP 1234".to_string(),
            email: "ana@clinica.com".to_string(),
        };
        let json = serde_json::to_value(&medico).unwrap();
        assert_eq!(json["idMedico"], 7);
        assert_eq!(json["nome"], "Ana");
        assert_eq!(json["especialidade"], "Cardiologia");
        assert_eq!(json["telefone"], "11988887777");
        assert_eq!(json["crm"], "CRM-SP 1234");
        assert_eq!(json["email"], "ana@clinica.com");
    }

    #[test]
    fn novo_medico_has_no_id() {
        let novo = NovoMedico {
            name: "Ana".to_string(),
            specialty: "Pediatria".to_string(),
            phone: "123".to_string(),
            crm: "1".to_string(),
            email: "a@b.c".to_string(),
        };
        let json = serde_json::to_value(&novo).unwrap();
        assert!(json.get("idMedico").is_none());
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn numeric_phone_is_accepted() {
        let medico: Medico = serde_json::from_str(
            r#"{"idMedico":1,"nome":"A","especialidade":"B","telefone":11988887777,"crm":"C","email":"D"}"#,
        )
        .unwrap();
        assert_eq!(medico.phone, "11988887777");
    }

    #[test]
    fn missing_id_is_rejected_for_stored_records() {
        let result: Result<Medico, _> = serde_json::from_str(
            r#"{"nome":"A","especialidade":"B","telefone":"1","crm":"C","email":"D"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn with_id_keeps_fields() {
        let novo = NovoMedico {
            name: "Bruno".to_string(),
            specialty: "Ortopedia".to_string(),
            phone: "55".to_string(),
            crm: "99".to_string(),
            email: "b@x.org".to_string(),
        };
        let medico = novo.clone().with_id(MedicoId(3));
        assert_eq!(medico.id, MedicoId(3));
        assert_eq!(medico.name, novo.name);
        assert_eq!(medico.email, novo.email);
    }

    #[test]
    fn id_displays_as_plain_integer() {
        assert_eq!(MedicoId(42).to_string(), "42");
    }
}
