//! Reading physician fields out of page inputs.
//!
//! Pages hand in a [`FormSource`] instead of the core querying global page
//! state. The registration page addresses inputs by name; the update page
//! addresses them by position, id first.

use std::collections::HashMap;

use crate::types::{Medico, MedicoId, NovoMedico};
use crate::validation::ValidationError;

/// The six inputs of the physician form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Id,
    Name,
    Specialty,
    Phone,
    Crm,
    Email,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Id,
        FormField::Name,
        FormField::Specialty,
        FormField::Phone,
        FormField::Crm,
        FormField::Email,
    ];

    /// `name` attribute of the input element.
    pub fn input_name(&self) -> &'static str {
        match self {
            FormField::Id => "input-id-medico",
            FormField::Name => "input-nome",
            FormField::Specialty => "input-especialidade-medico",
            FormField::Phone => "input-telefone-medico",
            FormField::Crm => "input-crm-medico",
            FormField::Email => "input-email",
        }
    }

    /// Index of the input on the update page.
    pub fn position(&self) -> usize {
        match self {
            FormField::Id => 0,
            FormField::Name => 1,
            FormField::Specialty => 2,
            FormField::Phone => 3,
            FormField::Crm => 4,
            FormField::Email => 5,
        }
    }

    /// Label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Id => "id",
            FormField::Name => "nome",
            FormField::Specialty => "especialidade",
            FormField::Phone => "telefone",
            FormField::Crm => "crm",
            FormField::Email => "email",
        }
    }
}

/// Read-only view of the inputs on a page.
pub trait FormSource {
    /// Current value of `field`, or `None` if the page has no such input.
    fn value(&self, field: FormField) -> Option<String>;
}

/// Inputs addressed by their `name` attribute.
#[derive(Debug, Clone, Default)]
pub struct NamedInputs {
    values: HashMap<String, String>,
}

impl NamedInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field.input_name(), value);
        self
    }
}

impl FromIterator<(String, String)> for NamedInputs {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl FormSource for NamedInputs {
    fn value(&self, field: FormField) -> Option<String> {
        self.values.get(field.input_name()).cloned()
    }
}

/// Inputs addressed by document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionalInputs(pub Vec<String>);

impl FormSource for PositionalInputs {
    fn value(&self, field: FormField) -> Option<String> {
        self.0.get(field.position()).cloned()
    }
}

/// Raw form values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicoForm {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub phone: String,
    pub crm: String,
    pub email: String,
}

impl MedicoForm {
    /// Fill the form from a stored record; this is what the update page
    /// shows on load.
    pub fn populate(medico: &Medico) -> Self {
        Self {
            id: medico.id.to_string(),
            name: medico.name.clone(),
            specialty: medico.specialty.clone(),
            phone: medico.phone.clone(),
            crm: medico.crm.clone(),
            email: medico.email.clone(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::Specialty => &self.specialty,
            FormField::Phone => &self.phone,
            FormField::Crm => &self.crm,
            FormField::Email => &self.email,
        }
    }

    /// Values in update-page order, ready to be written back into inputs.
    pub fn to_positional(&self) -> PositionalInputs {
        PositionalInputs(FormField::ALL.iter().map(|f| self.get(*f).to_string()).collect())
    }

    pub fn to_novo_medico(&self) -> NovoMedico {
        NovoMedico {
            name: self.name.clone(),
            specialty: self.specialty.clone(),
            phone: self.phone.clone(),
            crm: self.crm.clone(),
            email: self.email.clone(),
        }
    }

    pub fn to_medico(&self) -> Result<Medico, ValidationError> {
        let id = self
            .id
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidId)?;
        Ok(self.to_novo_medico().with_id(MedicoId(id)))
    }
}

/// Read every field from `source`. Missing inputs become empty strings.
pub fn collect(source: &impl FormSource) -> MedicoForm {
    let read = |field| source.value(field).unwrap_or_default();
    MedicoForm {
        id: read(FormField::Id),
        name: read(FormField::Name),
        specialty: read(FormField::Specialty),
        phone: read(FormField::Phone),
        crm: read(FormField::Crm),
        email: read(FormField::Email),
    }
}
