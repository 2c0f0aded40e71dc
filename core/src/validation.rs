//! Presence and type checks run before any request is built.

use thiserror::Error;

use crate::form::{FormField, MedicoForm};

/// Fields that must be non-empty on every submission, in check order.
const REQUIRED: [FormField; 5] = [
    FormField::Name,
    FormField::Specialty,
    FormField::Phone,
    FormField::Crm,
    FormField::Email,
];

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field is empty: {}", .0.label())]
    MissingField(FormField),

    #[error("phone is not a number")]
    PhoneNotNumeric,

    #[error("id is not an integer")]
    InvalidId,
}

impl ValidationError {
    /// The single message shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "Preencha todos os campos do formulário",
            ValidationError::PhoneNotNumeric => "O telefone do médico deve ser um número",
            ValidationError::InvalidId => "Identificador do médico inválido",
        }
    }
}

/// Check a registration submission.
pub fn validate(form: &MedicoForm) -> Result<(), ValidationError> {
    if let Some(field) = REQUIRED.iter().find(|f| form.get(**f).trim().is_empty()) {
        return Err(ValidationError::MissingField(*field));
    }
    if !is_numeric(&form.phone) {
        return Err(ValidationError::PhoneNotNumeric);
    }
    Ok(())
}

/// Registration checks plus an integer id.
pub fn validate_for_update(form: &MedicoForm) -> Result<(), ValidationError> {
    validate(form)?;
    form.to_medico().map(|_| ())
}

pub fn is_valid(form: &MedicoForm) -> bool {
    validate(form).is_ok()
}

fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok_and(f64::is_finite)
}
