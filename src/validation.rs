//! Submit-time rules for an appointment draft.
//!
//! Three checks, evaluated in a fixed order and short-circuiting at the
//! first failure: every field present, RUT of exactly 11 digits, date not
//! before today. Closed-choice fields are not checked here; the controls
//! only offer valid tokens.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::AppointmentDraft;

static RUT_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{11}$").unwrap());

/// User-facing validation failures. `Display` is the banner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Todos los campos son obligatorios.")]
    MissingField,
    #[error("El RUT debe tener 11 dígitos.")]
    MalformedRut,
    #[error("La fecha no puede ser anterior a hoy.")]
    PastDate,
}

impl ValidationError {
    /// Stable key for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::MalformedRut => "malformed_rut",
            Self::PastDate => "past_date",
        }
    }
}

/// Exactly 11 ASCII decimal digits, no separators.
pub fn is_valid_rut(rut: &str) -> bool {
    RUT_PATTERN.is_match(rut)
}

/// Checks `draft` against `today` (`YYYY-MM-DD`).
///
/// The date rule compares ISO strings lexicographically, which for
/// well-formed dates is calendar order.
pub fn validate_draft(draft: &AppointmentDraft, today: &str) -> Result<(), ValidationError> {
    if draft.first_missing().is_some() {
        return Err(ValidationError::MissingField);
    }

    if !is_valid_rut(&draft.rut) {
        return Err(ValidationError::MalformedRut);
    }

    if draft.date.as_str() < today {
        return Err(ValidationError::PastDate);
    }

    Ok(())
}
