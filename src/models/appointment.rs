use serde::{Deserialize, Serialize};

use super::enums::DraftField;

/// In-progress appointment record held by the booking form.
///
/// Every field is kept as the raw string the control produced. Closed-choice
/// fields (`time`, `specialty`) hold the tokens of `TimeSlot` / `Specialty`
/// once chosen; validation happens only at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub name: String,
    pub date: String, // YYYY-MM-DD
    pub time: String,
    pub rut: String,
    pub specialty: String,
}

impl AppointmentDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::Rut => &self.rut,
            DraftField::Specialty => &self.specialty,
        }
    }

    /// Copy of this draft with one field replaced.
    pub fn with_field(&self, field: DraftField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            DraftField::Name => &mut next.name,
            DraftField::Date => &mut next.date,
            DraftField::Time => &mut next.time,
            DraftField::Rut => &mut next.rut,
            DraftField::Specialty => &mut next.specialty,
        };
        *slot = value.into();
        next
    }

    /// First field left empty, in form order.
    pub fn first_missing(&self) -> Option<DraftField> {
        DraftField::ALL
            .iter()
            .copied()
            .find(|f| self.get(*f).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
