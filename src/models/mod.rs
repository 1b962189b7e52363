pub mod appointment;
pub mod enums;

pub use appointment::AppointmentDraft;
pub use enums::{ChoiceError, DayPeriod, DraftField, Specialty, TimeSlot};
