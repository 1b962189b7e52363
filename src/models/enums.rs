use serde::{Deserialize, Serialize};

/// Error for a token outside one of the closed-choice sets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    #[error("Invalid value for {kind}: {value}")]
    UnknownValue { kind: String, value: String },
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ChoiceError::UnknownValue {
                        kind: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(DraftField {
    Name => "name",
    Date => "date",
    Time => "time",
    Rut => "rut",
    Specialty => "specialty",
});

str_enum!(TimeSlot {
    Nine => "09:00",
    Ten => "10:00",
    Eleven => "11:00",
    Three => "03:00",
    Four => "04:00",
    Five => "05:00",
});

str_enum!(DayPeriod {
    Morning => "morning",
    Afternoon => "afternoon",
});

str_enum!(Specialty {
    Cardiology => "Cardiología",
    Dermatology => "Dermatología",
    Pediatrics => "Pediatría",
    Dentistry => "Odontología",
});

impl DraftField {
    /// Label shown next to the control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Nombre",
            Self::Date => "Fecha",
            Self::Time => "Hora",
            Self::Rut => "RUT",
            Self::Specialty => "Especialidad",
        }
    }
}

impl TimeSlot {
    pub fn period(&self) -> DayPeriod {
        match self {
            Self::Nine | Self::Ten | Self::Eleven => DayPeriod::Morning,
            Self::Three | Self::Four | Self::Five => DayPeriod::Afternoon,
        }
    }

    /// Option caption, e.g. `09:00 AM`. Afternoon slots keep their 12-hour token.
    pub fn caption(&self) -> String {
        let suffix = match self.period() {
            DayPeriod::Morning => "AM",
            DayPeriod::Afternoon => "PM",
        };
        format!("{} {suffix}", self.as_str())
    }
}

impl DayPeriod {
    /// Option-group label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Mañana",
            Self::Afternoon => "Tarde",
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = TimeSlot> + '_ {
        TimeSlot::ALL.iter().copied().filter(move |s| s.period() == *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn draft_field_round_trip() {
        for (variant, s) in [
            (DraftField::Name, "name"),
            (DraftField::Date, "date"),
            (DraftField::Time, "time"),
            (DraftField::Rut, "rut"),
            (DraftField::Specialty, "specialty"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(DraftField::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn specialty_keeps_accented_tokens() {
        assert_eq!(Specialty::from_str("Pediatría").unwrap(), Specialty::Pediatrics);
        assert_eq!(Specialty::Cardiology.as_str(), "Cardiología");
        assert!(Specialty::from_str("Pediatria").is_err());
    }

    #[test]
    fn unknown_time_slot_is_rejected() {
        let err = TimeSlot::from_str("12:00").unwrap_err();
        assert_eq!(
            err,
            ChoiceError::UnknownValue {
                kind: "TimeSlot".into(),
                value: "12:00".into(),
            }
        );
        assert_eq!(err.to_string(), "Invalid value for TimeSlot: 12:00");
    }

    #[test]
    fn slots_split_into_morning_and_afternoon() {
        let morning: Vec<_> = DayPeriod::Morning.slots().map(|s| s.as_str()).collect();
        let afternoon: Vec<_> = DayPeriod::Afternoon.slots().map(|s| s.as_str()).collect();
        assert_eq!(morning, ["09:00", "10:00", "11:00"]);
        assert_eq!(afternoon, ["03:00", "04:00", "05:00"]);
    }

    #[test]
    fn captions_carry_period_suffix() {
        assert_eq!(TimeSlot::Ten.caption(), "10:00 AM");
        assert_eq!(TimeSlot::Three.caption(), "03:00 PM");
        assert_eq!(DayPeriod::Afternoon.label(), "Tarde");
    }

    #[test]
    fn specialty_serializes_as_token() {
        let json = serde_json::to_string(&Specialty::Dentistry).unwrap();
        assert_eq!(json, "\"Odontología\"");
    }

    #[test]
    fn field_labels() {
        assert_eq!(DraftField::Rut.label(), "RUT");
        assert_eq!(DraftField::Specialty.label(), "Especialidad");
    }
}
