//! Source of "today" for the date rule and the date input's minimum.

use chrono::{Local, NaiveDate};

/// ISO format used by the date control and for comparisons.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Clock {
    /// Current calendar date in the user's local timezone.
    fn today(&self) -> NaiveDate;

    /// `today()` as `YYYY-MM-DD`.
    fn today_iso(&self) -> String {
        self.today().format(DATE_FORMAT).to_string()
    }
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_formats_zero_padded() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap());
        assert_eq!(clock.today_iso(), "2026-03-07");
    }

    #[test]
    fn local_clock_matches_chrono_local() {
        let before = Local::now().date_naive();
        let today = LocalClock.today();
        let after = Local::now().date_naive();
        assert!(today >= before && today <= after);
        assert_eq!(LocalClock.today_iso().len(), 10);
    }
}
