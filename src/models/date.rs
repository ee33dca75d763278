use serde::{Deserialize, Serialize};

/// A calendar date plus time of day, stored as plain fields.
///
/// Doubles as a pure calendar date (diary entries, milestone starts) and as
/// a timestamp (todo create/due dates, progress points). No range validation
/// happens at construction; callers supply sane values and the CLI clamps
/// what the user types before it gets here.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub day: i16,
    pub month: i16,
    pub year: i16,
    pub hour: i16,
    pub minute: i16,
    pub second: i16,
}

impl Date {
    /// Current wall-clock date and time.
    pub fn now() -> Self {
        let now = jiff::Zoned::now();
        Self {
            day: now.day() as i16,
            month: now.month() as i16,
            year: now.year(),
            hour: now.hour() as i16,
            minute: now.minute() as i16,
            second: now.second() as i16,
        }
    }

    /// Today's calendar date with the time of day zeroed.
    pub fn today() -> Self {
        Self::from_civil(jiff::Zoned::now().date())
    }

    /// Day-granularity date; hour, minute and second stay zero.
    pub fn from_civil(date: jiff::civil::Date) -> Self {
        Self {
            day: date.day() as i16,
            month: date.month() as i16,
            year: date.year(),
            ..Self::default()
        }
    }

    /// True when both fall on the same calendar day, ignoring the time.
    pub fn same_day(&self, other: &Date) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }

    /// (year, month, day) tuple, handy as a chronological sort key.
    pub fn ymd(&self) -> (i16, i16, i16) {
        (self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_day_ignores_time() {
        let morning = Date {
            day: 5,
            month: 3,
            year: 2024,
            hour: 8,
            minute: 15,
            second: 0,
        };
        let evening = Date {
            hour: 22,
            minute: 40,
            second: 59,
            ..morning
        };
        assert!(morning.same_day(&evening));
    }

    #[test]
    fn test_same_day_differs_across_days() {
        let first = Date {
            day: 5,
            month: 3,
            year: 2024,
            ..Date::default()
        };
        let second = Date { day: 6, ..first };
        assert!(!first.same_day(&second));
    }

    #[test]
    fn test_today_has_zeroed_time() {
        let today = Date::today();
        assert_eq!(today.hour, 0);
        assert_eq!(today.minute, 0);
        assert_eq!(today.second, 0);
    }
}
