//! Parse scratch and the constructed temporal results

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use serde::{Serialize, Serializer};

/// Field scratch filled by a structural layout match.
///
/// A fresh value is used per attempt. Millisecond and microsecond are
/// mutually exclusive per layout; [`DateTimeValue::subsec_micros`] picks
/// the one that was written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeValue {
    pub year: u16,
    pub month: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
    pub millisecond: u16,
    pub microsecond: u32,
    /// Timezone displacement in signed minutes
    pub tzd_minutes: i16,
}

/// A recognized temporal value.
///
/// Datetimes and times always carry a fixed offset, UTC when the layout
/// had none; dates never do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Temporal {
    /// Calendar date without time-of-day or offset
    Date(NaiveDate),
    /// Wall-clock time with a fixed offset
    Time(NaiveTime, FixedOffset),
    /// Full datetime with a fixed offset
    DateTime(DateTime<FixedOffset>),
}

/// Serializes to the canonical text of the variant: `%Y-%m-%d` for dates,
/// time-with-offset for times, RFC 3339 for datetimes.
impl Serialize for Temporal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Temporal::Date(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            Temporal::Time(time, offset) => {
                serializer.collect_str(&format_args!("{time}{offset}"))
            }
            Temporal::DateTime(dt) => serializer.collect_str(&dt.to_rfc3339()),
        }
    }
}

impl DateTimeValue {
    /// Subsecond value in microseconds.
    pub fn subsec_micros(&self) -> u32 {
        if self.microsecond != 0 {
            self.microsecond
        } else {
            u32::from(self.millisecond) * 1000
        }
    }

    fn offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(i32::from(self.tzd_minutes) * 60)
    }

    fn naive_date(&self) -> Option<NaiveDate> {
        // chrono accepts year 0; the reference constructors start at 1.
        if self.year == 0 {
            return None;
        }
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }

    fn naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_micro_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
            self.subsec_micros(),
        )
    }

    /// Range and calendar validation happens here, not during matching.
    pub fn into_datetime(self) -> Option<Temporal> {
        let naive = self.naive_date()?.and_time(self.naive_time()?);
        let offset = self.offset()?;
        offset
            .from_local_datetime(&naive)
            .single()
            .map(Temporal::DateTime)
    }

    pub fn into_date(self) -> Option<Temporal> {
        self.naive_date().map(Temporal::Date)
    }

    pub fn into_time(self) -> Option<Temporal> {
        let time = self.naive_time()?;
        let offset = self.offset()?;
        Some(Temporal::Time(time, offset))
    }
}

/// True for proleptic-Gregorian leap years.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, zero for an invalid month.
pub fn days_in_month(year: u16, month: u16) -> u16 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> DateTimeValue {
        DateTimeValue {
            year: 2006,
            month: 3,
            day: 17,
            hour: 13,
            minute: 27,
            second: 54,
            ..DateTimeValue::default()
        }
    }

    #[test]
    fn test_subsec_prefers_microseconds() {
        let mut value = scratch();
        value.millisecond = 123;
        assert_eq!(value.subsec_micros(), 123_000);
        value.microsecond = 123_456;
        assert_eq!(value.subsec_micros(), 123_456);
    }

    #[test]
    fn test_year_zero_is_rejected() {
        let mut value = scratch();
        value.year = 0;
        assert!(value.into_date().is_none());
        assert!(value.into_datetime().is_none());
    }

    #[test]
    fn test_invalid_calendar_date_fails_construction() {
        let mut value = scratch();
        value.month = 2;
        value.day = 30;
        assert!(value.into_date().is_none());
    }

    #[test]
    fn test_offset_beyond_a_day_fails_construction() {
        let mut value = scratch();
        value.tzd_minutes = 99 * 60 + 99;
        assert!(value.into_datetime().is_none());
        assert!(value.into_time().is_none());
    }

    #[test]
    fn test_datetime_carries_offset() {
        let mut value = scratch();
        value.tzd_minutes = 120;
        let Some(Temporal::DateTime(dt)) = value.into_datetime() else {
            panic!("expected a datetime");
        };
        assert_eq!(dt.offset().local_minus_utc(), 120 * 60);
    }

    #[test]
    fn test_serializes_to_canonical_text() {
        let date = scratch().into_date().unwrap();
        assert_eq!(
            serde_json::to_value(date).unwrap(),
            serde_json::json!("2006-03-17")
        );

        let mut value = scratch();
        value.tzd_minutes = 205;
        let time = value.into_time().unwrap();
        assert_eq!(
            serde_json::to_value(time).unwrap(),
            serde_json::json!("13:27:54+03:25")
        );
        let datetime = value.into_datetime().unwrap();
        assert_eq!(
            serde_json::to_value(datetime).unwrap(),
            serde_json::json!("2006-03-17T13:27:54+03:25")
        );
    }

    #[test]
    fn test_leap_year_table() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 13), 0);
    }
}
