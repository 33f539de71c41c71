//! Fixed-layout date and time recognition
//!
//! A candidate string is matched against a catalog of fixed-width
//! layouts: datetimes first, then plain dates, then times of day. The
//! first layout whose separators, digit runs, and name tokens all match
//! claims the string. Field values are validated only at construction,
//! and a string whose layout matches but whose fields do not form a real
//! calendar instant is rejected outright rather than retried against
//! later layouts.

mod catalog;
mod fields;
mod names;
mod value;

pub use value::{days_in_month, is_leap_year, DateTimeValue, Temporal};

/// Matches `value` against the layout catalog.
///
/// Returns `None` when no layout matches, or when the first matching
/// layout carries field values that do not construct (for example a
/// February 30th or a 25th hour).
pub fn parse_temporal(value: &str) -> Option<Temporal> {
    let bytes = value.as_bytes();
    for format in catalog::DATETIME_FORMATS {
        if let Some(fields) = format.apply(bytes) {
            return fields.into_datetime();
        }
    }
    for format in catalog::DATE_FORMATS {
        if let Some(fields) = format.apply(bytes) {
            return fields.into_date();
        }
    }
    for format in catalog::TIME_FORMATS {
        if let Some(fields) = format.apply(bytes) {
            return fields.into_time();
        }
    }
    None
}
