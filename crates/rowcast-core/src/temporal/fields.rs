//! Declarative fixed-layout descriptors and their interpreter

use super::names::{military_offset_minutes, month_index, weekday_index, zone_offset_minutes};
use super::value::DateTimeValue;

/// Destination of a digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
}

/// A fixed-width run of ASCII digits at a byte offset.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DigitRun {
    pub at: usize,
    pub width: usize,
    pub slot: Slot,
}

/// Terse constructor used by the catalog tables.
pub(crate) const fn d(at: usize, width: usize, slot: Slot) -> DigitRun {
    DigitRun { at, width, slot }
}

/// Variant of the shared compact 8-digit date subroutine.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CompactDate {
    /// `YYYYMMDD`
    MonthMid,
    /// `YYYYDDMM`
    MonthLast,
}

/// Timezone rule of a layout.
#[derive(Debug, Clone, Copy)]
pub(crate) enum TzRule {
    /// No timezone text; displacement stays zero
    None,
    /// Literal `Z` at the offset; displacement stays zero
    RequiredZ { at: usize },
    /// Sign byte plus two 2-digit runs (`hh`, `mm`)
    NumericSigned {
        sign_at: usize,
        hh_at: usize,
        mm_at: usize,
    },
    /// Single military zone letter
    Military { at: usize },
    /// Three-letter US zone abbreviation
    NamedZone { at: usize },
    /// Literal `UT`
    LiteralUt { at: usize },
}

/// One fixed-length grammar.
///
/// Descriptors are plain data; [`FormatDescriptor::apply`] interprets
/// them. Lengths, separators and digit-ness are the structural match;
/// every range and calendar rule is deferred to construction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormatDescriptor {
    /// Exact input length in bytes
    pub len: usize,
    /// Required separator bytes as (offset, byte)
    pub seps: &'static [(usize, u8)],
    /// Offset where either `T` or a space is accepted
    pub t_or_space: Option<usize>,
    /// Compact 8-digit date at offset zero
    pub compact_date: Option<CompactDate>,
    /// Digit runs to extract
    pub digits: &'static [DigitRun],
    /// Offset of a three-letter month token
    pub month_at: Option<usize>,
    /// Offset of a three-letter weekday token
    pub weekday_at: Option<usize>,
    /// Timezone rule
    pub tz: TzRule,
}

impl FormatDescriptor {
    /// Base descriptor for struct-update construction in the catalog.
    pub(crate) const fn new(len: usize) -> Self {
        Self {
            len,
            seps: &[],
            t_or_space: None,
            compact_date: None,
            digits: &[],
            month_at: None,
            weekday_at: None,
            tz: TzRule::None,
        }
    }

    /// Structural match; fills a fresh scratch on success.
    pub(crate) fn apply(&self, s: &[u8]) -> Option<DateTimeValue> {
        if s.len() != self.len {
            return None;
        }
        for &(at, byte) in self.seps {
            if s[at] != byte {
                return None;
            }
        }
        if let Some(at) = self.t_or_space {
            if s[at] != b'T' && s[at] != b' ' {
                return None;
            }
        }
        if let Some(at) = self.weekday_at {
            if weekday_index(&s[at..]) == 0 {
                return None;
            }
        }

        let mut value = DateTimeValue::default();
        if let Some(kind) = self.compact_date {
            parse_compact_date(&s[..8], kind, &mut value)?;
        }
        for run in self.digits {
            let digits = &s[run.at..run.at + run.width];
            if !digits.iter().all(u8::is_ascii_digit) {
                return None;
            }
            let n = fold_digits(digits);
            match run.slot {
                Slot::Year => value.year = n as u16,
                Slot::Month => value.month = n as u16,
                Slot::Day => value.day = n as u16,
                Slot::Hour => value.hour = n as u16,
                Slot::Minute => value.minute = n as u16,
                Slot::Second => value.second = n as u16,
                Slot::Millisecond => value.millisecond = n as u16,
                Slot::Microsecond => value.microsecond = n,
            }
        }
        match self.tz {
            TzRule::None => {}
            TzRule::RequiredZ { at } => {
                if s[at] != b'Z' {
                    return None;
                }
            }
            TzRule::NumericSigned {
                sign_at,
                hh_at,
                mm_at,
            } => {
                let sign: i16 = match s[sign_at] {
                    b'+' => 1,
                    b'-' => -1,
                    _ => return None,
                };
                let hh = two_digits(&s[hh_at..])?;
                let mm = two_digits(&s[mm_at..])?;
                value.tzd_minutes = sign * (hh * 60 + mm);
            }
            TzRule::Military { at } => {
                value.tzd_minutes = military_offset_minutes(s[at])?;
            }
            TzRule::NamedZone { at } => {
                value.tzd_minutes = zone_offset_minutes(&s[at..])?;
            }
            TzRule::LiteralUt { at } => {
                if s[at] != b'U' || s[at + 1] != b'T' {
                    return None;
                }
            }
        }
        if let Some(at) = self.month_at {
            let month = month_index(&s[at..]);
            if month == 0 {
                return None;
            }
            value.month = month;
        }
        Some(value)
    }
}

/// All runs are at most six digits wide, so a u32 accumulator suffices.
fn fold_digits(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'))
}

fn two_digits(s: &[u8]) -> Option<i16> {
    if s.len() < 2 || !s[0].is_ascii_digit() || !s[1].is_ascii_digit() {
        return None;
    }
    Some(i16::from(s[0] - b'0') * 10 + i16::from(s[1] - b'0'))
}

/// Shared 8-digit date subroutine. The packed number must be at least
/// 101 and carry a month of at most 12; day and year ranges are left to
/// construction.
fn parse_compact_date(s: &[u8], kind: CompactDate, value: &mut DateTimeValue) -> Option<()> {
    if !s.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let packed = fold_digits(s);
    if packed < 101 {
        return None;
    }
    let (month, day) = match kind {
        CompactDate::MonthMid => ((packed % 10_000) / 100, packed % 100),
        CompactDate::MonthLast => (packed % 100, (packed % 10_000) / 100),
    };
    if month > 12 {
        return None;
    }
    value.year = (packed / 10_000) as u16;
    value.month = month as u16;
    value.day = day as u16;
    Some(())
}
