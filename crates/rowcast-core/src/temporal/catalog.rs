//! The layout catalog, in dispatch priority order
//!
//! Layouts that admit two lengths are split into one descriptor per
//! length at the same catalog position. Same-length layouts are disjoint
//! in their separator bytes, so within one length the order is free; the
//! listing keeps the historical order anyway. `YYYYMMDD` is tried before
//! `YYYYDDMM`, so ambiguous 8-digit dates resolve month-first.

use super::fields::Slot::{Day, Hour, Microsecond, Millisecond, Minute, Month, Second, Year};
use super::fields::{d, CompactDate, FormatDescriptor, TzRule};

/// Layouts that produce a full datetime.
pub(crate) static DATETIME_FORMATS: &[FormatDescriptor] = &[
    // YYYYMMDD HH:MM:SS.mmm
    FormatDescriptor {
        seps: &[(8, b' '), (11, b':'), (14, b':'), (17, b'.')],
        compact_date: Some(CompactDate::MonthMid),
        digits: &[
            d(9, 2, Hour),
            d(12, 2, Minute),
            d(15, 2, Second),
            d(18, 3, Millisecond),
        ],
        ..FormatDescriptor::new(21)
    },
    // YYYY/MM/DD HH:MM:SS.mmm
    FormatDescriptor {
        seps: &[(4, b'/'), (7, b'/'), (10, b' '), (13, b':'), (16, b':'), (19, b'.')],
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 3, Millisecond),
        ],
        ..FormatDescriptor::new(23)
    },
    // DD/MM/YYYY HH:MM:SS.mmm
    FormatDescriptor {
        seps: &[(2, b'/'), (5, b'/'), (10, b' '), (13, b':'), (16, b':'), (19, b'.')],
        digits: &[
            d(0, 2, Day),
            d(3, 2, Month),
            d(6, 4, Year),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 3, Millisecond),
        ],
        ..FormatDescriptor::new(23)
    },
    // YYYYMMDD HH:MM:SS (plain digit fields, no month gate)
    FormatDescriptor {
        seps: &[(8, b' '), (11, b':'), (14, b':')],
        digits: &[
            d(0, 4, Year),
            d(4, 2, Month),
            d(6, 2, Day),
            d(9, 2, Hour),
            d(12, 2, Minute),
            d(15, 2, Second),
        ],
        ..FormatDescriptor::new(17)
    },
    // YYYY/MM/DD HH:MM:SS
    FormatDescriptor {
        seps: &[(4, b'/'), (7, b'/'), (10, b' '), (13, b':'), (16, b':')],
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
        ],
        ..FormatDescriptor::new(19)
    },
    // DD/MM/YYYY HH:MM:SS
    FormatDescriptor {
        seps: &[(2, b'/'), (5, b'/'), (10, b' '), (13, b':'), (16, b':')],
        digits: &[
            d(0, 2, Day),
            d(3, 2, Month),
            d(6, 4, Year),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
        ],
        ..FormatDescriptor::new(19)
    },
    // YYYY-MM-DD HH:MM:SS.mmm
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (10, b' '), (13, b':'), (16, b':'), (19, b'.')],
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 3, Millisecond),
        ],
        ..FormatDescriptor::new(23)
    },
    // DD-MM-YYYY HH:MM:SS.mmm
    FormatDescriptor {
        seps: &[(2, b'-'), (5, b'-'), (10, b' '), (13, b':'), (16, b':'), (19, b'.')],
        digits: &[
            d(0, 2, Day),
            d(3, 2, Month),
            d(6, 4, Year),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 3, Millisecond),
        ],
        ..FormatDescriptor::new(23)
    },
    // YYYY-MM-DD HH:MM:SS
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (10, b' '), (13, b':'), (16, b':')],
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
        ],
        ..FormatDescriptor::new(19)
    },
    // DD-MM-YYYY HH:MM:SS
    FormatDescriptor {
        seps: &[(2, b'-'), (5, b'-'), (10, b' '), (13, b':'), (16, b':')],
        digits: &[
            d(0, 2, Day),
            d(3, 2, Month),
            d(6, 4, Year),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
        ],
        ..FormatDescriptor::new(19)
    },
    // YYYY-MM-DDTHH:MM:SS
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (10, b'T'), (13, b':'), (16, b':')],
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
        ],
        ..FormatDescriptor::new(19)
    },
    // YYYY-MM-DDTHH:MM:SS.mmm
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (10, b'T'), (13, b':'), (16, b':'), (19, b'.')],
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 3, Millisecond),
        ],
        ..FormatDescriptor::new(23)
    },
    // YYYYMMDDTHH:MM:SS
    FormatDescriptor {
        seps: &[(8, b'T'), (11, b':'), (14, b':')],
        compact_date: Some(CompactDate::MonthMid),
        digits: &[d(9, 2, Hour), d(12, 2, Minute), d(15, 2, Second)],
        ..FormatDescriptor::new(17)
    },
    // YYYYMMDDTHH:MM:SS.mmm (the subsecond separator byte is not checked)
    FormatDescriptor {
        seps: &[(8, b'T'), (11, b':'), (14, b':')],
        compact_date: Some(CompactDate::MonthMid),
        digits: &[
            d(9, 2, Hour),
            d(12, 2, Minute),
            d(15, 2, Second),
            d(18, 3, Millisecond),
        ],
        ..FormatDescriptor::new(21)
    },
    // DD-MM-YYYYTHH:MM:SS.mmm
    FormatDescriptor {
        seps: &[(2, b'-'), (5, b'-'), (10, b'T'), (13, b':'), (16, b':'), (19, b'.')],
        digits: &[
            d(0, 2, Day),
            d(3, 2, Month),
            d(6, 4, Year),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 3, Millisecond),
        ],
        ..FormatDescriptor::new(23)
    },
    // DD-MM-YYYYTHH:MM:SS
    FormatDescriptor {
        seps: &[(2, b'-'), (5, b'-'), (10, b'T'), (13, b':'), (16, b':')],
        digits: &[
            d(0, 2, Day),
            d(3, 2, Month),
            d(6, 4, Year),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
        ],
        ..FormatDescriptor::new(19)
    },
    // YYYYMMDDTHHMM
    FormatDescriptor {
        seps: &[(8, b'T')],
        compact_date: Some(CompactDate::MonthMid),
        digits: &[d(9, 2, Hour), d(11, 2, Minute)],
        ..FormatDescriptor::new(13)
    },
    // YYYYMMDDTHHMMSS
    FormatDescriptor {
        seps: &[(8, b'T')],
        compact_date: Some(CompactDate::MonthMid),
        digits: &[d(9, 2, Hour), d(11, 2, Minute), d(13, 2, Second)],
        ..FormatDescriptor::new(15)
    },
    // YYYYMMDDTHHMMSSmmm
    FormatDescriptor {
        seps: &[(8, b'T')],
        compact_date: Some(CompactDate::MonthMid),
        digits: &[
            d(9, 2, Hour),
            d(11, 2, Minute),
            d(13, 2, Second),
            d(15, 3, Millisecond),
        ],
        ..FormatDescriptor::new(18)
    },
    // YYYY-MM-DD HH:MM:SS with a trailing byte that is never checked
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (13, b':'), (16, b':')],
        t_or_space: Some(10),
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
        ],
        ..FormatDescriptor::new(20)
    },
    // YYYY-MM-DD HH:MM:SS+HH:MM
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (13, b':'), (16, b':'), (22, b':')],
        t_or_space: Some(10),
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
        ],
        tz: TzRule::NumericSigned {
            sign_at: 19,
            hh_at: 20,
            mm_at: 23,
        },
        ..FormatDescriptor::new(25)
    },
    // YYYY-MM-DD HH:MMZ
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (13, b':')],
        t_or_space: Some(10),
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
        ],
        tz: TzRule::RequiredZ { at: 16 },
        ..FormatDescriptor::new(17)
    },
    // YYYY-MM-DD HH:MM+HH:MM
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (13, b':'), (19, b':')],
        t_or_space: Some(10),
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
        ],
        tz: TzRule::NumericSigned {
            sign_at: 16,
            hh_at: 17,
            mm_at: 20,
        },
        ..FormatDescriptor::new(22)
    },
    // common log: DD/Mon/YYYY:HH:MM:SS +HHMM
    FormatDescriptor {
        seps: &[(2, b'/'), (6, b'/'), (11, b':'), (14, b':'), (17, b':'), (20, b' ')],
        digits: &[
            d(0, 2, Day),
            d(7, 4, Year),
            d(12, 2, Hour),
            d(15, 2, Minute),
            d(18, 2, Second),
        ],
        month_at: Some(3),
        tz: TzRule::NumericSigned {
            sign_at: 21,
            hh_at: 22,
            mm_at: 24,
        },
        ..FormatDescriptor::new(26)
    },
    // RFC 822: Dow, DD Mon YYYY HH:MM:SS A (military zone letter; the
    // comma after the weekday is never checked)
    FormatDescriptor {
        seps: &[(4, b' '), (7, b' '), (11, b' '), (16, b' '), (19, b':'), (22, b':'), (25, b' ')],
        weekday_at: Some(0),
        digits: &[
            d(5, 2, Day),
            d(12, 4, Year),
            d(17, 2, Hour),
            d(20, 2, Minute),
            d(23, 2, Second),
        ],
        month_at: Some(8),
        tz: TzRule::Military { at: 26 },
        ..FormatDescriptor::new(27)
    },
    // RFC 822: Dow, DD Mon YYYY HH:MM:SS UT
    FormatDescriptor {
        seps: &[(4, b' '), (7, b' '), (11, b' '), (16, b' '), (19, b':'), (22, b':'), (25, b' ')],
        weekday_at: Some(0),
        digits: &[
            d(5, 2, Day),
            d(12, 4, Year),
            d(17, 2, Hour),
            d(20, 2, Minute),
            d(23, 2, Second),
        ],
        month_at: Some(8),
        tz: TzRule::LiteralUt { at: 26 },
        ..FormatDescriptor::new(28)
    },
    // RFC 822: Dow, DD Mon YYYY HH:MM:SS EST
    FormatDescriptor {
        seps: &[(4, b' '), (7, b' '), (11, b' '), (16, b' '), (19, b':'), (22, b':'), (25, b' ')],
        weekday_at: Some(0),
        digits: &[
            d(5, 2, Day),
            d(12, 4, Year),
            d(17, 2, Hour),
            d(20, 2, Minute),
            d(23, 2, Second),
        ],
        month_at: Some(8),
        tz: TzRule::NamedZone { at: 26 },
        ..FormatDescriptor::new(29)
    },
    // RFC 822: Dow, DD Mon YYYY HH:MM:SS +HHMM
    FormatDescriptor {
        seps: &[(4, b' '), (7, b' '), (11, b' '), (16, b' '), (19, b':'), (22, b':'), (25, b' ')],
        weekday_at: Some(0),
        digits: &[
            d(5, 2, Day),
            d(12, 4, Year),
            d(17, 2, Hour),
            d(20, 2, Minute),
            d(23, 2, Second),
        ],
        month_at: Some(8),
        tz: TzRule::NumericSigned {
            sign_at: 26,
            hh_at: 27,
            mm_at: 29,
        },
        ..FormatDescriptor::new(31)
    },
    // YYYYMMDD HH:MM:SS.uuuuuu
    FormatDescriptor {
        seps: &[(8, b' '), (11, b':'), (14, b':'), (17, b'.')],
        compact_date: Some(CompactDate::MonthMid),
        digits: &[
            d(9, 2, Hour),
            d(12, 2, Minute),
            d(15, 2, Second),
            d(18, 6, Microsecond),
        ],
        ..FormatDescriptor::new(24)
    },
    // YYYY/MM/DD HH:MM:SS.uuuuuu
    FormatDescriptor {
        seps: &[(4, b'/'), (7, b'/'), (10, b' '), (13, b':'), (16, b':'), (19, b'.')],
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 6, Microsecond),
        ],
        ..FormatDescriptor::new(26)
    },
    // DD/MM/YYYY HH:MM:SS.uuuuuu
    FormatDescriptor {
        seps: &[(2, b'/'), (5, b'/'), (10, b' '), (13, b':'), (16, b':'), (19, b'.')],
        digits: &[
            d(0, 2, Day),
            d(3, 2, Month),
            d(6, 4, Year),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 6, Microsecond),
        ],
        ..FormatDescriptor::new(26)
    },
    // YYYY-MM-DD HH:MM:SS.uuuuuu
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (10, b' '), (13, b':'), (16, b':'), (19, b'.')],
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 6, Microsecond),
        ],
        ..FormatDescriptor::new(26)
    },
    // DD-MM-YYYY HH:MM:SS.uuuuuu
    FormatDescriptor {
        seps: &[(2, b'-'), (5, b'-'), (10, b' '), (13, b':'), (16, b':'), (19, b'.')],
        digits: &[
            d(0, 2, Day),
            d(3, 2, Month),
            d(6, 4, Year),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 6, Microsecond),
        ],
        ..FormatDescriptor::new(26)
    },
    // YYYY-MM-DDTHH:MM:SS.uuuuuu
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (10, b'T'), (13, b':'), (16, b':'), (19, b'.')],
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 6, Microsecond),
        ],
        ..FormatDescriptor::new(26)
    },
    // YYYYMMDDTHH:MM:SS.uuuuuu (the subsecond separator byte is not checked)
    FormatDescriptor {
        seps: &[(8, b'T'), (11, b':'), (14, b':')],
        compact_date: Some(CompactDate::MonthMid),
        digits: &[
            d(9, 2, Hour),
            d(12, 2, Minute),
            d(15, 2, Second),
            d(18, 6, Microsecond),
        ],
        ..FormatDescriptor::new(24)
    },
    // DD-MM-YYYYTHH:MM:SS.uuuuuu
    FormatDescriptor {
        seps: &[(2, b'-'), (5, b'-'), (10, b'T'), (13, b':'), (16, b':'), (19, b'.')],
        digits: &[
            d(0, 2, Day),
            d(3, 2, Month),
            d(6, 4, Year),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 6, Microsecond),
        ],
        ..FormatDescriptor::new(26)
    },
    // YYYYMMDDTHHMMSSuuuuuu
    FormatDescriptor {
        seps: &[(8, b'T')],
        compact_date: Some(CompactDate::MonthMid),
        digits: &[
            d(9, 2, Hour),
            d(11, 2, Minute),
            d(13, 2, Second),
            d(15, 6, Microsecond),
        ],
        ..FormatDescriptor::new(21)
    },
    // YYYY-MM-DD HH:MM:SS.mmm with a trailing byte that is never checked
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (13, b':'), (16, b':'), (19, b'.')],
        t_or_space: Some(10),
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 3, Millisecond),
        ],
        ..FormatDescriptor::new(24)
    },
    // YYYY-MM-DD HH:MM:SS.mmm+HH:MM
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (13, b':'), (16, b':'), (19, b'.'), (26, b':')],
        t_or_space: Some(10),
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 3, Millisecond),
        ],
        tz: TzRule::NumericSigned {
            sign_at: 23,
            hh_at: 24,
            mm_at: 27,
        },
        ..FormatDescriptor::new(29)
    },
    // YYYY-MM-DD HH:MM:SS.uuuuuu with a trailing byte that is never checked
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (13, b':'), (16, b':'), (19, b'.')],
        t_or_space: Some(10),
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 6, Microsecond),
        ],
        ..FormatDescriptor::new(27)
    },
    // YYYY-MM-DD HH:MM:SS.uuuuuu+HH:MM
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-'), (13, b':'), (16, b':'), (19, b'.'), (29, b':')],
        t_or_space: Some(10),
        digits: &[
            d(0, 4, Year),
            d(5, 2, Month),
            d(8, 2, Day),
            d(11, 2, Hour),
            d(14, 2, Minute),
            d(17, 2, Second),
            d(20, 6, Microsecond),
        ],
        tz: TzRule::NumericSigned {
            sign_at: 26,
            hh_at: 27,
            mm_at: 30,
        },
        ..FormatDescriptor::new(32)
    },
];

/// Layouts that produce a plain date.
pub(crate) static DATE_FORMATS: &[FormatDescriptor] = &[
    // YYYYMMDD
    FormatDescriptor {
        compact_date: Some(CompactDate::MonthMid),
        ..FormatDescriptor::new(8)
    },
    // YYYYDDMM
    FormatDescriptor {
        compact_date: Some(CompactDate::MonthLast),
        ..FormatDescriptor::new(8)
    },
    // YYYY/MM/DD
    FormatDescriptor {
        seps: &[(4, b'/'), (7, b'/')],
        digits: &[d(0, 4, Year), d(5, 2, Month), d(8, 2, Day)],
        ..FormatDescriptor::new(10)
    },
    // YYYY/DD/MM
    FormatDescriptor {
        seps: &[(4, b'/'), (7, b'/')],
        digits: &[d(0, 4, Year), d(5, 2, Day), d(8, 2, Month)],
        ..FormatDescriptor::new(10)
    },
    // DD/MM/YYYY
    FormatDescriptor {
        seps: &[(2, b'/'), (5, b'/')],
        digits: &[d(0, 2, Day), d(3, 2, Month), d(6, 4, Year)],
        ..FormatDescriptor::new(10)
    },
    // MM/DD/YYYY
    FormatDescriptor {
        seps: &[(2, b'/'), (5, b'/')],
        digits: &[d(0, 2, Month), d(3, 2, Day), d(6, 4, Year)],
        ..FormatDescriptor::new(10)
    },
    // YYYY-MM-DD
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-')],
        digits: &[d(0, 4, Year), d(5, 2, Month), d(8, 2, Day)],
        ..FormatDescriptor::new(10)
    },
    // YYYY-DD-MM
    FormatDescriptor {
        seps: &[(4, b'-'), (7, b'-')],
        digits: &[d(0, 4, Year), d(5, 2, Day), d(8, 2, Month)],
        ..FormatDescriptor::new(10)
    },
    // DD-MM-YYYY
    FormatDescriptor {
        seps: &[(2, b'-'), (5, b'-')],
        digits: &[d(0, 2, Day), d(3, 2, Month), d(6, 4, Year)],
        ..FormatDescriptor::new(10)
    },
    // MM-DD-YYYY
    FormatDescriptor {
        seps: &[(2, b'-'), (5, b'-')],
        digits: &[d(0, 2, Month), d(3, 2, Day), d(6, 4, Year)],
        ..FormatDescriptor::new(10)
    },
    // DD.MM.YYYY
    FormatDescriptor {
        seps: &[(2, b'.'), (5, b'.')],
        digits: &[d(0, 2, Day), d(3, 2, Month), d(6, 4, Year)],
        ..FormatDescriptor::new(10)
    },
    // MM.DD.YYYY
    FormatDescriptor {
        seps: &[(2, b'.'), (5, b'.')],
        digits: &[d(0, 2, Month), d(3, 2, Day), d(6, 4, Year)],
        ..FormatDescriptor::new(10)
    },
    // DD-Mon-YY (two-digit year kept as written, no century added)
    FormatDescriptor {
        seps: &[(2, b'-'), (6, b'-')],
        digits: &[d(0, 2, Day), d(7, 2, Year)],
        month_at: Some(3),
        ..FormatDescriptor::new(9)
    },
    // D-Mon-YY
    FormatDescriptor {
        seps: &[(1, b'-'), (5, b'-')],
        digits: &[d(0, 1, Day), d(6, 2, Year)],
        month_at: Some(2),
        ..FormatDescriptor::new(8)
    },
    // DD-Mon-YYYY
    FormatDescriptor {
        seps: &[(2, b'-'), (6, b'-')],
        digits: &[d(0, 2, Day), d(7, 4, Year)],
        month_at: Some(3),
        ..FormatDescriptor::new(11)
    },
    // D-Mon-YYYY
    FormatDescriptor {
        seps: &[(1, b'-'), (5, b'-')],
        digits: &[d(0, 1, Day), d(6, 4, Year)],
        month_at: Some(2),
        ..FormatDescriptor::new(10)
    },
];

/// Layouts that produce a time of day.
pub(crate) static TIME_FORMATS: &[FormatDescriptor] = &[
    // HH:MM:SS.mmm
    FormatDescriptor {
        seps: &[(2, b':'), (5, b':'), (8, b'.')],
        digits: &[
            d(0, 2, Hour),
            d(3, 2, Minute),
            d(6, 2, Second),
            d(9, 3, Millisecond),
        ],
        ..FormatDescriptor::new(12)
    },
    // HH:MM:SS
    FormatDescriptor {
        seps: &[(2, b':'), (5, b':')],
        digits: &[d(0, 2, Hour), d(3, 2, Minute), d(6, 2, Second)],
        ..FormatDescriptor::new(8)
    },
    // HH MM SS mmm
    FormatDescriptor {
        seps: &[(2, b' '), (5, b' '), (8, b' ')],
        digits: &[
            d(0, 2, Hour),
            d(3, 2, Minute),
            d(6, 2, Second),
            d(9, 3, Millisecond),
        ],
        ..FormatDescriptor::new(12)
    },
    // HH MM SS
    FormatDescriptor {
        seps: &[(2, b' '), (5, b' ')],
        digits: &[d(0, 2, Hour), d(3, 2, Minute), d(6, 2, Second)],
        ..FormatDescriptor::new(8)
    },
    // HH.MM.SS.mmm
    FormatDescriptor {
        seps: &[(2, b'.'), (5, b'.'), (8, b'.')],
        digits: &[
            d(0, 2, Hour),
            d(3, 2, Minute),
            d(6, 2, Second),
            d(9, 3, Millisecond),
        ],
        ..FormatDescriptor::new(12)
    },
    // HH.MM.SS
    FormatDescriptor {
        seps: &[(2, b'.'), (5, b'.')],
        digits: &[d(0, 2, Hour), d(3, 2, Minute), d(6, 2, Second)],
        ..FormatDescriptor::new(8)
    },
    // HHMM
    FormatDescriptor {
        digits: &[d(0, 2, Hour), d(2, 2, Minute)],
        ..FormatDescriptor::new(4)
    },
    // HHMMSS
    FormatDescriptor {
        digits: &[d(0, 2, Hour), d(2, 2, Minute), d(4, 2, Second)],
        ..FormatDescriptor::new(6)
    },
    // HHMMSSmmm
    FormatDescriptor {
        digits: &[
            d(0, 2, Hour),
            d(2, 2, Minute),
            d(4, 2, Second),
            d(6, 3, Millisecond),
        ],
        ..FormatDescriptor::new(9)
    },
    // HH:MM:SS.mmm+HH:MM
    FormatDescriptor {
        seps: &[(2, b':'), (5, b':'), (8, b'.'), (15, b':')],
        digits: &[
            d(0, 2, Hour),
            d(3, 2, Minute),
            d(6, 2, Second),
            d(9, 3, Millisecond),
        ],
        tz: TzRule::NumericSigned {
            sign_at: 12,
            hh_at: 13,
            mm_at: 16,
        },
        ..FormatDescriptor::new(18)
    },
    // HH:MM:SS+HH:MM
    FormatDescriptor {
        seps: &[(2, b':'), (5, b':'), (11, b':')],
        digits: &[d(0, 2, Hour), d(3, 2, Minute), d(6, 2, Second)],
        tz: TzRule::NumericSigned {
            sign_at: 8,
            hh_at: 9,
            mm_at: 12,
        },
        ..FormatDescriptor::new(14)
    },
    // HH:MM:SS.uuuuuu+HH:MM
    FormatDescriptor {
        seps: &[(2, b':'), (5, b':'), (8, b'.'), (18, b':')],
        digits: &[
            d(0, 2, Hour),
            d(3, 2, Minute),
            d(6, 2, Second),
            d(9, 6, Microsecond),
        ],
        tz: TzRule::NumericSigned {
            sign_at: 15,
            hh_at: 16,
            mm_at: 19,
        },
        ..FormatDescriptor::new(21)
    },
    // HH:MM:SS.uuuuuu
    FormatDescriptor {
        seps: &[(2, b':'), (5, b':'), (8, b'.')],
        digits: &[
            d(0, 2, Hour),
            d(3, 2, Minute),
            d(6, 2, Second),
            d(9, 6, Microsecond),
        ],
        ..FormatDescriptor::new(15)
    },
];
