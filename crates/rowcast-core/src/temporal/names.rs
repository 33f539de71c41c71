//! Name tables for month, weekday and timezone tokens

/// Three-letter month token to 1..=12, case-insensitive; zero when the
/// token is unknown.
pub(crate) fn month_index(token: &[u8]) -> u16 {
    if token.len() < 3 {
        return 0;
    }
    let t = [
        token[0].to_ascii_uppercase(),
        token[1].to_ascii_uppercase(),
        token[2].to_ascii_uppercase(),
    ];
    match &t {
        b"JAN" => 1,
        b"FEB" => 2,
        b"MAR" => 3,
        b"APR" => 4,
        b"MAY" => 5,
        b"JUN" => 6,
        b"JUL" => 7,
        b"AUG" => 8,
        b"SEP" => 9,
        b"OCT" => 10,
        b"NOV" => 11,
        b"DEC" => 12,
        _ => 0,
    }
}

/// Three-letter weekday token to 1..=7 starting at Sunday; zero when the
/// token is unknown. Used only as a structural gate.
pub(crate) fn weekday_index(token: &[u8]) -> u16 {
    if token.len() < 3 {
        return 0;
    }
    let t = [
        token[0].to_ascii_uppercase(),
        token[1].to_ascii_uppercase(),
        token[2].to_ascii_uppercase(),
    ];
    match &t {
        b"SUN" => 1,
        b"MON" => 2,
        b"TUE" => 3,
        b"WED" => 4,
        b"THU" => 5,
        b"FRI" => 6,
        b"SAT" => 7,
        _ => 0,
    }
}

/// US zone abbreviation to signed minutes, case-insensitive. The trailing
/// byte must be `T`; GMT maps to zero, daylight zones sit one hour east of
/// their standard counterparts.
pub(crate) fn zone_offset_minutes(token: &[u8]) -> Option<i16> {
    if token.len() < 3 || token[2].to_ascii_uppercase() != b'T' {
        return None;
    }
    let hours: i16 = match (
        token[0].to_ascii_uppercase(),
        token[1].to_ascii_uppercase(),
    ) {
        (b'G', b'M') => 0,
        (b'E', b'D') => -4,
        (b'C', b'D') => -5,
        (b'M', b'D') => -6,
        (b'P', b'D') => -7,
        (b'E', b'S') => -5,
        (b'C', b'S') => -6,
        (b'M', b'S') => -7,
        (b'P', b'S') => -8,
        _ => return None,
    };
    Some(hours * 60)
}

/// Military single-letter zone to signed minutes, case-insensitive.
pub(crate) fn military_offset_minutes(letter: u8) -> Option<i16> {
    let hours: i16 = match letter.to_ascii_uppercase() {
        b'A' => -1,
        b'M' => -12,
        b'N' => 1,
        b'Y' => 12,
        _ => return None,
    };
    Some(hours * 60)
}
