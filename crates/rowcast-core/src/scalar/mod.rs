//! Heuristic typing of raw scalar tokens
//!
//! [`evaluate`] walks a fixed ladder of shape checks, cheapest first,
//! and stops at the first hit. Length gates bound every expensive
//! check: hex literals cap at four chars, booleans under six, UUIDs at
//! exactly 36, and the address and temporal probes only run between 7
//! and 38 chars. A token nothing claims stays a string.

use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use num_bigint::BigInt;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use crate::temporal::{parse_temporal, Temporal};

mod numeric;
mod patterns;

use numeric::parse_digits16;

/// A scalar token resolved to its most specific type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Null,
    Bool(bool),
    Int(i64),
    BigInt(BigInt),
    Double(f64),
    Decimal(Decimal),
    Uuid(Uuid),
    Json(Value),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Date(NaiveDate),
    Time(NaiveTime, FixedOffset),
    DateTime(DateTime<FixedOffset>),
    Str(String),
}

/// Serializes to the natural JSON form of the variant: null, bool, or
/// number where one exists, the canonical string otherwise. Integers
/// beyond `i64` and decimals serialize as strings so no precision is
/// lost in transit.
impl Serialize for TypedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TypedValue::Null => serializer.serialize_unit(),
            TypedValue::Bool(b) => serializer.serialize_bool(*b),
            TypedValue::Int(n) => serializer.serialize_i64(*n),
            TypedValue::BigInt(n) => serializer.collect_str(n),
            TypedValue::Double(x) => serializer.serialize_f64(*x),
            TypedValue::Decimal(x) => serializer.collect_str(x),
            TypedValue::Uuid(u) => serializer.collect_str(u),
            TypedValue::Json(v) => v.serialize(serializer),
            TypedValue::Ipv4(addr) => serializer.collect_str(addr),
            TypedValue::Ipv6(addr) => serializer.collect_str(addr),
            TypedValue::Date(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            TypedValue::Time(time, offset) => {
                serializer.collect_str(&format_args!("{time}{offset}"))
            }
            TypedValue::DateTime(dt) => serializer.collect_str(&dt.to_rfc3339()),
            TypedValue::Str(s) => serializer.serialize_str(s),
        }
    }
}

/// Types a raw token.
///
/// A token quoted on both ends with the same quote character is
/// stripped before evaluation, so `'42'` types as an integer.
pub fn evaluate(value: &str) -> TypedValue {
    if let Some(short) = evaluate_short(value) {
        return short;
    }
    let mut token = value;
    if is_quoted(token.as_bytes()) {
        token = &token[1..token.len() - 1];
        if let Some(short) = evaluate_short(token) {
            return short;
        }
    }

    if patterns::NUMERIC.is_match(token) {
        return evaluate_numeric(token);
    }

    let bytes = token.as_bytes();

    if bytes.len() <= 2 && bytes[0] == b'\\' {
        match token {
            "\\n" => return TypedValue::Str("\n".to_owned()),
            "\\r" => return TypedValue::Str("\r".to_owned()),
            "\\t" => return TypedValue::Str("\t".to_owned()),
            "\\\\" => return TypedValue::Str("\\".to_owned()),
            _ => {}
        }
    }

    if bytes.len() <= 4
        && bytes[0] == b'0'
        && bytes[1].eq_ignore_ascii_case(&b'x')
        && patterns::HEX.is_match(token)
    {
        if let Ok(value) = i64::from_str_radix(&token[2..], 16) {
            return TypedValue::Int(value);
        }
    }

    if token.len() < 6 {
        if token.eq_ignore_ascii_case("true") {
            return TypedValue::Bool(true);
        }
        if token.eq_ignore_ascii_case("false") {
            return TypedValue::Bool(false);
        }
    }

    if is_null_sentinel(token) {
        return TypedValue::Null;
    }

    if token.len() == 36 && patterns::UUID.is_match(token) {
        if let Ok(value) = Uuid::parse_str(token) {
            return TypedValue::Uuid(value);
        }
    }

    let last = bytes[bytes.len() - 1];
    if (bytes[0] == b'{' && last == b'}') || (bytes[0] == b'[' && last == b']') {
        if let Ok(value) = serde_json::from_str::<Value>(token) {
            return TypedValue::Json(value);
        }
    }

    if token.len() < 6 {
        return TypedValue::Str(token.to_owned());
    }

    if token.len() > 6 && token.len() < 39 {
        if memchr::memchr_iter(b'.', bytes).count() == 3 && patterns::IPV4.is_match(token) {
            if let Ok(value) = token.parse::<Ipv4Addr>() {
                return TypedValue::Ipv4(value);
            }
        }
        if memchr::memchr_iter(b':', bytes).count() > 5 {
            if let Ok(value) = token.parse::<Ipv6Addr>() {
                return TypedValue::Ipv6(value);
            }
        }
        if token.len() > 7 {
            if let Some(temporal) = parse_temporal(token) {
                return match temporal {
                    Temporal::Date(date) => TypedValue::Date(date),
                    Temporal::Time(time, offset) => TypedValue::Time(time, offset),
                    Temporal::DateTime(value) => TypedValue::DateTime(value),
                };
            }
        }
    }

    TypedValue::Str(token.to_owned())
}

/// The empty and single-byte rules, re-run after quote stripping.
fn evaluate_short(token: &str) -> Option<TypedValue> {
    if token.is_empty() {
        return Some(TypedValue::Null);
    }
    if token.len() == 1 {
        let byte = token.as_bytes()[0];
        return Some(if byte.is_ascii_digit() {
            TypedValue::Int(i64::from(byte - b'0'))
        } else {
            TypedValue::Str(token.to_owned())
        });
    }
    None
}

fn is_quoted(bytes: &[u8]) -> bool {
    let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
    (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'')
}

fn evaluate_numeric(token: &str) -> TypedValue {
    if token.contains('.') {
        if token.len() > 18 {
            if let Ok(value) = token.parse::<Decimal>() {
                return TypedValue::Decimal(value);
            }
        }
        return match token.parse::<f64>() {
            Ok(value) => TypedValue::Double(value),
            Err(_) => TypedValue::Str(token.to_owned()),
        };
    }
    let negative = token.starts_with('-');
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.len() <= 16 {
        let value = parse_digits16(digits.as_bytes()) as i64;
        return TypedValue::Int(if negative { -value } else { value });
    }
    match token.parse::<i64>() {
        Ok(value) => TypedValue::Int(value),
        Err(_) => match token.parse::<BigInt>() {
            Ok(value) => TypedValue::BigInt(value),
            Err(_) => TypedValue::Str(token.to_owned()),
        },
    }
}

fn is_null_sentinel(token: &str) -> bool {
    const SENTINELS: [&str; 6] = ["NA", "NONE", "NULL", "UNDEFINED", "NONETYPE", "\"\""];
    SENTINELS
        .iter()
        .any(|sentinel| token.eq_ignore_ascii_case(sentinel))
}
