//! Compiled shape gates for the evaluation ladder

use once_cell::sync::Lazy;
use regex::Regex;

/// Integer or decimal shape, including the `1.5e-10` negative-exponent
/// form. Case-sensitive, so `E-` does not pass.
pub(crate) static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^([+-]?\d[0-9]*)?(\.(.*e-)?)?([0-9]*)?$)").unwrap());

pub(crate) static HEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[xX][0-9a-fA-F]+$").unwrap());

/// Hyphenated UUID, versions 0 through 5, variant `8/9/a/b`.
pub(crate) static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-5][0-9a-f]{3}-[089ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap()
});

/// Dotted-quad IPv4 without leading zeros.
pub(crate) static IPV4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((25[0-5]|(2[0-4]|1\d|[1-9]|)\d)\.){3}(25[0-5]|(2[0-4]|1\d|[1-9]|)\d)$").unwrap()
});
