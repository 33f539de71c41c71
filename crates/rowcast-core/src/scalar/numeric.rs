//! Chunked decimal digit parsing
//!
//! Eight ASCII digits load into one u64 and reduce with three mask
//! passes (pairs of one, two, then four digits). Sixteen digits are two
//! chunks combined; shorter runs left-pad with ASCII zeros first.

fn parse_eight(bytes: [u8; 8]) -> u64 {
    let mut chunk = u64::from_le_bytes(bytes);
    let lower = (chunk & 0x0f00_0f00_0f00_0f00) >> 8;
    let upper = (chunk & 0x000f_000f_000f_000f) * 10;
    chunk = lower + upper;
    let lower = (chunk & 0x00ff_0000_00ff_0000) >> 16;
    let upper = (chunk & 0x0000_00ff_0000_00ff) * 100;
    chunk = lower + upper;
    let lower = (chunk & 0x0000_ffff_0000_0000) >> 32;
    let upper = (chunk & 0x0000_0000_0000_ffff) * 10_000;
    lower + upper
}

/// Parses a run of 1 to 16 ASCII digits.
pub(crate) fn parse_digits16(digits: &[u8]) -> u64 {
    debug_assert!(!digits.is_empty() && digits.len() <= 16);
    let mut buf = [b'0'; 16];
    buf[16 - digits.len()..].copy_from_slice(digits);
    let mut high = [0u8; 8];
    let mut low = [0u8; 8];
    high.copy_from_slice(&buf[..8]);
    low.copy_from_slice(&buf[8..]);
    parse_eight(high) * 100_000_000 + parse_eight(low)
}
