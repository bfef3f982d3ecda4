//! Modulo-10 recursive check digit.
//!
//! This is the table-driven variant used on Swiss payment slips, not the
//! classic Luhn algorithm.

use swissslip_core::{SlipError, SlipResult};

/// Carry table of the recursive modulo-10 algorithm.
const MODULO_TABLE: [u8; 10] = [0, 9, 4, 6, 8, 2, 7, 1, 3, 5];

/// Character used in place of digits (and check digits) on redacted slips.
pub const REDACTION_MARK: char = 'X';

/// Computes the recursive modulo-10 check digit of `digits`.
///
/// Rejects anything that is not an ASCII decimal digit.
pub fn modulo10(digits: &str) -> SlipResult<u8> {
    let mut next = 0u8;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            return Err(SlipError::not_numeric(digits));
        }
        next = MODULO_TABLE[((next + (b - b'0')) % 10) as usize];
    }
    Ok((10 - next) % 10)
}

/// Returns `segment` followed by its check digit.
///
/// Segments carrying redaction marks get a redaction mark as check digit, so
/// a specimen slip stays visibly unusable all the way through its code line.
pub fn append_check_digit(segment: &str) -> SlipResult<String> {
    let redacted = segment.contains(REDACTION_MARK);
    let check = if redacted {
        if !segment
            .chars()
            .all(|c| c == REDACTION_MARK || c.is_ascii_digit())
        {
            return Err(SlipError::not_numeric(segment));
        }
        REDACTION_MARK
    } else {
        char::from(b'0' + modulo10(segment)?)
    };

    let mut out = String::with_capacity(segment.len() + 1);
    out.push_str(segment);
    out.push(check);
    Ok(out)
}
