//! Fiscal code check letter.
//!
//! Characters in odd 1-based positions (0-based even index) are weighted
//! through [`ODD_POSITION_WEIGHTS`]; characters in even 1-based positions
//! weigh their own ordinal (`0`-`9` -> 0-9, `A`-`Z` -> 0-25). The check letter
//! is `'A' + sum % 26`.

use tracing::debug;

use crate::core::{FiscaleError, FiscaleResult};

/// Weights for odd 1-based positions, indexed by character ordinal.
/// Digits share the weights of `A`-`J`.
const ODD_POSITION_WEIGHTS: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

const PAYLOAD_LEN: usize = 15;

fn ordinal(c: char) -> Option<usize> {
    match c {
        '0'..='9' => Some(c as usize - '0' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize),
        _ => None,
    }
}

/// Compute the check letter for the first 15 characters of `value`.
///
/// Input is uppercased first. Characters past the 15th are ignored, so a
/// complete 16-character code can be passed as is.
pub fn ssn_check_digit(value: &str) -> FiscaleResult<char> {
    let mut total = 0u32;
    let mut count = 0usize;

    for (position, c) in value.chars().take(PAYLOAD_LEN).enumerate() {
        let c = c.to_ascii_uppercase();
        let ord = ordinal(c).ok_or(FiscaleError::InvalidCharacter {
            character: c,
            position,
        })?;
        total += if position % 2 == 0 {
            ODD_POSITION_WEIGHTS[ord]
        } else {
            ord as u32
        };
        count += 1;
    }

    if count < PAYLOAD_LEN {
        return Err(FiscaleError::format(
            value,
            format!("expected at least {PAYLOAD_LEN} characters, got {count}"),
        ));
    }

    Ok(char::from(b'A' + (total % 26) as u8))
}

/// Verify the check letter (16th character) of a fiscal code.
///
/// Returns `code` unchanged on success. The layout is not checked here; pair
/// with [`is_valid_fiscal_code`](super::is_valid_fiscal_code) for that.
pub fn validate_ssn(code: &str) -> FiscaleResult<&str> {
    let expected = ssn_check_digit(code)?;
    let found = code.chars().nth(PAYLOAD_LEN).ok_or_else(|| {
        FiscaleError::format(code, "missing check letter in position 16")
    })?;

    if found != expected {
        debug!(code, %expected, %found, "fiscal code check letter mismatch");
        return Err(FiscaleError::ChecksumMismatch { expected, found });
    }
    Ok(code)
}
