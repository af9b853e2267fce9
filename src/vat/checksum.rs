use std::fmt;

use tracing::debug;

use crate::core::{FiscaleError, FiscaleResult};

const PAYLOAD_LEN: usize = 10;
const VAT_LEN: usize = 11;

/// Compute the check digit of a VAT payload.
///
/// `vat10` is zero-padded on the left to 10 digits. Digits in even 0-based
/// positions count as they are; digits in odd positions are doubled and their
/// two decimal digits summed. The check digit is `(10 - sum % 10) % 10`.
pub fn vat_check_digit(vat10: &str) -> FiscaleResult<char> {
    let len = vat10.chars().count();
    if len > PAYLOAD_LEN {
        return Err(FiscaleError::format(
            vat10,
            format!("payload must be at most {PAYLOAD_LEN} digits, got {len}"),
        ));
    }

    let pad = PAYLOAD_LEN - len;
    let mut total = 0u32;
    for (i, c) in vat10.chars().enumerate() {
        let digit = c.to_digit(10).ok_or(FiscaleError::InvalidCharacter {
            character: c,
            position: i,
        })?;
        total += if (i + pad) % 2 == 0 {
            digit
        } else {
            let doubled = digit * 2;
            doubled / 10 + doubled % 10
        };
    }

    let check = (10 - total % 10) % 10;
    Ok(char::from(b'0' + check as u8))
}

/// Validate an Italian VAT number and return it normalized to 11 digits.
///
/// `raw` may be a string or an integer. It is rendered, trimmed, parsed as an
/// unsigned integer and zero-padded back to 11 digits, so `"0012345670017"`
/// and `12345670017u64` both normalize to `"12345670017"`.
pub fn validate_vat_number(raw: impl fmt::Display) -> FiscaleResult<String> {
    let rendered = raw.to_string();
    let number: u64 = rendered
        .trim()
        .parse()
        .map_err(|_| FiscaleError::format(&rendered, "not an unsigned integer"))?;

    let normalized = format!("{number:0>VAT_LEN$}");
    if normalized.len() > VAT_LEN {
        return Err(FiscaleError::format(
            rendered,
            format!("more than {VAT_LEN} significant digits"),
        ));
    }

    let expected = vat_check_digit(&normalized[..PAYLOAD_LEN])?;
    let found = char::from(normalized.as_bytes()[PAYLOAD_LEN]);
    if found != expected {
        debug!(vat = %normalized, %expected, %found, "VAT check digit mismatch");
        return Err(FiscaleError::ChecksumMismatch { expected, found });
    }
    Ok(normalized)
}

/// `true` when [`validate_vat_number`] accepts `raw`.
pub fn is_valid_vat_number(raw: impl fmt::Display) -> bool {
    validate_vat_number(raw).is_ok()
}
