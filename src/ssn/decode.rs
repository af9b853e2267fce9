//! Birthday, sex and place of birth encoded in a fiscal code.
//!
//! All functions here require a syntactically valid code and return
//! [`FiscaleError::Precondition`] otherwise. Byte offsets are safe once the
//! layout has been checked, since a valid code is pure ASCII.

use tracing::debug;

use super::municipality::{MunicipalityTable, municipalities};
use super::pattern::{MONTH_CODES, is_valid_fiscal_code};
use crate::core::{Birthday, FiscalCodeInfo, FiscaleError, FiscaleResult, Sex};

/// Offset added to the day of birth for women.
const FEMALE_DAY_OFFSET: u8 = 40;

fn ensure_valid(code: &str) -> FiscaleResult<()> {
    if is_valid_fiscal_code(code) {
        Ok(())
    } else {
        debug!(code, "decoding refused, not a valid fiscal code");
        Err(FiscaleError::Precondition { value: code.into() })
    }
}

fn two_digits(code: &str, start: usize) -> u8 {
    let b = code.as_bytes();
    (b[start] - b'0') * 10 + (b[start + 1] - b'0')
}

fn raw_day(code: &str) -> u8 {
    two_digits(code, 9)
}

/// Decode the birth date of `code`.
///
/// The year stays two-digit: the fiscal code carries no century.
pub fn decode_birthday(code: &str) -> FiscaleResult<Birthday> {
    ensure_valid(code)?;

    let raw = raw_day(code);
    let day = if raw > 31 {
        raw.saturating_sub(FEMALE_DAY_OFFSET)
    } else {
        raw
    };
    if !(1..=31).contains(&day) {
        return Err(FiscaleError::format(
            code,
            format!("day field {raw:02} does not encode a day of month"),
        ));
    }

    let month_letter = char::from(code.as_bytes()[8]);
    let month = MONTH_CODES
        .iter()
        .position(|&m| m == month_letter)
        .map(|i| i as u8 + 1)
        .ok_or_else(|| FiscaleError::Precondition { value: code.into() })?;

    Ok(Birthday {
        day,
        month,
        year: two_digits(code, 6),
    })
}

/// Birth date of `code` as `DD/MM/YY`.
///
/// ```
/// assert_eq!(fiscale::get_birthday("RCCMNL83S18D969H").unwrap(), "18/11/83");
/// ```
pub fn get_birthday(code: &str) -> FiscaleResult<String> {
    decode_birthday(code).map(|b| b.to_string())
}

/// Sex encoded in the day field of `code`.
pub fn get_sex(code: &str) -> FiscaleResult<Sex> {
    ensure_valid(code)?;
    Ok(if raw_day(code) < 32 {
        Sex::Male
    } else {
        Sex::Female
    })
}

fn cadastral_code(code: &str) -> &str {
    &code[11..15]
}

/// Place of birth of `code`, looked up in the process-wide table.
///
/// Unknown cadastral codes yield `"Altro"`.
pub fn get_municipality(code: &str) -> FiscaleResult<&'static str> {
    get_municipality_in(code, municipalities())
}

/// Place of birth of `code`, looked up in `table`.
pub fn get_municipality_in<'t>(code: &str, table: &'t MunicipalityTable) -> FiscaleResult<&'t str> {
    ensure_valid(code)?;
    Ok(table.name_or_other(cadastral_code(code)))
}

/// Decode every field of `code` at once.
pub fn decode(code: &str) -> FiscaleResult<FiscalCodeInfo> {
    let birthday = decode_birthday(code)?;
    let sex = get_sex(code)?;
    let municipality = get_municipality(code)?;

    Ok(FiscalCodeInfo {
        code: code.into(),
        birthday,
        sex,
        cadastral_code: cadastral_code(code).into(),
        municipality: municipality.into(),
    })
}
