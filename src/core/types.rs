use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sex as encoded in the day field of a fiscal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Day field below 32.
    #[serde(rename = "M")]
    Male,
    /// Day field offset by 40.
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Single-letter code: `'M'` or `'F'`.
    pub fn as_char(self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Birth date decoded from a fiscal code.
///
/// The fiscal code only carries the last two digits of the year (1983 -> 83),
/// so `year` is kept exactly as encoded. Use [`Birthday::in_century`] when the
/// century is known from elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Birthday {
    /// Day of month, 1-31 (sex offset already removed).
    pub day: u8,
    /// Month, 1-12.
    pub month: u8,
    /// Two-digit year, 0-99.
    pub year: u8,
}

impl Birthday {
    /// Build a calendar date by placing the two-digit year in `century`
    /// (e.g. `1900` or `2000`).
    ///
    /// Returns `None` when the result is not a real date (31st of February, ...).
    pub fn in_century(&self, century: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            century + i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:02}", self.day, self.month, self.year)
    }
}

/// All the information that can be read out of a fiscal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalCodeInfo {
    /// The fiscal code as given.
    pub code: String,
    /// Encoded birth date.
    pub birthday: Birthday,
    /// Encoded sex.
    pub sex: Sex,
    /// 4-character cadastral code of the place of birth.
    pub cadastral_code: String,
    /// Place name for `cadastral_code`, or `"Altro"` when unknown.
    pub municipality: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthday_display_is_zero_padded() {
        let b = Birthday {
            day: 1,
            month: 2,
            year: 3,
        };
        assert_eq!(b.to_string(), "01/02/03");
    }

    #[test]
    fn birthday_in_century() {
        let b = Birthday {
            day: 18,
            month: 11,
            year: 83,
        };
        assert_eq!(
            b.in_century(1900),
            NaiveDate::from_ymd_opt(1983, 11, 18)
        );
        assert_eq!(
            b.in_century(2000),
            NaiveDate::from_ymd_opt(2083, 11, 18)
        );
    }

    #[test]
    fn birthday_in_century_rejects_impossible_date() {
        let b = Birthday {
            day: 31,
            month: 2,
            year: 0,
        };
        assert!(b.in_century(2000).is_none());
    }

    #[test]
    fn sex_letters() {
        assert_eq!(Sex::Male.as_char(), 'M');
        assert_eq!(Sex::Female.to_string(), "F");
    }
}
