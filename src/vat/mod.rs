//! Italian VAT number (*partita IVA*) validation.
//!
//! An Italian VAT number is 11 digits: a 10-digit payload followed by a
//! mod-10 check digit. The same scheme validates the numeric fiscal code of
//! companies and other legal entities.
//!
//! # Example
//!
//! ```
//! use fiscale::vat::*;
//!
//! assert_eq!(vat_check_digit("1234567001").unwrap(), '7');
//! assert_eq!(validate_vat_number("12345670017").unwrap(), "12345670017");
//!
//! // integers lose their leading zeros and get them back on padding
//! assert_eq!(validate_vat_number(1234566u64).unwrap(), "00001234566");
//! assert!(!is_valid_vat_number("IT12345670017"));
//! ```

mod checksum;

pub use checksum::{is_valid_vat_number, validate_vat_number, vat_check_digit};
