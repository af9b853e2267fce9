//! Italian fiscal code (*codice fiscale*) validation and decoding.
//!
//! # Example
//!
//! ```
//! use fiscale::ssn::*;
//! use fiscale::core::Sex;
//!
//! let code = "CNTCHR83T41D969D";
//! assert!(is_valid_fiscal_code(code));
//! assert_eq!(ssn_check_digit(code).unwrap(), 'D');
//!
//! let info = decode(code).unwrap();
//! assert_eq!(info.sex, Sex::Female);
//! assert_eq!(info.birthday.to_string(), "01/12/83");
//! assert_eq!(info.municipality, "Genova");
//! ```

mod checksum;
mod decode;
mod municipality;
mod pattern;

pub use checksum::{ssn_check_digit, validate_ssn};
pub use decode::{
    decode, decode_birthday, get_birthday, get_municipality, get_municipality_in, get_sex,
};
pub use municipality::{
    MunicipalityTable, UNKNOWN_MUNICIPALITY, install_municipalities, municipalities,
};
pub use pattern::{MONTH_CODES, is_valid_fiscal_code};
