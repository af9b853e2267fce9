//! # fiscale
//!
//! Validation and decoding of Italian tax identifiers:
//! the personal fiscal code (*codice fiscale*) and the VAT number (*partita IVA*).
//!
//! Every operation is a pure function over strings. The only shared state is the
//! read-only municipality table used to name the place of birth.
//!
//! ## Quick Start
//!
//! ```rust
//! use fiscale::*;
//!
//! let code = "RCCMNL83S18D969H";
//! assert!(is_valid_fiscal_code(code));
//! assert_eq!(validate_ssn(code).unwrap(), code);
//! assert_eq!(get_birthday(code).unwrap(), "18/11/83");
//! assert_eq!(get_sex(code).unwrap(), Sex::Male);
//! assert_eq!(get_municipality(code).unwrap(), "Genova");
//!
//! assert_eq!(validate_vat_number("12345670017").unwrap(), "12345670017");
//! assert_eq!(validate_vat_number(1234566u64).unwrap(), "00001234566");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Error type and decoded value types |
//! | `ssn` (default) | Fiscal code syntax, checksum, decoding, municipality table |
//! | `vat` (default) | VAT number checksum and validation |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "ssn")]
pub mod ssn;

#[cfg(feature = "vat")]
pub mod vat;

// Re-export the public surface at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "ssn")]
pub use crate::ssn::*;

#[cfg(feature = "vat")]
pub use crate::vat::*;
