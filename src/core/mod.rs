//! Core error and value types shared by the fiscal code and VAT modules.

mod error;
mod types;

pub use error::*;
pub use types::*;
