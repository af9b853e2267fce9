#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = fiscale::is_valid_fiscal_code(s);
        let _ = fiscale::validate_ssn(s);
        let _ = fiscale::decode(s);
    }
});
