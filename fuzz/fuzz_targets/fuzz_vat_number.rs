#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(normalized) = fiscale::validate_vat_number(s) {
            // Accepted numbers must stay accepted, unchanged.
            assert_eq!(fiscale::validate_vat_number(&normalized).ok(), Some(normalized));
        }
    }
});
