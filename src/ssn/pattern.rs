use regex::Regex;
use std::sync::LazyLock;

/// Fixed layout of a fiscal code: surname and name letters, year, month
/// letter, day (+40 for women), cadastral code, check letter.
static RE_FISCAL_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{6}[0-9]{2}([ABCDEHLMPRST])[0-9]{2}[A-Z][0-9]([A-Z0-9])[0-9][A-Z]$")
        .unwrap()
});

/// Month letters in calendar order (`A` = January ... `T` = December).
pub const MONTH_CODES: [char; 12] = ['A', 'B', 'C', 'D', 'E', 'H', 'L', 'M', 'P', 'R', 'S', 'T'];

/// Check whether `code` is a syntactically valid fiscal code.
///
/// Only the layout is checked; the trailing check letter is not verified
/// (see [`validate_ssn`](super::validate_ssn)).
pub fn is_valid_fiscal_code(code: &str) -> bool {
    RE_FISCAL_CODE.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(is_valid_fiscal_code("RCCMNL83S18D969H"));
        assert!(is_valid_fiscal_code("CNTCHR83T41D969D"));
        // alphanumeric slot in the cadastral code
        assert!(is_valid_fiscal_code("AAAAAA00A01A0A0A"));
    }

    #[test]
    fn wrong_length() {
        assert!(!is_valid_fiscal_code(""));
        assert!(!is_valid_fiscal_code("RCCMNL83S18D969"));
        assert!(!is_valid_fiscal_code("RCCMNL83S18D969HX"));
    }

    #[test]
    fn lowercase_rejected() {
        assert!(!is_valid_fiscal_code("rccmnl83s18d969h"));
    }

    #[test]
    fn bad_month_letter() {
        // F is not a month code
        assert!(!is_valid_fiscal_code("RCCMNL83F18D969H"));
    }

    #[test]
    fn surrounding_whitespace_rejected() {
        assert!(!is_valid_fiscal_code(" RCCMNL83S18D969H"));
        assert!(!is_valid_fiscal_code("RCCMNL83S18D969H\n"));
    }

    #[test]
    fn checksum_not_verified() {
        assert!(is_valid_fiscal_code("RCCMNL83S18D969Z"));
    }
}
