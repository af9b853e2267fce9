// ---------------------------------------------------------------------------
// Snapshot tests (insta)
// ---------------------------------------------------------------------------

#![cfg(all(feature = "ssn", feature = "vat"))]

use fiscale::*;

#[test]
fn decoded_info_debug() {
    let info = decode("CNTCHR83T41D969D").unwrap();
    insta::assert_debug_snapshot!(info, @r#"
    FiscalCodeInfo {
        code: "CNTCHR83T41D969D",
        birthday: Birthday {
            day: 1,
            month: 12,
            year: 83,
        },
        sex: Female,
        cadastral_code: "D969",
        municipality: "Genova",
    }
    "#);
}

#[test]
fn decoded_info_json() {
    let info = decode("RCCMNL83S18D969H").unwrap();
    let json = serde_json::to_string(&info).unwrap();
    insta::assert_snapshot!(json, @r#"{"code":"RCCMNL83S18D969H","birthday":{"day":18,"month":11,"year":83},"sex":"M","cadastral_code":"D969","municipality":"Genova"}"#);
}

#[test]
fn error_messages() {
    let messages = [
        validate_ssn("RCCMNL83S18D969A").unwrap_err().to_string(),
        ssn_check_digit("RCCMNL83S18D9_9").unwrap_err().to_string(),
        get_sex("not a code").unwrap_err().to_string(),
        validate_vat_number("abc").unwrap_err().to_string(),
        validate_vat_number(1234567).unwrap_err().to_string(),
    ]
    .join("\n");
    insta::assert_snapshot!(messages, @r"
    check digit does not match: expected 'H', found 'A'
    character '_' at position 13 is not allowed
    'not a code' is not a syntactically valid fiscal code
    invalid format 'abc': not an unsigned integer
    check digit does not match: expected '6', found '7'
    ");
}
