use fiscale::*;

fn main() {
    println!("=== VAT Number Validation ===\n");

    let inputs = [
        "12345670017",
        "1234566",       // leading zeros restored
        " 00001234566 ", // surrounding whitespace
        "12345670018",   // wrong check digit
        "IT12345670017", // country prefix is not accepted
    ];

    for raw in &inputs {
        match validate_vat_number(raw) {
            Ok(normalized) => println!("  {raw:?} => valid ({normalized})"),
            Err(e) => println!("  {raw:?} => INVALID: {e}"),
        }
    }

    println!("\n=== Integer Input ===\n");

    for raw in [12345670017u64, 1234566, 1234567] {
        match validate_vat_number(raw) {
            Ok(normalized) => println!("  {raw} => valid ({normalized})"),
            Err(e) => println!("  {raw} => INVALID: {e}"),
        }
    }

    println!("\n=== Check Digit ===\n");

    for payload in ["1234567001", "123456", "0000000000"] {
        match vat_check_digit(payload) {
            Ok(digit) => println!("  {payload} => {digit}"),
            Err(e) => println!("  {payload} => ERROR: {e}"),
        }
    }
}
