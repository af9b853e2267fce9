use fiscale::*;

fn main() {
    println!("=== Fiscal Code Validation ===\n");

    let codes = [
        "RCCMNL83S18D969H",
        "CNTCHR83T41D969D",
        "MRARSS80A01H501T",
        "RCCMNL83S18D969X", // wrong check letter
        "RCCMNL83S18D969",  // too short
        "ZZZZZZ99T71Z999L", // unknown place of birth
    ];

    for code in &codes {
        if !is_valid_fiscal_code(code) {
            println!("  {code} => INVALID: bad layout");
            continue;
        }
        if let Err(e) = validate_ssn(code) {
            println!("  {code} => INVALID: {e}");
            continue;
        }
        match decode(code) {
            Ok(info) => println!(
                "  {code} => born {} ({}), sex {}, in {} [{}]",
                info.birthday,
                info.birthday
                    .in_century(1900)
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "—".into()),
                info.sex,
                info.municipality,
                info.cadastral_code,
            ),
            Err(e) => println!("  {code} => cannot decode: {e}"),
        }
    }

    println!("\n=== Check Letter ===\n");

    for payload in ["RCCMNL83S18D969", "rccmnl83s18d969", "RCCMNL83S18D9@9"] {
        match ssn_check_digit(payload) {
            Ok(letter) => println!("  {payload} => {letter}"),
            Err(e) => println!("  {payload} => ERROR: {e}"),
        }
    }

    println!("\n  Municipalities compiled in: {}", municipalities().len());
}
