//! Installing the process-wide municipality table.
//!
//! Lives in its own test binary: the table can only be set once per process.

#![cfg(feature = "ssn")]

use fiscale::*;

const REGISTRY_CSV: &str = "\
code,name
D969,Genova
H501,Roma
A562,San Giuliano Terme
";

#[test]
fn installed_table_serves_lookups() {
    let table = MunicipalityTable::from_csv_reader(REGISTRY_CSV.as_bytes()).unwrap();
    assert_eq!(table.len(), 3);
    install_municipalities(table).unwrap();

    // A562 is not compiled in, but the installed registry has it
    assert_eq!(
        get_municipality("RSSMRA85T10A562S").unwrap(),
        "San Giuliano Terme"
    );
    assert_eq!(get_municipality("RCCMNL83S18D969H").unwrap(), "Genova");
    // Milano is bundled but missing from the installed registry
    assert_eq!(get_municipality("BNCGNN75C52F205N").unwrap(), "Altro");
    assert_eq!(municipalities().len(), 3);

    // second install is refused and the table handed back
    let again = MunicipalityTable::bundled();
    let refused = install_municipalities(again.clone()).unwrap_err();
    assert_eq!(refused, again);
    assert_eq!(municipalities().len(), 3);
}
