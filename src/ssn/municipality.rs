//! Cadastral code to place name lookup.
//!
//! Every Italian municipality (and every foreign state, under the `Z` prefix)
//! has a 4-character cadastral code, which is what a fiscal code carries as
//! place of birth. The compiled-in table covers provincial capitals, the
//! largest municipalities and the most common foreign states; hosts that need
//! the complete registry load it from CSV and install it once at startup.

use std::collections::HashMap;
use std::io;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{info, warn};

use crate::core::{FiscaleError, FiscaleResult};

/// Place name returned when a cadastral code is not in the table.
pub const UNKNOWN_MUNICIPALITY: &str = "Altro";

static MUNICIPALITIES: OnceLock<MunicipalityTable> = OnceLock::new();

/// The process-wide municipality table.
///
/// Initialised on first use with [`MunicipalityTable::bundled`] unless a table
/// was installed earlier with [`install_municipalities`].
pub fn municipalities() -> &'static MunicipalityTable {
    MUNICIPALITIES.get_or_init(MunicipalityTable::bundled)
}

/// Install `table` as the process-wide municipality table.
///
/// Must happen before the first lookup. If the table is already set (by a
/// previous install or by a lookup), `table` is handed back unchanged.
pub fn install_municipalities(table: MunicipalityTable) -> Result<(), MunicipalityTable> {
    let entries = table.len();
    match MUNICIPALITIES.set(table) {
        Ok(()) => {
            info!(entries, "municipality table installed");
            Ok(())
        }
        Err(table) => {
            warn!(entries, "municipality table already initialised, install refused");
            Err(table)
        }
    }
}

/// Read-only mapping from cadastral code to place name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MunicipalityTable {
    entries: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct MunicipalityRecord {
    code: String,
    name: String,
}

impl MunicipalityTable {
    /// The compiled-in table.
    pub fn bundled() -> Self {
        Self::from_entries(BUNDLED.iter().copied())
    }

    /// Build a table from `(code, name)` pairs. Codes are uppercased.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(code, name)| (code.into().to_ascii_uppercase(), name.into()))
            .collect();
        Self { entries }
    }

    /// Load a table from CSV with a `code,name` header row.
    ///
    /// Fields are trimmed and codes uppercased. A code that is not exactly
    /// 4 ASCII alphanumeric characters rejects the whole file.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> FiscaleResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = HashMap::new();
        for (index, result) in rdr.deserialize::<MunicipalityRecord>().enumerate() {
            let record = result?;
            let code = record.code.to_ascii_uppercase();
            if !is_cadastral_code(&code) {
                return Err(FiscaleError::format(
                    record.code,
                    format!(
                        "record {}: cadastral code must be 4 ASCII alphanumeric characters",
                        index + 1
                    ),
                ));
            }
            entries.insert(code, record.name);
        }

        info!(entries = entries.len(), "municipality table loaded from CSV");
        Ok(Self { entries })
    }

    /// Place name for `code`, if known.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Place name for `code`, or [`UNKNOWN_MUNICIPALITY`].
    pub fn name_or_other(&self, code: &str) -> &str {
        self.get(code).unwrap_or(UNKNOWN_MUNICIPALITY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_cadastral_code(code: &str) -> bool {
    code.len() == 4 && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Compiled-in entries, sorted by code.
static BUNDLED: &[(&str, &str)] = &[
    ("A089", "Agrigento"),
    ("A182", "Alessandria"),
    ("A271", "Ancona"),
    ("A285", "Andria"),
    ("A326", "Aosta"),
    ("A345", "L'Aquila"),
    ("A390", "Arezzo"),
    ("A462", "Ascoli Piceno"),
    ("A479", "Asti"),
    ("A509", "Avellino"),
    ("A662", "Bari"),
    ("A757", "Belluno"),
    ("A783", "Benevento"),
    ("A794", "Bergamo"),
    ("A859", "Biella"),
    ("A944", "Bologna"),
    ("A952", "Bolzano"),
    ("B157", "Brescia"),
    ("B180", "Brindisi"),
    ("B354", "Cagliari"),
    ("B429", "Caltanissetta"),
    ("B519", "Campobasso"),
    ("B745", "Carbonia"),
    ("B963", "Caserta"),
    ("C342", "Enna"),
    ("C351", "Catania"),
    ("C352", "Catanzaro"),
    ("C573", "Cesena"),
    ("C632", "Chieti"),
    ("C933", "Como"),
    ("D086", "Cosenza"),
    ("D122", "Crotone"),
    ("D150", "Cremona"),
    ("D205", "Cuneo"),
    ("D542", "Fermo"),
    ("D548", "Ferrara"),
    ("D612", "Firenze"),
    ("D643", "Foggia"),
    ("D704", "Forlì"),
    ("D810", "Frosinone"),
    ("D969", "Genova"),
    ("E098", "Gorizia"),
    ("E202", "Grosseto"),
    ("E290", "Imperia"),
    ("E335", "Isernia"),
    ("E463", "La Spezia"),
    ("E472", "Latina"),
    ("E506", "Lecce"),
    ("E507", "Lecco"),
    ("E625", "Livorno"),
    ("E648", "Lodi"),
    ("E715", "Lucca"),
    ("E783", "Macerata"),
    ("E897", "Mantova"),
    ("F023", "Massa"),
    ("F052", "Matera"),
    ("F158", "Messina"),
    ("F205", "Milano"),
    ("F257", "Modena"),
    ("F537", "Vibo Valentia"),
    ("F704", "Monza"),
    ("F839", "Napoli"),
    ("F952", "Novara"),
    ("F979", "Nuoro"),
    ("G015", "Olbia"),
    ("G113", "Oristano"),
    ("G224", "Padova"),
    ("G273", "Palermo"),
    ("G337", "Parma"),
    ("G388", "Pavia"),
    ("G478", "Perugia"),
    ("G479", "Pesaro"),
    ("G482", "Pescara"),
    ("G535", "Piacenza"),
    ("G702", "Pisa"),
    ("G713", "Pistoia"),
    ("G888", "Pordenone"),
    ("G942", "Potenza"),
    ("G999", "Prato"),
    ("H163", "Ragusa"),
    ("H199", "Ravenna"),
    ("H223", "Reggio nell'Emilia"),
    ("H224", "Reggio di Calabria"),
    ("H282", "Rieti"),
    ("H294", "Rimini"),
    ("H501", "Roma"),
    ("H620", "Rovigo"),
    ("H703", "Salerno"),
    ("I452", "Sassari"),
    ("I480", "Savona"),
    ("I726", "Siena"),
    ("I754", "Siracusa"),
    ("I829", "Sondrio"),
    ("L049", "Taranto"),
    ("L103", "Teramo"),
    ("L117", "Terni"),
    ("L219", "Torino"),
    ("L331", "Trapani"),
    ("L378", "Trento"),
    ("L407", "Treviso"),
    ("L424", "Trieste"),
    ("L483", "Udine"),
    ("L682", "Varese"),
    ("L736", "Venezia"),
    ("L746", "Verbania"),
    ("L750", "Vercelli"),
    ("L781", "Verona"),
    ("L840", "Vicenza"),
    ("M082", "Viterbo"),
    ("Z100", "Albania"),
    ("Z102", "Austria"),
    ("Z103", "Belgio"),
    ("Z110", "Francia"),
    ("Z112", "Germania"),
    ("Z114", "Regno Unito"),
    ("Z129", "Romania"),
    ("Z131", "Spagna"),
    ("Z133", "Svizzera"),
    ("Z210", "Cina"),
    ("Z404", "Stati Uniti d'America"),
    ("Z600", "Argentina"),
    ("Z602", "Brasile"),
];
