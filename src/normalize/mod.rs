//! Normalization lookup tables for downstream table cleanup
//!
//! The portal's spreadsheets spell month and airline names inconsistently
//! ("SEPT", "FEBURUARY", "Trujet", "akasa air "). These tables map known
//! spellings to canonical values. They are plain immutable values: build
//! them once with [`LookupTables::standard`] and pass them by reference.
//!
//! Unknown keys always pass through unchanged because new spellings keep
//! appearing in newly published files.
//!
//! The crawler itself never reads spreadsheet contents. These tables are
//! public API for the downstream cleanup stage that loads the downloaded
//! files and needs consistent month keys and carrier names.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Month name (upper case) to two-digit month number.
#[rustfmt::skip]
const MONTHS: &[(&str, &str)] = &[
    ("JAN", "01"), ("FEB", "02"), ("MAR", "03"), ("APR", "04"),
    ("MAY", "05"), ("JUN", "06"), ("JUL", "07"), ("AUG", "08"),
    ("SEP", "09"), ("SEPT", "09"), ("OCT", "10"), ("NOV", "11"), ("DEC", "12"),
    ("JANUARY", "01"), ("FEBRUARY", "02"), ("MARCH", "03"), ("APRIL", "04"),
    ("JUNE", "06"), ("JULY", "07"), ("AUGUST", "08"),
    ("SEPTEMBER", "09"), ("OCTOBER", "10"), ("NOVEMBER", "11"), ("DECEMBER", "12"),
    ("FEBURUARY", "02"),
    ("AUG*", "08"), ("SEP*", "09"), ("SEPT*", "09"), ("OCT*", "10"), ("NOV*", "11"), ("DEC*", "12"),
];

/// Airline spelling (as found in file names, digits removed) to display name.
const AIRLINES: &[(&str, &str)] = &[
    ("Air Asia", "AirAsia India"),
    ("Air India", "Air India"),
    ("Airline", "Generic Airline"),
    ("Flybig", "Flybig"),
    ("Spicejet", "SpiceJet"),
    ("TruJet", "TruJet"),
    ("TrueJet", "TruJet"),
    ("Trujet", "TruJet"),
    ("air deccan", "Air Deccan"),
    ("air heritage", "Air Heritage"),
    ("air india", "Air India"),
    ("air india express", "Air India Express"),
    ("air taxi", "Air Taxi"),
    ("airasia", "AirAsia India"),
    ("aircarnival", "Air Carnival"),
    ("aircosta", "Air Costa"),
    ("airheritage", "Air Heritage"),
    ("airindia", "Air India"),
    ("airindiaexpress", "Air India Express"),
    ("airodisha", "Air Odisha"),
    ("airpegasus", "Air Pegasus"),
    ("aix connect", "AIX Connect"),
    ("aix connect ", "AIX Connect"),
    ("akasa air", "Akasa Air"),
    ("akasa air ", "Akasa Air"),
    ("alliance", "Alliance Air"),
    ("alliance air", "Alliance Air"),
    ("bluedart", "Blue Dart Aviation"),
    ("deccanair", "Air Deccan"),
    ("fly", "Fly91"),
    ("fly ", "Fly91"),
    ("go air", "Go First"),
    ("goair", "Go First"),
    ("india one air", "India One Air"),
    ("indigo", "IndiGo"),
    ("jetairways", "Jet Airways"),
    ("jetlite", "JetLite"),
    ("pawan hans", "Pawan Hans"),
    ("pawanhans", "Pawan Hans"),
    ("quikjetcargo", "QuikJet Cargo"),
    ("spicejet", "SpiceJet"),
    ("star air", "Star Air"),
    ("starair", "Star Air"),
    ("totaldom", "Total Domestic"),
    ("totalint", "Total International"),
    ("trujet", "TruJet"),
    ("vistara", "Vistara"),
    ("zoomair", "Zoom Air"),
];

/// `<MONTH>[ ,]*<YYYY>` anywhere in an upper-cased file name.
static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(JANUARY|FEBRUARY|FEBURUARY|MARCH|APRIL|JUNE|JULY|AUGUST|SEPTEMBER|OCTOBER|NOVEMBER|DECEMBER|SEPT|JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)[\s,]*(\d{4})\b",
    )
    .expect("MONTH_YEAR: hardcoded regex is valid")
});

/// Exact-match lookup with pass-through for unknown keys
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entries: HashMap<String, String>,
}

impl LookupTable {
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Canonical value for `key`, or `key` itself when unknown.
    #[must_use]
    pub fn normalize<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Year and month parsed from a monthly file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub year: u16,
    pub month: u8,
}

impl Period {
    /// `yy/mm`, the key format of the aggregated city-pair tables
    #[must_use]
    pub fn short_key(&self) -> String {
        format!("{:02}/{:02}", self.year % 100, self.month)
    }
}

/// The month and airline tables used by table cleanup
#[derive(Debug, Clone)]
pub struct LookupTables {
    pub months: LookupTable,
    pub airlines: LookupTable,
}

impl LookupTables {
    /// Tables with every spelling observed in published files so far
    #[must_use]
    pub fn standard() -> Self {
        Self {
            months: LookupTable::from_pairs(MONTHS),
            airlines: LookupTable::from_pairs(AIRLINES),
        }
    }

    /// Month cell to two-digit month number; trailing whitespace ignored.
    #[must_use]
    pub fn month_number<'a>(&'a self, raw: &'a str) -> &'a str {
        self.months.normalize(raw.trim_end())
    }

    /// Airline name from a carrier file name: digits dropped, then mapped.
    #[must_use]
    pub fn airline_name<'a>(&'a self, raw: &str) -> Cow<'a, str> {
        let stripped: String = raw.chars().filter(|c| !c.is_ascii_digit()).collect();
        match self.airlines.get(&stripped) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(stripped),
        }
    }

    /// First `<month> <year>` mention in a file name, e.g. `CITYPAIR JAN 2024`.
    ///
    /// URL-encoded spaces (`%20`) are treated as spaces.
    #[must_use]
    pub fn period_from_name(&self, name: &str) -> Option<Period> {
        let upper = name.replace("%20", " ").to_uppercase();
        let captures = MONTH_YEAR.captures(&upper)?;
        let month = self.months.get(captures.get(1)?.as_str())?.parse().ok()?;
        let year = captures.get(2)?.as_str().parse().ok()?;
        Some(Period { year, month })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_pass_through() {
        let tables = LookupTables::standard();
        assert_eq!(tables.month_number("SEPT "), "09");
        assert_eq!(tables.month_number("Sept"), "Sept");
        assert_eq!(tables.airline_name("akasa air "), "Akasa Air");
        assert_eq!(tables.airline_name("NewCo Airways"), "NewCo Airways");
    }

    #[test]
    fn airline_digits_are_removed_before_lookup() {
        let tables = LookupTables::standard();
        assert_eq!(tables.airline_name("indigo23"), "IndiGo");
        assert_eq!(tables.airline_name("mystery23"), "mystery");
    }

    #[test]
    fn period_from_file_names() {
        let tables = LookupTables::standard();
        assert_eq!(
            tables.period_from_name("CITYPAIR%20JANUARY%202024"),
            Some(Period { year: 2024, month: 1 })
        );
        let period = tables.period_from_name("Citypair Feburuary, 2019").unwrap();
        assert_eq!(period, Period { year: 2019, month: 2 });
        assert_eq!(period.short_key(), "19/02");
        assert_eq!(
            tables.period_from_name("CITYPAIR SEPT 2015").map(|p| p.short_key()),
            Some("15/09".to_string())
        );
        assert_eq!(tables.period_from_name("carrier totals"), None);
    }
}
