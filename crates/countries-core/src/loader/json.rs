// crates/countries-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use crate::error::{CountryError, Result};
use crate::model::{convert, DefaultBackend, DefaultDataset};
use crate::raw::CountriesRaw;
use std::io::Read;

impl DefaultDataset {
    /// Parses source JSON (an array of country records) from a reader.
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_reader(reader)?;
        checked(raw)
    }

    /// Parses source JSON from a string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_str(json)?;
        checked(raw)
    }
}

// Codes key the lookup; a blank one could never be resolved.
fn checked(raw: CountriesRaw) -> Result<DefaultDataset> {
    if let Some((i, c)) = raw
        .iter()
        .enumerate()
        .find(|(_, c)| c.alpha3_code.trim().is_empty())
    {
        return Err(CountryError::InvalidData(format!(
            "record {i} ({}) has an empty alpha3Code",
            c.name
        )));
    }
    Ok(convert::from_raw::<DefaultBackend>(raw))
}
