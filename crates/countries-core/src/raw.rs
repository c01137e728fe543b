// crates/countries-core/src/raw.rs
use serde::Deserialize;

/// Raw `{ "name": ... }` entry used for currencies and languages.
#[derive(Debug, Default, Deserialize)]
pub struct NamedRaw {
    #[serde(default)]
    pub name: Option<String>,
}

/// Raw country structure as it comes from the source JSON.
///
/// NOTE: This type mirrors the external dataset and is not part of the public
/// API; every optional field defaults to empty when absent.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: String,
    #[serde(rename = "alpha3Code")]
    pub alpha3_code: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(rename = "nativeName", default)]
    pub native_name: Option<String>,
    #[serde(rename = "topLevelDomain", default)]
    pub top_level_domain: Vec<String>,
    #[serde(default)]
    pub currencies: Vec<NamedRaw>,
    #[serde(default)]
    pub languages: Vec<NamedRaw>,
    #[serde(default)]
    pub borders: Vec<String>,
}

pub type CountriesRaw = Vec<CountryRaw>;
