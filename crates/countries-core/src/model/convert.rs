// crates/countries-core/src/model/convert.rs
use crate::model::domain::{Country, Dataset, Named};
use crate::raw::{CountryRaw, NamedRaw};
use crate::traits::GeoBackend;

/// **Standard Converter:** Raw -> Dataset.
///
/// Absent optional fields become empty strings / zero; currency and language
/// entries without a name are dropped. Records keep their source order.
pub fn from_raw<B: GeoBackend>(raw_countries: Vec<CountryRaw>) -> Dataset<B> {
    raw_countries.into_iter().map(country_from_raw).collect()
}

fn country_from_raw<B: GeoBackend>(c_raw: CountryRaw) -> Country<B> {
    let opt = |s: Option<String>| B::str_from(s.as_deref().unwrap_or(""));

    Country {
        name: B::str_from(&c_raw.name),
        code: B::str_from(c_raw.alpha3_code.trim()),
        region: opt(c_raw.region),
        subregion: opt(c_raw.subregion),
        capital: opt(c_raw.capital),
        population: c_raw.population.unwrap_or(0),
        flag: opt(c_raw.flag),
        native_name: opt(c_raw.native_name),
        top_level_domains: c_raw
            .top_level_domain
            .iter()
            .map(|s| B::str_from(s))
            .collect(),
        currencies: named_from_raw(c_raw.currencies),
        languages: named_from_raw(c_raw.languages),
        borders: c_raw.borders.iter().map(|s| B::str_from(s)).collect(),
    }
}

fn named_from_raw<B: GeoBackend>(raw: Vec<NamedRaw>) -> Vec<Named<B>> {
    raw.into_iter()
        .filter_map(|n| n.name)
        .map(|name| Named {
            name: B::str_from(&name),
        })
        .collect()
}
