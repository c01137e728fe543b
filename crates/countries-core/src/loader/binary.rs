// crates/countries-core/src/loader/binary.rs
use crate::error::Result;
use crate::model::DefaultDataset;
use bincode::Options;
use std::io::{Read, Write};

/// Upper bound for a binary dataset, so a corrupt length prefix cannot make
/// the decoder allocate without limit.
const MAX_BINARY_SIZE: u64 = 64 * 1024 * 1024;

impl DefaultDataset {
    /// Reconstructs a dataset from its binary (bincode) form.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(options().deserialize(data)?)
    }

    /// Serializes the dataset into its binary (bincode) form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(options().serialize(self)?)
    }

    pub(super) fn read_binary(reader: impl Read) -> Result<Self> {
        Ok(options().deserialize_from(reader)?)
    }

    pub(super) fn write_binary(&self, mut writer: impl Write) -> Result<()> {
        options().serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(MAX_BINARY_SIZE)
        .allow_trailing_bytes()
}

#[cfg(test)]
mod tests {
    use crate::model::{Country, DefaultDataset};

    #[test]
    fn bytes_keep_every_field() {
        let mut de = Country::new("Germany", "DEU")
            .with_region("Europe")
            .with_capital("Berlin")
            .with_population(83_240_525)
            .with_borders(&["FRA"]);
        de.top_level_domains = vec![".de".into()];
        let ds = DefaultDataset::new(vec![de]);

        let back = DefaultDataset::from_bytes(&ds.to_bytes().unwrap()).unwrap();
        let c = &back.countries()[0];
        assert_eq!(c.capital(), "Berlin");
        assert_eq!(c.population(), 83_240_525);
        assert_eq!(c.top_level_domains().collect::<Vec<_>>(), vec![".de"]);
        assert_eq!(c.borders().collect::<Vec<_>>(), vec!["FRA"]);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(DefaultDataset::from_bytes(&[0xff; 4]).is_err());
    }
}
