// crates/countries-core/src/loader/mod.rs

//! # Dataset provider
//!
//! Handles the physical layer (I/O, decompression) and delegates to the
//! specific parsers (source JSON vs. binary). The rest of the crate only sees
//! a fully materialized [`Dataset`](crate::Dataset).

use crate::error::{CountryError, Result};
use crate::model::{DefaultDataset, BINARY_SUFFIX};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod binary;
pub mod common_io;
#[cfg(feature = "json")]
mod json;

pub use common_io::Format;

// Single in-process cache so the bundled dataset is parsed once per process.
static BUNDLED: OnceCell<Arc<DefaultDataset>> = OnceCell::new();

impl DefaultDataset {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.json"
    }

    /// File name used for the binary form of the bundled dataset.
    pub fn default_binary_filename() -> String {
        format!("countries{BINARY_SUFFIX}")
    }

    /// Loads the bundled dataset (`data/countries.json`) once per process and
    /// hands out the shared instance.
    pub fn load() -> Result<Arc<Self>> {
        BUNDLED
            .get_or_try_init(|| {
                let path = Self::default_data_dir().join(Self::default_dataset_filename());
                Self::load_from_path(path).map(Arc::new)
            })
            .cloned()
    }

    /// Loads a dataset, picking the parser from the file extension.
    ///
    /// `.json` / `.json.gz` are parsed as source JSON; `.bin` / `.bin.gz` as
    /// the binary form written by [`save_as`](Self::save_as).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (format, gzip) = common_io::detect_format(path)?;
        let reader = common_io::open_stream(path, gzip)?;

        let dataset = match format {
            Format::Json => Self::parse_json(reader, path)?,
            Format::Binary => Self::read_binary(reader)?,
        };

        if dataset.is_empty() {
            tracing::warn!(path = %path.display(), "dataset is empty");
        }
        tracing::info!(
            path = %path.display(),
            ?format,
            gzip,
            countries = dataset.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Writes the dataset in binary form; gzip-compressed when the path ends
    /// in `.gz`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let (format, gzip) = common_io::detect_format(path)?;
        if format != Format::Binary {
            return Err(CountryError::UnsupportedFormat(format!(
                "{}: datasets are saved in binary form (.bin / .bin.gz)",
                path.display()
            )));
        }

        let writer = common_io::create_stream(path, gzip)?;
        self.write_binary(writer)?;
        tracing::info!(path = %path.display(), countries = self.len(), "dataset saved");
        Ok(())
    }

    #[cfg(feature = "json")]
    fn parse_json(reader: impl std::io::Read, _path: &Path) -> Result<Self> {
        Self::from_json_reader(reader)
    }

    #[cfg(not(feature = "json"))]
    fn parse_json(_reader: impl std::io::Read, path: &Path) -> Result<Self> {
        Err(CountryError::UnsupportedFormat(format!(
            "{}: JSON support requires the 'json' feature",
            path.display()
        )))
    }
}
