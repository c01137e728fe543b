// crates/countries-core/src/loader/common_io.rs
use crate::error::{CountryError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Payload format of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Source JSON (array of raw country records).
    Json,
    /// bincode-serialized [`Dataset`](crate::Dataset).
    Binary,
}

/// Format and compression of `path`, judged by its extension
/// (`.json`, `.json.gz`, `.bin`, `.bin.gz`).
pub fn detect_format(path: &Path) -> Result<(Format, bool)> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .ok_or_else(|| CountryError::UnsupportedFormat(path.display().to_string()))?;

    let (stem, gzip) = match name.strip_suffix(".gz") {
        Some(stem) => (stem, true),
        None => (name.as_str(), false),
    };

    let format = if stem.ends_with(".json") {
        Format::Json
    } else if stem.ends_with(".bin") {
        Format::Binary
    } else {
        return Err(CountryError::UnsupportedFormat(path.display().to_string()));
    };

    Ok((format, gzip))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when asked to.
/// Returns a generic reader so callers don't care about the compression.
pub fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CountryError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if gzip {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(gzip_disabled(path));
        }
    }

    Ok(Box::new(reader))
}

/// Creates (truncates) a file for writing, gzip-compressed when asked to.
pub fn create_stream(path: &Path, gzip: bool) -> Result<Box<dyn Write>> {
    let writer = BufWriter::new(File::create(path)?);

    if gzip {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzEncoder::new(writer, Compression::default())));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(gzip_disabled(path));
        }
    }

    Ok(Box::new(writer))
}

#[cfg(not(feature = "compact"))]
fn gzip_disabled(path: &Path) -> CountryError {
    CountryError::UnsupportedFormat(format!(
        "{}: gzip requested but the 'compact' feature is disabled",
        path.display()
    ))
}
