// crates/countries-core/src/model/mod.rs
pub mod convert;
pub mod domain;

pub use domain::{Country, Dataset, DefaultBackend, Named};

/// The file suffix of a binary (bincode) dataset.
#[cfg(not(feature = "compact"))]
pub const BINARY_SUFFIX: &str = ".bin";
#[cfg(feature = "compact")]
pub const BINARY_SUFFIX: &str = ".bin.gz";

/// Convenient alias for the default backend.
pub type DefaultDataset = Dataset<DefaultBackend>;
/// Convenient alias used in examples.
pub type StandardBackend = DefaultBackend;
