//! Umbrella crate for the workspace: re-exports `countries-core` so the demos
//! can `use countries_rs::prelude::*`.
pub use countries_core::*;
