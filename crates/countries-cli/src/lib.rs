//! countries-cli
//! =============
//!
//! Command-line browser for the `countries-core` directory.
//!
//! This crate primarily provides a binary (`countries`). The library target
//! only exists so the overview below renders as a documentation page.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! countries --help
//! countries stats
//! countries regions
//! countries list --search ger --region Europe
//! countries show DEU
//! countries --input my.json build my.bin.gz
//! countries explore
//! ```
//!
//! For programmatic access use the [`countries-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
