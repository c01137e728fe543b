// crates/countries-core/src/traits.rs
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for the textual fields of a [`Country`](crate::Country).
///
/// This abstraction allows the crate to swap how strings are stored
/// internally (for example to use interned or inline strings) without
/// changing the accessors, which always hand out `&str` views.
///
/// Implementors must be `Clone + Debug + Send + Sync + 'static` and the associated
/// string type must be serializable so a dataset can be written with bincode.
pub trait GeoBackend: Clone + std::fmt::Debug + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    fn str_from(s: &str) -> Self::Str;

    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
}

/// Name-based matching helpers for types that expose a display name.
///
/// Two flavours are offered: plain lower-case matching, which is what the
/// directory search uses by default, and accent-insensitive matching based on
/// [`fold_key`].
///
/// # Examples
/// ```rust
/// use countries_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Germany").name_contains_lower("erma"));
/// assert!(!Place("Åland Islands").name_contains_lower("aland"));
/// assert!(Place("Åland Islands").name_contains_folded("aland"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive substring match.
    ///
    /// `needle` is expected to already be lower-cased; an empty needle always
    /// matches.
    #[inline]
    fn name_contains_lower(&self, needle: &str) -> bool {
        needle.is_empty() || self.name_str().to_lowercase().contains(needle)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains_folded(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}
