// crates/countries-core/src/text.rs

//! Text helpers shared by the search predicates and the renderers.

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
///
/// ```
/// use countries_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Lower-cases user input before it is stored as a search term.
#[inline]
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Formats a population count with `,` between groups of three digits.
///
/// ```
/// use countries_core::text::format_population;
///
/// assert_eq!(format_population(0), "0");
/// assert_eq!(format_population(83_240_525), "83,240,525");
/// ```
pub fn format_population(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Joins display parts with `", "`, skipping empty entries.
pub fn join_non_empty<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
