//! Terminal renderer: turns one `RenderInstruction` into text (or JSON).

use countries_core::api::RenderPayload;
use countries_core::text::{format_population, join_non_empty};
use countries_core::{Country, DatasetStats, GeoBackend, RenderInstruction, View};
use std::io::{self, Write};
use std::sync::Arc;

/// Writes the whole instruction: control line, then the active view.
pub fn instruction<B: GeoBackend>(
    out: &RenderInstruction<B>,
    json: bool,
    w: &mut impl Write,
) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *w, &RenderPayload::new(out)).map_err(io::Error::from)?;
        return writeln!(w);
    }

    controls(out, w)?;
    match &out.view {
        View::List { countries } => {
            for c in countries {
                writeln!(w, "{}", card(c))?;
            }
            writeln!(w, "{} countries", countries.len())
        }
        View::Detail { country, borders } => detail(country, borders, w),
        View::Empty => writeln!(w, "No countries match."),
    }
}

fn controls<B: GeoBackend>(out: &RenderInstruction<B>, w: &mut impl Write) -> io::Result<()> {
    writeln!(
        w,
        "search: {:?} | region: {} | filter menu: {}",
        out.search_term,
        out.selected_region.as_deref().unwrap_or("all"),
        if out.filter_menu_open { "open" } else { "closed" }
    )?;
    if out.filter_menu_open {
        writeln!(w, "  regions: {}", out.regions.join(", "))?;
    }
    Ok(())
}

/// One line of the list view.
pub fn card<B: GeoBackend>(c: &Country<B>) -> String {
    format!(
        "{} {} ({}) | {} | pop {} | capital {}",
        c.flag(),
        c.name(),
        c.code(),
        or_dash(c.region()),
        format_population(c.population()),
        or_dash(c.capital()),
    )
}

fn detail<B: GeoBackend>(
    c: &Country<B>,
    borders: &[Arc<Country<B>>],
    w: &mut impl Write,
) -> io::Result<()> {
    writeln!(w, "{} {} ({})", c.flag(), c.name(), c.code())?;
    writeln!(w, "  Native name:      {}", or_dash(c.native_name()))?;
    writeln!(w, "  Population:       {}", format_population(c.population()))?;
    writeln!(w, "  Region:           {}", or_dash(c.region()))?;
    writeln!(w, "  Sub region:       {}", or_dash(c.subregion()))?;
    writeln!(w, "  Capital:          {}", or_dash(c.capital()))?;
    writeln!(w, "  Top level domain: {}", or_dash(&join_non_empty(c.top_level_domains())))?;
    writeln!(w, "  Currencies:       {}", or_dash(&join_non_empty(c.currency_names())))?;
    writeln!(w, "  Languages:        {}", or_dash(&join_non_empty(c.language_names())))?;

    if borders.is_empty() {
        return writeln!(w, "  Border countries: -");
    }
    let links: Vec<String> = borders
        .iter()
        .map(|b| format!("{} ({})", b.name(), b.code()))
        .collect();
    writeln!(w, "  Border countries: {}", links.join(", "))
}

pub fn stats(stats: &DatasetStats, json: bool, w: &mut impl Write) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *w, stats).map_err(io::Error::from)?;
        return writeln!(w);
    }
    writeln!(w, "Dataset statistics:")?;
    writeln!(w, "  Countries:          {}", stats.countries)?;
    writeln!(w, "  Regions:            {}", stats.regions)?;
    writeln!(w, "  Border links:       {}", stats.border_links)?;
    writeln!(w, "  Unresolved borders: {}", stats.unresolved_borders)
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countries_core::{Dataset, DefaultBackend, Explorer, ViewEvent};

    fn explorer() -> Explorer<DefaultBackend> {
        Explorer::new(Dataset::new(vec![
            Country::new("Germany", "DEU")
                .with_region("Europe")
                .with_capital("Berlin")
                .with_population(83_240_525)
                .with_borders(&["FRA", "POL"]),
            Country::new("France", "FRA").with_region("Europe"),
        ]))
    }

    fn text<B: GeoBackend>(out: &RenderInstruction<B>, json: bool) -> String {
        let mut buf = Vec::new();
        instruction(out, json, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn list_shows_cards_and_count() {
        let mut ex = explorer();
        let s = text(&ex.render(), false);
        assert!(s.starts_with("search: \"\" | region: all | filter menu: closed\n"));
        assert!(s.contains("Germany (DEU) | Europe | pop 83,240,525 | capital Berlin"));
        assert!(s.contains("France (FRA) | Europe | pop 0 | capital -"));
        assert!(s.ends_with("2 countries\n"));
    }

    #[test]
    fn open_menu_lists_regions() {
        let mut ex = explorer();
        let s = text(&ex.apply(ViewEvent::ToggleFilterMenu), false);
        assert!(s.contains("filter menu: open\n  regions: Europe\n"));
    }

    #[test]
    fn detail_lists_resolved_borders_only() {
        let mut ex = explorer();
        ex.open_code("DEU");
        let s = text(&ex.render(), false);
        assert!(s.contains("  Capital:          Berlin\n"));
        assert!(s.contains("  Border countries: France (FRA)\n"));
        assert!(!s.contains("POL"));
    }

    #[test]
    fn empty_and_json() {
        let mut ex = explorer();
        let out = ex.apply(ViewEvent::SearchInput("zzz".into()));
        assert!(text(&out, false).ends_with("No countries match.\n"));

        let json: serde_json::Value = serde_json::from_str(&text(&out, true)).unwrap();
        assert_eq!(json["view"], "empty");
        assert_eq!(json["controls"]["search_term"], "zzz");
    }
}
