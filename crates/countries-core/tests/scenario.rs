//! End-to-end browsing scenarios against small hand-built datasets and the
//! bundled sample data.

use countries_core::prelude::*;
use std::sync::Arc;

fn germany_france() -> Dataset<DefaultBackend> {
    Dataset::new(vec![
        Country::new("Germany", "DEU")
            .with_region("Europe")
            .with_borders(&["FRA", "POL"]),
        Country::new("France", "FRA")
            .with_region("Europe")
            .with_borders(&["DEU"]),
    ])
}

#[test]
fn search_and_region_narrow_to_germany() {
    let mut ex = Explorer::new(germany_france());
    ex.apply(ViewEvent::SelectRegion(Some("Europe".into())));
    let out = ex.apply(ViewEvent::SearchInput("ger".into()));
    assert_eq!(out.kind(), "list");
    assert_eq!(out.visible_names(), vec!["Germany"]);
}

#[test]
fn unknown_region_is_empty() {
    let mut ex = Explorer::new(germany_france());
    let out = ex.apply(ViewEvent::SelectRegion(Some("Asia".into())));
    assert_eq!(out.kind(), "empty");
    assert!(out.visible().is_empty());
}

#[test]
fn border_navigation_switches_detail() {
    let mut ex = Explorer::new(germany_france());
    let germany = Arc::clone(&ex.dataset().countries()[0]);
    let out = ex.apply(ViewEvent::ShowDetail(germany));

    // POL is not in the dataset
    let links: Vec<_> = out.border_countries().to_vec();
    assert_eq!(links.len(), 1);

    let out = ex.apply(ViewEvent::ShowDetail(Arc::clone(&links[0])));
    assert_eq!(out.detail_country().map(|c| c.name()), Some("France"));

    let out = ex.apply(ViewEvent::Back);
    assert_eq!(out.visible_names(), vec!["Germany", "France"]);
}

#[test]
fn missing_border_yields_single_link() {
    let ds = Dataset::<DefaultBackend>::new(vec![
        Country::new("Home", "HOM").with_borders(&["AAA", "BBB"]),
        Country::new("Alpha", "AAA"),
    ]);
    let mut ex = Explorer::new(ds);
    assert!(ex.open_code("HOM"));
    let out = ex.render();
    let links: Vec<_> = out.border_countries().iter().map(|c| c.code()).collect();
    assert_eq!(links, vec!["AAA"]);
}

#[test]
fn empty_region_record_never_matches_a_region() {
    let ds = Dataset::<DefaultBackend>::new(vec![
        Country::new("Nowhere", "NOW"),
        Country::new("Somewhere", "SOM").with_region("Europe"),
    ]);
    let mut ex = Explorer::new(ds);
    assert_eq!(ex.regions(), ["Europe".to_string()]);

    let out = ex.apply(ViewEvent::SelectRegion(Some(String::new())));
    assert_eq!(out.visible_names(), vec!["Nowhere", "Somewhere"]);
    let out = ex.apply(ViewEvent::SelectRegion(Some("Europe".into())));
    assert_eq!(out.visible_names(), vec!["Somewhere"]);
}

#[test]
fn every_render_reflects_controls() {
    let mut ex = Explorer::new(germany_france());
    let out = ex.apply(ViewEvent::ToggleFilterMenu);
    assert!(out.filter_menu_open);
    assert_eq!(out.regions, vec!["Europe"]);

    let out = ex.apply(ViewEvent::SearchInput("FR".into()));
    assert_eq!(out.search_term, "fr");
    assert!(out.filter_menu_open);

    let out = ex.apply(ViewEvent::CloseFilterMenu);
    assert!(!out.filter_menu_open);
}

// ===== Bundled sample data =====

#[test]
fn bundled_regions() {
    let ds = DefaultDataset::load().unwrap();
    assert_eq!(
        regions(&ds),
        vec!["Africa", "Americas", "Asia", "Europe", "Oceania"]
    );
}

#[test]
fn bundled_load_is_shared() {
    let a = DefaultDataset::load().unwrap();
    let b = DefaultDataset::load().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn bundled_search_ger() {
    let mut ex = Explorer::new(DefaultDataset::load().unwrap());
    let out = ex.apply(ViewEvent::SearchInput("ger".into()));
    assert_eq!(out.visible_names(), vec!["Germany", "Niger", "Nigeria"]);

    let out = ex.apply(ViewEvent::SelectRegion(Some("Europe".into())));
    assert_eq!(out.visible_names(), vec!["Germany"]);
}

#[test]
fn bundled_germany_borders_skip_missing_neighbours() {
    let mut ex = Explorer::new(DefaultDataset::load().unwrap());
    assert!(ex.open_code("DEU"));
    let out = ex.render();
    let names: Vec<_> = out.border_countries().iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec!["Austria", "Belgium", "France", "Luxembourg", "Netherlands"]
    );
}

#[test]
fn bundled_stats() {
    let stats = DefaultDataset::load().unwrap().stats();
    assert_eq!(stats.countries, 17);
    assert_eq!(stats.regions, 5);
    assert!(stats.unresolved_borders > 0);
    assert!(stats.unresolved_borders < stats.border_links);
}
