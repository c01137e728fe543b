//! Walks through a browsing session the way a page would drive it: type in
//! the search box, pick a region, open a card, follow a border link, go back.
//!
//! Each step prints the JSON payload a renderer would receive.

use countries_rs::api::RenderPayload;
use countries_rs::prelude::*;

fn show(step: &str, out: &RenderInstruction<DefaultBackend>) {
    println!("--- {step} -> {} ---", out.kind());
    match serde_json::to_string_pretty(&RenderPayload::new(out)) {
        Ok(json) => println!("{json}\n"),
        Err(e) => eprintln!("could not serialize payload: {e}"),
    }
}

fn main() -> Result<()> {
    let mut explorer = Explorer::new(DefaultDataset::load()?);

    show("initial", &explorer.render());
    show("open menu", &explorer.apply(ViewEvent::ToggleFilterMenu));
    show(
        "pick Europe",
        &explorer.apply(ViewEvent::SelectRegion(Some("Europe".into()))),
    );
    show("type 'GER'", &explorer.apply(ViewEvent::SearchInput("GER".into())));

    explorer.open_code("DEU");
    let detail = explorer.render();
    show("open Germany", &detail);

    if let Some(first) = detail.border_countries().first() {
        let first = first.clone();
        show(
            "follow first border",
            &explorer.apply(ViewEvent::ShowDetail(first)),
        );
    }

    show("back", &explorer.apply(ViewEvent::Back));
    show(
        "type 'zzz'",
        &explorer.apply(ViewEvent::SearchInput("zzz".into())),
    );

    println!("lookup rebuilt {} time(s)", explorer.lookup_rebuilds());
    Ok(())
}
