//! Line-driven browsing session for `countries explore`.

use crate::render;
use countries_core::{Explorer, GeoBackend, RenderInstruction, ViewEvent};
use std::io::{BufRead, Write};

pub const HELP: &str = "\
commands:
  search <text>   filter by name (empty text clears)
  region [name]   filter by region (no name clears)
  open <code>     show a country by code
  back            return to the list
  menu            toggle the region menu
  blur            close the region menu
  help            show this help
  quit            leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Region(Option<String>),
    Open(String),
    Back,
    Menu,
    Blur,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. The error is a message for the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "search" | "s" => Ok(Command::Search(rest.to_owned())),
            "region" | "r" if rest.is_empty() => Ok(Command::Region(None)),
            "region" | "r" => Ok(Command::Region(Some(rest.to_owned()))),
            "open" | "o" if rest.is_empty() => Err("usage: open <code>".to_owned()),
            "open" | "o" => Ok(Command::Open(rest.to_owned())),
            "back" | "b" => Ok(Command::Back),
            "menu" | "m" => Ok(Command::Menu),
            "blur" => Ok(Command::Blur),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other} (try 'help')")),
        }
    }
}

/// Renders once, then applies one command per input line and renders again,
/// until `quit` or end of input.
pub fn run<B: GeoBackend>(
    explorer: &mut Explorer<B>,
    input: impl BufRead,
    w: &mut impl Write,
    json: bool,
) -> anyhow::Result<()> {
    render::instruction(&explorer.render(), json, w)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let out = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                writeln!(w, "{HELP}")?;
                continue;
            }
            Ok(command) => step(explorer, command, w)?,
            Err(msg) => {
                writeln!(w, "{msg}")?;
                continue;
            }
        };
        render::instruction(&out, json, w)?;
    }
    Ok(())
}

fn step<B: GeoBackend>(
    explorer: &mut Explorer<B>,
    command: Command,
    w: &mut impl Write,
) -> std::io::Result<RenderInstruction<B>> {
    let event = match command {
        Command::Search(text) => ViewEvent::SearchInput(text),
        Command::Region(region) => ViewEvent::SelectRegion(region),
        Command::Back => ViewEvent::Back,
        Command::Menu => ViewEvent::ToggleFilterMenu,
        Command::Blur => ViewEvent::CloseFilterMenu,
        Command::Open(code) => {
            if !explorer.open_code(&code) {
                writeln!(w, "No country found for: {code}")?;
            }
            return Ok(explorer.render());
        }
        Command::Help | Command::Quit => return Ok(explorer.render()),
    };
    Ok(explorer.apply(event))
}
