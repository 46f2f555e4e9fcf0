//! Preview command implementation.
//!
//! Loads an HTML file, runs the page enhancements against it the way a
//! browser at `--path` would, and reports the resulting state.

use std::fs;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream::Stderr};
use serde::Serialize;

use crate::cli::PreviewArgs;
use crate::config::EnhanceConfig;
use crate::dom::{Document, Element, MemoryDocument, MemoryElement, Selector};
use crate::enhance::enhance;
use crate::log;

/// A navigation link after highlighting.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

/// A blog card after filtering.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Card {
    pub label: String,
    pub visible: bool,
}

/// What a visitor would see.
#[derive(Debug, Serialize)]
pub struct PreviewResult {
    pub path: String,
    pub active: Vec<NavLink>,
    /// `None` when the page has no search.
    pub query: Option<String>,
    pub cards: Vec<Card>,
    pub shown: usize,
    pub status: Option<String>,
}

/// Execute preview command
pub fn run_preview(args: &PreviewArgs, config: &EnhanceConfig) -> Result<()> {
    let html = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let result = preview_html(&html, &args.path, args.query.as_deref(), config)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

/// Enhance `html` as loaded at `path`, with `query` typed into the search box.
pub fn preview_html(
    html: &str,
    path: &str,
    query: Option<&str>,
    config: &EnhanceConfig,
) -> Result<PreviewResult> {
    let doc = MemoryDocument::parse(html)?;
    let markers = &config.markers;

    if let Some(query) = query
        && let Some(input) = doc.query(&Selector::attr(&markers.search_input))
    {
        input.set_value(query);
    }

    let enhanced = enhance(&doc, path, config);

    let active = doc
        .query(&Selector::attr(&markers.nav))
        .map(|nav| nav.query_all(&Selector::tag_with_attr("a", "href")))
        .unwrap_or_default()
        .into_iter()
        .filter(|a| a.attribute(&markers.active).as_deref() == Some(markers.active_value.as_str()))
        .map(|a| NavLink {
            text: a.text_content().trim().to_string(),
            href: a.attribute("href").unwrap_or_default(),
        })
        .collect();

    let (query, cards) = match &enhanced.search {
        Some(filter) => (
            Some(filter.input().value()),
            filter.cards().iter().map(|c| card(c, &markers.card_text)).collect(),
        ),
        None => (None, Vec::new()),
    };
    let shown = cards.iter().filter(|c| c.visible).count();
    let status = enhanced
        .search
        .as_ref()
        .and_then(|_| doc.query(&Selector::attr(&markers.count)))
        .map(|e| e.text_content());

    Ok(PreviewResult {
        path: path.to_string(),
        active,
        query,
        cards,
        shown,
        status,
    })
}

fn card(element: &MemoryElement, card_text: &str) -> Card {
    let label = element
        .attribute(card_text)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| element.text_content());
    Card {
        label: label.split_whitespace().collect::<Vec<_>>().join(" "),
        visible: element.is_visible(),
    }
}

fn print_result(result: &PreviewResult) {
    log!("preview"; "page {}", result.path);

    if result.active.is_empty() {
        log!("preview"; "no active navigation link");
    }
    for link in &result.active {
        eprintln!(
            "  {} {} {}",
            "●".if_supports_color(Stderr, |t| t.green()),
            link.text,
            format!("({})", link.href).if_supports_color(Stderr, |t| t.dimmed())
        );
    }

    let Some(query) = &result.query else {
        log!("preview"; "no blog search on this page");
        return;
    };
    log!("preview"; "search {:?}", query);
    for card in &result.cards {
        if card.visible {
            eprintln!("  {} {}", "+".if_supports_color(Stderr, |t| t.green()), card.label);
        } else {
            eprintln!(
                "  {} {}",
                "-".if_supports_color(Stderr, |t| t.red()),
                card.label.if_supports_color(Stderr, |t| t.dimmed())
            );
        }
    }
    match &result.status {
        Some(status) => log!("preview"; "{}", status),
        None => log!("preview"; "{}/{} shown", result.shown, result.cards.len()),
    }
}
