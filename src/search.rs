//! Client-side blog search.
//!
//! Filters the blog cards on a page by the text typed into the search box.
//! Matching is a plain substring test after [`normalize`] has been applied to
//! both the query and each card's text.

use crate::config::{EnhanceConfig, MarkerConfig};
use crate::debug;
use crate::dom::{Document, Element, Selector};
use crate::utils::plural_count;

/// Lower-case, collapse whitespace runs into one space, and trim.
///
/// # Examples
///
/// - `normalize("  Foo   Bar ")` -> `"foo bar"`
/// - `normalize("")` -> `""`
pub fn normalize(text: &str) -> String {
    text.split(is_space)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The browser's `\s` class: Unicode white space plus BOM, minus NEL.
fn is_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Whether a card with normalized text `hay` is shown for normalized query `q`.
#[inline]
pub fn matches(q: &str, hay: &str) -> bool {
    q.is_empty() || hay.contains(q)
}

/// Status line for the result count element.
///
/// `"1 article shown"`, `"5 articles shown"`.
pub fn status_text(shown: usize) -> String {
    format!("{} shown", plural_count(shown, "article"))
}

/// A search box bound to the cards it filters.
///
/// Built by [`blog_search`]; the host calls [`SearchFilter::apply`] on every
/// input event.
#[derive(Debug, Clone)]
pub struct SearchFilter<E: Element> {
    input: E,
    cards: Vec<E>,
    count: Option<E>,
    card_text: String,
}

impl<E: Element> SearchFilter<E> {
    /// Run one filter pass and return the number of visible cards.
    pub fn apply(&self) -> usize {
        let q = normalize(&self.input.value());
        let mut shown = 0;

        for card in &self.cards {
            let hay = self.searchable_text(card);
            let visible = matches(&q, &hay);
            card.set_visible(visible);
            if visible {
                shown += 1;
            }
        }

        if let Some(count) = &self.count {
            count.set_text_content(&status_text(shown));
        }

        debug!("search"; "query {:?}: {}/{} shown", q, shown, self.cards.len());
        shown
    }

    /// The search box element, for wiring its input event.
    pub fn input(&self) -> &E {
        &self.input
    }

    /// Cards in document order.
    pub fn cards(&self) -> &[E] {
        &self.cards
    }

    /// Normalized text a card is searched by.
    ///
    /// An explicit non-empty search-text attribute wins over rendered text.
    fn searchable_text(&self, card: &E) -> String {
        let text = card
            .attribute(&self.card_text)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| card.text_content());
        normalize(&text)
    }
}

/// Bind the page's search box to its blog cards and filter once.
///
/// Returns `None` when the page has no search box or no cards; there is
/// nothing to wire in that case. The initial pass makes a pre-filled query
/// (e.g. restored by the browser) take effect before the user types.
pub fn blog_search<D: Document>(doc: &D, config: &EnhanceConfig) -> Option<SearchFilter<D::Element>> {
    let markers: &MarkerConfig = &config.markers;

    let Some(input) = doc.query(&Selector::attr(&markers.search_input)) else {
        debug!("search"; "no [{}] element, skipping", markers.search_input);
        return None;
    };

    let cards = doc.query_all(&Selector::attr(&markers.card));
    if cards.is_empty() {
        debug!("search"; "no [{}] elements, skipping", markers.card);
        return None;
    }

    let filter = SearchFilter {
        input,
        cards,
        count: doc.query(&Selector::attr(&markers.count)),
        card_text: markers.card_text.clone(),
    };
    filter.apply();
    Some(filter)
}
