#![forbid(unsafe_code)]

//! Single-select detail overlay.
//!
//! At most one key is selected; selecting another replaces the displayed
//! record rather than stacking a second dialog.

use teems_render::markup::Element;
use teems_render::Node;

use crate::modal::Dialog;
use crate::{ContentKey, StatefulWidget, Widget, keyed_action};

/// A static record shown in the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRecord {
    pub title: &'static str,
    pub abbrev: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub benefits: &'static [&'static str],
    pub use_cases: &'static [&'static str],
}

/// Which key, if any, the overlay shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayState<K> {
    selected: Option<K>,
}

impl<K> Default for OverlayState<K> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<K: ContentKey> OverlayState<K> {
    /// A closed overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `key`, replacing whatever was shown.
    pub fn open(&mut self, key: K) {
        if let Some(prev) = self.selected.replace(key)
            && prev != key
        {
            tracing::trace!(from = prev.slug(), to = key.slug(), "overlay content replaced");
        }
    }

    /// Hide the overlay.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Selected key.
    #[must_use]
    pub fn selected(&self) -> Option<K> {
        self.selected
    }

    /// Whether the overlay is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The record on display, resolved through `lookup`.
    #[must_use]
    pub fn displayed<R>(&self, lookup: impl Fn(K) -> R) -> Option<R> {
        self.selected.map(lookup)
    }
}

/// Renders the selected record inside a dismissible dialog.
#[derive(Debug, Clone, Copy)]
pub struct DetailOverlay<K: 'static> {
    lookup: fn(K) -> &'static DetailRecord,
    open_action: &'static str,
    close_action: &'static str,
}

impl<K: ContentKey> DetailOverlay<K> {
    /// Overlay resolving keys through `lookup`. Trigger buttons emit
    /// `open_action:<slug>`; the backdrop and close button emit `close_action`.
    #[must_use]
    pub fn new(
        lookup: fn(K) -> &'static DetailRecord,
        open_action: &'static str,
        close_action: &'static str,
    ) -> Self {
        Self {
            lookup,
            open_action,
            close_action,
        }
    }

    /// Grid of buttons, one per key, each opening its record.
    #[must_use]
    pub fn triggers(&self) -> Node {
        Element::new("div")
            .class("concept-grid")
            .children_from(K::ALL.iter().map(|&key| {
                let record = (self.lookup)(key);
                Element::new("button")
                    .attr("type", "button")
                    .class("concept-card")
                    .attr("data-action", keyed_action(self.open_action, key.slug()))
                    .child(Element::new("h3").class("concept-abbrev").text(record.abbrev))
                    .child(Element::new("p").class("concept-summary").text(record.summary))
                    .child(Element::new("span").class("concept-more").text("Click to learn more"))
            }))
            .into()
    }

    fn record_body(record: &DetailRecord) -> Element {
        let bullet_list = |items: &'static [&'static str]| {
            Element::new("ul").children_from(items.iter().map(|item| Element::new("li").text(*item)))
        };
        Element::new("div")
            .class("concept-detail")
            .child(Element::new("span").class("concept-abbrev").text(record.abbrev))
            .child(
                Element::new("h2")
                    .attr("id", "concept-title")
                    .class("concept-title")
                    .text(record.title),
            )
            .child(Element::new("p").class("concept-details").text(record.details))
            .child(
                Element::new("div")
                    .class("concept-columns")
                    .child(
                        Element::new("section")
                            .class("concept-benefits")
                            .child(Element::new("h4").text("Key Benefits"))
                            .child(bullet_list(record.benefits)),
                    )
                    .child(
                        Element::new("section")
                            .class("concept-use-cases")
                            .child(Element::new("h4").text("Best For"))
                            .child(bullet_list(record.use_cases)),
                    ),
            )
    }
}

impl<K: ContentKey> StatefulWidget for DetailOverlay<K> {
    type State = OverlayState<K>;

    fn render(&self, state: &OverlayState<K>) -> Node {
        match state.displayed(self.lookup) {
            None => Node::empty(),
            Some(record) => Dialog::new("concept-title", Self::record_body(record))
                .dismiss_action(self.close_action)
                .class("concept-dialog")
                .render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_keys::Fruit;

    static APPLE: DetailRecord = DetailRecord {
        title: "Apple",
        abbrev: "APL",
        summary: "Crisp.",
        details: "Grows on trees.",
        benefits: &["Fiber"],
        use_cases: &["Pie"],
    };
    static PEAR: DetailRecord = DetailRecord {
        title: "Pear",
        abbrev: "PR",
        summary: "Soft.",
        details: "Also grows on trees.",
        benefits: &["Juice"],
        use_cases: &["Tart", "Salad"],
    };
    static PLUM: DetailRecord = DetailRecord {
        title: "Plum",
        abbrev: "PLM",
        summary: "Tart.",
        details: "Stone fruit.",
        benefits: &[],
        use_cases: &[],
    };

    fn lookup(key: Fruit) -> &'static DetailRecord {
        match key {
            Fruit::Apple => &APPLE,
            Fruit::Pear => &PEAR,
            Fruit::Plum => &PLUM,
        }
    }

    fn overlay() -> DetailOverlay<Fruit> {
        DetailOverlay::new(lookup, "open-fruit", "close-fruit")
    }

    #[test]
    fn open_then_close() {
        let mut state = OverlayState::new();
        assert!(!state.is_open());
        state.open(Fruit::Pear);
        assert_eq!(state.displayed(lookup), Some(&PEAR));
        state.close();
        assert_eq!(state.selected(), None);
        assert!(overlay().render(&state).is_empty());
    }

    #[test]
    fn opening_another_key_replaces_content() {
        let mut state = OverlayState::new();
        state.open(Fruit::Apple);
        state.open(Fruit::Plum);
        assert_eq!(state.selected(), Some(Fruit::Plum));
        let node = overlay().render(&state);
        assert_eq!(node.find_all(&|el: &Element| el.attr_value("role") == Some("dialog")).len(), 1);
        let title = node.find_by_attr("id", "concept-title").unwrap();
        assert_eq!(Node::from(title.clone()).text_content(), "Plum");
    }

    #[test]
    fn rendered_record_lists_benefits_and_use_cases() {
        let mut state = OverlayState::new();
        state.open(Fruit::Pear);
        let text = overlay().render(&state).text_content();
        for needle in ["Pear", "Also grows on trees.", "Juice", "Tart", "Salad", "Key Benefits"] {
            assert!(text.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn triggers_emit_open_actions_for_every_key() {
        let node = overlay().triggers();
        for &key in Fruit::ALL {
            let action = format!("open-fruit:{}", key.slug());
            assert!(node.find_by_attr("data-action", &action).is_some(), "{action}");
        }
    }
}
