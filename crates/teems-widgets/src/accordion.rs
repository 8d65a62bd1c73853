#![forbid(unsafe_code)]

//! Non-exclusive expand/collapse list.

use std::collections::BTreeSet;

use teems_render::markup::Element;
use teems_render::Node;

use crate::{ContentKey, StatefulWidget, keyed_action};

/// A static question/answer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqRecord {
    pub question: &'static str,
    pub short_answer: &'static str,
    pub details: &'static str,
    pub considerations: &'static [&'static str],
}

/// Set of expanded keys. Membership is independent per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState<K> {
    open: BTreeSet<K>,
}

impl<K> Default for AccordionState<K> {
    fn default() -> Self {
        Self {
            open: BTreeSet::new(),
        }
    }
}

impl<K: ContentKey> AccordionState<K> {
    /// All items collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `key` if collapsed, collapse it if expanded.
    ///
    /// Returns whether the key is expanded afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        let expanded = if self.open.remove(&key) {
            false
        } else {
            self.open.insert(key);
            true
        };
        tracing::trace!(key = key.slug(), expanded, "accordion toggled");
        expanded
    }

    /// Whether `key` is expanded.
    #[must_use]
    pub fn is_open(&self, key: K) -> bool {
        self.open.contains(&key)
    }

    /// Expanded keys in key order.
    pub fn open_keys(&self) -> impl Iterator<Item = K> + '_ {
        self.open.iter().copied()
    }

    /// Number of expanded items.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

/// Renders every key's record; details only for expanded keys.
#[derive(Debug, Clone, Copy)]
pub struct Accordion<K: 'static> {
    lookup: fn(K) -> &'static FaqRecord,
    toggle_action: &'static str,
}

impl<K: ContentKey> Accordion<K> {
    /// Accordion resolving keys through `lookup`; triggers emit
    /// `toggle_action:<slug>`.
    #[must_use]
    pub fn new(lookup: fn(K) -> &'static FaqRecord, toggle_action: &'static str) -> Self {
        Self {
            lookup,
            toggle_action,
        }
    }

    fn item(&self, key: K, expanded: bool) -> Element {
        let record = (self.lookup)(key);
        let panel_id = format!("faq-panel-{}", key.slug());
        let trigger = Element::new("button")
            .attr("type", "button")
            .class("faq-trigger")
            .attr("aria-expanded", if expanded { "true" } else { "false" })
            .attr("aria-controls", panel_id.clone())
            .attr("data-action", keyed_action(self.toggle_action, key.slug()))
            .child(Element::new("h3").class("faq-question").text(record.question))
            .child(Element::new("p").class("faq-short").text(record.short_answer));

        let panel = expanded.then(|| {
            Element::new("div")
                .attr("id", panel_id)
                .class("faq-panel")
                .child(Element::new("p").class("faq-details").text(record.details))
                .child(
                    Element::new("div")
                        .class("faq-considerations")
                        .child(Element::new("h4").text("Key Considerations"))
                        .child(Element::new("ul").children_from(
                            record.considerations.iter().map(|c| Element::new("li").text(*c)),
                        )),
                )
        });

        Element::new("div")
            .class("faq-item")
            .attr("data-state", if expanded { "open" } else { "closed" })
            .child(trigger)
            .child(panel)
    }
}

impl<K: ContentKey> StatefulWidget for Accordion<K> {
    type State = AccordionState<K>;

    fn render(&self, state: &AccordionState<K>) -> Node {
        Element::new("div")
            .class("faq-list")
            .children_from(K::ALL.iter().map(|&key| self.item(key, state.is_open(key))))
            .into()
    }
}
