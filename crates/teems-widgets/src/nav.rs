#![forbid(unsafe_code)]

//! Site navigation: route-aware links and the collapsible mobile menu.

use teems_render::markup::Element;
use teems_render::Node;

use crate::{StatefulWidget, Widget};

/// Action string of the mobile menu trigger.
pub const TOGGLE_MENU_ACTION: &str = "toggle-menu";

/// Prefix of link activation actions (`navigate:/people`).
pub const NAVIGATE_ACTION: &str = "navigate";

/// One destination in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavEntry {
    /// Whether this entry is the current location.
    #[must_use]
    pub fn is_active(&self, current: &str) -> bool {
        is_active(self.path, current)
    }

    fn action(&self) -> String {
        crate::keyed_action(NAVIGATE_ACTION, self.path)
    }
}

/// Exact path match; no prefix or trailing-slash folding.
#[must_use]
pub fn is_active(path: &str, current: &str) -> bool {
    path == current
}

/// Open/closed state of the collapsible menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenuState {
    open: bool,
}

impl NavMenuState {
    /// A closed menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the menu.
    pub fn toggle_menu(&mut self) {
        self.open = !self.open;
        tracing::trace!(open = self.open, "menu toggled");
    }

    /// A link was activated: the menu closes whatever its state.
    pub fn on_navigate(&mut self) {
        self.open = false;
    }

    /// Whether the menu is expanded.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// The always-visible link row for wide viewports.
#[derive(Debug, Clone, Copy)]
pub struct DesktopNav<'a> {
    pub entries: &'a [NavEntry],
    pub current: &'a str,
}

impl Widget for DesktopNav<'_> {
    fn render(&self) -> Node {
        Element::new("div")
            .class("nav-desktop")
            .children_from(self.entries.iter().map(|entry| {
                let active = entry.is_active(self.current);
                Element::new("a")
                    .attr("href", entry.path)
                    .class("nav-link")
                    .class_if(active, "active")
                    .attr_if(active, "aria-current", "page")
                    .attr("data-action", entry.action())
                    .text(entry.label)
            }))
            .into()
    }
}

/// The menu trigger plus collapsible link list for narrow viewports.
#[derive(Debug, Clone, Copy)]
pub struct MobileNav<'a> {
    pub entries: &'a [NavEntry],
    pub current: &'a str,
}

impl StatefulWidget for MobileNav<'_> {
    type State = NavMenuState;

    fn render(&self, state: &NavMenuState) -> Node {
        let open = state.is_open();
        let toggle = Element::new("button")
            .attr("type", "button")
            .class("nav-toggle")
            .class_if(open, "open")
            .attr("aria-label", "Toggle menu")
            .attr("aria-expanded", if open { "true" } else { "false" })
            .attr("aria-controls", "nav-mobile")
            .attr("data-action", TOGGLE_MENU_ACTION);

        let links = self.entries.iter().enumerate().map(|(index, entry)| {
            let active = entry.is_active(self.current);
            let delay_ms = if open { index * 50 } else { 0 };
            Element::new("a")
                .attr("href", entry.path)
                .class("nav-mobile-link")
                .class_if(active, "active")
                .attr_if(active, "aria-current", "page")
                .attr("style", format!("transition-delay: {delay_ms}ms"))
                .attr("data-action", entry.action())
                .text(entry.label)
        });

        let panel = Element::new("div")
            .attr("id", "nav-mobile")
            .class("nav-mobile")
            .class(if open { "open" } else { "closed" })
            .attr_if(!open, "aria-hidden", "true")
            .children_from(links);

        Node::Fragment(vec![toggle.into(), panel.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: &[NavEntry] = &[
        NavEntry { label: "Home", path: "/" },
        NavEntry { label: "People", path: "/people" },
        NavEntry { label: "Models", path: "/models" },
    ];

    fn active_labels(node: &Node) -> Vec<String> {
        node.find_all(&|el: &Element| el.tag() == "a" && el.has_class("active"))
            .into_iter()
            .map(|el| Node::from(el.clone()).text_content())
            .collect()
    }

    #[test]
    fn exact_match_only() {
        assert!(is_active("/people", "/people"));
        assert!(!is_active("/", "/people"));
        assert!(!is_active("/people", "/people/"));
        assert!(!is_active("/people", "/people/jane"));
    }

    #[test]
    fn toggle_then_navigate_closes() {
        let mut menu = NavMenuState::new();
        assert!(!menu.is_open());
        menu.toggle_menu();
        assert!(menu.is_open());
        menu.on_navigate();
        assert!(!menu.is_open());
        menu.on_navigate();
        assert!(!menu.is_open());
    }

    #[test]
    fn both_renderings_highlight_current_route() {
        let desktop = DesktopNav { entries: ENTRIES, current: "/people" }.render();
        let mobile = MobileNav { entries: ENTRIES, current: "/people" }.render(&NavMenuState::new());
        assert_eq!(active_labels(&desktop), vec!["People"]);
        assert_eq!(active_labels(&mobile), vec!["People"]);
    }

    #[test]
    fn unknown_route_highlights_nothing() {
        let desktop = DesktopNav { entries: ENTRIES, current: "/nonexistent" }.render();
        assert!(active_labels(&desktop).is_empty());
        assert!(desktop.find_by_attr("aria-current", "page").is_none());
    }

    #[test]
    fn mobile_panel_reflects_menu_state() {
        let nav = MobileNav { entries: ENTRIES, current: "/" };
        let mut menu = NavMenuState::new();
        let closed = nav.render(&menu);
        let panel = closed.find_by_attr("id", "nav-mobile").unwrap();
        assert!(panel.has_class("closed"));
        assert_eq!(panel.attr_value("aria-hidden"), Some("true"));

        menu.toggle_menu();
        let open = nav.render(&menu);
        let panel = open.find_by_attr("id", "nav-mobile").unwrap();
        assert!(panel.has_class("open"));
        let trigger = open.find_by_attr("data-action", TOGGLE_MENU_ACTION).unwrap();
        assert_eq!(trigger.attr_value("aria-expanded"), Some("true"));
        let people = open.find_by_attr("data-action", "navigate:/people").unwrap();
        assert_eq!(people.attr_value("style"), Some("transition-delay: 50ms"));
    }
}
