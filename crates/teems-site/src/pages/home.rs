#![forbid(unsafe_code)]

//! Home page: hero, mission, collaborators, call to action.

use teems_core::geometry::Sides;
use teems_core::intersection::{IntersectionEntry, ObserveOptions};
use teems_render::{Element, Node};
use teems_runtime::Subscription;
use teems_widgets::nav::NAVIGATE_ACTION;
use teems_widgets::reveal::RevealState;

use crate::content::home::{
    COLLABORATORS, COLLABORATORS_EYEBROW, COLLABORATORS_INTRO, COLLABORATORS_TITLE, CTA_CARDS,
    FEATURES, HERO_BADGE, HERO_IMAGE, HERO_IMAGE_ALT, HERO_SUBTITLE, HERO_TAGLINE, HERO_TITLE,
    MISSION_CALLOUT, MISSION_EYEBROW, MISSION_PARAGRAPHS, MISSION_TITLE, NATCAP_URL,
};

/// Reveal state for each animated home section.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSections {
    pub hero: RevealState,
    pub mission: RevealState,
    pub collaborators: RevealState,
    pub cta: RevealState,
}

impl Default for HomeSections {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeSections {
    /// All sections hidden.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hero: RevealState::new("hero", ObserveOptions::default()),
            mission: RevealState::new("mission", ObserveOptions::threshold(0.1)),
            collaborators: RevealState::new(
                "collaborators",
                ObserveOptions::threshold(0.05).with_root_margin(Sides::symmetric(50.0, 0.0)),
            ),
            cta: RevealState::new("cta", ObserveOptions::threshold(0.2)),
        }
    }

    /// Client mount: the hero is above the fold and shows immediately.
    pub fn mount(&mut self) {
        self.hero.reveal();
    }

    /// Route an entry to the section it belongs to.
    pub fn observe(&mut self, entry: &IntersectionEntry) -> bool {
        self.observed_mut().any(|section| section.observe(entry))
    }

    /// Observations for sections still hidden.
    pub fn subscriptions<M: 'static>(
        &self,
        make_msg: fn(IntersectionEntry) -> M,
    ) -> Vec<Box<dyn Subscription<M>>> {
        [&self.mission, &self.collaborators, &self.cta]
            .into_iter()
            .filter_map(|section| section.subscription(make_msg))
            .collect()
    }

    fn observed_mut(&mut self) -> impl Iterator<Item = &mut RevealState> {
        [&mut self.mission, &mut self.collaborators, &mut self.cta].into_iter()
    }
}

/// Staggered transition delay for item `index`, zero until revealed.
fn stagger(visible: bool, index: usize, base_ms: usize) -> String {
    let ms = if visible { index * 100 + base_ms } else { 0 };
    format!("transition-delay: {ms}ms")
}

fn internal_link(path: &'static str) -> Element {
    Element::new("a")
        .attr("href", path)
        .attr("data-action", format!("{NAVIGATE_ACTION}:{path}"))
}

fn external_link(url: &'static str) -> Element {
    Element::new("a")
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

fn hero(state: &RevealState) -> Element {
    let copy = Element::new("div")
        .class("hero-copy")
        .child(Element::new("span").class("hero-badge").text(HERO_BADGE))
        .child(Element::new("h2").class("hero-title").text(HERO_TITLE))
        .child(Element::new("p").class("hero-subtitle").text(HERO_SUBTITLE))
        .child(Element::new("p").class("hero-tagline").text(HERO_TAGLINE))
        .child(
            Element::new("div")
                .class("hero-actions")
                .child(
                    Element::new("a")
                        .attr("href", "#mission")
                        .class("button primary")
                        .text("Learn More"),
                )
                .child(
                    internal_link("/models")
                        .class("button outline")
                        .text("Explore Our Models"),
                ),
        );
    state.decorate(
        Element::new("section")
            .attr("id", "hero")
            .class("hero")
            .child(
                Element::new("img")
                    .attr("src", HERO_IMAGE)
                    .attr("alt", HERO_IMAGE_ALT)
                    .class("hero-image"),
            )
            .child(copy),
    )
}

fn mission(state: &RevealState) -> Element {
    let visible = state.is_visible();
    let text = Element::new("div")
        .class("mission-text")
        .child(Element::new("span").class("eyebrow").text(MISSION_EYEBROW))
        .child(Element::new("h3").text(MISSION_TITLE))
        .children_from(MISSION_PARAGRAPHS.iter().map(|p| Element::new("p").text(*p)))
        .child(Element::new("p").class("mission-callout").text(MISSION_CALLOUT));
    let cards = Element::new("div")
        .class("feature-grid")
        .children_from(FEATURES.iter().enumerate().map(|(index, feature)| {
            Element::new("div")
                .class("feature-card")
                .attr("style", stagger(visible, index, 200))
                .child(
                    Element::new("span")
                        .class("icon")
                        .attr("data-icon", feature.icon)
                        .attr("aria-hidden", "true"),
                )
                .child(Element::new("h4").text(feature.title))
                .child(Element::new("p").text(feature.description))
        }));
    state.decorate(
        Element::new("section")
            .attr("id", "mission")
            .class("mission")
            .child(text)
            .child(cards),
    )
}

fn collaborators(state: &RevealState) -> Element {
    let visible = state.is_visible();
    let grid = Element::new("div")
        .class("collaborator-grid")
        .children_from(COLLABORATORS.iter().enumerate().map(|(index, collab)| {
            external_link(collab.url)
                .class("collaborator")
                .attr("style", stagger(visible, index, 300))
                .child(
                    Element::new("img")
                        .attr("src", collab.logo)
                        .attr("alt", format!("{} logo", collab.full_name)),
                )
                .child(Element::new("span").class("collaborator-name").text(collab.name))
                .child(
                    Element::new("span")
                        .class("collaborator-full-name")
                        .text(collab.full_name),
                )
        }));
    state.decorate(
        Element::new("section")
            .attr("id", "collaborators")
            .class("collaborators")
            .child(Element::new("span").class("eyebrow").text(COLLABORATORS_EYEBROW))
            .child(Element::new("h3").text(COLLABORATORS_TITLE))
            .child(Element::new("p").text(COLLABORATORS_INTRO))
            .child(grid)
            .child(
                external_link(NATCAP_URL)
                    .class("natcap-link")
                    .text("Learn about the Natural Capital Project"),
            ),
    )
}

fn cta(state: &RevealState) -> Element {
    let cards = CTA_CARDS.iter().map(|card| {
        internal_link(card.path)
            .class("cta-card")
            .child(
                Element::new("span")
                    .class("icon")
                    .attr("data-icon", card.icon)
                    .attr("aria-hidden", "true"),
            )
            .child(Element::new("h4").text(card.title))
            .child(Element::new("p").text(card.body))
            .child(Element::new("span").class("cta-link").text(card.link_label))
    });
    state.decorate(
        Element::new("section")
            .attr("id", "cta")
            .class("cta")
            .child(Element::new("div").class("cta-grid").children_from(cards)),
    )
}

/// Home page body.
#[must_use]
pub fn view(sections: &HomeSections) -> Node {
    Node::Fragment(vec![
        hero(&sections.hero).into(),
        mission(&sections.mission).into(),
        collaborators(&sections.collaborators).into(),
        cta(&sections.cta).into(),
    ])
}
