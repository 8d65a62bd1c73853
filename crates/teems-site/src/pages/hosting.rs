#![forbid(unsafe_code)]

//! Hosting platform comparison.
//!
//! Mostly static; the Key Concepts grid opens a detail overlay and the
//! questions section is an expandable list.

use teems_render::{Element, Node};
use teems_widgets::accordion::{Accordion, AccordionState};
use teems_widgets::comparison::ComparisonTable;
use teems_widgets::overlay::{DetailOverlay, OverlayState};
use teems_widgets::nav::NAVIGATE_ACTION;
use teems_widgets::{StatefulWidget, Widget};

use crate::action::{CLOSE_CONCEPT_ACTION, OPEN_CONCEPT_ACTION, TOGGLE_FAQ_ACTION};
use crate::content::hosting::{
    ALTERNATIVES, BOTTOM_LINE, CATEGORIES, DEPLOY_OPTIONS, DEPLOY_STEPS, DOCS, ExternalLink,
    IMMEDIATE_GAINS, JOURNEY, OVERVIEW, PLATFORM_BENEFITS, PROJECT_PROFILE, QUARTO_BLURB,
    REASONS, THINGS_TO_CONSIDER, TIER_COLUMNS, VERCEL_JSON, VIDEO_URL,
};
use crate::content::{ConceptKey, FaqKey, concept, faq};

/// The concept overlay as wired on this page.
#[must_use]
pub fn concept_overlay() -> DetailOverlay<ConceptKey> {
    DetailOverlay::new(concept, OPEN_CONCEPT_ACTION, CLOSE_CONCEPT_ACTION)
}

/// The questions list as wired on this page.
#[must_use]
pub fn faq_list() -> Accordion<FaqKey> {
    Accordion::new(faq, TOGGLE_FAQ_ACTION)
}

fn section(id: &'static str, title: &'static str, intro: &'static str) -> Element {
    Element::new("section")
        .attr("id", id)
        .class("hosting-section")
        .child(Element::new("h2").text(title))
        .child(Element::new("p").class("section-intro").text(intro))
}

fn bullets(items: &'static [&'static str]) -> Element {
    Element::new("ul").children_from(items.iter().map(|item| Element::new("li").text(*item)))
}

fn external(link: &ExternalLink) -> Element {
    Element::new("a")
        .attr("href", link.url)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

fn hero() -> Element {
    Element::new("section")
        .class("hosting-hero")
        .child(Element::new("span").class("badge").text("Technical Reference"))
        .child(Element::new("h1").text("Hosting Platform Comparison"))
        .child(Element::new("p").class("lead").text(
            "Comparing GitHub Pages with modern hosting platforms like Vercel\u{2014}what's the \
             difference, and what might work best for NatCap TEEMs?",
        ))
        .child(Element::new("p").class("note").text(
            "Note: I'm most familiar with Vercel, so I'll use it as the primary comparison \
             point. However, there are other excellent options out there (Netlify, Cloudflare \
             Pages, etc.)\u{2014}I'd encourage you to explore all your options before deciding.",
        ))
        .child(
            Element::new("div")
                .class("free-banner")
                .text("Both GitHub Pages and Vercel offer 100% free hosting tiers"),
        )
}

fn overview() -> Element {
    Element::new("section")
        .class("platform-overview")
        .children_from(OVERVIEW.iter().map(|card| {
            Element::new("div")
                .class("platform-card")
                .child(Element::new("h3").text(card.name))
                .child(Element::new("p").class("vendor").text(card.vendor))
                .child(Element::new("p").text(card.blurb))
                .child(Element::new("span").class("price-free").text(card.free_label))
                .child(Element::new("p").class("price-paid").text(card.paid_tier))
        }))
}

fn feature_comparison() -> Element {
    let table = ComparisonTable {
        columns: TIER_COLUMNS,
        categories: CATEGORIES,
    };
    section(
        "feature-comparison",
        "Feature Comparison",
        "A detailed breakdown of capabilities across free and paid tiers.",
    )
    .child(
        Element::new("div")
            .class("platform-groups")
            .child(Element::new("span").class("platform-group").text("GitHub Pages"))
            .child(Element::new("span").class("platform-group").text("Vercel")),
    )
    .child(table.render())
}

fn journey() -> Element {
    let steps = JOURNEY.iter().enumerate().map(|(index, step)| {
        Element::new("li")
            .class("journey-step")
            .attr("data-step", (index + 1).to_string())
            .child(Element::new("h3").text(step.title))
            .child(Element::new("p").text(step.body))
    });
    let reasons = REASONS.iter().map(|card| {
        Element::new("div")
            .class("reason-card")
            .child(Element::new("h4").text(card.title))
            .children_from(card.paragraphs.iter().map(|p| Element::new("p").text(*p)))
            .child((!card.bullets.is_empty()).then(|| bullets(card.bullets)))
    });
    section(
        "how-it-works",
        "How Websites Get to You",
        "A simple overview of what happens when someone visits a website.",
    )
    .child(Element::new("ol").class("journey").children_from(steps))
    .child(
        Element::new("div")
            .class("why-it-matters")
            .child(Element::new("h3").text("Why Does This Matter?"))
            .child(Element::new("div").class("reason-grid").children_from(reasons))
            .child(
                Element::new("p")
                    .class("bottom-line")
                    .child(Element::new("strong").text("Bottom line: "))
                    .text(BOTTOM_LINE),
            ),
    )
}

fn key_concepts() -> Element {
    section(
        "key-concepts",
        "Key Concepts",
        "Click any term to learn more about these web technologies.",
    )
    .child(concept_overlay().triggers())
}

fn considerations() -> Element {
    let benefits = Element::new("ul").children_from(PLATFORM_BENEFITS.iter().map(
        |(label, detail)| {
            Element::new("li")
                .child(Element::new("strong").text(*label))
                .text(format!(" {detail}"))
        },
    ));
    section(
        "considerations",
        "Considerations for NatCap TEEMs",
        "Factors to consider when choosing a hosting platform for this project.",
    )
    .child(
        Element::new("div")
            .class("consideration-grid")
            .child(
                Element::new("div")
                    .class("consideration-card")
                    .child(Element::new("h3").text("Project Profile"))
                    .child(bullets(PROJECT_PROFILE)),
            )
            .child(
                Element::new("div")
                    .class("consideration-card")
                    .child(Element::new("h3").text("Benefits of Modern Hosting Platforms"))
                    .child(benefits),
            ),
    )
    .child(
        Element::new("div")
            .class("things-to-consider")
            .child(Element::new("h3").text("Things to Consider"))
            .child(bullets(THINGS_TO_CONSIDER)),
    )
}

fn questions(open: &AccordionState<FaqKey>) -> Element {
    section(
        "questions",
        "Questions You Might Have",
        "Common concerns about content authoring, Quarto, and modern frameworks\u{2014}addressed.",
    )
    .child(faq_list().render(open))
    .child(
        Element::new("aside")
            .class("quarto-box")
            .child(Element::new("h3").text("What is Quarto?"))
            .child(Element::new("p").text(QUARTO_BLURB))
            .child(
                Element::new("a")
                    .attr("href", "https://quarto.org")
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .text("Learn more at quarto.org"),
            ),
    )
}

fn deploy() -> Element {
    let steps = DEPLOY_STEPS.iter().enumerate().map(|(index, step)| {
        let item = Element::new("li")
            .class("deploy-step")
            .attr("data-step", (index + 1).to_string())
            .child(Element::new("h3").text(step.title))
            .child(Element::new("p").text(step.body));
        match index {
            0 => item.child(Element::new("code").class("command").text("quarto render")),
            1 => item.child(
                Element::new("pre")
                    .attr("data-filename", "vercel.json")
                    .child(Element::new("code").text(VERCEL_JSON)),
            ),
            _ => item.child(Element::new("div").class("deploy-options").children_from(
                DEPLOY_OPTIONS.iter().map(|(name, description, tag)| {
                    Element::new("div")
                        .class("deploy-option")
                        .child(Element::new("span").class("option-name").text(*name))
                        .child(Element::new("p").text(*description))
                        .child(Element::new("span").class("option-tag").text(*tag))
                }),
            )),
        }
    });
    section(
        "deploy",
        "If You Wanted to Go with Vercel",
        "Here's what preparing your site for deployment would look like. The process is \
         straightforward and doesn't require any changes to your existing Quarto project.",
    )
    .child(
        Element::new("p")
            .class("time-estimate")
            .text("Estimated time: Under 10 minutes"),
    )
    .child(Element::new("ol").class("deploy-steps").children_from(steps))
    .child(
        Element::new("div")
            .class("immediate-gains")
            .child(Element::new("h3").text("What you get immediately"))
            .child(bullets(IMMEDIATE_GAINS)),
    )
    .child(
        Element::new("div")
            .class("video")
            .child(Element::new("h3").text("Video Walkthrough"))
            .child(Element::new("p").text("Watch a step-by-step tutorial"))
            .child(
                Element::new("iframe")
                    .attr("src", VIDEO_URL)
                    .attr("title", "Deploying Quarto to Vercel - Video Tutorial")
                    .attr("loading", "lazy")
                    .attr("allowfullscreen", ""),
            ),
    )
}

fn alternatives() -> Element {
    section(
        "alternatives",
        "Other Platforms to Consider",
        "There are several other modern hosting platforms with similar capabilities.",
    )
    .child(
        Element::new("div")
            .class("alternative-grid")
            .children_from(ALTERNATIVES.iter().map(|platform| {
                external(platform)
                    .class("alternative")
                    .child(Element::new("h3").text(platform.name))
                    .child(Element::new("p").text(platform.description))
            })),
    )
}

fn documentation() -> Element {
    Element::new("section")
        .class("hosting-docs")
        .child(Element::new("h2").text("Official Documentation"))
        .child(Element::new("p").text("Explore the official documentation for each platform."))
        .children_from(DOCS.iter().map(|doc| external(doc).class("doc-link").text(doc.name)))
        .child(
            Element::new("a")
                .attr("href", "/")
                .class("back-home")
                .attr("data-action", format!("{NAVIGATE_ACTION}:/"))
                .text("Back to Home"),
        )
}

/// Hosting comparison body, including the open concept overlay (if any).
#[must_use]
pub fn view(selected: &OverlayState<ConceptKey>, open: &AccordionState<FaqKey>) -> Node {
    Node::Fragment(vec![
        hero().into(),
        overview().into(),
        feature_comparison().into(),
        journey().into(),
        key_concepts().into(),
        concept_overlay().render(selected),
        considerations().into(),
        questions(open).into(),
        deploy().into(),
        alternatives().into(),
        documentation().into(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use teems_widgets::ContentKey;

    fn closed() -> Node {
        view(&OverlayState::new(), &AccordionState::new())
    }

    #[test]
    fn closed_page_has_no_dialog() {
        let node = closed();
        assert!(node.find_by_attr("role", "dialog").is_none());
        assert!(node.text_content().contains("Hosting Platform Comparison"));
    }

    #[test]
    fn every_concept_has_a_trigger() {
        let node = closed();
        for &key in ConceptKey::ALL {
            let action = format!("open-concept:{}", key.slug());
            assert!(node.find_by_attr("data-action", &action).is_some(), "{action}");
        }
    }

    #[test]
    fn selected_concept_renders_in_dialog() {
        let mut selected = OverlayState::new();
        selected.open(ConceptKey::Cdn);
        let node = view(&selected, &AccordionState::new());
        let dialog = node.find_by_attr("role", "dialog").unwrap();
        let text = Node::from(dialog.clone()).text_content();
        assert!(text.contains("Content Delivery Network"));
        assert!(node.find_by_attr("data-action", "close-concept").is_some());
    }

    #[test]
    fn expanded_question_shows_details() {
        let mut open = AccordionState::new();
        open.toggle(FaqKey::Quarto);
        let node = view(&OverlayState::new(), &open);
        assert!(node.find_by_attr("id", "faq-panel-quarto").is_some());
        assert!(node.find_by_attr("id", "faq-panel-cms").is_none());
    }

    #[test]
    fn comparison_has_four_tier_columns() {
        let node = closed();
        let headers = node.find_all(&|el: &Element| {
            el.tag() == "th" && el.attr_value("scope") == Some("col") && !el.has_class("feature-col")
        });
        // One header row per category table.
        assert_eq!(headers.len(), TIER_COLUMNS.len() * CATEGORIES.len());
    }
}
