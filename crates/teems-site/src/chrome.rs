#![forbid(unsafe_code)]

//! Shared page chrome: university header with navigation, and footer.

use teems_core::intersection::ObserveOptions;
use teems_render::{Element, Node};
use teems_widgets::nav::{DesktopNav, MobileNav, NavMenuState};
use teems_widgets::reveal::RevealState;
use teems_widgets::{StatefulWidget, Widget};

use crate::action::TOGGLE_SEARCH_ACTION;
use crate::content::site::{
    ACCESSIBILITY_URL, ADDRESS_LINES, CONTACT_EMAIL, DEPARTMENT_LABEL, DEPARTMENT_URL,
    EQUAL_OPPORTUNITY, GIFT_URL, LINKEDIN_URL, NAV_ENTRIES, PRIVACY_URL, SEARCH_PLACEHOLDER,
    SITE_ICON, SITE_TITLE, UNIVERSITY_NAME, UNIVERSITY_URL, UTILITY_LINKS,
};

/// Footer reveal, observed like the other sections.
#[must_use]
pub fn footer_reveal() -> RevealState {
    RevealState::new("footer", ObserveOptions::threshold(0.1))
}

fn external(url: &'static str) -> Element {
    Element::new("a")
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

/// Site header for `route`.
#[must_use]
pub fn header(route: &str, menu: &NavMenuState, search_open: bool) -> Node {
    let brand = Element::new("a")
        .attr("href", UNIVERSITY_URL)
        .class("university-brand")
        .child(
            Element::new("img")
                .attr("src", SITE_ICON)
                .attr("alt", "University of Minnesota"),
        )
        .child(Element::new("span").text(UNIVERSITY_NAME));

    let search_toggle = Element::new("button")
        .attr("type", "button")
        .class("search-toggle")
        .class_if(search_open, "open")
        .attr("aria-label", "Search")
        .attr("aria-expanded", if search_open { "true" } else { "false" })
        .attr("aria-controls", "site-search")
        .attr("data-action", TOGGLE_SEARCH_ACTION);

    let utility = Element::new("div")
        .class("utility-links")
        .children_from(
            UTILITY_LINKS
                .iter()
                .map(|(label, url)| Element::new("a").attr("href", *url).text(*label)),
        )
        .child(search_toggle);

    let search_bar = search_open.then(|| {
        Element::new("div")
            .attr("id", "site-search")
            .class("search-bar")
            .child(
                Element::new("input")
                    .attr("type", "search")
                    .attr("placeholder", SEARCH_PLACEHOLDER)
                    .attr("aria-label", SEARCH_PLACEHOLDER),
            )
    });

    let gold_bar = Element::new("div")
        .class("gold-bar")
        .child(
            Element::new("a")
                .attr("href", DEPARTMENT_URL)
                .class("department")
                .text(DEPARTMENT_LABEL),
        )
        .child(Element::new("h1").class("site-title").text(SITE_TITLE));

    let nav = Element::new("nav")
        .class("site-nav")
        .attr("aria-label", "Main")
        .child(
            DesktopNav {
                entries: NAV_ENTRIES,
                current: route,
            }
            .render(),
        )
        .child(
            MobileNav {
                entries: NAV_ENTRIES,
                current: route,
            }
            .render(menu),
        );

    Element::new("header")
        .class("site-header")
        .child(Element::new("div").class("top-bar").child(brand).child(utility))
        .child(search_bar)
        .child(gold_bar)
        .child(nav)
        .into()
}

/// Site footer. `year` is the copyright year.
#[must_use]
pub fn footer(reveal: &RevealState, year: i32) -> Node {
    let mut address = Element::new("address");
    for (index, line) in ADDRESS_LINES.iter().enumerate() {
        if index > 0 {
            address = address.child(Element::new("br"));
        }
        address = address.text(*line);
    }

    let contact = Element::new("div")
        .class("footer-contact")
        .child(
            Element::new("a")
                .attr("href", format!("mailto:{CONTACT_EMAIL}"))
                .text(CONTACT_EMAIL),
        )
        .child(address);

    let actions = Element::new("div")
        .class("footer-actions")
        .child(Element::new("a").attr("href", GIFT_URL).class("gift").text("Make a gift"))
        .child(external(LINKEDIN_URL).attr("aria-label", "LinkedIn").class("linkedin"));

    let unit = Element::new("div")
        .class("unit-footer")
        .child(contact)
        .child(
            Element::new("div")
                .class("footer-logo")
                .child(Element::new("img").attr("src", SITE_ICON).attr("alt", "")),
        )
        .child(actions);

    let legal = Element::new("div")
        .class("university-footer")
        .child(
            Element::new("p")
                .text(format!("\u{a9} {year} Regents of the "))
                .child(
                    Element::new("a")
                        .attr("href", UNIVERSITY_URL)
                        .text("University of Minnesota"),
                )
                .text(". All rights reserved."),
        )
        .child(Element::new("span").text(EQUAL_OPPORTUNITY))
        .child(
            Element::new("div")
                .class("legal-links")
                .child(Element::new("a").attr("href", PRIVACY_URL).text("Privacy Statement"))
                .child(
                    Element::new("a")
                        .attr("href", ACCESSIBILITY_URL)
                        .text("Report Web Accessibility Issues"),
                ),
        );

    reveal
        .decorate(Element::new("footer").attr("id", "footer").class("site-footer"))
        .child(unit)
        .child(legal)
        .into()
}
