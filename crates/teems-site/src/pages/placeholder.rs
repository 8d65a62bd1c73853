#![forbid(unsafe_code)]

//! "To be implemented" pages and the not-found page.

use teems_render::{Element, Node};
use teems_widgets::nav::NAVIGATE_ACTION;

use super::PageId;

fn back_home() -> Element {
    Element::new("a")
        .attr("href", "/")
        .class("back-home")
        .attr("data-action", format!("{NAVIGATE_ACTION}:/"))
        .text("Back to Home")
}

/// Placeholder body for `page`.
///
/// Pages without placeholder copy fall through to [`not_found`].
#[must_use]
pub fn view(page: PageId) -> Node {
    let (heading, blurb) = match page {
        PageId::People => (
            "People",
            "This page will feature our team of researchers and scientists working on \
             earth-economy models.",
        ),
        PageId::Models => (
            "Models",
            "This page will showcase our earth-economy models and cutting-edge research.",
        ),
        _ => return not_found(),
    };
    Element::new("section")
        .class("placeholder")
        .child(Element::new("h1").text(heading))
        .child(Element::new("p").class("placeholder-status").text("To be implemented"))
        .child(Element::new("p").class("placeholder-blurb").text(blurb))
        .child(back_home())
        .into()
}

/// Body for unknown paths.
#[must_use]
pub fn not_found() -> Node {
    Element::new("section")
        .class("placeholder not-found")
        .child(Element::new("h1").text("404"))
        .child(Element::new("p").text("This page could not be found."))
        .child(back_home())
        .into()
}
