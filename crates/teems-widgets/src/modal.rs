#![forbid(unsafe_code)]

//! Dialog shell shared by the disclaimer and the concept overlay.

use std::borrow::Cow;

use teems_render::markup::Element;
use teems_render::Node;

use crate::Widget;

/// Attribute naming the action to send when Escape is pressed inside a dialog.
pub const ESCAPE_ACTION_ATTR: &str = "data-escape-action";

/// A modal dialog: a backdrop plus a content panel.
///
/// With a dismiss action, the backdrop and a close button carry it as
/// `data-action`, and the root carries it as `data-escape-action` for the
/// page script to send when Escape is pressed. Without one the dialog can
/// only be left through an action inside `body`, and it is announced as an
/// `alertdialog`.
#[derive(Debug, Clone)]
pub struct Dialog {
    labelled_by: &'static str,
    dismiss_action: Option<Cow<'static, str>>,
    class: &'static str,
    body: Node,
}

impl Dialog {
    /// A dialog titled by the element with id `labelled_by`.
    #[must_use]
    pub fn new(labelled_by: &'static str, body: impl Into<Node>) -> Self {
        Self {
            labelled_by,
            dismiss_action: None,
            class: "",
            body: body.into(),
        }
    }

    /// Make the dialog dismissible through `action`.
    #[must_use]
    pub fn dismiss_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.dismiss_action = Some(action.into());
        self
    }

    /// Extra classes for the content panel.
    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    /// Whether outside clicks and the close button dismiss the dialog.
    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismiss_action.is_some()
    }
}

impl Widget for Dialog {
    fn render(&self) -> Node {
        let mut backdrop = Element::new("div").class("modal-backdrop");
        if let Some(action) = &self.dismiss_action {
            backdrop = backdrop.attr("data-action", action.clone());
        }

        let close = self.dismiss_action.clone().map(|action| {
            Element::new("button")
                .attr("type", "button")
                .class("modal-close")
                .attr("aria-label", "Close")
                .attr("data-action", action)
                .text("\u{00d7}")
        });

        let panel = Element::new("div")
            .class("modal-content")
            .class(self.class)
            .attr("role", if self.is_dismissible() { "dialog" } else { "alertdialog" })
            .attr("aria-modal", "true")
            .attr("aria-labelledby", self.labelled_by)
            .child(close)
            .child(self.body.clone());

        let mut root = Element::new("div").class("modal-root");
        if let Some(action) = &self.dismiss_action {
            root = root.attr(ESCAPE_ACTION_ATTR, action.clone());
        }
        root.child(backdrop)
            .child(panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teems_render::markup::Element;

    #[test]
    fn dismissible_dialog_wires_backdrop_and_close() {
        let node = Dialog::new("concept-title", Element::new("p").text("body"))
            .dismiss_action("close-concept")
            .render();
        let actions: Vec<_> = node
            .find_all(&|el: &Element| el.attr_value("data-action") == Some("close-concept"))
            .into_iter()
            .map(Element::tag)
            .collect();
        assert_eq!(actions, vec!["div", "button"]);
        let root = node.find(&|el: &Element| el.has_class("modal-root")).unwrap();
        assert_eq!(root.attr_value(ESCAPE_ACTION_ATTR), Some("close-concept"));
        let panel = node.find_by_attr("role", "dialog").unwrap();
        assert_eq!(panel.attr_value("aria-labelledby"), Some("concept-title"));
    }

    #[test]
    fn blocking_dialog_has_no_dismiss_hook() {
        let node = Dialog::new("notice-title", Node::text("read me")).render();
        assert!(node.find(&|el: &Element| el.attr_value("data-action").is_some()).is_none());
        assert!(node.find_by_attr("role", "alertdialog").is_some());
        assert!(node.find(&|el: &Element| el.has_class("modal-close")).is_none());
        assert!(node.find(&|el: &Element| el.attr_value(ESCAPE_ACTION_ATTR).is_some()).is_none());
    }
}
