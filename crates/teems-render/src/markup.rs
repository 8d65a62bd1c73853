#![forbid(unsafe_code)]

//! Markup tree.
//!
//! Views build a [`Node`] tree; rendering walks it once into a `String`.
//! Text and attribute values are escaped on output, so content strings can be
//! passed through unmodified. [`Node::Raw`] is the only unescaped path and is
//! reserved for trusted, static snippets (inline bootstrap scripts).

use std::borrow::Cow;

use crate::escape::{escape_attr_into, escape_text_into};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

type Text = Cow<'static, str>;

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Escaped text.
    Text(Text),
    /// Trusted markup emitted verbatim.
    Raw(Text),
    /// Children without a wrapping element.
    Fragment(Vec<Node>),
}

impl Node {
    /// A node that renders nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    /// A text node.
    pub fn text(s: impl Into<Text>) -> Self {
        Node::Text(s.into())
    }

    /// A trusted raw markup node.
    pub fn raw(s: impl Into<Text>) -> Self {
        Node::Raw(s.into())
    }

    /// Whether the node renders to an empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Element(_) => false,
            Node::Text(s) | Node::Raw(s) => s.is_empty(),
            Node::Fragment(children) => children.iter().all(Node::is_empty),
        }
    }

    /// Render into an existing buffer.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.render_into(out),
            Node::Text(s) => escape_text_into(s, out),
            Node::Raw(s) => out.push_str(s),
            Node::Fragment(children) => {
                for child in children {
                    child.render_into(out);
                }
            }
        }
    }

    /// Render to a new string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Concatenated text content, unescaped.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
            Node::Text(s) => out.push_str(s),
            Node::Raw(_) => {}
            Node::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search for the first element matching `pred`.
    pub fn find(&self, pred: &impl Fn(&Element) -> bool) -> Option<&Element> {
        match self {
            Node::Element(el) => {
                if pred(el) {
                    return Some(el);
                }
                el.children.iter().find_map(|c| c.find(pred))
            }
            Node::Fragment(children) => children.iter().find_map(|c| c.find(pred)),
            Node::Text(_) | Node::Raw(_) => None,
        }
    }

    /// All elements matching `pred`, in document order.
    pub fn find_all<'a>(&'a self, pred: &impl Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&mut |el| {
            if pred(el) {
                found.push(el);
            }
        });
        found
    }

    /// First element whose `name` attribute equals `value`.
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        self.find(&|el: &Element| el.attr_value(name) == Some(value))
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        match self {
            Node::Element(el) => {
                visit(el);
                for child in &el.children {
                    child.walk(visit);
                }
            }
            Node::Fragment(children) => {
                for child in children {
                    child.walk(visit);
                }
            }
            Node::Text(_) | Node::Raw(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&'static str> for Node {
    fn from(s: &'static str) -> Self {
        Node::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(Cow::Owned(s))
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Node>) -> Self {
        Node::Fragment(children)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(node: Option<T>) -> Self {
        node.map_or_else(Node::empty, Into::into)
    }
}

/// An HTML element under construction.
///
/// Builder methods consume and return `self`:
///
/// ```
/// use teems_render::markup::Element;
///
/// let link = Element::new("a")
///     .attr("href", "/people")
///     .class("nav-link")
///     .class_if(true, "active")
///     .text("People");
/// assert_eq!(
///     link.to_html(),
///     r#"<a href="/people" class="nav-link active">People</a>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, Text)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Child nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Value of the named attribute, if set.
    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_ref())
    }

    /// Whether the class list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr_value("class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<Text>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set an attribute only when `cond` holds.
    #[must_use]
    pub fn attr_if(self, cond: bool, name: &'static str, value: impl Into<Text>) -> Self {
        if cond { self.attr(name, value) } else { self }
    }

    /// Append to the class list.
    #[must_use]
    pub fn class(mut self, class: impl Into<Text>) -> Self {
        let class = class.into();
        if class.is_empty() {
            return self;
        }
        match self.attrs.iter_mut().find(|(n, _)| *n == "class") {
            Some(slot) => {
                let mut joined = slot.1.to_string();
                joined.push(' ');
                joined.push_str(&class);
                slot.1 = Cow::Owned(joined);
            }
            None => self.attrs.push(("class", class)),
        }
        self
    }

    /// Append to the class list only when `cond` holds.
    #[must_use]
    pub fn class_if(self, cond: bool, class: impl Into<Text>) -> Self {
        if cond { self.class(class) } else { self }
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        if !matches!(&child, Node::Fragment(c) if c.is_empty()) {
            self.children.push(child);
        }
        self
    }

    /// Append several children.
    #[must_use]
    pub fn children_from<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, s: impl Into<Text>) -> Self {
        self.child(Node::Text(s.into()))
    }

    /// Render into an existing buffer.
    pub fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attr_into(value, out);
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag) {
            if !self.children.is_empty() {
                tracing::warn!(tag = self.tag, "children on void element dropped");
            }
            return;
        }
        for child in &self.children {
            child.render_into(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }

    /// Render to a new string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_elements_render_in_order() {
        let node: Node = Element::new("ul")
            .child(Element::new("li").text("one"))
            .child(Element::new("li").text("two"))
            .into();
        assert_eq!(node.to_html(), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let el = Element::new("p").attr("title", r#"a "quote""#).text("1 < 2");
        assert_eq!(el.to_html(), r#"<p title="a &quot;quote&quot;">1 &lt; 2</p>"#);
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let el = Element::new("img").attr("src", "/logo.png").attr("alt", "");
        assert_eq!(el.to_html(), r#"<img src="/logo.png" alt="">"#);
    }

    #[test]
    fn attr_replaces_existing_value() {
        let el = Element::new("a").attr("href", "/").attr("href", "/models");
        assert_eq!(el.attr_value("href"), Some("/models"));
        assert_eq!(el.to_html(), r#"<a href="/models"></a>"#);
    }

    #[test]
    fn class_accumulates_and_skips_empty() {
        let el = Element::new("div")
            .class("card")
            .class("")
            .class_if(false, "hidden")
            .class_if(true, "visible");
        assert_eq!(el.attr_value("class"), Some("card visible"));
        assert!(el.has_class("visible"));
        assert!(!el.has_class("hidden"));
    }

    #[test]
    fn empty_fragments_are_not_kept_as_children() {
        let el = Element::new("div").child(Node::empty()).child(None::<Element>);
        assert!(el.children().is_empty());
    }

    #[test]
    fn raw_is_not_escaped() {
        let node = Node::Fragment(vec![Node::raw("<b>x</b>"), Node::text("<b>")]);
        assert_eq!(node.to_html(), "<b>x</b>&lt;b&gt;");
        assert_eq!(node.text_content(), "<b>");
    }

    #[test]
    fn find_by_attr_searches_depth_first() {
        let node: Node = Element::new("div")
            .child(Element::new("button").attr("data-action", "toggle-menu"))
            .child(
                Element::new("nav").child(Element::new("a").attr("data-action", "navigate:/")),
            )
            .into();
        let hit = node.find_by_attr("data-action", "navigate:/").unwrap();
        assert_eq!(hit.tag(), "a");
        assert!(node.find_by_attr("data-action", "missing").is_none());
        assert_eq!(node.find_all(&|el: &Element| el.tag() == "a").len(), 1);
    }

    #[test]
    fn empty_detection() {
        assert!(Node::empty().is_empty());
        assert!(Node::Fragment(vec![Node::text(""), Node::empty()]).is_empty());
        assert!(!Node::from(Element::new("br")).is_empty());
    }
}
