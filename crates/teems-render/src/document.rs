#![forbid(unsafe_code)]

//! Full HTML document shell.
//!
//! Wraps a rendered body with the `<head>` metadata every page shares:
//! charset, viewport, title, description, icons, canonical URL, and the
//! stylesheet/script references the host bundle needs.

use crate::escape::{escape_attr_into, escape_text_into};
use crate::markup::Node;

/// Per-page head metadata plus the body tree.
#[derive(Debug, Clone)]
pub struct Document {
    /// `<html lang>`.
    pub lang: &'static str,
    /// `<title>`.
    pub title: String,
    /// `<meta name="description">`.
    pub description: String,
    /// `<link rel="canonical">`, when known.
    pub canonical_url: Option<String>,
    /// Favicon / touch icon path.
    pub icon: Option<&'static str>,
    /// Stylesheet hrefs, in order.
    pub stylesheets: Vec<&'static str>,
    /// Module script srcs, appended at the end of `<body>`.
    pub scripts: Vec<&'static str>,
    /// Body content.
    pub body: Node,
}

impl Document {
    /// Create a document with the given title and body and no extras.
    pub fn new(title: impl Into<String>, body: Node) -> Self {
        Self {
            lang: "en",
            title: title.into(),
            description: String::new(),
            canonical_url: None,
            icon: None,
            stylesheets: Vec::new(),
            scripts: Vec::new(),
            body,
        }
    }

    /// Set the meta description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the canonical URL.
    #[must_use]
    pub fn canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    /// Set the icon path.
    #[must_use]
    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Add a stylesheet.
    #[must_use]
    pub fn stylesheet(mut self, href: &'static str) -> Self {
        self.stylesheets.push(href);
        self
    }

    /// Add a module script.
    #[must_use]
    pub fn script(mut self, src: &'static str) -> Self {
        self.scripts.push(src);
        self
    }

    /// Render the complete document, starting with the doctype.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(16 * 1024);
        out.push_str("<!DOCTYPE html>\n<html lang=\"");
        escape_attr_into(self.lang, &mut out);
        out.push_str("\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str("<title>");
        escape_text_into(&self.title, &mut out);
        out.push_str("</title>\n");
        if !self.description.is_empty() {
            out.push_str("<meta name=\"description\" content=\"");
            escape_attr_into(&self.description, &mut out);
            out.push_str("\">\n");
        }
        if let Some(url) = &self.canonical_url {
            out.push_str("<link rel=\"canonical\" href=\"");
            escape_attr_into(url, &mut out);
            out.push_str("\">\n");
        }
        if let Some(icon) = self.icon {
            for rel in ["icon", "apple-touch-icon", "shortcut icon"] {
                out.push_str("<link rel=\"");
                out.push_str(rel);
                out.push_str("\" href=\"");
                escape_attr_into(icon, &mut out);
                out.push_str("\">\n");
            }
        }
        for href in &self.stylesheets {
            out.push_str("<link rel=\"stylesheet\" href=\"");
            escape_attr_into(href, &mut out);
            out.push_str("\">\n");
        }
        out.push_str("</head>\n<body>\n");
        self.body.render_into(&mut out);
        for src in &self.scripts {
            out.push_str("\n<script type=\"module\" src=\"");
            escape_attr_into(src, &mut out);
            out.push_str("\"></script>");
        }
        out.push_str("\n</body>\n</html>\n");
        out
    }
}
