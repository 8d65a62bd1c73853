#![forbid(unsafe_code)]

//! Render: markup tree, escaping, and the HTML document shell.

pub mod document;
pub mod escape;
pub mod markup;

pub use document::Document;
pub use markup::{Element, Node};
