#![forbid(unsafe_code)]

//! Static site content.
//!
//! Everything here is compile-time data; pages and chrome render it.

pub mod concepts;
pub mod faq;
pub mod home;
pub mod hosting;
pub mod site;

pub use concepts::{ConceptKey, concept};
pub use faq::{FaqKey, faq};
