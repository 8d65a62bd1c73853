#![forbid(unsafe_code)]

//! The NatCap TEEMs site.
//!
//! - [`content`]: compile-time page copy and data tables.
//! - [`pages`] and [`chrome`]: markup for each route and the shared layout.
//! - [`app`]: the [`SiteModel`](app::SiteModel) driven by the runtime.
//! - [`action`]: `data-action` strings to messages.
//! - [`seo`] and [`export`]: static output for a file host.
//! - [`cli`]: exporter options.

pub mod action;
pub mod app;
pub mod chrome;
pub mod cli;
pub mod content;
pub mod export;
pub mod pages;
pub mod seo;

pub use app::{Msg, SiteModel};
pub use pages::PageId;
