#![forbid(unsafe_code)]

//! Pages of the site.
//!
//! Each page renders the content of `<main>`; the shared header, footer and
//! notice come from [`crate::chrome`].

pub mod home;
pub mod hosting;
pub mod placeholder;

use crate::content::site::SITE_TITLE;

const ROOT_TITLE: &str = "NatCap TEEMs | The Earth-Economy Modelers | University of Minnesota";
const ROOT_DESCRIPTION: &str = "Natural Capital Project: The Earth-Economy Modelers aims to \
    improve our understanding of the integrated earth-economy system and inform decision-making \
    for sustainable development.";

/// Drop trailing slashes from a location path.
///
/// Static hosts serve `people/index.html` at `/people/`; this maps that back
/// to `/people`. The root path is returned as `/`.
#[must_use]
pub fn canonical_path(path: &str) -> &str {
    if path.len() <= 1 {
        return path;
    }
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Identifies which page a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    /// Hero, mission, collaborators and call-to-action cards.
    Home,
    /// Team placeholder.
    People,
    /// Models placeholder.
    Models,
    /// GitHub Pages vs Vercel reference.
    HostingComparison,
    /// Any unknown path.
    NotFound,
}

impl PageId {
    /// Every routable page, in navigation order.
    pub const ROUTES: &[PageId] = &[
        Self::Home,
        Self::People,
        Self::Models,
        Self::HostingComparison,
    ];

    /// Resolve a location path. Matching is exact.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self::ROUTES
            .iter()
            .copied()
            .find(|page| page.path() == path)
            .unwrap_or(Self::NotFound)
    }

    /// Canonical path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::People => "/people",
            Self::Models => "/models",
            Self::HostingComparison => "/hosting-comparison",
            Self::NotFound => "/404",
        }
    }

    /// Document title.
    #[must_use]
    pub fn title(self) -> String {
        match self {
            Self::Home | Self::HostingComparison => ROOT_TITLE.to_string(),
            Self::People => "People | NatCap TEEMs | University of Minnesota".to_string(),
            Self::Models => "Models | NatCap TEEMs | University of Minnesota".to_string(),
            Self::NotFound => format!("Page Not Found | {SITE_TITLE}"),
        }
    }

    /// Meta description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::People => {
                "Meet the researchers and scientists behind NatCap TEEMs earth-economy models."
            }
            Self::Models => "Explore our cutting-edge earth-economy models and research.",
            Self::Home | Self::HostingComparison | Self::NotFound => ROOT_DESCRIPTION,
        }
    }
}
