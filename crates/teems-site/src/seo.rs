#![forbid(unsafe_code)]

//! `sitemap.xml` and `robots.txt`.

use std::fmt::Write as _;

use teems_render::escape::escape_text_into;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::pages::PageId;

/// Public origin of the deployed site.
pub const DEFAULT_BASE_URL: &str = "https://umn-natcap-tee-ms-mock-site.vercel.app";

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// One `<url>` of the sitemap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitemapEntry {
    pub page: PageId,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Indexed pages.
pub static SITEMAP: &[SitemapEntry] = &[
    SitemapEntry {
        page: PageId::Home,
        change_frequency: ChangeFrequency::Monthly,
        priority: 1.0,
    },
    SitemapEntry {
        page: PageId::People,
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
    },
    SitemapEntry {
        page: PageId::Models,
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
    },
    SitemapEntry {
        page: PageId::HostingComparison,
        change_frequency: ChangeFrequency::Yearly,
        priority: 0.5,
    },
];

/// Absolute URL of `page` under `base_url`.
///
/// The home page is the bare origin.
#[must_use]
pub fn page_url(base_url: &str, page: PageId) -> String {
    let base = base_url.trim_end_matches('/');
    match page {
        PageId::Home => base.to_string(),
        other => format!("{base}{}", other.path()),
    }
}

/// Render the sitemap with every entry stamped `last_modified`.
pub fn sitemap_xml(
    base_url: &str,
    last_modified: OffsetDateTime,
) -> Result<String, time::error::Format> {
    let lastmod = last_modified.format(&Rfc3339)?;
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in SITEMAP {
        out.push_str("<url>\n<loc>");
        escape_text_into(&page_url(base_url, entry.page), &mut out);
        let _ = write!(
            out,
            "</loc>\n<lastmod>{lastmod}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{}</priority>\n</url>\n",
            entry.change_frequency.as_str(),
            entry.priority,
        );
    }
    out.push_str("</urlset>\n");
    Ok(out)
}

/// Allow every crawler and point at the sitemap.
#[must_use]
pub fn robots_txt(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("User-Agent: *\nAllow: /\n\nSitemap: {base}/sitemap.xml\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build_time() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_760_000_000).unwrap()
    }

    #[test]
    fn sitemap_lists_every_route_with_frequency_and_priority() {
        let xml = sitemap_xml(DEFAULT_BASE_URL, build_time()).unwrap();
        assert_eq!(xml.matches("<url>").count(), PageId::ROUTES.len());
        assert!(xml.contains(
            "<loc>https://umn-natcap-tee-ms-mock-site.vercel.app</loc>\n\
             <lastmod>2025-10-09T08:53:20Z</lastmod>\n\
             <changefreq>monthly</changefreq>\n<priority>1</priority>"
        ));
        assert!(xml.contains("/hosting-comparison</loc>"));
        assert!(xml.contains("<changefreq>yearly</changefreq>\n<priority>0.5</priority>"));
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        assert_eq!(
            page_url("https://example.org/", PageId::People),
            "https://example.org/people"
        );
        assert_eq!(page_url("https://example.org/", PageId::Home), "https://example.org");
    }

    #[test]
    fn loc_is_escaped() {
        let xml = sitemap_xml("https://example.org/?a=1&b=2", build_time()).unwrap();
        assert!(xml.contains("?a=1&amp;b=2/people"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        assert_eq!(
            robots_txt("https://example.org/"),
            "User-Agent: *\nAllow: /\n\nSitemap: https://example.org/sitemap.xml\n"
        );
    }
}
