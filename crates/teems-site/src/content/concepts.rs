#![forbid(unsafe_code)]

//! Key web concepts shown in the hosting comparison's detail overlay.

use teems_widgets::ContentKey;
use teems_widgets::overlay::DetailRecord;

/// Concept identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConceptKey {
    Ssg,
    Ssr,
    Isr,
    Cdn,
    Seo,
}

impl ContentKey for ConceptKey {
    const ALL: &'static [Self] = &[Self::Ssg, Self::Ssr, Self::Isr, Self::Cdn, Self::Seo];

    fn slug(self) -> &'static str {
        match self {
            Self::Ssg => "ssg",
            Self::Ssr => "ssr",
            Self::Isr => "isr",
            Self::Cdn => "cdn",
            Self::Seo => "seo",
        }
    }
}

/// Record for `key`.
#[must_use]
pub fn concept(key: ConceptKey) -> &'static DetailRecord {
    match key {
        ConceptKey::Ssg => &SSG,
        ConceptKey::Ssr => &SSR,
        ConceptKey::Isr => &ISR,
        ConceptKey::Cdn => &CDN,
        ConceptKey::Seo => &SEO,
    }
}

static SSG: DetailRecord = DetailRecord {
    title: "Static Site Generation",
    abbrev: "SSG",
    summary: "Pre-built pages for fast delivery",
    details: "Pages are generated at build time and served as static HTML files. No server \
              processing needed for each request\u{2014}just instant delivery from the CDN.",
    benefits: &[
        "Fastest possible page loads",
        "Maximum security (no server vulnerabilities)",
        "Lowest hosting costs",
        "Perfect for SEO",
    ],
    use_cases: &[
        "Documentation sites",
        "Marketing pages",
        "Blogs with infrequent updates",
        "Portfolio websites",
    ],
};

static SSR: DetailRecord = DetailRecord {
    title: "Server-Side Rendering",
    abbrev: "SSR",
    summary: "Dynamic pages on each request",
    details: "Every page request triggers server-side code that can fetch fresh data, \
              personalize content, and render a complete HTML page before sending it to the \
              browser.",
    benefits: &[
        "Always fresh, up-to-date content",
        "Personalized user experiences",
        "Database integration",
        "Real-time data display",
    ],
    use_cases: &[
        "User dashboards",
        "E-commerce product pages",
        "Social feeds",
        "Search results pages",
    ],
};

static ISR: DetailRecord = DetailRecord {
    title: "Incremental Static Regeneration",
    abbrev: "ISR",
    summary: "Static speed with dynamic freshness",
    details: "Pages are statically generated but can automatically rebuild in the background \
              when data changes or after a time interval. Users always get fast static pages, \
              but content stays fresh.",
    benefits: &[
        "Static performance",
        "Content freshness without full rebuilds",
        "Reduced server load",
        "Scalable for large sites",
    ],
    use_cases: &[
        "News sites",
        "Product catalogs",
        "Content platforms",
        "Research publications",
    ],
};

static CDN: DetailRecord = DetailRecord {
    title: "Content Delivery Network",
    abbrev: "CDN",
    summary: "Global distribution for speed",
    details: "CDNs cache your content on servers around the world. When someone visits your \
              site, they're served from the nearest location\u{2014}whether that's Minneapolis, \
              Beijing, or Berlin.",
    benefits: &[
        "Faster load times globally",
        "Reduced latency for international users",
        "Better uptime and reliability",
        "Protection against traffic spikes",
    ],
    use_cases: &[
        "Sites with international audiences",
        "Media-heavy content",
        "High-traffic applications",
        "Global research collaborations",
    ],
};

static SEO: DetailRecord = DetailRecord {
    title: "Search Engine Optimization",
    abbrev: "SEO",
    summary: "Being found by search engines",
    details: "SEO determines how easily search engines discover and rank your website. For \
              academic sites, this directly impacts research visibility, collaboration \
              opportunities, and citation potential.",
    benefits: &[
        "Higher search rankings",
        "More organic traffic",
        "Better research discoverability",
        "Increased collaboration opportunities",
    ],
    use_cases: &[
        "Research group websites",
        "Publication archives",
        "Academic portfolios",
        "Grant-funded project sites",
    ],
};
