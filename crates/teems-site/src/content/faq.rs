#![forbid(unsafe_code)]

//! "Questions You Might Have" entries for the hosting comparison.

use teems_widgets::ContentKey;
use teems_widgets::accordion::FaqRecord;

/// Question identifiers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FaqKey {
    JustVercel,
    Quarto,
    Hybrid,
    Learning,
    Migration,
    Maintenance,
    Cms,
}

impl ContentKey for FaqKey {
    const ALL: &'static [Self] = &[
        Self::JustVercel,
        Self::Quarto,
        Self::Hybrid,
        Self::Learning,
        Self::Migration,
        Self::Maintenance,
        Self::Cms,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::JustVercel => "justVercel",
            Self::Quarto => "quarto",
            Self::Hybrid => "hybrid",
            Self::Learning => "learning",
            Self::Migration => "migration",
            Self::Maintenance => "maintenance",
            Self::Cms => "cms",
        }
    }
}

/// Record for `key`.
#[must_use]
pub fn faq(key: FaqKey) -> &'static FaqRecord {
    match key {
        FaqKey::JustVercel => &JUST_VERCEL,
        FaqKey::Quarto => &QUARTO,
        FaqKey::Hybrid => &HYBRID,
        FaqKey::Learning => &LEARNING,
        FaqKey::Migration => &MIGRATION,
        FaqKey::Maintenance => &MAINTENANCE,
        FaqKey::Cms => &CMS,
    }
}

static JUST_VERCEL: FaqRecord = FaqRecord {
    question: "Can we just deploy our existing Quarto site to Vercel?",
    short_answer: "Yes! This is the simplest option\u{2014}no code changes required.",
    details: "You don't need to adopt Next.js or any new framework. Quarto generates static \
              HTML, and Vercel can host static sites directly. The entire process takes under \
              10 minutes: connect your GitHub repo to Vercel, and it automatically deploys \
              whenever you push changes. You keep your exact same workflow, but gain Vercel's \
              global CDN, automatic HTTPS, and preview deployments.",
    considerations: &[
        "Setup time: under 10 minutes",
        "No code changes to your Quarto project",
        "Automatic deployments on every git push",
        "Instant global CDN, SSL, and preview URLs for free",
        "Can always add Next.js features later if needed",
    ],
};

static QUARTO: FaqRecord = FaqRecord {
    question: "We already use Quarto. Do we have to give that up?",
    short_answer: "No. Quarto works great on its own or alongside modern frameworks.",
    details: "Quarto excels at rendering Markdown, R Markdown, and Jupyter notebooks into \
              polished HTML documents. Many teams use Quarto for research documentation, \
              publications, and technical reports\u{2014}and there's no reason to stop. You can \
              deploy Quarto directly to Vercel, or use a hybrid approach where Quarto handles \
              content while a framework like Next.js provides the site shell and interactive \
              features.",
    considerations: &[
        "Quarto outputs static HTML that can be served from any hosting platform",
        "You can host Quarto pages alongside Next.js pages on the same domain",
        "Team members can continue using familiar .qmd or .Rmd workflows",
        "No need to retrain everyone on React or TypeScript",
    ],
};

static HYBRID: FaqRecord = FaqRecord {
    question: "How would a hybrid Quarto + Next.js site actually work?",
    short_answer: "Quarto pages live in a subdirectory; the main site wraps around them.",
    details: "In a hybrid setup, you'd have your main Next.js site handling the homepage, \
              navigation, team pages, and any interactive features. Quarto-generated content \
              would live in a subdirectory (like /docs or /research) and be served as static \
              HTML. Users experience one cohesive site, but content authors can work in \
              whichever tool fits their needs.",
    considerations: &[
        "Example structure: yoursite.edu (Next.js) + yoursite.edu/docs (Quarto)",
        "Shared navigation can link between both seamlessly",
        "Quarto pages can be rebuilt independently without touching the main site",
        "Both can be deployed together in a single CI/CD pipeline",
    ],
};

static LEARNING: FaqRecord = FaqRecord {
    question: "Does the team need to learn React or TypeScript?",
    short_answer: "Not necessarily. It depends on who maintains what.",
    details: "If the main site structure is built once and rarely changes, team members can \
              focus on adding content through Quarto without touching React code. However, if \
              you want to make frequent changes to the site's interactive features, someone \
              would need basic React knowledge. Many teams designate one 'web lead' who \
              handles the framework while others contribute content.",
    considerations: &[
        "Content contributors can stick to Markdown/Quarto",
        "Site structure changes require React knowledge",
        "One technical team member can handle framework updates",
        "Many universities have web services teams who can assist",
    ],
};

static MIGRATION: FaqRecord = FaqRecord {
    question: "What would migrating from a Quarto-only site involve?",
    short_answer: "Your existing Quarto content stays intact; you add a framework layer around it.",
    details: "Migration doesn't mean rewriting your Quarto documents. Instead, you'd create a \
              new Next.js project that becomes the 'shell' of your site\u{2014}handling \
              navigation, styling, and any new interactive pages. Your existing Quarto output \
              gets moved into a subdirectory and linked from the main navigation. It's \
              additive, not replacement.",
    considerations: &[
        "Existing Quarto .qmd files remain unchanged",
        "You gain: modern navigation, better mobile experience, interactive features",
        "Timeline: basic hybrid setup can be done in a few days",
        "Can be done incrementally\u{2014}start small, expand over time",
    ],
};

static MAINTENANCE: FaqRecord = FaqRecord {
    question: "Which approach is easier to maintain long-term?",
    short_answer: "It depends on your team's workflow and future needs.",
    details: "A Quarto-only site is simpler if all you need is rendered documents. A hybrid \
              approach adds some complexity but provides flexibility for growth. Consider: \
              Will you need user authentication? Interactive model demos? Dynamic content? If \
              yes, a hybrid approach now saves painful migrations later. If no, Quarto-only \
              may be sufficient.",
    considerations: &[
        "Quarto-only: Simpler, but limited to static content",
        "Hybrid: More setup, but room to grow",
        "Modern frameworks have excellent documentation and community support",
        "The 'right' choice depends on your 3-5 year roadmap",
    ],
};

static CMS: FaqRecord = FaqRecord {
    question: "What if we want a content management system (CMS) later?",
    short_answer: "Modern platforms like Vercel integrate natively with popular CMS options.",
    details: "If you ever want non-technical team members to edit content through a visual \
              interface (instead of code), Vercel offers native integrations with headless CMS \
              platforms. These let you manage content in a user-friendly dashboard while the \
              site stays fast and developer-friendly.",
    considerations: &[
        "Contentful \u{2014} Enterprise-grade, great for structured content",
        "Sanity \u{2014} Flexible, real-time collaboration features",
        "WordPress (headless) \u{2014} Familiar interface, can use existing WP skills",
        "Strapi \u{2014} Open-source, self-hosted option",
        "No commitment required now\u{2014}can add a CMS anytime",
    ],
};
