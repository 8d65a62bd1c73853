#![forbid(unsafe_code)]

//! Home page copy.

pub const HERO_BADGE: &str = "Natural Capital Project";
pub const HERO_TITLE: &str = "NatCap TEEMs";
pub const HERO_SUBTITLE: &str = "The Earth-Economy Modelers";
pub const HERO_TAGLINE: &str = "Pioneering the integration of ecological, climate, and economic \
    data to inform decision-making for sustainable development on a livable planet.";
pub const HERO_IMAGE: &str = "/images/hero-campus.jpg";
pub const HERO_IMAGE_ALT: &str = "Aerial view of University of Minnesota St. Paul campus with \
    agricultural research fields and greenhouses";

pub const MISSION_EYEBROW: &str = "Our Mission";
pub const MISSION_TITLE: &str = "Understanding the Integrated Earth-Economy System";

pub static MISSION_PARAGRAPHS: &[&str] = &[
    "NatCap TEEMs (Natural Capital Project: The Earth-Economy Modelers) aims to improve our \
     understanding of the integrated earth-economy system and to inform decision-making for \
     sustainable development on a livable planet.",
    "Economic activity is the dominant force shaping Earth systems in the 21st century. Over the \
     past two centuries, economic expansion has led to unprecedented advancements in standards \
     of living and unintended consequences for the environment, including climate change and \
     loss of biodiversity.",
    "TEEMs uses advanced modeling and foundational expertise to align economic systems with \
     stewardship of earth systems to ensure sustainable prosperity.",
];

pub const MISSION_CALLOUT: &str = "NatCap TEEMs integrates ecological, climate, and economic data \
    in Earth-Economy models to inform decision-making for sustainable development.";

/// A mission feature card.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: &[Feature] = &[
    Feature {
        icon: "globe",
        title: "Earth Systems Integration",
        description: "Advanced modeling that connects ecological and climate systems with \
                      economic activity.",
    },
    Feature {
        icon: "trending-up",
        title: "Economic Analysis",
        description: "Data-driven insights on how economic decisions impact our planet's \
                      natural capital.",
    },
    Feature {
        icon: "leaf",
        title: "Sustainable Development",
        description: "Research enabling policymakers to balance prosperity with environmental \
                      stewardship.",
    },
    Feature {
        icon: "users",
        title: "Global Partnership",
        description: "Collaborating with world-leading institutions to pioneer earth-economy \
                      solutions.",
    },
];

pub const COLLABORATORS_EYEBROW: &str = "Our Network";
pub const COLLABORATORS_TITLE: &str = "Meet Our Collaborators";
pub const COLLABORATORS_INTRO: &str = "NatCap TEEMs is part of the Natural Capital Project, a \
    global partnership pioneering science, technology, and partnerships that enable people and \
    nature to thrive.";
pub const NATCAP_URL: &str = "https://naturalcapitalproject.stanford.edu";

/// A partner institution.
#[derive(Debug, Clone, Copy)]
pub struct Collaborator {
    pub name: &'static str,
    pub full_name: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
}

pub static COLLABORATORS: &[Collaborator] = &[
    Collaborator {
        name: "WWF",
        full_name: "World Wildlife Fund",
        url: "https://www.worldwildlife.org",
        logo: "/images/wwf.png",
    },
    Collaborator {
        name: "CAS",
        full_name: "Chinese Academy of Sciences",
        url: "https://english.cas.cn",
        logo: "/images/chinese-academy-of-sci.png",
    },
    Collaborator {
        name: "Stanford",
        full_name: "Stanford University",
        url: "https://www.stanford.edu",
        logo: "/images/stanford.png",
    },
    Collaborator {
        name: "TNC",
        full_name: "The Nature Conservancy",
        url: "https://www.nature.org",
        logo: "/images/thenatureconvervacy.png",
    },
    Collaborator {
        name: "KVA",
        full_name: "Royal Swedish Academy",
        url: "https://www.kva.se",
        logo: "/images/kvawhite-0.png",
    },
    Collaborator {
        name: "SRC",
        full_name: "Stockholm Resilience Centre",
        url: "https://www.stockholmresilience.org",
        logo: "/images/srcwhite.png",
    },
];

/// A call-to-action card linking to an internal page.
#[derive(Debug, Clone, Copy)]
pub struct CtaCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub link_label: &'static str,
    pub path: &'static str,
}

pub static CTA_CARDS: &[CtaCard] = &[
    CtaCard {
        icon: "users",
        title: "Who are we?",
        body: "Meet the researchers and scientists behind our earth-economy models.",
        link_label: "Meet the team",
        path: "/people",
    },
    CtaCard {
        icon: "book-open",
        title: "Want to learn more?",
        body: "Explore our cutting-edge earth-economy models and research.",
        link_label: "Check out our models",
        path: "/models",
    },
    CtaCard {
        icon: "server",
        title: "Hosting Options",
        body: "Compare GitHub Pages vs Vercel for hosting this website.",
        link_label: "View comparison",
        path: "/hosting-comparison",
    },
];
