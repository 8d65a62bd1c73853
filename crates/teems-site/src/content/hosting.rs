#![forbid(unsafe_code)]

//! Static data for the hosting comparison page.

use teems_widgets::comparison::CellValue::{Flag, Text};
use teems_widgets::comparison::{CellValue, ComparisonCategory, ComparisonRow};

/// Tier column headers, GitHub Pages first.
pub const TIER_COLUMNS: &[&str] = &["Free", "Team ($4/mo)", "Hobby (Free)", "Pro ($20/mo)"];

const YES: [CellValue; 4] = [Flag(true); 4];
const VERCEL_ONLY: [CellValue; 4] =
    [Flag(false), Flag(false), Flag(true), Flag(true)];
const PRO_ONLY: [CellValue; 4] =
    [Flag(false), Flag(false), Flag(false), Flag(true)];

/// Four-tier feature comparison.
pub static CATEGORIES: &[ComparisonCategory] = &[
    ComparisonCategory {
        name: "Cost & Limits",
        rows: &[
            ComparisonRow {
                feature: "Price",
                values: &[Text("Free"), Text("$4/user/mo"), Text("Free"), Text("$20/user/mo")],
            },
            ComparisonRow {
                feature: "Bandwidth",
                values: &[
                    Text("100 GB/mo"),
                    Text("100 GB/mo"),
                    Text("100 GB/mo"),
                    Text("1 TB/mo"),
                ],
            },
            ComparisonRow {
                feature: "Build Minutes",
                values: &[
                    Text("2,000/mo"),
                    Text("3,000/mo"),
                    Text("6,000/mo"),
                    Text("24,000/mo"),
                ],
            },
            ComparisonRow {
                feature: "Team Members",
                values: &[Text("Unlimited"), Text("Unlimited"), Text("1"), Text("Unlimited")],
            },
            ComparisonRow {
                feature: "Concurrent Builds",
                values: &[Text("1"), Text("20"), Text("1"), Text("12")],
            },
        ],
    },
    ComparisonCategory {
        name: "Rendering Capabilities",
        rows: &[
            ComparisonRow { feature: "Static Generation (SSG)", values: &YES },
            ComparisonRow { feature: "Server-Side Rendering (SSR)", values: &VERCEL_ONLY },
            ComparisonRow { feature: "Incremental Static Regeneration", values: &VERCEL_ONLY },
            ComparisonRow { feature: "API Routes / Serverless", values: &VERCEL_ONLY },
            ComparisonRow { feature: "Edge Functions", values: &VERCEL_ONLY },
        ],
    },
    ComparisonCategory {
        name: "Developer Experience",
        rows: &[
            ComparisonRow { feature: "Zero-Config Deployment", values: &VERCEL_ONLY },
            ComparisonRow { feature: "Preview Deployments", values: &VERCEL_ONLY },
            ComparisonRow { feature: "Instant Rollbacks", values: &VERCEL_ONLY },
            ComparisonRow { feature: "Built-in Analytics", values: &VERCEL_ONLY },
            ComparisonRow {
                feature: "Image Optimization",
                values: &[Text("Manual"), Text("Manual"), Text("Automatic"), Text("Automatic")],
            },
            ComparisonRow { feature: "Password Protection", values: &PRO_ONLY },
        ],
    },
    ComparisonCategory {
        name: "Infrastructure",
        rows: &[
            ComparisonRow {
                feature: "Global CDN",
                values: &[
                    Text("US-focused"),
                    Text("US-focused"),
                    Text("300+ worldwide"),
                    Text("300+ worldwide"),
                ],
            },
            ComparisonRow { feature: "Custom Domains", values: &YES },
            ComparisonRow { feature: "SSL Certificates", values: &YES },
            ComparisonRow { feature: "DDoS Protection", values: &YES },
            ComparisonRow { feature: "Firewall Rules", values: &PRO_ONLY },
        ],
    },
];

/// Summary card for one platform.
#[derive(Debug, Clone, Copy)]
pub struct PlatformCard {
    pub name: &'static str,
    pub vendor: &'static str,
    pub blurb: &'static str,
    pub free_label: &'static str,
    pub paid_tier: &'static str,
}

pub static OVERVIEW: &[PlatformCard] = &[
    PlatformCard {
        name: "GitHub Pages",
        vendor: "by Microsoft",
        blurb: "Simple static hosting directly from your GitHub repository. Best for \
                straightforward sites without dynamic features.",
        free_label: "Free",
        paid_tier: "Pro tier: $4/user/month (GitHub Team)",
    },
    PlatformCard {
        name: "Vercel",
        vendor: "Next.js creators",
        blurb: "Full-featured platform optimized for modern frameworks. Includes serverless \
                functions, edge computing, and more.",
        free_label: "Free (Hobby tier)",
        paid_tier: "Pro tier: $20/user/month",
    },
];

/// A titled paragraph.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub title: &'static str,
    pub body: &'static str,
}

pub static JOURNEY: &[Step] = &[
    Step {
        title: "You Write Code",
        body: "Developers create the website files on their computer using code, images, and \
               content.",
    },
    Step {
        title: "Push to Host",
        body: "The code is uploaded to a hosting platform (like GitHub or Vercel) which stores \
               it on powerful servers.",
    },
    Step {
        title: "Build & Distribute",
        body: "The host builds your site and copies it to servers around the world (the \
               \"edge\") for fast access.",
    },
    Step {
        title: "Visitor Requests",
        body: "When someone types your URL, their browser asks for the website from the \
               nearest server.",
    },
    Step {
        title: "Page Delivered",
        body: "The server sends back the website files, and the browser displays the page. \
               Done!",
    },
];

/// A "Why Does This Matter?" card.
#[derive(Debug, Clone, Copy)]
pub struct ReasonCard {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

pub static REASONS: &[ReasonCard] = &[
    ReasonCard {
        title: "Speed Through Caching",
        paragraphs: &[
            "When your site is \"cached\" on servers worldwide, visitors get pre-built pages \
             instantly\u{2014}like picking up a ready-made meal instead of waiting for it to be \
             cooked.",
            "Without caching, every visitor's request would require the server to rebuild the \
             page from scratch. For a collaborator in Beijing, this could mean waiting several \
             seconds instead of milliseconds.",
        ],
        bullets: &[],
    },
    ReasonCard {
        title: "Server-Side Capabilities",
        paragraphs: &[
            "Server-side rendering (SSR) lets you run code on the server before sending pages \
             to users. This enables powerful features that static sites can't offer:",
        ],
        bullets: &[
            "Personalized content based on who's logged in",
            "Real-time data from databases or APIs",
            "Secure operations that can't be exposed to browsers",
        ],
    },
    ReasonCard {
        title: "Hosting or Linking Models",
        paragraphs: &[
            "If NatCap TEEMs wants to showcase earth-economy models, a modern hosting platform \
             offers flexibility:",
        ],
        bullets: &[
            "Embed interactive demos directly on your site",
            "Link to external models hosted on dedicated compute servers",
            "API routes can securely connect your site to model backends",
        ],
    },
    ReasonCard {
        title: "Authentication & Access Control",
        paragraphs: &[
            "Need to restrict access to certain content or charge for model access? \
             Server-side platforms enable:",
        ],
        bullets: &[
            "User authentication \u{2014} login systems for collaborators or subscribers",
            "Gated content \u{2014} restrict model access to authorized users",
            "Payment integration \u{2014} if you ever need to sell access or accept donations",
        ],
    },
];

pub const BOTTOM_LINE: &str = "A static-only host like GitHub Pages works great for simple \
    informational sites. But if you anticipate needing user accounts, model integrations, \
    real-time data, or e-commerce features, a platform with server-side capabilities gives you \
    room to grow.";

pub static PROJECT_PROFILE: &[&str] = &[
    "Research group with international collaborators",
    "Image-heavy content (research visualizations)",
    "Academic credibility and professional appearance",
    "Potential future: publications database, model demos",
];

/// `(label, detail)` pairs.
pub static PLATFORM_BENEFITS: &[(&str, &str)] = &[
    ("Global CDN:", "Fast for international collaborators"),
    ("Auto image optimization:", "Important for image-heavy sites"),
    ("ISR support:", "Update content without full rebuilds"),
    ("API routes:", "Future-proof for interactive features"),
];

pub static THINGS_TO_CONSIDER: &[&str] = &[
    "UMN IT policies may have specific hosting requirements",
    "Free tier limits are generous but monitor usage",
    "Custom domain setup works with UMN subdomains",
    "Both platforms have excellent uptime guarantees",
];

pub const QUARTO_BLURB: &str = "Quarto is an open-source scientific publishing system that \
    lets you write content in Markdown, R Markdown, or Jupyter notebooks and render it to HTML, \
    PDF, or other formats. It's popular in academic and research settings because it \
    integrates code, data, and narrative seamlessly.";

pub static DEPLOY_STEPS: &[Step] = &[
    Step {
        title: "Build your Quarto site",
        body: "Run the Quarto render command to generate your static HTML files. This creates a \
               directory (usually _site or _book) containing your website.",
    },
    Step {
        title: "Configure the output directory",
        body: "Create a vercel.json file in your project root to tell Vercel how to build and \
               where to find your files.",
    },
    Step {
        title: "Deploy to Vercel",
        body: "You have three options to deploy your Quarto site:",
    },
];

pub const VERCEL_JSON: &str = "{\n  \"buildCommand\": \"quarto render\",\n  \"outputDirectory\": \"_site\"\n}";

/// `(name, description, tag)` for each deploy option.
pub static DEPLOY_OPTIONS: &[(&str, &str, &str)] = &[
    (
        "Git Integration",
        "Push to GitHub/GitLab/Bitbucket and connect the repo in Vercel dashboard",
        "Recommended",
    ),
    ("Vercel CLI", "Run vercel --prod from your project directory", "Quick deploys"),
    (
        "Drag & Drop",
        "Just drag your built _site folder to Vercel's dashboard",
        "One-time deploys",
    ),
];

pub static IMMEDIATE_GAINS: &[&str] = &[
    "Global CDN",
    "Automatic HTTPS",
    "Preview URLs",
    "Auto deploys on push",
];

pub const VIDEO_URL: &str = "https://www.youtube.com/embed/hAuyNf0Uk-w?start=379";

/// An external link card.
#[derive(Debug, Clone, Copy)]
pub struct ExternalLink {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub static ALTERNATIVES: &[ExternalLink] = &[
    ExternalLink {
        name: "Netlify",
        url: "https://netlify.com",
        description: "Similar to Vercel with excellent CI/CD",
    },
    ExternalLink {
        name: "Cloudflare Pages",
        url: "https://pages.cloudflare.com",
        description: "Fast global edge network, generous free tier",
    },
    ExternalLink {
        name: "AWS Amplify",
        url: "https://aws.amazon.com/amplify",
        description: "Full AWS integration, enterprise-grade",
    },
    ExternalLink {
        name: "Railway",
        url: "https://railway.app",
        description: "Simple deployment with database support",
    },
];

pub static DOCS: &[ExternalLink] = &[
    ExternalLink {
        name: "GitHub Pages Docs",
        url: "https://docs.github.com/pages",
        description: "",
    },
    ExternalLink {
        name: "Vercel Docs",
        url: "https://vercel.com/docs",
        description: "",
    },
];
