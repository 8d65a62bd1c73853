#![forbid(unsafe_code)]

//! Site-wide chrome: navigation, header links, footer, and the notice.

use teems_widgets::gate::GateNotice;
use teems_widgets::nav::NavEntry;

pub const SITE_TITLE: &str = "NatCap TEEMs | The Earth-Economy Modelers";
pub const SITE_ICON: &str = "/images/University_of_Minnesota_Logo.svg.png";
pub const STYLESHEET: &str = "/site.css";
pub const CLIENT_SCRIPT: &str = "/pkg/teems_web.js";

/// Header navigation, in display order.
pub static NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { label: "Home", path: "/" },
    NavEntry { label: "People", path: "/people" },
    NavEntry { label: "Models", path: "/models" },
    NavEntry { label: "Hosting", path: "/hosting-comparison" },
];

pub const UNIVERSITY_NAME: &str = "UNIVERSITY OF MINNESOTA";
pub const UNIVERSITY_URL: &str = "https://umn.edu";

/// Top-bar utility links.
pub static UTILITY_LINKS: &[(&str, &str)] = &[
    ("One Stop", "https://onestop.umn.edu"),
    ("MyU", "https://myu.umn.edu"),
];

pub const SEARCH_PLACEHOLDER: &str = "Search umn.edu";
pub const DEPARTMENT_LABEL: &str = "Department of Applied Economics \u{2197}";
pub const DEPARTMENT_URL: &str = "https://apec.umn.edu";

pub const CONTACT_EMAIL: &str = "natcapteems@umn.edu";
pub static ADDRESS_LINES: &[&str] = &[
    "337 Ruttan Hall",
    "1994 Buford Avenue",
    "Saint Paul, MN 55108",
];
pub const GIFT_URL: &str = "https://give.umn.edu";
pub const LINKEDIN_URL: &str = "https://linkedin.com";
pub const PRIVACY_URL: &str = "https://privacy.umn.edu";
pub const ACCESSIBILITY_URL: &str = "https://accessibility.umn.edu/report-issue";
pub const EQUAL_OPPORTUNITY: &str =
    "The University of Minnesota is an equal opportunity educator and employer.";

/// The one-time disclaimer.
pub const NOTICE: GateNotice = GateNotice {
    title: "Important Notice",
    body: &[
        "This is not associated with the University of Minnesota currently in any way.",
        "This is a mock test site for proof of concept purposes only.",
    ],
    button_label: "I Understand",
};
