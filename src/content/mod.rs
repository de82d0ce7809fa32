//! Static content tables for the storefront.
//!
//! Every table is defined once and never mutated. Records are flat display
//! strings plus an [`Icon`]; each renders on its own.

use crate::site::Page;

pub const BRAND_NAME: &str = "Garage Repair";
pub const BRAND_LOCALITY: &str = "Coral Springs";
pub const PHONE_DISPLAY: &str = "(954) 555-0123";
pub const PHONE_TEL: &str = "tel:9545550123";

/// Glyph identifiers used by content records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ShieldCheck,
    MapPin,
    Zap,
    Clock,
    Wrench,
    Settings,
    DoorOpen,
    Calendar,
    Snowflake,
    Phone,
    Mail,
    Globe,
    Star,
    Verified,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ShieldCheck => "🛡",
            Icon::MapPin => "📍",
            Icon::Zap => "⚡",
            Icon::Clock => "🕒",
            Icon::Wrench => "🔧",
            Icon::Settings => "⚙",
            Icon::DoorOpen => "🚪",
            Icon::Calendar => "📅",
            Icon::Snowflake => "❄",
            Icon::Phone => "📞",
            Icon::Mail => "✉",
            Icon::Globe => "🌐",
            Icon::Star => "★",
            Icon::Verified => "✔",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub label: &'static str,
    pub page: Page,
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub text: &'static str,
}

impl Testimonial {
    /// First letter of each name part ("Sarah Mitchell" -> "SM").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ContactDetail {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

/// Footer "Quick Links" entry, opened with its hotkey.
#[derive(Debug, Clone, Copy)]
pub struct QuickLink {
    pub label: &'static str,
    pub hotkey: char,
}

impl QuickLink {
    /// Reviews live on the home page; every other quick link opens about.
    pub fn target(&self) -> Page {
        if self.label.to_lowercase().contains("review") {
            Page::Home
        } else {
            Page::About
        }
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", page: Page::Home },
    NavItem { label: "Services", page: Page::Services },
    NavItem { label: "About", page: Page::About },
    NavItem { label: "Contact", page: Page::Contact },
];

pub mod hero {
    use super::Stat;

    pub const BADGE: &str = "Same-Day Service Guaranteed";
    pub const HEADLINE: &str = "Garage Door Problems Fixed Fast in Coral Springs";
    pub const PITCH: &str = "Don't let a broken spring or stuck door ruin your day. Our expert \
        technicians are ready 24/7 for all repairs, installations, and emergency services \
        across Florida.";
    pub const ACTIVE_AREA_LABEL: &str = "Active Now In";
    pub const ACTIVE_AREA: &str = "Riverside Drive Area";
    pub const STATS: &[Stat] = &[
        Stat { value: "5.0", label: "Google Reviews" },
        Stat { value: "2k+", label: "Repairs Done" },
        Stat { value: "60m", label: "Response Time" },
        Stat { value: "24/7", label: "Availability" },
    ];
}

pub const TRUST_MARKERS: &[Feature] = &[
    Feature { icon: Icon::ShieldCheck, title: "Licensed & Insured", desc: "Fully compliant & bonded" },
    Feature { icon: Icon::MapPin, title: "Local Experts", desc: "Based in Coral Springs" },
    Feature { icon: Icon::Zap, title: "Same-Day Service", desc: "On-site within hours" },
    Feature { icon: Icon::Clock, title: "Free Estimates", desc: "No hidden fees or travel" },
];

pub const SERVICES_TITLE: &str = "Our Professional Services";
pub const SERVICES_SUBTITLE: &str =
    "Everything you need for a safe, quiet, and reliable garage door operation.";

pub const SERVICES: &[Feature] = &[
    Feature {
        icon: Icon::Wrench,
        title: "Emergency Repair",
        desc: "Stuck in or out? Our 24/7 team responds immediately to emergency calls throughout Coral Springs.",
    },
    Feature {
        icon: Icon::Zap,
        title: "Spring Replacement",
        desc: "Broken springs are dangerous. We replace torsion and extension springs with high-cycle parts.",
    },
    Feature {
        icon: Icon::Settings,
        title: "Opener Installation",
        desc: "Upgrade to modern, quiet, WiFi-enabled openers like LiftMaster and Chamberlain.",
    },
    Feature {
        icon: Icon::DoorOpen,
        title: "New Garage Doors",
        desc: "Enhance your home's curb appeal with a wide selection of modern and hurricane-rated doors.",
    },
    Feature {
        icon: Icon::Calendar,
        title: "Maintenance Plans",
        desc: "Annual tune-ups to prevent costly repairs and extend the life of your garage system.",
    },
    Feature {
        icon: Icon::Snowflake,
        title: "Weather Sealing",
        desc: "Keep Florida heat, bugs, and water out with professional weatherstripping and threshold seals.",
    },
];

pub const TESTIMONIALS_TITLE: &str = "Trusted by Your Neighbors";
pub const TESTIMONIALS_SUBTITLE: &str =
    "Read what local homeowners are saying about our service.";

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Mitchell",
        location: "Riverside Drive",
        text: "\"Called at 7 AM on a Sunday when my car was trapped. They were at my house by 8:30. Fixed the spring in 45 minutes. Incredible service!\"",
    },
    Testimonial {
        name: "David B.",
        location: "Parkland Border",
        text: "\"Expert installation of our new smart opener. No more noisy rattling! The technician was very professional and clean. Highly recommend.\"",
    },
    Testimonial {
        name: "James P.",
        location: "Near Coral Square",
        text: "\"Fastest repair near Coral Square Mall. I was worried about the cost but their estimate was fair and they stuck to it. Best garage company in the area.\"",
    },
];

pub mod contact {
    use super::{ContactDetail, Icon};

    pub const TITLE: &str = "Request a Free Estimate";
    pub const SUBTITLE: &str = "Fill out the form below and we'll contact you within 15 minutes \
        to schedule your service.";
    pub const ACK_TITLE: &str = "Request Received!";
    pub const ACK_BODY: &str = "One of our technicians will call you shortly.";
    pub const REQUIRED_HINT: &str = "Please fill out this field.";
    pub const SUBMIT_LABEL: &str = "Send Request Now";
    pub const AREA_TITLE: &str = "Serving All Coral Springs";
    pub const MAP_CAPTION: &str = "Map View: Coral Springs Area";

    pub const NAME_PLACEHOLDER: &str = "Your name";
    pub const PHONE_PLACEHOLDER: &str = "(954) 000-0000";
    pub const MESSAGE_PLACEHOLDER: &str = "Briefly describe your issue...";

    /// Options of the service-type selector; the first is the default.
    pub const SERVICE_TYPES: &[&str] = &[
        "Repair Service",
        "New Installation",
        "Spring Replacement",
        "Maintenance Tune-up",
        "Other / Emergency",
    ];

    pub const DETAILS: &[ContactDetail] = &[
        ContactDetail {
            icon: Icon::MapPin,
            label: "Office Address",
            value: "9500 W Sample Rd, Coral Springs, FL 33065",
        },
        ContactDetail { icon: Icon::Phone, label: "24/7 Dispatch", value: "(954) 555-0123" },
        ContactDetail {
            icon: Icon::Clock,
            label: "Operating Hours",
            value: "Monday - Sunday: 24 Hours Open",
        },
    ];
}

pub mod about {
    pub const TITLE: &str = "About Our Team";
    pub const INTRO: &str = "With over 15 years of experience serving South Florida, we pride \
        ourselves on being the most reliable garage door repair company in Coral Springs. Our \
        technicians are fully licensed, background-checked, and committed to excellence.";
    pub const PILLARS: &[(&str, &str)] = &[
        (
            "Our Mission",
            "To provide fast, honest, and affordable garage door solutions that keep our community safe and secure.",
        ),
        (
            "Our Promise",
            "Transparent pricing, high-quality parts, and a satisfaction guarantee on every single job we perform.",
        ),
    ];
    pub const CTA_LABEL: &str = "Work With Us";
}

pub mod footer {
    use super::{Icon, QuickLink};

    pub const BLURB: &str = "Coral Springs' most trusted garage door service provider. Same-day \
        repairs, premium installations, and emergency help whenever you need it.";
    /// Inert placeholders (`#`) for social and contact icons.
    pub const SOCIAL: &[Icon] = &[Icon::Globe, Icon::Mail, Icon::Phone];
    pub const SERVICES: &[&str] = &[
        "Broken Spring Repair",
        "Opener Repair & Install",
        "Cable & Roller Fixes",
        "New Garage Doors",
        "Gate Repair",
    ];
    pub const QUICK_LINKS: &[QuickLink] = &[
        QuickLink { label: "About Our Team", hotkey: 'a' },
        QuickLink { label: "Customer Reviews", hotkey: 'r' },
        QuickLink { label: "Service Areas", hotkey: 's' },
        QuickLink { label: "Coupons & Deals", hotkey: 'd' },
    ];

    pub fn quick_link_for(hotkey: char) -> Option<&'static QuickLink> {
        QUICK_LINKS.iter().find(|link| link.hotkey == hotkey)
    }

    pub const SERVICE_AREA: &str = "We provide mobile garage door services across all Coral \
        Springs zip codes, including 33065, 33067, 33071, 33075, and 33076.";
    pub const CERTIFICATION: &str = "Certified Florida Contractor";
    pub const COPYRIGHT: &str = "© 2024 Garage Repair of Coral Springs. All Rights Reserved.";
    pub const LEGAL: &[&str] = &["Privacy Policy", "Terms of Service"];
}
