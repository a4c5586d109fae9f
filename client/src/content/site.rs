//! Site-wide copy: navigation, hero, trust bar, FAQ.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// A labelled fragment link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

pub const BRAND: &str = "Flashfy";

pub const HEADER_LINKS: &[NavLink] = &[
    link("Home", "#/"),
    link("Categories", "#/categories"),
    link("Help", "#/help"),
    link("About", "#/about"),
    link("Contact", "#/contact"),
    link("FAQs", "#/faq"),
];

/// A titled footer column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Company",
        links: &[
            link("About Us", "#/about"),
            link("Privacy Policy", "#/privacy"),
            link("Shipping & Returns", "#/shipping"),
            link("Terms & Conditions", "#/terms"),
            link("Legal Policy", "#/legal"),
        ],
    },
    FooterColumn {
        heading: "Support",
        links: &[link("Help", "#/help"), link("FAQs", "#/faq"), link("Contact Us", "#/contact")],
    },
    FooterColumn {
        heading: "Categories",
        links: &[
            link("AHU Filters", "#/product/ahu"),
            link("Emergency Lights", "#/product/lights"),
            link("Temperature Gauges", "#/product/gauges"),
            link("Barometers", "#/product/baro"),
            link("Other Lights", "#/product/otherlights"),
        ],
    },
];

pub const HERO_HEADING: &str = "Your EU Product Sourcing Partner";
pub const HERO_TAGLINE: &str =
    "Reliable suppliers, lead-time visibility, and EU-compliant products across HVAC filtration and lighting.";

pub const DOCUMENT_TITLE: &str = "Flashfy — EU Product Sourcing";
pub const DOCUMENT_DESCRIPTION: &str = "Flashfy sources AHU filters, emergency lighting, temperature gauges and barometers. EU suppliers, transparent lead times. Get a quote today.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrustItem {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const TRUST_HEADING: &str = "Why Choose Flashfy?";

pub const TRUST_ITEMS: &[TrustItem] = &[
    TrustItem { title: "EU-Vetted Suppliers", desc: "We source from audited manufacturers and distributors." },
    TrustItem { title: "Transparent Lead Times", desc: "Clear visibility—especially for custom filters (5–15 days)." },
    TrustItem { title: "Specification Matching", desc: "Send product numbers or drawings; we match 1:1." },
    TrustItem { title: "Dedicated Support", desc: "One point of contact from quote to delivery." },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub q: &'static str,
    pub a: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        q: "Do you hold stock?",
        a: "Flashfy is a sourcing middle-man (no stock). We procure per order from vetted suppliers.",
    },
    Faq {
        q: "Can I get fast delivery?",
        a: "Lead times vary by item; filters often need 5–15 working days before shipping.",
    },
    Faq {
        q: "How do I get pricing?",
        a: "Use 'Request a Quote' with specs or product number; we'll reply with a quote.",
    },
    Faq {
        q: "Can you match my OEM part?",
        a: "Yes—send the OEM code or drawing and we’ll quote an equivalent or original where available.",
    },
    Faq {
        q: "Do you supply certificates?",
        a: "Yes—request EN ISO or manufacturer certificates where applicable (additional lead time possible).",
    },
    Faq {
        q: "Which countries do you ship to?",
        a: "Primarily EU/EEA; we can discuss other destinations case by case.",
    },
];

/// Footer copyright line. The year comes from the browser clock when known.
pub fn copyright_line(year: Option<u32>) -> String {
    match year {
        Some(year) => format!("\u{a9} {year} {BRAND}. All rights reserved."),
        None => format!("\u{a9} {BRAND}. All rights reserved."),
    }
}
