//! Copy for the informational pages (Help, Privacy, Shipping, Terms, Legal).
//!
//! Each page is a title, optional intro paragraphs and a list of headed
//! sections. Blocks reference the support mailbox through `Block::Email`
//! so the address lives in one place.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Text(&'static str),
    Bullets(&'static [&'static str]),
    /// Sentence containing a `mailto:` link to the support mailbox.
    Email { before: &'static str, after: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoPage {
    pub title: &'static str,
    pub intro: &'static [&'static str],
    pub sections: &'static [Section],
}

pub const HELP: InfoPage = InfoPage {
    title: "Help",
    intro: &[],
    sections: &[
        Section {
            heading: "How to Request a Quote",
            blocks: &[Block::Text(
                "Open any category, press “Request a Quote” and include product numbers, quantities and delivery address.",
            )],
        },
        Section {
            heading: "Lead Times",
            blocks: &[Block::Text(
                "Standard items 2–7 working days after confirmation. Filters/custom builds usually 5–15 working days pre-dispatch.",
            )],
        },
        Section {
            heading: "Support",
            blocks: &[Block::Email { before: "For assistance email ", after: "." }],
        },
    ],
};

pub const PRIVACY: InfoPage = InfoPage {
    title: "Privacy Policy (GDPR)",
    intro: &[
        "We respect your privacy and process personal data in accordance with GDPR (EU) 2016/679 and applicable EU/Member State laws.",
    ],
    sections: &[
        Section { heading: "Data Controller", blocks: &[Block::Email { before: "Flashfy — Contact: ", after: "" }] },
        Section {
            heading: "What We Collect",
            blocks: &[Block::Bullets(&[
                "Identity & contact data (name, email, phone, company, billing)",
                "Order/quotation data (specs, product numbers, quantities, addresses)",
                "Communications (emails, forms)",
                "Technical data (IP, device, browser) for security and analytics",
            ])],
        },
        Section {
            heading: "Purposes & Legal Bases",
            blocks: &[Block::Bullets(&[
                "Quotations & Orders – contract performance (Art. 6(1)(b))",
                "Support, invoicing – legal obligation (Art. 6(1)(c))",
                "Security & fraud prevention – legitimate interests (Art. 6(1)(f))",
                "Marketing (optional) – consent (Art. 6(1)(a)); opt-out anytime",
            ])],
        },
        Section {
            heading: "Sharing",
            blocks: &[Block::Text(
                "Only as needed with vetted suppliers, logistics and payments; and with advisors/authorities where required. We do not sell personal data.",
            )],
        },
        Section {
            heading: "Storage, Location & Retention",
            blocks: &[Block::Text(
                "Stored securely in the EU/EEA where possible. If transfers outside EEA occur, safeguards (SCCs) are used. Kept only as long as needed and for statutory retention.",
            )],
        },
        Section {
            heading: "Your GDPR Rights",
            blocks: &[Block::Bullets(&[
                "Access, rectification, erasure",
                "Restriction, objection",
                "Portability",
                "Withdraw consent",
                "Complain to your authority",
            ])],
        },
    ],
};

pub const SHIPPING: InfoPage = InfoPage {
    title: "Shipping & Returns",
    intro: &[],
    sections: &[
        Section {
            heading: "Lead Times",
            blocks: &[Block::Bullets(&[
                "Standard items: dispatch typically within 2–7 working days after confirmation.",
                "Filters/custom builds: production usually 5–15 working days before shipping.",
            ])],
        },
        Section {
            heading: "Shipping",
            blocks: &[Block::Bullets(&[
                "Tracked delivery via EU logistics partners. Shipping charges confirmed at quotation.",
                "Risk passes on delivery unless otherwise agreed. Inspect parcels upon receipt.",
            ])],
        },
        Section {
            heading: "14-Day Right of Withdrawal (EU Consumers)",
            blocks: &[Block::Text(
                "Under Directive 2011/83/EU, consumers may withdraw from most distance contracts within 14 days of delivery.",
            )],
        },
        Section {
            heading: "Return Conditions",
            blocks: &[Block::Bullets(&[
                "Items must be unused, in original packaging, fit for resale.",
                "Customer pays return shipping unless faulty or not as described.",
            ])],
        },
        Section {
            heading: "Exceptions",
            blocks: &[Block::Bullets(&["Custom-made or personalized items are non-returnable unless faulty."])],
        },
        Section {
            heading: "Damaged or Faulty",
            blocks: &[Block::Text("Notify within 48 hours with photos; we’ll coordinate resolution with suppliers.")],
        },
    ],
};

pub const TERMS: InfoPage = InfoPage {
    title: "Terms & Conditions",
    intro: &[],
    sections: &[
        Section {
            heading: "About Flashfy",
            blocks: &[Block::Text("Flashfy is a sourcing/procurement intermediary; we usually do not hold stock.")],
        },
        Section {
            heading: "Quotations & Orders",
            blocks: &[Block::Bullets(&[
                "Quotes valid for 14 days unless stated.",
                "Orders subject to availability/spec confirmation.",
            ])],
        },
        Section {
            heading: "Prices, Taxes & Payment",
            blocks: &[Block::Bullets(&["Prices net of VAT unless stated.", "Payment in advance unless agreed."])],
        },
        Section {
            heading: "Delivery & Risk",
            blocks: &[Block::Bullets(&[
                "Lead times not guaranteed.",
                "Risk transfers on delivery (per agreed Incoterms).",
            ])],
        },
        Section {
            heading: "Warranty",
            blocks: &[Block::Text("Products carry manufacturer’s warranty where applicable.")],
        },
        Section { heading: "Liability", blocks: &[Block::Text("Liability limited to the price paid; no indirect losses.")] },
        Section {
            heading: "Compliance",
            blocks: &[Block::Text("We source EU-compliant products; you ensure suitability/installation.")],
        },
        Section {
            heading: "Governing Law & Disputes",
            blocks: &[Block::Text("Law of Malta (EU); consumers retain mandatory rights.")],
        },
    ],
};

pub const LEGAL: InfoPage = InfoPage {
    title: "Legal Policy",
    intro: &[],
    sections: &[
        Section {
            heading: "Compliance Framework",
            blocks: &[Block::Bullets(&[
                "Consumer Rights Directive 2011/83/EU",
                "E-Commerce Directive 2000/31/EC",
                "GDPR (EU) 2016/679",
            ])],
        },
        Section {
            heading: "Intellectual Property",
            blocks: &[Block::Text("All site content is owned by Flashfy or its licensors.")],
        },
        Section { heading: "Contact", blocks: &[Block::Email { before: "Legal: ", after: "" }] },
    ],
};

/// About page: centered paragraphs, no sections.
pub const ABOUT: InfoPage = InfoPage {
    title: "About Flashfy",
    intro: &[
        "Flashfy is a procurement partner and sourcing intermediary focused on EU-compliant HVAC filtration and lighting products. We coordinate carefully with audited manufacturers and distributors to ensure specification fit, quality and responsible lead times.",
        "Our model is straightforward: you send requests with product numbers or technical requirements; we validate, propose compatible options and share transparent lead times. Filters and custom builds often require 5–15 working days before dispatch.",
        "Whether equipping a facility with emergency luminaires, replacing AHU filters to EN standards, or selecting temperature gauges and barometers for monitoring, we streamline your supplier search and consolidate communication.",
        "We’re based in the EU and understand local compliance, documentation and logistics requirements. Our goal is to save you time and risk, from first quote to delivery.",
    ],
    sections: &[],
};
