//! Product categories shown as cards and product pages.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::assets::{AHU, BARO, GAUGES, ImageAsset, LIGHTS, OTHER_LIGHTS};

/// One product category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentEntry {
    /// Key used in `/product/<id>`.
    pub id: &'static str,
    /// Short name for cards and navigation.
    pub name: &'static str,
    /// Product page heading; also the prefilled quote product.
    pub title: &'static str,
    /// One-line card description.
    pub summary: &'static str,
    pub image: ImageAsset,
    pub bullets: &'static [&'static str],
    /// Longer paragraphs below the bullets.
    pub details: &'static [&'static str],
}

impl ContentEntry {
    pub fn image_src(&self) -> &'static str {
        self.image.path
    }

    pub fn placeholder_src(&self) -> &'static str {
        self.image.placeholder
    }
}

pub const CATALOG: &[ContentEntry] = &[
    ContentEntry {
        id: "ahu",
        name: "AHU Filters",
        title: "AHU Filters",
        summary: "G4 / F7 / F9 / H13 — bag, pleated & HEPA. Custom sizes available.",
        image: AHU,
        bullets: &[
            "Grades: G4, F7, F9, H13 (EN ISO 16890 & EN1822)",
            "Formats: pleated panels, bag filters, HEPA cassettes",
            "Custom sizes made-to-order (lead time 5–15 working days)",
        ],
        details: &[
            "Our AHU filter range covers pre-filtration through high-efficiency HEPA for clean supply and extract air in commercial buildings, healthcare and industry.",
            "Provide us with your panel size, pocket count, media type or an OEM part number; we cross-reference and supply EU-compliant equivalents with certificates on request.",
        ],
    },
    ContentEntry {
        id: "lights",
        name: "Emergency Lights",
        title: "Emergency Lights",
        summary: "LED exit signs, bulkheads, twinspots. IP65 / IK10 options.",
        image: LIGHTS,
        bullets: &[
            "LED bulkheads, exit signs, twinspots",
            "Self-test & maintained/non-maintained options",
            "IP65, IK10 models for industrial settings",
        ],
        details: &[
            "Emergency luminaires designed for reliability and compliance with EU safety standards.",
            "Choose from maintained or non-maintained variants, pictogram exit signs, and vandal-resistant housings for harsh environments.",
        ],
    },
    ContentEntry {
        id: "gauges",
        name: "Temperature Gauges",
        title: "Temperature Gauges",
        summary: "Dial and digital gauges for HVAC and process monitoring.",
        image: GAUGES,
        bullets: &[
            "Bimetal dial, digital and remote-probe options",
            "Ranges for HVAC and process monitoring",
            "Optional calibration certificates",
        ],
        details: &[
            "Robust temperature gauges for HVAC plant rooms and light process applications, available in multiple dial sizes, connection threads and stem lengths.",
            "Supply your required range, accuracy and process connection—we’ll match a compatible model with lead times and certificates if needed.",
        ],
    },
    ContentEntry {
        id: "baro",
        name: "Barometers",
        title: "Barometers",
        summary: "Precision barometers for weather and labs.",
        image: BARO,
        bullets: &[
            "Precision measurement for labs & weather",
            "Wall, bench & digital models",
            "Optional data logging",
        ],
        details: &[
            "Laboratory and meteorological barometers with stable, accurate sensing for environmental monitoring and research.",
            "We offer classic aneroid and modern digital variants, with optional data interfaces for analysis.",
        ],
    },
    ContentEntry {
        id: "otherlights",
        name: "Other Lights",
        title: "Other Lights (Batten, Spots, Bulbs)",
        summary: "Batten lights, spot lights, bulbs & accessories.",
        image: OTHER_LIGHTS,
        bullets: &[
            "LED battens for linear illumination",
            "Spot lights for accent/task lighting",
            "Bulbs & accessories in common bases",
        ],
        details: &[
            "A complementary lighting category covering linear battens for corridors and workshops, spot luminaires for focused lighting, and high-efficiency bulbs in common fittings.",
            "Share quantities, lumen output targets, CCT requirements and IP ratings; we’ll source suitable EU-compliant options with competitive lead times.",
        ],
    },
];

/// Look up a category by its route id.
pub fn lookup(id: &str) -> Option<&'static ContentEntry> {
    CATALOG.iter().find(|entry| entry.id == id)
}
