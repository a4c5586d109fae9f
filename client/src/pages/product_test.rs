use super::*;
use crate::router::{Location, Route};

fn ahu() -> &'static ContentEntry {
    let loc = Location::parse("#/product/ahu");
    let Route::Product(id) = loc.route else {
        panic!("expected product route");
    };
    catalog::lookup(&id).unwrap_or_else(|| panic!("ahu missing"))
}

#[test]
fn ahu_page_lists_title_then_bullets_then_paragraphs() {
    let entry = ahu();
    let items = detail_items(entry);
    assert_eq!(items.len(), 1 + entry.bullets.len() + entry.details.len());
    assert_eq!(items[0], DetailItem::Title("AHU Filters"));
    assert_eq!(
        &items[1..4],
        [
            DetailItem::Bullet("Grades: G4, F7, F9, H13 (EN ISO 16890 & EN1822)"),
            DetailItem::Bullet("Formats: pleated panels, bag filters, HEPA cassettes"),
            DetailItem::Bullet("Custom sizes made-to-order (lead time 5–15 working days)"),
        ]
    );
    let paragraphs: Vec<_> = entry.details.iter().copied().map(DetailItem::Paragraph).collect();
    assert_eq!(&items[4..], paragraphs.as_slice());
}

#[test]
fn every_string_appears_exactly_once() {
    for entry in catalog::CATALOG {
        let items = detail_items(entry);
        for (i, a) in items.iter().enumerate() {
            assert!(!items[i + 1..].contains(a), "{} repeats {a:?}", entry.id);
        }
    }
}
