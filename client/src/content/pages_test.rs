use super::*;

const ALL: [InfoPage; 6] = [HELP, PRIVACY, SHIPPING, TERMS, LEGAL, ABOUT];

#[test]
fn every_page_has_title_and_body() {
    for page in ALL {
        assert!(!page.title.is_empty());
        assert!(!page.intro.is_empty() || !page.sections.is_empty(), "{} is empty", page.title);
    }
}

#[test]
fn sections_have_headings_and_blocks() {
    for page in ALL {
        for section in page.sections {
            assert!(!section.heading.is_empty(), "{}", page.title);
            assert!(!section.blocks.is_empty(), "{} / {}", page.title, section.heading);
        }
    }
}

#[test]
fn about_is_intro_only() {
    assert_eq!(ABOUT.intro.len(), 4);
    assert!(ABOUT.sections.is_empty());
}

#[test]
fn support_contacts_use_email_block() {
    let has_email = |page: InfoPage| {
        page.sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .any(|b| matches!(b, Block::Email { .. }))
    };
    assert!(has_email(HELP));
    assert!(has_email(PRIVACY));
    assert!(has_email(LEGAL));
    assert!(!has_email(TERMS));
}
