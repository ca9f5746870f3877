//! Cross-checks between the embedded content and the page structure.

use std::collections::HashSet;

use ui::content::{SiteContent, HERO_SEQUENCES};
use ui::sections::SECTION_IDS;

#[test]
fn nav_anchors_target_rendered_sections() {
    let content = SiteContent::embedded().unwrap();
    let anchors: Vec<&str> = content.nav.iter().map(|link| link.anchor.as_str()).collect();
    assert_eq!(anchors, SECTION_IDS.to_vec());
    assert!(content.nav.iter().all(|link| link.href().starts_with('#')));
}

#[test]
fn hero_sequences_are_non_empty_with_alt_text() {
    let content = SiteContent::embedded().unwrap();
    for name in HERO_SEQUENCES {
        let sequence = content.sequence(name).unwrap();
        assert!(!sequence.slides.is_empty());
        assert!(
            sequence.slides.iter().all(|s| !s.alt_text.trim().is_empty()),
            "{name} has a slide without alt text"
        );
    }
}

#[test]
fn slide_sources_are_unique() {
    let content = SiteContent::embedded().unwrap();
    let mut seen = HashSet::new();
    for slide in content.carousels.iter().flat_map(|s| s.slides.iter()) {
        assert!(seen.insert(slide.source.clone()), "duplicate slide {}", slide.source);
    }
}

#[test]
fn static_sections_have_expected_shape() {
    let content = SiteContent::embedded().unwrap();
    assert_eq!(content.activities.cards.len(), 3);
    assert!(content.activities.cards.iter().all(|c| c.bullets.len() == 3));
    assert_eq!(content.values.items.len(), 4);
    assert_eq!(content.founders.people.len(), 2);
    assert_eq!(content.founders.teachings.items.len(), 3);
    assert_eq!(content.history.milestones.len(), 7);
    assert_eq!(content.footer.affiliates.len(), 4);
}
