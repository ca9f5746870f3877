//! Static page content.
//!
//! Every piece of copy, the contact directory and the carousel sequences live in
//! `content/site.json`, which is embedded at compile time and validated once at
//! startup. Components receive the parts they need as props; nothing here is
//! global state.

mod error;
mod model;

pub use error::ContentError;
pub use model::*;

use serde::Deserialize;

const SITE_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/site.json"));

/// Sequences the hero section renders, in display order.
pub const HERO_SEQUENCES: [&str; 3] = ["family", "activities", "youth"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub carousels: Vec<ImageSequence>,
    pub activities: Activities,
    pub values: Values,
    pub founders: Founders,
    pub history: History,
    pub contact: ContactSection,
    pub footer: Footer,
}

impl SiteContent {
    /// Parse and validate the content document bundled with the crate.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        tracing::info!(
            contacts = content.contact.directory.len(),
            carousels = content.carousels.len(),
            "site content loaded"
        );
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        for (idx, sequence) in self.carousels.iter().enumerate() {
            if sequence.slides.is_empty() {
                return Err(ContentError::EmptySequence(sequence.name.clone()));
            }
            if self.carousels[..idx].iter().any(|s| s.name == sequence.name) {
                return Err(ContentError::DuplicateSequence(sequence.name.clone()));
            }
        }

        for name in HERO_SEQUENCES {
            if self.sequence(name).is_none() {
                return Err(ContentError::MissingSequence(name.to_string()));
            }
        }

        Ok(())
    }

    pub fn sequence(&self, name: &str) -> Option<&ImageSequence> {
        self.carousels.iter().find(|s| s.name == name)
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.contact.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ContactRecord {
        ContactRecord {
            name: name.to_string(),
            office_name: None,
            phone: "+1".into(),
            email: "x@example.org".into(),
            address: "Somewhere".into(),
            message: "Hola".into(),
        }
    }

    fn embedded_value() -> serde_json::Value {
        serde_json::from_str(SITE_JSON).expect("embedded json")
    }

    #[test]
    fn embedded_content_is_valid() {
        let content = SiteContent::embedded().expect("embedded content validates");
        assert_eq!(content.directory().len(), 4);
        for name in HERO_SEQUENCES {
            let seq = content.sequence(name).expect("hero sequence present");
            assert_eq!(seq.slides.len(), 5);
        }
    }

    #[test]
    fn youth_sequence_flags_strong_zoom_on_band_photos() {
        let content = SiteContent::embedded().unwrap();
        let youth = content.sequence("youth").unwrap();
        let zoomed: Vec<bool> = youth.slides.iter().map(|s| s.wants_strong_zoom()).collect();
        assert_eq!(zoomed, vec![false, false, false, true, true]);
    }

    #[test]
    fn duplicate_contact_names_are_rejected() {
        let err = ContactDirectory::new(vec![record("Chile"), record("Chile")]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateContact(name) if name == "Chile"));
    }

    #[test]
    fn empty_directory_is_rejected() {
        assert!(matches!(
            ContactDirectory::new(Vec::new()),
            Err(ContentError::NoContacts)
        ));
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let mut value = embedded_value();
        value["carousels"][0]["slides"] = serde_json::json!([]);
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::EmptySequence(name) if name == "family"));
    }

    #[test]
    fn duplicate_sequence_is_rejected() {
        let mut value = embedded_value();
        value["carousels"][1]["name"] = serde_json::json!("family");
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSequence(name) if name == "family"));
    }

    #[test]
    fn missing_hero_sequence_is_rejected() {
        let mut value = embedded_value();
        value["carousels"][2]["name"] = serde_json::json!("jovenes");
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::MissingSequence(name) if name == "youth"));
    }

    #[test]
    fn duplicate_contact_in_document_is_rejected() {
        let mut value = embedded_value();
        value["contact"]["records"][1]["name"] = serde_json::json!("Argentina");
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().contains("`Argentina` more than once"), "{err}");
    }

    #[test]
    fn contact_section_cannot_deserialize_duplicate_names() {
        let mut section = embedded_value()["contact"].clone();
        section["records"] = serde_json::json!([
            {
                "name": "Chile",
                "phone": "+56 2 1234 5678",
                "email": "chile@ffpum.org",
                "address": "Santiago, Chile",
                "message": "Hola"
            },
            {
                "name": "Chile",
                "phone": "+56 2 8765 4321",
                "email": "otro@ffpum.org",
                "address": "Valparaíso, Chile",
                "message": "Hola otra vez"
            }
        ]);
        let err = serde_json::from_value::<ContactSection>(section.clone()).unwrap_err();
        assert!(err.to_string().contains("`Chile` more than once"), "{err}");
        let err = serde_json::from_str::<ContactSection>(&section.to_string()).unwrap_err();
        assert!(err.to_string().contains("`Chile` more than once"), "{err}");
    }

    #[test]
    fn contact_directory_cannot_deserialize_empty() {
        let err = serde_json::from_str::<ContactDirectory>("[]").unwrap_err();
        assert!(err.to_string().contains("contact directory is empty"), "{err}");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn zoom_flag_selects_strong_zoom() {
        let entry = ImageEntry::new("images/youth4.jpg", "banda");
        assert!(!entry.wants_strong_zoom());
        assert!(entry.zoomed().wants_strong_zoom());
    }

    #[test]
    fn blank_source_resolves_to_placeholder() {
        let entry = ImageEntry::new("  ", "sin imagen");
        assert_eq!(entry.resolved_source(), PLACEHOLDER_IMAGE);
        let entry = ImageEntry::new("images/family1.jpg", "familia");
        assert_eq!(entry.resolved_source(), "images/family1.jpg");
    }
}
