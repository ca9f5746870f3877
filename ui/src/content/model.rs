//! Typed view of `content/site.json`.

use serde::Deserialize;

use super::ContentError;

/// Image shown when a slide or portrait has no usable source.
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.svg";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub full_name: String,
    pub subtitle: String,
    pub region: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    /// Section id the link scrolls to (without the leading `#`).
    pub anchor: String,
    pub label: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub title_lead: String,
    pub title_highlight: String,
    pub intro: String,
    pub mission_cta: String,
    pub community_cta: String,
    pub join_cta: String,
}

/// One carousel slide.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageEntry {
    #[serde(default)]
    pub source: String,
    pub alt_text: String,
    #[serde(default)]
    pub zoom: Option<bool>,
}

impl ImageEntry {
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
            zoom: None,
        }
    }

    pub fn zoomed(mut self) -> Self {
        self.zoom = Some(true);
        self
    }

    /// Source to hand to the `img` element; blank references degrade to the placeholder.
    pub fn resolved_source(&self) -> &str {
        resolve_image(&self.source)
    }

    pub fn wants_strong_zoom(&self) -> bool {
        self.zoom.unwrap_or(false)
    }
}

pub(crate) fn resolve_image(source: &str) -> &str {
    if source.trim().is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        source
    }
}

/// A named, ordered, non-empty list of slides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageSequence {
    pub name: String,
    pub slides: Vec<ImageEntry>,
}

/// One region's contact details plus the greeting shown once it is revealed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    #[serde(default)]
    pub office_name: Option<String>,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub message: String,
}

/// Ordered contact records with unique names. Deserializing goes through
/// [`ContactDirectory::new`], so an invalid list never becomes a directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<ContactRecord>")]
pub struct ContactDirectory {
    records: Vec<ContactRecord>,
}

impl ContactDirectory {
    pub fn new(records: Vec<ContactRecord>) -> Result<Self, ContentError> {
        let directory = Self { records };
        directory.validate()?;
        Ok(directory)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.records.is_empty() {
            return Err(ContentError::NoContacts);
        }
        for (idx, record) in self.records.iter().enumerate() {
            if self.records[..idx].iter().any(|r| r.name == record.name) {
                return Err(ContentError::DuplicateContact(record.name.clone()));
            }
        }
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }

    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TryFrom<Vec<ContactRecord>> for ContactDirectory {
    type Error = ContentError;

    fn try_from(records: Vec<ContactRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Heart,
    Users,
    Globe,
    Handshake,
    ShieldCheck,
    BookOpen,
    Star,
    Phone,
    Mail,
    MapPin,
    Building,
}

/// Gradient used behind a card's icon badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    GreenTeal,
    GreenBlue,
    PurplePink,
    RedPink,
    GreenEmerald,
    TealBlue,
    PurpleViolet,
    EmeraldGreen,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::GreenTeal => "tone--green-teal",
            Tone::GreenBlue => "tone--green-blue",
            Tone::PurplePink => "tone--purple-pink",
            Tone::RedPink => "tone--red-pink",
            Tone::GreenEmerald => "tone--green-emerald",
            Tone::TealBlue => "tone--teal-blue",
            Tone::PurpleViolet => "tone--purple-violet",
            Tone::EmeraldGreen => "tone--emerald-green",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityCard {
    pub icon: IconKind,
    pub tone: Tone,
    pub title: String,
    pub body: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Statement {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activities {
    pub title: String,
    pub intro: String,
    pub cards: Vec<ActivityCard>,
    pub mission: Statement,
    pub vision: Statement,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValueCard {
    pub icon: IconKind,
    pub tone: Tone,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Values {
    pub title: String,
    pub intro: String,
    pub items: Vec<ValueCard>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Founder {
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(default)]
    pub portrait: String,
}

impl Founder {
    pub fn resolved_portrait(&self) -> &str {
        resolve_image(&self.portrait)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Teachings {
    pub title: String,
    pub items: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Founders {
    pub title: String,
    pub intro: String,
    pub people: Vec<Founder>,
    pub teachings: Teachings,
    pub legacy: Statement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Teal,
}

impl Accent {
    pub fn css_class(self) -> &'static str {
        match self {
            Accent::Blue => "history__milestone--blue",
            Accent::Purple => "history__milestone--purple",
            Accent::Green => "history__milestone--green",
            Accent::Teal => "history__milestone--teal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub body: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct History {
    pub title: String,
    pub intro: String,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
    pub learn_more: String,
    pub join_now: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactSection {
    pub title: String,
    pub intro: String,
    #[serde(rename = "records")]
    pub directory: ContactDirectory,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub about: String,
    pub affiliates_title: String,
    pub affiliates: Vec<String>,
    pub links_title: String,
    pub contact_title: String,
    pub general_email: String,
    pub website: String,
    pub rights: String,
}
