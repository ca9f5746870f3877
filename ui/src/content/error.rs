use thiserror::Error;

/// Reasons the embedded site content can be rejected at startup.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("contact directory lists `{0}` more than once")]
    DuplicateContact(String),

    #[error("contact directory is empty")]
    NoContacts,

    #[error("image sequence `{0}` has no slides")]
    EmptySequence(String),

    #[error("image sequence `{0}` is defined more than once")]
    DuplicateSequence(String),

    #[error("image sequence `{0}` is required by the page but missing")]
    MissingSequence(String),
}
