//! State machine behind the "Únete a Nosotros" contact dialog.
//!
//! `Closed -> Picking -> Revealed`, `Revealed -> Picking` via choose-another, and
//! any open state back to `Closed`. Transitions are pure; the view keeps the
//! current value in a signal and replaces it with the result of [`SelectorState::apply`].

use crate::content::{ContactDirectory, ContactRecord};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectorState {
    #[default]
    Closed,
    Picking {
        selected: Option<String>,
    },
    Revealed {
        selected: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    Open,
    SelectCountry(String),
    RevealInformation,
    ChooseAnother,
    Close,
}

/// What the dialog should draw for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorView<'a> {
    Hidden,
    Picker {
        options: Vec<&'a str>,
        selected: Option<&'a str>,
        can_reveal: bool,
    },
    Revealed(&'a ContactRecord),
}

impl SelectorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, SelectorState::Closed)
    }

    pub fn selected_name(&self) -> Option<&str> {
        match self {
            SelectorState::Closed => None,
            SelectorState::Picking { selected } => selected.as_deref(),
            SelectorState::Revealed { selected } => Some(selected),
        }
    }

    pub fn info_revealed(&self) -> bool {
        matches!(self, SelectorState::Revealed { .. })
    }

    pub fn apply(self, event: &SelectorEvent, directory: &ContactDirectory) -> SelectorState {
        match (self, event) {
            (_, SelectorEvent::Open) => SelectorState::Picking { selected: None },
            (_, SelectorEvent::Close) => SelectorState::Closed,

            (SelectorState::Closed, _) => SelectorState::Closed,

            // Re-selecting always drops back to the picker, even for the country already shown.
            (_, SelectorEvent::SelectCountry(name)) => {
                if directory.contains(name) {
                    SelectorState::Picking {
                        selected: Some(name.clone()),
                    }
                } else {
                    tracing::warn!(country = %name, "selected country is not in the contact directory");
                    SelectorState::Picking { selected: None }
                }
            }

            (SelectorState::Picking { selected: Some(name) }, SelectorEvent::RevealInformation) => {
                SelectorState::Revealed { selected: name }
            }
            (state @ SelectorState::Picking { selected: None }, SelectorEvent::RevealInformation) => {
                state
            }
            (state @ SelectorState::Revealed { .. }, SelectorEvent::RevealInformation) => state,

            (_, SelectorEvent::ChooseAnother) => SelectorState::Picking { selected: None },
        }
    }

    pub fn view<'a>(&'a self, directory: &'a ContactDirectory) -> SelectorView<'a> {
        match self {
            SelectorState::Closed => SelectorView::Hidden,
            SelectorState::Picking { selected } => {
                let selected = selected
                    .as_deref()
                    .and_then(|name| directory.find(name))
                    .map(|record| record.name.as_str());
                SelectorView::Picker {
                    options: directory.names().collect(),
                    selected,
                    can_reveal: selected.is_some(),
                }
            }
            SelectorState::Revealed { selected } => match directory.find(selected) {
                Some(record) => SelectorView::Revealed(record),
                None => SelectorView::Picker {
                    options: directory.names().collect(),
                    selected: None,
                    can_reveal: false,
                },
            },
        }
    }
}
