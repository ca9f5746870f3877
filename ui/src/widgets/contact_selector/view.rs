use dioxus::prelude::*;

use crate::components::Icon;
use crate::content::{ContactDirectory, ContactRecord, IconKind};
use crate::core::format;

use super::engine::{SelectorEvent, SelectorState, SelectorView};

/// Handle shared through context so any button on the page can open the dialog.
#[derive(Clone, Copy, PartialEq)]
pub struct ContactDialog {
    state: Signal<SelectorState>,
    directory: Signal<ContactDirectory>,
}

impl ContactDialog {
    pub fn dispatch(&self, event: SelectorEvent) {
        let mut state = self.state;
        let next = {
            let directory = self.directory.peek();
            state.peek().clone().apply(&event, &directory)
        };
        tracing::debug!(?event, state = ?next, "contact dialog transition");
        state.set(next);
    }

    pub fn open(&self) {
        self.dispatch(SelectorEvent::Open);
    }

    pub fn select_country(&self, name: String) {
        self.dispatch(SelectorEvent::SelectCountry(name));
    }

    pub fn reveal_information(&self) {
        self.dispatch(SelectorEvent::RevealInformation);
    }

    pub fn choose_another(&self) {
        self.dispatch(SelectorEvent::ChooseAnother);
    }

    pub fn close(&self) {
        self.dispatch(SelectorEvent::Close);
    }

    /// Current state; subscribes the calling component.
    pub fn state(&self) -> SelectorState {
        (self.state)()
    }
}

/// Create the dialog state for this subtree and expose it through context.
pub fn use_contact_dialog(directory: ContactDirectory) -> ContactDialog {
    let state = use_signal(SelectorState::default);
    let directory = use_signal(move || directory);
    use_context_provider(|| ContactDialog { state, directory })
}

#[component]
pub fn CountryContactDialog(on_close: Option<EventHandler<()>>) -> Element {
    let dialog = use_context::<ContactDialog>();
    let state = dialog.state();
    let directory = dialog.directory.read();
    let view = state.view(&directory);

    if view == SelectorView::Hidden {
        return rsx! {};
    }

    let close_dialog = move || {
        dialog.close();
        if let Some(handler) = on_close {
            handler.call(());
        }
    };

    let (title, body) = match view {
        SelectorView::Revealed(record) => (
            format!("Contacto en {}", record.name),
            render_revealed(record, dialog),
        ),
        SelectorView::Picker {
            options,
            selected,
            can_reveal,
        } => (
            "Conéctate con Nosotros".to_string(),
            render_picker(&options, selected, can_reveal, dialog),
        ),
        SelectorView::Hidden => return rsx! {},
    };
    let revealed = state.info_revealed();

    rsx! {
        div {
            class: "contact-dialog__backdrop",
            onclick: move |_| close_dialog(),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    close_dialog();
                }
            },
            div {
                class: "contact-dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "contact-dialog-title",
                tabindex: "-1",
                onmounted: move |evt: MountedEvent| async move {
                    let _ = evt.set_focus(true).await;
                },
                onclick: move |evt| evt.stop_propagation(),

                header { class: "contact-dialog__header",
                    h2 { id: "contact-dialog-title", class: "contact-dialog__title", "{title}" }
                    if !revealed {
                        p { class: "contact-dialog__description",
                            "Selecciona tu país para ver la información de contacto y dar el primer paso."
                        }
                    }
                }

                {body}

                footer { class: "contact-dialog__footer",
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| close_dialog(),
                        "Cerrar"
                    }
                }
            }
        }
    }
}

fn render_picker(
    options: &[&str],
    selected: Option<&str>,
    can_reveal: bool,
    dialog: ContactDialog,
) -> Element {
    let current = selected.unwrap_or_default().to_string();
    let names: Vec<String> = options.iter().map(|name| name.to_string()).collect();

    rsx! {
        div { class: "contact-dialog__body",
            label { class: "visually-hidden", r#for: "country-select", "País" }
            select {
                id: "country-select",
                class: "contact-dialog__select",
                value: "{current}",
                onchange: move |evt: FormEvent| dialog.select_country(evt.value()),
                option { value: "", disabled: true, selected: current.is_empty(), "Selecciona tu país" }
                for name in names {
                    option { key: "{name}", value: "{name}", "{name}" }
                }
            }
            button {
                r#type: "button",
                class: "button button--primary contact-dialog__reveal",
                disabled: !can_reveal,
                onclick: move |_| dialog.reveal_information(),
                "Ver Información"
            }
        }
    }
}

fn render_revealed(record: &ContactRecord, dialog: ContactDialog) -> Element {
    let phone_href = format::tel_href(&record.phone);
    let email_href = format::mailto_href(&record.email);

    rsx! {
        div { class: "contact-dialog__body",
            p { class: "contact-dialog__message", "{record.message}" }
            div { class: "contact-dialog__details",
                if let Some(office) = record.office_name.as_ref() {
                    div { class: "contact-dialog__row contact-dialog__row--office",
                        Icon { kind: IconKind::Building, class: "contact-dialog__icon" }
                        div {
                            h4 { "Oficina Central" }
                            p { class: "contact-dialog__office", "{office}" }
                        }
                    }
                }
                div { class: "contact-dialog__row",
                    Icon { kind: IconKind::Phone, class: "contact-dialog__icon" }
                    a { class: "contact-dialog__phone", href: "{phone_href}", "{record.phone}" }
                }
                div { class: "contact-dialog__row",
                    Icon { kind: IconKind::Mail, class: "contact-dialog__icon" }
                    a { class: "contact-dialog__email", href: "{email_href}", "{record.email}" }
                }
                div { class: "contact-dialog__row",
                    Icon { kind: IconKind::MapPin, class: "contact-dialog__icon" }
                    span { class: "contact-dialog__address", "{record.address}" }
                }
            }
            button {
                r#type: "button",
                class: "button button--ghost contact-dialog__another",
                onclick: move |_| dialog.choose_another(),
                "Seleccionar otro país"
            }
        }
    }
}
