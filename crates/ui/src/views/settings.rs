use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{PreferencesForm, save_error_message};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved,
    Failed(&'static str),
}

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let preferences = ctx.preferences();

    // Loading never fails; unreadable preferences come back as defaults.
    let resource = use_resource(move || {
        let preferences = preferences.clone();
        async move {
            let loaded = preferences.load().await;
            Ok::<_, ViewError>(PreferencesForm::from_preferences(&loaded))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page settings",
            h2 { "Settings" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(initial) => rsx! {
                    PreferencesEditor { initial }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn PreferencesEditor(initial: PreferencesForm) -> Element {
    let ctx = use_context::<AppContext>();
    let mut form = use_signal(|| initial.clone());
    let mut save_state = use_signal(|| SaveState::Idle);

    let preferences = ctx.preferences();
    let on_save = move |_: MouseEvent| {
        let draft = form.peek().to_draft();
        let preferences = preferences.clone();
        save_state.set(SaveState::Saving);
        spawn(async move {
            match preferences.save(draft).await {
                Ok(saved) => {
                    form.set(PreferencesForm::from_preferences(&saved));
                    save_state.set(SaveState::Saved);
                }
                Err(err) => {
                    log::warn!("failed to save preferences: {err}");
                    save_state.set(SaveState::Failed(save_error_message(&err)));
                }
            }
        });
    };

    let current = form();
    let saving = save_state() == SaveState::Saving;

    rsx! {
        div { class: "form",
            p { class: "hint", "Leave a field blank to use the value from the environment." }
            label { class: "field",
                span { "API key" }
                input {
                    r#type: "password",
                    value: "{current.api_key}",
                    oninput: move |evt| {
                        let mut next = form();
                        next.api_key = evt.value();
                        form.set(next);
                        save_state.set(SaveState::Idle);
                    },
                }
            }
            label { class: "field",
                span { "Model" }
                input {
                    placeholder: "gpt-4o-mini",
                    value: "{current.api_model}",
                    oninput: move |evt| {
                        let mut next = form();
                        next.api_model = evt.value();
                        form.set(next);
                        save_state.set(SaveState::Idle);
                    },
                }
            }
            label { class: "field",
                span { "API base URL" }
                input {
                    placeholder: "https://api.openai.com/v1",
                    value: "{current.api_base_url}",
                    oninput: move |evt| {
                        let mut next = form();
                        next.api_base_url = evt.value();
                        form.set(next);
                        save_state.set(SaveState::Idle);
                    },
                }
            }
            label { class: "field",
                span { "Preferred language" }
                input {
                    placeholder: "English",
                    value: "{current.language}",
                    oninput: move |evt| {
                        let mut next = form();
                        next.language = evt.value();
                        form.set(next);
                        save_state.set(SaveState::Idle);
                    },
                }
            }

            match save_state() {
                SaveState::Idle | SaveState::Saving => rsx! {},
                SaveState::Saved => rsx! {
                    p { class: "status success", "Saved." }
                },
                SaveState::Failed(message) => rsx! {
                    p { class: "status error", "{message}" }
                },
            }

            div { class: "actions",
                button {
                    class: "button primary",
                    disabled: saving,
                    onclick: on_save,
                    if saving { "Saving..." } else { "Save" }
                }
            }
        }
    }
}
