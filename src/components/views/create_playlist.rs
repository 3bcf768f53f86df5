use crate::components::{AccountController, Icon};
use dioxus::prelude::*;

#[component]
pub fn CreatePlaylistCard() -> Element {
    let controller = use_context::<AccountController>();
    let form = controller.state.read().create_form.clone();
    let submitting = form.submitting;

    let on_submit = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            controller.create_playlist();
        }
    };
    let on_name = {
        let controller = controller.clone();
        move |evt: FormEvent| controller.set_new_playlist_name(evt.value())
    };
    let on_description = {
        let controller = controller.clone();
        move |evt: FormEvent| controller.set_new_playlist_description(evt.value())
    };
    let on_public = move |evt: FormEvent| controller.set_new_playlist_public(evt.checked());

    rsx! {
        form { class: "create-playlist", onsubmit: on_submit,
            h3 { class: "form-title", "New playlist" }
            input {
                class: "text-input",
                r#type: "text",
                placeholder: "Playlist name",
                value: "{form.name}",
                disabled: submitting,
                oninput: on_name,
            }
            input {
                class: "text-input",
                r#type: "text",
                placeholder: "Description (optional)",
                value: "{form.description}",
                disabled: submitting,
                oninput: on_description,
            }
            label { class: "checkbox-label",
                input {
                    r#type: "checkbox",
                    checked: form.public,
                    disabled: submitting,
                    onchange: on_public,
                }
                "Public"
            }
            button { class: "btn btn-primary", r#type: "submit", disabled: submitting,
                if submitting {
                    Icon { name: "loader", class: "icon" }
                    "Creating..."
                } else {
                    Icon { name: "plus", class: "icon" }
                    "Create playlist"
                }
            }
            if let Some(error) = form.error.clone() {
                p { class: "form-message status-error", "{error}" }
            }
            if let Some(feedback) = form.feedback.clone() {
                p { class: "form-message status-success", "{feedback}" }
            }
        }
    }
}
