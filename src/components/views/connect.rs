use crate::components::{AccountController, Icon};
use dioxus::prelude::*;

#[component]
pub fn ConnectView() -> Element {
    let controller = use_context::<AccountController>();

    rsx! {
        section { class: "panel connect-panel",
            Icon { name: "music", class: "icon-large" }
            h2 { class: "panel-title", "Connect your Spotify account" }
            p { class: "panel-hint",
                "Sign in with Spotify to browse your playlists, create new ones and add tracks."
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| controller.connect(),
                "Connect Spotify"
            }
        }
    }
}
