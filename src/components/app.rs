use crate::components::views::{ConnectView, PlaylistItemsView, PlaylistsView, SearchView};
use crate::components::{AccountController, Icon};
use crate::config::ClientConfig;
use crate::state::{AccountState, ConnectionStep};
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let state = use_signal(AccountState::default);
    let controller = use_context_provider(|| AccountController::new(state, &ClientConfig::load()));
    let session = use_memo(move || state.read().session.clone());

    // Strip the OAuth callback and ask the server who we are, once.
    {
        let controller = controller.clone();
        use_effect(move || controller.bootstrap());
    }

    let session = session();
    let logging_out = session.logging_out;

    rsx! {
        div { class: "account-page",
            header { class: "account-header",
                div {
                    h1 { class: "page-title", "Spotify account" }
                    p { class: "status-line", "{session.status_text()}" }
                    if let Some(error) = session.error.clone() {
                        p { class: "status-error", "{error}" }
                    }
                }
                {match session.step {
                    ConnectionStep::Connected => rsx! {
                        button {
                            class: "btn btn-secondary",
                            disabled: logging_out,
                            onclick: move |_| controller.logout(),
                            Icon { name: "logout".to_string(), class: "icon".to_string() }
                            if logging_out { "Logging out..." } else { "Log out" }
                        }
                    },
                    ConnectionStep::Disconnected => rsx! {},
                    ConnectionStep::Checking => rsx! {
                        Icon { name: "loader".to_string(), class: "icon".to_string() }
                    },
                }}
            }

            {match session.step {
                ConnectionStep::Connected => rsx! {
                    div { class: "panel-grid",
                        PlaylistsView {}
                        PlaylistItemsView {}
                        SearchView {}
                    }
                },
                ConnectionStep::Disconnected => rsx! {
                    ConnectView {}
                },
                ConnectionStep::Checking => rsx! {},
            }}
        }
    }
}
