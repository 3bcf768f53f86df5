use crate::api::Track;
use crate::components::views::pager::Pager;
use crate::components::{AccountController, Icon};
use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
struct TrackButtons {
    add_label: &'static str,
    add_disabled: bool,
    library_label: &'static str,
    library_disabled: bool,
}

#[component]
pub fn SearchView() -> Element {
    let controller = use_context::<AccountController>();
    let state = controller.state.read();
    let panel = &state.search;
    let has_selection = state.items.selected().is_some();

    let rows: Vec<(usize, Track, TrackButtons)> = panel
        .items
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let buttons = TrackButtons {
                add_label: panel.add_button_label(track),
                add_disabled: panel.add_disabled(track, has_selection),
                library_label: panel.library_button_label(track),
                library_disabled: panel.library_disabled(track),
            };
            (index, track.clone(), buttons)
        })
        .collect();
    let query = panel.query.clone();
    let loading = panel.loading;
    let status = panel.status_text();
    let has_error = panel.error.is_some();
    let show_pager = !panel.items.is_empty();
    let summary = panel.summary_text();
    let previous = panel.previous_offset();
    let next = panel.next_offset();
    let offset = panel.offset;
    drop(state);

    let on_submit = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            controller.search();
        }
    };
    let on_query = {
        let controller = controller.clone();
        move |evt: FormEvent| controller.set_search_query(evt.value())
    };

    rsx! {
        section { class: "panel search-panel",
            div { class: "panel-header",
                Icon { name: "search", class: "icon" }
                h2 { class: "panel-title", "Search tracks" }
            }

            form { class: "search-form", onsubmit: on_submit,
                input {
                    class: "text-input",
                    r#type: "search",
                    placeholder: "Song, artist or album",
                    value: "{query}",
                    oninput: on_query,
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: loading,
                    if loading {
                        Icon { name: "loader", class: "icon" }
                    }
                    "Search"
                }
            }

            if let Some(status) = status {
                p { class: if has_error { "panel-status status-error" } else { "panel-status" }, "{status}" }
            }

            ul { class: "track-list",
                for (index, track, buttons) in rows {
                    TrackRow { key: "{offset}-{index}", track, buttons }
                }
            }

            if show_pager {
                Pager {
                    summary,
                    previous,
                    next,
                    on_page: move |offset| controller.search_page(offset),
                }
            }
        }
    }
}

#[component]
fn TrackRow(track: Track, buttons: TrackButtons) -> Element {
    let controller = use_context::<AccountController>();
    let saved = buttons.library_label == "Remove";
    let meta = match track.album_name() {
        Some(album) => format!("{} · {album}", track.artist_names()),
        None => track.artist_names(),
    };

    let add_controller = controller.clone();
    let add_track = track.clone();
    let library_track = track.clone();

    rsx! {
        li { class: "track-row",
            div { class: "track-text",
                span { class: "track-title", "{track.title()}" }
                span { class: "track-meta", "{meta}" }
            }
            div { class: "track-actions",
                button {
                    class: "btn btn-secondary",
                    disabled: buttons.add_disabled,
                    onclick: move |_| add_controller.add_track(add_track.clone()),
                    Icon { name: "plus", class: "icon" }
                    "{buttons.add_label}"
                }
                button {
                    class: "btn btn-ghost",
                    disabled: buttons.library_disabled,
                    onclick: move |_| controller.toggle_library(library_track.clone()),
                    Icon { name: if saved { "heart-filled".to_string() } else { "heart".to_string() }, class: "icon" }
                    "{buttons.library_label}"
                }
            }
        }
    }
}
