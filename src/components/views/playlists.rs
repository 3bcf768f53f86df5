use crate::api::Playlist;
use crate::components::views::create_playlist::CreatePlaylistCard;
use crate::components::views::pager::Pager;
use crate::components::{AccountController, Icon};
use dioxus::prelude::*;

#[component]
pub fn PlaylistsView() -> Element {
    let controller = use_context::<AccountController>();
    let state = controller.state.read();
    let panel = &state.playlists;

    let rows: Vec<(Playlist, String, bool)> = panel
        .items
        .iter()
        .map(|playlist| {
            (
                playlist.clone(),
                panel.row_label(playlist),
                state.items.is_selected(&playlist.id),
            )
        })
        .collect();
    let status = panel.status_text();
    let has_error = panel.error.is_some();
    let loading = panel.loading;
    let show_pager = !panel.items.is_empty();
    let summary = panel.summary_text();
    let previous = panel.previous_offset();
    let next = panel.next_offset();
    drop(state);

    rsx! {
        section { class: "panel playlists-panel",
            div { class: "panel-header",
                Icon { name: "playlist", class: "icon" }
                h2 { class: "panel-title", "Your playlists" }
                if loading {
                    Icon { name: "loader", class: "icon" }
                }
            }

            CreatePlaylistCard {}

            if let Some(status) = status {
                p { class: if has_error { "panel-status status-error" } else { "panel-status" }, "{status}" }
            }

            ul { class: "playlist-list",
                for (playlist, label, selected) in rows {
                    PlaylistRow {
                        key: "{playlist.id}",
                        playlist: playlist.clone(),
                        label,
                        selected,
                    }
                }
            }

            if show_pager {
                Pager {
                    summary,
                    previous,
                    next,
                    on_page: move |offset| controller.load_playlists(offset),
                }
            }
        }
    }
}

#[component]
fn PlaylistRow(playlist: Playlist, label: String, selected: bool) -> Element {
    let controller = use_context::<AccountController>();
    let playlist_id = playlist.id.clone();
    let playlist_name = playlist.display_name().to_string();
    let owner = playlist.owner_name().to_string();
    let total = playlist.item_total();

    rsx! {
        li { class: if selected { "playlist-row selected" } else { "playlist-row" },
            button {
                class: "playlist-row-button",
                onclick: move |_| controller.select_playlist(playlist_id.clone(), playlist_name.clone()),
                span { class: "playlist-name", "{label}" }
                span { class: "playlist-meta", "{owner} · {total} items" }
            }
        }
    }
}
