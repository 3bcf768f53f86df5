use crate::api::PlaylistItem;
use crate::components::views::pager::Pager;
use crate::components::{AccountController, Icon};
use dioxus::prelude::*;

fn item_meta(item: &PlaylistItem) -> String {
    match item.album_name() {
        Some(album) => format!("{} · {album}", item.subtitle()),
        None => item.subtitle(),
    }
}

#[component]
pub fn PlaylistItemsView() -> Element {
    let controller = use_context::<AccountController>();
    let panel = controller.state.read().items.clone();
    let title = panel
        .selected()
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| "Tracks".to_string());
    let status = panel.status_text();
    let has_error = panel.error.is_some();
    let rows: Vec<(usize, PlaylistItem)> = panel.items.iter().cloned().enumerate().collect();
    let show_pager = !panel.items.is_empty();

    rsx! {
        section { class: "panel items-panel",
            div { class: "panel-header",
                Icon { name: "music", class: "icon" }
                h2 { class: "panel-title", "{title}" }
                if panel.loading {
                    Icon { name: "loader", class: "icon" }
                }
            }

            if let Some(status) = status {
                p { class: if has_error { "panel-status status-error" } else { "panel-status" }, "{status}" }
            }

            ol { class: "track-list",
                for (index, item) in rows {
                    li { key: "{panel.offset}-{index}", class: "track-row",
                        span { class: "track-title", "{item.title()}" }
                        span { class: "track-meta", "{item_meta(&item)}" }
                    }
                }
            }

            if show_pager {
                Pager {
                    summary: panel.summary_text(),
                    previous: panel.previous_offset(),
                    next: panel.next_offset(),
                    on_page: move |offset| controller.load_playlist_items(offset),
                }
            }
        }
    }
}
