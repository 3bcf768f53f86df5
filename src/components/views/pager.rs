use crate::components::Icon;
use dioxus::prelude::*;

/// Previous/next controls. A `None` offset disables that side.
#[component]
pub fn Pager(
    summary: String,
    previous: Option<u32>,
    next: Option<u32>,
    on_page: EventHandler<u32>,
) -> Element {
    rsx! {
        div { class: "pager",
            button {
                class: "btn btn-ghost",
                disabled: previous.is_none(),
                onclick: move |_| {
                    if let Some(offset) = previous {
                        on_page.call(offset);
                    }
                },
                Icon { name: "chevron-left", class: "icon" }
                "Previous"
            }
            span { class: "pager-summary", "{summary}" }
            button {
                class: "btn btn-ghost",
                disabled: next.is_none(),
                onclick: move |_| {
                    if let Some(offset) = next {
                        on_page.call(offset);
                    }
                },
                "Next"
                Icon { name: "chevron-right", class: "icon" }
            }
        }
    }
}
