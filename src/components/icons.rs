use dioxus::prelude::*;

/// Stroke icons drawn on a 24x24 grid.
#[component]
pub fn Icon(#[props(into)] name: String, #[props(into)] class: String) -> Element {
    let shape = match name.as_str() {
        "search" => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "M21 21l-4.35-4.35" }
        },
        "playlist" => rsx! {
            path { d: "M21 15V6" }
            path { d: "M18.5 18a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5Z" }
            path { d: "M12 12H3" }
            path { d: "M16 6H3" }
            path { d: "M12 18H3" }
        },
        "music" => rsx! {
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
        },
        "plus" => rsx! {
            path { d: "M12 5v14" }
            path { d: "M5 12h14" }
        },
        "heart" | "heart-filled" => rsx! {
            path {
                d: "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z",
                fill: if name == "heart-filled" { "currentColor" } else { "none" },
            }
        },
        "logout" => rsx! {
            path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
            polyline { points: "16 17 21 12 16 7" }
            path { d: "M21 12H9" }
        },
        "chevron-left" => rsx! {
            polyline { points: "15 18 9 12 15 6" }
        },
        "chevron-right" => rsx! {
            polyline { points: "9 18 15 12 9 6" }
        },
        "loader" => rsx! {
            circle {
                cx: "12",
                cy: "12",
                r: "10",
                opacity: "0.25",
            }
            path { d: "M12 2a10 10 0 0 1 10 10", opacity: "0.75" }
        },
        _ => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
        },
    };

    let class = if name == "loader" {
        format!("{class} animate-spin")
    } else {
        class
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            {shape}
        }
    }
}
