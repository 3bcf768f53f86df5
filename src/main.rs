use dioxus::prelude::*;

mod actions;
mod api;
mod browser;
mod components;
mod config;
mod state;
mod storage;

use components::AppShell;
use config::ClientConfig;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    let config = ClientConfig::load();
    if let Err(err) = dioxus::logger::init(config.log_level) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#1db954" }
        document::Title { "Spotify account" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
