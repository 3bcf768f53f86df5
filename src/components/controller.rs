//! Binds UI events to the async actions and owns the page's state signal.

use crate::actions;
use crate::api::http::default_transport;
use crate::api::{SpotifyApi, Track};
use crate::browser;
use crate::config::ClientConfig;
use crate::state::{AccountState, SearchRequest, StateHandle};
use dioxus::prelude::*;
use std::future::Future;

impl StateHandle for Signal<AccountState> {
    fn update<R>(&self, f: impl FnOnce(&mut AccountState) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut state)
    }

    fn read_with<R>(&self, f: impl FnOnce(&AccountState) -> R) -> R {
        f(&self.peek())
    }
}

#[derive(Clone, PartialEq)]
pub struct AccountController {
    pub state: Signal<AccountState>,
    api: SpotifyApi,
    api_base: String,
}

impl AccountController {
    pub fn new(state: Signal<AccountState>, config: &ClientConfig) -> Self {
        Self {
            state,
            api: SpotifyApi::new(default_transport(&config.api_base)),
            api_base: config.api_base.clone(),
        }
    }

    fn run<F, Fut>(&self, job: F)
    where
        F: FnOnce(SpotifyApi, Signal<AccountState>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn(job(self.api.clone(), self.state));
    }

    pub fn bootstrap(&self) {
        browser::clean_callback_url();
        self.run(|api, state| async move { actions::bootstrap(&api, &state).await });
    }

    pub fn connect(&self) {
        browser::redirect_to_login(&self.api_base);
    }

    pub fn logout(&self) {
        self.run(|api, state| async move { actions::logout(&api, &state).await });
    }

    pub fn load_playlists(&self, offset: u32) {
        self.run(move |api, state| async move {
            actions::load_playlists(&api, &state, offset).await
        });
    }

    pub fn select_playlist(&self, playlist_id: String, playlist_name: String) {
        self.run(move |api, state| async move {
            actions::select_playlist(&api, &state, playlist_id, playlist_name).await
        });
    }

    pub fn load_playlist_items(&self, offset: u32) {
        self.run(move |api, state| async move {
            actions::load_playlist_items(&api, &state, offset).await
        });
    }

    pub fn create_playlist(&self) {
        self.run(|api, state| async move { actions::create_playlist(&api, &state).await });
    }

    pub fn search(&self) {
        self.run(|api, state| async move {
            actions::search_tracks(&api, &state, SearchRequest::NewQuery).await
        });
    }

    pub fn search_page(&self, offset: u32) {
        self.run(move |api, state| async move {
            actions::search_tracks(&api, &state, SearchRequest::Page(offset)).await
        });
    }

    pub fn add_track(&self, track: Track) {
        self.run(move |api, state| async move { actions::add_track(&api, &state, track).await });
    }

    pub fn toggle_library(&self, track: Track) {
        self.run(move |api, state| async move {
            actions::toggle_library_track(&api, &state, track).await
        });
    }

    pub fn set_search_query(&self, query: String) {
        self.state.update(|s| s.search.query = query);
    }

    pub fn set_new_playlist_name(&self, name: String) {
        self.state.update(|s| s.create_form.name = name);
    }

    pub fn set_new_playlist_description(&self, description: String) {
        self.state.update(|s| s.create_form.description = description);
    }

    pub fn set_new_playlist_public(&self, public: bool) {
        self.state.update(|s| s.create_form.public = public);
    }
}
