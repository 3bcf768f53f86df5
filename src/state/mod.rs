//! View-model state for the account page. Each panel owns its fields and its
//! request slot; everything else reaches them through [`StateHandle`].

pub mod playlist_items;
pub mod playlists;
pub mod request;
pub mod search;
pub mod session;

pub use playlist_items::*;
pub use playlists::*;
pub use request::*;
pub use search::*;
pub use session::*;

#[derive(Debug, Clone, Default)]
pub struct AccountState {
    pub session: SessionState,
    pub playlists: PlaylistsPanel,
    pub create_form: CreatePlaylistForm,
    pub items: PlaylistItemsPanel,
    pub search: SearchPanel,
}

impl AccountState {
    pub fn reset_panels(&mut self) {
        self.playlists.reset();
        self.create_form = CreatePlaylistForm::default();
        self.items.reset();
        self.search.reset();
    }

    pub fn connect(&mut self, display_name: Option<String>) {
        self.reset_panels();
        self.session.connect(display_name);
    }

    pub fn disconnect(&mut self) {
        self.reset_panels();
        self.session.disconnect();
    }
}

/// The one way actions read or mutate page state. The UI implements it for a
/// Dioxus signal; tests use a plain `RefCell`.
pub trait StateHandle {
    fn update<R>(&self, f: impl FnOnce(&mut AccountState) -> R) -> R;
    fn read_with<R>(&self, f: impl FnOnce(&AccountState) -> R) -> R;
}

#[cfg(test)]
impl StateHandle for std::rc::Rc<std::cell::RefCell<AccountState>> {
    fn update<R>(&self, f: impl FnOnce(&mut AccountState) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn read_with<R>(&self, f: impl FnOnce(&AccountState) -> R) -> R {
        f(&self.borrow())
    }
}

pub fn previous_offset(offset: u32, limit: u32) -> Option<u32> {
    (offset > 0).then(|| offset.saturating_sub(limit))
}

pub fn next_offset(offset: u32, limit: u32, total: u32) -> Option<u32> {
    let next = offset.saturating_add(limit);
    (next < total).then_some(next)
}

/// `"Showing a-b of n"`, or empty when the page has no rows.
pub fn page_range_text(offset: u32, shown: usize, total: u32) -> String {
    if shown == 0 {
        return String::new();
    }
    let first = offset.saturating_add(1);
    let last = offset.saturating_add(shown as u32);
    format!("Showing {first}-{last} of {total}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_offset_never_goes_negative() {
        assert_eq!(previous_offset(0, 10), None);
        assert_eq!(previous_offset(5, 10), Some(0));
        assert_eq!(previous_offset(30, 10), Some(20));
    }

    #[test]
    fn next_offset_stops_at_total() {
        assert_eq!(next_offset(0, 10, 10), None);
        assert_eq!(next_offset(0, 10, 11), Some(10));
        assert_eq!(next_offset(u32::MAX - 1, 10, u32::MAX), None);
    }

    #[test]
    fn range_text_is_empty_without_rows() {
        assert_eq!(page_range_text(0, 0, 0), "");
        assert_eq!(page_range_text(20, 0, 12), "");
        assert_eq!(page_range_text(20, 5, 25), "Showing 21-25 of 25");
    }

    #[test]
    fn disconnect_resets_every_panel() {
        let mut state = AccountState::default();
        state.connect(Some("Ana".to_string()));
        state.items.select("p1".to_string(), "Mix".to_string());
        state.search.query = "daft".to_string();
        let (ticket, _) = state.playlists.begin_load();

        state.disconnect();
        assert!(ticket.is_cancelled());
        assert_eq!(state.items.selected(), None);
        assert!(state.search.query.is_empty());
        assert_eq!(state.session.step, ConnectionStep::Disconnected);
    }
}
