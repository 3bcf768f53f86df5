//! Async workflows behind every user action. Each one mutates state through a
//! [`StateHandle`](crate::state::StateHandle), awaits the API, then applies the
//! outcome to its own panel. Failures never leave the panel they belong to.

mod playlists;
mod search;
mod session;

pub use playlists::*;
pub use search::*;
pub use session::*;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::api::http::testing::MockTransport;
    use crate::api::SpotifyApi;
    use crate::state::AccountState;
    use std::cell::RefCell;
    use std::rc::Rc;

    pub fn harness() -> (Rc<MockTransport>, SpotifyApi, Rc<RefCell<AccountState>>) {
        let transport = MockTransport::new();
        let api = SpotifyApi::new(transport.clone());
        let state = Rc::new(RefCell::new(AccountState::default()));
        (transport, api, state)
    }
}
