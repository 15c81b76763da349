use shared::models::Session;
use yewdux::prelude::*;

use crate::session;

/// Application-wide state.
///
/// `Store::new` rehydrates the session from storage, so route guards see the
/// persisted sign-in state on the very first render after a reload.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub session: Session,
}

impl Store for AppState {
    fn new(_cx: &yewdux::Context) -> Self {
        Self {
            session: session::restore(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}
