//! Authentication flags shared with the admin route guard.

use common::admin_guard::AuthFlags;
use dioxus::prelude::*;

/// Provided once at the app root by `App` (see `app.rs`).
///
/// Nothing in this crate signs a user in. The identity provider's callback is
/// expected to land on `LoginPage` (`/login?return_to=...`), write `flags` with
/// `is_authenticated` and `is_admin` and set `user_name`, then navigate to
/// `return_to`. Until that callback is wired up the flags stay at their default
/// and `AdminGuard` always redirects to the login page. `logout` is the only
/// writer here.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    pub flags: Signal<AuthFlags>,
    pub user_name: Signal<Option<String>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            flags: Signal::new(AuthFlags::default()),
            user_name: Signal::new(None),
        }
    }

    pub fn logout(&mut self) {
        dioxus::logger::tracing::info!("logging out {:?}", self.user_name.peek());
        self.flags.set(AuthFlags::default());
        self.user_name.set(None);
    }
}
