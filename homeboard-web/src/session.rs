//! Local demo-account session controller.
//!
//! Credentials never leave the browser: `authenticate` is a plaintext lookup
//! against two fixed demo accounts, and the resulting profile is persisted to
//! `localStorage` so a reload stays signed in. There is no credential
//! security here and none intended.

use shared::models::{Profile, Session};

use crate::storage;

const AUTH_KEY: &str = "myapp_auth";
const USER_KEY: &str = "myapp_user";

/// The demo accounts this build accepts: username, password, email, name.
const ACCOUNTS: [(&str, &str, &str, &str); 2] = [
    (
        "Mohamed",
        "P@#$w0rd",
        "MohamedAhmed@gmail.com",
        "Mohamed Ahmed",
    ),
    ("admin", "password", "admin@dashboardapp.com", "Administrator"),
];

/// Check `username`/`password` against the demo accounts. Any pair outside
/// the fixed set yields `None` with no side effects.
#[must_use]
pub fn authenticate(username: &str, password: &str) -> Option<Profile> {
    ACCOUNTS
        .iter()
        .find(|(account, secret, ..)| *account == username && *secret == password)
        .map(|(account, _, email, name)| Profile {
            username: (*account).to_string(),
            email: (*email).to_string(),
            name: (*name).to_string(),
        })
}

/// Rehydrate the persisted session. Absent or unreadable entries fall back
/// to the signed-out defaults.
#[must_use]
pub fn restore() -> Session {
    Session {
        is_authenticated: storage::get(AUTH_KEY, false),
        user: storage::get(USER_KEY, None),
    }
}

/// Validate credentials and persist the session on success. A failed login
/// touches neither storage nor state.
pub fn login(username: &str, password: &str) -> Option<Session> {
    let profile = authenticate(username, password)?;
    storage::set(AUTH_KEY, &true);
    storage::set(USER_KEY, &profile);
    Some(Session::signed_in(profile))
}

/// Tear the session down: clear the flag in memory and storage, and drop the
/// persisted profile.
pub fn logout(session: &mut Session) {
    session.is_authenticated = false;
    session.user = None;
    storage::set(AUTH_KEY, &false);
    storage::remove(USER_KEY);
}
