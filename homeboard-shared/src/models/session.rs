use serde::{Deserialize, Serialize};

/// Identity of the signed-in local account.
///
/// This is the value persisted across reloads; it never contains a password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// The account's login handle.
    pub username: String,

    /// The account's email address.
    pub email: String,

    /// The account's full display name.
    pub name: String,
}

/// Whether someone is signed in, and who they are.
///
/// The default value is the signed-out state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// `true` once a login has succeeded and until logout.
    pub is_authenticated: bool,

    /// Profile of the signed-in account, `None` while signed out.
    pub user: Option<Profile>,
}

impl Session {
    /// A signed-in session for `profile`.
    #[must_use]
    pub fn signed_in(profile: Profile) -> Self {
        Self {
            is_authenticated: true,
            user: Some(profile),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_signed_out() {
        let session = Session::default();

        assert!(!session.is_authenticated);
        assert_eq!(session.user, None);
    }

    #[test]
    fn test_signed_in_session_carries_profile() {
        let profile = Profile {
            username: "admin".to_string(),
            email: "admin@dashboardapp.com".to_string(),
            name: "Administrator".to_string(),
        };
        let session = Session::signed_in(profile.clone());

        assert!(session.is_authenticated);
        assert_eq!(session.user, Some(profile));
    }

    #[test]
    fn test_profile_roundtrip() {
        let profile = Profile {
            username: "Mohamed".to_string(),
            email: "MohamedAhmed@gmail.com".to_string(),
            name: "Mohamed Ahmed".to_string(),
        };

        let json = serde_json::to_string(&profile).unwrap();
        let reparsed: Profile = serde_json::from_str(&json).unwrap();

        assert_eq!(reparsed, profile);
        assert!(json.contains("\"username\":\"Mohamed\""));
    }
}
