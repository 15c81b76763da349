use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Postal address attached to a directory user record.
///
/// The dashboard only ever reads the city; everything else the directory
/// sends is kept verbatim in [`extra`](Address::extra) so a record survives a
/// serialize round-trip unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    /// City name, when the directory provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Address fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A user record served by the remote directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's full display name.
    pub name: String,

    /// The user's handle, shown as `@username`.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// The user's postal address, when the directory provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Fields this client does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// City from the address block, if the record carries one.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.address
            .as_ref()
            .and_then(|address| address.city.as_deref())
    }
}
