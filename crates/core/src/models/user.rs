use serde::{Deserialize, Serialize};

/// Admin API user representation.
///
/// Listings return a superset of these fields; creation sends only the ones
/// that are set. Unknown response fields are ignored on deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRepresentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Milliseconds since the epoch, set by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
}

impl UserRepresentation {
    /// A new enabled account, ready to POST.
    pub fn new_enabled(username: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            email: Some(email.to_string()),
            enabled: Some(true),
            ..Self::default()
        }
    }
}
