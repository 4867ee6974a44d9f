//! # Signed-in user
//!
//! [`UserInfo`] is the identity the create page reads to pre-fill a card. It
//! is `Serialize + Deserialize + PartialEq` so it can cross the server/client
//! boundary via Dioxus server functions and be stored in the session by the
//! login system that signs users in.
//!
//! The helper [`UserInfo::display_name`] returns the user's name or falls back
//! to their email address.

use serde::{Deserialize, Serialize};

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>) -> UserInfo {
        UserInfo {
            id: "1".to_string(),
            email: "a@b.com".to_string(),
            name: name.map(str::to_string),
            avatar_url: None,
            provider: "github".to_string(),
        }
    }

    #[test]
    fn test_display_name_prefers_name() {
        assert_eq!(user(Some("Ada")).display_name(), "Ada");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(user(None).display_name(), "a@b.com");
        assert_eq!(user(Some("")).display_name(), "a@b.com");
    }
}
