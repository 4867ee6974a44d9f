//! Session data types.

use crate::models::UserInfo;
use crate::settings::IdentitySettings;

/// Key under which the login system stores the signed-in [`UserInfo`].
pub const SESSION_USER_KEY: &str = "user";

/// Pick the identity to report: the session user, otherwise the configured
/// development identity, otherwise nobody.
pub fn resolve_identity(
    session_user: Option<UserInfo>,
    identity: &IdentitySettings,
) -> Option<UserInfo> {
    if session_user.is_some() {
        return session_user;
    }
    let email = identity.dev_email.trim();
    if email.is_empty() {
        return None;
    }
    let name = identity.dev_name.trim();
    Some(UserInfo {
        id: "dev".to_string(),
        email: email.to_string(),
        name: (!name.is_empty()).then(|| name.to_string()),
        avatar_url: None,
        provider: "dev".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_user() -> UserInfo {
        UserInfo {
            id: "42".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            avatar_url: None,
            provider: "github".to_string(),
        }
    }

    #[test]
    fn test_no_identity_by_default() {
        assert_eq!(resolve_identity(None, &IdentitySettings::default()), None);
    }

    #[test]
    fn test_session_user_wins_over_dev_identity() {
        let identity = IdentitySettings {
            dev_email: "dev@localhost".to_string(),
            dev_name: String::new(),
        };
        assert_eq!(
            resolve_identity(Some(session_user()), &identity),
            Some(session_user())
        );
    }

    #[test]
    fn test_dev_identity_fallback() {
        let identity = IdentitySettings {
            dev_email: " dev@localhost ".to_string(),
            dev_name: "Dev".to_string(),
        };
        let user = resolve_identity(None, &identity).unwrap();
        assert_eq!(user.email, "dev@localhost");
        assert_eq!(user.display_name(), "Dev");
        assert_eq!(user.provider, "dev");
    }
}
