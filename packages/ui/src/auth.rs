//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Email of the signed-in user, if any.
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    /// Text for the header's user slot. `None` once the visitor is known to be
    /// anonymous.
    pub fn header_label(&self) -> Option<String> {
        if self.loading {
            return Some("Checking sign-in…".to_string());
        }
        self.user.as_ref().map(|u| u.display_name().to_string())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user becomes known.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that resolves the signed-in user.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::warn!("Failed to fetch current user: {}", e);
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> UserInfo {
        UserInfo {
            id: "1".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            avatar_url: None,
            provider: "dev".to_string(),
        }
    }

    #[test]
    fn test_header_label_while_loading() {
        let state = AuthState::default();
        assert!(state.loading);
        assert_eq!(state.header_label().as_deref(), Some("Checking sign-in…"));
        assert_eq!(state.email(), None);
    }

    #[test]
    fn test_header_label_after_resolution() {
        let signed_in = AuthState {
            user: Some(ada()),
            loading: false,
        };
        assert_eq!(signed_in.header_label().as_deref(), Some("Ada"));
        assert_eq!(signed_in.email(), Some("ada@example.com"));

        let anonymous = AuthState {
            user: None,
            loading: false,
        };
        assert_eq!(anonymous.header_label(), None);
    }
}
