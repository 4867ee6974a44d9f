//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brand_icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub mod views;

pub const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod chrome;
pub use chrome::{Footer, Header};

mod card_form;
pub use card_form::SocialCardForm;

mod card_preview;
pub use card_preview::SocialCardPreview;

/// Page copy bundled with the app from `socialcard.toml`.
pub fn bundled_config() -> card::SocialCardConfig {
    card::SocialCardConfig::from_toml_or_default(include_str!("../socialcard.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let text = include_str!("../socialcard.toml");
        let config = card::SocialCardConfig::from_toml(text).unwrap();
        assert_eq!(config, bundled_config());
        assert_eq!(config, card::SocialCardConfig::default());
    }
}
