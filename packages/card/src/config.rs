//! # Page configuration: `socialcard.toml`
//!
//! The copy shown on the create page and the message shown after saving,
//! embedded into the platform binaries at build time.
//!
//! ```toml
//! [page]
//! title = "Create Your Social Card"
//! subtitle = "Fill in your details to generate a professional social card that you can share online"
//!
//! [save]
//! title = "Card saved!"
//! description = "Your card has been saved successfully."
//! ```
//!
//! Every section is optional, so a missing or empty file is equivalent to
//! [`SocialCardConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `socialcard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialCardConfig {
    #[serde(default)]
    pub page: PageCopy,
    #[serde(default)]
    pub save: SaveMessages,
}

/// Heading and subtitle of the create page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageCopy {
    #[serde(default = "default_page_title")]
    pub title: String,
    #[serde(default = "default_page_subtitle")]
    pub subtitle: String,
}

fn default_page_title() -> String {
    "Create Your Social Card".to_string()
}

fn default_page_subtitle() -> String {
    "Fill in your details to generate a professional social card that you can share online"
        .to_string()
}

impl Default for PageCopy {
    fn default() -> Self {
        Self {
            title: default_page_title(),
            subtitle: default_page_subtitle(),
        }
    }
}

/// Notification shown when the user saves a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveMessages {
    #[serde(default = "default_save_title")]
    pub title: String,
    #[serde(default = "default_save_description")]
    pub description: String,
}

fn default_save_title() -> String {
    "Card saved!".to_string()
}

fn default_save_description() -> String {
    "Your card has been saved successfully.".to_string()
}

impl Default for SaveMessages {
    fn default() -> Self {
        Self {
            title: default_save_title(),
            description: default_save_description(),
        }
    }
}

impl SocialCardConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "socialcard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, falling back to the defaults when the text is invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Invalid {}, using defaults: {}", Self::filename(), e);
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SocialCardConfig::from_toml("").unwrap();
        assert_eq!(config, SocialCardConfig::default());
        assert_eq!(config.save.title, "Card saved!");
        assert_eq!(config.save.description, "Your card has been saved successfully.");
        assert_eq!(config.page.title, "Create Your Social Card");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = SocialCardConfig::from_toml(
            r#"
            [save]
            title = "Stored"
            "#,
        )
        .unwrap();
        assert_eq!(config.save.title, "Stored");
        assert_eq!(config.save.description, default_save_description());
        assert_eq!(config.page, PageCopy::default());
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        assert!(SocialCardConfig::from_toml("[save\ntitle =").is_err());
        let config = SocialCardConfig::from_toml_or_default("[save\ntitle =");
        assert_eq!(config, SocialCardConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = SocialCardConfig::default();
        config.page.subtitle = "Share it".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(SocialCardConfig::from_toml(&text).unwrap(), config);
    }
}
