//! Server settings: built-in defaults, then an optional `config.toml`, then
//! `SOCIALCARD_*` environment variables (sections split by `__`, e.g.
//! `SOCIALCARD_IDENTITY__DEV_EMAIL`).

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[allow(unused)]
pub struct IdentitySettings {
    /// Email reported when the session holds no user. Empty disables it.
    #[serde(default)]
    pub dev_email: String,
    #[serde(default)]
    pub dev_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[allow(unused)]
pub struct SessionSettings {
    pub secure: bool,
    /// Inactivity expiry in days.
    pub expiry_days: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            secure: false,
            expiry_days: 7,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[allow(unused)]
pub struct Settings {
    pub identity: IdentitySettings,
    pub session: SessionSettings,
}

#[cfg(feature = "server")]
impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File, FileFormat};

        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("identity.dev_email", "")?
            .set_default("identity.dev_name", "")?
            .set_default("session.secure", false)?
            .set_default("session.expiry_days", 7)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("SOCIALCARD")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

/// Settings loaded once per process. Invalid settings fall back to defaults.
#[cfg(feature = "server")]
pub fn get_settings() -> &'static Settings {
    static SETTINGS: std::sync::OnceLock<Settings> = std::sync::OnceLock::new();
    SETTINGS.get_or_init(|| {
        Settings::new().unwrap_or_else(|e| {
            tracing::warn!("Invalid server settings, using defaults: {}", e);
            Settings::default()
        })
    })
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_settings() {
        set_var("SOCIALCARD_IDENTITY__DEV_EMAIL", "dev@localhost");
        set_var("SOCIALCARD_SESSION__SECURE", "true");
        let settings = Settings::new().unwrap_or_default();
        println!("Settings = {:?}", settings);
        assert_eq!(settings.identity.dev_email, "dev@localhost");
        assert_eq!(settings.identity.dev_name, "");
        assert!(settings.session.secure);
        assert_eq!(settings.session.expiry_days, 7);
    }
}
