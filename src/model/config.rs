use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Shown in the profile panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        ProfileConfig {
            name: default_name(),
            email: String::new(),
        }
    }
}

fn default_name() -> String {
    std::env::var("USER").unwrap_or_else(|_| "me".to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides for the light palette (key → "#RRGGBB")
    #[serde(default)]
    pub light: HashMap<String, String>,
    /// Color overrides for the dark palette (key → "#RRGGBB")
    #[serde(default)]
    pub dark: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            light: HashMap::new(),
            dark: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.ui.show_key_hints);
        assert!(config.ui.light.is_empty());
        assert!(config.ui.dark.is_empty());
        assert_eq!(config.profile.email, "");
    }

    #[test]
    fn full_config_parses() {
        let text = r##"
[profile]
name = "Reige J Bongo"
email = "admin@domain.com"

[ui]
show_key_hints = false

[ui.dark]
background = "#000000"
"##;
        let config: AppConfig = toml::from_str(text).unwrap();
        assert_eq!(config.profile.name, "Reige J Bongo");
        assert_eq!(config.profile.email, "admin@domain.com");
        assert!(!config.ui.show_key_hints);
        assert_eq!(
            config.ui.dark.get("background").map(String::as_str),
            Some("#000000")
        );
    }
}
