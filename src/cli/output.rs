use std::path::Path;

use serde::Serialize;

use crate::model::AppConfig;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: &'static str,
    pub dark: bool,
    /// False when nothing was stored and the default applies
    pub stored: bool,
}

#[derive(Serialize)]
pub struct ConfigJson {
    pub config_dir: String,
    pub name: String,
    pub email: String,
    pub show_key_hints: bool,
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

pub fn theme_json(dark: bool, stored: bool) -> ThemeJson {
    ThemeJson {
        theme: theme_name(dark),
        dark,
        stored,
    }
}

pub fn config_json(config_dir: &Path, config: &AppConfig) -> ConfigJson {
    ConfigJson {
        config_dir: config_dir.display().to_string(),
        name: config.profile.name.clone(),
        email: config.profile.email.clone(),
        show_key_hints: config.ui.show_key_hints,
    }
}

pub fn format_config(config_dir: &Path, config: &AppConfig) -> String {
    let email = if config.profile.email.is_empty() {
        "(none)"
    } else {
        &config.profile.email
    };
    let hints = if config.ui.show_key_hints { "on" } else { "off" };
    format!(
        "config dir: {}\nname: {}\nemail: {}\nkey hints: {}",
        config_dir.display(),
        config.profile.name,
        email,
        hints
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_text_lists_settings() {
        let mut config = AppConfig::default();
        config.profile.name = "Ada".into();
        config.ui.show_key_hints = false;
        assert_eq!(
            format_config(Path::new("/tmp/tl"), &config),
            "config dir: /tmp/tl\nname: Ada\nemail: (none)\nkey hints: off"
        );
    }

    #[test]
    fn theme_json_names_theme() {
        let json = serde_json::to_string(&theme_json(true, false)).unwrap();
        assert_eq!(json, r#"{"theme":"dark","dark":true,"stored":false}"#);
    }
}
