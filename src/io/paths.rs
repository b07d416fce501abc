use std::path::{Path, PathBuf};

/// Directory name under the user's config root
const APP_DIR: &str = "tasklist";

/// Resolve the config directory: explicit override, then
/// `$XDG_CONFIG_HOME/tasklist`, then `$HOME/.config/tasklist`.
pub fn config_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.to_path_buf());
    }
    config_dir_from(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn config_dir_from(xdg: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    let root = match xdg.filter(|p| !p.as_os_str().is_empty()) {
        Some(p) => p,
        None => home.filter(|p| !p.as_os_str().is_empty())?.join(".config"),
    };
    Some(root.join(APP_DIR))
}

/// Path of the TUI log file
pub fn log_path(config_dir: &Path) -> PathBuf {
    config_dir.join("tasklist.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let dir = config_dir(Some(Path::new("/tmp/custom")));
        assert_eq!(dir, Some(PathBuf::from("/tmp/custom")));
    }

    #[test]
    fn xdg_preferred_over_home() {
        let dir = config_dir_from(Some("/xdg".into()), Some("/home/u".into()));
        assert_eq!(dir, Some(PathBuf::from("/xdg/tasklist")));
    }

    #[test]
    fn home_fallback() {
        let dir = config_dir_from(None, Some("/home/u".into()));
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/tasklist")));
        let dir = config_dir_from(Some("".into()), Some("/home/u".into()));
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/tasklist")));
    }

    #[test]
    fn nothing_resolvable() {
        assert_eq!(config_dir_from(None, None), None);
    }
}
