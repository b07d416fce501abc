use crate::io::state::PreferenceStore;
use crate::model::task::TaskList;

impl TaskList {
    /// Empty list with the theme flag restored from `prefs` (light if unset)
    pub fn with_preferences(prefs: &dyn PreferenceStore) -> Self {
        let mut list = TaskList::new();
        load_theme(&mut list, prefs);
        list
    }
}

/// Restore the theme flag. Nothing stored means light.
pub fn load_theme(list: &mut TaskList, prefs: &dyn PreferenceStore) {
    list.dark_mode = prefs.load().unwrap_or(false);
}

/// Set the theme flag, persisting only when it actually changes.
/// Returns true if the flag changed.
pub fn set_theme(list: &mut TaskList, dark: bool, prefs: &mut dyn PreferenceStore) -> bool {
    if list.dark_mode == dark {
        return false;
    }
    list.dark_mode = dark;
    prefs.save(dark);
    tracing::info!(dark, "theme changed");
    true
}

/// Flip the theme flag and persist it. Returns the new value.
pub fn toggle_theme(list: &mut TaskList, prefs: &mut dyn PreferenceStore) -> bool {
    let dark = !list.dark_mode;
    set_theme(list, dark, prefs);
    dark
}
