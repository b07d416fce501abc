use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde_json::{Map, Value};
use tempfile::NamedTempFile;

/// Key under which the theme flag is stored
pub const DARK_MODE_KEY: &str = "darkMode";

/// File name of the preference store inside the config directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Error type for preference file I/O
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("could not write preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Where the theme flag lives between sessions.
///
/// Availability problems are the implementation's business: `load` returns
/// None when nothing usable is stored, and `save` never fails the caller.
pub trait PreferenceStore {
    fn load(&self) -> Option<bool>;
    fn save(&mut self, dark: bool);
}

/// Decode a stored `"true"`/`"false"` value
pub fn decode_flag(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub fn encode_flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// Preferences kept as a flat JSON object of string values
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Store at `<config_dir>/preferences.json`
    pub fn in_dir(config_dir: &Path) -> Self {
        FilePreferences {
            path: config_dir.join(PREFERENCES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set the theme flag, reporting failures to the caller
    pub fn try_save(&self, dark: bool) -> Result<(), PreferenceError> {
        let mut entries = read_entries(&self.path).unwrap_or_default();
        entries.insert(
            DARK_MODE_KEY.to_string(),
            Value::String(encode_flag(dark).to_string()),
        );
        write_entries(&self.path, &entries)
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self) -> Option<bool> {
        let entries = read_entries(&self.path)?;
        entries
            .get(DARK_MODE_KEY)
            .and_then(Value::as_str)
            .and_then(decode_flag)
    }

    fn save(&mut self, dark: bool) {
        if let Err(e) = self.try_save(dark) {
            tracing::warn!(path = %self.path.display(), error = %e, "theme preference not saved");
        }
    }
}

/// Read the preference file. Missing or malformed files read as None.
/// Values of any JSON type are kept.
pub fn read_entries(path: &Path) -> Option<Map<String, Value>> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(entries) => Some(entries),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed preferences");
            None
        }
    }
}

/// Write the preference file atomically, creating its directory if needed
pub fn write_entries(
    path: &Path,
    entries: &Map<String, Value>,
) -> Result<(), PreferenceError> {
    let dir = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir)?;
    let content = serde_json::to_string_pretty(entries)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// In-memory store. Clones share state, so a test can keep a handle
/// while the app owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    value: Rc<RefCell<Option<bool>>>,
    saves: Rc<RefCell<Vec<bool>>>,
}

impl MemoryPreferences {
    pub fn new(initial: Option<bool>) -> Self {
        MemoryPreferences {
            value: Rc::new(RefCell::new(initial)),
            saves: Rc::default(),
        }
    }

    /// Every value passed to `save`, oldest first
    pub fn saves(&self) -> Vec<bool> {
        self.saves.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Option<bool> {
        *self.value.borrow()
    }

    fn save(&mut self, dark: bool) {
        *self.value.borrow_mut() = Some(dark);
        self.saves.borrow_mut().push(dark);
    }
}
