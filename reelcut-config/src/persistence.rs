//! Shortcut persistence.
//!
//! Covers:
//! - The `ShortcutStore` trait the editor saves through
//! - `FileStore` (YAML / JSON / TOML file I/O with atomic write)
//! - `MemoryStore` for hosts without a filesystem and for tests
//! - `load_bindings`, which recovers from malformed stored data

use crate::binding_set::{BindingSet, PartialBindings, merge_with_defaults};
use crate::error::{ConfigError, PersistError};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

/// Backend that reads and writes the user's shortcut map.
pub trait ShortcutStore {
    /// Read whatever was stored. A store with nothing saved returns an empty map.
    fn load(&self) -> Result<PartialBindings, PersistError>;

    /// Persist a complete binding set.
    fn save(&self, bindings: &BindingSet) -> Result<(), PersistError>;
}

impl<S: ShortcutStore + ?Sized> ShortcutStore for &S {
    fn load(&self) -> Result<PartialBindings, PersistError> {
        (**self).load()
    }

    fn save(&self, bindings: &BindingSet) -> Result<(), PersistError> {
        (**self).save(bindings)
    }
}

/// Load a total binding set from `store`.
///
/// Malformed data (unparsable file, unknown actions, invalid bindings) is
/// logged and replaced by defaults. Transport failures are returned.
pub fn load_bindings(store: &dyn ShortcutStore) -> Result<BindingSet, PersistError> {
    match store.load() {
        Ok(partial) => Ok(merge_with_defaults(&partial)),
        Err(e) if e.is_malformed() => {
            log::warn!("Stored shortcuts are malformed, using defaults: {}", e);
            Ok(BindingSet::default())
        }
        Err(e) => Err(e),
    }
}

/// Serialization format of a shortcut file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Yaml,
    Json,
    Toml,
}

impl StoreFormat {
    /// Pick a format from the file extension; anything unrecognised is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => StoreFormat::Json,
            Some("toml") => StoreFormat::Toml,
            _ => StoreFormat::Yaml,
        }
    }

    fn parse(self, contents: &str) -> Result<PartialBindings, ConfigError> {
        Ok(match self {
            StoreFormat::Yaml => serde_yaml_ng::from_str(contents)?,
            StoreFormat::Json => serde_json::from_str(contents)?,
            StoreFormat::Toml => toml::from_str(contents)?,
        })
    }

    fn render(self, bindings: &BindingSet) -> Result<String, ConfigError> {
        Ok(match self {
            StoreFormat::Yaml => serde_yaml_ng::to_string(bindings)?,
            StoreFormat::Json => serde_json::to_string_pretty(bindings)?,
            StoreFormat::Toml => toml::to_string(bindings)?,
        })
    }
}

/// Shortcut map stored in a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: StoreFormat,
}

impl FileStore {
    /// Store at `path`, format chosen by extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = StoreFormat::from_path(&path);
        Self { path, format }
    }

    /// Store at [`FileStore::default_path`].
    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Get the shortcut file path (using XDG convention)
    pub fn default_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("reelcut").join("shortcuts.yaml")
            } else {
                PathBuf::from("shortcuts.yaml")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/reelcut/shortcuts.yaml on every Unix, macOS included
            if let Some(home_dir) = dirs::home_dir() {
                home_dir
                    .join(".config")
                    .join("reelcut")
                    .join("shortcuts.yaml")
            } else {
                PathBuf::from("shortcuts.yaml")
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StoreFormat {
        self.format
    }
}

impl ShortcutStore for FileStore {
    fn load(&self) -> Result<PartialBindings, PersistError> {
        if !self.path.exists() {
            log::info!(
                "Shortcut file {:?} not found, starting from defaults",
                self.path
            );
            return Ok(PartialBindings::new());
        }

        log::info!("Loading shortcuts from {:?}", self.path);
        let contents = fs::read_to_string(&self.path).map_err(ConfigError::from)?;
        if contents.trim().is_empty() {
            return Ok(PartialBindings::new());
        }
        Ok(self.format.parse(&contents)?)
    }

    fn save(&self, bindings: &BindingSet) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let rendered = self.format.render(bindings)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);
        fs::write(&temp_path, rendered).map_err(ConfigError::from)?;
        fs::rename(&temp_path, &self.path).map_err(ConfigError::from)?;

        log::info!("Saved shortcuts to {:?}", self.path);
        Ok(())
    }
}

/// In-process store.
///
/// Holds the last saved map and can be told to reject saves, which is how
/// hosts and tests exercise the persistence-failure path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stored: Mutex<PartialBindings>,
    reject_with: Mutex<Option<String>>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `partial`, as if written by an older version.
    pub fn with_partial(partial: PartialBindings) -> Self {
        Self {
            stored: Mutex::new(partial),
            ..Self::default()
        }
    }

    /// Make every following save fail with `message`; `None` restores saving.
    pub fn reject_saves(&self, message: Option<&str>) {
        *self.reject_with.lock() = message.map(str::to_string);
    }

    /// The currently stored map.
    pub fn stored(&self) -> PartialBindings {
        self.stored.lock().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }
}

impl ShortcutStore for MemoryStore {
    fn load(&self) -> Result<PartialBindings, PersistError> {
        Ok(self.stored.lock().clone())
    }

    fn save(&self, bindings: &BindingSet) -> Result<(), PersistError> {
        if let Some(message) = self.reject_with.lock().clone() {
            return Err(PersistError::Rejected(message));
        }
        *self.stored.lock() = bindings.to_partial();
        *self.saves.lock() += 1;
        Ok(())
    }
}
