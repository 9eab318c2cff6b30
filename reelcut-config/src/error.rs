//! Typed error variants for the reelcut-config crate.
//!
//! Provides structured error types for binding construction, shortcut file
//! I/O and persistence. Library consumers can match on the specific failure
//! mode; hosts that prefer `anyhow` get the conversion for free because every
//! type here implements `std::error::Error`.
//!
//! # Example
//!
//! ```rust,no_run
//! use reelcut_config::{ConfigError, PersistError};
//!
//! fn describe(e: &PersistError) -> String {
//!     match e {
//!         PersistError::Config(ConfigError::Io(io)) => format!("I/O error: {io}"),
//!         PersistError::Config(other) => format!("bad shortcut file: {other}"),
//!         PersistError::Rejected(msg) => format!("store rejected save: {msg}"),
//!     }
//! }
//! ```

use thiserror::Error;

/// Reasons a [`Binding`](crate::Binding) cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// The key string was empty.
    #[error("binding key must not be empty")]
    EmptyKey,

    /// The key is itself a modifier (Control, Shift, Alt or Meta).
    #[error("'{0}' is a modifier key and cannot be bound on its own")]
    ModifierKey(String),
}

/// An action identifier outside the fixed action set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shortcut action '{0}'")]
pub struct UnknownAction(pub String);

/// Errors that can occur when reading or writing a shortcut file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the shortcut file.
    #[error("I/O error on shortcut file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contained YAML that could not be parsed or produced.
    #[error("YAML error in shortcut file: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The file contained JSON that could not be parsed or produced.
    #[error("JSON error in shortcut file: {0}")]
    Json(#[from] serde_json::Error),

    /// The file contained TOML that could not be parsed.
    #[error("TOML parse error in shortcut file: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The binding set could not be rendered as TOML.
    #[error("TOML write error in shortcut file: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

impl ConfigError {
    /// True when the stored data exists but is not well-formed.
    ///
    /// Callers recover from these by falling back to defaults.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, ConfigError::Io(_))
    }
}

/// Failure to load from or save to a [`ShortcutStore`](crate::ShortcutStore).
#[derive(Debug, Error)]
pub enum PersistError {
    /// The backing file could not be read, written or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The store refused the operation (remote backend down, quota, ...).
    #[error("shortcut store rejected the operation: {0}")]
    Rejected(String),
}

impl PersistError {
    /// True when the failure is malformed stored data rather than transport.
    pub fn is_malformed(&self) -> bool {
        matches!(self, PersistError::Config(e) if e.is_malformed())
    }
}
