//! Keybinding value types.

use crate::error::BindingError;
use serde::{Deserialize, Serialize};

/// Key names that are modifiers and never form a binding by themselves.
pub const MODIFIER_KEYS: [&str; 4] = ["Control", "Shift", "Alt", "Meta"];

/// Check whether a key name denotes a modifier key (case-insensitive).
pub fn is_modifier_key(key: &str) -> bool {
    MODIFIER_KEYS
        .iter()
        .any(|modifier| modifier.eq_ignore_ascii_case(key))
}

/// A single shortcut: a key plus modifier flags.
///
/// `ctrl` is the *primary* modifier: it is pressed as Cmd on macOS and as
/// Ctrl elsewhere. The key is stored lowercased. A binding whose key is a
/// modifier cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredBinding", into = "StoredBinding")]
pub struct Binding {
    key: String,
    ctrl: bool,
    shift: bool,
    alt: bool,
}

impl Binding {
    /// Create an unmodified binding for `key`.
    pub fn new(key: impl Into<String>) -> Result<Self, BindingError> {
        let key = key.into();
        if key.is_empty() {
            return Err(BindingError::EmptyKey);
        }
        if is_modifier_key(&key) {
            return Err(BindingError::ModifierKey(key));
        }
        Ok(Self {
            key: key.to_lowercase(),
            ctrl: false,
            shift: false,
            alt: false,
        })
    }

    /// Build a binding from static tables known to hold valid keys.
    pub(crate) fn from_static(key: &'static str, ctrl: bool, shift: bool, alt: bool) -> Self {
        Self {
            key: key.to_string(),
            ctrl,
            shift,
            alt,
        }
    }

    /// Set all three modifier flags at once.
    pub fn with_modifiers(mut self, ctrl: bool, shift: bool, alt: bool) -> Self {
        self.ctrl = ctrl;
        self.shift = shift;
        self.alt = alt;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// The lowercased key name (`"d"`, `" "`, `"arrowup"`, ...).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the primary modifier (Cmd on macOS, Ctrl elsewhere) is required.
    pub fn ctrl(&self) -> bool {
        self.ctrl
    }

    pub fn shift(&self) -> bool {
        self.shift
    }

    pub fn alt(&self) -> bool {
        self.alt
    }

    /// True when any modifier flag is set.
    pub fn has_modifiers(&self) -> bool {
        self.ctrl || self.shift || self.alt
    }
}

/// On-disk shape of a binding: `{ key, ctrl?, shift?, alt? }`.
///
/// Modifier fields are omitted when false and default to false when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBinding {
    pub key: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub ctrl: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub shift: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub alt: bool,
}

impl StoredBinding {
    /// Untyped form used in [`PartialBindings`](crate::PartialBindings).
    pub fn to_value(&self) -> serde_json::Value {
        let mut entry = serde_json::Map::new();
        entry.insert("key".into(), serde_json::Value::String(self.key.clone()));
        for (name, set) in [("ctrl", self.ctrl), ("shift", self.shift), ("alt", self.alt)] {
            if set {
                entry.insert(name.into(), serde_json::Value::Bool(true));
            }
        }
        serde_json::Value::Object(entry)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TryFrom<StoredBinding> for Binding {
    type Error = BindingError;

    fn try_from(stored: StoredBinding) -> Result<Self, Self::Error> {
        Ok(Binding::new(stored.key)?.with_modifiers(stored.ctrl, stored.shift, stored.alt))
    }
}

impl From<Binding> for StoredBinding {
    fn from(binding: Binding) -> Self {
        Self {
            key: binding.key,
            ctrl: binding.ctrl,
            shift: binding.shift,
            alt: binding.alt,
        }
    }
}
