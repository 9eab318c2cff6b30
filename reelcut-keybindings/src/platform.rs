//! Platform-specific keybinding resolution.
//!
//! Contains:
//! - Which physical key acts as the primary modifier (Cmd on macOS, Ctrl elsewhere)
//! - Modifier display names per platform

/// Platform family, as far as shortcuts care.
///
/// Resolved once by the host (usually via [`Platform::current`]) and passed
/// into the codec and capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Primary modifier is Meta (Cmd); modifiers display as glyphs.
    MacOs,
    /// Primary modifier is Ctrl; modifiers display as words.
    Other,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOs
        }
        #[cfg(not(target_os = "macos"))]
        {
            Platform::Other
        }
    }

    /// Build from an "is this a Mac" flag reported by the environment.
    pub fn from_is_mac(is_mac: bool) -> Self {
        if is_mac {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    pub fn is_mac(self) -> bool {
        self == Platform::MacOs
    }

    /// Resolve the primary modifier from the raw Ctrl / Meta state.
    #[inline]
    pub fn primary_modifier(self, ctrl: bool, meta: bool) -> bool {
        match self {
            Platform::MacOs => meta,
            Platform::Other => ctrl,
        }
    }

    /// Display names for (primary, shift, alt).
    pub(crate) fn modifier_labels(self) -> [&'static str; 3] {
        match self {
            Platform::MacOs => ["⌘", "⇧", "⌥"],
            Platform::Other => ["Ctrl", "Shift", "Alt"],
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
