//! Raw keyboard events as delivered by the host.

/// A key press with its modifier state.
///
/// `key` uses DOM-style key names: printable characters as themselves
/// (`"g"`, `"G"`, `" "`), named keys spelled out (`"Escape"`, `"ArrowUp"`,
/// `"Delete"`), and the modifiers themselves as `"Control"`, `"Shift"`,
/// `"Alt"` and `"Meta"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyEvent {
    /// Event for `key` with no modifiers held.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
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

    /// True for the Escape key, which cancels a capture.
    pub fn is_escape(&self) -> bool {
        self.key == "Escape"
    }
}
