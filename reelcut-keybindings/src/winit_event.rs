//! Conversion from winit keyboard input.
//!
//! Maps winit logical keys to the DOM-style key names [`KeyEvent`] uses, so
//! a winit host can feed the capture session and registry directly.

use crate::event::KeyEvent;
use winit::keyboard::{Key, ModifiersState, NamedKey};

/// DOM-style name for a winit logical key.
///
/// Returns `None` for dead keys, unidentified keys and named keys the
/// shortcut system has no use for.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(c) => Some(c.to_string()),
        Key::Named(named) => named_key_name(*named).map(str::to_string),
        _ => None,
    }
}

fn named_key_name(named: NamedKey) -> Option<&'static str> {
    let name = match named {
        NamedKey::Space => " ",
        NamedKey::Escape => "Escape",
        NamedKey::Enter => "Enter",
        NamedKey::Tab => "Tab",
        NamedKey::Backspace => "Backspace",
        NamedKey::Delete => "Delete",
        NamedKey::Insert => "Insert",
        NamedKey::Home => "Home",
        NamedKey::End => "End",
        NamedKey::PageUp => "PageUp",
        NamedKey::PageDown => "PageDown",

        // Arrow keys
        NamedKey::ArrowUp => "ArrowUp",
        NamedKey::ArrowDown => "ArrowDown",
        NamedKey::ArrowLeft => "ArrowLeft",
        NamedKey::ArrowRight => "ArrowRight",

        // Modifiers, so a bare modifier press reaches the capture session
        // and is refused there
        NamedKey::Control => "Control",
        NamedKey::Shift => "Shift",
        NamedKey::Alt => "Alt",
        NamedKey::Super | NamedKey::Meta => "Meta",

        // Function keys
        NamedKey::F1 => "F1",
        NamedKey::F2 => "F2",
        NamedKey::F3 => "F3",
        NamedKey::F4 => "F4",
        NamedKey::F5 => "F5",
        NamedKey::F6 => "F6",
        NamedKey::F7 => "F7",
        NamedKey::F8 => "F8",
        NamedKey::F9 => "F9",
        NamedKey::F10 => "F10",
        NamedKey::F11 => "F11",
        NamedKey::F12 => "F12",

        _ => return None,
    };
    Some(name)
}

impl KeyEvent {
    /// Build an event from a winit logical key and modifier state.
    ///
    /// winit reports Cmd on macOS as the super key; it becomes `meta` here.
    pub fn from_winit(logical_key: &Key, modifiers: ModifiersState) -> Option<Self> {
        let key = key_name(logical_key)?;
        Some(Self {
            key,
            ctrl: modifiers.control_key(),
            meta: modifiers.super_key(),
            shift: modifiers.shift_key(),
            alt: modifiers.alt_key(),
        })
    }
}
