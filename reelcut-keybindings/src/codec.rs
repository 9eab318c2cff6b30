//! Conversion between key events, bindings and display labels.
//!
//! - [`normalize`] turns a captured key press into a [`Binding`]
//! - [`format`] renders a binding for the shortcuts dialog ("Ctrl + D", "⌘ + D")

use crate::event::KeyEvent;
use crate::platform::Platform;
use reelcut_config::{Binding, is_modifier_key};

/// Turn a key press into a binding.
///
/// Returns `None` when the pressed key is itself a modifier (Control, Shift,
/// Alt, Meta): a bare modifier press never becomes a binding.
///
/// The key is lowercased. Both Ctrl and Meta set the binding's primary flag
/// on every platform, so a Windows-key press on Linux captures the same
/// binding as Ctrl would.
pub fn normalize(event: &KeyEvent, platform: Platform) -> Option<Binding> {
    if is_modifier_key(&event.key) {
        return None;
    }

    let ctrl = event.ctrl || event.meta;
    let binding = Binding::new(event.key.as_str())
        .ok()?
        .with_modifiers(ctrl, event.shift, event.alt);

    log::debug!(
        "Normalized key '{}' on {:?} to {}",
        event.key,
        platform,
        format(&binding, platform)
    );
    Some(binding)
}

/// Render a binding for display.
///
/// Modifiers come first in the fixed order primary, shift, alt, then the
/// key, all joined with `" + "`. Modifiers are glyphs on macOS and words
/// elsewhere.
pub fn format(binding: &Binding, platform: Platform) -> String {
    let [primary, shift, alt] = platform.modifier_labels();
    let mut parts: Vec<String> = Vec::with_capacity(4);

    if binding.ctrl() {
        parts.push(primary.to_string());
    }
    if binding.shift() {
        parts.push(shift.to_string());
    }
    if binding.alt() {
        parts.push(alt.to_string());
    }

    let key = binding.key();
    parts.push(match key_label(key) {
        Some(label) => label.to_string(),
        None => key.to_uppercase(),
    });

    parts.join(" + ")
}

/// Friendly label for keys that do not read well upper-cased.
pub fn key_label(key: &str) -> Option<&'static str> {
    match key {
        " " => Some("Space"),
        "delete" => Some("Del"),
        "backspace" => Some("⌫"),
        "escape" => Some("Esc"),
        "arrowup" => Some("↑"),
        "arrowdown" => Some("↓"),
        "arrowleft" => Some("←"),
        "arrowright" => Some("→"),
        _ => None,
    }
}
