//! Keyboard shortcuts settings for the reelcut video editor.
//!
//! This crate holds the state behind the shortcuts dialog: the live binding
//! set, the draft being edited, the capture session, and the notifications
//! the host should surface. Rendering is left to the host UI, which drives
//! [`ShortcutsEditor`] from its button and key handlers.

pub mod shortcuts_editor;

pub use shortcuts_editor::{CAPTURE_PROMPT, KeyDisposition, Notice, ShortcutRow, ShortcutsEditor};
