//! Key event matching.
//!
//! Decides whether a live key event triggers a stored binding. This runs on
//! every key press the host dispatches, so the event side is resolved once
//! into an [`EventMatcher`] and then compared against each binding.

use crate::event::KeyEvent;
use crate::platform::Platform;
use reelcut_config::Binding;

/// A key event resolved for matching on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMatcher {
    /// Lowercased event key
    key: String,
    /// Primary modifier resolved for the platform
    primary: bool,
    shift: bool,
    alt: bool,
}

impl EventMatcher {
    /// Resolve `event` for `platform`.
    ///
    /// Only the platform's primary modifier counts here (Meta on macOS, Ctrl
    /// elsewhere); the other physical key is ignored.
    pub fn from_event(event: &KeyEvent, platform: Platform) -> Self {
        Self {
            key: event.key.to_lowercase(),
            primary: platform.primary_modifier(event.ctrl, event.meta),
            shift: event.shift,
            alt: event.alt,
        }
    }

    /// Check if this event matches the given binding.
    ///
    /// Key, primary modifier, shift and alt must all agree exactly.
    pub fn matches(&self, binding: &Binding) -> bool {
        // Check key first (quick rejection)
        if self.key != binding.key() {
            return false;
        }

        self.primary == binding.ctrl()
            && self.shift == binding.shift()
            && self.alt == binding.alt()
    }
}

/// Check whether `event` triggers `binding` on `platform`.
pub fn matches(event: &KeyEvent, binding: &Binding, platform: Platform) -> bool {
    EventMatcher::from_event(event, platform).matches(binding)
}
