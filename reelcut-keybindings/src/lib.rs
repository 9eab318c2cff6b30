//! Shortcut engine for reelcut.
//!
//! This crate turns raw key presses into bindings, renders bindings for
//! display, and decides at runtime which action a key press triggers.
//!
//! Features:
//! - Platform-aware primary modifier (Cmd on macOS, Ctrl elsewhere)
//! - Interactive capture of new bindings with a scoped key listener
//! - Registry lookup from key event to [`Action`]
//! - Optional conversion from winit key events (`winit` feature)

pub mod capture;
pub mod codec;
mod event;
mod matcher;
mod platform;
#[cfg(feature = "winit")]
pub mod winit_event;

pub use capture::{CaptureHook, CaptureOutcome, CaptureSession, CaptureState, ListenerGuard};
pub use codec::{format, normalize};
pub use event::KeyEvent;
pub use matcher::{EventMatcher, matches};
pub use platform::Platform;

use reelcut_config::{Action, BindingSet};

/// Live binding set plus the platform it is matched on.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    bindings: BindingSet,
    platform: Platform,
}

impl ShortcutRegistry {
    pub fn new(bindings: BindingSet, platform: Platform) -> Self {
        log::info!(
            "Shortcut registry initialized with {} bindings for {:?}",
            Action::ALL.len(),
            platform
        );
        Self { bindings, platform }
    }

    /// Registry over the default bindings.
    pub fn with_defaults(platform: Platform) -> Self {
        Self::new(BindingSet::default(), platform)
    }

    /// Look up the action a key event triggers.
    ///
    /// When several actions share a binding the first in [`Action::ALL`]
    /// order wins.
    pub fn lookup(&self, event: &KeyEvent) -> Option<Action> {
        let matcher = EventMatcher::from_event(event, self.platform);

        let hit = self
            .bindings
            .iter()
            .find(|(_, binding)| matcher.matches(binding))
            .map(|(action, _)| action);

        if let Some(action) = hit {
            log::debug!("Key '{}' triggered '{}'", event.key, action);
        }
        hit
    }

    pub fn bindings(&self) -> &BindingSet {
        &self.bindings
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Swap in a new live set, returning the old one.
    pub fn replace(&mut self, bindings: BindingSet) -> BindingSet {
        std::mem::replace(&mut self.bindings, bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelcut_config::Binding;

    #[test]
    fn test_default_lookup() {
        let registry = ShortcutRegistry::with_defaults(Platform::Other);
        assert_eq!(registry.lookup(&KeyEvent::new("z")), Some(Action::AddZoom));
        assert_eq!(registry.lookup(&KeyEvent::new(" ")), Some(Action::PlayPause));
        assert_eq!(
            registry.lookup(&KeyEvent::new("d").with_ctrl()),
            Some(Action::DeleteSelected)
        );
        assert_eq!(registry.lookup(&KeyEvent::new("d")), None);
        assert_eq!(registry.lookup(&KeyEvent::new("q")), None);
    }

    #[test]
    fn test_mac_delete_needs_cmd() {
        let registry = ShortcutRegistry::with_defaults(Platform::MacOs);
        assert_eq!(
            registry.lookup(&KeyEvent::new("d").with_meta()),
            Some(Action::DeleteSelected)
        );
        assert_eq!(registry.lookup(&KeyEvent::new("d").with_ctrl()), None);
    }

    #[test]
    fn test_shared_binding_first_action_wins() {
        let bindings = BindingSet::default()
            .with_binding(Action::PlayPause, Binding::new("z").unwrap());
        let registry = ShortcutRegistry::new(bindings, Platform::Other);
        assert_eq!(registry.lookup(&KeyEvent::new("z")), Some(Action::AddZoom));
    }

    #[test]
    fn test_replace() {
        let mut registry = ShortcutRegistry::with_defaults(Platform::Other);
        let old = registry.replace(
            BindingSet::default().with_binding(Action::AddTrim, Binding::new("y").unwrap()),
        );
        assert_eq!(old, BindingSet::default());
        assert_eq!(registry.lookup(&KeyEvent::new("y")), Some(Action::AddTrim));
        assert_eq!(registry.lookup(&KeyEvent::new("t")), None);
    }
}
