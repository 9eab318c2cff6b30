//! Keyboard shortcuts dialog state.
//!
//! Owns the live binding set and, while the dialog is open, a draft copy
//! that captures are written into. Save promotes the draft to live before
//! persisting; cancel throws the draft away.

use anyhow::Context;
use reelcut_config::{
    Action, Binding, BindingSet, FIXED_SHORTCUTS, FixedShortcut, ShortcutStore, load_bindings,
};
use reelcut_keybindings::{
    CaptureHook, CaptureOutcome, CaptureSession, CaptureState, KeyEvent, Platform,
    ShortcutRegistry, format,
};

/// Button text shown while a row waits for a key.
pub const CAPTURE_PROMPT: &str = "Press a key…";

/// User-facing notification produced by an editor operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved,
    ResetPending,
    /// The live set was updated but the store rejected the save.
    SaveFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Saved => "Keyboard shortcuts saved".to_string(),
            Notice::ResetPending => "Reset to default shortcuts. Click Save to apply".to_string(),
            Notice::SaveFailed(reason) => format!("Failed to save keyboard shortcuts: {reason}"),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::SaveFailed(_))
    }
}

/// What happened to a key event handed to [`ShortcutsEditor::handle_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Swallowed by an active capture; do not forward.
    Captured(CaptureOutcome),
    /// The live set maps this key to an action.
    Triggered(Action),
    /// Nothing to do; the host may handle it normally.
    Unhandled,
}

/// One configurable row of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutRow {
    pub action: Action,
    pub label: &'static str,
    /// Formatted binding, or [`CAPTURE_PROMPT`] while capturing.
    pub display: String,
    pub hint: &'static str,
    pub capturing: bool,
}

/// Live shortcuts plus the edit session of the shortcuts dialog.
#[derive(Debug)]
pub struct ShortcutsEditor<S: ShortcutStore> {
    store: S,
    registry: ShortcutRegistry,
    /// Present only while the dialog is open
    draft: Option<BindingSet>,
    capture: CaptureSession,
}

impl<S: ShortcutStore> ShortcutsEditor<S> {
    /// Editor with default bindings live.
    pub fn new(store: S, platform: Platform) -> Self {
        Self::with_bindings(store, BindingSet::default(), platform)
    }

    /// Editor whose live set is loaded from `store` and merged over defaults.
    ///
    /// Malformed stored data falls back to defaults; only transport failures
    /// (unreadable file, rejected load) are returned.
    pub fn load(store: S, platform: Platform) -> anyhow::Result<Self> {
        let bindings = load_bindings(&store).context("Failed to load keyboard shortcuts")?;
        log::info!("Loaded keyboard shortcuts");
        Ok(Self::with_bindings(store, bindings, platform))
    }

    fn with_bindings(store: S, bindings: BindingSet, platform: Platform) -> Self {
        Self {
            store,
            registry: ShortcutRegistry::new(bindings, platform),
            draft: None,
            capture: CaptureSession::new(platform, CaptureHook::new()),
        }
    }

    /// Call `callback` with each binding committed by a capture.
    ///
    /// Fires when the draft changes, before the user saves.
    pub fn on_captured(mut self, callback: impl FnMut(Action, &Binding) + 'static) -> Self {
        self.capture = self.capture.on_captured(callback);
        self
    }

    pub fn live(&self) -> &BindingSet {
        self.registry.bindings()
    }

    pub fn draft(&self) -> Option<&BindingSet> {
        self.draft.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn platform(&self) -> Platform {
        self.registry.platform()
    }

    pub fn capture_state(&self) -> CaptureState {
        self.capture.state()
    }

    /// The hook the host checks to withhold key events during a capture.
    pub fn capture_hook(&self) -> &CaptureHook {
        self.capture.hook()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Open the dialog with a fresh draft of the live set.
    pub fn open(&mut self) {
        self.capture.cancel_capture();
        self.draft = Some(self.live().clone());
    }

    /// Close the dialog, discarding the draft and any capture in progress.
    pub fn close(&mut self) {
        self.capture.cancel_capture();
        if self.draft.take().is_some() {
            log::debug!("Shortcuts dialog closed without saving");
        }
    }

    /// Begin capturing for `action`. Ignored while the dialog is closed.
    pub fn start_capture(&mut self, action: Action) -> bool {
        if !self.is_open() {
            return false;
        }
        self.capture.start_capture(action);
        true
    }

    pub fn cancel_capture(&mut self) -> Option<Action> {
        self.capture.cancel_capture()
    }

    /// Row click: start capturing `action`, or stop if it is already the target.
    pub fn toggle_capture(&mut self, action: Action) -> CaptureState {
        if self.capture.target() == Some(action) {
            self.capture.cancel_capture();
        } else {
            self.start_capture(action);
        }
        self.capture.state()
    }

    /// Route a key event.
    ///
    /// While the dialog is open the event goes to the capture session; with
    /// the dialog closed it is matched against the live set.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyDisposition {
        if let Some(draft) = self.draft.as_mut() {
            let outcome = self.capture.handle_event(event, draft);
            return if outcome.consumed() {
                KeyDisposition::Captured(outcome)
            } else {
                KeyDisposition::Unhandled
            };
        }

        match self.registry.lookup(event) {
            Some(action) => KeyDisposition::Triggered(action),
            None => KeyDisposition::Unhandled,
        }
    }

    /// Replace the draft with the defaults. Takes effect on save.
    pub fn reset_to_defaults(&mut self) -> Option<Notice> {
        let draft = self.draft.as_mut()?;
        *draft = BindingSet::default();
        log::info!("Shortcut draft reset to defaults");
        Some(Notice::ResetPending)
    }

    /// Promote the draft to live, persist it, and close the dialog.
    ///
    /// The live set is updated before the store is asked to save and is not
    /// rolled back if the save fails.
    pub fn save(&mut self) -> Option<Notice> {
        self.capture.cancel_capture();
        let draft = self.draft.take()?;

        self.registry.replace(draft);
        match self.store.save(self.registry.bindings()) {
            Ok(()) => {
                log::info!("Keyboard shortcuts saved");
                Some(Notice::Saved)
            }
            Err(e) => {
                log::error!("Failed to persist keyboard shortcuts: {}", e);
                Some(Notice::SaveFailed(e.to_string()))
            }
        }
    }

    /// Rows for the configurable section, in display order.
    pub fn rows(&self) -> Vec<ShortcutRow> {
        let bindings = self.draft.as_ref().unwrap_or_else(|| self.live());
        let target = self.capture.target();

        Action::ALL
            .into_iter()
            .map(|action| {
                let capturing = target == Some(action);
                ShortcutRow {
                    action,
                    label: action.label(),
                    display: if capturing {
                        CAPTURE_PROMPT.to_string()
                    } else {
                        format(bindings.get(action), self.platform())
                    },
                    hint: if capturing {
                        "Press Esc to cancel"
                    } else {
                        "Click to change"
                    },
                    capturing,
                }
            })
            .collect()
    }

    /// Rows for the fixed (non-configurable) section.
    pub fn fixed_rows(&self) -> &'static [FixedShortcut] {
        FIXED_SHORTCUTS
    }
}
