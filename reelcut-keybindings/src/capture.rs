//! Interactive capture of a new binding.
//!
//! A [`CaptureSession`] waits for the next qualifying key press for one
//! action and writes it into the draft [`BindingSet`]. While it waits it
//! holds a [`ListenerGuard`] from the host's [`CaptureHook`]: the host must
//! route key events to the session (and nowhere else) while the hook is
//! active. Dropping the guard uninstalls the listener, so cancel, commit,
//! retarget and dropping the session all release it.

use crate::codec;
use crate::event::KeyEvent;
use crate::platform::Platform;
use reelcut_config::{Action, Binding, BindingSet};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// The host's exclusive key-capture slot.
///
/// Cloning shares the slot. Single-threaded: all capture happens on the UI
/// thread that owns the hook.
#[derive(Debug, Clone, Default)]
pub struct CaptureHook {
    installed: Rc<Cell<usize>>,
}

impl CaptureHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a listener; it stays installed until the guard is dropped.
    pub fn install(&self) -> ListenerGuard {
        self.installed.set(self.installed.get() + 1);
        ListenerGuard {
            installed: Rc::clone(&self.installed),
        }
    }

    /// Number of listeners currently installed.
    pub fn active_listeners(&self) -> usize {
        self.installed.get()
    }

    /// True while a capture listener is installed and key events must be
    /// withheld from every other handler.
    pub fn is_capturing(&self) -> bool {
        self.active_listeners() > 0
    }
}

/// An installed capture listener. Uninstalls itself on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    installed: Rc<Cell<usize>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.installed.set(self.installed.get().saturating_sub(1));
    }
}

/// Externally visible session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Capturing(Action),
}

/// What the session did with a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// No capture in progress; the event belongs to the normal handlers.
    Passthrough,
    /// Bare modifier press: consumed, still capturing.
    Ignored,
    /// Escape pressed: consumed, capture ended, draft untouched.
    Cancelled(Action),
    /// New binding written to the draft.
    Committed(Action, Binding),
}

impl CaptureOutcome {
    /// Whether the event was swallowed by the capture.
    pub fn consumed(&self) -> bool {
        !matches!(self, CaptureOutcome::Passthrough)
    }
}

struct ActiveCapture {
    action: Action,
    _listener: ListenerGuard,
}

type CapturedCallback = Box<dyn FnMut(Action, &Binding)>;

/// Idle / Capturing(action) state machine for rebinding one action.
pub struct CaptureSession {
    platform: Platform,
    hook: CaptureHook,
    active: Option<ActiveCapture>,
    on_captured: Option<CapturedCallback>,
}

impl CaptureSession {
    pub fn new(platform: Platform, hook: CaptureHook) -> Self {
        Self {
            platform,
            hook,
            active: None,
            on_captured: None,
        }
    }

    /// Register a callback fired after each commit.
    pub fn on_captured(mut self, callback: impl FnMut(Action, &Binding) + 'static) -> Self {
        self.on_captured = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> CaptureState {
        match &self.active {
            Some(active) => CaptureState::Capturing(active.action),
            None => CaptureState::Idle,
        }
    }

    /// The action being captured, if any.
    pub fn target(&self) -> Option<Action> {
        self.active.as_ref().map(|active| active.action)
    }

    pub fn hook(&self) -> &CaptureHook {
        &self.hook
    }

    /// Start capturing for `action`.
    ///
    /// An in-progress capture for another action is replaced, not queued.
    pub fn start_capture(&mut self, action: Action) {
        // Release the previous listener before installing the next one
        if let Some(previous) = self.active.take() {
            log::debug!(
                "Capture retargeted from '{}' to '{}'",
                previous.action,
                action
            );
        }
        let listener = self.hook.install();
        self.active = Some(ActiveCapture {
            action,
            _listener: listener,
        });
        log::debug!("Capturing new shortcut for '{}'", action);
    }

    /// Stop capturing without changing anything. Returns the abandoned target.
    pub fn cancel_capture(&mut self) -> Option<Action> {
        let cancelled = self.active.take().map(|active| active.action);
        if let Some(action) = cancelled {
            log::debug!("Capture for '{}' cancelled", action);
        }
        cancelled
    }

    /// Feed a key event to the session.
    ///
    /// When capturing, the event is always consumed; the caller must not
    /// forward it. Escape cancels, a bare modifier is ignored, anything else
    /// is normalized and written into `draft`.
    pub fn handle_event(&mut self, event: &KeyEvent, draft: &mut BindingSet) -> CaptureOutcome {
        let Some(action) = self.target() else {
            return CaptureOutcome::Passthrough;
        };

        if event.is_escape() {
            self.active = None;
            log::debug!("Capture for '{}' cancelled with Escape", action);
            return CaptureOutcome::Cancelled(action);
        }

        let Some(binding) = codec::normalize(event, self.platform) else {
            return CaptureOutcome::Ignored;
        };

        draft.set(action, binding.clone());
        self.active = None;
        log::debug!(
            "Captured {} for '{}'",
            codec::format(&binding, self.platform),
            action
        );

        if let Some(callback) = self.on_captured.as_mut() {
            callback(action, &binding);
        }
        CaptureOutcome::Committed(action, binding)
    }
}

impl fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureSession")
            .field("platform", &self.platform)
            .field("state", &self.state())
            .field("has_callback", &self.on_captured.is_some())
            .finish()
    }
}
