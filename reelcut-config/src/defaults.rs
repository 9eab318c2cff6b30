//! Default shortcut tables.
//!
//! Covers:
//! - The default binding for every configurable action
//! - The fixed (non-configurable) shortcuts listed alongside them in the dialog

use crate::binding::Binding;
use crate::binding_set::BindingSet;

/// The shipped binding set.
///
/// Single-letter keys for the timeline tools, primary+D for delete (so a bare
/// `d` stays free), and space for play/pause.
pub fn bindings() -> BindingSet {
    BindingSet::from_parts(
        Binding::from_static("z", false, false, false),
        Binding::from_static("t", false, false, false),
        Binding::from_static("a", false, false, false),
        Binding::from_static("f", false, false, false),
        Binding::from_static("d", true, false, false),
        Binding::from_static(" ", false, false, false),
    )
}

/// A shortcut handled directly by the editor and not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedShortcut {
    pub label: &'static str,
    pub display: &'static str,
}

/// Fixed shortcuts, in display order.
pub const FIXED_SHORTCUTS: &[FixedShortcut] = &[
    FixedShortcut {
        label: "Cycle Annotations Forward",
        display: "Tab",
    },
    FixedShortcut {
        label: "Cycle Annotations Backward",
        display: "Shift + Tab",
    },
    FixedShortcut {
        label: "Delete Selected (alt)",
        display: "Del / ⌫",
    },
    FixedShortcut {
        label: "Pan Timeline",
        display: "Shift + Ctrl + Scroll",
    },
    FixedShortcut {
        label: "Zoom Timeline",
        display: "Ctrl + Scroll",
    },
];
