//! Integration tests for the shortcuts dialog lifecycle.
//!
//! These drive `ShortcutsEditor` the way the host UI does: open, click a
//! row, press keys, then save, reset or cancel, and check what reaches the
//! live set and the store.

use reelcut_config::{
    Action, Binding, BindingSet, FileStore, MemoryStore, PartialBindings, ShortcutStore,
};
use reelcut_keybindings::{CaptureOutcome, CaptureState, KeyEvent, Platform};
use reelcut_settings::{KeyDisposition, Notice, ShortcutsEditor};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;

fn stored(key: &str, ctrl: bool) -> serde_json::Value {
    if ctrl {
        serde_json::json!({ "key": key, "ctrl": true })
    } else {
        serde_json::json!({ "key": key })
    }
}

// ---------------------------------------------------------------------------
// Capture inside the dialog
// ---------------------------------------------------------------------------

#[test]
fn escape_leaves_draft_unchanged() {
    let mut editor = ShortcutsEditor::new(MemoryStore::new(), Platform::Other);
    editor.open();
    editor.start_capture(Action::AddTrim);

    let disposition = editor.handle_key(&KeyEvent::new("Escape"));

    assert_eq!(
        disposition,
        KeyDisposition::Captured(CaptureOutcome::Cancelled(Action::AddTrim))
    );
    assert_eq!(editor.capture_state(), CaptureState::Idle);
    assert_eq!(editor.draft(), Some(&BindingSet::default()));
}

#[test]
fn qualifying_key_updates_draft_only() {
    let mut editor = ShortcutsEditor::new(MemoryStore::new(), Platform::Other);
    editor.open();
    editor.start_capture(Action::AddZoom);

    editor.handle_key(&KeyEvent::new("g").with_shift());

    let expected = Binding::new("g").unwrap().with_shift();
    assert_eq!(editor.draft().unwrap().get(Action::AddZoom), &expected);
    assert_eq!(editor.live(), &BindingSet::default());
    assert_eq!(editor.capture_state(), CaptureState::Idle);
}

#[test]
fn delete_during_capture_does_not_trigger_delete() {
    let mut editor = ShortcutsEditor::new(MemoryStore::new(), Platform::Other);
    editor.open();
    editor.start_capture(Action::AddKeyframe);

    let disposition = editor.handle_key(&KeyEvent::new("d").with_ctrl());

    assert!(matches!(
        disposition,
        KeyDisposition::Captured(CaptureOutcome::Committed(Action::AddKeyframe, _))
    ));
}

#[test]
fn bare_modifier_is_swallowed_and_capture_continues() {
    let mut editor = ShortcutsEditor::new(MemoryStore::new(), Platform::MacOs);
    editor.open();
    editor.start_capture(Action::PlayPause);

    let disposition = editor.handle_key(&KeyEvent::new("Meta").with_meta());
    assert_eq!(disposition, KeyDisposition::Captured(CaptureOutcome::Ignored));
    assert_eq!(editor.capture_state(), CaptureState::Capturing(Action::PlayPause));
    assert_eq!(editor.capture_hook().active_listeners(), 1);
}

#[test]
fn on_captured_reports_committed_bindings() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut editor = ShortcutsEditor::new(MemoryStore::new(), Platform::MacOs)
        .on_captured(move |action, binding| sink.borrow_mut().push((action, binding.clone())));
    editor.open();

    editor.start_capture(Action::AddZoom);
    editor.handle_key(&KeyEvent::new("Escape"));
    assert!(seen.borrow().is_empty());

    editor.start_capture(Action::AddZoom);
    editor.handle_key(&KeyEvent::new("Shift").with_shift());
    editor.handle_key(&KeyEvent::new("j").with_meta());

    assert_eq!(
        *seen.borrow(),
        vec![(Action::AddZoom, Binding::new("j").unwrap().with_ctrl())]
    );
}

#[test]
fn keys_in_open_dialog_without_capture_are_unhandled() {
    let mut editor = ShortcutsEditor::new(MemoryStore::new(), Platform::Other);
    editor.open();
    assert_eq!(editor.handle_key(&KeyEvent::new("z")), KeyDisposition::Unhandled);
}

// ---------------------------------------------------------------------------
// Save / cancel / reset
// ---------------------------------------------------------------------------

#[test]
fn save_promotes_draft_and_persists() {
    let mut editor = ShortcutsEditor::new(MemoryStore::new(), Platform::Other);
    editor.open();
    editor.start_capture(Action::DeleteSelected);
    editor.handle_key(&KeyEvent::new("x"));

    assert_eq!(editor.save(), Some(Notice::Saved));
    assert!(!editor.is_open());
    assert_eq!(
        editor.live().get(Action::DeleteSelected),
        &Binding::new("x").unwrap()
    );
    assert_eq!(editor.store().save_count(), 1);
    assert_eq!(
        editor.store().stored().get("deleteSelected"),
        Some(&stored("x", false))
    );

    // Dialog closed: keys dispatch through the new live set
    assert_eq!(
        editor.handle_key(&KeyEvent::new("x")),
        KeyDisposition::Triggered(Action::DeleteSelected)
    );
    assert_eq!(
        editor.handle_key(&KeyEvent::new("d").with_ctrl()),
        KeyDisposition::Unhandled
    );
}

#[test]
fn failed_save_keeps_optimistic_live_set() {
    let store = MemoryStore::new();
    store.reject_saves(Some("backend offline"));
    let mut editor = ShortcutsEditor::new(store, Platform::Other);

    editor.open();
    editor.start_capture(Action::AddZoom);
    editor.handle_key(&KeyEvent::new("m"));
    let notice = editor.save().unwrap();

    assert!(notice.is_error());
    assert!(notice.message().contains("backend offline"));
    assert_eq!(editor.live().get(Action::AddZoom), &Binding::new("m").unwrap());
    assert_eq!(editor.store().save_count(), 0);

    // Manual retry succeeds once the backend is back
    editor.store().reject_saves(None);
    editor.open();
    assert_eq!(editor.save(), Some(Notice::Saved));
    assert_eq!(editor.store().stored().get("addZoom"), Some(&stored("m", false)));
}

#[test]
fn cancel_discards_draft_and_releases_listener() {
    let mut editor = ShortcutsEditor::new(MemoryStore::new(), Platform::Other);
    editor.open();
    editor.start_capture(Action::AddZoom);
    editor.handle_key(&KeyEvent::new("q"));
    editor.start_capture(Action::AddTrim);
    assert_eq!(editor.capture_hook().active_listeners(), 1);

    editor.close();

    assert!(!editor.is_open());
    assert_eq!(editor.capture_hook().active_listeners(), 0);
    assert_eq!(editor.live(), &BindingSet::default());
    assert_eq!(editor.store().save_count(), 0);

    // Reopening starts from the live set again
    editor.open();
    assert_eq!(editor.draft(), Some(&BindingSet::default()));
}

#[test]
fn reset_then_save_restores_defaults() {
    let mut partial = PartialBindings::new();
    partial.insert("addTrim".into(), stored("y", true));
    let mut editor = ShortcutsEditor::load(MemoryStore::with_partial(partial), Platform::Other)
        .unwrap();
    assert_eq!(
        editor.live().get(Action::AddTrim),
        &Binding::new("y").unwrap().with_ctrl()
    );

    editor.open();
    assert_eq!(editor.reset_to_defaults(), Some(Notice::ResetPending));
    // Not applied until saved
    assert_eq!(
        editor.live().get(Action::AddTrim),
        &Binding::new("y").unwrap().with_ctrl()
    );

    assert_eq!(editor.save(), Some(Notice::Saved));
    assert_eq!(editor.live(), &BindingSet::default());
}

#[test]
fn save_without_open_dialog_is_noop() {
    let mut editor = ShortcutsEditor::new(MemoryStore::new(), Platform::Other);
    assert_eq!(editor.save(), None);
    assert_eq!(editor.store().save_count(), 0);
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn load_from_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");

    {
        let mut editor = ShortcutsEditor::load(FileStore::new(&path), Platform::MacOs).unwrap();
        editor.open();
        editor.start_capture(Action::AddAnnotation);
        editor.handle_key(&KeyEvent::new("n").with_meta().with_alt());
        assert_eq!(editor.save(), Some(Notice::Saved));
    }

    let editor = ShortcutsEditor::load(FileStore::new(&path), Platform::MacOs).unwrap();
    assert_eq!(
        editor.live().get(Action::AddAnnotation),
        &Binding::new("n").unwrap().with_ctrl().with_alt()
    );
    assert_eq!(editor.rows()[2].display, "⌘ + ⌥ + N");
}

#[test]
fn load_from_corrupt_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.json");
    std::fs::write(&path, "[1, 2,").unwrap();

    let editor = ShortcutsEditor::load(FileStore::new(&path), Platform::Other).unwrap();
    assert_eq!(editor.live(), &BindingSet::default());
}

#[test]
fn load_with_stale_actions_keeps_totality() {
    let mut partial = PartialBindings::new();
    partial.insert("addZoom".into(), stored("1", false));
    partial.insert("removedInV2".into(), stored("r", false));
    partial.insert("addTrim".into(), stored("Alt", false));
    partial.insert("addKeyframe".into(), serde_json::json!("ctrl+k"));

    let editor =
        ShortcutsEditor::load(MemoryStore::with_partial(partial), Platform::Other).unwrap();
    let live = editor.live();
    assert_eq!(live.get(Action::AddZoom), &Binding::new("1").unwrap());
    assert_eq!(live.get(Action::AddTrim), &Binding::new("t").unwrap());
    assert_eq!(live.get(Action::AddKeyframe), &Binding::new("f").unwrap());
    assert_eq!(live.iter().count(), Action::ALL.len());
}

#[test]
fn store_by_reference() {
    let store = MemoryStore::new();
    {
        let mut editor = ShortcutsEditor::new(&store, Platform::Other);
        editor.open();
        editor.save();
    }
    assert_eq!(store.save_count(), 1);
    assert_eq!(
        reelcut_config::load_bindings(&store).unwrap(),
        BindingSet::default()
    );
    assert_eq!(store.load().unwrap().len(), Action::ALL.len());
}

#[test]
fn fixed_rows_listed() {
    let editor = ShortcutsEditor::new(MemoryStore::new(), Platform::Other);
    let labels: Vec<&str> = editor.fixed_rows().iter().map(|row| row.label).collect();
    assert_eq!(labels[0], "Cycle Annotations Forward");
    assert_eq!(labels.len(), 5);
}
