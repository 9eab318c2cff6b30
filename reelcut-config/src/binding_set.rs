//! The complete action → binding map and its merge with defaults.

use crate::action::Action;
use crate::binding::{Binding, StoredBinding};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Possibly incomplete shortcut map as read from storage.
///
/// Keys are raw action ids. Values stay untyped until merge so that one bad
/// entry cannot fail the whole file; unknown ids, `null` values and entries
/// that are not a valid `{ key, ctrl?, shift?, alt? }` are dropped by
/// [`merge_with_defaults`].
pub type PartialBindings = BTreeMap<String, serde_json::Value>;

/// One binding for every [`Action`].
///
/// Totality is structural: there is exactly one field per action, so a set
/// can never be missing an entry or carry an extra one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingSet {
    add_zoom: Binding,
    add_trim: Binding,
    add_annotation: Binding,
    add_keyframe: Binding,
    delete_selected: Binding,
    play_pause: Binding,
}

impl BindingSet {
    pub(crate) fn from_parts(
        add_zoom: Binding,
        add_trim: Binding,
        add_annotation: Binding,
        add_keyframe: Binding,
        delete_selected: Binding,
        play_pause: Binding,
    ) -> Self {
        Self {
            add_zoom,
            add_trim,
            add_annotation,
            add_keyframe,
            delete_selected,
            play_pause,
        }
    }

    /// The binding for `action`.
    pub fn get(&self, action: Action) -> &Binding {
        match action {
            Action::AddZoom => &self.add_zoom,
            Action::AddTrim => &self.add_trim,
            Action::AddAnnotation => &self.add_annotation,
            Action::AddKeyframe => &self.add_keyframe,
            Action::DeleteSelected => &self.delete_selected,
            Action::PlayPause => &self.play_pause,
        }
    }

    fn slot_mut(&mut self, action: Action) -> &mut Binding {
        match action {
            Action::AddZoom => &mut self.add_zoom,
            Action::AddTrim => &mut self.add_trim,
            Action::AddAnnotation => &mut self.add_annotation,
            Action::AddKeyframe => &mut self.add_keyframe,
            Action::DeleteSelected => &mut self.delete_selected,
            Action::PlayPause => &mut self.play_pause,
        }
    }

    /// Replace the binding for `action`, returning the previous one.
    pub fn set(&mut self, action: Action, binding: Binding) -> Binding {
        std::mem::replace(self.slot_mut(action), binding)
    }

    /// Copy of this set with one entry replaced.
    pub fn with_binding(mut self, action: Action, binding: Binding) -> Self {
        self.set(action, binding);
        self
    }

    /// Iterate `(action, binding)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, &Binding)> + '_ {
        Action::ALL.into_iter().map(|action| (action, self.get(action)))
    }

    /// Convert to the storage shape with every action present.
    pub fn to_partial(&self) -> PartialBindings {
        self.iter()
            .map(|(action, binding)| {
                (
                    action.id().to_string(),
                    StoredBinding::from(binding.clone()).to_value(),
                )
            })
            .collect()
    }
}

impl Default for BindingSet {
    fn default() -> Self {
        crate::defaults::bindings()
    }
}

/// Build a complete [`BindingSet`] from possibly incomplete stored data.
///
/// Starts from the defaults and overwrites each known action that has a
/// value. Unknown action ids, `null` values and invalid entries (wrong shape,
/// empty or bare-modifier keys) are logged and skipped one by one, so the
/// result is always total and valid entries survive their neighbours.
pub fn merge_with_defaults(partial: &PartialBindings) -> BindingSet {
    let mut merged = crate::defaults::bindings();
    let mut applied = 0;

    for (id, value) in partial {
        let action: Action = match id.parse() {
            Ok(action) => action,
            Err(e) => {
                log::warn!("Ignoring stored shortcut: {}", e);
                continue;
            }
        };
        if value.is_null() {
            continue;
        }
        match Binding::deserialize(value) {
            Ok(binding) => {
                merged.set(action, binding);
                applied += 1;
            }
            Err(e) => {
                log::warn!(
                    "Invalid stored shortcut for '{}', keeping default: {}",
                    action,
                    e
                );
            }
        }
    }

    log::info!(
        "Merged {} stored shortcut(s) over {} default(s)",
        applied,
        Action::ALL.len()
    );
    merged
}
