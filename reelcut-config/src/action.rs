//! The fixed set of editor actions that can be rebound.

use crate::error::UnknownAction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An editor operation that can be triggered by a configurable shortcut.
///
/// Serialized with the camelCase identifiers used in the shortcut file
/// (`addZoom`, `deleteSelected`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    AddZoom,
    AddTrim,
    AddAnnotation,
    AddKeyframe,
    DeleteSelected,
    PlayPause,
}

impl Action {
    /// Every action, in display order.
    pub const ALL: [Action; 6] = [
        Action::AddZoom,
        Action::AddTrim,
        Action::AddAnnotation,
        Action::AddKeyframe,
        Action::DeleteSelected,
        Action::PlayPause,
    ];

    /// Identifier used as the key in the stored shortcut map.
    pub const fn id(self) -> &'static str {
        match self {
            Action::AddZoom => "addZoom",
            Action::AddTrim => "addTrim",
            Action::AddAnnotation => "addAnnotation",
            Action::AddKeyframe => "addKeyframe",
            Action::DeleteSelected => "deleteSelected",
            Action::PlayPause => "playPause",
        }
    }

    /// Human-readable name shown in the shortcuts dialog.
    pub const fn label(self) -> &'static str {
        match self {
            Action::AddZoom => "Add Zoom",
            Action::AddTrim => "Add Trim",
            Action::AddAnnotation => "Add Annotation",
            Action::AddKeyframe => "Add Keyframe",
            Action::DeleteSelected => "Delete Selected",
            Action::PlayPause => "Play / Pause",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.id() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.id().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(
            "renderVideo".parse::<Action>(),
            Err(UnknownAction("renderVideo".to_string()))
        );
        // Ids are case-sensitive, matching the stored map keys
        assert!("AddZoom".parse::<Action>().is_err());
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Action::DeleteSelected).unwrap();
        assert_eq!(json, "\"deleteSelected\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Action::PlayPause.label(), "Play / Pause");
        assert_eq!(Action::AddKeyframe.label(), "Add Keyframe");
    }
}
