//! Shortcut configuration for the reelcut video editor.
//!
//! This crate provides the data the keybinding engine operates on:
//!
//! - The fixed [`Action`] set and its display labels
//! - [`Binding`] values and the total [`BindingSet`] map
//! - Default and fixed shortcut tables
//! - Merging stored (possibly stale) data over the defaults
//! - Persistence through the [`ShortcutStore`] trait

pub mod action;
pub mod binding;
pub mod binding_set;
pub mod defaults;
pub mod error;
pub mod persistence;

pub use action::Action;
pub use binding::{Binding, MODIFIER_KEYS, StoredBinding, is_modifier_key};
pub use binding_set::{BindingSet, PartialBindings, merge_with_defaults};
pub use defaults::{FIXED_SHORTCUTS, FixedShortcut};
pub use error::{BindingError, ConfigError, PersistError, UnknownAction};
pub use persistence::{FileStore, MemoryStore, ShortcutStore, StoreFormat, load_bindings};
