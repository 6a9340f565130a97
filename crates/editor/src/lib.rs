//! Controller layer for an ordered, editable key/value pair list.
//!
//! This crate owns the list of pairs, the focus state machine that decides
//! which row/field receives input next, and the debounced change committer
//! that echoes edits to the owning system. Rendering, drag visuals, and file
//! choosers live outside; rows reach back in through the [`rows::RowHandle`]
//! registry and the host drives time through [`KeyValueEditor::poll`].

pub mod committer;
pub mod config;
pub mod editor;
pub mod focus;
pub mod keymap;
pub mod rows;
pub mod store;

pub use committer::DEBOUNCE_MILLIS;
pub use config::{EditorConfig, ValueInputKind};
pub use editor::{EditorCallbacks, KeyValueEditor};
pub use focus::{FocusTarget, PairField};
pub use keymap::NavIntent;
pub use rows::{RowHandle, RowHandleRegistry};
