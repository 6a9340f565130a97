//! Editor configuration supplied by the owning system.

use serde::{Deserialize, Serialize};

/// How the value column should accept input. Only meaningful to the rendering
/// layer; the controller treats all kinds identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueInputKind {
    #[default]
    Text,
    Password,
}

/// Static configuration for one editing session.
///
/// Everything except `max_pairs` is passed through to the rendering layer
/// untouched; `max_pairs` caps inserts in the controller itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Upper bound on the number of pairs; `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pairs: Option<usize>,
    /// Ghost text for empty name fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_placeholder: Option<String>,
    /// Ghost text for empty value fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_placeholder: Option<String>,
    /// Input mode for the value column.
    #[serde(default)]
    pub value_input_kind: ValueInputKind,
    /// Whether rows may carry multipart file metadata.
    #[serde(default)]
    pub multipart: bool,
    /// Whether rows may be drag-reordered.
    #[serde(default)]
    pub sortable: bool,
}

impl EditorConfig {
    /// Whether `current_len` leaves room for one more pair.
    ///
    /// Also decides whether the rendering layer shows the trailing
    /// placeholder row.
    pub fn can_add_pair(&self, current_len: usize) -> bool {
        self.max_pairs.is_none_or(|max| current_len < max)
    }
}
