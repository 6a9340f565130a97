//! Shared value objects for the pairkit key/value editor.
//!
//! These types are deliberately dumb data carriers: identity rules and list
//! invariants are enforced by the editor crate, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a pair within one editing session.
///
/// Assigned once at creation and never reassigned; ordering of pairs is
/// carried by their position in the list, not by the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairId(pub String);

impl PairId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PairId {
    fn from(value: String) -> Self {
        PairId(value)
    }
}

impl From<&str> for PairId {
    fn from(value: &str) -> Self {
        PairId(value.to_string())
    }
}

/// One name/value entry in the edited list.
///
/// `file_name` and `kind` carry the optional multipart file metadata; both are
/// `None` for plain text pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// Unique within the owning list; identity, never mutated.
    pub id: PairId,
    /// The key column text.
    pub name: String,
    /// The value column text.
    pub value: String,
    /// File name for multipart file rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Multipart row kind (e.g. "file" vs "text").
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Pair {
    /// Builds a blank pair with the given identity.
    pub fn blank(id: PairId) -> Self {
        Pair {
            id,
            name: String::new(),
            value: String::new(),
            file_name: None,
            kind: None,
        }
    }

    /// Whether the pair holds no user content.
    ///
    /// `kind` is presentation metadata and does not count as content.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.value.is_empty() && self.file_name.as_deref().is_none_or(str::is_empty)
    }
}

/// A pair as supplied by the owning system when a session starts.
///
/// Sequences that predate pair identifiers carry no `id`; the editor
/// backfills a fresh one at construction, and the identifier then sticks for
/// the life of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSeed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PairId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl PairSeed {
    /// Promotes the seed to a full pair, minting an identifier when absent.
    pub fn into_pair(self, mint_id: impl FnOnce() -> PairId) -> Pair {
        Pair {
            id: self.id.unwrap_or_else(mint_id),
            name: self.name,
            value: self.value,
            file_name: self.file_name,
            kind: self.kind,
        }
    }
}

impl From<Pair> for PairSeed {
    fn from(pair: Pair) -> Self {
        PairSeed {
            id: Some(pair.id),
            name: pair.name,
            value: pair.value,
            file_name: pair.file_name,
            kind: pair.kind,
        }
    }
}

/// Partial pair used when inserting: any field left `None` falls back to the
/// blank default, and the identity is always freshly generated by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl PairPatch {
    /// Merges the patch over a blank pair carrying `id`.
    pub fn into_pair(self, id: PairId) -> Pair {
        Pair {
            id,
            name: self.name.unwrap_or_default(),
            value: self.value.unwrap_or_default(),
            file_name: self.file_name,
            kind: self.kind,
        }
    }
}
