//! Focus state for the editor: which pair, and which field within it.

use pairkit_types::PairId;

/// Identifies which field is active within the focused row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairField {
    /// The name (key) column input.
    #[default]
    Name,
    /// The value column input.
    Value,
}

/// The single logical focus point for the editor.
///
/// `pair` of `None` means no row holds focus, e.g. the user is on the trailing
/// placeholder row. Focus is tracked by identifier, never by index, so
/// deletions elsewhere in the list cannot make it dangle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTarget {
    pub pair: Option<PairId>,
    pub field: PairField,
}

impl FocusTarget {
    /// Drops the pair component, keeping the field for the next target.
    pub fn clear_pair(&mut self) {
        self.pair = None;
    }

    /// Retargets focus onto `pair` without changing the field.
    pub fn set_pair(&mut self, pair: PairId) {
        self.pair = Some(pair);
    }
}
