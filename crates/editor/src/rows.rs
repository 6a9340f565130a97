//! Row-handle registry: the seam between the controller and rendered rows.
//!
//! Each mounted row registers a capability for moving input focus into its
//! name or value field, keyed by pair identifier, and deregisters on unmount.
//! The controller only looks handles up; it never owns their lifecycle, and a
//! missing handle (row not yet mounted, or the synthetic placeholder) is
//! always a silent skip.

use std::collections::HashMap;

use pairkit_types::PairId;
use tracing::trace;

use crate::focus::PairField;

/// Capability surface a rendered row exposes to the controller.
pub trait RowHandle {
    /// Move input focus into this row's name field.
    fn focus_name(&mut self);
    /// Move input focus into this row's value field.
    fn focus_value(&mut self);
}

/// Mapping from pair identifier to the live handle of its rendered row.
#[derive(Default)]
pub struct RowHandleRegistry {
    handles: HashMap<PairId, Box<dyn RowHandle>>,
}

impl RowHandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handle for `id`, replacing any previous registration.
    pub fn register(&mut self, id: PairId, handle: Box<dyn RowHandle>) {
        self.handles.insert(id, handle);
    }

    /// Removes the handle for `id`; unknown ids are ignored.
    pub fn deregister(&mut self, id: &PairId) {
        self.handles.remove(id);
    }

    pub fn contains(&self, id: &PairId) -> bool {
        self.handles.contains_key(id)
    }

    /// Fires the focus operation for `field` on the row registered under
    /// `id`. Best-effort: absent handles are skipped, never queued.
    pub fn apply_focus(&mut self, id: &PairId, field: PairField) {
        let Some(handle) = self.handles.get_mut(id) else {
            trace!(pair = %id, "no row handle registered; skipping focus");
            return;
        };
        match field {
            PairField::Name => handle.focus_name(),
            PairField::Value => handle.focus_value(),
        }
    }
}

impl std::fmt::Debug for RowHandleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowHandleRegistry")
            .field("registered", &self.handles.len())
            .finish()
    }
}
