//! The key/value editor controller.
//!
//! `KeyValueEditor` owns the pair sequence, the focus state machine, and the
//! change committer for one editing session, and orchestrates them in
//! response to keyboard intents, pointer focus, drag-reorder drops, and row
//! edits coming in from the rendering layer.
//!
//! The design is functional core, imperative shell: list mutations are pure
//! functions in [`crate::store`] producing fresh sequences, and this facade
//! is the shell that threads focus adjustment, row-handle retargeting, and
//! owner callbacks around them. Nothing in here returns an error; invalid
//! input is a defensive no-op (traced, never thrown).

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use pairkit_types::{Pair, PairId, PairPatch, PairSeed};
use pairkit_util::ids::generate_id;
use tracing::{debug, trace};

use crate::committer::ChangeCommitter;
use crate::config::EditorConfig;
use crate::focus::{FocusTarget, PairField};
use crate::keymap::{self, NavIntent};
use crate::rows::{RowHandle, RowHandleRegistry};
use crate::store;

/// Hooks the owning system registers to observe the session.
///
/// `on_change` is debounced and coalesced; `on_create` and `on_delete` fire
/// synchronously inside the triggering mutation and may therefore outnumber
/// `on_change` calls within one debounce window.
#[derive(Default)]
pub struct EditorCallbacks {
    on_change: Option<Box<dyn FnMut(&[Pair])>>,
    on_create: Option<Box<dyn FnMut()>>,
    on_delete: Option<Box<dyn FnMut(&Pair)>>,
}

impl EditorCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Debounced notification carrying the full new sequence.
    pub fn on_change(mut self, callback: impl FnMut(&[Pair]) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Fires synchronously on every successful insertion.
    pub fn on_create(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_create = Some(Box::new(callback));
        self
    }

    /// Fires synchronously on every deletion, with the removed pair.
    pub fn on_delete(mut self, callback: impl FnMut(&Pair) + 'static) -> Self {
        self.on_delete = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for EditorCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorCallbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_create", &self.on_create.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .finish()
    }
}

/// Controller state for one key/value editing session.
#[derive(Debug)]
pub struct KeyValueEditor {
    config: EditorConfig,
    focus: FocusTarget,
    rows: RowHandleRegistry,
    committer: ChangeCommitter,
    callbacks: EditorCallbacks,
}

impl KeyValueEditor {
    /// Builds a session from the externally supplied sequence, minting an
    /// identifier for every seed that lacks one. The initial load is never
    /// echoed back through `on_change`.
    pub fn new(seeds: Vec<PairSeed>, config: EditorConfig, callbacks: EditorCallbacks) -> Self {
        let pairs: Vec<Pair> = seeds
            .into_iter()
            .map(|seed| seed.into_pair(|| PairId(generate_id("pair"))))
            .collect();
        let mut committer = ChangeCommitter::default();
        committer.seed(pairs);
        KeyValueEditor {
            config,
            focus: FocusTarget::default(),
            rows: RowHandleRegistry::new(),
            committer,
            callbacks,
        }
    }

    /// The currently rendered sequence.
    pub fn pairs(&self) -> &[Pair] {
        self.committer.pairs()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The current logical focus point.
    pub fn focus(&self) -> &FocusTarget {
        &self.focus
    }

    /// Whether another pair fits under the configured cap; also decides
    /// whether the trailing placeholder row exists.
    pub fn can_add_pair(&self) -> bool {
        self.config.can_add_pair(self.committer.pairs().len())
    }

    // ---- row lifecycle -------------------------------------------------

    /// Registers the focus capability of a freshly mounted row.
    pub fn register_row(&mut self, id: PairId, handle: Box<dyn RowHandle>) {
        self.rows.register(id, handle);
    }

    /// Drops the capability of an unmounted row.
    pub fn deregister_row(&mut self, id: &PairId) {
        self.rows.deregister(id);
    }

    /// Re-applies the current focus target to its row handle. Hosts call
    /// this after re-rendering, so a row that mounted since the transition
    /// still receives focus. Absent handles are skipped silently.
    pub fn apply_focus(&mut self) {
        if let Some(id) = self.focus.pair.clone() {
            self.rows.apply_focus(&id, self.focus.field);
        }
    }

    // ---- input events --------------------------------------------------

    /// Routes one keystroke from the focused field. `current_text` is the
    /// text content of that field, which gates Backspace navigation.
    pub fn handle_key_event(&mut self, event: KeyEvent, current_text: &str) {
        let Some(intent) = keymap::decode(event, current_text.is_empty()) else {
            return;
        };
        trace!(?intent, "navigation intent");
        match intent {
            NavIntent::FocusNext => self.focus_next(),
            NavIntent::FocusPrevious => self.focus_previous(true),
            NavIntent::NextPair => self.focus_next_pair(),
            NavIntent::PreviousPair => self.focus_previous_pair(),
        }
    }

    /// Pointer click into a row's name field: pointer focus always wins over
    /// computed focus, so state is set directly with no retargeting.
    pub fn focus_name(&mut self, id: &PairId) {
        self.focus.set_pair(id.clone());
        self.focus.field = PairField::Name;
    }

    /// Pointer click into a row's value field.
    pub fn focus_value(&mut self, id: &PairId) {
        self.focus.set_pair(id.clone());
        self.focus.field = PairField::Value;
    }

    /// Interaction with the trailing placeholder's name area: inserts a new
    /// pair targeting its name field.
    pub fn add_from_name(&mut self) {
        self.focus.field = PairField::Name;
        self.add_pair(None, PairPatch::default());
    }

    /// Interaction with the trailing placeholder's value area.
    pub fn add_from_value(&mut self) {
        self.focus.field = PairField::Value;
        self.add_pair(None, PairPatch::default());
    }

    /// A row finished an edit: replace the matching pair, preserving its
    /// position and identity. Unknown identifiers are ignored.
    pub fn handle_pair_change(&mut self, pair: Pair) {
        let Some(next) = store::replace(self.committer.pairs(), pair) else {
            debug!("change for unknown pair; skipping");
            return;
        };
        self.commit(next);
    }

    /// Explicit delete of a row (delete button): focus does not follow the
    /// gap, it is invalidated outright.
    pub fn handle_pair_delete(&mut self, id: &PairId) {
        let Some(position) = store::index_of(self.committer.pairs(), id) else {
            debug!(pair = %id, "delete for unknown pair; skipping");
            return;
        };
        self.delete_at(position, true);
    }

    /// Drag-reorder drop: reinserts `moved` adjacent to `target`. A negative
    /// `offset` places it after the target, otherwise before. Self-drops and
    /// unknown identifiers are no-ops.
    pub fn handle_move(&mut self, moved: &PairId, target: &PairId, offset: i32) {
        let Some(next) = store::move_relative(self.committer.pairs(), moved, target, offset) else {
            trace!(moved = %moved, target = %target, "move skipped");
            return;
        };
        self.commit(next);
    }

    // ---- time ----------------------------------------------------------

    /// Fires the debounced `on_change` when its window has settled at `now`.
    /// Returns whether a notification fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(pairs) = self.committer.take_due(now) else {
            return false;
        };
        if let Some(callback) = self.callbacks.on_change.as_mut() {
            callback(&pairs);
        }
        true
    }

    /// Time until the pending notification is due, for bounding the host's
    /// event-poll timeout.
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.committer.poll_timeout(now)
    }

    // ---- focus transitions ---------------------------------------------

    /// Enter / tab-forward: NAME moves to the same pair's VALUE; VALUE moves
    /// to the next pair's NAME, growing the list when already at the last
    /// pair.
    fn focus_next(&mut self) {
        match self.focus.field {
            PairField::Name => {
                self.focus.field = PairField::Value;
                self.apply_focus();
            }
            PairField::Value => {
                let Some(index) = self.focused_index() else {
                    return;
                };
                self.focus.field = PairField::Name;
                if index + 1 >= self.committer.pairs().len() {
                    self.add_pair(None, PairPatch::default());
                } else {
                    self.retarget(index + 1);
                }
            }
        }
    }

    /// Backspace on an empty field: VALUE retreats to the same pair's NAME.
    /// From NAME, a pair holding no content at all is deleted (focus falls to
    /// the previous pair's VALUE); a pair whose name alone is empty moves
    /// focus back without deleting; a named pair stays put.
    fn focus_previous(&mut self, delete_if_empty: bool) {
        match self.focus.field {
            PairField::Value => {
                self.focus.field = PairField::Name;
                self.apply_focus();
            }
            PairField::Name => {
                let Some(index) = self.focused_index() else {
                    return;
                };
                let pair = self.committer.pairs()[index].clone();
                if pair.is_empty() && delete_if_empty {
                    self.focus.field = PairField::Value;
                    self.delete_at(index, false);
                    self.apply_focus();
                } else if pair.name.is_empty() {
                    self.focus.field = PairField::Value;
                    self.focus_previous_pair();
                }
            }
        }
    }

    /// ArrowDown: same field, next pair; at the last pair the list grows
    /// instead, keeping the field unchanged.
    fn focus_next_pair(&mut self) {
        let Some(index) = self.focused_index() else {
            return;
        };
        if index + 1 >= self.committer.pairs().len() {
            self.add_pair(None, PairPatch::default());
        } else {
            self.retarget(index + 1);
        }
    }

    /// ArrowUp: same field, previous pair; no-op at the first pair.
    fn focus_previous_pair(&mut self) {
        let Some(index) = self.focused_index() else {
            return;
        };
        if index > 0 {
            self.retarget(index - 1);
        }
    }

    // ---- mutation core -------------------------------------------------

    /// Inserts a pair built from `patch` at `position` (`None` appends),
    /// designating it as the pending focus target. Silently rejected once
    /// the configured cap is reached: no commit, no `on_create`.
    fn add_pair(&mut self, position: Option<usize>, patch: PairPatch) {
        if !self.can_add_pair() {
            debug!(max_pairs = ?self.config.max_pairs, "pair cap reached; insert rejected");
            return;
        }
        let pair = patch.into_pair(PairId(generate_id("pair")));
        self.focus.set_pair(pair.id.clone());
        let next = store::insert_at(self.committer.pairs(), position, pair);
        self.commit(next);
        if let Some(callback) = self.callbacks.on_create.as_mut() {
            callback();
        }
        self.apply_focus();
    }

    /// Removes the pair at `position`, firing `on_delete` with it. When the
    /// focus sat at or past the gap, it falls back to the previous sibling,
    /// or to nothing when `break_focus` asks for an outright reset.
    fn delete_at(&mut self, position: usize, break_focus: bool) {
        let Some((next, removed)) = store::remove_at(self.committer.pairs(), position) else {
            debug!(position, "delete out of bounds; skipping");
            return;
        };
        if let Some(focused) = self.focused_index()
            && focused >= position
        {
            if break_focus {
                self.focus.clear_pair();
            } else {
                match position.checked_sub(1).and_then(|i| next.get(i)) {
                    Some(previous) => self.focus.set_pair(previous.id.clone()),
                    None => self.focus.clear_pair(),
                }
            }
        }
        if let Some(callback) = self.callbacks.on_delete.as_mut() {
            callback(&removed);
        }
        self.commit(next);
    }

    /// Routes a fresh sequence through the committer.
    fn commit(&mut self, pairs: Vec<Pair>) {
        self.committer.commit(pairs);
    }

    /// Position of the focused pair, recomputed from its identifier.
    fn focused_index(&self) -> Option<usize> {
        let id = self.focus.pair.as_ref()?;
        store::index_of(self.committer.pairs(), id)
    }

    /// Moves focus to the pair at `index`, keeping the field, and retargets
    /// its row handle.
    fn retarget(&mut self, index: usize) {
        let Some(pair) = self.committer.pairs().get(index) else {
            return;
        };
        self.focus.set_pair(pair.id.clone());
        self.apply_focus();
    }
}
