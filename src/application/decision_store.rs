//! DecisionStore - owns the journal, the draft slot, and outcome selection.
//!
//! The store is the only writer of the storage slot. It reads the slot once in
//! [`DecisionStore::open`] and rewrites it after every change to the
//! collection. Write failures are logged and otherwise ignored: the in-memory
//! collection stays authoritative.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::journal_document;
use crate::domain::foundation::DecisionId;
use crate::domain::journal::{ArgumentKind, Decision, DecisionPatch, JournalError, Weight};
use crate::ports::KeyValueStorage;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "decision-journal.decisions";

/// What happened when the store read its slot at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// Nothing stored yet (first run).
    Absent,
    /// Records were read back.
    Loaded { count: usize, legacy: bool },
    /// The slot held text that is not a readable journal.
    Corrupt { reason: String },
    /// The storage medium could not be read.
    Unavailable { reason: String },
}

impl LoadReport {
    /// True when stored data existed but had to be ignored.
    pub fn lost_data(&self) -> bool {
        matches!(self, LoadReport::Corrupt { .. })
    }
}

/// The decision journal and its editing state.
pub struct DecisionStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    decisions: Vec<Decision>,
    draft: Decision,
    selected: Option<DecisionId>,
    pending_choice: String,
    validation_error: Option<JournalError>,
    load_report: LoadReport,
}

impl DecisionStore {
    /// Opens the store, reading the collection stored under `key`.
    ///
    /// Never fails: an absent, unreadable or corrupt slot yields an empty
    /// collection, and [`DecisionStore::load_report`] says which it was.
    pub async fn open(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let (decisions, load_report) = Self::load(storage.as_ref(), &key).await;

        Self {
            storage,
            key,
            decisions,
            draft: Decision::draft(),
            selected: None,
            pending_choice: String::new(),
            validation_error: None,
            load_report,
        }
    }

    async fn load(storage: &dyn KeyValueStorage, key: &str) -> (Vec<Decision>, LoadReport) {
        let text = match storage.get(key).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                info!(key, "no stored journal, starting empty");
                return (Vec::new(), LoadReport::Absent);
            }
            Err(e) => {
                warn!(key, error = %e, "journal storage unreadable, starting empty");
                return (
                    Vec::new(),
                    LoadReport::Unavailable {
                        reason: e.to_string(),
                    },
                );
            }
        };

        match journal_document::decode(&text) {
            Ok(decoded) => {
                if decoded.duplicates_dropped > 0 {
                    warn!(
                        key,
                        dropped = decoded.duplicates_dropped,
                        "stored journal repeated decision ids; kept the first of each"
                    );
                }
                let count = decoded.decisions.len();
                info!(key, count, legacy = decoded.legacy, "journal loaded");
                (
                    decoded.decisions,
                    LoadReport::Loaded {
                        count,
                        legacy: decoded.legacy,
                    },
                )
            }
            Err(e) => {
                warn!(
                    key,
                    error = %e,
                    "stored journal is corrupt; starting empty, it will be overwritten on the next save"
                );
                (
                    Vec::new(),
                    LoadReport::Corrupt {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// All decisions, newest first.
    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Looks up a saved decision by id.
    pub fn get(&self, id: &DecisionId) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.id() == id)
    }

    /// Number of saved decisions.
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Finalized decisions, newest first.
    pub fn completed(&self) -> impl Iterator<Item = &Decision> {
        self.decisions.iter().filter(|d| d.is_complete())
    }

    /// Decisions still awaiting an outcome, newest first.
    pub fn pending(&self) -> impl Iterator<Item = &Decision> {
        self.decisions.iter().filter(|d| !d.is_complete())
    }

    /// The decision being composed or edited.
    pub fn draft(&self) -> &Decision {
        &self.draft
    }

    /// Direct access to the draft for free-text fields (title, chosen option).
    pub fn draft_mut(&mut self) -> &mut Decision {
        &mut self.draft
    }

    /// True when the draft is a copy of a saved record being edited.
    pub fn is_editing(&self) -> bool {
        self.position(self.draft.id()).is_some()
    }

    /// The decision currently selected for recording an outcome.
    pub fn selected(&self) -> Option<&DecisionId> {
        self.selected.as_ref()
    }

    /// The outcome typed or picked for the selected decision, not yet applied.
    pub fn pending_choice(&self) -> &str {
        &self.pending_choice
    }

    /// The last rejected update, for display until the next successful one.
    pub fn validation_error(&self) -> Option<&JournalError> {
        self.validation_error.as_ref()
    }

    /// What happened when the storage slot was read at startup.
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    fn position(&self, id: &DecisionId) -> Option<usize> {
        self.decisions.iter().position(|d| d.id() == id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Collection mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Commits `draft` as the newest decision and resets the draft slot.
    ///
    /// Returns `false` without changing anything when the title is blank or a
    /// decision with the same id is already saved.
    pub async fn create(&mut self, draft: Decision) -> bool {
        if !draft.has_title() {
            debug!("create ignored: title is empty");
            return false;
        }
        if self.position(draft.id()).is_some() {
            warn!(decision_id = %draft.id(), "create ignored: id already saved");
            return false;
        }

        debug!(decision_id = %draft.id(), title = draft.title(), "decision created");
        self.decisions.insert(0, draft);
        self.draft = Decision::draft();
        self.persist().await;
        true
    }

    /// Replaces the saved decision `id` with `decision`, keeping its place
    /// in the list and its id.
    ///
    /// Returns `false` when `id` is unknown or the replacement has no title.
    pub async fn update(&mut self, id: &DecisionId, mut decision: Decision) -> bool {
        let Some(index) = self.position(id) else {
            debug!(decision_id = %id, "update ignored: not found");
            return false;
        };
        if !decision.has_title() {
            debug!(decision_id = %id, "update ignored: title is empty");
            return false;
        }

        decision.rebind(*id);
        self.decisions[index] = decision;
        debug!(decision_id = %id, "decision replaced");
        self.persist().await;
        true
    }

    /// Merges `patch` into the saved decision `id`.
    ///
    /// Returns `Ok(false)` when `id` is unknown.
    ///
    /// # Errors
    ///
    /// - `OutcomeNotAllowed` if the patch chooses an option that is not one of
    ///   the outcomes; nothing is applied and the error is kept as the
    ///   store's validation message
    pub async fn apply_partial_update(
        &mut self,
        id: &DecisionId,
        patch: DecisionPatch,
    ) -> Result<bool, JournalError> {
        let Some(index) = self.position(id) else {
            debug!(decision_id = %id, "partial update ignored: not found");
            return Ok(false);
        };

        if let Err(e) = self.decisions[index].apply(patch) {
            warn!(decision_id = %id, code = %e.code(), error = %e, "partial update rejected");
            self.validation_error = Some(e.clone());
            return Err(e);
        }

        self.validation_error = None;
        debug!(decision_id = %id, "decision updated");
        self.persist().await;
        Ok(true)
    }

    /// Removes the decision `id`. Deleting an unknown id is a no-op.
    pub async fn delete(&mut self, id: &DecisionId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.decisions.remove(index);
        if self.selected.as_ref() == Some(id) {
            self.clear_selection();
        }
        if self.draft.id() == id {
            self.draft = Decision::draft();
        }
        debug!(decision_id = %id, "decision deleted");
        self.persist().await;
        true
    }

    /// Marks the saved decision `id` complete, recording its chosen option as
    /// the actual outcome. The draft is updated too when it is that decision.
    ///
    /// Returns `false` without changing anything when no option is chosen.
    pub async fn finalize(&mut self, id: &DecisionId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let record = &mut self.decisions[index];
        if !record.finalize() {
            debug!(decision_id = %id, "finalize ignored: no option chosen");
            return false;
        }

        if self.draft.id() == id {
            self.draft.set_chosen_option(record.chosen_option());
            self.draft.finalize();
        }
        info!(decision_id = %id, outcome = record.actual_outcome(), "decision finalized");
        self.persist().await;
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Draft editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a pro or con to the draft with the default weight.
    pub fn add_argument(&mut self, kind: ArgumentKind, text: &str) -> bool {
        self.draft.add_argument(kind, text)
    }

    pub fn remove_argument(&mut self, kind: ArgumentKind, index: usize) -> bool {
        self.draft.remove_argument(kind, index).is_some()
    }

    /// Sets the weight of a draft argument.
    ///
    /// Returns `Ok(false)` when `index` is out of range.
    ///
    /// # Errors
    ///
    /// - `Validation` if `weight` is outside 1..=10
    pub fn set_weight(
        &mut self,
        kind: ArgumentKind,
        index: usize,
        weight: u8,
    ) -> Result<bool, JournalError> {
        let weight = Weight::try_new(weight)?;
        Ok(self.draft.set_weight(kind, index, weight))
    }

    pub fn add_outcome(&mut self, text: &str) -> bool {
        self.draft.add_outcome(text)
    }

    pub fn remove_outcome(&mut self, index: usize) -> bool {
        self.draft.remove_outcome(index).is_some()
    }

    /// Loads a copy of the saved decision `id` into the draft slot.
    pub fn edit(&mut self, id: &DecisionId) -> bool {
        match self.get(id) {
            Some(decision) => {
                self.draft = decision.clone();
                true
            }
            None => false,
        }
    }

    /// Saves the draft: overwrites the saved record when editing, otherwise
    /// creates a new one. The draft slot is reset on success.
    pub async fn save_draft(&mut self) -> bool {
        let draft = self.draft.clone();
        if self.is_editing() {
            let id = *draft.id();
            let saved = self.update(&id, draft).await;
            if saved {
                self.draft = Decision::draft();
            }
            saved
        } else {
            self.create(draft).await
        }
    }

    /// Throws away the draft and starts a fresh one.
    pub fn discard_draft(&mut self) {
        self.draft = Decision::draft();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Outcome selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Selects the saved decision `id` for recording an outcome and clears
    /// any previous choice input.
    pub fn select_for_outcome(&mut self, id: &DecisionId) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        self.selected = Some(*id);
        self.pending_choice.clear();
        self.validation_error = None;
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.pending_choice.clear();
    }

    pub fn set_pending_choice(&mut self, choice: impl Into<String>) {
        self.pending_choice = choice.into();
    }

    /// Applies the pending choice to the selected decision and finalizes it.
    ///
    /// Returns `Ok(true)` when the decision was finalized, which also clears
    /// the selection; `Ok(false)` when nothing is selected or the choice is
    /// empty.
    ///
    /// # Errors
    ///
    /// - `OutcomeNotAllowed` if the pending choice is not one of the outcomes
    pub async fn confirm_outcome(&mut self) -> Result<bool, JournalError> {
        let Some(id) = self.selected else {
            return Ok(false);
        };
        if self.pending_choice.trim().is_empty() {
            debug!(decision_id = %id, "confirm ignored: no option chosen");
            return Ok(false);
        }

        let patch = DecisionPatch::new().chosen_option(self.pending_choice.clone());
        if !self.apply_partial_update(&id, patch).await? {
            return Ok(false);
        }
        let finalized = self.finalize(&id).await;
        if finalized {
            self.clear_selection();
        }
        Ok(finalized)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// Writes the whole collection to the storage slot.
    ///
    /// Failures are logged and not retried; the in-memory state is kept.
    pub async fn persist(&self) {
        let text = match journal_document::encode(&self.decisions) {
            Ok(text) => text,
            Err(e) => {
                error!(key = %self.key, error = %e, "failed to encode journal");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, &text).await {
            error!(
                key = %self.key,
                error = %e,
                "failed to persist journal; changes are kept in memory only"
            );
        }
    }
}
