//! Decision aggregate.
//!
//! A decision starts life in the store's draft slot, is committed to the
//! journal on save, and can later be finalized once an outcome is chosen.

use serde::{Deserialize, Serialize};

use super::{Argument, ArgumentKind, DecisionPatch, JournalError, Weight};
use crate::domain::foundation::{DecisionId, Timestamp, ValidationError};

/// Decision record - one user-authored journal entry.
///
/// # Invariants
///
/// - `id` never changes after creation
/// - `chosen_option`, when set through [`Decision::apply`], is empty or one of
///   the outcomes the record held before the patch
/// - `is_complete` implies `chosen_option` is non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    id: DecisionId,
    title: String,
    pros: Vec<Argument>,
    cons: Vec<Argument>,
    outcomes: Vec<String>,
    chosen_option: String,
    actual_outcome: String,
    created_at: Timestamp,
    is_complete: bool,
}

impl Decision {
    /// Creates an empty draft with a fresh id and creation time.
    pub fn draft() -> Self {
        Self {
            id: DecisionId::new(),
            title: String::new(),
            pros: Vec::new(),
            cons: Vec::new(),
            outcomes: Vec::new(),
            chosen_option: String::new(),
            actual_outcome: String::new(),
            created_at: Timestamp::now(),
            is_complete: false,
        }
    }

    /// Creates an empty draft carrying the given title.
    pub fn titled(title: impl Into<String>) -> Self {
        let mut draft = Self::draft();
        draft.title = title.into();
        draft
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &DecisionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pros(&self) -> &[Argument] {
        &self.pros
    }

    pub fn cons(&self) -> &[Argument] {
        &self.cons
    }

    /// Returns the pros or cons depending on `kind`.
    pub fn arguments(&self, kind: ArgumentKind) -> &[Argument] {
        match kind {
            ArgumentKind::Pro => &self.pros,
            ArgumentKind::Con => &self.cons,
        }
    }

    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    pub fn chosen_option(&self) -> &str {
        &self.chosen_option
    }

    pub fn actual_outcome(&self) -> &str {
        &self.actual_outcome
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// True when the title is non-empty after trimming, i.e. the record may be saved.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// True when `choice` may be recorded as the chosen option.
    ///
    /// The empty string always qualifies; it clears the choice.
    pub fn allows_choice(&self, choice: &str) -> bool {
        choice.is_empty() || self.outcomes.iter().any(|o| o == choice)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scoring
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum of the weights of all pros.
    pub fn pro_score(&self) -> u32 {
        Self::total_weight(&self.pros)
    }

    /// Sum of the weights of all cons.
    pub fn con_score(&self) -> u32 {
        Self::total_weight(&self.cons)
    }

    /// Pro score minus con score. Positive leans towards going ahead.
    pub fn balance(&self) -> i64 {
        i64::from(self.pro_score()) - i64::from(self.con_score())
    }

    fn total_weight(arguments: &[Argument]) -> u32 {
        arguments.iter().map(|a| u32::from(a.weight().value())).sum()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Draft editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the title verbatim; emptiness is checked on save.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Records free-text choice input while drafting, without validation.
    pub fn set_chosen_option(&mut self, chosen: impl Into<String>) {
        self.chosen_option = chosen.into();
    }

    /// Appends a pro or con with the default weight.
    ///
    /// Returns `false` (and changes nothing) when the trimmed text is empty.
    pub fn add_argument(&mut self, kind: ArgumentKind, text: &str) -> bool {
        match Argument::new(text) {
            Ok(argument) => {
                self.arguments_mut(kind).push(argument);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes the argument at `index`, if there is one.
    pub fn remove_argument(&mut self, kind: ArgumentKind, index: usize) -> Option<Argument> {
        let arguments = self.arguments_mut(kind);
        (index < arguments.len()).then(|| arguments.remove(index))
    }

    /// Sets the weight of the argument at `index`.
    ///
    /// Returns `false` when the index is out of range.
    pub fn set_weight(&mut self, kind: ArgumentKind, index: usize, weight: Weight) -> bool {
        match self.arguments_mut(kind).get_mut(index) {
            Some(argument) => {
                argument.set_weight(weight);
                true
            }
            None => false,
        }
    }

    /// Appends a candidate outcome. Duplicates are kept.
    ///
    /// Returns `false` when the trimmed text is empty.
    pub fn add_outcome(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.outcomes.push(text.to_string());
        true
    }

    /// Removes the outcome at `index`, if there is one.
    pub fn remove_outcome(&mut self, index: usize) -> Option<String> {
        (index < self.outcomes.len()).then(|| self.outcomes.remove(index))
    }

    fn arguments_mut(&mut self, kind: ArgumentKind) -> &mut Vec<Argument> {
        match kind {
            ArgumentKind::Pro => &mut self.pros,
            ArgumentKind::Con => &mut self.cons,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations on saved records
    // ─────────────────────────────────────────────────────────────────────────

    /// Merges `patch` into this decision, all-or-nothing.
    ///
    /// A non-empty chosen option must be one of the record's current
    /// outcomes; outcomes carried by the same patch do not count.
    ///
    /// # Errors
    ///
    /// - `OutcomeNotAllowed` if the chosen option is not among the outcomes
    /// - `Validation` if the patch would blank the title, or would mark the
    ///   decision complete without a chosen option
    pub fn apply(&mut self, patch: DecisionPatch) -> Result<(), JournalError> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(ValidationError::empty_field("title").into());
            }
        }

        if let Some(chosen) = patch.chosen_option.as_deref() {
            if !self.allows_choice(chosen) {
                return Err(JournalError::outcome_not_allowed(chosen, &self.outcomes));
            }
        }

        if patch.is_complete == Some(true) {
            let chosen = patch.chosen_option.as_deref().unwrap_or(&self.chosen_option);
            if chosen.is_empty() {
                return Err(ValidationError::empty_field("chosenOption").into());
            }
        }

        let DecisionPatch {
            title,
            pros,
            cons,
            outcomes,
            chosen_option,
            actual_outcome,
            is_complete,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(pros) = pros {
            self.pros = pros;
        }
        if let Some(cons) = cons {
            self.cons = cons;
        }
        if let Some(outcomes) = outcomes {
            self.outcomes = outcomes;
        }
        if let Some(chosen) = chosen_option {
            self.chosen_option = chosen;
        }
        if let Some(actual) = actual_outcome {
            self.actual_outcome = actual;
        }
        if let Some(complete) = is_complete {
            self.is_complete = complete;
        }
        Ok(())
    }

    /// Marks the decision complete and records the chosen option as the
    /// actual outcome.
    ///
    /// Returns `false` (and changes nothing) when no option has been chosen.
    pub fn finalize(&mut self) -> bool {
        if self.chosen_option.is_empty() {
            return false;
        }
        self.actual_outcome = self.chosen_option.clone();
        self.is_complete = true;
        true
    }

    /// Keeps the stored identity when a full replacement arrives for `id`.
    pub(crate) fn rebind(&mut self, id: DecisionId) {
        self.id = id;
    }
}

impl Default for Decision {
    fn default() -> Self {
        Self::draft()
    }
}
