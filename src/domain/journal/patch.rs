//! Partial updates to a saved decision.

use serde::Deserialize;

use super::Argument;

/// A set of fields to merge into an existing decision.
///
/// Fields left as `None` are untouched. Applied all-or-nothing by
/// [`Decision::apply`](super::Decision::apply).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecisionPatch {
    pub title: Option<String>,
    pub pros: Option<Vec<Argument>>,
    pub cons: Option<Vec<Argument>>,
    pub outcomes: Option<Vec<String>>,
    pub chosen_option: Option<String>,
    pub actual_outcome: Option<String>,
    pub is_complete: Option<bool>,
}

impl DecisionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn pros(mut self, pros: Vec<Argument>) -> Self {
        self.pros = Some(pros);
        self
    }

    pub fn cons(mut self, cons: Vec<Argument>) -> Self {
        self.cons = Some(cons);
        self
    }

    pub fn outcomes(mut self, outcomes: Vec<String>) -> Self {
        self.outcomes = Some(outcomes);
        self
    }

    pub fn chosen_option(mut self, chosen: impl Into<String>) -> Self {
        self.chosen_option = Some(chosen.into());
        self
    }

    pub fn actual_outcome(mut self, actual: impl Into<String>) -> Self {
        self.actual_outcome = Some(actual.into());
        self
    }

    pub fn is_complete(mut self, complete: bool) -> Self {
        self.is_complete = Some(complete);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
