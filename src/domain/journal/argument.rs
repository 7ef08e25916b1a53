//! Weighted arguments for and against a decision.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Subjective importance of an argument, 1 (minor) to 10 (decisive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weight(u8);

impl Weight {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: Weight = Weight(5);

    /// Creates a Weight, returning error if outside 1..=10.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "weight",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Weight {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the ledger an argument sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentKind {
    Pro,
    Con,
}

impl ArgumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ArgumentKind::Pro => "pro",
            ArgumentKind::Con => "con",
        }
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One pro or con with its weight.
///
/// # Invariants
///
/// - `text` is trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArgumentFields")]
pub struct Argument {
    text: String,
    weight: Weight,
}

/// Unchecked wire form of [`Argument`].
#[derive(Deserialize)]
struct ArgumentFields {
    text: String,
    weight: Weight,
}

impl TryFrom<ArgumentFields> for Argument {
    type Error = ValidationError;

    fn try_from(fields: ArgumentFields) -> Result<Self, Self::Error> {
        Ok(Argument::new(fields.text)?.with_weight(fields.weight))
    }
}

impl Argument {
    /// Creates an argument with the default weight.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the text is blank after trimming
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(Self {
            text: text.to_string(),
            weight: Weight::DEFAULT,
        })
    }

    /// Returns the same argument carrying a different weight.
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_accepts_bounds() {
        assert_eq!(Weight::try_new(1).unwrap().value(), 1);
        assert_eq!(Weight::try_new(10).unwrap().value(), 10);
    }

    #[test]
    fn weight_rejects_out_of_range() {
        assert!(matches!(
            Weight::try_new(0),
            Err(ValidationError::OutOfRange { actual: 0, .. })
        ));
        assert!(Weight::try_new(11).is_err());
    }

    #[test]
    fn weight_defaults_to_five() {
        assert_eq!(Weight::default().value(), 5);
    }

    #[test]
    fn weight_deserialization_enforces_range() {
        let ok: Weight = serde_json::from_str("7").unwrap();
        assert_eq!(ok.value(), 7);
        assert!(serde_json::from_str::<Weight>("42").is_err());
    }

    #[test]
    fn argument_new_trims_text_and_uses_default_weight() {
        let arg = Argument::new("  Career growth  ").unwrap();
        assert_eq!(arg.text(), "Career growth");
        assert_eq!(arg.weight(), Weight::DEFAULT);
    }

    #[test]
    fn argument_new_rejects_blank_text() {
        assert_eq!(
            Argument::new("   ").unwrap_err(),
            ValidationError::empty_field("text")
        );
    }

    #[test]
    fn argument_serializes_as_text_and_weight() {
        let arg = Argument::new("Cost")
            .unwrap()
            .with_weight(Weight::try_new(8).unwrap());
        let json = serde_json::to_value(&arg).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "Cost", "weight": 8 }));
    }

    #[test]
    fn argument_deserialization_trims_and_rejects_blank_text() {
        let arg: Argument =
            serde_json::from_str(r#"{ "text": "  Cost ", "weight": 3 }"#).unwrap();
        assert_eq!(arg.text(), "Cost");
        assert_eq!(arg.weight().value(), 3);

        assert!(serde_json::from_str::<Argument>(r#"{ "text": "   ", "weight": 3 }"#).is_err());
    }

    #[test]
    fn argument_kind_displays_lowercase() {
        assert_eq!(ArgumentKind::Pro.to_string(), "pro");
        assert_eq!(ArgumentKind::Con.to_string(), "con");
    }
}
