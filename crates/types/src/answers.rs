//! Questionnaire answer model.
//!
//! Answers arrive as a flat map from template-defined field identifiers to
//! loosely-typed values. `AnswerValue` makes the possible shapes explicit as
//! a tagged union while the untagged serde representation keeps the wire
//! format identical to the original JSON blobs (`"x"`, `["a","b"]`, `3`,
//! `true`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single questionnaire answer.
///
/// Values are one of text, a list of option codes, a number, or a boolean.
/// Absence is modelled by the key being missing from the [`AnswerSet`], not
/// by a variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Free text or a single option code
    Text(String),
    /// Multi-select option codes, in selection order
    List(Vec<String>),
    /// Numeric answer
    Number(f64),
    /// Checkbox-style boolean answer
    Bool(bool),
}

impl AnswerValue {
    /// Returns the text content when the value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list content when the value is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AnswerValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this value counts as "no answer": an empty string or an
    /// empty list. Numbers and booleans are always considered answered.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.is_empty(),
            AnswerValue::List(items) => items.is_empty(),
            AnswerValue::Number(_) | AnswerValue::Bool(_) => false,
        }
    }

    /// Coerces the value to its display string.
    ///
    /// Lists are joined with `", "` here because a single answer sometimes
    /// flows into a one-line field; structured bullet rendering is the
    /// responsibility of the markdown layer, which receives the list intact.
    pub fn display_string(&self) -> String {
        match self {
            AnswerValue::Text(s) => s.clone(),
            AnswerValue::List(items) => items.join(", "),
            AnswerValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            AnswerValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_owned())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(value: Vec<&str>) -> Self {
        AnswerValue::List(value.into_iter().map(str::to_owned).collect())
    }
}

/// The flat answer map for one brief.
///
/// Keys are template-defined field identifiers; no schema is enforced here.
/// Every accessor is non-throwing: absent keys and empty values degrade to
/// `None` rather than an error, because per-template field naming drifts and
/// a render must never fail on a missing answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an answer, returning `self` for fluent test construction.
    pub fn with(mut self, field_id: &str, value: impl Into<AnswerValue>) -> Self {
        self.0.insert(field_id.to_owned(), value.into());
        self
    }

    pub fn insert(&mut self, field_id: &str, value: impl Into<AnswerValue>) {
        self.0.insert(field_id.to_owned(), value.into());
    }

    /// Raw value lookup. Empty values are returned as-is; use
    /// [`AnswerSet::answered`] to filter them.
    pub fn get(&self, field_id: &str) -> Option<&AnswerValue> {
        self.0.get(field_id)
    }

    /// The value for `field_id` if present and non-empty.
    pub fn answered(&self, field_id: &str) -> Option<&AnswerValue> {
        self.0.get(field_id).filter(|v| !v.is_empty())
    }

    /// Non-empty text content of `field_id`, if any.
    pub fn text(&self, field_id: &str) -> Option<&str> {
        self.answered(field_id).and_then(AnswerValue::as_text)
    }

    /// Non-empty list content of `field_id`, if any.
    pub fn list(&self, field_id: &str) -> Option<&[String]> {
        self.answered(field_id).and_then(AnswerValue::as_list)
    }

    /// Whether the field carries a non-empty answer.
    pub fn is_answered(&self, field_id: &str) -> bool {
        self.answered(field_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_serde_accepts_all_shapes() {
        let json = r#"{
            "project-name": "Acme relaunch",
            "technologies": ["react", "node"],
            "team-size": 4,
            "has-branding": true
        }"#;
        let answers: AnswerSet = serde_json::from_str(json).unwrap();
        assert_eq!(answers.text("project-name"), Some("Acme relaunch"));
        assert_eq!(
            answers.list("technologies"),
            Some(&["react".to_owned(), "node".to_owned()][..])
        );
        assert_eq!(
            answers.get("team-size"),
            Some(&AnswerValue::Number(4.0))
        );
        assert_eq!(answers.get("has-branding"), Some(&AnswerValue::Bool(true)));
    }

    #[test]
    fn empty_values_degrade_to_unanswered() {
        let answers = AnswerSet::new()
            .with("blank", "")
            .with("none", Vec::<&str>::new());
        assert!(!answers.is_answered("blank"));
        assert!(!answers.is_answered("none"));
        assert!(!answers.is_answered("missing"));
        assert!(answers.get("blank").is_some());
    }

    #[test]
    fn display_string_formats_whole_numbers_plainly() {
        assert_eq!(AnswerValue::Number(25000.0).display_string(), "25000");
        assert_eq!(AnswerValue::Number(2.5).display_string(), "2.5");
    }

    #[test]
    fn display_string_joins_lists() {
        let value = AnswerValue::from(vec!["a", "b"]);
        assert_eq!(value.display_string(), "a, b");
    }
}
