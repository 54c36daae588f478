//! The persisted briefing entity.

use crate::AnswerSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload stored with a briefing: the raw answers and the generated (and
/// possibly hand-edited) markdown. Updates always replace this payload as a
/// whole; there are no partial updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BriefingData {
    #[serde(default)]
    pub answers: AnswerSet,
    #[serde(default)]
    pub markdown: String,
}

/// A saved brief: template category, answer/markdown payload, timestamps.
///
/// `id` is an opaque unique identifier assigned by the storage layer on
/// first save. `updated_at` is refreshed on every data replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Briefing {
    pub id: String,
    pub category: String,
    pub data: BriefingData,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_defaults_allow_sparse_payloads() {
        let data: BriefingData = serde_json::from_str("{}").unwrap();
        assert!(data.answers.is_empty());
        assert!(data.markdown.is_empty());
    }

    #[test]
    fn briefing_serialises_camel_case_timestamps() {
        let briefing = Briefing {
            id: "abc".into(),
            category: "web-development".into(),
            data: BriefingData {
                answers: AnswerSet::new(),
                markdown: "# Test".into(),
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&briefing).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["data"]["markdown"], "# Test");
    }
}
