//! Field-mapping drift audit.
//!
//! The normalizer's per-template field tables and the questionnaire
//! definitions evolve independently, and entries drift: a mapping may
//! reference an answer field no question produces. The questionnaire is
//! ground truth. This audit surfaces every such entry so it can be fixed
//! deliberately instead of silently resolving to defaults at render time.

use crate::fields::FIELD_MAPPINGS;
use crate::questionnaire::Questionnaire;

/// One normalizer entry that references a question the template does not
/// declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingDrift {
    /// The canonical field key (e.g. `projectName`)
    pub canonical_key: &'static str,
    /// The template whose mapping is stale
    pub template_id: &'static str,
    /// The referenced answer field with no matching question
    pub field_id: &'static str,
}

impl std::fmt::Display for MappingDrift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "mapping '{}' references '{}' which is not a question of template '{}'",
            self.canonical_key, self.field_id, self.template_id
        )
    }
}

/// Audits every canonical mapping against one template's questionnaire.
///
/// Only the mapping's declared source fields are checked; the `…-other`
/// elaboration fields formatters consult are themselves declared questions
/// and get flagged through their own mappings when missing.
pub fn audit_field_mappings(questionnaire: &Questionnaire) -> Vec<MappingDrift> {
    let mut drift = Vec::new();

    for mapping in FIELD_MAPPINGS {
        let Some(source) = mapping.source_for(questionnaire.template_id) else {
            continue;
        };

        for field_id in source.candidates().iter().copied() {
            if !questionnaire.declares(field_id) {
                drift.push(MappingDrift {
                    canonical_key: mapping.key,
                    template_id: questionnaire.template_id,
                    field_id,
                });
            }
        }
    }

    drift
}

/// Logs every drift record as a warning. Intended to run once at startup.
pub fn log_mapping_drift(questionnaire: &Questionnaire) {
    for record in audit_field_mappings(questionnaire) {
        tracing::warn!(
            canonical_key = record.canonical_key,
            template_id = record.template_id,
            field_id = record.field_id,
            "field mapping drift: {record}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::WEB_DEVELOPMENT_QUESTIONNAIRE;

    #[test]
    fn web_development_mappings_resolve_to_declared_questions() {
        // The mappings reference real web-development questions throughout;
        // the audit must not invent drift where there is none.
        let drift = audit_field_mappings(&WEB_DEVELOPMENT_QUESTIONNAIRE);
        assert!(drift.is_empty(), "unexpected drift: {drift:?}");
    }

    #[test]
    fn drift_is_reported_per_missing_field() {
        // A throwaway questionnaire declaring almost nothing: every mapped
        // source field for its template should be flagged.
        use crate::questionnaire::{Question, QuestionKind, Questionnaire};

        static SPARSE: Questionnaire = Questionnaire {
            id: "sparse",
            template_id: "web-development",
            title: "Sparse",
            description: None,
            steps: &[],
            questions: &[Question {
                id: "project-name",
                kind: QuestionKind::Text,
                label: "Project Name",
                placeholder: None,
                help_text: None,
                options: &[],
                validation: &[],
                conditions: &[],
                step: 1,
            }],
        };

        let drift = audit_field_mappings(&SPARSE);
        assert!(drift
            .iter()
            .any(|d| d.canonical_key == "projectDescription" && d.field_id == "project-description"));
        assert!(!drift
            .iter()
            .any(|d| d.field_id == "project-name"));
    }
}
