//! Top-level brief generation.
//!
//! Each template is served by exactly one generation path: the legacy
//! long-form generator or the section engine. The facade picks the path,
//! prepends the document title, and guarantees deterministic output for a
//! fixed answer set.

use crate::error::{BriefError, BriefResult};
use crate::legacy::generate_legacy_markdown;
use crate::questionnaire::{questionnaire_by_template_id, validate_answers};
use crate::sections;
use crate::templates::{template_by_id, template_ids as t};
use briefgen_types::AnswerSet;

/// Which generator renders a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPath {
    /// Long-form per-template generator
    Legacy,
    /// Section template engine
    Sections,
}

/// The generation path for a template. web-development predates the
/// section engine and still renders through the legacy path.
pub fn generation_path(template_id: &str) -> GenerationPath {
    match template_id {
        t::WEB_DEVELOPMENT => GenerationPath::Legacy,
        _ => GenerationPath::Sections,
    }
}

/// Generates the complete markdown brief for a template.
///
/// The output starts with an H1 title derived from the template, followed
/// by the body from whichever path the template uses. Deterministic: the
/// same answers produce byte-identical output.
///
/// # Errors
///
/// Returns `BriefError::UnknownTemplate` when `template_id` is not a
/// registered template.
pub fn generate_brief(template_id: &str, answers: &AnswerSet) -> BriefResult<String> {
    let template = template_by_id(template_id)
        .ok_or_else(|| BriefError::UnknownTemplate(template_id.to_owned()))?;

    let body = match generation_path(template_id) {
        GenerationPath::Legacy => generate_legacy_markdown(answers, template_id),
        GenerationPath::Sections => sections::generate_markdown(answers, template_id),
    };

    Ok(format!("# {} Brief\n\n{}", template.title, body))
}

/// Generates a brief after validating the answers against the template's
/// questionnaire, when one is defined. Templates without a questionnaire
/// generate unvalidated, as before.
///
/// # Errors
///
/// `BriefError::UnknownTemplate` for an unregistered template, or
/// `BriefError::Validation` carrying every submission issue found.
pub fn generate_validated_brief(template_id: &str, answers: &AnswerSet) -> BriefResult<String> {
    if let Some(questionnaire) = questionnaire_by_template_id(template_id) {
        let issues = validate_answers(questionnaire, answers);
        if !issues.is_empty() {
            return Err(BriefError::Validation(issues));
        }
    }
    generate_brief(template_id, answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_template_is_an_error() {
        let result = generate_brief("interpretive-dance", &AnswerSet::new());
        assert!(matches!(result, Err(BriefError::UnknownTemplate(_))));
    }

    #[test]
    fn web_development_uses_the_legacy_path() {
        assert_eq!(generation_path("web-development"), GenerationPath::Legacy);
        assert_eq!(
            generation_path("tech-product-saas"),
            GenerationPath::Sections
        );
    }

    #[test]
    fn output_starts_with_template_title() {
        let answers = AnswerSet::new().with("project-name", "Acme");
        let markdown = generate_brief("web-development", &answers).unwrap();
        assert!(markdown.starts_with("# Web Development Brief\n\n"));
    }

    #[test]
    fn regeneration_is_byte_identical() {
        let answers = AnswerSet::new()
            .with("project-name", "Acme Storefront")
            .with("project-type", "ecommerce")
            .with("primary-goals", vec!["sales"])
            .with("target-audience", "DIY hobbyists")
            .with("timeline", "1-3-months")
            .with("budget-range", "5k-10k");
        let first = generate_brief("web-development", &answers).unwrap();
        let second = generate_brief("web-development", &answers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn validated_generation_rejects_incomplete_answers() {
        let answers = AnswerSet::new().with("project-name", "Acme");
        let result = generate_validated_brief("web-development", &answers);
        match result {
            Err(BriefError::Validation(issues)) => assert!(!issues.is_empty()),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn validated_generation_passes_without_a_questionnaire() {
        // Templates without a defined questionnaire generate unvalidated.
        let answers = AnswerSet::new().with("brand-name", "Ada Writes Code");
        assert!(generate_validated_brief("personal-tech-brand", &answers).is_ok());
    }

    #[test]
    fn generates_from_a_stored_answers_payload() {
        // Answers round-trip through JSON when a briefing is saved; the
        // generator must accept the deserialised set unchanged.
        let answers: AnswerSet = serde_json::from_str(
            r#"{
                "product-name": "Shipshape",
                "technologies": ["react", "node"],
                "target-users": "Engineering leads"
            }"#,
        )
        .unwrap();
        let markdown = generate_brief("tech-product-saas", &answers).unwrap();
        assert!(markdown.contains("**Project Name:** Shipshape\n\n"));
        assert!(markdown.contains("**Target Audience:** Engineering leads\n\n"));
    }

    #[test]
    fn section_templates_render_through_the_engine() {
        let answers = AnswerSet::new()
            .with("brand-name", "Ada Writes Code")
            .with("tech-niche", "Rust tooling");
        let markdown = generate_brief("personal-tech-brand", &answers).unwrap();
        assert!(markdown.starts_with("# Personal Tech Brand Brief\n\n"));
        assert!(markdown.contains("**Tech Niche/Specialty:** Rust tooling\n\n"));
    }
}
