//! Field normalization across brief templates.
//!
//! Templates name the same semantic answer differently (`product-name`,
//! `brand-name`, `campaign-name` are all "the project name"). A
//! [`FieldMapping`] records, per template, which raw answer field (or
//! prioritised list of fields) backs a canonical key, along with an
//! optional display formatter and a default.
//!
//! Resolution never fails: absent mappings, absent answers, and empty
//! values all degrade to the configured default or `None`. Per-template
//! field naming drifts, and a brief render must survive that drift.

use crate::labels::{self, LabelTable};
use crate::templates::template_ids as t;
use briefgen_types::{AnswerSet, AnswerValue};

/// Where a canonical field's value comes from for one template.
#[derive(Debug, Clone, Copy)]
pub enum FieldSource {
    /// A single raw answer field.
    Single(&'static str),
    /// Candidate fields tried in declared order; the first non-empty wins.
    Priority(&'static [&'static str]),
}

impl FieldSource {
    /// The raw answer field identifiers this source reads, in order.
    pub fn candidates(&self) -> &[&'static str] {
        match self {
            FieldSource::Single(id) => std::slice::from_ref(id),
            FieldSource::Priority(ids) => ids,
        }
    }
}

/// Display formatter: receives the selected raw value, the template, and
/// the full answer set (so it can consult `…-other` elaboration fields).
/// May return `None`, in which case the canonical field resolves to
/// nothing.
pub type Formatter = fn(&AnswerValue, &str, &AnswerSet) -> Option<String>;

/// Declarative mapping from a canonical key to per-template raw fields.
pub struct FieldMapping {
    pub key: &'static str,
    fields: &'static [(&'static str, FieldSource)],
    formatter: Option<Formatter>,
    default_value: Option<&'static str>,
}

impl FieldMapping {
    /// The source used for `template_id`, if one is declared.
    pub fn source_for(&self, template_id: &str) -> Option<&FieldSource> {
        self.fields
            .iter()
            .find(|(id, _)| *id == template_id)
            .map(|(_, source)| source)
    }

}

/// Whether a raw answer value is selectable for normalization.
///
/// Only the empty string disqualifies a present value; empty lists pass
/// through so list formatters see them (and render nothing).
fn selectable(value: &AnswerValue) -> bool {
    !matches!(value, AnswerValue::Text(s) if s.is_empty())
}

/// Resolves a canonical field for the given answers and template.
///
/// 1. No source declared for the template → the mapping's default.
/// 2. Priority sources try each candidate in order; the first present,
///    non-empty-string value is selected. None selected → default.
/// 3. A configured formatter produces the final string from the selected
///    value (and may itself yield nothing).
/// 4. Without a formatter the raw value is coerced to its display string.
pub fn get_field_value(
    mapping: &FieldMapping,
    answers: &AnswerSet,
    template_id: &str,
) -> Option<String> {
    let source = match mapping.source_for(template_id) {
        Some(source) => source,
        None => return mapping.default_value.map(str::to_owned),
    };

    let selected = source
        .candidates()
        .iter()
        .find_map(|id| answers.get(id).filter(|v| selectable(v)));

    match selected {
        Some(value) => match mapping.formatter {
            Some(format) => format(value, template_id, answers),
            None => Some(value.display_string()),
        },
        None => mapping.default_value.map(str::to_owned),
    }
}

/// Convenience lookup by canonical key over the built-in registry.
pub fn get_field(key: &str, answers: &AnswerSet, template_id: &str) -> Option<String> {
    FIELD_MAPPINGS
        .iter()
        .find(|mapping| mapping.key == key)
        .and_then(|mapping| get_field_value(mapping, answers, template_id))
}

/// Renders a list of option codes as embedded bullet lines, translating
/// through `labels` and substituting the `other_field` elaboration for the
/// literal `other` code. Shared by the list-valued formatters below.
fn bullet_lines(
    items: &[String],
    labels: &LabelTable,
    answers: &AnswerSet,
    other_field: &str,
) -> String {
    let mut out = String::new();
    for item in items {
        if item == "other" {
            if let Some(other) = answers.answered(other_field) {
                out.push_str(&format!("- {}\n", other.display_string()));
                continue;
            }
        }
        out.push_str(&format!("- {}\n", labels.label_for(item)));
    }
    out
}

/// Resolves a single-choice code through a table, substituting the
/// elaboration field when the selection is literally `other`.
fn choice_with_other(
    value: &AnswerValue,
    labels: &LabelTable,
    answers: &AnswerSet,
    other_field: &str,
) -> Option<String> {
    let code = value.as_text()?;
    if code == "other" {
        if let Some(other) = answers.answered(other_field) {
            return Some(other.display_string());
        }
    }
    Some(labels.label_for(code).to_owned())
}

fn format_project_name(value: &AnswerValue, template_id: &str, _answers: &AnswerSet) -> Option<String> {
    // indie-tech-marketing campaigns often leave the name blank
    if template_id == t::INDIE_TECH_MARKETING && value.is_empty() {
        return Some("Marketing Campaign".to_owned());
    }
    Some(value.display_string())
}

fn format_success_metrics(value: &AnswerValue, _template_id: &str, answers: &AnswerSet) -> Option<String> {
    match value {
        AnswerValue::List(metrics) => Some(bullet_lines(
            metrics,
            &labels::SUCCESS_METRICS,
            answers,
            "success-metrics-other",
        )),
        other => Some(other.display_string()),
    }
}

fn format_budget(value: &AnswerValue, _template_id: &str, _answers: &AnswerSet) -> Option<String> {
    match value {
        AnswerValue::Text(code) => Some(labels::BUDGET_RANGES.label_for(code).to_owned()),
        AnswerValue::Number(amount) => Some(format!("${}", thousands(*amount))),
        other => Some(other.display_string()),
    }
}

fn format_timeline(value: &AnswerValue, _template_id: &str, _answers: &AnswerSet) -> Option<String> {
    match value {
        AnswerValue::Text(code) => Some(labels::TIMELINES.label_for(code).to_owned()),
        other => Some(other.display_string()),
    }
}

fn format_tech_stack(value: &AnswerValue, template_id: &str, answers: &AnswerSet) -> Option<String> {
    if let AnswerValue::List(technologies) = value {
        return Some(bullet_lines(
            technologies,
            &labels::TECHNOLOGIES,
            answers,
            "technologies-other",
        ));
    }

    // For marketing campaigns the "stack" is the primary channel.
    if template_id == t::INDIE_TECH_MARKETING {
        if let Some(code) = value.as_text() {
            return choice_with_other(
                value,
                &labels::MARKETING_CHANNELS,
                answers,
                "primary-channel-other",
            )
            .or_else(|| Some(code.to_owned()));
        }
    }

    Some(value.display_string())
}

fn format_product_type(value: &AnswerValue, template_id: &str, answers: &AnswerSet) -> Option<String> {
    if value.as_text() == Some("other") {
        let other_field = match template_id {
            t::WEB_DEVELOPMENT => "project-type-other",
            _ => "product-type-other",
        };
        if let Some(other) = answers.answered(other_field) {
            return Some(other.display_string());
        }
    }
    match value.as_text() {
        Some(code) => Some(labels::PRODUCT_TYPES.label_for(code).to_owned()),
        None => Some(value.display_string()),
    }
}

fn format_campaign_objectives(value: &AnswerValue, template_id: &str, answers: &AnswerSet) -> Option<String> {
    // Single-choice radio for indie marketing briefs.
    if template_id == t::INDIE_TECH_MARKETING {
        if let Some(code) = value.as_text() {
            if code == "other" {
                if let Some(other) = answers.answered("campaign-objective-other") {
                    return Some(other.display_string());
                }
            }
            return Some(labels::INDIE_OBJECTIVES.label_for(code).to_owned());
        }
    }

    if let AnswerValue::List(objectives) = value {
        let other_field = match template_id {
            t::DIGITAL_MARKETING_CAMPAIGN => "campaign-objectives-other",
            t::PRODUCT_MARKETING_LAUNCH => "launch-objectives-other",
            _ => "",
        };
        return Some(bullet_lines(
            objectives,
            &labels::CAMPAIGN_OBJECTIVES,
            answers,
            other_field,
        ));
    }

    Some(value.display_string())
}

fn format_primary_expertise(value: &AnswerValue, _template_id: &str, answers: &AnswerSet) -> Option<String> {
    choice_with_other(value, &labels::EXPERTISE, answers, "primary-expertise-other")
        .or_else(|| Some(value.display_string()))
}

fn format_brand_personality(value: &AnswerValue, _template_id: &str, answers: &AnswerSet) -> Option<String> {
    match value {
        AnswerValue::List(traits) => Some(bullet_lines(
            traits,
            &labels::BRAND_PERSONALITY,
            answers,
            "brand-personality-other",
        )),
        other => Some(other.display_string()),
    }
}

fn format_visual_identity(value: &AnswerValue, _template_id: &str, answers: &AnswerSet) -> Option<String> {
    match value {
        AnswerValue::List(items) => Some(bullet_lines(
            items,
            &labels::VISUAL_IDENTITY,
            answers,
            "visual-identity-other",
        )),
        other => Some(other.display_string()),
    }
}

fn format_primary_platform(value: &AnswerValue, _template_id: &str, answers: &AnswerSet) -> Option<String> {
    choice_with_other(value, &labels::PLATFORMS, answers, "primary-platform-other")
        .or_else(|| Some(value.display_string()))
}

fn format_content_types(value: &AnswerValue, _template_id: &str, answers: &AnswerSet) -> Option<String> {
    match value {
        AnswerValue::List(types) => Some(bullet_lines(
            types,
            &labels::CONTENT_TYPES,
            answers,
            "content-types-other",
        )),
        other => Some(other.display_string()),
    }
}

fn format_networking_strategy(value: &AnswerValue, _template_id: &str, answers: &AnswerSet) -> Option<String> {
    match value {
        AnswerValue::List(strategies) => Some(bullet_lines(
            strategies,
            &labels::NETWORKING,
            answers,
            "networking-strategy-other",
        )),
        other => Some(other.display_string()),
    }
}

/// Formats a non-negative amount with thousands separators.
fn thousands(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let digits = whole.abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if whole < 0 {
        out.insert(0, '-');
    }
    out
}

/// The canonical field registry.
pub static FIELD_MAPPINGS: &[FieldMapping] = &[
    FieldMapping {
        key: "projectName",
        fields: &[
            (t::INDIE_TECH_MARKETING, FieldSource::Single("project-name")),
            (t::TECH_PRODUCT_SAAS, FieldSource::Priority(&["product-name", "project-name"])),
            (t::WEB_DEVELOPMENT, FieldSource::Single("project-name")),
            (t::BRAND_IDENTITY, FieldSource::Priority(&["brand-name", "project-name"])),
            (t::DIGITAL_MARKETING_CAMPAIGN, FieldSource::Single("campaign-name")),
            (t::PRODUCT_MARKETING_LAUNCH, FieldSource::Single("product-name")),
            (t::PERSONAL_TECH_BRAND, FieldSource::Single("brand-name")),
            (t::TECH_SOLOPRENEUR_WEBSITE, FieldSource::Priority(&["custom-project-name", "website-purpose"])),
            (t::TECH_CONTENT_STRATEGY, FieldSource::Priority(&["content-purpose", "custom-project-name"])),
        ],
        formatter: Some(format_project_name),
        default_value: Some("Untitled Project"),
    },
    FieldMapping {
        key: "projectDescription",
        fields: &[
            (t::INDIE_TECH_MARKETING, FieldSource::Single("campaign-specifics")),
            (t::TECH_PRODUCT_SAAS, FieldSource::Priority(&["product-description", "project-description"])),
            (t::WEB_DEVELOPMENT, FieldSource::Single("project-description")),
            (t::BRAND_IDENTITY, FieldSource::Priority(&["company-description", "brand-description"])),
            (t::DIGITAL_MARKETING_CAMPAIGN, FieldSource::Priority(&["campaign-description", "campaign-specifics"])),
            (t::PRODUCT_MARKETING_LAUNCH, FieldSource::Single("product-description")),
            (t::PERSONAL_TECH_BRAND, FieldSource::Single("brand-description")),
            (t::TECH_SOLOPRENEUR_WEBSITE, FieldSource::Single("primary-call-to-action")),
            (t::TECH_CONTENT_STRATEGY, FieldSource::Priority(&["topic-areas", "current-status"])),
        ],
        formatter: None,
        default_value: None,
    },
    FieldMapping {
        key: "targetAudience",
        fields: &[
            (t::INDIE_TECH_MARKETING, FieldSource::Single("target-audience")),
            (t::TECH_PRODUCT_SAAS, FieldSource::Priority(&["target-users", "target-audience"])),
            (t::WEB_DEVELOPMENT, FieldSource::Single("target-audience")),
            (t::BRAND_IDENTITY, FieldSource::Single("target-audience")),
            (t::DIGITAL_MARKETING_CAMPAIGN, FieldSource::Single("target-audience")),
            (t::PRODUCT_MARKETING_LAUNCH, FieldSource::Single("target-audience")),
            (t::PERSONAL_TECH_BRAND, FieldSource::Single("target-audience")),
            (t::TECH_SOLOPRENEUR_WEBSITE, FieldSource::Single("target-audience")),
            (t::TECH_CONTENT_STRATEGY, FieldSource::Single("target-audience")),
        ],
        formatter: None,
        default_value: None,
    },
    FieldMapping {
        key: "successMetrics",
        fields: &[
            (t::INDIE_TECH_MARKETING, FieldSource::Single("success-metrics")),
            (t::TECH_PRODUCT_SAAS, FieldSource::Priority(&["success-metrics", "success-indicators"])),
            (t::WEB_DEVELOPMENT, FieldSource::Single("success-metrics")),
            (t::BRAND_IDENTITY, FieldSource::Single("success-metrics")),
            (t::DIGITAL_MARKETING_CAMPAIGN, FieldSource::Priority(&["campaign-kpis", "success-metrics"])),
            (t::PRODUCT_MARKETING_LAUNCH, FieldSource::Priority(&["launch-kpis", "success-metrics"])),
            (t::PERSONAL_TECH_BRAND, FieldSource::Single("success-metrics")),
            (t::TECH_SOLOPRENEUR_WEBSITE, FieldSource::Single("success-metrics")),
            (t::TECH_CONTENT_STRATEGY, FieldSource::Single("success-metrics")),
        ],
        formatter: Some(format_success_metrics),
        default_value: None,
    },
    FieldMapping {
        key: "budget",
        fields: &[
            (t::INDIE_TECH_MARKETING, FieldSource::Priority(&["budget-allocation", "budget-range"])),
            (t::TECH_PRODUCT_SAAS, FieldSource::Single("budget-range")),
            (t::WEB_DEVELOPMENT, FieldSource::Single("budget-range")),
            (t::BRAND_IDENTITY, FieldSource::Single("budget-range")),
            (t::DIGITAL_MARKETING_CAMPAIGN, FieldSource::Priority(&["campaign-budget", "budget-range"])),
            (t::PRODUCT_MARKETING_LAUNCH, FieldSource::Priority(&["marketing-budget", "budget-range"])),
            (t::PERSONAL_TECH_BRAND, FieldSource::Single("budget-allocation")),
            (t::TECH_SOLOPRENEUR_WEBSITE, FieldSource::Single("budget-range")),
        ],
        formatter: Some(format_budget),
        default_value: None,
    },
    FieldMapping {
        key: "timeline",
        fields: &[
            (t::INDIE_TECH_MARKETING, FieldSource::Priority(&["campaign-duration", "development-timeline"])),
            (t::TECH_PRODUCT_SAAS, FieldSource::Priority(&["development-timeline", "timeline"])),
            (t::WEB_DEVELOPMENT, FieldSource::Single("timeline")),
            (t::BRAND_IDENTITY, FieldSource::Single("timeline")),
            (t::DIGITAL_MARKETING_CAMPAIGN, FieldSource::Priority(&["campaign-duration", "timeline"])),
            (t::PRODUCT_MARKETING_LAUNCH, FieldSource::Priority(&["launch-date", "timeline"])),
            (t::TECH_SOLOPRENEUR_WEBSITE, FieldSource::Single("timeline")),
        ],
        formatter: Some(format_timeline),
        default_value: None,
    },
    FieldMapping {
        key: "techStack",
        fields: &[
            (t::INDIE_TECH_MARKETING, FieldSource::Single("primary-channel")),
            (t::TECH_PRODUCT_SAAS, FieldSource::Priority(&["technologies", "tech-requirements"])),
            (t::WEB_DEVELOPMENT, FieldSource::Single("technologies")),
        ],
        formatter: Some(format_tech_stack),
        default_value: None,
    },
    FieldMapping {
        key: "productType",
        fields: &[
            (t::TECH_PRODUCT_SAAS, FieldSource::Single("product-type")),
            (t::PRODUCT_MARKETING_LAUNCH, FieldSource::Single("product-type")),
            (t::WEB_DEVELOPMENT, FieldSource::Single("project-type")),
        ],
        formatter: Some(format_product_type),
        default_value: None,
    },
    FieldMapping {
        key: "campaignObjectives",
        fields: &[
            (t::DIGITAL_MARKETING_CAMPAIGN, FieldSource::Single("campaign-objectives")),
            (t::PRODUCT_MARKETING_LAUNCH, FieldSource::Single("launch-objectives")),
            (t::INDIE_TECH_MARKETING, FieldSource::Single("campaign-objective")),
        ],
        formatter: Some(format_campaign_objectives),
        default_value: None,
    },
    FieldMapping {
        key: "sellingProposition",
        fields: &[(t::INDIE_TECH_MARKETING, FieldSource::Single("selling-proposition"))],
        formatter: None,
        default_value: None,
    },
    FieldMapping {
        key: "callToAction",
        fields: &[(t::INDIE_TECH_MARKETING, FieldSource::Single("call-to-action"))],
        formatter: None,
        default_value: None,
    },
    FieldMapping {
        key: "followUpStrategy",
        fields: &[(t::INDIE_TECH_MARKETING, FieldSource::Single("follow-up-strategy"))],
        formatter: None,
        default_value: None,
    },
    FieldMapping {
        key: "techNiche",
        fields: &[(t::PERSONAL_TECH_BRAND, FieldSource::Single("tech-niche"))],
        formatter: None,
        default_value: Some(""),
    },
    FieldMapping {
        key: "primaryExpertise",
        fields: &[(t::PERSONAL_TECH_BRAND, FieldSource::Single("primary-expertise"))],
        formatter: Some(format_primary_expertise),
        default_value: None,
    },
    FieldMapping {
        key: "valueProposition",
        fields: &[(t::PERSONAL_TECH_BRAND, FieldSource::Single("value-proposition"))],
        formatter: None,
        default_value: None,
    },
    FieldMapping {
        key: "brandPersonality",
        fields: &[(t::PERSONAL_TECH_BRAND, FieldSource::Single("brand-personality"))],
        formatter: Some(format_brand_personality),
        default_value: None,
    },
    FieldMapping {
        key: "visualIdentity",
        fields: &[(t::PERSONAL_TECH_BRAND, FieldSource::Single("visual-identity"))],
        formatter: Some(format_visual_identity),
        default_value: None,
    },
    FieldMapping {
        key: "primaryPlatform",
        fields: &[(t::PERSONAL_TECH_BRAND, FieldSource::Single("primary-platform"))],
        formatter: Some(format_primary_platform),
        default_value: None,
    },
    FieldMapping {
        key: "contentTypes",
        fields: &[(t::PERSONAL_TECH_BRAND, FieldSource::Single("content-types"))],
        formatter: Some(format_content_types),
        default_value: None,
    },
    FieldMapping {
        key: "networkingStrategy",
        fields: &[(t::PERSONAL_TECH_BRAND, FieldSource::Single("networking-strategy"))],
        formatter: Some(format_networking_strategy),
        default_value: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::template_ids as t;

    #[test]
    fn priority_list_takes_first_non_empty_candidate() {
        let answers = AnswerSet::new()
            .with("product-name", "")
            .with("project-name", "Fallback Name");
        let value = get_field("projectName", &answers, t::TECH_PRODUCT_SAAS);
        assert_eq!(value.as_deref(), Some("Fallback Name"));

        let answers = AnswerSet::new()
            .with("product-name", "Primary Name")
            .with("project-name", "Fallback Name");
        let value = get_field("projectName", &answers, t::TECH_PRODUCT_SAAS);
        assert_eq!(value.as_deref(), Some("Primary Name"));
    }

    #[test]
    fn all_candidates_empty_falls_to_default() {
        let answers = AnswerSet::new().with("product-name", "");
        let value = get_field("projectName", &answers, t::TECH_PRODUCT_SAAS);
        assert_eq!(value.as_deref(), Some("Untitled Project"));
    }

    #[test]
    fn unmapped_template_returns_default_or_none() {
        let answers = AnswerSet::new().with("project-name", "Ignored");
        assert_eq!(
            get_field("projectName", &answers, "no-such-template").as_deref(),
            Some("Untitled Project")
        );
        assert_eq!(get_field("timeline", &answers, t::PERSONAL_TECH_BRAND), None);
    }

    #[test]
    fn budget_codes_translate_and_numbers_format() {
        let answers = AnswerSet::new().with("budget-range", "10k-25k");
        assert_eq!(
            get_field("budget", &answers, t::WEB_DEVELOPMENT).as_deref(),
            Some("$10,000 - $25,000")
        );

        let mut answers = AnswerSet::new();
        answers.insert("budget-range", AnswerValue::Number(25000.0));
        assert_eq!(
            get_field("budget", &answers, t::WEB_DEVELOPMENT).as_deref(),
            Some("$25,000")
        );
    }

    #[test]
    fn unknown_budget_code_renders_verbatim() {
        let answers = AnswerSet::new().with("budget-range", "galactic-credits");
        assert_eq!(
            get_field("budget", &answers, t::WEB_DEVELOPMENT).as_deref(),
            Some("galactic-credits")
        );
    }

    #[test]
    fn success_metrics_render_as_embedded_bullets() {
        let answers = AnswerSet::new().with("success-metrics", vec!["signups", "traffic"]);
        assert_eq!(
            get_field("successMetrics", &answers, t::INDIE_TECH_MARKETING).as_deref(),
            Some("- Signups/registrations\n- Website traffic\n")
        );
    }

    #[test]
    fn success_metrics_other_uses_elaboration_field() {
        let answers = AnswerSet::new()
            .with("success-metrics", vec!["other"])
            .with("success-metrics-other", "Churn below 2%");
        assert_eq!(
            get_field("successMetrics", &answers, t::INDIE_TECH_MARKETING).as_deref(),
            Some("- Churn below 2%\n")
        );
    }

    #[test]
    fn tech_stack_maps_indie_primary_channel() {
        let answers = AnswerSet::new().with("primary-channel", "hacker-news");
        assert_eq!(
            get_field("techStack", &answers, t::INDIE_TECH_MARKETING).as_deref(),
            Some("Hacker News")
        );

        let answers = AnswerSet::new()
            .with("primary-channel", "other")
            .with("primary-channel-other", "Discord servers");
        assert_eq!(
            get_field("techStack", &answers, t::INDIE_TECH_MARKETING).as_deref(),
            Some("Discord servers")
        );
    }

    #[test]
    fn product_type_other_elaboration_is_per_template() {
        let answers = AnswerSet::new()
            .with("project-type", "other")
            .with("project-type-other", "Browser extension");
        assert_eq!(
            get_field("productType", &answers, t::WEB_DEVELOPMENT).as_deref(),
            Some("Browser extension")
        );

        let answers = AnswerSet::new()
            .with("product-type", "other")
            .with("product-type-other", "CLI tool");
        assert_eq!(
            get_field("productType", &answers, t::TECH_PRODUCT_SAAS).as_deref(),
            Some("CLI tool")
        );
    }

    #[test]
    fn campaign_objective_radio_vs_multiselect() {
        let answers = AnswerSet::new().with("campaign-objective", "acquisition");
        assert_eq!(
            get_field("campaignObjectives", &answers, t::INDIE_TECH_MARKETING).as_deref(),
            Some("User/customer acquisition")
        );

        let answers = AnswerSet::new()
            .with("campaign-objectives", vec!["brand-awareness", "other"])
            .with("campaign-objectives-other", "Win an award");
        assert_eq!(
            get_field("campaignObjectives", &answers, t::DIGITAL_MARKETING_CAMPAIGN).as_deref(),
            Some("- Brand Awareness\n- Win an award\n")
        );
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(25000.0), "25,000");
        assert_eq!(thousands(1234567.0), "1,234,567");
    }
}
