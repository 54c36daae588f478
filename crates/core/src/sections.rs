//! Section template engine.
//!
//! A brief document is assembled from an ordered registry of sections:
//! Project Overview, Goals & Objectives, Technical Requirements, Timeline &
//! Budget, Additional Information. Each section is a strategy pair of a
//! pure `condition` predicate and a deterministic `content` generator; a
//! section whose condition is false contributes zero characters, never a
//! stray heading.
//!
//! Several sections carry per-template arms on top of the generic
//! normalizer path (marketing campaigns render Campaign Objective/Duration
//! instead of a project type, personal-brand briefs render Brand
//! Personality and Tech Niche). That special-casing is deliberate
//! per-template customisation and is preserved as written.

use crate::fields::get_field;
use crate::labels;
use crate::markdown as md;
use crate::templates::template_ids as t;
use briefgen_types::AnswerSet;

/// A named, conditionally-included block of the generated document.
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    condition: fn(&AnswerSet, &str) -> bool,
    content: fn(&AnswerSet, &str) -> String,
}

impl Section {
    /// Whether the section should be included for these answers.
    pub fn condition(&self, answers: &AnswerSet, template_id: &str) -> bool {
        (self.condition)(answers, template_id)
    }

    /// The section's markdown fragment, without its heading.
    pub fn content(&self, answers: &AnswerSet, template_id: &str) -> String {
        (self.content)(answers, template_id)
    }
}

/// True when the normalizer resolved a non-empty value.
fn has(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn overview_condition(_answers: &AnswerSet, _template_id: &str) -> bool {
    true
}

fn overview_content(answers: &AnswerSet, template_id: &str) -> String {
    if template_id == t::INDIE_TECH_MARKETING {
        let mut content = String::new();

        // Campaigns get a fixed display name; campaign-specifics doubles as
        // the description unless it still holds the placeholder text.
        content += &md::field("Project Name", "Marketing Campaign");

        if let Some(specifics) = answers.text("campaign-specifics") {
            if specifics != "Campaign specifics" {
                content += &md::field("Description", specifics);
            }
        }

        if let Some(objective) = answers.text("campaign-objective") {
            content += &md::field(
                "Campaign Objective",
                labels::INDIE_OBJECTIVES.label_for(objective),
            );
        }

        if let Some(duration) = answers.text("campaign-duration") {
            content += &md::field(
                "Campaign Duration",
                labels::CAMPAIGN_DURATIONS.label_for(duration),
            );
        }

        return content;
    }

    if template_id == t::PERSONAL_TECH_BRAND {
        let mut content = String::new();

        let brand_name = answers.text("brand-name").unwrap_or("Personal Brand");
        content += &md::field("Project Name", brand_name);

        if let Some(niche) = answers.answered("tech-niche") {
            content += &md::field("Tech Niche/Specialty", niche);
        }

        if let Some(expertise) = answers.text("primary-expertise") {
            let label = if expertise == "other" {
                answers
                    .text("primary-expertise-other")
                    .unwrap_or_else(|| labels::EXPERTISE.label_for(expertise))
            } else {
                labels::EXPERTISE.label_for(expertise)
            };
            content += &md::field("Primary Expertise", label);
        }

        if let Some(value_prop) = answers.answered("value-proposition") {
            content += &md::field("Value Proposition", value_prop);
        }

        return content;
    }

    let project_name = get_field("projectName", answers, template_id);
    let project_description = get_field("projectDescription", answers, template_id);

    let mut content = String::new();
    if has(&project_name) {
        content += &md::field("Project Name", project_name);
    }
    if has(&project_description) {
        content += &md::field("Description", project_description);
    }

    if template_id == t::PRODUCT_MARKETING_LAUNCH {
        let product_type = get_field("productType", answers, template_id);
        content += &md::conditional_field("Product Type", product_type);
    }

    if template_id == t::DIGITAL_MARKETING_CAMPAIGN {
        content += &md::conditional_field("Campaign Type", answers.answered("campaignType"));
    }

    if template_id == t::WEB_DEVELOPMENT {
        let project_type = get_field("productType", answers, template_id);
        content += &md::conditional_field("Project Type", project_type);
    }

    content
}

fn goals_condition(answers: &AnswerSet, template_id: &str) -> bool {
    if template_id == t::INDIE_TECH_MARKETING {
        return answers.is_answered("target-audience")
            || answers.is_answered("selling-proposition")
            || answers.is_answered("call-to-action")
            || answers.is_answered("success-metrics");
    }

    if template_id == t::PERSONAL_TECH_BRAND {
        return answers.is_answered("target-audience")
            || answers.is_answered("brand-personality")
            || answers.is_answered("success-metrics");
    }

    has(&get_field("targetAudience", answers, template_id))
        || has(&get_field("successMetrics", answers, template_id))
        || has(&get_field("campaignObjectives", answers, template_id))
}

/// Renders a `**{label}:**` block followed by translated bullets.
fn labelled_bullets(
    label: &str,
    codes: &[String],
    table: &labels::LabelTable,
    answers: &AnswerSet,
    other_field: &str,
) -> String {
    let mut block = format!("**{label}:**\n");
    for code in codes {
        if code == "other" {
            if let Some(other) = answers.answered(other_field) {
                block += &format!("- {}\n", other.display_string());
                continue;
            }
        }
        block += &format!("- {}\n", table.label_for(code));
    }
    block.push('\n');
    block
}

fn goals_content(answers: &AnswerSet, template_id: &str) -> String {
    if template_id == t::INDIE_TECH_MARKETING {
        let mut content = String::new();

        content += &md::conditional_field("Target Audience", answers.answered("target-audience"));
        content += &md::conditional_field(
            "Unique Selling Proposition",
            answers.answered("selling-proposition"),
        );
        content += &md::conditional_field("Call to Action", answers.answered("call-to-action"));

        match answers.answered("success-metrics") {
            Some(metrics) => match metrics.as_list() {
                Some(codes) => {
                    content += &labelled_bullets(
                        "Success Metrics",
                        codes,
                        &labels::SUCCESS_METRICS,
                        answers,
                        "success-metrics-other",
                    );
                }
                None => content += &md::field("Success Metrics", metrics),
            },
            None => {}
        }

        return content;
    }

    if template_id == t::PERSONAL_TECH_BRAND {
        let mut content = String::new();

        content += &md::conditional_field("Target Audience", answers.answered("target-audience"));

        if let Some(traits) = answers.list("brand-personality") {
            content += &labelled_bullets(
                "Brand Personality",
                traits,
                &labels::BRAND_PERSONALITY,
                answers,
                "brand-personality-other",
            );
        }

        if let Some(metrics) = answers.list("success-metrics") {
            content += &labelled_bullets(
                "Success Metrics",
                metrics,
                &labels::PERSONAL_BRAND_METRICS,
                answers,
                "success-metrics-other",
            );
        }

        return content;
    }

    let target_audience = get_field("targetAudience", answers, template_id);
    let success_metrics = get_field("successMetrics", answers, template_id);
    let campaign_objectives = get_field("campaignObjectives", answers, template_id);

    let mut content = String::new();
    content += &md::conditional_field("Target Audience", target_audience);

    if template_id == t::DIGITAL_MARKETING_CAMPAIGN || template_id == t::PRODUCT_MARKETING_LAUNCH {
        if let Some(objectives) = campaign_objectives.filter(|o| !o.is_empty()) {
            content += &format!("**Objectives:**\n{objectives}\n");
        }
    }

    content += &md::conditional_field("Success Metrics", success_metrics);
    content
}

fn technical_condition(answers: &AnswerSet, template_id: &str) -> bool {
    matches!(
        template_id,
        t::WEB_DEVELOPMENT | t::TECH_PRODUCT_SAAS | t::INDIE_TECH_MARKETING
    ) && has(&get_field("techStack", answers, template_id))
}

fn technical_content(answers: &AnswerSet, template_id: &str) -> String {
    let tech_stack = get_field("techStack", answers, template_id);

    let mut content = String::new();

    if template_id == t::INDIE_TECH_MARKETING {
        content += &md::conditional_field("Primary Marketing Channel", tech_stack);
    } else {
        content += &md::conditional_field("Technology Stack", tech_stack);
    }

    if template_id == t::WEB_DEVELOPMENT {
        content += &md::conditional_field("Hosting Requirements", answers.answered("hosting"));

        if let Some(features) = answers.list("features") {
            content += "**Features Required:**\n";
            content += &md::list(features);
        }
    }

    if template_id == t::TECH_PRODUCT_SAAS {
        if let Some(integrations) = answers.list("integrations") {
            content += "**Required Integrations:**\n";
            content += &md::list(integrations);
        }
    }

    if template_id == t::INDIE_TECH_MARKETING {
        if let Some(channels) = answers.list("marketing-channels") {
            content += "**Additional Marketing Channels:**\n";
            content += &md::mapped_list(
                channels,
                &labels::MARKETING_CHANNELS,
                answers.answered("marketing-channels-other"),
                "other",
            );
        }
    }

    content
}

fn timeline_budget_condition(answers: &AnswerSet, template_id: &str) -> bool {
    if template_id == t::PERSONAL_TECH_BRAND {
        return answers.is_answered("budget-allocation")
            || answers.is_answered("networking-strategy");
    }

    let has_timeline = has(&get_field("timeline", answers, template_id));
    let has_budget = has(&get_field("budget", answers, template_id));
    let has_target_numbers =
        template_id == t::INDIE_TECH_MARKETING && answers.is_answered("target-numbers");
    let has_follow_up = template_id == t::INDIE_TECH_MARKETING
        && has(&get_field("followUpStrategy", answers, template_id));

    has_timeline || has_budget || has_target_numbers || has_follow_up
}

fn timeline_budget_content(answers: &AnswerSet, template_id: &str) -> String {
    if template_id == t::PERSONAL_TECH_BRAND {
        let mut content = String::new();

        if let Some(allocation) = answers.text("budget-allocation") {
            content += &md::field(
                "Budget",
                labels::PERSONAL_BUDGET_ALLOCATIONS.label_for(allocation),
            );
        }

        if let Some(strategies) = answers.list("networking-strategy") {
            content += &labelled_bullets(
                "Networking Strategy",
                strategies,
                &labels::NETWORKING,
                answers,
                "networking-strategy-other",
            );
        }

        return content;
    }

    let timeline = get_field("timeline", answers, template_id);
    let budget = get_field("budget", answers, template_id);

    let mut content = String::new();

    // Campaign duration already appears in the overview for marketing briefs.
    if template_id != t::INDIE_TECH_MARKETING {
        content += &md::conditional_field("Timeline", timeline);
    }

    content += &md::conditional_field("Budget", budget);

    if template_id == t::DIGITAL_MARKETING_CAMPAIGN {
        if let Some(channels) = answers.list("marketingChannels") {
            content += "**Marketing Channels:**\n";
            content += &md::mapped_list(
                channels,
                &labels::CAMPAIGN_CHANNELS,
                answers.answered("otherChannel"),
                "other",
            );
        }
    }

    if template_id == t::INDIE_TECH_MARKETING {
        if let Some(targets) = answers.answered("target-numbers") {
            content += &md::field("Target Numbers", targets);
        }

        let follow_up = get_field("followUpStrategy", answers, template_id);
        content += &md::conditional_field("Follow-up Strategy", follow_up);
    }

    content
}

fn additional_condition(answers: &AnswerSet, template_id: &str) -> bool {
    if template_id == t::BRAND_IDENTITY {
        return answers.is_answered("brandValues") || answers.is_answered("competitorAnalysis");
    }

    if template_id == t::PRODUCT_MARKETING_LAUNCH {
        return answers.is_answered("marketingAssets") || answers.is_answered("competitors");
    }

    answers.is_answered("additionalNotes") || answers.is_answered("additional-info")
}

fn additional_content(answers: &AnswerSet, template_id: &str) -> String {
    let mut content = String::new();

    if template_id == t::BRAND_IDENTITY {
        content += &md::conditional_field("Brand Values", answers.answered("brandValues"));
        content += &md::conditional_field(
            "Competitor Analysis",
            answers.answered("competitorAnalysis"),
        );
    }

    if template_id == t::PRODUCT_MARKETING_LAUNCH {
        if let Some(assets) = answers.list("marketingAssets") {
            content += "**Required Marketing Assets:**\n";
            content += &md::mapped_list(
                assets,
                &labels::MARKETING_ASSETS,
                answers.answered("otherAsset"),
                "other",
            );
        }

        content += &md::conditional_field("Competitors", answers.answered("competitors"));
    }

    let notes = answers
        .answered("additionalNotes")
        .or_else(|| answers.answered("additional-info"));
    content += &md::conditional_field("Additional Notes", notes);

    content
}

/// The section registry, in document order.
pub static SECTIONS: &[Section] = &[
    Section {
        id: "project-overview",
        title: "Project Overview",
        condition: overview_condition,
        content: overview_content,
    },
    Section {
        id: "project-goals",
        title: "Goals & Objectives",
        condition: goals_condition,
        content: goals_content,
    },
    Section {
        id: "technical-requirements",
        title: "Technical Requirements",
        condition: technical_condition,
        content: technical_content,
    },
    Section {
        id: "timeline-budget",
        title: "Timeline & Budget",
        condition: timeline_budget_condition,
        content: timeline_budget_content,
    },
    Section {
        id: "additional-info",
        title: "Additional Information",
        condition: additional_condition,
        content: additional_content,
    },
];

/// Generates the full sectioned document body for a template.
///
/// Sections are evaluated in fixed order; excluded sections contribute
/// nothing. Marketing-campaign briefs that produce no content at all fall
/// back to a minimal document so the preview step never renders empty.
/// That safety net is intentionally scoped to that one template.
pub fn generate_markdown(answers: &AnswerSet, template_id: &str) -> String {
    let mut markdown = String::new();

    for section in SECTIONS {
        if !section.condition(answers, template_id) {
            continue;
        }
        markdown += &md::section(section.title);
        markdown += &section.content(answers, template_id);
    }

    if markdown.trim().is_empty() && template_id == t::INDIE_TECH_MARKETING {
        tracing::warn!(template_id, "empty document, applying fallback content");
        markdown.clear();

        markdown += &md::section("Project Overview");
        match answers.answered("campaign-specifics") {
            Some(specifics) => markdown += &md::field("Project Name", specifics),
            None => markdown += &md::field("Project Name", "Untitled Project"),
        }
        if let Some(objective) = answers.answered("campaign-objective") {
            markdown += &md::field("Campaign Objective", objective);
        }

        if let Some(audience) = answers.answered("target-audience") {
            markdown += &md::section("Goals & Objectives");
            markdown += &md::field("Target Audience", audience);
        }

        if let Some(channel) = answers.answered("primary-channel") {
            markdown += &md::section("Technical Requirements");
            markdown += &md::field("Primary Marketing Channel", channel);
        }
    }

    markdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefgen_types::AnswerSet;

    fn saas_answers() -> AnswerSet {
        AnswerSet::new()
            .with("product-name", "Shipshape")
            .with("product-description", "Release management for small teams.")
            .with("target-users", "Engineering leads at 5-50 person startups")
            .with("success-metrics", vec!["signups", "revenue"])
            .with("technologies", vec!["react", "node"])
            .with("budget-range", "10k-25k")
            .with("development-timeline", "3-6-months")
    }

    #[test]
    fn excluded_section_contributes_zero_characters() {
        // No technical answers for a brand-identity brief: the Technical
        // Requirements heading must not appear at all.
        let answers = AnswerSet::new().with("brand-name", "Northwind");
        let markdown = generate_markdown(&answers, "brand-identity");
        assert!(!markdown.contains("Technical Requirements"));
        assert!(!markdown.contains("Timeline & Budget"));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let markdown = generate_markdown(&saas_answers(), "tech-product-saas");
        let overview = markdown.find("## Project Overview").unwrap();
        let goals = markdown.find("## Goals & Objectives").unwrap();
        let technical = markdown.find("## Technical Requirements").unwrap();
        let timeline = markdown.find("## Timeline & Budget").unwrap();
        assert!(overview < goals && goals < technical && technical < timeline);
    }

    #[test]
    fn generation_is_deterministic() {
        let answers = saas_answers();
        let first = generate_markdown(&answers, "tech-product-saas");
        let second = generate_markdown(&answers, "tech-product-saas");
        assert_eq!(first, second);
    }

    #[test]
    fn saas_overview_uses_normalized_fields() {
        let markdown = generate_markdown(&saas_answers(), "tech-product-saas");
        assert!(markdown.contains("**Project Name:** Shipshape\n\n"));
        assert!(markdown.contains("**Description:** Release management for small teams.\n\n"));
        assert!(markdown.contains("**Technology Stack:** - React\n- Node.js\n"));
    }

    #[test]
    fn indie_overview_renders_campaign_fields() {
        let answers = AnswerSet::new()
            .with("campaign-specifics", "Launch on Product Hunt in June")
            .with("campaign-objective", "launch")
            .with("campaign-duration", "short");
        let markdown = generate_markdown(&answers, "indie-tech-marketing");
        assert!(markdown.contains("**Project Name:** Marketing Campaign\n\n"));
        assert!(markdown.contains("**Description:** Launch on Product Hunt in June\n\n"));
        assert!(markdown.contains("**Campaign Objective:** Product/feature launch\n\n"));
        assert!(markdown.contains("**Campaign Duration:** Short campaign (1-2 weeks)\n\n"));
    }

    #[test]
    fn indie_placeholder_description_is_suppressed() {
        let answers = AnswerSet::new().with("campaign-specifics", "Campaign specifics");
        let markdown = generate_markdown(&answers, "indie-tech-marketing");
        assert!(!markdown.contains("**Description:**"));
    }

    #[test]
    fn personal_brand_goals_render_traits_and_metrics() {
        let answers = AnswerSet::new()
            .with("brand-name", "Ada Writes Code")
            .with("target-audience", "Junior developers")
            .with("brand-personality", vec!["educator", "other"])
            .with("brand-personality-other", "Relentlessly practical")
            .with("success-metrics", vec!["speaking", "followers"]);
        let markdown = generate_markdown(&answers, "personal-tech-brand");
        assert!(markdown.contains("**Brand Personality:**\n- Educator/mentor\n- Relentlessly practical\n\n"));
        assert!(markdown.contains("**Success Metrics:**\n- Speaking opportunities\n- Social media following\n\n"));
    }

    #[test]
    fn personal_brand_budget_uses_allocation_labels() {
        let answers = AnswerSet::new()
            .with("brand-name", "Ada Writes Code")
            .with("budget-allocation", "no-budget");
        let markdown = generate_markdown(&answers, "personal-tech-brand");
        assert!(markdown.contains("**Budget:** No budget - using free resources only\n\n"));
    }

    #[test]
    fn empty_indie_brief_gets_fallback_document() {
        let answers = AnswerSet::new();
        let markdown = generate_markdown(&answers, "indie-tech-marketing");
        assert!(markdown.contains("## Project Overview"));
        assert!(markdown.contains("**Project Name:** Untitled Project\n\n"));
    }

    #[test]
    fn fallback_is_scoped_to_marketing_template() {
        // Other templates simply return whatever the sections produced.
        let answers = AnswerSet::new();
        let markdown = generate_markdown(&answers, "tech-content-strategy");
        assert!(!markdown.contains("Untitled Project"));
    }

    #[test]
    fn digital_campaign_renders_objectives_block() {
        let answers = AnswerSet::new()
            .with("campaign-name", "Spring push")
            .with("campaign-objectives", vec!["brand-awareness", "lead-generation"])
            .with("marketingChannels", vec!["social-media", "other"])
            .with("otherChannel", "Billboards")
            .with("campaign-budget", "5k-10k");
        let markdown = generate_markdown(&answers, "digital-marketing-campaign");
        assert!(markdown.contains("**Objectives:**\n- Brand Awareness\n- Lead Generation\n\n"));
        assert!(markdown.contains("**Marketing Channels:**\n- Social Media\n- Billboards\n\n"));
        assert!(markdown.contains("**Budget:** $5,000 - $10,000\n\n"));
    }
}
