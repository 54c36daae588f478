//! Legacy per-template markdown generation.
//!
//! Templates that have not been migrated to the section engine are rendered
//! by this long-form path: sequential string concatenation guarded by
//! template and answer checks, translating option codes through the shared
//! label tables. Unrecognised codes render verbatim. A template uses either
//! this path or the section engine, never both; both produce markdown the
//! same downstream renderer understands.

use crate::labels;
use crate::templates::template_ids as t;
use briefgen_types::AnswerSet;

/// Generates the long-form document body for a legacy template.
///
/// Currently only `web-development` is wired through this path; other
/// templates fall through to an empty body and are expected to use the
/// section engine instead.
pub fn generate_legacy_markdown(answers: &AnswerSet, template_id: &str) -> String {
    let mut markdown = String::new();

    // Project Basics
    markdown += "## Project Overview\n\n";
    markdown += &format!(
        "**Project Name:** {}\n\n",
        answers
            .answered("project-name")
            .map(|v| v.display_string())
            .unwrap_or_else(|| "N/A".into())
    );
    markdown += &format!(
        "**Project Description:**\n{}\n\n",
        answers
            .answered("project-description")
            .map(|v| v.display_string())
            .unwrap_or_else(|| "N/A".into())
    );

    if let Some(project_type) = answers.text("project-type") {
        // The raw code is rendered here; the "other" elaboration is
        // appended inline rather than replacing it.
        markdown += &format!("**Project Type:** {project_type}");
        if project_type == "other" {
            if let Some(other) = answers.answered("project-type-other") {
                markdown += &format!(" - {}", other.display_string());
            }
        }
        markdown += "\n\n";
    }

    // Project Goals
    markdown += "## Project Goals\n\n";

    if let Some(goals) = answers.list("primary-goals") {
        markdown += "**Primary Goals:**\n\n";
        for goal in goals {
            if goal == "other" {
                if let Some(other) = answers.answered("primary-goals-other") {
                    markdown += &format!("- {}\n", other.display_string());
                }
            } else {
                markdown += &format!("- {}\n", labels::PRIMARY_GOALS.label_for(goal));
            }
        }
        markdown += "\n";
    }

    if let Some(audience) = answers.answered("target-audience") {
        markdown += &format!("**Target Audience:**\n\n{}\n\n", audience.display_string());
    }

    if let Some(metrics) = answers.answered("success-metrics") {
        markdown += &format!("**Success Metrics:**\n\n{}\n\n", metrics.display_string());
    }

    if template_id == t::WEB_DEVELOPMENT {
        markdown += "## Technical Requirements\n\n";

        if let Some(technologies) = answers.list("technologies") {
            markdown += "**Preferred Technologies:**\n\n";
            for tech in technologies {
                match tech.as_str() {
                    "other" => {
                        if let Some(other) = answers.answered("technologies-other") {
                            markdown += &format!("- {}\n", other.display_string());
                        }
                    }
                    "no-preference" => {
                        markdown += "- No specific technology preference\n";
                    }
                    code => {
                        markdown += &format!("- {code}\n");
                    }
                }
            }
            markdown += "\n";
        }

        if let Some(features) = answers.list("features") {
            markdown += "**Required Features:**\n\n";
            for feature in features {
                if feature == "other" {
                    if let Some(other) = answers.answered("features-other") {
                        markdown += &format!("- {}\n", other.display_string());
                    }
                } else {
                    markdown += &format!("- {}\n", labels::WEB_FEATURES.label_for(feature));
                }
            }
            markdown += "\n";
        }

        if let Some(hosting) = answers.text("hosting") {
            markdown += &format!(
                "**Hosting Preferences:** {}\n\n",
                labels::HOSTING.label_for(hosting)
            );
        }
    }

    if template_id == t::WEB_DEVELOPMENT {
        markdown += "## Design & User Experience\n\n";

        if let Some(preference) = answers.text("design-preferences") {
            markdown += &format!(
                "**Design Preferences:** {}\n\n",
                labels::DESIGN_PREFERENCES.label_for(preference)
            );

            if preference == "need-inspiration" {
                if let Some(sites) = answers.answered("inspiration-sites") {
                    markdown += &format!(
                        "**Inspiration Websites:**\n\n{}\n\n",
                        sites.display_string()
                    );
                }
            }
        }

        if let Some(devices) = answers.list("responsive-design") {
            markdown += "**Responsive Design Requirements:**\n\n";
            for device in devices {
                markdown += &format!("- {device}-friendly\n");
            }
            markdown += "\n";
        }

        if let Some(accessibility) = answers.text("accessibility") {
            markdown += &format!(
                "**Accessibility Requirements:** {}\n\n",
                labels::ACCESSIBILITY.label_for(accessibility)
            );
        }
    }

    // Timeline & Budget
    markdown += "## Timeline & Budget\n\n";

    if let Some(timeline) = answers.text("timeline") {
        markdown += &format!(
            "**Project Timeline:** {}\n\n",
            labels::TIMELINES.label_for(timeline)
        );
    }

    if let Some(start) = answers.answered("start-date") {
        markdown += &format!("**Desired Start Date:** {}\n\n", start.display_string());
    }

    if let Some(budget) = answers.text("budget-range") {
        markdown += &format!(
            "**Budget Range:** {}\n\n",
            labels::BUDGET_RANGES.label_for(budget)
        );
    }

    if let Some(info) = answers.answered("additional-info") {
        markdown += &format!("## Additional Information\n\n{}\n\n", info.display_string());
    }

    markdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn web_answers() -> AnswerSet {
        AnswerSet::new()
            .with("project-name", "Acme Storefront")
            .with(
                "project-description",
                "A storefront rebuild focused on conversion and speed.",
            )
            .with("project-type", "ecommerce")
            .with("primary-goals", vec!["sales", "other"])
            .with("primary-goals-other", "Reduce support tickets")
            .with("target-audience", "DIY hobbyists in the EU")
            .with("success-metrics", "Conversion rate above 3%")
            .with("technologies", vec!["react", "no-preference"])
            .with("features", vec!["ecommerce", "search", "other"])
            .with("features-other", "Wishlist sharing")
            .with("hosting", "need-recommendations")
            .with("design-preferences", "need-inspiration")
            .with("inspiration-sites", "https://example.shop")
            .with("responsive-design", vec!["mobile", "desktop"])
            .with("accessibility", "wcag-aa")
            .with("timeline", "3-6-months")
            .with("start-date", "2025-09-01")
            .with("budget-range", "25k-50k")
            .with("additional-info", "Existing brand guidelines apply.")
    }

    #[test]
    fn renders_all_webdev_sections() {
        let markdown = generate_legacy_markdown(&web_answers(), "web-development");
        for heading in [
            "## Project Overview",
            "## Project Goals",
            "## Technical Requirements",
            "## Design & User Experience",
            "## Timeline & Budget",
            "## Additional Information",
        ] {
            assert!(markdown.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn missing_basics_render_not_available() {
        let markdown = generate_legacy_markdown(&AnswerSet::new(), "web-development");
        assert!(markdown.contains("**Project Name:** N/A\n\n"));
        assert!(markdown.contains("**Project Description:**\nN/A\n\n"));
    }

    #[test]
    fn goal_and_feature_codes_translate_with_other_elaboration() {
        let markdown = generate_legacy_markdown(&web_answers(), "web-development");
        assert!(markdown.contains("- Sell products/services\n- Reduce support tickets\n"));
        assert!(markdown.contains(
            "- E-commerce functionality\n- Search functionality\n- Wishlist sharing\n"
        ));
    }

    #[test]
    fn technology_bullets_keep_raw_codes() {
        let markdown = generate_legacy_markdown(&web_answers(), "web-development");
        assert!(markdown.contains("- react\n- No specific technology preference\n"));
    }

    #[test]
    fn inspiration_sites_only_follow_that_preference() {
        let markdown = generate_legacy_markdown(&web_answers(), "web-development");
        assert!(markdown.contains("**Inspiration Websites:**\n\nhttps://example.shop\n\n"));

        let answers = web_answers().with("design-preferences", "mockups-ready");
        let markdown = generate_legacy_markdown(&answers, "web-development");
        assert!(!markdown.contains("Inspiration Websites"));
    }

    #[test]
    fn timeline_and_budget_codes_translate() {
        let markdown = generate_legacy_markdown(&web_answers(), "web-development");
        assert!(markdown.contains("**Project Timeline:** 3-6 months\n\n"));
        assert!(markdown.contains("**Budget Range:** $25,000 - $50,000\n\n"));
        assert!(markdown.contains("**Desired Start Date:** 2025-09-01\n\n"));
    }

    #[test]
    fn unknown_codes_render_verbatim() {
        let answers = AnswerSet::new()
            .with("timeline", "someday")
            .with("budget-range", "spare-change");
        let markdown = generate_legacy_markdown(&answers, "web-development");
        assert!(markdown.contains("**Project Timeline:** someday\n\n"));
        assert!(markdown.contains("**Budget Range:** spare-change\n\n"));
    }

    #[test]
    fn responsive_devices_render_as_friendly_suffix() {
        let markdown = generate_legacy_markdown(&web_answers(), "web-development");
        assert!(markdown.contains("- mobile-friendly\n- desktop-friendly\n"));
    }
}
