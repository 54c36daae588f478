//! Brief template registry.
//!
//! Templates are the named brief categories a user can pick from. Each has
//! its own questionnaire and rendering rules; this module only carries the
//! descriptive metadata and the identifier constants used across the crate.

/// Stable template identifiers.
pub mod template_ids {
    pub const WEB_DEVELOPMENT: &str = "web-development";
    pub const TECH_PRODUCT_SAAS: &str = "tech-product-saas";
    pub const PERSONAL_TECH_BRAND: &str = "personal-tech-brand";
    pub const TECH_SOLOPRENEUR_WEBSITE: &str = "tech-solopreneur-website";
    pub const INDIE_TECH_MARKETING: &str = "indie-tech-marketing";
    pub const TECH_CONTENT_STRATEGY: &str = "tech-content-strategy";
    pub const DIGITAL_MARKETING_CAMPAIGN: &str = "digital-marketing-campaign";
    pub const PRODUCT_MARKETING_LAUNCH: &str = "product-marketing-launch";
    pub const BRAND_IDENTITY: &str = "brand-identity";
}

/// Descriptive metadata for one brief template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub title: &'static str,
    pub best_for: &'static str,
    pub question_count: u8,
    pub description: &'static str,
}

/// The selectable templates, in display order.
pub static TEMPLATES: &[Template] = &[
    Template {
        id: template_ids::WEB_DEVELOPMENT,
        title: "Web Development",
        best_for: "Need a website, web application, or online platform built from scratch or redesigned.",
        question_count: 15,
        description: "This template helps you define requirements for web development projects including frontend, backend, and infrastructure needs.",
    },
    Template {
        id: template_ids::TECH_PRODUCT_SAAS,
        title: "Tech Product/SaaS",
        best_for: "Building a tech product or SaaS solution as a solopreneur and need to clarify your product vision.",
        question_count: 12,
        description: "This template helps tech solopreneurs define their product strategy, core features, and launch plan for a new SaaS or tech product.",
    },
    Template {
        id: template_ids::PERSONAL_TECH_BRAND,
        title: "Personal Tech Brand",
        best_for: "Establishing your personal brand as a tech professional or thought leader in your technical domain.",
        question_count: 10,
        description: "This template helps tech professionals define their personal brand strategy, positioning, and content approach to build authority in their niche.",
    },
    Template {
        id: template_ids::TECH_SOLOPRENEUR_WEBSITE,
        title: "Tech Solopreneur Website",
        best_for: "Creating a professional website for your solo tech business, consultancy, or portfolio.",
        question_count: 12,
        description: "This template helps tech solopreneurs plan an effective website that showcases their work, attracts clients, and converts visitors.",
    },
    Template {
        id: template_ids::INDIE_TECH_MARKETING,
        title: "Indie Tech Marketing",
        best_for: "Planning a marketing campaign for your indie tech product launch or growth initiative.",
        question_count: 11,
        description: "This template helps indie tech creators plan focused marketing campaigns with limited resources to maximize impact and results.",
    },
    Template {
        id: template_ids::TECH_CONTENT_STRATEGY,
        title: "Tech Content Strategy",
        best_for: "Creating a sustainable content strategy to build authority and attract clients or users to your tech business.",
        question_count: 10,
        description: "This template helps tech solopreneurs develop a focused content strategy that builds credibility and attracts their target audience.",
    },
];

/// Looks up a template by identifier.
pub fn template_by_id(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|template| template.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_known_templates() {
        let template = template_by_id("web-development").unwrap();
        assert_eq!(template.title, "Web Development");
    }

    #[test]
    fn lookup_misses_unknown_templates() {
        assert!(template_by_id("desktop-publishing").is_none());
    }
}
