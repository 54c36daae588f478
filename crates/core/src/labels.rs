//! Canonical code-to-label tables.
//!
//! One table per domain concept, shared by the field normalizer, the
//! section engine, and the legacy generator. Each table is a closed
//! enumeration: unrecognised codes render verbatim through
//! [`LabelTable::label_for`], never as an error.

/// An immutable option-code to display-label table.
#[derive(Debug)]
pub struct LabelTable {
    entries: &'static [(&'static str, &'static str)],
}

impl LabelTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// The label for `code`, if the table knows it.
    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, label)| *label)
    }

    /// The label for `code`, falling back to the raw code verbatim.
    pub fn label_for<'a>(&self, code: &'a str) -> &'a str
    where
        'static: 'a,
    {
        self.get(code).unwrap_or(code)
    }
}

/// Budget ranges and allocation tiers. The allocation tiers share the table
/// because the normalizer resolves either `budget-range` or
/// `budget-allocation` into the same canonical budget field.
pub static BUDGET_RANGES: LabelTable = LabelTable::new(&[
    ("less-than-5k", "Less than $5,000"),
    ("5k-10k", "$5,000 - $10,000"),
    ("10k-25k", "$10,000 - $25,000"),
    ("25k-50k", "$25,000 - $50,000"),
    ("more-than-50k", "More than $50,000"),
    ("not-sure", "Not sure / Need guidance"),
    ("time-only", "Time only - no monetary budget"),
    ("minimal", "Minimal budget (<$500)"),
    ("moderate", "Moderate budget ($500-$2000)"),
    ("significant", "Significant budget (>$2000)"),
]);

/// Allocation tiers used by the personal-brand questionnaire, which offers
/// a "no budget" option instead of "time only".
pub static PERSONAL_BUDGET_ALLOCATIONS: LabelTable = LabelTable::new(&[
    ("no-budget", "No budget - using free resources only"),
    ("minimal", "Minimal budget (<$500)"),
    ("moderate", "Moderate budget ($500-$2000)"),
    ("significant", "Significant budget (>$2000)"),
]);

/// Project timelines and campaign durations.
pub static TIMELINES: LabelTable = LabelTable::new(&[
    ("less-than-1-month", "Less than 1 month"),
    ("1-3-months", "1-3 months"),
    ("3-6-months", "3-6 months"),
    ("more-than-6-months", "More than 6 months"),
    ("no-deadline", "No specific deadline"),
    ("one-time", "One-time event/announcement"),
    ("short", "Short campaign (1-2 weeks)"),
    ("medium", "Medium campaign (2-4 weeks)"),
    ("extended", "Extended campaign (1-3 months)"),
    ("ongoing", "Ongoing/evergreen"),
    ("1-month", "1 month or less"),
    ("6-plus-months", "6+ months"),
]);

/// Campaign durations only, for the overview section of marketing briefs.
pub static CAMPAIGN_DURATIONS: LabelTable = LabelTable::new(&[
    ("one-time", "One-time event/announcement"),
    ("short", "Short campaign (1-2 weeks)"),
    ("medium", "Medium campaign (2-4 weeks)"),
    ("extended", "Extended campaign (1-3 months)"),
    ("ongoing", "Ongoing/evergreen"),
]);

/// Success metrics across marketing and content briefs.
pub static SUCCESS_METRICS: LabelTable = LabelTable::new(&[
    ("signups", "Signups/registrations"),
    ("traffic", "Website traffic"),
    ("engagement", "Social media engagement"),
    ("product-hunt", "Product Hunt upvotes/ranking"),
    ("downloads", "Downloads/installations"),
    ("mentions", "Media/blog mentions"),
    ("revenue", "Direct revenue"),
    ("views", "Page views/traffic"),
    ("subscribers", "Email subscribers"),
    ("social", "Social sharing/engagement"),
    ("leads", "Lead generation"),
    ("seo", "SEO rankings/backlinks"),
    ("community", "Community growth"),
]);

/// Success metrics specific to personal-brand briefs.
pub static PERSONAL_BRAND_METRICS: LabelTable = LabelTable::new(&[
    ("portfolio", "Complete professional portfolio"),
    ("network", "Expanded professional network"),
    ("recognition", "Industry recognition"),
    ("speaking", "Speaking opportunities"),
    ("clients", "Client/job opportunities"),
    ("followers", "Social media following"),
]);

/// Web technologies for the technology-stack multiselect.
pub static TECHNOLOGIES: LabelTable = LabelTable::new(&[
    ("react", "React"),
    ("angular", "Angular"),
    ("vue", "Vue.js"),
    ("node", "Node.js"),
    ("php", "PHP"),
    ("wordpress", "WordPress"),
    ("shopify", "Shopify"),
    ("no-preference", "No specific technology preference"),
]);

/// Channels for indie marketing campaigns.
pub static MARKETING_CHANNELS: LabelTable = LabelTable::new(&[
    ("product-hunt", "Product Hunt"),
    ("twitter", "Twitter/X"),
    ("linkedin", "LinkedIn"),
    ("reddit", "Reddit"),
    ("hacker-news", "Hacker News"),
    ("dev-communities", "Developer communities"),
    ("email", "Email newsletter"),
    ("content", "Content marketing/blog"),
]);

/// Channels for larger digital marketing campaigns.
pub static CAMPAIGN_CHANNELS: LabelTable = LabelTable::new(&[
    ("social-media", "Social Media"),
    ("email", "Email Marketing"),
    ("content", "Content Marketing"),
    ("seo", "Search Engine Optimization"),
    ("ppc", "Pay-Per-Click Advertising"),
    ("influencer", "Influencer Marketing"),
]);

/// Product and web project types.
pub static PRODUCT_TYPES: LabelTable = LabelTable::new(&[
    ("saas", "Software as a Service (SaaS)"),
    ("mobile-app", "Mobile Application"),
    ("desktop-app", "Desktop Application"),
    ("api", "API/Developer Tool"),
    ("hardware", "Hardware/IoT Product"),
    ("new-website", "New Website"),
    ("website-redesign", "Website Redesign"),
    ("web-application", "Web Application"),
    ("ecommerce", "E-commerce Site"),
    ("landing-page", "Landing Page"),
]);

/// Single-choice campaign objectives for indie marketing briefs.
pub static INDIE_OBJECTIVES: LabelTable = LabelTable::new(&[
    ("launch", "Product/feature launch"),
    ("acquisition", "User/customer acquisition"),
    ("awareness", "Brand awareness"),
    ("leads", "Lead generation"),
    ("retention", "Retention/engagement"),
]);

/// Multi-select objectives for campaign and launch briefs.
pub static CAMPAIGN_OBJECTIVES: LabelTable = LabelTable::new(&[
    ("brand-awareness", "Brand Awareness"),
    ("lead-generation", "Lead Generation"),
    ("sales-conversion", "Sales Conversion"),
    ("customer-retention", "Customer Retention"),
    ("product-launch", "Product Launch"),
]);

/// Primary goals in the web-development questionnaire.
pub static PRIMARY_GOALS: LabelTable = LabelTable::new(&[
    ("brand-awareness", "Increase brand awareness"),
    ("lead-generation", "Generate leads"),
    ("sales", "Sell products/services"),
    ("information", "Provide information"),
    ("ux", "Improve user experience"),
]);

/// Feature checklist for web projects.
pub static WEB_FEATURES: LabelTable = LabelTable::new(&[
    ("auth", "User authentication"),
    ("cms", "Content management system"),
    ("ecommerce", "E-commerce functionality"),
    ("blog", "Blog"),
    ("search", "Search functionality"),
    ("contact-form", "Contact form"),
    ("social-media", "Social media integration"),
    ("analytics", "Analytics"),
]);

/// Hosting preferences.
pub static HOSTING: LabelTable = LabelTable::new(&[
    ("need-recommendations", "Client needs hosting recommendations"),
    ("own-hosting", "Client has their own hosting"),
    ("not-sure", "Client is not sure about hosting yet"),
]);

/// Design starting points.
pub static DESIGN_PREFERENCES: LabelTable = LabelTable::new(&[
    ("brand-guidelines", "Client has brand guidelines to follow"),
    ("new-design", "Client needs a completely new design"),
    ("mockups-ready", "Client has design mockups ready"),
    ("need-inspiration", "Client needs inspiration from existing sites"),
]);

/// Accessibility targets.
pub static ACCESSIBILITY: LabelTable = LabelTable::new(&[
    ("wcag-aa", "WCAG 2.1 AA compliance required"),
    ("wcag-aaa", "WCAG 2.1 AAA compliance required"),
    ("basic", "Basic accessibility is fine"),
    ("not-priority", "Accessibility is not a priority"),
]);

/// Areas of expertise for personal-brand briefs.
pub static EXPERTISE: LabelTable = LabelTable::new(&[
    ("development", "Software Development"),
    ("design", "Design/UX"),
    ("devops", "DevOps/Infrastructure"),
    ("data-ai", "Data Science/AI"),
    ("tech-marketing", "Technical Marketing"),
    ("product", "Product Management"),
]);

/// Brand personality traits.
pub static BRAND_PERSONALITY: LabelTable = LabelTable::new(&[
    ("technical", "Technical authority"),
    ("approachable", "Approachable expert"),
    ("innovative", "Innovative thinker"),
    ("pragmatic", "Pragmatic problem-solver"),
    ("educator", "Educator/mentor"),
    ("bold", "Bold/challenging status quo"),
]);

/// Visual identity assets.
pub static VISUAL_IDENTITY: LabelTable = LabelTable::new(&[
    ("logo", "Logo"),
    ("colors", "Color scheme"),
    ("typography", "Typography system"),
    ("photos", "Profile photos"),
    ("social-templates", "Social media templates"),
    ("presentations", "Presentation templates"),
]);

/// Publishing platforms.
pub static PLATFORMS: LabelTable = LabelTable::new(&[
    ("twitter", "Twitter/X"),
    ("linkedin", "LinkedIn"),
    ("github", "GitHub"),
    ("blog", "Personal blog/website"),
    ("youtube", "YouTube"),
]);

/// Content formats.
pub static CONTENT_TYPES: LabelTable = LabelTable::new(&[
    ("blogs", "Blog posts/articles"),
    ("videos", "Video tutorials/talks"),
    ("newsletters", "Email newsletters"),
    ("podcasts", "Podcasts/audio content"),
    ("courses", "Courses/educational content"),
    ("open-source", "Open source contributions"),
    ("speaking-events", "Speaking at events/conferences"),
]);

/// Networking strategies.
pub static NETWORKING: LabelTable = LabelTable::new(&[
    ("conferences", "Industry conferences"),
    ("communities", "Online tech communities"),
    ("mentorship", "Mentorship programs"),
    ("co-creation", "Co-creation with peers"),
    ("industry-groups", "Industry groups/associations"),
    ("meetups", "Local tech meetups"),
]);

/// Launch marketing assets.
pub static MARKETING_ASSETS: LabelTable = LabelTable::new(&[
    ("landing-page", "Landing Page"),
    ("social-media", "Social Media Assets"),
    ("email-templates", "Email Templates"),
    ("press-release", "Press Release"),
    ("product-videos", "Product Videos"),
    ("case-studies", "Case Studies"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_translate() {
        assert_eq!(BUDGET_RANGES.get("5k-10k"), Some("$5,000 - $10,000"));
        assert_eq!(TECHNOLOGIES.label_for("vue"), "Vue.js");
    }

    #[test]
    fn unknown_codes_render_verbatim() {
        assert_eq!(BUDGET_RANGES.label_for("a-made-up-range"), "a-made-up-range");
        assert_eq!(TIMELINES.get("a-made-up-range"), None);
    }
}
