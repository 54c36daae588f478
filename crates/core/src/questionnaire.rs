//! Questionnaire schema and submission-time validation.
//!
//! Each template declares its questions, grouped into steps, with option
//! lists, conditional visibility, and validation rules. Validation runs
//! once at submission: hidden questions are skipped, required answers are
//! checked, and choice answers must name declared option codes. Render-time
//! code never validates; it degrades gracefully instead.

use briefgen_types::{AnswerSet, AnswerValue};

/// The input widget a question renders as. Here it only informs
/// validation (choice kinds check option membership, `Email` checks shape).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Text,
    TextArea,
    Select,
    MultiSelect,
    Radio,
    Checkbox,
    Date,
    Number,
    Email,
}

impl QuestionKind {
    /// Whether answers must come from the question's declared options.
    fn is_choice(self) -> bool {
        matches!(
            self,
            QuestionKind::Select
                | QuestionKind::MultiSelect
                | QuestionKind::Radio
                | QuestionKind::Checkbox
        )
    }
}

/// A selectable option for choice questions.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// A single validation rule with its user-facing message.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    pub kind: RuleKind,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum RuleKind {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Min(f64),
    Max(f64),
    Email,
}

/// Comparison operator for conditional visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOp {
    Eq,
    Ne,
    Includes,
    Gt,
    Lt,
    Ge,
    Le,
}

/// The value a condition compares against.
#[derive(Debug, Clone, Copy)]
pub enum CondValue {
    Str(&'static str),
    Num(f64),
    Bool(bool),
}

/// A visibility condition: the question is shown only when every condition
/// over previously-answered questions holds.
#[derive(Debug, Clone, Copy)]
pub struct Condition {
    pub question_id: &'static str,
    pub op: ConditionOp,
    pub value: CondValue,
}

/// One question in a questionnaire.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub kind: QuestionKind,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub help_text: Option<&'static str>,
    pub options: &'static [ChoiceOption],
    pub validation: &'static [ValidationRule],
    pub conditions: &'static [Condition],
    pub step: u8,
}

/// A step groups questions into one page of the flow.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub id: u8,
    pub title: &'static str,
    pub description: Option<&'static str>,
}

/// A template's complete question set.
#[derive(Debug, Clone, Copy)]
pub struct Questionnaire {
    pub id: &'static str,
    pub template_id: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub steps: &'static [Step],
    pub questions: &'static [Question],
}

impl Questionnaire {
    /// All questions belonging to one step.
    pub fn questions_for_step(&self, step_id: u8) -> impl Iterator<Item = &'static Question> {
        self.questions.iter().filter(move |q| q.step == step_id)
    }

    /// Whether `field_id` is a declared question of this questionnaire.
    pub fn declares(&self, field_id: &str) -> bool {
        self.questions.iter().any(|q| q.id == field_id)
    }
}

/// Evaluates one condition against the current answers.
fn condition_holds(condition: &Condition, answers: &AnswerSet) -> bool {
    let answer = match answers.get(condition.question_id) {
        Some(answer) => answer,
        None => return false,
    };

    match condition.op {
        ConditionOp::Eq => match (&condition.value, answer) {
            (CondValue::Str(expected), AnswerValue::Text(actual)) => actual.as_str() == *expected,
            (CondValue::Num(expected), AnswerValue::Number(actual)) => actual == expected,
            (CondValue::Bool(expected), AnswerValue::Bool(actual)) => actual == expected,
            _ => false,
        },
        ConditionOp::Ne => match (&condition.value, answer) {
            (CondValue::Str(expected), AnswerValue::Text(actual)) => actual.as_str() != *expected,
            (CondValue::Num(expected), AnswerValue::Number(actual)) => actual != expected,
            (CondValue::Bool(expected), AnswerValue::Bool(actual)) => actual != expected,
            _ => false,
        },
        ConditionOp::Includes => match (&condition.value, answer) {
            (CondValue::Str(expected), AnswerValue::List(items)) => {
                items.iter().any(|item| item.as_str() == *expected)
            }
            _ => false,
        },
        ConditionOp::Gt | ConditionOp::Lt | ConditionOp::Ge | ConditionOp::Le => {
            let (expected, actual) = match (&condition.value, answer) {
                (CondValue::Num(expected), AnswerValue::Number(actual)) => (*expected, *actual),
                _ => return false,
            };
            match condition.op {
                ConditionOp::Gt => actual > expected,
                ConditionOp::Lt => actual < expected,
                ConditionOp::Ge => actual >= expected,
                ConditionOp::Le => actual <= expected,
                _ => unreachable!(),
            }
        }
    }
}

/// Whether a question should be shown (and therefore validated) given the
/// current answers. Questions without conditions are always shown.
pub fn should_show_question(question: &Question, answers: &AnswerSet) -> bool {
    question
        .conditions
        .iter()
        .all(|condition| condition_holds(condition, answers))
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationIssue {
    pub question_id: String,
    pub message: String,
}

/// Validates a full answer set against a questionnaire at submission time.
///
/// Hidden questions are skipped entirely. Returns every issue found rather
/// than failing fast, so the caller can report them all at once.
pub fn validate_answers(questionnaire: &Questionnaire, answers: &AnswerSet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for question in questionnaire.questions {
        if !should_show_question(question, answers) {
            continue;
        }

        let answer = answers.answered(question.id);

        for rule in question.validation {
            let failed = match rule.kind {
                RuleKind::Required => answer.is_none(),
                RuleKind::MinLength(min) => matches!(
                    answer,
                    Some(AnswerValue::Text(text)) if text.chars().count() < min
                ),
                RuleKind::MaxLength(max) => matches!(
                    answer,
                    Some(AnswerValue::Text(text)) if text.chars().count() > max
                ),
                RuleKind::Min(min) => matches!(
                    answer,
                    Some(AnswerValue::Number(n)) if *n < min
                ),
                RuleKind::Max(max) => matches!(
                    answer,
                    Some(AnswerValue::Number(n)) if *n > max
                ),
                RuleKind::Email => matches!(
                    answer,
                    Some(AnswerValue::Text(text)) if !looks_like_email(text)
                ),
            };

            if failed {
                issues.push(ValidationIssue {
                    question_id: question.id.to_owned(),
                    message: rule.message.to_owned(),
                });
            }
        }

        // Choice answers must name declared option codes.
        if question.kind.is_choice() {
            if let Some(answer) = answer {
                let mut check = |code: &str| {
                    if !question.options.iter().any(|opt| opt.value == code) {
                        issues.push(ValidationIssue {
                            question_id: question.id.to_owned(),
                            message: format!("'{code}' is not one of the available options"),
                        });
                    }
                };
                match answer {
                    AnswerValue::Text(code) => check(code),
                    AnswerValue::List(codes) => codes.iter().for_each(|code| check(code)),
                    _ => {}
                }
            }
        }
    }

    issues
}

fn looks_like_email(text: &str) -> bool {
    match text.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

const fn required(message: &'static str) -> ValidationRule {
    ValidationRule {
        kind: RuleKind::Required,
        message,
    }
}

/// The web-development questionnaire: five steps from project basics
/// through timeline and budget, including the conditional elaboration
/// questions.
pub static WEB_DEVELOPMENT_QUESTIONNAIRE: Questionnaire = Questionnaire {
    id: "web-development-questionnaire",
    template_id: "web-development",
    title: "Web Development Brief",
    description: Some("Create a detailed brief for your web development project"),
    steps: &[
        Step {
            id: 1,
            title: "Project Basics",
            description: Some("Let's start with the basic information about your project"),
        },
        Step {
            id: 2,
            title: "Project Goals",
            description: Some("What are you trying to achieve with this project?"),
        },
        Step {
            id: 3,
            title: "Technical Requirements",
            description: Some("Let's get into the technical details of your project"),
        },
        Step {
            id: 4,
            title: "Design & UX",
            description: Some("Tell us about your design and user experience preferences"),
        },
        Step {
            id: 5,
            title: "Timeline & Budget",
            description: Some("When do you need this completed and what's your budget?"),
        },
    ],
    questions: &[
        Question {
            id: "project-name",
            kind: QuestionKind::Text,
            label: "Project Name",
            placeholder: Some("e.g., Company Website Redesign"),
            help_text: None,
            options: &[],
            validation: &[required("Project name is required")],
            conditions: &[],
            step: 1,
        },
        Question {
            id: "project-description",
            kind: QuestionKind::TextArea,
            label: "Project Description",
            placeholder: Some("Briefly describe your project..."),
            help_text: None,
            options: &[],
            validation: &[
                required("Project description is required"),
                ValidationRule {
                    kind: RuleKind::MinLength(50),
                    message: "Please provide at least 50 characters",
                },
            ],
            conditions: &[],
            step: 1,
        },
        Question {
            id: "project-type",
            kind: QuestionKind::Radio,
            label: "Project Type",
            placeholder: None,
            help_text: None,
            options: &[
                ChoiceOption { label: "New Website", value: "new-website" },
                ChoiceOption { label: "Website Redesign", value: "website-redesign" },
                ChoiceOption { label: "Web Application", value: "web-application" },
                ChoiceOption { label: "E-commerce Site", value: "ecommerce" },
                ChoiceOption { label: "Landing Page", value: "landing-page" },
                ChoiceOption { label: "Other", value: "other" },
            ],
            validation: &[required("Please select a project type")],
            conditions: &[],
            step: 1,
        },
        Question {
            id: "project-type-other",
            kind: QuestionKind::Text,
            label: "Please specify the project type",
            placeholder: None,
            help_text: None,
            options: &[],
            validation: &[required("Please specify the project type")],
            conditions: &[Condition {
                question_id: "project-type",
                op: ConditionOp::Eq,
                value: CondValue::Str("other"),
            }],
            step: 1,
        },
        Question {
            id: "primary-goals",
            kind: QuestionKind::MultiSelect,
            label: "Primary Goals",
            placeholder: None,
            help_text: Some("What are the main goals of this project?"),
            options: &[
                ChoiceOption { label: "Increase brand awareness", value: "brand-awareness" },
                ChoiceOption { label: "Generate leads", value: "lead-generation" },
                ChoiceOption { label: "Sell products/services", value: "sales" },
                ChoiceOption { label: "Provide information", value: "information" },
                ChoiceOption { label: "Improve user experience", value: "ux" },
                ChoiceOption { label: "Other", value: "other" },
            ],
            validation: &[required("Please select at least one goal")],
            conditions: &[],
            step: 2,
        },
        Question {
            id: "primary-goals-other",
            kind: QuestionKind::Text,
            label: "Please specify your other goal(s)",
            placeholder: None,
            help_text: None,
            options: &[],
            validation: &[required("Please specify your other goal(s)")],
            conditions: &[Condition {
                question_id: "primary-goals",
                op: ConditionOp::Includes,
                value: CondValue::Str("other"),
            }],
            step: 2,
        },
        Question {
            id: "target-audience",
            kind: QuestionKind::TextArea,
            label: "Target Audience",
            placeholder: Some(
                "Describe your target audience (age, interests, demographics, etc.)",
            ),
            help_text: None,
            options: &[],
            validation: &[required("Target audience is required")],
            conditions: &[],
            step: 2,
        },
        Question {
            id: "success-metrics",
            kind: QuestionKind::TextArea,
            label: "Success Metrics",
            placeholder: Some("How will you measure the success of this project?"),
            help_text: None,
            options: &[],
            validation: &[required("Success metrics are required")],
            conditions: &[],
            step: 2,
        },
        Question {
            id: "technologies",
            kind: QuestionKind::MultiSelect,
            label: "Preferred Technologies",
            placeholder: None,
            help_text: Some("Select any specific technologies you want to use"),
            options: &[
                ChoiceOption { label: "React", value: "react" },
                ChoiceOption { label: "Angular", value: "angular" },
                ChoiceOption { label: "Vue.js", value: "vue" },
                ChoiceOption { label: "Node.js", value: "node" },
                ChoiceOption { label: "PHP", value: "php" },
                ChoiceOption { label: "WordPress", value: "wordpress" },
                ChoiceOption { label: "Shopify", value: "shopify" },
                ChoiceOption { label: "No preference", value: "no-preference" },
                ChoiceOption { label: "Other", value: "other" },
            ],
            validation: &[],
            conditions: &[],
            step: 3,
        },
        Question {
            id: "technologies-other",
            kind: QuestionKind::Text,
            label: "Please specify other technologies",
            placeholder: None,
            help_text: None,
            options: &[],
            validation: &[required("Please specify the other technologies")],
            conditions: &[Condition {
                question_id: "technologies",
                op: ConditionOp::Includes,
                value: CondValue::Str("other"),
            }],
            step: 3,
        },
        Question {
            id: "features",
            kind: QuestionKind::MultiSelect,
            label: "Required Features",
            placeholder: None,
            help_text: Some("Select the features you need in your project"),
            options: &[
                ChoiceOption { label: "User authentication", value: "auth" },
                ChoiceOption { label: "Content management system", value: "cms" },
                ChoiceOption { label: "E-commerce functionality", value: "ecommerce" },
                ChoiceOption { label: "Blog", value: "blog" },
                ChoiceOption { label: "Search functionality", value: "search" },
                ChoiceOption { label: "Contact form", value: "contact-form" },
                ChoiceOption { label: "Social media integration", value: "social-media" },
                ChoiceOption { label: "Analytics", value: "analytics" },
                ChoiceOption { label: "Other", value: "other" },
            ],
            validation: &[required("Please select at least one feature")],
            conditions: &[],
            step: 3,
        },
        Question {
            id: "features-other",
            kind: QuestionKind::TextArea,
            label: "Please describe other features",
            placeholder: None,
            help_text: None,
            options: &[],
            validation: &[required("Please describe the other features")],
            conditions: &[Condition {
                question_id: "features",
                op: ConditionOp::Includes,
                value: CondValue::Str("other"),
            }],
            step: 3,
        },
        Question {
            id: "hosting",
            kind: QuestionKind::Radio,
            label: "Hosting Preferences",
            placeholder: None,
            help_text: None,
            options: &[
                ChoiceOption {
                    label: "I need hosting recommendations",
                    value: "need-recommendations",
                },
                ChoiceOption { label: "I have my own hosting", value: "own-hosting" },
                ChoiceOption { label: "Not sure yet", value: "not-sure" },
            ],
            validation: &[],
            conditions: &[],
            step: 3,
        },
        Question {
            id: "design-preferences",
            kind: QuestionKind::Radio,
            label: "Design Preferences",
            placeholder: None,
            help_text: None,
            options: &[
                ChoiceOption {
                    label: "I have brand guidelines to follow",
                    value: "brand-guidelines",
                },
                ChoiceOption { label: "I need a completely new design", value: "new-design" },
                ChoiceOption { label: "I have design mockups ready", value: "mockups-ready" },
                ChoiceOption {
                    label: "I need inspiration from existing sites",
                    value: "need-inspiration",
                },
            ],
            validation: &[required("Please select a design preference")],
            conditions: &[],
            step: 4,
        },
        Question {
            id: "inspiration-sites",
            kind: QuestionKind::TextArea,
            label: "Inspiration Websites",
            placeholder: Some("List any websites you like the design/functionality of..."),
            help_text: None,
            options: &[],
            validation: &[required("Please provide at least one inspiration website")],
            conditions: &[Condition {
                question_id: "design-preferences",
                op: ConditionOp::Eq,
                value: CondValue::Str("need-inspiration"),
            }],
            step: 4,
        },
        Question {
            id: "responsive-design",
            kind: QuestionKind::Checkbox,
            label: "Responsive Design Requirements",
            placeholder: None,
            help_text: None,
            options: &[
                ChoiceOption { label: "Mobile-friendly", value: "mobile" },
                ChoiceOption { label: "Tablet-friendly", value: "tablet" },
                ChoiceOption { label: "Desktop-friendly", value: "desktop" },
            ],
            validation: &[required("Please select at least one device type")],
            conditions: &[],
            step: 4,
        },
        Question {
            id: "accessibility",
            kind: QuestionKind::Radio,
            label: "Accessibility Requirements",
            placeholder: None,
            help_text: None,
            options: &[
                ChoiceOption { label: "WCAG 2.1 AA compliance required", value: "wcag-aa" },
                ChoiceOption { label: "WCAG 2.1 AAA compliance required", value: "wcag-aaa" },
                ChoiceOption { label: "Basic accessibility is fine", value: "basic" },
                ChoiceOption { label: "Not a priority", value: "not-priority" },
            ],
            validation: &[],
            conditions: &[],
            step: 4,
        },
        Question {
            id: "timeline",
            kind: QuestionKind::Radio,
            label: "Project Timeline",
            placeholder: None,
            help_text: None,
            options: &[
                ChoiceOption { label: "Less than 1 month", value: "less-than-1-month" },
                ChoiceOption { label: "1-3 months", value: "1-3-months" },
                ChoiceOption { label: "3-6 months", value: "3-6-months" },
                ChoiceOption { label: "More than 6 months", value: "more-than-6-months" },
                ChoiceOption { label: "No specific deadline", value: "no-deadline" },
            ],
            validation: &[required("Please select a timeline")],
            conditions: &[],
            step: 5,
        },
        Question {
            id: "start-date",
            kind: QuestionKind::Date,
            label: "Desired Start Date",
            placeholder: None,
            help_text: None,
            options: &[],
            validation: &[required("Please select a start date")],
            conditions: &[],
            step: 5,
        },
        Question {
            id: "budget-range",
            kind: QuestionKind::Radio,
            label: "Budget Range",
            placeholder: None,
            help_text: None,
            options: &[
                ChoiceOption { label: "Less than $5,000", value: "less-than-5k" },
                ChoiceOption { label: "$5,000 - $10,000", value: "5k-10k" },
                ChoiceOption { label: "$10,000 - $25,000", value: "10k-25k" },
                ChoiceOption { label: "$25,000 - $50,000", value: "25k-50k" },
                ChoiceOption { label: "More than $50,000", value: "more-than-50k" },
                ChoiceOption { label: "Not sure / Need guidance", value: "not-sure" },
            ],
            validation: &[required("Please select a budget range")],
            conditions: &[],
            step: 5,
        },
        Question {
            id: "additional-info",
            kind: QuestionKind::TextArea,
            label: "Additional Information",
            placeholder: Some("Any other details you'd like to share about your project..."),
            help_text: None,
            options: &[],
            validation: &[],
            conditions: &[],
            step: 5,
        },
    ],
};

/// All questionnaires. Further templates are added here as their question
/// sets are ported over.
pub static QUESTIONNAIRES: &[&Questionnaire] = &[&WEB_DEVELOPMENT_QUESTIONNAIRE];

/// Looks up the questionnaire for a template, if one is defined.
pub fn questionnaire_by_template_id(template_id: &str) -> Option<&'static Questionnaire> {
    QUESTIONNAIRES
        .iter()
        .find(|q| q.template_id == template_id)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_answers() -> AnswerSet {
        AnswerSet::new()
            .with("project-name", "Acme Storefront")
            .with(
                "project-description",
                "A complete storefront rebuild focused on conversion rate and page speed.",
            )
            .with("project-type", "ecommerce")
            .with("primary-goals", vec!["sales"])
            .with("target-audience", "DIY hobbyists")
            .with("success-metrics", "Conversion rate above 3%")
            .with("design-preferences", "new-design")
            .with("responsive-design", vec!["mobile"])
            .with("timeline", "3-6-months")
            .with("start-date", "2025-09-01")
            .with("budget-range", "10k-25k")
    }

    #[test]
    fn complete_answers_pass_validation() {
        let issues = validate_answers(&WEB_DEVELOPMENT_QUESTIONNAIRE, &valid_answers());
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn missing_required_fields_are_reported_together() {
        let issues = validate_answers(&WEB_DEVELOPMENT_QUESTIONNAIRE, &AnswerSet::new());
        let ids: Vec<_> = issues.iter().map(|i| i.question_id.as_str()).collect();
        assert!(ids.contains(&"project-name"));
        assert!(ids.contains(&"budget-range"));
        // Conditional questions stay hidden without their trigger answers.
        assert!(!ids.contains(&"project-type-other"));
        assert!(!ids.contains(&"inspiration-sites"));
    }

    #[test]
    fn conditional_question_becomes_required_when_shown() {
        let answers = valid_answers().with("project-type", "other");
        let issues = validate_answers(&WEB_DEVELOPMENT_QUESTIONNAIRE, &answers);
        assert!(issues
            .iter()
            .any(|i| i.question_id == "project-type-other"));

        let answers = answers.with("project-type-other", "Browser extension");
        let issues = validate_answers(&WEB_DEVELOPMENT_QUESTIONNAIRE, &answers);
        assert!(!issues.iter().any(|i| i.question_id == "project-type-other"));
    }

    #[test]
    fn includes_condition_triggers_on_multiselect() {
        let answers = valid_answers().with("primary-goals", vec!["sales", "other"]);
        let issues = validate_answers(&WEB_DEVELOPMENT_QUESTIONNAIRE, &answers);
        assert!(issues.iter().any(|i| i.question_id == "primary-goals-other"));
    }

    #[test]
    fn short_description_fails_min_length() {
        let answers = valid_answers().with("project-description", "Too short");
        let issues = validate_answers(&WEB_DEVELOPMENT_QUESTIONNAIRE, &answers);
        assert!(issues
            .iter()
            .any(|i| i.message == "Please provide at least 50 characters"));
    }

    #[test]
    fn undeclared_option_codes_are_rejected() {
        let answers = valid_answers().with("budget-range", "free");
        let issues = validate_answers(&WEB_DEVELOPMENT_QUESTIONNAIRE, &answers);
        assert!(issues
            .iter()
            .any(|i| i.question_id == "budget-range" && i.message.contains("'free'")));
    }

    #[test]
    fn step_grouping_and_lookup() {
        let questionnaire = questionnaire_by_template_id("web-development").unwrap();
        assert_eq!(questionnaire.steps.len(), 5);
        let step_one: Vec<_> = questionnaire.questions_for_step(1).collect();
        assert_eq!(step_one.len(), 4);
        assert!(questionnaire_by_template_id("tech-product-saas").is_none());
    }
}
