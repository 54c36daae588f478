use crate::questionnaire::ValidationIssue;

#[derive(Debug, thiserror::Error)]
pub enum BriefError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("answers failed validation ({} issue(s))", .0.len())]
    Validation(Vec<ValidationIssue>),
}

pub type BriefResult<T> = std::result::Result<T, BriefError>;
