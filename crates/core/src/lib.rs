//! # Briefgen Core
//!
//! Brief generation logic: questionnaire answers in, markdown documents out.
//!
//! The crate is organised leaf-first:
//! - [`markdown`]: formatting primitives shared by every generator
//! - [`labels`]: canonical option-code to label tables
//! - [`fields`]: the field normalizer resolving canonical keys per template
//! - [`sections`]: the ordered section template engine
//! - [`legacy`]: the long-form generator for templates not yet migrated
//! - [`questionnaire`]: question schemas and submission-time validation
//! - [`templates`]: template metadata registry
//! - [`audit`]: normalizer-vs-questionnaire drift detection
//! - [`generator`]: the facade picking the right path per template
//!
//! **No API or storage concerns**: HTTP handlers live in `briefgen-api`,
//! persistence in `briefgen-storage`, PDF export in `briefgen-pdf`.

pub mod audit;
mod error;
pub mod fields;
pub mod generator;
pub mod labels;
pub mod legacy;
pub mod markdown;
pub mod questionnaire;
pub mod sections;
pub mod templates;

pub use error::{BriefError, BriefResult};
pub use generator::{
    generate_brief, generate_validated_brief, generation_path, GenerationPath,
};
pub use templates::{template_by_id, Template, TEMPLATES};
