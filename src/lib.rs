pub mod models;
pub mod pipeline;

pub use models::document::RawDocument;
pub use models::enums::{DocumentType, FieldKind};
pub use models::ModelError;
pub use pipeline::structuring::{
    CapturePolicy, DocumentPipeline, DocumentRules, ExtractedFields, FieldRule, FieldValue,
    FormatError, NormalizationError, RuleError, RuleSet, StructuredDocument, ValidationResult,
};
