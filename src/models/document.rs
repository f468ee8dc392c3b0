use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::DocumentType;

/// Raw OCR text awaiting structuring. Created once per processing
/// request and never mutated by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: Uuid,
    pub text: String,
    /// Type hint supplied by the caller, e.g. from an upload form.
    pub declared_type: Option<DocumentType>,
}

impl RawDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            declared_type: None,
        }
    }

    pub fn with_declared_type(text: impl Into<String>, doc_type: DocumentType) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            declared_type: Some(doc_type),
        }
    }
}
