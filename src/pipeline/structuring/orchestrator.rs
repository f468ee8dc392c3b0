use crate::models::document::RawDocument;
use crate::models::enums::DocumentType;

use super::classify::classify_document;
use super::extract::extract_fields;
use super::rules::RuleSet;
use super::sanitize::sanitize_ocr_text;
use super::types::{ExtractedFields, StructuredDocument, ValidationResult};
use super::validation::validate_fields;

/// Composes sanitize → classify → extract → validate into one call.
///
/// The pipeline holds only the read-only rule configuration, so a
/// single instance may serve concurrent callers; every invocation
/// allocates its own result and performs no I/O.
pub struct DocumentPipeline {
    rules: RuleSet,
}

impl DocumentPipeline {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Structure one raw document. Total: every input yields a result,
    /// an unusable one being an invalid verdict rather than an error.
    pub fn process(&self, doc: &RawDocument) -> StructuredDocument {
        let _span = tracing::info_span!("process_document", doc_id = %doc.id).entered();

        let text = sanitize_ocr_text(&doc.text);

        // A declared non-Unknown type bypasses the classifier.
        let document_type = match &doc.declared_type {
            Some(declared) if !matches!(declared, DocumentType::Unknown) => declared.clone(),
            _ => classify_document(&text, &self.rules),
        };

        let Some(doc_rules) = self.rules.rules_for(&document_type) else {
            tracing::warn!(doc_id = %doc.id, "unclassifiable document");
            return StructuredDocument {
                document_id: doc.id,
                document_type: DocumentType::Unknown,
                fields: ExtractedFields::new(),
                validation: ValidationResult::unclassifiable(),
            };
        };

        let fields = extract_fields(&text, doc_rules);
        let validation = validate_fields(&fields, doc_rules);

        tracing::debug!(
            doc_id = %doc.id,
            doc_type = document_type.as_str(),
            field_count = fields.len(),
            is_valid = validation.is_valid,
            "document structured"
        );

        StructuredDocument {
            document_id: doc.id,
            document_type,
            fields,
            validation,
        }
    }
}

impl Default for DocumentPipeline {
    fn default() -> Self {
        Self::new(RuleSet::standard())
    }
}
