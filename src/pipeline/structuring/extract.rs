use crate::models::enums::FieldKind;

use super::normalize::{
    normalize_currency, normalize_date, normalize_identifier, normalize_text, NormalizationError,
};
use super::rules::DocumentRules;
use super::types::{ExtractedFields, FieldValue};

/// Run every field rule for one document type over the text.
///
/// Extraction is best-effort per field: a rule that does not match, or
/// whose capture fails normalization, contributes nothing. Failures are
/// logged and swallowed here; they never abort the document.
pub fn extract_fields(text: &str, rules: &DocumentRules) -> ExtractedFields {
    let mut fields = ExtractedFields::new();

    for rule in &rules.fields {
        let raw = match rule.find_raw(text) {
            Some(raw) => raw,
            None => continue,
        };

        match normalize_capture(&rule.kind, raw) {
            Ok(Some(value)) => {
                fields.insert(rule.name.clone(), value);
            }
            // Empty after normalization: the field is absent.
            Ok(None) => {}
            Err(error) => {
                tracing::debug!(
                    field = %rule.name,
                    raw,
                    %error,
                    "normalization failed, field omitted"
                );
            }
        }
    }

    fields
}

/// Apply the kind-specific normalizer to a captured substring.
fn normalize_capture(
    kind: &FieldKind,
    raw: &str,
) -> Result<Option<FieldValue>, NormalizationError> {
    match kind {
        FieldKind::Date => normalize_date(raw).map(|d| Some(FieldValue::Date(d))),
        FieldKind::Currency => normalize_currency(raw).map(|a| Some(FieldValue::Amount(a))),
        FieldKind::Identifier => Ok(normalize_identifier(raw).map(FieldValue::Text)),
        FieldKind::Text => Ok(normalize_text(raw).map(FieldValue::Text)),
    }
}
