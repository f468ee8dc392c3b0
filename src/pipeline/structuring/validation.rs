use std::collections::BTreeSet;

use crate::models::enums::FieldKind;

use super::rules::DocumentRules;
use super::types::{ExtractedFields, FieldValue, FormatError, ValidationResult};

/// Check an extracted field set against one document type's rules.
///
/// Missing fields are the required names absent from the mapping.
/// Format errors come from re-checking each present value against its
/// rule's semantic kind. The input mapping is never mutated; fields no
/// rule governs are ignored.
pub fn validate_fields(fields: &ExtractedFields, rules: &DocumentRules) -> ValidationResult {
    let mut missing_fields = BTreeSet::new();
    let mut format_errors = Vec::new();

    for rule in &rules.fields {
        match fields.get(&rule.name) {
            None => {
                if rule.required {
                    missing_fields.insert(rule.name.clone());
                }
            }
            Some(value) => {
                if let Some(reason) = check_kind(&rule.kind, value) {
                    format_errors.push(FormatError {
                        field: rule.name.clone(),
                        reason,
                    });
                }
            }
        }
    }

    ValidationResult::from_violations(missing_fields, format_errors)
}

/// Re-check one present value against its expected semantic kind.
fn check_kind(kind: &FieldKind, value: &FieldValue) -> Option<String> {
    match (kind, value) {
        (FieldKind::Date, FieldValue::Date(_)) => None,
        (FieldKind::Date, other) => Some(format!(
            "expected canonical date (YYYY-MM-DD), got '{other}'"
        )),
        (FieldKind::Currency, FieldValue::Amount(a)) if *a >= 0.0 => None,
        (FieldKind::Currency, FieldValue::Amount(a)) => {
            Some(format!("negative amount: {a:.2}"))
        }
        (FieldKind::Currency, other) => {
            Some(format!("expected decimal amount, got '{other}'"))
        }
        (FieldKind::Identifier | FieldKind::Text, FieldValue::Text(s)) if !s.is_empty() => None,
        (FieldKind::Identifier | FieldKind::Text, FieldValue::Text(_)) => {
            Some("empty value".into())
        }
        (FieldKind::Identifier | FieldKind::Text, other) => {
            Some(format!("expected text, got '{other}'"))
        }
    }
}
