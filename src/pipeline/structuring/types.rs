use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::models::enums::DocumentType;

/// A fully normalized field value. A field either normalizes completely
/// or is absent from the mapping; partially normalized values are never
/// stored.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Amount(f64),
}

impl FieldValue {
    /// Canonical string form: dates as `YYYY-MM-DD`, amounts with two
    /// fractional digits, text as-is.
    pub fn canonical(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FieldValue::Amount(a) => format!("{a:.2}"),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical())
    }
}

/// Field name → normalized value for one document. Keys are unique;
/// insertion order carries no meaning.
pub type ExtractedFields = BTreeMap<String, FieldValue>;

/// One present field whose value failed its format re-check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatError {
    pub field: String,
    pub reason: String,
}

/// Verdict on an extracted field set. An invalid verdict is a normal,
/// actionable outcome, not a fault.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub missing_fields: BTreeSet<String>,
    pub format_errors: Vec<FormatError>,
}

impl ValidationResult {
    /// `is_valid` holds exactly when both violation lists are empty.
    pub fn from_violations(
        missing_fields: BTreeSet<String>,
        format_errors: Vec<FormatError>,
    ) -> Self {
        Self {
            is_valid: missing_fields.is_empty() && format_errors.is_empty(),
            missing_fields,
            format_errors,
        }
    }

    /// Failing verdict for documents no ruleset applies to.
    pub fn unclassifiable() -> Self {
        Self::from_violations(
            BTreeSet::new(),
            vec![FormatError {
                field: "document_type".into(),
                reason: "unclassifiable document".into(),
            }],
        )
    }
}

/// Complete result of structuring one document, owned by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct StructuredDocument {
    pub document_id: Uuid,
    pub document_type: DocumentType,
    pub fields: ExtractedFields,
    pub validation: ValidationResult,
}

impl StructuredDocument {
    /// JSON shape handed to the API layer: `fields` comes out as a flat
    /// string-to-string object via canonical serialization.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_date_form() {
        let v = FieldValue::Date(NaiveDate::from_ymd_opt(1980, 1, 15).unwrap());
        assert_eq!(v.canonical(), "1980-01-15");
    }

    #[test]
    fn canonical_amount_has_two_decimals() {
        assert_eq!(FieldValue::Amount(150.0).canonical(), "150.00");
        assert_eq!(FieldValue::Amount(1250.5).canonical(), "1250.50");
    }

    #[test]
    fn canonical_text_passes_through() {
        assert_eq!(FieldValue::Text("ABC123456".into()).canonical(), "ABC123456");
    }

    #[test]
    fn field_value_serializes_as_canonical_string() {
        let v = FieldValue::Amount(150.0);
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"150.00\"");

        let d = FieldValue::Date(NaiveDate::from_ymd_opt(2023, 5, 10).unwrap());
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2023-05-10\"");
    }

    // ── ValidationResult invariant ──────────────────────────────────

    #[test]
    fn valid_iff_no_violations() {
        let clean = ValidationResult::from_violations(BTreeSet::new(), vec![]);
        assert!(clean.is_valid);

        let mut missing = BTreeSet::new();
        missing.insert("member_id".to_string());
        let with_missing = ValidationResult::from_violations(missing, vec![]);
        assert!(!with_missing.is_valid);

        let with_format = ValidationResult::from_violations(
            BTreeSet::new(),
            vec![FormatError {
                field: "amount".into(),
                reason: "negative amount".into(),
            }],
        );
        assert!(!with_format.is_valid);
    }

    #[test]
    fn unclassifiable_verdict_cites_document_type() {
        let verdict = ValidationResult::unclassifiable();
        assert!(!verdict.is_valid);
        assert!(verdict.missing_fields.is_empty());
        assert_eq!(verdict.format_errors.len(), 1);
        assert_eq!(verdict.format_errors[0].field, "document_type");
        assert!(verdict.format_errors[0].reason.contains("unclassifiable"));
    }

    #[test]
    fn structured_document_json_shape() {
        let mut fields = ExtractedFields::new();
        fields.insert("member_id".into(), FieldValue::Text("ABC123456".into()));
        fields.insert("amount".into(), FieldValue::Amount(150.0));

        let doc = StructuredDocument {
            document_id: Uuid::new_v4(),
            document_type: DocumentType::InsuranceClaim,
            fields,
            validation: ValidationResult::from_violations(BTreeSet::new(), vec![]),
        };

        let json = doc.to_json().unwrap();
        assert_eq!(json["document_type"], "insurance_claim");
        assert_eq!(json["fields"]["member_id"], "ABC123456");
        assert_eq!(json["fields"]["amount"], "150.00");
        assert_eq!(json["validation"]["is_valid"], true);
    }
}
