use regex::Regex;
use thiserror::Error;

use crate::models::enums::{DocumentType, FieldKind};

/// How a matched pattern yields the raw value substring.
#[derive(Debug, Clone, PartialEq)]
pub enum CapturePolicy {
    /// Use the given capture group (1-based).
    Group(usize),
    /// Use the entire match.
    WholeMatch,
}

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}

/// Declarative recipe for one extractable field: a colon-terminated
/// label anchor, a capture that never crosses a line boundary, and the
/// semantic kind the capture normalizes to. Immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: String,
    pattern: Regex,
    pub capture: CapturePolicy,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        kind: FieldKind,
        required: bool,
    ) -> Result<Self, RuleError> {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            field: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            pattern,
            capture: CapturePolicy::Group(1),
            kind,
            required,
        })
    }

    pub fn with_capture(mut self, capture: CapturePolicy) -> Self {
        self.capture = capture;
        self
    }

    /// Raw substring selected by the first match, if any.
    pub fn find_raw<'t>(&self, text: &'t str) -> Option<&'t str> {
        let caps = self.pattern.captures(text)?;
        match self.capture {
            CapturePolicy::WholeMatch => caps.get(0).map(|m| m.as_str()),
            CapturePolicy::Group(i) => caps.get(i).map(|m| m.as_str()),
        }
    }
}

/// Extraction rules and classifier keywords for one document type.
#[derive(Debug, Clone)]
pub struct DocumentRules {
    pub doc_type: DocumentType,
    pub keywords: Vec<String>,
    pub fields: Vec<FieldRule>,
}

/// Process-wide rule configuration: one `DocumentRules` per supported
/// type. Built once at startup and read-only afterwards; list order is
/// the classifier tie-break priority.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<DocumentRules>,
}

impl RuleSet {
    pub fn new(rules: Vec<DocumentRules>) -> Self {
        Self { rules }
    }

    pub fn document_rules(&self) -> &[DocumentRules] {
        &self.rules
    }

    pub fn rules_for(&self, doc_type: &DocumentType) -> Option<&DocumentRules> {
        self.rules.iter().find(|r| &r.doc_type == doc_type)
    }

    /// Built-in healthcare rules: insurance claims, prescriptions,
    /// medical reports, in that priority order.
    pub fn standard() -> Self {
        Self::new(vec![
            DocumentRules {
                doc_type: DocumentType::InsuranceClaim,
                keywords: keywords(&[
                    "claim",
                    "policy number",
                    "member id",
                    "insurance",
                    "explanation of benefits",
                    "copay",
                ]),
                fields: claim_fields(),
            },
            DocumentRules {
                doc_type: DocumentType::Prescription,
                keywords: keywords(&[
                    "prescription",
                    "dosage",
                    "refills",
                    "rx",
                    "pharmacy",
                    "prescriber",
                ]),
                fields: prescription_fields(),
            },
            DocumentRules {
                doc_type: DocumentType::MedicalReport,
                keywords: keywords(&[
                    "diagnosis",
                    "report",
                    "findings",
                    "impression",
                    "radiology",
                ]),
                fields: report_fields(),
            },
        ])
    }
}

/// Value shape for date fields: numeric with slash/dash separators,
/// ISO, or an English month-name form. One line, one capture group.
const DATE_VALUE: &str = r"(\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\d{4}-\d{1,2}-\d{1,2}|[A-Za-z]{3,9}\.?[ \t]+\d{1,2}(?:st|nd|rd|th)?,?[ \t]+\d{2,4}|\d{1,2}(?:st|nd|rd|th)?[ \t]+[A-Za-z]{3,9}\.?,?[ \t]+\d{2,4})";

/// Value shape for currency fields: optional symbol, optional sign,
/// digits with thousands separators.
const AMOUNT_VALUE: &str = r"([$€£]?[ \t]*-?[\d,]+(?:\.\d+)?)";

/// Value shape for name-like fields: words of letters and common name
/// punctuation, single spaces between words. A run of two spaces or a
/// newline ends the capture.
const NAME_VALUE: &str = r"([A-Za-z][A-Za-z.'-]*(?:[ \t][A-Za-z.'-]+)*)";

fn rule(name: &str, pattern: &str, kind: FieldKind, required: bool) -> FieldRule {
    FieldRule::new(name, pattern, kind, required).expect("valid field pattern")
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Fields every supported document type carries.
///
/// The patient anchor deliberately requires a colon-terminated label at
/// the start of a line: OCR output stacks section headers ("PATIENT
/// INFORMATION", a bare "Name" column header) directly above labeled
/// fields, and a looser anchor binds header text instead of the value.
fn common_fields() -> Vec<FieldRule> {
    vec![
        rule(
            "patient_name",
            &format!(r"(?im)^(?:patient[ \t]+name|patient|name)[ \t]*:[ \t]*{NAME_VALUE}"),
            FieldKind::Text,
            true,
        ),
        rule(
            "date_of_birth",
            &format!(r"(?im)\b(?:date[ \t]+of[ \t]+birth|birth[ \t]+date|dob)[ \t]*:[ \t]*{DATE_VALUE}"),
            FieldKind::Date,
            false,
        ),
        rule(
            "provider_name",
            &format!(r"(?im)^(?:provider(?:[ \t]+name)?|doctor|physician)[ \t]*:[ \t]*{NAME_VALUE}"),
            FieldKind::Text,
            false,
        ),
        rule(
            "phone",
            r"(?im)\b(?:phone|telephone|tel|mobile)[ \t]*:[ \t]*(\(?\d{3}\)?[ \t.-]*\d{3}[ \t.-]?\d{4})",
            FieldKind::Identifier,
            false,
        ),
    ]
}

fn claim_fields() -> Vec<FieldRule> {
    let mut fields = common_fields();
    fields.extend([
        rule(
            "member_id",
            r"(?im)\b(?:member[ \t]*id|policy[ \t]+number)[ \t]*:[ \t]*([A-Za-z0-9-]+(?:[ \t][A-Za-z0-9-]+)*)",
            FieldKind::Identifier,
            true,
        ),
        rule(
            "claim_number",
            r"(?im)\bclaim[ \t]*(?:#|number|no\.?)?[ \t]*:[ \t]*([A-Za-z0-9-]+)",
            FieldKind::Identifier,
            false,
        ),
        rule(
            "group_number",
            r"(?im)\bgroup[ \t]*(?:#|number)?[ \t]*:[ \t]*([A-Za-z0-9-]+)",
            FieldKind::Identifier,
            false,
        ),
        rule(
            "date_of_service",
            &format!(r"(?im)\b(?:date[ \t]+of[ \t]+service|service[ \t]+date|dos)[ \t]*:[ \t]*{DATE_VALUE}"),
            FieldKind::Date,
            true,
        ),
        rule(
            "diagnosis_code",
            r"(?im)\b(?:diagnosis|dx)[ \t]+code[ \t]*:[ \t]*([A-Z]\d{2,5}(?:\.\d{1,4})?)",
            FieldKind::Identifier,
            false,
        ),
        rule(
            "procedure_code",
            r"(?im)\b(?:procedure|cpt)[ \t]+code[ \t]*:[ \t]*([A-Z]?\d{3,5}[A-Z]?)",
            FieldKind::Identifier,
            false,
        ),
        rule(
            "amount",
            &format!(r"(?im)\b(?:total[ \t]+amount|amount|total|charge|balance)[ \t]*:[ \t]*{AMOUNT_VALUE}"),
            FieldKind::Currency,
            false,
        ),
        rule(
            "patient_responsibility",
            &format!(r"(?im)\bpatient[ \t]+responsibility[ \t]*:[ \t]*{AMOUNT_VALUE}"),
            FieldKind::Currency,
            false,
        ),
    ]);
    fields
}

fn prescription_fields() -> Vec<FieldRule> {
    let mut fields = common_fields();
    fields.extend([
        rule(
            "medication",
            r"(?im)\bmedication[ \t]*:[ \t]*([A-Za-z][A-Za-z0-9.'/-]*(?:[ \t][A-Za-z0-9.'/-]+)*)",
            FieldKind::Text,
            true,
        ),
        rule(
            "dosage",
            r"(?im)\bdosage[ \t]*:[ \t]*([0-9A-Za-z][0-9A-Za-z./-]*(?:[ \t][0-9A-Za-z./-]+)*)",
            FieldKind::Text,
            true,
        ),
        rule(
            "frequency",
            r"(?im)\bfrequency[ \t]*:[ \t]*([A-Za-z0-9][A-Za-z0-9./-]*(?:[ \t][A-Za-z0-9./-]+)*)",
            FieldKind::Text,
            false,
        ),
        rule(
            "refills",
            r"(?im)\brefills?[ \t]*:[ \t]*(\d+)",
            FieldKind::Identifier,
            false,
        ),
        rule(
            "prescriber",
            &format!(r"(?im)\bprescriber[ \t]*:[ \t]*{NAME_VALUE}"),
            FieldKind::Text,
            false,
        ),
    ]);
    fields
}

fn report_fields() -> Vec<FieldRule> {
    let mut fields = common_fields();
    fields.extend([
        rule(
            "report_type",
            r"(?im)\breport[ \t]+type[ \t]*:[ \t]*([^\n]+)",
            FieldKind::Text,
            true,
        ),
        rule(
            "findings",
            r"(?im)\bfindings[ \t]*:[ \t]*([^\n]+)",
            FieldKind::Text,
            false,
        ),
        rule(
            "impression",
            r"(?im)\bimpression[ \t]*:[ \t]*([^\n]+)",
            FieldKind::Text,
            false,
        ),
        rule(
            "recommendations",
            r"(?im)\brecommendations?[ \t]*:[ \t]*([^\n]+)",
            FieldKind::Text,
            false,
        ),
    ]);
    fields
}
