use crate::models::enums::DocumentType;

use super::rules::{DocumentRules, RuleSet};

/// Determine the document type from raw text by keyword evidence.
///
/// Each type is scored by counting case-insensitive occurrences of its
/// keyword list; the highest total wins, ties going to the earlier
/// entry in the rule set. All-zero scores mean the text carries no
/// recognizable evidence and the document stays unclassified.
pub fn classify_document(text: &str, rules: &RuleSet) -> DocumentType {
    let lower = text.to_lowercase();

    let mut best: Option<(&DocumentRules, usize)> = None;
    for doc_rules in rules.document_rules() {
        let score = keyword_score(&lower, &doc_rules.keywords);
        tracing::debug!(
            doc_type = doc_rules.doc_type.as_str(),
            score,
            "classifier score"
        );
        // Strict > keeps the first-listed type on ties.
        let improves = match &best {
            Some((_, top)) => score > *top,
            None => true,
        };
        if improves {
            best = Some((doc_rules, score));
        }
    }

    match best {
        Some((doc_rules, score)) if score > 0 => doc_rules.doc_type.clone(),
        _ => DocumentType::Unknown,
    }
}

fn keyword_score(lower_text: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .map(|kw| lower_text.matches(kw.as_str()).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> DocumentType {
        classify_document(text, &RuleSet::standard())
    }

    #[test]
    fn claim_keywords_win() {
        let text = "Insurance claim form. Policy Number: POL-1. Member ID: ABC123456.";
        assert!(matches!(classify(text), DocumentType::InsuranceClaim));
    }

    #[test]
    fn prescription_keywords_win() {
        let text = "Prescription\nDosage: 500mg\nRefills: 2";
        assert!(matches!(classify(text), DocumentType::Prescription));
    }

    #[test]
    fn report_keywords_win() {
        let text = "Radiology report. Findings: clear. Impression: normal. Diagnosis: none.";
        assert!(matches!(classify(text), DocumentType::MedicalReport));
    }

    #[test]
    fn scoring_counts_occurrences_not_presence() {
        // One claim keyword vs. three distinct prescription keywords.
        let text = "claim mentioned once. prescription dosage refills.";
        assert!(matches!(classify(text), DocumentType::Prescription));
    }

    #[test]
    fn tie_breaks_by_priority_order() {
        // Exactly one keyword from each of two types.
        let text = "a claim and a prescription";
        assert!(matches!(classify(text), DocumentType::InsuranceClaim));
    }

    #[test]
    fn no_evidence_is_unknown() {
        assert!(matches!(classify(""), DocumentType::Unknown));
        assert!(matches!(
            classify("Lorem ipsum dolor sit amet, unrelated text entirely."),
            DocumentType::Unknown
        ));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(matches!(
            classify("INSURANCE CLAIM FORM"),
            DocumentType::InsuranceClaim
        ));
    }

    #[test]
    fn classification_is_deterministic() {
        let text = "Prescription dosage refills prescription";
        let first = classify(text);
        for _ in 0..10 {
            assert_eq!(classify(text), first);
        }
    }
}
