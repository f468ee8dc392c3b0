/// Clean raw OCR text before classification and extraction.
/// Strips control characters and non-printing bytes, trims each line,
/// collapses blank lines. Label/value punctuation survives.
pub fn sanitize_ocr_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| {
            c.is_alphanumeric()
                || c.is_whitespace()
                || matches!(
                    c,
                    '.' | ','
                        | ';'
                        | ':'
                        | '-'
                        | '/'
                        | '('
                        | ')'
                        | '['
                        | ']'
                        | '+'
                        | '='
                        | '%'
                        | '#'
                        | '@'
                        | '&'
                        | '\''
                        | '"'
                        | '!'
                        | '?'
                        | '*'
                        | '_'
                        | '$'
                        | '€'
                        | '£'
                )
        })
        .collect::<String>()
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_null_bytes() {
        let raw = "Patient Name: John\x00Doe";
        let clean = sanitize_ocr_text(raw);
        assert!(!clean.contains('\x00'));
        assert!(clean.contains("JohnDoe"));
    }

    #[test]
    fn strips_control_characters() {
        let raw = "Dosage: 500mg\x01\x02\x03\nDate of Service: 05/10/2023";
        let clean = sanitize_ocr_text(raw);
        assert!(!clean.contains('\x01'));
        assert!(!clean.contains('\x02'));
        assert!(clean.contains("500mg"));
        assert!(clean.contains("05/10/2023"));
    }

    #[test]
    fn strips_zero_width_characters() {
        let raw = "Member ID: ABC\u{200B}123456\u{FEFF}";
        let clean = sanitize_ocr_text(raw);
        assert_eq!(clean, "Member ID: ABC123456");
    }

    #[test]
    fn preserves_claim_punctuation() {
        let raw = "Total Amount: $1,250.50 (billed)\nDiagnosis Code: E11.65";
        let clean = sanitize_ocr_text(raw);
        assert!(clean.contains("$1,250.50"));
        assert!(clean.contains("(billed)"));
        assert!(clean.contains("E11.65"));
    }

    #[test]
    fn collapses_blank_lines() {
        let raw = "Line one\n\n\n\nLine two\n\n\nLine three";
        let clean = sanitize_ocr_text(raw);
        assert_eq!(clean, "Line one\nLine two\nLine three");
    }

    #[test]
    fn trims_whitespace_per_line() {
        let raw = "  leading spaces  \n  trailing too  ";
        let clean = sanitize_ocr_text(raw);
        assert_eq!(clean, "leading spaces\ntrailing too");
    }

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(sanitize_ocr_text(""), "");
    }

    #[test]
    fn only_control_chars_returns_empty() {
        assert_eq!(sanitize_ocr_text("\x00\x01\x02"), "");
    }
}
