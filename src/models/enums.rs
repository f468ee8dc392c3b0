use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(DocumentType {
    InsuranceClaim => "insurance_claim",
    Prescription => "prescription",
    MedicalReport => "medical_report",
    Unknown => "unknown",
});

str_enum!(FieldKind {
    Date => "date",
    Currency => "currency",
    Identifier => "identifier",
    Text => "text",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn document_type_round_trip() {
        for (variant, s) in [
            (DocumentType::InsuranceClaim, "insurance_claim"),
            (DocumentType::Prescription, "prescription"),
            (DocumentType::MedicalReport, "medical_report"),
            (DocumentType::Unknown, "unknown"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(DocumentType::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn field_kind_round_trip() {
        for (variant, s) in [
            (FieldKind::Date, "date"),
            (FieldKind::Currency, "currency"),
            (FieldKind::Identifier, "identifier"),
            (FieldKind::Text, "text"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(FieldKind::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn document_type_serializes_snake_case() {
        let json = serde_json::to_string(&DocumentType::InsuranceClaim).unwrap();
        assert_eq!(json, "\"insurance_claim\"");
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(DocumentType::from_str("invoice").is_err());
        assert!(DocumentType::from_str("INSURANCE_CLAIM").is_err());
        assert!(FieldKind::from_str("").is_err());
    }
}
