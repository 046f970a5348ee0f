//! Visit modality (v9 visit API and later).

use serde::{Deserialize, Serialize};

/// How a virtual visit is conducted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitModality {
    /// Video visit.
    Virtual,
    /// Telephone visit.
    Phone,
}

impl VisitModality {
    /// Wire string for this modality.
    pub fn as_wire(self) -> &'static str {
        match self {
            VisitModality::Virtual => "virtual",
            VisitModality::Phone => "phone",
        }
    }

    /// Parse a wire string. Unrecognised values yield `None` rather than an error.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "virtual" => Some(VisitModality::Virtual),
            "phone" => Some(VisitModality::Phone),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modalities() {
        assert_eq!(
            VisitModality::from_wire("virtual"),
            Some(VisitModality::Virtual)
        );
        assert_eq!(VisitModality::from_wire("phone"), Some(VisitModality::Phone));
    }

    #[test]
    fn unknown_modality_is_none() {
        assert_eq!(VisitModality::from_wire("hologram"), None);
        assert_eq!(VisitModality::from_wire("Phone"), None);
    }

    #[test]
    fn wire_matches_serde() {
        for modality in [VisitModality::Virtual, VisitModality::Phone] {
            let json = serde_json::to_value(modality).expect("serialize modality");
            assert_eq!(json, serde_json::json!(modality.as_wire()));
        }
    }
}
