use serde::{Deserialize, Serialize};

/// Why a piece of text was not romanized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransliterationError {
    #[error("Input is empty or contains only whitespace")]
    EmptyInput,
    #[error("Invalid characters detected: {}", format_characters(.characters))]
    InvalidCharacters {
        /// Distinct offending characters, sorted by code point.
        characters: Vec<char>,
    },
}

/// Machine-readable error kind, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    InvalidCharacters,
}

impl TransliterationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransliterationError::EmptyInput => ErrorKind::EmptyInput,
            TransliterationError::InvalidCharacters { .. } => ErrorKind::InvalidCharacters,
        }
    }

    /// The offending characters, empty for [`TransliterationError::EmptyInput`].
    pub fn invalid_characters(&self) -> &[char] {
        match self {
            TransliterationError::EmptyInput => &[],
            TransliterationError::InvalidCharacters { characters } => characters,
        }
    }

    /// Short English summary for logs and API clients.
    pub fn summary(&self) -> &'static str {
        match self {
            TransliterationError::EmptyInput => "Empty text",
            TransliterationError::InvalidCharacters { .. } => "Invalid characters detected",
        }
    }

    /// Message shown to the person who typed the text, in Sinhala.
    pub fn user_message(&self) -> &'static str {
        match self {
            // "Please don't send an empty message"
            TransliterationError::EmptyInput => "කරුණාකර හිස් පණිවිඩයක් යවන්න එපා",
            // "Please use valid letters only"
            TransliterationError::InvalidCharacters { .. } => {
                "කරුණාකර වලංගු අකුරු පමණක් භාවිතා කරන්න"
            }
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }
}

fn format_characters(characters: &[char]) -> String {
    characters
        .iter()
        .map(|c| format!("{c:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Serializable form of a [`TransliterationError`] for a transport layer.
///
/// ```json
/// {
///   "error": "Invalid characters detected",
///   "kind": "invalid_characters",
///   "user_message": "කරුණාකර වලංගු අකුරු පමණක් භාවිතා කරන්න",
///   "invalid_characters": ["a"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
    pub kind: ErrorKind,
    pub user_message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid_characters: Vec<String>,
}

impl From<&TransliterationError> for ErrorReport {
    fn from(err: &TransliterationError) -> Self {
        Self {
            error: err.summary().to_string(),
            kind: err.kind(),
            user_message: err.user_message().to_string(),
            invalid_characters: err
                .invalid_characters()
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl ErrorReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_characters() {
        let err = TransliterationError::InvalidCharacters {
            characters: vec!['a', 'z'],
        };
        assert_eq!(err.to_string(), "Invalid characters detected: 'a', 'z'");
        assert_eq!(err.kind(), ErrorKind::InvalidCharacters);
    }

    #[test]
    fn report_for_invalid_characters() {
        let err = TransliterationError::InvalidCharacters {
            characters: vec!['@', 'a'],
        };
        let json: serde_json::Value =
            serde_json::from_str(&err.report().to_json().unwrap()).unwrap();
        assert_eq!(json["error"], "Invalid characters detected");
        assert_eq!(json["kind"], "invalid_characters");
        assert_eq!(json["user_message"], "කරුණාකර වලංගු අකුරු පමණක් භාවිතා කරන්න");
        assert_eq!(json["invalid_characters"], serde_json::json!(["@", "a"]));
    }

    #[test]
    fn report_for_empty_input_omits_character_list() {
        let report = TransliterationError::EmptyInput.report();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["kind"], "empty_input");
        assert_eq!(json["error"], "Empty text");
        assert!(json.get("invalid_characters").is_none());

        let back: ErrorReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(back, report);
    }
}
