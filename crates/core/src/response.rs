use serde::{Deserialize, Serialize};

use crate::classify::{digit_sum, is_perfect, is_prime, properties};

/// Successful classification of a single number
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<String>,
    pub digit_sum: i64,
    pub fun_fact: String,
}

impl ClassificationResult {
    /// Run every classifier over `number` and attach the given fun fact.
    pub fn new(number: i64, fun_fact: String) -> Self {
        Self {
            number,
            is_prime: is_prime(number),
            is_perfect: is_perfect(number),
            properties: properties(number),
            digit_sum: digit_sum(number),
            fun_fact,
        }
    }
}

/// Body returned when the input can't be classified.
///
/// `number` echoes the raw input, which may not be a number at all.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorResult {
    pub number: String,
    pub error: bool,
}

impl ErrorResult {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            number: raw.into(),
            error: true,
        }
    }
}

/// Reasons raw input can't be turned into a number
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberInputError {
    #[error("Missing number")]
    Missing,

    #[error("Invalid number: {0:?}")]
    Invalid(String),
}

impl NumberInputError {
    /// The raw input to echo back to the caller
    pub fn raw(&self) -> &str {
        match self {
            Self::Missing => "",
            Self::Invalid(raw) => raw,
        }
    }

    pub fn to_error_result(&self) -> ErrorResult {
        ErrorResult::new(self.raw())
    }
}

/// Parse a raw `number` value as a base-10 signed integer.
///
/// An absent value and an empty value are both reported as missing.
pub fn parse_number(raw: Option<&str>) -> Result<i64, NumberInputError> {
    let raw = match raw {
        None | Some("") => return Err(NumberInputError::Missing),
        Some(raw) => raw,
    };

    raw.parse::<i64>()
        .map_err(|_| NumberInputError::Invalid(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // parse_number tests
    // ============================================================================

    #[test]
    fn test_parse_number_valid() {
        assert_eq!(parse_number(Some("153")), Ok(153));
        assert_eq!(parse_number(Some("-42")), Ok(-42));
        assert_eq!(parse_number(Some("+7")), Ok(7));
        assert_eq!(parse_number(Some("0")), Ok(0));
    }

    #[test]
    fn test_parse_number_missing_or_empty() {
        assert_eq!(parse_number(None), Err(NumberInputError::Missing));
        assert_eq!(parse_number(Some("")), Err(NumberInputError::Missing));
    }

    #[test]
    fn test_parse_number_invalid() {
        for raw in ["abc", "1.5", " 12", "12 ", "0x10", "99999999999999999999"] {
            assert_eq!(
                parse_number(Some(raw)),
                Err(NumberInputError::Invalid(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_number_input_error_raw() {
        assert_eq!(NumberInputError::Missing.raw(), "");
        assert_eq!(NumberInputError::Invalid("abc".to_string()).raw(), "abc");
    }

    // ============================================================================
    // Serialization tests
    // ============================================================================

    #[test]
    fn test_classification_result_json_shape() {
        let result = ClassificationResult::new(153, "fact".to_string());
        let json = serde_json::to_string(&result).unwrap();

        assert_eq!(
            json,
            r#"{"number":153,"is_prime":false,"is_perfect":false,"properties":["armstrong","odd"],"digit_sum":9,"fun_fact":"fact"}"#
        );
    }

    #[test]
    fn test_classification_result_perfect_number() {
        let result = ClassificationResult::new(28, String::new());

        assert!(result.is_perfect);
        assert!(!result.is_prime);
        assert_eq!(result.properties, vec!["even"]);
        assert_eq!(result.digit_sum, 10);
    }

    #[test]
    fn test_error_result_json_shape() {
        let missing = serde_json::to_string(&NumberInputError::Missing.to_error_result()).unwrap();
        assert_eq!(missing, r#"{"number":"","error":true}"#);

        let invalid = serde_json::to_string(&ErrorResult::new("abc")).unwrap();
        assert_eq!(invalid, r#"{"number":"abc","error":true}"#);
    }
}
