use serde::Serialize;
use thiserror::Error;

/// Storage-level errors for data access operations
///
/// The in-memory store never produces these; they exist so alternative
/// backends behind the `Storage` trait can report failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {message}")]
    Unavailable { message: String },

    #[error("Storage backend error: {message}")]
    Backend { message: String },
}

/// Validation errors for a single input field
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredField { field: String },

    #[error("Invalid type: {field}, expected={expected}, received={received}")]
    InvalidType {
        field: String,
        expected: String,
        received: String,
    },

    #[error("Field too long: {field}, max_length={max_length}, actual_length={actual_length}")]
    TooLong {
        field: String,
        max_length: usize,
        actual_length: usize,
    },

    #[error("Field too short: {field}, min_length={min_length}, actual_length={actual_length}")]
    TooShort {
        field: String,
        min_length: usize,
        actual_length: usize,
    },

    #[error("Invalid format: {field}, expected={expected}")]
    InvalidFormat { field: String, expected: String },
}

/// Machine-readable description of one violated constraint, returned to
/// clients in the `details` array of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: String,
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    /// Issue that applies to the request body as a whole
    pub fn body(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            path: Vec::new(),
            message: message.into(),
        }
    }
}

impl From<ValidationError> for ValidationIssue {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::RequiredField { field } => ValidationIssue {
                code: "invalid_type".to_string(),
                path: vec![field],
                message: "Required".to_string(),
            },
            ValidationError::InvalidType {
                field,
                expected,
                received,
            } => ValidationIssue {
                code: "invalid_type".to_string(),
                path: vec![field],
                message: format!("Expected {}, received {}", expected, received),
            },
            ValidationError::TooShort {
                field, min_length, ..
            } => ValidationIssue {
                code: "too_small".to_string(),
                path: vec![field],
                message: format!("Must contain at least {} character(s)", min_length),
            },
            ValidationError::TooLong {
                field, max_length, ..
            } => ValidationIssue {
                code: "too_big".to_string(),
                path: vec![field],
                message: format!("Must contain at most {} character(s)", max_length),
            },
            ValidationError::InvalidFormat { field, expected } => ValidationIssue {
                code: "invalid_string".to_string(),
                path: vec![field],
                message: format!("Invalid format, expected {}", expected),
            },
        }
    }
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = StorageError::Backend {
            message: "disk on fire".to_string(),
        };
        assert_eq!(error.to_string(), "Storage backend error: disk on fire");

        let validation_error = ValidationError::RequiredField {
            field: "email".to_string(),
        };
        assert_eq!(validation_error.to_string(), "Required field missing: email");
    }

    #[test]
    fn test_required_field_becomes_invalid_type_issue() {
        let issue: ValidationIssue = ValidationError::RequiredField {
            field: "name".to_string(),
        }
        .into();

        assert_eq!(issue.code, "invalid_type");
        assert_eq!(issue.path, vec!["name".to_string()]);
        assert_eq!(issue.message, "Required");
    }

    #[test]
    fn test_length_errors_map_to_size_codes() {
        let short: ValidationIssue = ValidationError::TooShort {
            field: "message".to_string(),
            min_length: 10,
            actual_length: 3,
        }
        .into();
        assert_eq!(short.code, "too_small");
        assert!(short.message.contains("10"));

        let long: ValidationIssue = ValidationError::TooLong {
            field: "name".to_string(),
            max_length: 100,
            actual_length: 101,
        }
        .into();
        assert_eq!(long.code, "too_big");
    }

    #[test]
    fn test_issue_serialization() {
        let issue: ValidationIssue = ValidationError::InvalidFormat {
            field: "email".to_string(),
            expected: "email address".to_string(),
        }
        .into();

        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["code"], "invalid_string");
        assert_eq!(json["path"][0], "email");
        assert!(json["message"].as_str().unwrap().contains("email address"));
    }

    #[test]
    fn test_body_issue_has_empty_path() {
        let issue = ValidationIssue::body("invalid_type", "Expected object, received array");
        assert!(issue.path.is_empty());
    }
}
