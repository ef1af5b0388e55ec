use serde_json::{Map, Value};

use super::{ValidationError, ValidationResult};

/// Validation constants
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MAX_PHONE_DIGITS: usize = 15;
pub const MIN_MESSAGE_LENGTH: usize = 10;
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Human name of a JSON value's type, as reported in `invalid_type` issues
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract a required string field from a JSON object
pub fn required_string(body: &Map<String, Value>, field: &str) -> ValidationResult<String> {
    match body.get(field) {
        None => Err(ValidationError::RequiredField {
            field: field.to_string(),
        }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationError::InvalidType {
            field: field.to_string(),
            expected: "string".to_string(),
            received: json_type_name(other).to_string(),
        }),
    }
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> ValidationResult<()> {
    let length = value.chars().count();

    if length < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min_length: min,
            actual_length: length,
        });
    }

    if length > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max_length: max,
            actual_length: length,
        });
    }

    Ok(())
}

/// Validate contact name
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let trimmed = name.trim();
    check_length("name", trimmed, MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;

    if trimmed.chars().any(|c| c.is_control()) {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            expected: "name without control characters".to_string(),
        });
    }

    Ok(())
}

/// Validate email address shape (`local@domain.tld`)
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let trimmed = email.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "email".to_string(),
        });
    }

    if trimmed.chars().count() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max_length: MAX_EMAIL_LENGTH,
            actual_length: trimmed.chars().count(),
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        expected: "email address".to_string(),
    };

    if trimmed.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }

    Ok(())
}

/// Validate phone number: 10 to 15 digits, common separators allowed
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let trimmed = phone.trim();
    let number = trimmed.strip_prefix('+').unwrap_or(trimmed);

    if number
        .chars()
        .any(|c| !(c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')')))
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            expected: "digits with optional leading + and separators".to_string(),
        });
    }

    let digits = number.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        return Err(ValidationError::TooShort {
            field: "phone".to_string(),
            min_length: MIN_PHONE_DIGITS,
            actual_length: digits,
        });
    }

    if digits > MAX_PHONE_DIGITS {
        return Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max_length: MAX_PHONE_DIGITS,
            actual_length: digits,
        });
    }

    Ok(())
}

/// Validate message body
pub fn validate_message(message: &str) -> ValidationResult<()> {
    check_length(
        "message",
        message.trim(),
        MIN_MESSAGE_LENGTH,
        MAX_MESSAGE_LENGTH,
    )
}
