use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    json_type_name, required_string, validate_email, validate_message, validate_name,
    validate_phone, ValidationIssue, ValidationResult,
};

/// A validated contact-form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Response body for an accepted submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactForm {
    /// Parse and validate a raw JSON request body.
    ///
    /// Every field is checked; on failure all issues are returned together.
    /// String values are stored trimmed.
    pub fn parse(body: &Value) -> Result<Self, Vec<ValidationIssue>> {
        let Some(object) = body.as_object() else {
            return Err(vec![ValidationIssue::body(
                "invalid_type",
                format!("Expected object, received {}", json_type_name(body)),
            )]);
        };

        let mut issues = Vec::new();
        let mut field = |name: &str, check: fn(&str) -> ValidationResult<()>| {
            match required_string(object, name).and_then(|value| {
                check(&value)?;
                Ok(value.trim().to_string())
            }) {
                Ok(value) => value,
                Err(err) => {
                    issues.push(err.into());
                    String::new()
                }
            }
        };

        let form = ContactForm {
            name: field("name", validate_name),
            email: field("email", validate_email),
            phone: field("phone", validate_phone),
            message: field("message", validate_message),
        };

        if issues.is_empty() {
            Ok(form)
        } else {
            Err(issues)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "  Manaswini  ",
            "email": "manaswini@example.com",
            "phone": "+91 98765 43210",
            "message": "Interested in the Kashi Gaya Allahabad package for 4 people."
        })
    }

    #[test]
    fn test_parse_valid_body() {
        let form = ContactForm::parse(&valid_body()).unwrap();

        assert_eq!(form.name, "Manaswini");
        assert_eq!(form.email, "manaswini@example.com");
        assert_eq!(form.phone, "+91 98765 43210");
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let mut body = valid_body();
        body["newsletter"] = json!(true);

        assert!(ContactForm::parse(&body).is_ok());
    }

    #[test]
    fn test_parse_missing_field() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("email");

        let issues = ContactForm::parse(&body).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, vec!["email".to_string()]);
        assert_eq!(issues[0].code, "invalid_type");
        assert_eq!(issues[0].message, "Required");
    }

    #[test]
    fn test_parse_collects_all_issues() {
        let body = json!({
            "name": 42,
            "email": "not-an-email",
            "message": "short"
        });

        let issues = ContactForm::parse(&body).unwrap_err();
        let paths: Vec<&str> = issues.iter().map(|i| i.path[0].as_str()).collect();

        assert_eq!(paths, vec!["name", "email", "phone", "message"]);
        assert_eq!(issues[0].message, "Expected string, received number");
        assert_eq!(issues[1].code, "invalid_string");
        assert_eq!(issues[3].code, "too_small");
    }

    #[test]
    fn test_parse_non_object_body() {
        let issues = ContactForm::parse(&json!(["name", "email"])).unwrap_err();

        assert_eq!(issues.len(), 1);
        assert!(issues[0].path.is_empty());
        assert_eq!(issues[0].message, "Expected object, received array");
    }

    #[test]
    fn test_parse_reports_only_failing_fields() {
        let body = json!({
            "name": "X",
            "email": "x@example.com",
            "phone": "123",
            "message": "Looking for a boat booking on the Ganges"
        });

        let issues = ContactForm::parse(&body).unwrap_err();
        let paths: Vec<&str> = issues.iter().map(|issue| issue.path[0].as_str()).collect();
        assert_eq!(paths, vec!["name", "phone"]);
        assert!(issues.iter().all(|issue| issue.code == "too_small"));
    }
}
