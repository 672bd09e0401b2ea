use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    InvalidJson,
    InvalidType,
    InvalidEnumValue,
    TooSmall,
    TooBig,
}

/// One itemized validation failure, e.g.
/// `{"code":"invalid_type","path":["title"],"message":"Required","expected":"string","received":"undefined"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Violation {
    pub code: ViolationCode,
    /// Field path, empty for the body itself.
    pub path: Vec<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Violation {
    fn new(code: ViolationCode, field: Option<&str>, message: String) -> Self {
        Self {
            code,
            path: field.map(|f| vec![f.to_string()]).unwrap_or_default(),
            message,
            expected: None,
            received: None,
            options: Vec::new(),
        }
    }

    pub fn required(field: &str, expected: &str) -> Self {
        Self {
            expected: Some(expected.to_string()),
            received: Some(String::from("undefined")),
            ..Self::new(ViolationCode::InvalidType, Some(field), String::from("Required"))
        }
    }

    pub fn invalid_type(field: Option<&str>, expected: &str, received: &str) -> Self {
        Self {
            expected: Some(expected.to_string()),
            received: Some(received.to_string()),
            ..Self::new(
                ViolationCode::InvalidType,
                field,
                format!("Expected {expected}, received {received}"),
            )
        }
    }

    pub fn invalid_enum_value(field: &str, options: &[&str], received: &str) -> Self {
        let quoted: Vec<String> = options.iter().map(|o| format!("'{o}'")).collect();
        Self {
            received: Some(received.to_string()),
            options: options.iter().map(|o| o.to_string()).collect(),
            ..Self::new(
                ViolationCode::InvalidEnumValue,
                Some(field),
                format!(
                    "Invalid enum value. Expected {}, received '{received}'",
                    quoted.join(" | ")
                ),
            )
        }
    }

    pub fn too_small(field: &str, min: i64) -> Self {
        Self::new(
            ViolationCode::TooSmall,
            Some(field),
            format!("Number must be greater than or equal to {min}"),
        )
    }

    pub fn too_big(field: &str, max: i64) -> Self {
        Self::new(
            ViolationCode::TooBig,
            Some(field),
            format!("Number must be less than or equal to {max}"),
        )
    }

    pub fn invalid_json<S: Into<String>>(message: S) -> Self {
        Self::new(ViolationCode::InvalidJson, None, message.into())
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "<body>: {}", self.message)
        } else {
            write!(f, "{}: {}", self.path.join("."), self.message)
        }
    }
}

/// JSON type name as reported in `received`.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(_) => "bigint",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
