use serde_json::{Map, Value};

use super::violation::{Violation, json_type};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// Integer with optional inclusive bounds.
    Integer { min: Option<i64>, max: Option<i64> },
    Boolean,
    /// String restricted to a fixed set of values.
    Enum(&'static [&'static str]),
}

impl FieldKind {
    fn expected(&self) -> &'static str {
        match self {
            Self::String | Self::Enum(_) => "string",
            Self::Integer { .. } => "integer",
            Self::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    String(&'static str),
    Integer(i64),
    Boolean(bool),
}

impl DefaultValue {
    fn to_value(self) -> Value {
        match self {
            Self::String(s) => Value::from(s),
            Self::Integer(i) => Value::from(i),
            Self::Boolean(b) => Value::from(b),
        }
    }
}

/// A single field constraint. Fields are required unless a default is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    name: &'static str,
    kind: FieldKind,
    default: Option<DefaultValue>,
}

impl FieldRule {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            default: None,
        }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer { min: None, max: None })
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub const fn one_of(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::new(name, FieldKind::Enum(values))
    }

    /// Bounds an integer field; no effect on other kinds.
    pub const fn range(self, min: i64, max: i64) -> Self {
        let kind = match self.kind {
            FieldKind::Integer { .. } => FieldKind::Integer {
                min: Some(min),
                max: Some(max),
            },
            other => other,
        };
        Self { kind, ..self }
    }

    pub const fn with_default(self, default: DefaultValue) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Checks one field value, `None` meaning the key is absent.
    pub fn check(&self, value: Option<&Value>) -> Result<Value, Violation> {
        let Some(value) = value else {
            return self
                .default
                .map(DefaultValue::to_value)
                .ok_or_else(|| Violation::required(self.name, self.kind.expected()));
        };

        let mismatch = || {
            Violation::invalid_type(Some(self.name), self.kind.expected(), json_type(value))
        };

        match self.kind {
            FieldKind::String => value.is_string().then(|| value.clone()).ok_or_else(mismatch),
            FieldKind::Boolean => value.is_boolean().then(|| value.clone()).ok_or_else(mismatch),
            FieldKind::Integer { min, max } => {
                let n = value.as_i64().ok_or_else(mismatch)?;
                if let Some(min) = min.filter(|min| n < *min) {
                    return Err(Violation::too_small(self.name, min));
                }
                if let Some(max) = max.filter(|max| n > *max) {
                    return Err(Violation::too_big(self.name, max));
                }
                Ok(Value::from(n))
            }
            FieldKind::Enum(options) => {
                let s = value.as_str().ok_or_else(mismatch)?;
                if options.contains(&s) {
                    Ok(value.clone())
                } else {
                    Err(Violation::invalid_enum_value(self.name, options, s))
                }
            }
        }
    }
}

/// Declarative body schema: an ordered list of field rules.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    name: &'static str,
    fields: &'static [FieldRule],
}

impl Schema {
    pub const fn new(name: &'static str, fields: &'static [FieldRule]) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldRule] {
        self.fields
    }

    /// Validates `input` against every rule and returns a normalized object:
    /// defaults filled in, unknown keys dropped. All violations are collected.
    pub fn validate(&self, input: &Value) -> Result<Value, Vec<Violation>> {
        let Some(object) = input.as_object() else {
            return Err(vec![Violation::invalid_type(
                None,
                "object",
                json_type(input),
            )]);
        };

        let mut output = Map::with_capacity(self.fields.len());
        let mut violations = Vec::new();
        for rule in self.fields {
            match rule.check(object.get(rule.name)) {
                Ok(value) => {
                    output.insert(rule.name.to_string(), value);
                }
                Err(violation) => violations.push(violation),
            }
        }

        if violations.is_empty() {
            Ok(Value::Object(output))
        } else {
            tracing::debug!(
                schema = self.name,
                violations = violations.len(),
                "validation failed"
            );
            Err(violations)
        }
    }
}
