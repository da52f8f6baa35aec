//! Structural validation of raw request payloads.
//!
//! The transport hands over an untyped JSON payload; [`validate`] checks that
//! every required field is present and holds a non-blank string before any
//! domain parsing happens. Unknown fields are ignored.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::error::DomainError;

/// An untyped key-value request payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Parses a request body. Anything that is not a JSON object yields an
    /// empty payload, which then fails validation field by field.
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .map(Self::from)
            .unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldProblem {
    Missing,
    Blank,
    NotAString,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub problem: FieldProblem,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, problem: FieldProblem) -> Self {
        Self {
            field: field.into(),
            problem,
        }
    }
}

/// The fields of a payload that are missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing or invalid fields: {}", describe(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }
}

impl From<DomainError> for ValidationError {
    fn from(error: DomainError) -> Self {
        let problem = match error {
            DomainError::Blank(_) => FieldProblem::Blank,
            DomainError::TooLong { .. } | DomainError::InvalidEmail => FieldProblem::Invalid,
        };
        Self::new(vec![FieldIssue::new(error.field(), problem)])
    }
}

fn describe(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks that every field in `required` is a non-blank string.
///
/// On success the values come back in the order they were requested. On
/// failure every offending field is reported, in the same order.
pub fn validate<'a, const N: usize>(
    payload: &'a Payload,
    required: [&str; N],
) -> Result<[&'a str; N], ValidationError> {
    let mut values = [""; N];
    let mut issues = Vec::new();

    for (slot, field) in values.iter_mut().zip(required) {
        match payload.get(field) {
            None | Some(Value::Null) => issues.push(FieldIssue::new(field, FieldProblem::Missing)),
            Some(Value::String(value)) if value.trim().is_empty() => {
                issues.push(FieldIssue::new(field, FieldProblem::Blank))
            }
            Some(Value::String(value)) => *slot = value.as_str(),
            Some(_) => issues.push(FieldIssue::new(field, FieldProblem::NotAString)),
        }
    }

    if issues.is_empty() {
        Ok(values)
    } else {
        Err(ValidationError::new(issues))
    }
}
