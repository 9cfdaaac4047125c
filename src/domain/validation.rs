use serde::Serialize;
use serde_json::{Map, Value};

/// One broken constraint on one submitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Every constraint a submission broke, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_violated(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid request: ")?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{} {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Reads fields out of an untyped JSON object, collecting a violation for
/// each one that is missing, of the wrong type or rejected by its parser.
pub(crate) struct FormFields<'a> {
    object: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> FormFields<'a> {
    pub fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            violations: Vec::new(),
        }
    }

    pub fn required<T>(
        &mut self,
        field: &'static str,
        parse: impl FnOnce(String) -> Result<T, String>,
    ) -> Option<T> {
        match self.string(field)? {
            Some(value) => self.check(field, parse(value)),
            None => {
                self.reject(field, "is required".into());
                None
            }
        }
    }

    /// `None` when the field failed; `Some(None)` when it was left out.
    pub fn optional<T>(
        &mut self,
        field: &'static str,
        parse: impl FnOnce(String) -> Result<T, String>,
    ) -> Option<Option<T>> {
        match self.string(field)? {
            Some(value) if !value.is_empty() => self.check(field, parse(value)).map(Some),
            _ => Some(None),
        }
    }

    /// Only meaningful once at least one field has come back `None`.
    pub fn into_error(self) -> ValidationError {
        ValidationError {
            violations: self.violations,
        }
    }

    // Outer `None` means a type violation was already recorded.
    fn string(&mut self, field: &'static str) -> Option<Option<String>> {
        match self.object.get(field) {
            None | Some(Value::Null) => Some(None),
            Some(Value::String(s)) => Some(Some(s.clone())),
            Some(_) => {
                self.reject(field, "must be a string".into());
                None
            }
        }
    }

    fn check<T>(&mut self, field: &'static str, outcome: Result<T, String>) -> Option<T> {
        outcome.map_err(|message| self.reject(field, message)).ok()
    }

    fn reject(&mut self, field: &'static str, message: String) {
        self.violations.push(FieldViolation { field, message });
    }
}
