use crate::schema::Filter;
use serde::{Deserialize, Serialize};

/// One value destined for one output field of one form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedAssignment {
    pub form_name: String,
    pub output_field: String,
    pub value: String,
}

impl ResolvedAssignment {
    pub fn new(form_name: &str, output_field: &str, value: &str) -> Self {
        Self {
            form_name: form_name.to_string(),
            output_field: output_field.to_string(),
            value: value.to_string(),
        }
    }
}

/// How a single assignment was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// The assignment produced output. `found` is false when the input key
    /// had no value and the empty string was emitted instead.
    Emitted {
        resolved: ResolvedAssignment,
        input_key: String,
        found: bool,
        filter: Option<Filter>,
    },
    /// The assignment's filter did not hold, so it produced nothing.
    Suppressed {
        form_name: String,
        output_field: String,
        input_key: String,
        filter: Filter,
        /// The value the filter's reference held, if any.
        found: Option<String>,
    },
}

impl AssignmentOutcome {
    pub fn is_emitted(&self) -> bool {
        matches!(self, AssignmentOutcome::Emitted { .. })
    }

    pub fn resolved(&self) -> Option<&ResolvedAssignment> {
        match self {
            AssignmentOutcome::Emitted { resolved, .. } => Some(resolved),
            AssignmentOutcome::Suppressed { .. } => None,
        }
    }

    pub fn into_resolved(self) -> Option<ResolvedAssignment> {
        match self {
            AssignmentOutcome::Emitted { resolved, .. } => Some(resolved),
            AssignmentOutcome::Suppressed { .. } => None,
        }
    }
}

/// The final values of one form, after later assignments overwrote earlier
/// ones targeting the same output field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub form_name: String,
    /// `(output field, value)` pairs in order of first assignment.
    pub values: Vec<(String, String)>,
}

impl FormValues {
    pub fn get(&self, output_field: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(code, _)| code == output_field)
            .map(|(_, value)| value.as_str())
    }
}
