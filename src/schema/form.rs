use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One output document definition and the assignments that fill it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default, alias = "fileName")]
    pub file_name: String,
    /// Document format tag, e.g. `"pdf"` or `"doc"`.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

/// Maps an input key (field machine key or criteria category) onto an output field code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(alias = "inputField")]
    pub input_key: String,
    #[serde(alias = "outputField")]
    pub output_field: String,
    #[serde(default)]
    pub filter: Option<Filter>,
}

impl Assignment {
    pub fn new(input_key: &str, output_field: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            input_key: input_key.to_string(),
            output_field: output_field.to_string(),
            filter: None,
        }
    }

    pub fn when(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// Holds when the value behind `name` equals `value` exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    pub name: String,
    pub value: String,
}

impl Filter {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
