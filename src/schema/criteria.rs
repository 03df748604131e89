use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single-select question, addressed across the flow by `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub prompt: String,
    pub category: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default, alias = "selectedValue")]
    pub selected_value: Option<String>,
}

impl Criteria {
    pub fn new(category: &str, prompt: &str, answers: Vec<Answer>) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.to_string(),
            category: category.to_string(),
            answers,
            selected_value: None,
        }
    }

    /// The common yes/no answer pair.
    pub fn yes_no(category: &str, prompt: &str) -> Self {
        Self::new(
            category,
            prompt,
            vec![Answer::new("Yes", "yes"), Answer::new("No", "no")],
        )
    }
}

/// A label/value choice offered by a criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub label: String,
    pub value: String,
}

impl Answer {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}
