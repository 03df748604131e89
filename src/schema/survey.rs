use super::Filter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// The open-ended question set owned by a flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default = "Utc::now", alias = "timeCreated")]
    pub time_created: DateTime<Utc>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Survey {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            id: Uuid::new_v4(),
            time_created: Utc::now(),
            fields,
        }
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }
}

/// The data kind a field collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FieldKind {
    #[default]
    String,
}

/// A single answer slot in a survey, addressed across the flow by `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(alias = "name")]
    pub key: String,
    #[serde(default)]
    pub prompt: String,
    /// Empty until answered. A `null` answer reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
    /// Relevance gate for front ends. The resolver only honors filters on assignments.
    #[serde(default)]
    pub filter: Option<Filter>,
}

impl Field {
    pub fn new(kind: FieldKind, key: &str, prompt: &str, filter: Option<Filter>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            key: key.to_string(),
            prompt: prompt.to_string(),
            answer: String::new(),
            filter,
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
