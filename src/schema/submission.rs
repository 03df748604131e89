use super::Flow;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's answers for one flow, as posted back by a front end.
///
/// Submissions carry the complete current answer set: a field or criteria
/// missing from here is treated as cleared when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    #[serde(default, alias = "inputSurvey")]
    pub survey: SubmittedSurvey,
    #[serde(default)]
    pub criteria: Vec<SubmittedCriteria>,
    #[serde(default)]
    pub destination: Option<SubmittedDestination>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedSurvey {
    #[serde(default)]
    pub fields: Vec<SubmittedField>,
}

/// An answer addressed by field identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedField {
    pub id: Uuid,
    #[serde(default)]
    pub answer: Option<String>,
}

/// A selection addressed by criteria category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedCriteria {
    pub category: String,
    #[serde(default, alias = "selectedValue")]
    pub selected_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedDestination {
    #[serde(default, alias = "emailAddresses")]
    pub email_addresses: Vec<String>,
    #[serde(default)]
    pub zip: String,
}

impl Submission {
    /// An empty submission for `id`. Merging it clears every answer.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Captures the current answers of `flow`, so callers can edit a few
    /// values without clearing the rest.
    pub fn from_flow(flow: &Flow) -> Self {
        Self {
            id: flow.id,
            survey: SubmittedSurvey {
                fields: flow
                    .survey
                    .fields
                    .iter()
                    .map(|f| SubmittedField {
                        id: f.id,
                        answer: Some(f.answer.clone()),
                    })
                    .collect(),
            },
            criteria: flow
                .criteria
                .iter()
                .map(|c| SubmittedCriteria {
                    category: c.category.clone(),
                    selected_value: c.selected_value.clone(),
                })
                .collect(),
            destination: None,
        }
    }

    /// Sets the answer for `field_id`, replacing any earlier entry.
    pub fn with_answer(mut self, field_id: Uuid, answer: &str) -> Self {
        self.survey.fields.retain(|f| f.id != field_id);
        self.survey.fields.push(SubmittedField {
            id: field_id,
            answer: Some(answer.to_string()),
        });
        self
    }

    /// Sets the answer for the field with machine key `key` in `flow`.
    /// Unknown keys leave the submission unchanged.
    pub fn with_answer_for(self, flow: &Flow, key: &str, answer: &str) -> Self {
        match flow.field(key) {
            Some(field) => self.with_answer(field.id, answer),
            None => self,
        }
    }

    /// Drops the entry for `field_id`, which clears that answer on merge.
    pub fn without_answer(mut self, field_id: Uuid) -> Self {
        self.survey.fields.retain(|f| f.id != field_id);
        self
    }

    /// Selects `value` for `category`, replacing any earlier entry.
    pub fn with_selection(mut self, category: &str, value: Option<&str>) -> Self {
        self.criteria.retain(|c| c.category != category);
        self.criteria.push(SubmittedCriteria {
            category: category.to_string(),
            selected_value: value.map(str::to_string),
        });
        self
    }

    pub fn with_destination(mut self, email_addresses: Vec<String>, zip: &str) -> Self {
        self.destination = Some(SubmittedDestination {
            email_addresses,
            zip: zip.to_string(),
        });
        self
    }
}
