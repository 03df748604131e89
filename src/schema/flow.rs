use super::{Criteria, Field, Form, Survey};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user instance of a template, or the template itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "thumbnailImage")]
    pub thumbnail: String,
    #[serde(default, alias = "isATemplate", alias = "isTemplate")]
    pub is_template: bool,
    #[serde(alias = "inputSurvey")]
    pub survey: Survey,
    #[serde(default)]
    pub forms: Vec<Form>,
    #[serde(default)]
    pub criteria: Vec<Criteria>,
    #[serde(default)]
    pub destination: Destination,
}

impl Flow {
    /// Looks up a survey field by its machine key.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.survey.fields.iter().find(|f| f.key == key)
    }

    /// Looks up a criteria by its category.
    pub fn criteria_by_category(&self, category: &str) -> Option<&Criteria> {
        self.criteria.iter().find(|c| c.category == category)
    }

    pub fn criteria_by_category_mut(&mut self, category: &str) -> Option<&mut Criteria> {
        self.criteria.iter_mut().find(|c| c.category == category)
    }

    /// Looks up a form by name.
    pub fn form(&self, name: &str) -> Option<&Form> {
        self.forms.iter().find(|f| f.name == name)
    }
}

/// Delivery metadata for a flow's generated documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, alias = "emailAddresses")]
    pub email_addresses: Vec<String>,
    #[serde(default)]
    pub zip: String,
}

impl Destination {
    /// An empty destination with a fresh identifier.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            email_addresses: Vec::new(),
            zip: String::new(),
        }
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::new()
    }
}
