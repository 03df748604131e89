use crate::schema::{Filter, Flow};
use ahash::AHashMap;

/// Current values of a flow, keyed by field machine key and criteria category.
///
/// Built fresh for every resolution. When a field key and a criteria category
/// collide, the field's answer wins. Criteria without a selection are absent.
#[derive(Debug, Clone, Default)]
pub struct ValueLookup<'a> {
    values: AHashMap<&'a str, &'a str>,
}

impl<'a> ValueLookup<'a> {
    pub fn from_flow(flow: &'a Flow) -> Self {
        let mut values =
            AHashMap::with_capacity(flow.survey.fields.len() + flow.criteria.len());
        for criteria in &flow.criteria {
            if let Some(selected) = &criteria.selected_value {
                values.insert(criteria.category.as_str(), selected.as_str());
            }
        }
        // Inserted last so fields overwrite colliding categories.
        for field in &flow.survey.fields {
            values.insert(field.key.as_str(), field.answer.as_str());
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.values.get(key).copied()
    }

    /// Whether the filter's reference currently holds exactly the required value.
    /// Unknown references never satisfy a filter.
    pub fn satisfies(&self, filter: &Filter) -> bool {
        self.get(&filter.name) == Some(filter.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
