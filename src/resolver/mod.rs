use crate::schema::Flow;
use ahash::AHashMap;
use tracing::debug;

mod lookup;
mod outcome;

pub use lookup::ValueLookup;
pub use outcome::{AssignmentOutcome, FormValues, ResolvedAssignment};

/// Turns a merged flow into the values each form's output fields receive.
///
/// Resolution is a pure function of the flow. References to keys that do not
/// exist never fail: a filter on an unknown key suppresses its assignment, and
/// an assignment reading an unknown key emits an empty string.
pub struct Resolver;

impl Resolver {
    /// Resolves every emitted assignment, forms in declared order and
    /// assignments in declared order within each form.
    ///
    /// Filtered assignments whose filter does not hold are omitted. Unfiltered
    /// assignments always appear, with an empty value if their input is unset.
    pub fn resolve(flow: &Flow) -> Vec<ResolvedAssignment> {
        Self::explain(flow)
            .into_iter()
            .filter_map(AssignmentOutcome::into_resolved)
            .collect()
    }

    /// Like [`Resolver::resolve`], but reports suppressed assignments too,
    /// along with the values that decided each outcome.
    pub fn explain(flow: &Flow) -> Vec<AssignmentOutcome> {
        let lookup = ValueLookup::from_flow(flow);
        let mut outcomes = Vec::new();

        for form in &flow.forms {
            for assignment in &form.assignments {
                if let Some(filter) = &assignment.filter {
                    if !lookup.satisfies(filter) {
                        outcomes.push(AssignmentOutcome::Suppressed {
                            form_name: form.name.clone(),
                            output_field: assignment.output_field.clone(),
                            input_key: assignment.input_key.clone(),
                            filter: filter.clone(),
                            found: lookup.get(&filter.name).map(str::to_string),
                        });
                        continue;
                    }
                }

                let value = lookup.get(&assignment.input_key);
                outcomes.push(AssignmentOutcome::Emitted {
                    resolved: ResolvedAssignment::new(
                        &form.name,
                        &assignment.output_field,
                        value.unwrap_or_default(),
                    ),
                    input_key: assignment.input_key.clone(),
                    found: value.is_some(),
                    filter: assignment.filter.clone(),
                });
            }
        }

        debug!(
            flow = %flow.id,
            emitted = outcomes.iter().filter(|o| o.is_emitted()).count(),
            total = outcomes.len(),
            "resolved assignments"
        );
        outcomes
    }
}

/// Groups resolved assignments by form name and collapses duplicate output
/// fields, the last assignment winning.
///
/// Forms keep the order in which their name first appears, as do output
/// fields within a form. Forms sharing a name are merged into one group even
/// when they are not adjacent.
pub fn collapse_by_form(resolved: &[ResolvedAssignment]) -> Vec<FormValues> {
    let mut forms: Vec<FormValues> = Vec::new();
    let mut form_positions: AHashMap<&str, usize> = AHashMap::new();
    let mut field_positions: Vec<AHashMap<&str, usize>> = Vec::new();

    for assignment in resolved {
        let form_index = *form_positions
            .entry(assignment.form_name.as_str())
            .or_insert_with(|| {
                forms.push(FormValues {
                    form_name: assignment.form_name.clone(),
                    values: Vec::new(),
                });
                field_positions.push(AHashMap::new());
                forms.len() - 1
            });

        let values = &mut forms[form_index].values;
        match field_positions[form_index].get(assignment.output_field.as_str()) {
            Some(&index) => values[index].1 = assignment.value.clone(),
            None => {
                field_positions[form_index].insert(assignment.output_field.as_str(), values.len());
                values.push((assignment.output_field.clone(), assignment.value.clone()));
            }
        }
    }
    forms
}
