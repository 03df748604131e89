//! Common test utilities for building flows and submissions.
use formflow::prelude::*;
use uuid::Uuid;

#[allow(dead_code)]
pub const GATED_FIELD: &str = "topmostSubform[0].CopyA[0].f1_16[0]";
#[allow(dead_code)]
pub const NAME_FIELD: &str = "topmostSubform[0].CopyA[0].f1_1[0]";

/// An engine over an empty in-memory store with the sample templates seeded.
#[allow(dead_code)]
pub fn seeded_engine() -> FlowEngine<InMemoryFlowStore> {
    let mut engine = FlowEngine::builder(InMemoryFlowStore::new()).build();
    engine
        .bootstrap_templates()
        .expect("seeding an empty store should succeed");
    engine
}

/// A small instance with one gated and one unconditional assignment.
///
/// Logic: `barter -> f1_16` when `6a == "yes"`, `firstname -> f1_1` always.
#[allow(dead_code)]
pub fn gated_flow(selected: Option<&str>, barter: &str) -> Flow {
    let mut criteria = Criteria::yes_no("6a", "Goods or services provided?");
    criteria.selected_value = selected.map(str::to_string);

    let mut barter_field = Field::new(FieldKind::String, "barter", "Value", None);
    barter_field.answer = barter.to_string();

    Flow {
        id: Uuid::new_v4(),
        name: "Gated".to_string(),
        description: String::new(),
        thumbnail: String::new(),
        is_template: false,
        survey: Survey::new(vec![
            Field::new(FieldKind::String, "firstname", "First name", None),
            barter_field,
        ]),
        forms: vec![Form {
            id: Uuid::new_v4(),
            name: "f1098c".to_string(),
            file_name: "f1098c.pdf".to_string(),
            kind: "pdf".to_string(),
            assignments: vec![
                Assignment::new("firstname", NAME_FIELD),
                Assignment::new("barter", GATED_FIELD).when(Filter::new("6a", "yes")),
            ],
        }],
        criteria: vec![criteria],
        destination: Destination::new(),
    }
}

/// Turns an instance into a template of the same shape.
#[allow(dead_code)]
pub fn as_template(mut flow: Flow) -> Flow {
    flow.is_template = true;
    flow
}

/// Every identifier owned by a flow, including its own.
#[allow(dead_code)]
pub fn all_ids(flow: &Flow) -> Vec<Uuid> {
    let mut ids = vec![flow.id, flow.survey.id, flow.destination.id];
    ids.extend(flow.survey.fields.iter().map(|f| f.id));
    for criteria in &flow.criteria {
        ids.push(criteria.id);
        ids.extend(criteria.answers.iter().map(|a| a.id));
    }
    for form in &flow.forms {
        ids.push(form.id);
        ids.extend(form.assignments.iter().map(|a| a.id));
    }
    ids
}

#[allow(dead_code)]
pub fn find<'a>(resolved: &'a [ResolvedAssignment], output_field: &str) -> Option<&'a ResolvedAssignment> {
    resolved.iter().find(|r| r.output_field == output_field)
}
