//! Cloning templates into fresh, independently owned flow instances.

use crate::error::FlowError;
use crate::provision::AssetProvisioner;
use crate::schema::{Answer, Assignment, Criteria, Destination, Field, Flow, Form, Survey};
use crate::store::{FlowRepository, FlowStore};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

impl Flow {
    /// Builds a new instance from this flow.
    ///
    /// Every owned entity gets a fresh identifier. Keys, categories, prompts,
    /// filters and assignments are copied verbatim, so key-based references
    /// keep working in the copy. Answers, selections and the destination start
    /// out empty. The source is left untouched.
    pub fn instantiate(&self) -> Flow {
        Flow {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            description: self.description.clone(),
            thumbnail: self.thumbnail.clone(),
            is_template: false,
            survey: Survey {
                id: Uuid::new_v4(),
                time_created: Utc::now(),
                fields: self.survey.fields.iter().map(fresh_field).collect(),
            },
            forms: self.forms.iter().map(fresh_form).collect(),
            criteria: self.criteria.iter().map(fresh_criteria).collect(),
            destination: Destination::new(),
        }
    }
}

fn fresh_field(field: &Field) -> Field {
    Field {
        id: Uuid::new_v4(),
        answer: String::new(),
        ..field.clone()
    }
}

fn fresh_criteria(criteria: &Criteria) -> Criteria {
    Criteria {
        id: Uuid::new_v4(),
        prompt: criteria.prompt.clone(),
        category: criteria.category.clone(),
        answers: criteria
            .answers
            .iter()
            .map(|a| Answer {
                id: Uuid::new_v4(),
                ..a.clone()
            })
            .collect(),
        selected_value: None,
    }
}

fn fresh_form(form: &Form) -> Form {
    Form {
        id: Uuid::new_v4(),
        name: form.name.clone(),
        file_name: form.file_name.clone(),
        kind: form.kind.clone(),
        assignments: form
            .assignments
            .iter()
            .map(|a| Assignment {
                id: Uuid::new_v4(),
                ..a.clone()
            })
            .collect(),
    }
}

/// Instantiates `template`, provisions its assets and persists the new flow.
///
/// Nothing is persisted unless every step succeeds. When provisioning or the
/// insert fails, whatever was provisioned for the new flow is revoked before
/// the error is returned.
pub fn instantiate<S: FlowStore>(
    repository: &mut FlowRepository<S>,
    template: &Flow,
    provisioner: &dyn AssetProvisioner,
) -> Result<Flow, FlowError> {
    if !template.is_template {
        return Err(FlowError::InvalidTemplate { id: template.id });
    }

    let flow = template.instantiate();
    if let Err(e) = provisioner.provision(template.id, flow.id) {
        revoke(provisioner, flow.id);
        return Err(e.into());
    }

    if let Err(e) = repository.insert(flow.clone()) {
        revoke(provisioner, flow.id);
        return Err(e);
    }

    info!(template = %template.id, flow = %flow.id, name = %flow.name, "instantiated template");
    Ok(flow)
}

fn revoke(provisioner: &dyn AssetProvisioner, flow: Uuid) {
    if let Err(e) = provisioner.revoke(flow) {
        warn!(%flow, error = %e, "could not revoke provisioned assets");
    }
}
