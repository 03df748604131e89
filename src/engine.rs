use crate::error::FlowError;
use crate::instantiate;
use crate::merge;
use crate::provision::{AssetProvisioner, NullProvisioner};
use crate::resolver::{AssignmentOutcome, ResolvedAssignment, Resolver};
use crate::schema::{Flow, Submission};
use crate::seed;
use crate::store::{FlowRepository, FlowStore};
use tracing::info;
use uuid::Uuid;

/// Entry point tying a flow store and an asset provisioner together.
///
/// Every operation runs to completion synchronously. Concurrent writers to the
/// same flow must be serialized by the store; the engine does no locking.
pub struct FlowEngine<S: FlowStore> {
    repository: FlowRepository<S>,
    provisioner: Box<dyn AssetProvisioner>,
}

pub struct FlowEngineBuilder<S: FlowStore> {
    store: S,
    provisioner: Box<dyn AssetProvisioner>,
}

impl<S: FlowStore> FlowEngineBuilder<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            provisioner: Box::new(NullProvisioner),
        }
    }

    pub fn with_provisioner(mut self, provisioner: impl AssetProvisioner + 'static) -> Self {
        self.provisioner = Box::new(provisioner);
        self
    }

    pub fn build(self) -> FlowEngine<S> {
        FlowEngine {
            repository: FlowRepository::new(self.store),
            provisioner: self.provisioner,
        }
    }
}

impl<S: FlowStore> FlowEngine<S> {
    pub fn builder(store: S) -> FlowEngineBuilder<S> {
        FlowEngineBuilder::new(store)
    }

    pub fn repository(&self) -> &FlowRepository<S> {
        &self.repository
    }

    pub fn into_store(self) -> S {
        self.repository.into_inner()
    }

    /// Instantiates the stored template with `template_id`.
    pub fn instantiate(&mut self, template_id: Uuid) -> Result<Flow, FlowError> {
        let template = self.repository.find_template(template_id)?;
        self.instantiate_from(&template)
    }

    /// Instantiates a template that is not necessarily stored.
    pub fn instantiate_from(&mut self, template: &Flow) -> Result<Flow, FlowError> {
        instantiate::instantiate(&mut self.repository, template, self.provisioner.as_ref())
    }

    pub fn merge_submission(&mut self, submission: &Submission) -> Result<Flow, FlowError> {
        merge::merge_submission(&mut self.repository, submission)
    }

    /// Resolves the assignments of the stored instance with `id`.
    pub fn resolve(&self, id: Uuid) -> Result<Vec<ResolvedAssignment>, FlowError> {
        let flow = self.repository.find_instance(id)?;
        Ok(Resolver::resolve(&flow))
    }

    pub fn explain(&self, id: Uuid) -> Result<Vec<AssignmentOutcome>, FlowError> {
        let flow = self.repository.find_instance(id)?;
        Ok(Resolver::explain(&flow))
    }

    pub fn find_instance(&self, id: Uuid) -> Result<Flow, FlowError> {
        self.repository.find_instance(id)
    }

    pub fn list_instances(&self) -> Result<Vec<Flow>, FlowError> {
        self.repository.list_instances()
    }

    pub fn list_templates(&self) -> Result<Vec<Flow>, FlowError> {
        self.repository.list_templates()
    }

    /// Deletes an instance and everything it owns.
    pub fn delete(&mut self, id: Uuid) -> Result<(), FlowError> {
        self.repository.delete(id)?;
        info!(flow = %id, "deleted flow");
        Ok(())
    }

    /// Stores the sample templates that are not stored yet.
    pub fn bootstrap_templates(&mut self) -> Result<usize, FlowError> {
        seed::bootstrap_templates(&mut self.repository)
    }
}
