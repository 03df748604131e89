//! Persistence seam and the repository facade the engine reads and writes through.
//!
//! Stores deal in whole [`Flow`] aggregates: every read returns the full owned
//! graph and every write replaces it. The facade adds the template/instance
//! scoping and the multiplicity check on identifier lookups.

mod memory;

pub use memory::InMemoryFlowStore;

use crate::error::{FlowError, StoreError};
use crate::schema::Flow;
use itertools::Itertools;
use uuid::Uuid;

/// A persistence store for flow aggregates.
pub trait FlowStore {
    /// Returns every stored flow matching `predicate`, in storage order.
    fn find_where(&self, predicate: &dyn Fn(&Flow) -> bool) -> Result<Vec<Flow>, StoreError>;

    fn all(&self) -> Result<Vec<Flow>, StoreError> {
        self.find_where(&|_: &Flow| true)
    }

    /// Stores a new flow. Fails if its identifier is already taken.
    fn insert(&mut self, flow: Flow) -> Result<(), StoreError>;

    /// Replaces the stored flow with the same identifier.
    fn update(&mut self, flow: Flow) -> Result<(), StoreError>;

    /// Removes a flow together with everything it owns.
    fn delete(&mut self, id: Uuid) -> Result<(), StoreError>;
}

/// Read/write operations over a [`FlowStore`], scoped to instances or templates.
pub struct FlowRepository<S: FlowStore> {
    store: S,
}

impl<S: FlowStore> FlowRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Finds the single non-template flow with `id`.
    ///
    /// Zero matches and more than one match are both reported as
    /// [`FlowError::NotFound`].
    pub fn find_instance(&self, id: Uuid) -> Result<Flow, FlowError> {
        self.find_single(id, false)
    }

    /// Finds the single template flow with `id`.
    pub fn find_template(&self, id: Uuid) -> Result<Flow, FlowError> {
        self.find_single(id, true)
    }

    /// All instances, most recently created survey first.
    pub fn list_instances(&self) -> Result<Vec<Flow>, FlowError> {
        let instances = self.store.find_where(&|f: &Flow| !f.is_template)?;
        Ok(instances
            .into_iter()
            .sorted_by(|a, b| b.survey.time_created.cmp(&a.survey.time_created))
            .collect())
    }

    /// All templates, in no particular order.
    pub fn list_templates(&self) -> Result<Vec<Flow>, FlowError> {
        Ok(self.store.find_where(&|f: &Flow| f.is_template)?)
    }

    pub fn insert(&mut self, flow: Flow) -> Result<(), FlowError> {
        Ok(self.store.insert(flow)?)
    }

    pub fn update(&mut self, flow: Flow) -> Result<(), FlowError> {
        Ok(self.store.update(flow)?)
    }

    /// Deletes the instance with `id` and everything it owns.
    pub fn delete(&mut self, id: Uuid) -> Result<(), FlowError> {
        self.find_instance(id)?;
        Ok(self.store.delete(id)?)
    }

    fn find_single(&self, id: Uuid, template: bool) -> Result<Flow, FlowError> {
        let mut matches = self
            .store
            .find_where(&|f: &Flow| f.is_template == template && f.id == id)?;
        if matches.len() != 1 {
            return Err(FlowError::NotFound {
                id,
                matches: matches.len(),
            });
        }
        Ok(matches.remove(0))
    }
}
