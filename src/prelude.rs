//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the formflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use formflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let store = InMemoryFlowStore::from_file("flows.bin")?;
//! let engine = FlowEngine::builder(store).build();
//!
//! for flow in engine.list_instances()? {
//!     let resolved = Resolver::resolve(&flow);
//!     println!("{}: {} assignments", flow.name, resolved.len());
//! }
//! # Ok(())
//! # }
//! ```

// Engine and operations
pub use crate::engine::{FlowEngine, FlowEngineBuilder};
pub use crate::merge::{MergeSummary, apply_submission};
pub use crate::resolver::{
    AssignmentOutcome, FormValues, ResolvedAssignment, Resolver, collapse_by_form,
};

// Schema
pub use crate::schema::{
    Answer, Assignment, Criteria, Destination, Field, FieldKind, Filter, Flow, Form, Submission,
    Survey,
};

// Persistence and provisioning
pub use crate::provision::{AssetProvisioner, DirectoryProvisioner, NullProvisioner};
pub use crate::store::{FlowRepository, FlowStore, InMemoryFlowStore};

// Error types
pub use crate::error::{FlowError, ProvisioningError, StoreError};

// Trace formatting
pub use crate::trace::TraceFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
