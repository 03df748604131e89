//! # Formflow - Template Instantiation and Answer Resolution
//!
//! **Formflow** manages user-facing flows: independent copies of reusable
//! templates that collect survey answers, single-select criteria and delivery
//! metadata, and resolve them into the values a document generator writes into
//! each output form.
//!
//! ## Core Workflow
//!
//! 1.  **Instantiate**: Clone a template into a fresh flow with [`FlowEngine::instantiate`].
//!     Assets belonging to the template are copied by an [`AssetProvisioner`](provision::AssetProvisioner).
//! 2.  **Merge**: Fold each round of user answers back into the stored flow with
//!     [`FlowEngine::merge_submission`]. A submission always carries the full answer set.
//! 3.  **Resolve**: Evaluate every form's assignments and filters against the
//!     merged answers with [`Resolver::resolve`], yielding ordered
//!     `(form, output field, value)` triples.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formflow::prelude::*;
//! use formflow::seed::TAXES_TEMPLATE_ID;
//!
//! fn main() -> Result<()> {
//!     let mut engine = FlowEngine::builder(InMemoryFlowStore::new()).build();
//!     engine.bootstrap_templates()?;
//!
//!     let flow = engine.instantiate(TAXES_TEMPLATE_ID)?;
//!     let submission = Submission::from_flow(&flow)
//!         .with_answer_for(&flow, "firstname", "Jane")
//!         .with_answer_for(&flow, "barter", "150")
//!         .with_selection("6a", Some("yes"));
//!     engine.merge_submission(&submission)?;
//!
//!     for assignment in engine.resolve(flow.id)? {
//!         println!(
//!             "{} / {} = {:?}",
//!             assignment.form_name, assignment.output_field, assignment.value
//!         );
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod instantiate;
pub mod merge;
pub mod prelude;
pub mod provision;
pub mod resolver;
pub mod schema;
pub mod seed;
pub mod store;
pub mod trace;

pub use engine::{FlowEngine, FlowEngineBuilder};
pub use resolver::Resolver;
