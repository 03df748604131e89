//! Entity types for flows, templates, and the submissions that update them.
//!
//! A [`Flow`] is a single aggregate: it owns its survey, criteria, forms and
//! destination, and is always loaded and stored as a whole.

pub mod criteria;
pub mod flow;
pub mod form;
pub mod submission;
pub mod survey;

pub use criteria::*;
pub use flow::*;
pub use form::*;
pub use submission::*;
pub use survey::*;
