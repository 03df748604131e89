//! Folding user submissions back into the stored flow.
//!
//! Merging is a full replacement of leaf values: every field and criteria the
//! flow owns ends up with exactly what the submission says, and anything the
//! submission leaves out is cleared. The structure of the flow never changes.

use crate::error::FlowError;
use crate::schema::{Flow, Submission};
use crate::store::{FlowRepository, FlowStore};
use ahash::AHashMap;
use tracing::{debug, info};

/// What a merge did to the flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub fields_answered: usize,
    pub fields_cleared: usize,
    pub criteria_selected: usize,
    pub criteria_cleared: usize,
    pub destination_replaced: bool,
}

/// Applies `submission` to `flow` in place.
///
/// Fields are matched by identifier and criteria by category. Submission
/// entries that match nothing in the flow are ignored, and when an entry is
/// repeated only its first occurrence is applied.
pub fn apply_submission(flow: &mut Flow, submission: &Submission) -> MergeSummary {
    let mut summary = MergeSummary::default();

    // repeated entries: the first one counts
    let mut answers = AHashMap::new();
    for f in &submission.survey.fields {
        answers.entry(f.id).or_insert(f.answer.as_deref());
    }
    for field in &mut flow.survey.fields {
        match answers.get(&field.id) {
            Some(answer) => {
                field.answer = answer.unwrap_or_default().to_string();
                summary.fields_answered += 1;
            }
            None => {
                field.answer.clear();
                summary.fields_cleared += 1;
            }
        }
    }

    let mut selections = AHashMap::new();
    for c in &submission.criteria {
        selections
            .entry(c.category.as_str())
            .or_insert(c.selected_value.as_ref());
    }
    for criteria in &mut flow.criteria {
        match selections.get(criteria.category.as_str()) {
            Some(selected) => {
                criteria.selected_value = selected.cloned();
                summary.criteria_selected += 1;
            }
            None => {
                criteria.selected_value = None;
                summary.criteria_cleared += 1;
            }
        }
    }

    if let Some(destination) = &submission.destination {
        flow.destination.email_addresses = destination.email_addresses.clone();
        flow.destination.zip = destination.zip.clone();
        summary.destination_replaced = true;
    }

    summary
}

/// Merges `submission` into the stored instance it addresses and persists
/// the result.
///
/// Returns the stored post-merge flow, not the submission.
pub fn merge_submission<S: FlowStore>(
    repository: &mut FlowRepository<S>,
    submission: &Submission,
) -> Result<Flow, FlowError> {
    let mut flow = repository.find_instance(submission.id)?;
    let summary = apply_submission(&mut flow, submission);
    debug!(flow = %flow.id, ?summary, "applied submission");

    repository.update(flow.clone())?;
    info!(flow = %flow.id, "merged submission");
    Ok(flow)
}
