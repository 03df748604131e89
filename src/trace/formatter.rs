use crate::resolver::AssignmentOutcome;
use crate::schema::Filter;
use itertools::Itertools;

/// Formats resolver outcomes into human-readable lines.
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format one outcome, e.g.
    /// `f1098c: topmostSubform[0].CopyA[0].f1_16[0] <- $barter (was "150") [6a == "yes"]`.
    pub fn format_outcome(outcome: &AssignmentOutcome) -> String {
        match outcome {
            AssignmentOutcome::Emitted {
                resolved,
                input_key,
                found,
                filter,
            } => {
                let source = if *found {
                    format!("${} (was {})", input_key, Self::format_value(&resolved.value))
                } else {
                    format!("${} (absent)", input_key)
                };
                let mut line = format!(
                    "{}: {} <- {}",
                    resolved.form_name, resolved.output_field, source
                );
                if let Some(filter) = filter {
                    line.push_str(&format!(" [{}]", Self::format_filter(filter)));
                }
                line
            }
            AssignmentOutcome::Suppressed {
                form_name,
                output_field,
                filter,
                found,
                ..
            } => {
                let was = found
                    .as_deref()
                    .map_or_else(|| "absent".to_string(), Self::format_value);
                format!(
                    "{}: {} suppressed [{}, was {}]",
                    form_name,
                    output_field,
                    Self::format_filter(filter),
                    was
                )
            }
        }
    }

    /// Format every outcome, one per line.
    pub fn format_outcomes(outcomes: &[AssignmentOutcome]) -> String {
        outcomes
            .iter()
            .map(Self::format_outcome)
            .join("\n")
    }

    fn format_filter(filter: &Filter) -> String {
        format!("{} == {}", filter.name, Self::format_value(&filter.value))
    }

    fn format_value(value: &str) -> String {
        format!("{:?}", value)
    }
}
