//! Unit tests for core formflow types.
use formflow::prelude::*;
use formflow::seed::{TAXES_TEMPLATE_ID, sample_templates};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn test_error_display() {
    let id = Uuid::nil();
    let err = FlowError::NotFound { id, matches: 0 };
    assert!(err.to_string().contains("00000000-0000-0000-0000-000000000000"));
    assert!(err.to_string().contains("found 0"));

    let err = FlowError::InvalidTemplate { id };
    assert!(err.to_string().contains("not a template"));

    let err: FlowError = ProvisioningError::Rejected("quota exceeded".to_string()).into();
    assert!(err.to_string().contains("quota exceeded"));

    let err: FlowError = StoreError::Missing(id).into();
    assert!(err.to_string().contains("No stored flow"));
}

#[test]
fn test_trace_formatter_emitted_without_value() {
    let outcome = AssignmentOutcome::Emitted {
        resolved: ResolvedAssignment::new("f1040ez", "f1_1", ""),
        input_key: "filerFirstName".to_string(),
        found: false,
        filter: None,
    };
    assert_eq!(
        TraceFormatter::format_outcome(&outcome),
        "f1040ez: f1_1 <- $filerFirstName (absent)"
    );
}

#[test]
fn test_trace_formatter_suppressed() {
    let outcome = AssignmentOutcome::Suppressed {
        form_name: "f1098c".to_string(),
        output_field: "f1_16".to_string(),
        input_key: "barter".to_string(),
        filter: Filter::new("6a", "yes"),
        found: None,
    };
    assert_eq!(
        TraceFormatter::format_outcome(&outcome),
        r#"f1098c: f1_16 suppressed [6a == "yes", was absent]"#
    );
}

#[test]
fn test_sample_templates_keep_keys_unique() {
    for template in sample_templates() {
        assert!(template.is_template);
        let keys: HashSet<&str> = template.survey.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys.len(), template.survey.fields.len(), "{}", template.name);
        let categories: HashSet<&str> =
            template.criteria.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(categories.len(), template.criteria.len(), "{}", template.name);
    }
}

#[test]
fn test_template_json_roundtrip_keeps_references() {
    let taxes = sample_templates()
        .into_iter()
        .find(|t| t.id == TAXES_TEMPLATE_ID)
        .unwrap();
    let json = serde_json::to_string(&taxes).unwrap();
    let parsed: Flow = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, taxes);
}

#[test]
fn test_flow_parses_with_generated_sub_ids() {
    let json = r#"{
        "id": "5710c736-f5b9-475f-9ef5-76529ea33333",
        "name": "Minimal",
        "isATemplate": true,
        "inputSurvey": { "fields": [{ "name": "firstname", "prompt": "First name" }] },
        "forms": [{ "name": "f1", "assignments": [{ "inputField": "firstname", "outputField": "a" }] }]
    }"#;

    let flow: Flow = serde_json::from_str(json).unwrap();
    assert!(flow.is_template);
    assert_eq!(flow.survey.fields[0].key, "firstname");
    assert_eq!(flow.survey.fields[0].answer, "");
    assert_eq!(flow.forms[0].assignments[0].input_key, "firstname");
    assert!(flow.criteria.is_empty());
}

#[test]
fn test_null_field_answer_parses_as_empty() {
    let json = r#"{
        "id": "5710c736-f5b9-475f-9ef5-76529ea44444",
        "name": "Nulls",
        "inputSurvey": { "fields": [
            { "name": "firstname", "answer": null },
            { "name": "lastname", "answer": "Doe" }
        ] }
    }"#;

    let flow: Flow = serde_json::from_str(json).unwrap();
    assert_eq!(flow.survey.fields[0].answer, "");
    assert_eq!(flow.survey.fields[1].answer, "Doe");
}
