//! Tests for the repository facade and the in-memory store.
mod common;
use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use common::*;
use formflow::prelude::*;
use formflow::seed::{HELP_DESK_TEMPLATE_ID, HIRE_TEMPLATE_ID, TAXES_TEMPLATE_ID};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn test_instances_and_templates_are_listed_apart() {
    let mut engine = seeded_engine();
    let flow = engine.instantiate(HIRE_TEMPLATE_ID).unwrap();

    let templates: HashSet<Uuid> = engine
        .list_templates()
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    let instances: Vec<Uuid> = engine
        .list_instances()
        .unwrap()
        .into_iter()
        .map(|f| f.id)
        .collect();

    assert_eq!(
        templates,
        HashSet::from([HELP_DESK_TEMPLATE_ID, HIRE_TEMPLATE_ID, TAXES_TEMPLATE_ID])
    );
    assert_eq!(instances, vec![flow.id]);
}

#[test]
fn test_instances_are_listed_newest_first() {
    let mut repository = FlowRepository::new(InMemoryFlowStore::new());
    let now = Utc::now();
    let mut ids = Vec::new();
    for age_in_days in [3, 1, 2] {
        let mut flow = gated_flow(None, "");
        flow.survey.time_created = now - Duration::days(age_in_days);
        ids.push((age_in_days, flow.id));
        repository.insert(flow).unwrap();
    }
    ids.sort_by_key(|(age, _)| *age);

    let listed: Vec<Uuid> = repository
        .list_instances()
        .unwrap()
        .into_iter()
        .map(|f| f.id)
        .collect();
    assert_eq!(listed, ids.into_iter().map(|(_, id)| id).collect::<Vec<_>>());
}

#[test]
fn test_find_instance_ignores_templates() {
    let engine = seeded_engine();
    let err = engine.find_instance(TAXES_TEMPLATE_ID).unwrap_err();
    assert_matches!(err, FlowError::NotFound { matches: 0, .. });
}

#[test]
fn test_duplicate_ids_are_surfaced() {
    let flow = gated_flow(None, "");
    let mut store = InMemoryFlowStore::new();
    store.push_unchecked(flow.clone());
    store.push_unchecked(flow.clone());
    let repository = FlowRepository::new(store);

    let err = repository.find_instance(flow.id).unwrap_err();
    assert_matches!(err, FlowError::NotFound { matches: 2, .. });
    assert!(err.to_string().contains("found 2"));
}

#[test]
fn test_insert_rejects_taken_ids() {
    let flow = gated_flow(None, "");
    let mut repository = FlowRepository::new(InMemoryFlowStore::new());
    repository.insert(flow.clone()).unwrap();

    let err = repository.insert(flow).unwrap_err();
    assert_matches!(err, FlowError::Store(StoreError::DuplicateId(_)));
}

#[test]
fn test_delete_removes_the_whole_flow() {
    let mut engine = seeded_engine();
    let keep = engine.instantiate(TAXES_TEMPLATE_ID).unwrap();
    let gone = engine.instantiate(TAXES_TEMPLATE_ID).unwrap();

    engine.delete(gone.id).unwrap();

    assert_matches!(
        engine.find_instance(gone.id),
        Err(FlowError::NotFound { matches: 0, .. })
    );
    assert_eq!(engine.find_instance(keep.id).unwrap(), keep);
    assert_eq!(engine.list_templates().unwrap().len(), 3);
    assert_eq!(engine.repository().store().all().unwrap().len(), 4);
}

#[test]
fn test_delete_unknown_or_template_is_not_found() {
    let mut engine = seeded_engine();
    assert_matches!(
        engine.delete(Uuid::new_v4()),
        Err(FlowError::NotFound { .. })
    );
    assert_matches!(
        engine.delete(TAXES_TEMPLATE_ID),
        Err(FlowError::NotFound { .. })
    );
    assert_eq!(engine.list_templates().unwrap().len(), 3);
}

#[test]
fn test_bootstrap_is_idempotent() {
    let mut engine = seeded_engine();
    assert_eq!(engine.bootstrap_templates().unwrap(), 0);
    assert_eq!(engine.list_templates().unwrap().len(), 3);
}

#[test]
fn test_snapshot_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("flows.bin");

    let mut engine = seeded_engine();
    let flow = engine.instantiate(TAXES_TEMPLATE_ID).unwrap();
    let submission = Submission::from_flow(&flow)
        .with_answer_for(&flow, "firstname", "Jane")
        .with_selection("6a", Some("yes"))
        .with_destination(vec!["jane@example.com".to_string()], "98101");
    let merged = engine.merge_submission(&submission).unwrap();
    engine.into_store().save(&path).unwrap();

    let restored = FlowEngine::builder(InMemoryFlowStore::from_file(&path).unwrap()).build();
    assert_eq!(restored.find_instance(flow.id).unwrap(), merged);
    assert_eq!(restored.list_templates().unwrap().len(), 3);
}

#[test]
fn test_missing_snapshot_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = InMemoryFlowStore::from_file(dir.path().join("absent.bin")).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_corrupt_snapshot_is_reported() {
    let err = InMemoryFlowStore::from_bytes(&[0xff, 0xff, 0xff]).unwrap_err();
    assert_matches!(err, StoreError::Snapshot(_));
}
