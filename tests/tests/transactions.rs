//! Transaction coordination over a file-backed store.

use std::sync::{Arc, Mutex};

use mnemo_tests::prelude::*;
use pretty_assertions::assert_eq;

fn coordinator(fixture: &Fixture) -> TransactionCoordinator {
    TransactionCoordinator::new(Arc::new(fixture.store()), EventNotifier::new())
}

// ========== TEST: compensation_restores_file ==========
#[test]
fn test_rollback_restores_saved_snapshot() {
    // GIVEN one stored node
    let fixture = Fixture::new();
    fixture
        .store()
        .save(&Graph::from_parts(vec![Node::new("a", "t")], vec![]))
        .unwrap();
    let mut txn = coordinator(&fixture);

    // WHEN a transaction saves a change, registers the restore, then rolls back
    txn.begin_transaction().unwrap();
    let previous = txn.current_graph().cloned().unwrap();
    let store = Arc::clone(txn.store());
    txn.graph_mut().unwrap().nodes.push(Node::new("b", "t"));
    store.save(txn.current_graph().unwrap()).unwrap();
    let restore = Arc::clone(&store);
    txn.add_rollback_action(move || Ok(restore.save(&previous)?), "restore")
        .unwrap();
    assert_eq!(fixture.store().load().unwrap().node_count(), 2);
    let failures = txn.rollback().unwrap();

    // THEN the file is back to one node
    assert!(failures.is_empty());
    assert_eq!(fixture.store().load().unwrap().node_count(), 1);
}

// ========== TEST: with_transaction_propagates ==========
#[test]
fn test_with_transaction_returns_original_error_after_compensating() {
    let fixture = Fixture::new();
    let mut txn = coordinator(&fixture);
    let order = Arc::new(Mutex::new(Vec::new()));

    let result: Result<(), ManagerError> = txn.with_transaction(|txn| {
        for label in ["first", "second"] {
            let order = Arc::clone(&order);
            txn.add_rollback_action(
                move || {
                    order.lock().unwrap().push(label);
                    Ok(())
                },
                label,
            )?;
        }
        Err(ManagerError::invalid_input("boom"))
    });

    assert_eq!(result.unwrap_err().to_string(), "Invalid input: boom");
    assert_eq!(*order.lock().unwrap(), vec!["second", "first"]);
    assert!(!txn.is_in_transaction());
}

// ========== TEST: single_active_transaction ==========
#[test]
fn test_second_begin_fails_until_commit() {
    let fixture = Fixture::new();
    let mut txn = coordinator(&fixture);

    txn.begin_transaction().unwrap();
    assert!(matches!(
        txn.begin_transaction(),
        Err(TransactionError::AlreadyInProgress)
    ));

    txn.commit().unwrap();
    assert!(txn.begin_transaction().is_ok());
}

// ========== TEST: begin_load_failure ==========
#[test]
fn test_begin_fails_and_stays_idle_when_storage_is_unusable() {
    // GIVEN a file where the backing directory should be
    let fixture = Fixture::new();
    std::fs::write(&fixture.config().dir, "not a directory").unwrap();
    let mut txn = coordinator(&fixture);

    // WHEN
    let result = txn.begin_transaction();

    // THEN
    assert!(matches!(result, Err(TransactionError::Store(_))));
    assert!(!txn.is_in_transaction());
}

// ========== TEST: rollback_notification_counts_failures ==========
#[test]
fn test_after_rollback_reports_failure_count() {
    let fixture = Fixture::new();
    let events = EventNotifier::new();
    let payloads = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&payloads);
    events.on(AFTER_ROLLBACK, move |payload| {
        sink.lock().unwrap().push(payload.clone());
        Ok(())
    });
    let mut txn = TransactionCoordinator::new(Arc::new(fixture.store()), events);

    txn.begin_transaction().unwrap();
    txn.add_rollback_action(|| Err("nope".into()), "broken").unwrap();
    txn.add_rollback_action(|| Ok(()), "fine").unwrap();
    let failures = txn.rollback().unwrap();

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].label, "broken");
    assert_eq!(*payloads.lock().unwrap(), vec![json!({ "failures": 1 })]);
}
