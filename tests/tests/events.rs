//! Notification behaviour seen from outside the core.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mnemo_tests::prelude::*;
use pretty_assertions::assert_eq;

// ========== TEST: emit_return_value ==========
#[test]
fn test_emit_reports_whether_anyone_listened() {
    let notifier = EventNotifier::new();
    assert!(!notifier.emit("nobody", &json!({})).unwrap());

    notifier.on("somebody", |_| Ok(()));
    assert!(notifier.emit("somebody", &json!({})).unwrap());
}

// ========== TEST: once_semantics ==========
#[test]
fn test_once_listener_fires_exactly_once() {
    let notifier = EventNotifier::new();
    let count = Arc::new(AtomicUsize::new(0));
    let inner = Arc::clone(&count);
    notifier.once(AFTER_COMMIT, move |_| {
        inner.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    notifier.emit(AFTER_COMMIT, &json!({})).unwrap();
    notifier.emit(AFTER_COMMIT, &json!({})).unwrap();

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(notifier.listener_count(AFTER_COMMIT), 0);
}

// ========== TEST: failing_observer_does_not_block_mutation ==========
#[test]
fn test_failing_observer_does_not_block_mutation() {
    // GIVEN an observer that fails and one that panics
    let fixture = Fixture::new();
    let mut session = fixture.session();
    session.events().on(BEFORE_ADD_NODES, |_| Err("audit log down".into()));
    session.events().on(AFTER_ADD_NODES, |_| panic!("observer crashed"));

    // WHEN
    let added = session.nodes().add_nodes(vec![Node::new("a", "t")]);

    // THEN the mutation still went through
    assert!(added.is_ok());
    assert_eq!(fixture.store().load().unwrap().node_count(), 1);
}

// ========== TEST: full_notification_sequence ==========
#[test]
fn test_add_edges_notification_sequence() {
    // GIVEN a session with two nodes and a recorder on every notification
    let fixture = Fixture::new();
    let mut session = fixture.session();
    session
        .nodes()
        .add_nodes(vec![Node::new("a", "t"), Node::new("b", "t")])
        .unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    for &event in ALL_EVENTS {
        let seen = Arc::clone(&seen);
        session.events().on(event, move |_| {
            seen.lock().unwrap().push(event);
            Ok(())
        });
    }

    // WHEN
    session
        .edges()
        .add_edges(vec![Edge::new("a", "b", "knows")])
        .unwrap();

    // THEN
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            BEFORE_ADD_EDGES,
            BEFORE_BEGIN_TRANSACTION,
            AFTER_BEGIN_TRANSACTION,
            BEFORE_COMMIT,
            AFTER_COMMIT,
            AFTER_ADD_EDGES,
        ]
    );
}

#[test]
fn test_failed_mutation_notifies_rollback_not_after() {
    let fixture = Fixture::new();
    let mut session = fixture.session();
    let seen = Arc::new(Mutex::new(Vec::new()));
    for &event in ALL_EVENTS {
        let seen = Arc::clone(&seen);
        session.events().on(event, move |_| {
            seen.lock().unwrap().push(event);
            Ok(())
        });
    }

    let err = session
        .edges()
        .add_edges(vec![Edge::new("a", "b", "knows")])
        .unwrap_err();

    assert_eq!(err.to_string(), "Node not found: a");
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            BEFORE_ADD_EDGES,
            BEFORE_BEGIN_TRANSACTION,
            AFTER_BEGIN_TRANSACTION,
            BEFORE_ROLLBACK,
            AFTER_ROLLBACK,
        ]
    );
}
