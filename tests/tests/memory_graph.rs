//! End-to-end node and edge operations through a session.

use mnemo_manager::{
    edge_keys_from_value, edges_from_value, node_names_from_value, nodes_from_value,
};
use mnemo_tests::prelude::*;
use pretty_assertions::assert_eq;

fn seeded_session(fixture: &Fixture) -> MemorySession {
    let mut session = fixture.session();
    session
        .nodes()
        .add_nodes(vec![
            Node::new("alice", "person").with_metadata(["likes tea"]),
            Node::new("bob", "person"),
            Node::new("acme", "company"),
        ])
        .unwrap();
    session
        .edges()
        .add_edges(vec![
            Edge::new("alice", "bob", "knows").with_weight(0.8),
            Edge::new("alice", "acme", "works_at"),
            Edge::new("bob", "acme", "works_at"),
        ])
        .unwrap();
    session
}

// ========== TEST: persisted_across_sessions ==========
#[test]
fn test_graph_survives_reopen() {
    let fixture = Fixture::new();
    drop(seeded_session(&fixture));

    let session = fixture.session();
    let graph = session.read_graph().unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(fixture.raw_records().len(), 6);
    // nodes are written before edges
    assert!(fixture.raw_records()[..3].iter().all(|r| r["type"] == "node"));
}

// ========== TEST: delete_node_cascade ==========
#[test]
fn test_deleting_a_node_removes_its_edges() {
    let fixture = Fixture::new();
    let mut session = seeded_session(&fixture);

    let deleted = session.nodes().delete_nodes(vec!["alice".into()]).unwrap();

    assert_eq!(deleted.edges.len(), 2);
    let remaining = session.edges().get_edges(&EdgeFilter::any()).unwrap();
    assert_eq!(remaining, vec![Edge::new("bob", "acme", "works_at")]);
}

// ========== TEST: queries ==========
#[test]
fn test_queries() {
    let fixture = Fixture::new();
    let mut session = seeded_session(&fixture);

    let works_at = session
        .edges()
        .get_edges(&EdgeFilter::any().to_node("acme").of_type("works_at"))
        .unwrap();
    assert_eq!(works_at.len(), 2);

    let by_id = session
        .edges()
        .get_edges_by_ids(&["alice|bob|knows", "nobody|x|y"])
        .unwrap();
    assert_eq!(by_id, vec![Edge::new("alice", "bob", "knows").with_weight(0.8)]);

    let nodes = session.nodes().get_nodes(&["acme", "ghost"]).unwrap();
    assert_eq!(nodes, vec![Node::new("acme", "company")]);
}

// ========== TEST: updates ==========
#[test]
fn test_updates_are_persisted() {
    let fixture = Fixture::new();
    let mut session = seeded_session(&fixture);

    session
        .nodes()
        .update_nodes(vec![NodeUpdate::new("bob").with_metadata(["joined in 2020"])])
        .unwrap();
    session
        .edges()
        .update_edges(vec![EdgeUpdate::new("alice", "bob", "knows").with_weight(0.1)])
        .unwrap();

    let graph = fixture.store().load().unwrap();
    assert_eq!(graph.node("bob").unwrap().metadata, vec!["joined in 2020".to_string()]);
    assert_eq!(
        graph.edge(&EdgeKey::new("alice", "bob", "knows")).unwrap().weight,
        0.1
    );
}

// ========== TEST: failed_batch_is_atomic ==========
#[test]
fn test_failed_batch_leaves_file_untouched() {
    let fixture = Fixture::new();
    let mut session = seeded_session(&fixture);
    let before = fixture.raw();

    let err = session
        .edges()
        .add_edges(vec![
            Edge::new("bob", "alice", "knows"),
            Edge::new("alice", "bob", "knows"),
        ])
        .unwrap_err();

    assert_eq!(err.to_string(), "Edge already exists: alice -> bob (knows)");
    assert_eq!(fixture.raw(), before);
}

// ========== TEST: raw_tool_input ==========
#[test]
fn test_raw_tool_input_flow() {
    // GIVEN tool-style JSON arguments
    let fixture = Fixture::new();
    let mut session = fixture.session();
    let nodes = json!([
        { "name": "x", "nodeType": "thing", "metadata": [] },
        { "name": "y", "nodeType": "thing", "metadata": ["second"] }
    ]);
    let edges = json!([{ "from": "x", "to": "y", "edgeType": "next", "weight": 0.5 }]);

    // WHEN decoded and applied
    session.nodes().add_nodes(nodes_from_value(&nodes).unwrap()).unwrap();
    session.edges().add_edges(edges_from_value(&edges).unwrap()).unwrap();
    session
        .edges()
        .delete_edges(edge_keys_from_value(&json!(["x|y|next"])).unwrap())
        .unwrap();
    session
        .nodes()
        .delete_nodes(node_names_from_value(&json!(["y"])).unwrap())
        .unwrap();

    // THEN
    let graph = session.read_graph().unwrap();
    assert_eq!(graph.nodes, vec![Node::new("x", "thing")]);
    assert!(graph.edges.is_empty());
}

#[test]
fn test_raw_tool_input_rejected_before_any_write() {
    let fixture = Fixture::new();

    let input = json!([{ "name": "x", "nodeType": "", "metadata": [] }]);
    let err = nodes_from_value(&input).unwrap_err();

    assert_eq!(err.to_string(), "Node must have a 'nodeType' property");
    assert!(fixture.raw().is_none());
}
