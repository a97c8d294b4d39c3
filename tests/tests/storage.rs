//! JSON Lines persistence against a real file.

use mnemo_tests::prelude::*;
use pretty_assertions::assert_eq;

// ========== TEST: empty_file_one_node_one_edge ==========
#[test]
fn test_empty_file_then_one_node_and_one_edge() {
    // GIVEN no backing file at all
    let fixture = Fixture::new();
    let store = fixture.store();

    // WHEN loaded
    let graph = store.load().unwrap();

    // THEN the graph is empty and the file now exists, empty
    assert!(graph.is_empty());
    assert_eq!(fixture.raw().as_deref(), Some(""));

    // WHEN one node and one self-edge are saved
    let graph = Graph::from_parts(
        vec![Node::new("n1", "t")],
        vec![Edge::new("n1", "n1", "self")],
    );
    store.save(&graph).unwrap();

    // THEN the file holds exactly two lines, node first
    assert_eq!(
        fixture.raw().unwrap(),
        concat!(
            r#"{"type":"node","name":"n1","nodeType":"t","metadata":[]}"#,
            "\n",
            r#"{"type":"edge","from":"n1","to":"n1","edgeType":"self","weight":1.0}"#,
        )
    );

    // AND a new store reads the same graph back with the edge indexed
    let reopened = fixture.store();
    assert_eq!(reopened.load().unwrap(), graph);
    assert_eq!(
        reopened.load_edges_by_ids(&["n1|n1|self"]).unwrap(),
        vec![Edge::new("n1", "n1", "self")]
    );
}

// ========== TEST: round_trip ==========
#[test]
fn test_round_trip_preserves_metadata_and_weights() {
    let fixture = Fixture::new();
    let graph = Graph::from_parts(
        vec![
            Node::new("alice", "person").with_metadata(["likes tea", "works remotely"]),
            Node::new("acme", "company"),
        ],
        vec![Edge::new("alice", "acme", "works_at").with_weight(0.75)],
    );

    fixture.store().save(&graph).unwrap();

    assert_eq!(fixture.store().load().unwrap(), graph);
}

// ========== TEST: malformed_lines_are_skipped ==========
#[test]
fn test_malformed_and_blank_lines_are_skipped() {
    // GIVEN a file with a truncated line, an unknown tag, blank lines and CRLF endings
    let fixture = Fixture::with_lines(&[
        r#"{"type":"node","name":"a","nodeType":"t","metadata":[]}"#,
        "",
        r#"{"type":"node","name":"b","nodeType""#,
        r#"{"type":"widget","name":"w"}"#,
        "   ",
        "{\"type\":\"node\",\"name\":\"c\",\"nodeType\":\"t\",\"metadata\":[]}\r",
        r#"{"type":"edge","from":"a","to":"c","edgeType":"knows"}"#,
    ]);

    // WHEN
    let graph = fixture.store().load().unwrap();

    // THEN only the decodable records remain, and the missing weight defaulted
    assert_eq!(
        graph.nodes,
        vec![Node::new("a", "t"), Node::new("c", "t")]
    );
    assert_eq!(graph.edges, vec![Edge::new("a", "c", "knows")]);
    assert_eq!(graph.edges[0].weight, 1.0);
}

// ========== TEST: ensure_ready_idempotent ==========
#[test]
fn test_ensure_ready_keeps_existing_content() {
    let fixture =
        Fixture::with_lines(&[r#"{"type":"node","name":"a","nodeType":"t","metadata":[]}"#]);
    let store = fixture.store();

    store.ensure_ready().unwrap();
    store.ensure_ready().unwrap();

    assert_eq!(store.load().unwrap().node_count(), 1);
}

#[test]
fn test_ensure_ready_fails_when_directory_cannot_exist() {
    // GIVEN a regular file where the backing directory should be
    let fixture = Fixture::new();
    std::fs::write(&fixture.config().dir, "not a directory").unwrap();

    // WHEN / THEN
    assert!(fixture.store().ensure_ready().is_err());
}

// ========== TEST: edge_index_follows_load ==========
#[test]
fn test_edge_index_rebuilt_on_every_load() {
    // GIVEN two edges stored
    let fixture = Fixture::new();
    let store = fixture.store();
    store
        .save(&Graph::from_parts(
            vec![Node::new("a", "t"), Node::new("b", "t")],
            vec![Edge::new("a", "b", "knows"), Edge::new("b", "a", "knows")],
        ))
        .unwrap();
    store.load().unwrap();
    assert_eq!(store.edge_index_len(), 2);

    // WHEN the file is replaced behind the store's back
    fixture.write_raw(r#"{"type":"node","name":"a","nodeType":"t","metadata":[]}"#);
    store.load().unwrap();

    // THEN the stale entries are gone
    assert_eq!(store.edge_index_len(), 0);
    assert!(store.load_edges_by_ids(&["a|b|knows"]).unwrap().is_empty());
}
