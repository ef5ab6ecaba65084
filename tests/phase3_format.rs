//! Phase 3 tests: Graph documents, configuration, SVG rendering.

use std::io::Cursor;

use tempfile::{tempdir, NamedTempFile};

use pathgraph::config::{Config, RenderConfig};
use pathgraph::format::{GraphReader, GraphWriter};
use pathgraph::graph::{GraphBuilder, GraphStore};
use pathgraph::render::SvgRenderer;
use pathgraph::types::{ErrorKind, GraphError, Position, VertexId, DEFAULT_PROXIMITY};

fn sample_graph() -> GraphStore {
    let mut builder = GraphBuilder::new();
    let a = builder.vertex(0.0, 0.0);
    let b = builder.vertex(10.0, 0.0);
    let c = builder.vertex(20.0, 0.0);
    builder
        .link(a, b, 5.0)
        .link(b, c, 5.0)
        .link(a, c, 20.0)
        .proximity(12.5);
    builder.build().unwrap()
}

// ==================== Document Tests ====================

#[test]
fn test_document_roundtrip_in_memory() {
    let graph = sample_graph();
    let json = GraphWriter::new(false).to_json(&graph).unwrap();
    let loaded = GraphReader::from_json(json.as_bytes()).unwrap();

    assert_eq!(loaded.vertices(), graph.vertices());
    assert_eq!(loaded.edge_count(), 3);
    assert_eq!(loaded.proximity(), 12.5);
    for (a, b) in loaded.edges().iter().zip(graph.edges()) {
        assert_eq!(a, b);
        assert_eq!(a.distance, b.distance);
    }
}

#[test]
fn test_document_roundtrip_file() {
    let mut graph = sample_graph();
    graph.traverse(VertexId(1), VertexId(3)).unwrap();

    let file = NamedTempFile::new().unwrap();
    GraphWriter::default()
        .write_to_file(&graph, file.path())
        .unwrap();

    let mut loaded = GraphReader::read_from_file(file.path()).unwrap();
    assert_eq!(loaded.vertex_count(), 3);
    assert!(loaded.path().is_empty());
    assert_eq!(
        loaded.traverse(VertexId(1), VertexId(3)).unwrap().distance,
        10.0
    );
}

#[test]
fn test_write_to_and_read_from() {
    let graph = sample_graph();
    let mut buf = Vec::new();
    GraphWriter::new(true).write_to(&graph, &mut buf).unwrap();

    let loaded = GraphReader::read_from(&mut Cursor::new(buf)).unwrap();
    assert_eq!(loaded.vertex_count(), graph.vertex_count());
    assert_eq!(loaded.edge_count(), graph.edge_count());
}

#[test]
fn test_ids_resume_after_largest() {
    let json = r#"{
        "vertices": [
            {"id": 1, "position": {"x": 0.0, "y": 0.0}},
            {"id": 5, "position": {"x": 40.0, "y": 0.0}}
        ],
        "edges": [{"vertex_one": 5, "vertex_two": 1, "distance": 2.0}]
    }"#;
    let mut graph = GraphReader::from_json(json.as_bytes()).unwrap();
    assert_eq!(graph.proximity(), DEFAULT_PROXIMITY);
    assert!(graph.edge_exists(VertexId(1), VertexId(5)).is_some());

    let next = graph.add_vertex((80.0, 0.0)).unwrap();
    assert_eq!(next.id, VertexId(6));
}

#[test]
fn test_document_with_largest_possible_id() {
    let json = r#"{
        "vertices": [{"id": 18446744073709551615, "position": {"x": 0.0, "y": 0.0}}]
    }"#;
    match GraphReader::from_json(json.as_bytes()) {
        Err(GraphError::IdSpaceExhausted(what)) => assert_eq!(what, "vertex"),
        Err(e) => panic!("Expected IdSpaceExhausted, got {:?}", e),
        Ok(_) => panic!("Expected IdSpaceExhausted, got a graph"),
    }
}

#[test]
fn test_add_vertex_after_last_id() {
    let json = r#"{
        "vertices": [{"id": 18446744073709551614, "position": {"x": 0.0, "y": 0.0}}]
    }"#;
    let mut graph = GraphReader::from_json(json.as_bytes()).unwrap();
    assert_eq!(graph.vertex_count(), 1);

    let err = graph.add_vertex((50.0, 50.0)).unwrap_err();
    assert!(matches!(err, GraphError::IdSpaceExhausted(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(graph.vertex_count(), 1);
    assert!(graph.point_exists(Position::new(50.0, 50.0)).is_none());
}

#[test]
fn test_document_with_missing_vertex() {
    let json = r#"{
        "vertices": [{"id": 1, "position": {"x": 0.0, "y": 0.0}}],
        "edges": [{"vertex_one": 1, "vertex_two": 2, "distance": 2.0}]
    }"#;
    match GraphReader::from_json(json.as_bytes()) {
        Err(GraphError::VertexNotFound(id)) => assert_eq!(id, VertexId(2)),
        Err(e) => panic!("Expected VertexNotFound, got {:?}", e),
        Ok(_) => panic!("Expected VertexNotFound, got a graph"),
    }
}

#[test]
fn test_document_with_duplicate_ids() {
    let json = r#"{
        "vertices": [
            {"id": 3, "position": {"x": 0.0, "y": 0.0}},
            {"id": 3, "position": {"x": 9.0, "y": 9.0}}
        ]
    }"#;
    assert!(matches!(
        GraphReader::from_json(json.as_bytes()),
        Err(GraphError::DuplicateVertex(VertexId(3)))
    ));
}

#[test]
fn test_document_with_bad_weight() {
    let json = r#"{
        "vertices": [
            {"id": 1, "position": {"x": 0.0, "y": 0.0}},
            {"id": 2, "position": {"x": 9.0, "y": 9.0}}
        ],
        "edges": [{"vertex_one": 1, "vertex_two": 2, "distance": -1.0}]
    }"#;
    let err = GraphReader::from_json(json.as_bytes()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_malformed_document() {
    let err = GraphReader::from_json(b"{ not json").err().unwrap();
    assert!(matches!(err, GraphError::Json(_)));
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = GraphReader::read_from_file(&dir.path().join("absent.json"))
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::Io);
}

// ==================== Config Tests ====================

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.graph.proximity, DEFAULT_PROXIMITY);
    assert_eq!(config.render.vertex_radius, 3.0);
    assert_eq!(config.render.line_width, 2.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_save_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.graph.proximity = 25.0;
    config.render.width = 1024;
    config.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded, config);

    let graph = GraphStore::from_config(&loaded.graph).unwrap();
    assert_eq!(graph.proximity(), 25.0);
}

#[test]
fn test_config_partial_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[graph]\nproximity = 4.0\n").unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.graph.proximity, 4.0);
    assert_eq!(loaded.render, RenderConfig::default());
}

#[test]
fn test_config_rejects_bad_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(&path, "[graph]\nproximity = -1.0\n").unwrap();
    assert!(matches!(
        Config::load(&path),
        Err(GraphError::InvalidProximity(_))
    ));

    std::fs::write(&path, "[render]\nwidth = 0\n").unwrap();
    assert!(matches!(Config::load(&path), Err(GraphError::Config(_))));

    std::fs::write(&path, "graph = [").unwrap();
    let err = Config::load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

// ==================== SVG Tests ====================

#[test]
fn test_svg_contains_every_element() {
    let graph = sample_graph();
    let mut renderer = SvgRenderer::default();
    graph.render_to(&mut renderer);

    assert_eq!(renderer.element_count(), 6);
    let svg = renderer.to_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<circle").count(), 3);
    assert_eq!(svg.matches("<line").count(), 3);
    assert!(svg.contains(r#"r="3""#));
    assert!(!svg.contains("red"));
}

#[test]
fn test_svg_highlights_path() {
    let mut graph = sample_graph();
    let result = graph.traverse(VertexId(1), VertexId(3)).unwrap();

    let mut renderer = SvgRenderer::new(RenderConfig::default());
    renderer.highlight(&result.edges);
    graph.render_to(&mut renderer);

    let svg = renderer.to_svg();
    assert_eq!(svg.matches(r#"stroke="red""#).count(), 2);
    assert_eq!(svg.matches(r#"stroke="black""#).count(), 1);
}

#[test]
fn test_svg_labels_clear_their_edges() {
    let mut builder = GraphBuilder::new();
    let a = builder.vertex(0.0, 0.0);
    let b = builder.vertex(40.0, 0.0);
    let c = builder.vertex(0.0, 30.0);
    builder.link(a, b, 4.0).link(a, c, 3.0);
    let graph = builder.build().unwrap();

    let mut renderer = SvgRenderer::default();
    graph.render_to(&mut renderer);
    let svg = renderer.to_svg();

    // Horizontal edge: label above the midpoint (20, 0).
    assert!(svg.contains(r#"<text x="20" y="-6" font-size="10">4</text>"#));
    // Vertical edge: label to the right of the midpoint (0, 15).
    assert!(svg.contains(r#"<text x="6" y="15" font-size="10">3</text>"#));
}

#[test]
fn test_svg_redraw_after_removal() {
    let mut graph = sample_graph();
    let mut renderer = SvgRenderer::default();
    graph.render_to(&mut renderer);
    assert_eq!(renderer.element_count(), 6);

    let edge = graph.edge_exists(VertexId(1), VertexId(3)).unwrap();
    graph.remove_edge(&edge);
    graph.render_to(&mut renderer);
    assert_eq!(renderer.element_count(), 5);
    assert_eq!(edge.mid_point(), Position::new(10.0, 0.0));
}
