//! CLI command implementations.

use std::path::Path;

use crate::config::Config;
use crate::format::{GraphReader, GraphWriter};
use crate::graph::GraphStore;
use crate::render::SvgRenderer;
use crate::types::{Edge, GraphResult, Position, Vertex, VertexId};

fn save(graph: &GraphStore, path: &Path) -> GraphResult<()> {
    GraphWriter::new(true).write_to_file(graph, path)
}

fn vertex_json(vertex: &Vertex) -> serde_json::Value {
    serde_json::json!({
        "id": vertex.id,
        "x": vertex.position.x,
        "y": vertex.position.y,
    })
}

fn edge_json(edge: &Edge) -> serde_json::Value {
    serde_json::json!({
        "vertex_one": edge.vertex_one.id,
        "vertex_two": edge.vertex_two.id,
        "distance": edge.distance,
    })
}

/// Create a new empty graph document.
pub fn cmd_create(path: &Path, config: &Config) -> GraphResult<()> {
    let graph = GraphStore::from_config(&config.graph)?;
    save(&graph, path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display information about a graph document.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let total_weight: f64 = graph.edges().iter().map(|e| e.distance).sum();
    let max_degree = graph
        .vertices()
        .iter()
        .map(|v| graph.edges_of(v.id).count())
        .max()
        .unwrap_or(0);

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "total_weight": total_weight,
            "max_degree": max_degree,
            "proximity": graph.proximity(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Total weight: {}", total_weight);
        println!("Max degree: {}", max_degree);
        println!("Proximity: {}", graph.proximity());
    }
    Ok(())
}

/// Add a vertex, or with `snap` reuse one already close to the position.
pub fn cmd_add_vertex(path: &Path, x: f64, y: f64, snap: bool, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let position = Position::new(x, y);

    let (vertex, created) = match graph.point_exists(position).filter(|_| snap) {
        Some(existing) => (existing, false),
        None => (graph.add_vertex(position)?, true),
    };
    if created {
        save(&graph, path)?;
    }

    if json {
        let mut info = vertex_json(&vertex);
        info["created"] = serde_json::Value::Bool(created);
        println!("{}", info);
    } else if created {
        println!("Added vertex {} at ({}, {})", vertex.id, x, y);
    } else {
        println!(
            "Snapped to vertex {} at ({}, {})",
            vertex.id, vertex.position.x, vertex.position.y
        );
    }
    Ok(())
}

/// Add an edge between two vertices. Without a distance the edge weight is
/// the Euclidean length of the segment.
pub fn cmd_link(
    path: &Path,
    vertex_one: u64,
    vertex_two: u64,
    distance: Option<f64>,
    json: bool,
) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let (one, two) = (VertexId(vertex_one), VertexId(vertex_two));
    let distance = match distance {
        Some(d) => d,
        None => {
            let a = graph.get_vertex(one)?;
            let b = graph.get_vertex(two)?;
            a.position.distance_to(&b.position)
        }
    };
    let edge = graph.add_edge(one, two, distance)?;
    save(&graph, path)?;

    if json {
        println!("{}", edge_json(&edge));
    } else {
        println!("Linked {} --{}-- {}", one, edge.distance, two);
    }
    Ok(())
}

/// Remove the edges between two vertices.
pub fn cmd_unlink(path: &Path, vertex_one: u64, vertex_two: u64, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let (one, two) = (VertexId(vertex_one), VertexId(vertex_two));
    graph.get_vertex(one)?;
    graph.get_vertex(two)?;

    let removed = graph.remove_edge_between(one, two);
    if removed > 0 {
        save(&graph, path)?;
    }

    if json {
        println!("{}", serde_json::json!({"removed": removed}));
    } else {
        println!("Removed {} edge(s) between {} and {}", removed, one, two);
    }
    Ok(())
}

/// Remove a vertex and its edges.
pub fn cmd_remove_vertex(path: &Path, vertex_id: u64, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let edges_before = graph.edge_count();
    let removed = graph.remove_vertex(VertexId(vertex_id))?;
    let edges_removed = edges_before - graph.edge_count();
    save(&graph, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"removed": removed.id, "edges_removed": edges_removed})
        );
    } else {
        println!(
            "Removed vertex {} and {} edge(s)",
            removed.id, edges_removed
        );
    }
    Ok(())
}

/// Find the vertex at a position, within the snap threshold.
pub fn cmd_find(path: &Path, x: f64, y: f64, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let found = graph.point_exists(Position::new(x, y));

    if json {
        let info = match &found {
            Some(v) => vertex_json(v),
            None => serde_json::Value::Null,
        };
        println!("{}", info);
    } else {
        match found {
            Some(v) => println!(
                "Vertex {} at ({}, {})",
                v.id, v.position.x, v.position.y
            ),
            None => println!("No vertex near ({}, {})", x, y),
        }
    }
    Ok(())
}

/// Search for the shortest path between two vertices.
pub fn cmd_traverse(path: &Path, from: u64, to: u64, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let source = VertexId(from);
    let result = graph.traverse(source, VertexId(to))?;
    let vertices = result.vertex_ids(source);

    if json {
        let info = serde_json::json!({
            "from": from,
            "to": to,
            "reachable": !result.is_empty(),
            "distance": result.distance,
            "vertices": vertices,
            "edges": result.edges.iter().map(edge_json).collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else if result.is_empty() {
        println!("No path from {} to {}", from, to);
    } else {
        let route: Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
        println!("Path: {}", route.join(" -> "));
        println!("Distance: {}", result.distance);
    }
    Ok(())
}

/// Render the graph as SVG, optionally highlighting a path.
pub fn cmd_render(
    path: &Path,
    output: Option<&Path>,
    route: Option<(u64, u64)>,
    config: &Config,
) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let mut renderer = SvgRenderer::new(config.render.clone());
    if let Some((from, to)) = route {
        let result = graph.traverse(VertexId(from), VertexId(to))?;
        renderer.highlight(&result.edges);
    }
    graph.render_to(&mut renderer);
    let svg = renderer.to_svg();

    match output {
        Some(out) => {
            std::fs::write(out, svg)?;
            println!("Rendered {} to {}", path.display(), out.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}
