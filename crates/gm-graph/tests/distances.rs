use gm_core::{ErrorKind, GmError, Label, Position};
use gm_graph::{
    bfs_distances, cycle, distance_distribution, label_by_bfs, layer_color, Graph, GraphConfig,
    Layout, Vertex,
};

fn hexagon() -> Result<Graph, GmError> {
    let mut graph = Graph::new("hexagon", GraphConfig::seeded(5));
    cycle(&mut graph, 6, 0, 1, &Layout::default())?;
    Ok(graph)
}

#[test]
fn hexagon_distances_from_every_vertex() -> Result<(), GmError> {
    let graph = hexagon()?;
    for start in graph.vertex_ids() {
        let distances = bfs_distances(&graph, start.as_str())?;
        let mut values: Vec<usize> = distances.values().map(|d| d.expect("connected")).collect();
        values.sort_unstable();
        assert_eq!(values, vec![0, 1, 1, 2, 2, 3]);
        assert_eq!(distance_distribution(&graph, start.as_str())?, vec![1, 2, 2, 1]);
    }
    Ok(())
}

#[test]
fn unreachable_vertices_have_no_distance() -> Result<(), GmError> {
    let mut graph = Graph::default();
    for id in ["a", "b", "c"] {
        graph.create_vertex(Vertex::new(id, Position::default()))?;
    }
    graph.create_edge("a", "b")?;
    let distances = bfs_distances(&graph, "a")?;
    assert_eq!(distances.get("a"), Some(&Some(0)));
    assert_eq!(distances.get("b"), Some(&Some(1)));
    assert_eq!(distances.get("c"), Some(&None));
    assert_eq!(distance_distribution(&graph, "a")?, vec![1, 1]);
    Ok(())
}

#[test]
fn isolated_start_counts_itself() -> Result<(), GmError> {
    let mut graph = Graph::default();
    graph.create_vertex(Vertex::new("solo", Position::default()))?;
    assert_eq!(distance_distribution(&graph, "solo")?, vec![1]);
    Ok(())
}

#[test]
fn missing_start_is_an_error() {
    let graph = Graph::default();
    let err = bfs_distances(&graph, "ghost").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::VertexNotFound);
    assert!(distance_distribution(&graph, "ghost").is_err());
}

#[test]
fn labeling_is_additive() -> Result<(), GmError> {
    let mut graph = hexagon()?;
    let start = graph.vertices()[0].id().clone();
    graph.add_label(start.as_str(), Label::Color("#000000".into()))?;

    label_by_bfs(&mut graph, start.as_str(), false)?;
    label_by_bfs(&mut graph, start.as_str(), true)?;

    let origin = graph.find_by_id(start.as_str()).expect("start");
    assert_eq!(
        origin.labels,
        vec![Label::Color("#000000".into()), Label::Integer(0), layer_color(0)]
    );
    let far = graph.vertices()[3].clone();
    assert_eq!(far.labels, vec![Label::Integer(3), layer_color(3)]);
    Ok(())
}

#[test]
fn palette_wraps_every_ten_layers() {
    assert_eq!(layer_color(2), layer_color(12));
    assert_ne!(layer_color(2), layer_color(3));
}
