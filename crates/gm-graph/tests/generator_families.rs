use gm_core::{ErrorKind, GmError, Position};
use gm_graph::{
    complete, complete_bipartite, cycle, generalized_petersen, generate, is_reserved_name, wheel,
    Family, GeneratorSpec, Graph, GraphConfig, Layout, RowLayout,
};

fn fresh() -> Graph {
    Graph::new("scratch", GraphConfig::seeded(42))
}

fn assert_unlabelled(graph: &Graph) {
    assert!(graph.vertices().iter().all(|vertex| vertex.labels.is_empty()));
}

#[test]
fn cycle_is_two_regular() -> Result<(), GmError> {
    for n in 3..10 {
        let mut graph = fresh();
        cycle(&mut graph, n, 0, 1, &Layout::default())?;
        assert_eq!(graph.len(), n);
        assert_eq!(graph.edge_count(), n);
        assert!(graph.degree_sequence().iter().all(|&d| d == 2));
        assert_unlabelled(&graph);
    }
    Ok(())
}

#[test]
fn cycle_places_vertices_on_the_circle() -> Result<(), GmError> {
    let layout = Layout {
        center: Position::new(10.0, -5.0),
        radius: 4.0,
    };
    let mut graph = fresh();
    cycle(&mut graph, 8, 3, 1, &layout)?;
    for vertex in graph.vertices() {
        let dx = vertex.position.x - layout.center.x;
        let dy = vertex.position.y - layout.center.y;
        assert!(((dx * dx + dy * dy).sqrt() - layout.radius).abs() < 1e-9);
    }
    let first = graph.vertices()[0].position;
    assert!((first.x - 14.0).abs() < 1e-9 && (first.y + 5.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn circulant_skip_builds_star_polygons() -> Result<(), GmError> {
    let mut graph = fresh();
    cycle(&mut graph, 5, 0, 2, &Layout::default())?;
    assert_eq!(graph.edge_count(), 5);
    assert!(graph.degree_sequence().iter().all(|&d| d == 2));

    // skip = n/2 pairs every vertex with its antipode exactly once
    cycle(&mut graph, 6, 0, 3, &Layout::default())?;
    assert_eq!(graph.len(), 6);
    assert_eq!(graph.edge_count(), 3);

    cycle(&mut graph, 2, 0, 1, &Layout::default())?;
    assert_eq!(graph.edge_count(), 1);
    Ok(())
}

#[test]
fn complete_graph_edge_count() -> Result<(), GmError> {
    for n in 1..8 {
        let mut graph = fresh();
        complete(&mut graph, n, &Layout::default())?;
        assert_eq!(graph.len(), n);
        assert_eq!(graph.edge_count(), n * (n - 1) / 2);
        assert!(graph.degree_sequence().iter().all(|&d| d == n - 1));
        assert_unlabelled(&graph);
    }
    Ok(())
}

#[test]
fn wheel_has_one_hub() -> Result<(), GmError> {
    let mut graph = fresh();
    wheel(&mut graph, 5, &Layout::default())?;
    let mut degrees = graph.degree_sequence();
    degrees.sort_unstable();
    assert_eq!(degrees, vec![3, 3, 3, 3, 3, 5]);
    let hub = graph.vertices().last().expect("hub");
    assert_eq!(hub.position, Layout::default().center);
    assert_unlabelled(&graph);
    Ok(())
}

#[test]
fn complete_bipartite_three_two() -> Result<(), GmError> {
    let rows = RowLayout::default();
    let mut graph = fresh();
    complete_bipartite(&mut graph, 3, 2, 80.0, &rows)?;
    assert_eq!(graph.len(), 5);
    assert_eq!(graph.edge_count(), 6);

    let (top, bottom) = graph.vertices().split_at(3);
    for vertex in top {
        assert_eq!(graph.degree(vertex.id().as_str())?, 2);
        assert_eq!(vertex.position.y, rows.origin.y);
        for other in top {
            assert!(!graph.has_edge(vertex.id().as_str(), other.id().as_str()));
        }
    }
    for vertex in bottom {
        assert_eq!(graph.degree(vertex.id().as_str())?, 3);
        assert_eq!(vertex.position.y, rows.origin.y + 80.0);
        for other in bottom {
            assert!(!graph.has_edge(vertex.id().as_str(), other.id().as_str()));
        }
    }
    assert_unlabelled(&graph);
    Ok(())
}

#[test]
fn petersen_graph_is_cubic() -> Result<(), GmError> {
    let mut graph = fresh();
    generalized_petersen(&mut graph, 5, 2, &Layout::default())?;
    assert_eq!(graph.len(), 10);
    assert_eq!(graph.edge_count(), 15);
    assert!(graph.degree_sequence().iter().all(|&d| d == 3));
    assert_unlabelled(&graph);
    Ok(())
}

#[test]
fn generators_reject_non_positive_counts() {
    let layout = Layout::default();
    let mut graph = fresh();
    let failures = [
        cycle(&mut graph, 0, 0, 1, &layout),
        cycle(&mut graph, 4, 0, 0, &layout),
        generalized_petersen(&mut graph, 0, 1, &layout),
        generalized_petersen(&mut graph, 5, 0, &layout),
        complete(&mut graph, 0, &layout),
        wheel(&mut graph, 0, &layout),
        complete_bipartite(&mut graph, 0, 2, 10.0, &RowLayout::default()),
        complete_bipartite(&mut graph, 2, 0, 10.0, &RowLayout::default()),
    ];
    for result in failures {
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(err.info().context.contains_key("parameter"));
    }
}

#[test]
fn cycle_rejects_offsets_past_the_label_range() -> Result<(), GmError> {
    let mut graph = fresh();
    cycle(&mut graph, 4, 0, 1, &Layout::default())?;
    for offset in [usize::MAX - 1, usize::MAX - 3, i64::MAX as usize] {
        let err = cycle(&mut graph, 3, offset, 1, &Layout::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(
            err.info().context.get("parameter").map(String::as_str),
            Some("rotation_offset")
        );
    }
    // rejected before the graph is touched
    assert_eq!(graph.len(), 4);
    Ok(())
}

#[test]
fn cycle_reduces_large_skips_modulo_n() -> Result<(), GmError> {
    let mut wrapped = fresh();
    cycle(&mut wrapped, 5, 0, usize::MAX, &Layout::default())?;
    let mut direct = fresh();
    // usize::MAX % 5 == 0, so every step collapses onto its own vertex
    cycle(&mut direct, 5, 0, 5, &Layout::default())?;
    assert_eq!(wrapped.len(), 5);
    assert_eq!(wrapped.edge_count(), direct.edge_count());

    let mut big_step = fresh();
    cycle(&mut big_step, 5, 0, 5 * 1_000 + 2, &Layout::default())?;
    assert_eq!(big_step.edge_count(), 5);
    assert!(big_step.degree_sequence().iter().all(|&d| d == 2));
    Ok(())
}

#[test]
fn generate_dispatches_and_replaces_contents() -> Result<(), GmError> {
    let mut graph = fresh();
    generate(&mut graph, &GeneratorSpec::Complete { n: 4 }, &Layout::default())?;
    assert_eq!(graph.edge_count(), 6);

    let spec = GeneratorSpec::CompleteBipartite {
        n1: 2,
        n2: 3,
        gap: 50.0,
    };
    generate(&mut graph, &spec, &Layout::default())?;
    assert_eq!(spec.family(), Family::CompleteBipartite);
    assert_eq!(graph.len(), 5);
    assert_eq!(graph.edge_count(), 6);
    Ok(())
}

#[test]
fn family_names_are_reserved() {
    for family in Family::ALL {
        assert_eq!(Family::from_name(family.name()), Some(family));
        assert!(is_reserved_name(family.name()));
    }
    assert!(is_reserved_name("Cycle"));
    assert!(is_reserved_name("COMPLETE_BIPARTITE"));
    assert!(!is_reserved_name("my-cycle"));
}
