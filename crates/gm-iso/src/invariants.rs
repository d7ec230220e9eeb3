use gm_graph::Graph;

/// Returns the degree sequence sorted in ascending order.
pub fn degree_signature(graph: &Graph) -> Vec<usize> {
    let mut degrees = graph.degree_sequence();
    degrees.sort_unstable();
    degrees
}

/// Returns whether the two graphs can be told apart without searching.
pub(crate) fn trivially_distinct(g1: &Graph, g2: &Graph) -> bool {
    g1.is_directed() != g2.is_directed()
        || g1.len() != g2.len()
        || degree_signature(g1) != degree_signature(g2)
}
