use adjmat::Graph;

fn abc() -> Graph {
    let mut g = Graph::new(3);
    g.bind_vertex(0, "a").unwrap();
    g.bind_vertex(1, "b").unwrap();
    g.bind_vertex(2, "c").unwrap();
    g
}

#[test]
fn undirected_edges_are_symmetric() {
    let mut g = abc();
    g.set_edge_with_cost("b", "a", 7).unwrap();

    assert!(g.has_edge("a", "b"));
    assert!(g.has_edge("b", "a"));
    assert_eq!(g.edge("a", "b"), Some(7));
    assert_eq!(g.edge("b", "a"), Some(7));
    assert_eq!(g.raw_matrix().get(0, 1), Some(7));
    assert_eq!(g.raw_matrix().get(1, 0), Some(7));
}

#[test]
fn directed_edges_leave_the_reverse_cell_alone() {
    let mut g = abc();
    g.set_directed_edge("a", "b", 3).unwrap();
    assert_eq!(g.edge("a", "b"), Some(3));
    assert_eq!(g.edge("b", "a"), None);

    g.set_directed_edge("b", "a", 9).unwrap();
    g.set_directed_edge("a", "b", 4).unwrap();
    assert_eq!(g.edge("a", "b"), Some(4));
    assert_eq!(g.edge("b", "a"), Some(9));
}

#[test]
fn set_edge_overwrites_existing_cost() {
    let mut g = abc();
    g.set_edge("a", "c").unwrap();
    assert_eq!(g.edge("c", "a"), Some(0));
    g.set_edge_with_cost("a", "c", 12).unwrap();
    assert_eq!(g.edge("a", "c"), Some(12));
    assert_eq!(g.edge("c", "a"), Some(12));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn remove_edge_clears_both_directions_even_for_directed_edges() {
    let mut g = abc();
    g.set_directed_edge("a", "b", 5).unwrap();
    g.set_directed_edge("b", "a", 6).unwrap();

    assert!(g.remove_edge("a", "b").unwrap());
    assert_eq!(g.edge("a", "b"), None);
    assert_eq!(g.edge("b", "a"), None);
    assert!(!g.remove_edge("b", "a").unwrap());
}

#[test]
fn remove_directed_edge_clears_one_cell() {
    let mut g = abc();
    g.set_edge_with_cost("a", "b", 5).unwrap();

    assert!(g.remove_directed_edge("a", "b").unwrap());
    assert_eq!(g.edge("a", "b"), None);
    assert_eq!(g.edge("b", "a"), Some(5));
}

#[test]
fn undirected_edges_are_listed_in_both_directions() {
    let mut g = abc();
    g.set_edge_with_cost("a", "c", 2).unwrap();

    let edges: Vec<(&str, &str, i64)> = g.edges().map(Into::into).collect();
    assert_eq!(edges, vec![("a", "c", 2), ("c", "a", 2)]);
}

#[test]
fn successors_and_predecessors_respect_direction() {
    let mut g = abc();
    g.set_directed_edge("a", "b", 1).unwrap();
    g.set_edge("b", "c").unwrap();

    assert_eq!(g.successors("a"), vec!["b"]);
    assert_eq!(g.successors("b"), vec!["c"]);
    assert_eq!(g.predecessors("b"), vec!["a", "c"]);
    assert_eq!(g.predecessors("a"), Vec::<&str>::new());
    assert_eq!(g.successors("zzz"), Vec::<&str>::new());
}

#[test]
fn self_loops_use_the_diagonal() {
    let mut g = abc();
    g.set_edge_with_cost("b", "b", 4).unwrap();
    assert_eq!(g.raw_matrix().get(1, 1), Some(4));
    assert_eq!(g.edge_list(), vec![("b".to_string(), "b".to_string(), 4)]);
}
