use adjmat::Error;
use adjmat::matrix::multiply;

#[test]
fn multiply_rectangular() {
    // https://www.mathsisfun.com/algebra/matrix-multiplying.html
    let a = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let b = vec![vec![7, 8], vec![9, 10], vec![11, 12]];
    assert_eq!(
        multiply(&a, &b).unwrap(),
        vec![vec![58, 64], vec![139, 154]]
    );
}

#[test]
fn multiply_row_by_column() {
    // pies sold
    let a = vec![vec![3, 4, 2]];
    let b = vec![vec![13], vec![8], vec![6]];
    assert_eq!(multiply(&a, &b).unwrap(), vec![vec![83]]);
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let a = vec![vec![1, 2]];
    let b = vec![vec![1, 2]];
    assert_eq!(
        multiply(&a, &b).unwrap_err(),
        Error::DimensionMismatch {
            left_cols: 2,
            right_rows: 1
        }
    );
}

#[test]
fn overflowing_product_is_an_error() {
    assert_eq!(
        multiply(&[vec![i64::MAX]], &[vec![2]]).unwrap_err(),
        Error::Overflow { row: 0, col: 0 }
    );
    // Each term fits, the sum does not.
    let a = vec![vec![1, 2], vec![i64::MAX, i64::MAX]];
    let b = vec![vec![1], vec![1]];
    assert_eq!(multiply(&a, &b).unwrap_err(), Error::Overflow { row: 1, col: 0 });
}

#[test]
fn empty_left_operand_gives_empty_product() {
    assert!(multiply(&[], &[vec![1]]).unwrap().is_empty());
}

#[test]
fn squaring_a_connectivity_matrix_counts_two_step_walks() {
    let mut g = adjmat::Graph::new(3);
    g.bind_vertex(0, "a").unwrap();
    g.bind_vertex(1, "b").unwrap();
    g.bind_vertex(2, "c").unwrap();
    g.set_edge_with_cost("a", "b", 1).unwrap();
    g.set_edge_with_cost("b", "c", 1).unwrap();

    let ones: Vec<Vec<i64>> = g
        .raw_matrix()
        .rows()
        .map(|row| row.iter().map(|c| i64::from(c.is_some())).collect())
        .collect();
    assert_eq!(
        multiply(&ones, &ones).unwrap(),
        vec![vec![1, 0, 1], vec![0, 2, 0], vec![1, 0, 1]]
    );
}
