use adjmat::{Error, GraphOptions, NO_EDGE, Script, Step, VertexRemoval};

const N: i64 = NO_EDGE;

#[test]
fn claw_script_binds_sorted_labels_then_edges() {
    let script = Script::from_specs(["d-a", "b-d", "c-d"], false).unwrap();
    assert_eq!(script.capacity(), 4);

    let steps: Vec<String> = script.pending().map(ToString::to_string).collect();
    assert_eq!(
        steps,
        vec![
            "bind a @ 0",
            "bind b @ 1",
            "bind c @ 2",
            "bind d @ 3",
            "set d-a",
            "set b-d",
            "set c-d",
        ]
    );
}

#[test]
fn stepping_grows_the_graph() {
    let mut script = Script::from_specs(["a-b:5", "c"], false).unwrap();
    let mut g = script.graph();

    assert_eq!(
        script.step(&mut g).unwrap(),
        Some(&Step::BindVertex {
            slot: 0,
            label: "a".to_string()
        })
    );
    assert_eq!(g.vertices().collect::<Vec<_>>(), vec!["a"]);

    assert_eq!(script.run(&mut g).unwrap(), 3);
    assert!(script.is_done());
    assert_eq!(script.history().len(), 4);
    assert_eq!(g.vertices().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(
        g.raw_matrix().to_dense(),
        vec![vec![N, 5, N], vec![5, N, N], vec![N, N, N]]
    );
    assert_eq!(script.step(&mut g).unwrap(), None);
}

#[test]
fn directed_flag_and_arrows_queue_directed_edges() {
    let mut script = Script::from_specs(["a-b:2", "b>c"], true).unwrap();
    let mut g = script.graph();
    script.run(&mut g).unwrap();

    assert_eq!(g.edge("a", "b"), Some(2));
    assert_eq!(g.edge("b", "a"), None);
    assert_eq!(g.edge("b", "c"), Some(0));
    assert_eq!(g.edge("c", "b"), None);
}

#[test]
fn pushed_removals_run_after_the_build() {
    let mut script = Script::from_specs(["a-b", "b-c", "a-c"], false).unwrap();
    script.push(Step::RemoveEdge {
        source: "c".to_string(),
        target: "a".to_string(),
    });
    script.push(Step::UnbindVertex {
        label: "b".to_string(),
    });

    let mut g = script
        .graph_with(GraphOptions {
            vertex_removal: VertexRemoval::Cascade,
            ..Default::default()
        })
        .unwrap();
    script.run(&mut g).unwrap();

    assert_eq!(g.vertices().collect::<Vec<_>>(), vec!["a", "c"]);
    assert_eq!(g.raw_matrix().filled(), 0);
}

#[test]
fn failing_step_stays_queued() {
    let mut script = Script::from_specs(["a-b"], false).unwrap();
    script.push(Step::UnbindVertex {
        label: "zzz".to_string(),
    });
    let mut g = script.graph();

    let err = script.run(&mut g).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownVertex {
            label: "zzz".to_string()
        }
    );
    assert_eq!(script.history().len(), 3);
    assert_eq!(script.pending().count(), 1);
    assert!(g.has_edge("a", "b"));
}

#[test]
fn malformed_spec_fails_the_whole_script() {
    assert_eq!(
        Script::from_specs(["a-b", "x-"], false).unwrap_err(),
        Error::InvalidSpec {
            spec: "x-".to_string()
        }
    );
}
