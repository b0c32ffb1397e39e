use algotty::algos::graph::{BreadthFirst, DepthFirst};
use algotty::algos::queue::QueueOps;
use algotty::algos::two_pointer::{
    ArrayState,
    ContainerBruteForce, ContainerTwoPointer, TrapBruteForce, TrapTwoPointer,
};
use algotty::algos::TraceGenerator;
use algotty::input::{parse_graph, parse_heights, parse_queue_ops};
use algotty::trace::view::DisplayState;

const TRAP_INPUT: &str = "0,1,0,2,1,0,1,3,2,1,2,1";
const CONTAINER_INPUT: &str = "1,8,6,2,5,4,8,3,7";

#[test]
fn generation_is_deterministic() {
    let heights = parse_heights(TRAP_INPUT).expect("valid heights");
    let first = TrapTwoPointer.generate(&heights).expect("trace");
    let second = TrapTwoPointer.generate(&heights).expect("trace");
    assert_eq!(first, second);

    let graph = parse_graph("nodes: a b c d; edges: a-b a-c c-d; start: a").expect("valid graph");
    let first = BreadthFirst.generate(&graph).expect("trace");
    let second = BreadthFirst.generate(&graph).expect("trace");
    assert_eq!(first.len(), second.len());
    assert_eq!(first.snapshots(), second.snapshots());
}

#[test]
fn trap_terminal_result_is_six() {
    let heights = parse_heights(TRAP_INPUT).expect("valid heights");
    for generator in [
        &TrapTwoPointer as &dyn TraceGenerator<Params = Vec<i64>, State = ArrayState>,
        &TrapBruteForce,
    ] {
        let trace = generator.generate(&heights).expect("trace");
        let last = trace.last();
        assert!(last.terminal);
        assert_eq!(last.state.result, 6, "variant {}", generator.name());
    }
}

#[test]
fn container_terminal_result_is_forty_nine() {
    let heights = parse_heights(CONTAINER_INPUT).expect("valid heights");
    for generator in [
        &ContainerTwoPointer as &dyn TraceGenerator<Params = Vec<i64>, State = ArrayState>,
        &ContainerBruteForce,
    ] {
        let trace = generator.generate(&heights).expect("trace");
        let last = trace.last();
        assert!(last.terminal);
        assert_eq!(last.state.result, 49, "variant {}", generator.name());
    }
}

#[test]
fn only_the_last_snapshot_is_terminal() {
    let heights = parse_heights(TRAP_INPUT).expect("valid heights");
    let trace = TrapTwoPointer.generate(&heights).expect("trace");
    for snapshot in &trace.snapshots()[..trace.len() - 1] {
        assert!(!snapshot.terminal, "snapshot {} marked terminal", snapshot.index);
    }
    assert!(trace.last().terminal);
}

#[test]
fn snapshot_indices_are_contiguous() {
    let graph = parse_graph("nodes: a b c; edges: a-b b-c; start: a").expect("valid graph");
    let trace = DepthFirst.generate(&graph).expect("trace");
    for (i, snapshot) in trace.snapshots().iter().enumerate() {
        assert_eq!(snapshot.index, i);
    }
}

#[test]
fn early_snapshots_keep_their_own_state() {
    // The classic aliasing bug makes every snapshot show the final state.
    // Each snapshot must hold the values it was recorded with.
    let ops = parse_queue_ops("enqueue 5, enqueue 3, dequeue").expect("valid ops");
    let trace = QueueOps.generate(&ops).expect("trace");

    assert!(trace.get(0).expect("first snapshot").state.values().is_empty());
    assert_eq!(trace.last().state.values(), vec![3]);

    let heights = parse_heights(TRAP_INPUT).expect("valid heights");
    let trace = TrapTwoPointer.generate(&heights).expect("trace");
    assert_eq!(trace.get(0).expect("first snapshot").state.result, 0);
    assert_eq!(trace.last().state.result, 6);
}

#[test]
fn queue_scenario_matches_reference() {
    let ops = parse_queue_ops("enqueue 5, enqueue 3, dequeue").expect("valid ops");
    let trace = QueueOps.generate(&ops).expect("trace");
    let last = &trace.last().state;
    assert_eq!(last.values(), vec![3]);
    assert_eq!(last.total_enqueues, 2);
    assert_eq!(last.total_dequeues, 1);
}

#[test]
fn traversal_orders_differ_but_cover_the_component() {
    let graph = parse_graph("nodes: a b c d e; edges: a-b a-c b-d c-e; start: a").expect("graph");
    let bfs = BreadthFirst.generate(&graph).expect("trace");
    let dfs = DepthFirst.generate(&graph).expect("trace");
    assert_eq!(bfs.last().state.order, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(dfs.last().state.order, vec!["a", "b", "d", "c", "e"]);
}

#[test]
fn markers_always_point_at_existing_cells() {
    let heights = parse_heights(CONTAINER_INPUT).expect("valid heights");
    let trace = ContainerTwoPointer.generate(&heights).expect("trace");
    for snapshot in trace.snapshots() {
        let ids: Vec<String> = snapshot.state.cells().into_iter().map(|c| c.id).collect();
        for marker in snapshot.state.markers() {
            assert!(
                ids.contains(&marker.cell_id),
                "marker '{}' targets unknown cell '{}' in snapshot {}",
                marker.label,
                marker.cell_id,
                snapshot.index
            );
        }
    }
}

#[test]
fn source_lines_stay_inside_the_listing() {
    let heights = parse_heights(TRAP_INPUT).expect("valid heights");
    for generator in [
        &TrapTwoPointer as &dyn TraceGenerator<Params = Vec<i64>, State = ArrayState>,
        &TrapBruteForce,
    ] {
        let listing = generator.listing();
        let trace = generator.generate(&heights).expect("trace");
        for snapshot in trace.snapshots() {
            if let Some(line) = snapshot.source_line {
                assert!(line < listing.len(), "variant {}", generator.name());
            }
        }
    }
}

#[test]
fn every_snapshot_has_an_explanation() {
    let ops = parse_queue_ops("enqueue 1, dequeue, enqueue 2").expect("valid ops");
    let trace = QueueOps.generate(&ops).expect("trace");
    for snapshot in trace.snapshots() {
        assert!(!snapshot.explanation.is_empty());
    }
}
