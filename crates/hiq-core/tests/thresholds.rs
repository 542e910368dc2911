mod common;

use common::board;
use hiq_core::eval::heuristic;
use hiq_core::{Progress, Solver, SolverConfig, Topology};
use parking_lot::Mutex;
use std::collections::BTreeMap;

#[test]
fn each_ladder_is_non_decreasing_and_offset() {
    let root = board(Topology::Square, &[(3, 0), (3, 1), (3, 3), (3, 4)]);
    let h0 = heuristic(&root);
    let supervisors = 3;
    let solver = Solver::with_defaults(root)
        .with_config(SolverConfig::new().supervisors(supervisors).worker_threads(2));

    let events = Mutex::new(Vec::new());
    let result = solver
        .find_solution(|p| {
            if let Progress::Iteration { supervisor, threshold, max_depth } = p {
                events.lock().push((supervisor, threshold, max_depth));
            }
        })
        .expect("search runs");
    assert!(!result.is_solved());

    let mut ladders: BTreeMap<usize, Vec<u32>> = BTreeMap::new();
    for (supervisor, threshold, max_depth) in events.into_inner() {
        assert_eq!(max_depth, 3);
        ladders.entry(supervisor).or_default().push(threshold);
    }
    assert_eq!(ladders.len(), supervisors);
    for (index, thresholds) in ladders {
        assert_eq!(thresholds[0], h0 + index as u32);
        assert!(
            thresholds.windows(2).all(|w| w[0] <= w[1]),
            "supervisor {index}: {thresholds:?}"
        );
    }
}
