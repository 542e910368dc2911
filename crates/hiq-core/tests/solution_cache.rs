mod common;

use common::{level1, level1_solution};
use hiq_core::{Progress, SolutionCache, Solver, SolverConfig, TerminationReason};
use parking_lot::Mutex;
use std::sync::Arc;

#[test]
fn second_call_is_served_from_cache() {
    let solver = Solver::with_defaults(level1()).with_config(SolverConfig::new().deterministic());
    let first = solver.solve().expect("search runs");
    assert_eq!(first.reason, TerminationReason::Solved);
    assert_eq!(solver.cache().len(), 1);

    let events = Mutex::new(Vec::new());
    let second = solver.find_solution(|p| events.lock().push(p)).expect("cache hit");

    assert_eq!(second.reason, TerminationReason::Cached);
    assert_eq!(second.path, first.path);
    assert_eq!(second.stats.nodes, 0);
    assert_eq!(events.into_inner(), vec![Progress::Finished]);
}

#[test]
fn injected_cache_is_shared_between_solvers() {
    let cache = Arc::new(SolutionCache::new());
    let config = SolverConfig::new().deterministic();

    let a = Solver::with_defaults(level1()).with_config(config).with_cache(Arc::clone(&cache));
    assert_eq!(a.solve().unwrap().path, level1_solution());

    let b = Solver::with_defaults(level1()).with_config(config).with_cache(Arc::clone(&cache));
    let result = b.solve().unwrap();
    assert_eq!(result.reason, TerminationReason::Cached);
    assert_eq!(result.path, level1_solution());
}

#[test]
fn different_target_is_not_a_hit() {
    let cache = Arc::new(SolutionCache::new());
    let config = SolverConfig::new().deterministic();
    Solver::new(level1(), 1).with_config(config).with_cache(Arc::clone(&cache)).solve().unwrap();

    let result =
        Solver::new(level1(), 2).with_config(config).with_cache(Arc::clone(&cache)).solve().unwrap();
    assert_eq!(result.reason, TerminationReason::Solved);
    assert_eq!(result.path.len(), 3);
    assert_eq!(cache.len(), 2);
}

#[test]
fn unsolved_runs_are_not_cached() {
    let solver = Solver::with_defaults(common::board(
        hiq_core::Topology::Triangle,
        &[(0, 0), (2, 4)],
    ));
    assert_eq!(solver.solve().unwrap().reason, TerminationReason::NoSolution);
    assert!(solver.cache().is_empty());
}
