//! Common types for the solver

use crate::types::Move;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Bound value meaning "no solution reachable from here"
pub const UNBOUNDED: u32 = u32::MAX;

/// Outcome of one bounded probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Target peg count reached; the path is recorded by the task
    Found,
    /// Smallest `f = g + h` that exceeded the threshold, or [`UNBOUNDED`]
    Bound(u32),
}

impl Probe {
    /// Probe result for a pruned or infeasible branch
    pub const INFEASIBLE: Probe = Probe::Bound(UNBOUNDED);

    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Probe::Found)
    }
}

/// Why a `find_solution` call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// A search found a path
    Solved,
    /// The path came from the solution cache
    Cached,
    /// The wall-clock budget ran out
    TimeLimit,
    /// `stop()` was called
    UserStop,
    /// The search space was exhausted below the depth estimate
    NoSolution,
}

impl TerminationReason {
    /// Whether the result carries a solution path
    pub fn is_success(self) -> bool {
        matches!(self, TerminationReason::Solved | TerminationReason::Cached)
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TerminationReason::Solved => "solved",
            TerminationReason::Cached => "cached",
            TerminationReason::TimeLimit => "time limit",
            TerminationReason::UserStop => "stopped",
            TerminationReason::NoSolution => "no solution",
        };
        f.write_str(s)
    }
}

/// Search statistics
#[derive(Clone, Debug, Default, Serialize)]
pub struct SearchStats {
    /// Probe calls across all tasks
    pub nodes: u64,
    /// Threshold iterations started across all supervisors
    pub iterations: u64,
    /// Time elapsed
    pub elapsed: Duration,
    /// Number of supervisors that ran
    pub supervisors: usize,
}

/// Search result
#[derive(Clone, Debug, Serialize)]
pub struct SearchResult {
    /// Winning move sequence; empty unless `reason.is_success()`
    pub path: Vec<Move>,
    pub reason: TerminationReason,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn new(path: Vec<Move>, reason: TerminationReason, stats: SearchStats) -> Self {
        Self {
            path,
            reason,
            stats,
        }
    }

    /// Result without a path
    pub fn unsolved(reason: TerminationReason, stats: SearchStats) -> Self {
        Self::new(Vec::new(), reason, stats)
    }

    pub fn is_solved(&self) -> bool {
        self.reason.is_success()
    }
}

/// Progress notification passed to the `find_solution` callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// A supervisor starts a new threshold iteration
    Iteration {
        supervisor: usize,
        threshold: u32,
        max_depth: u32,
    },
    /// The call is about to return
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_reasons() {
        assert!(TerminationReason::Solved.is_success());
        assert!(TerminationReason::Cached.is_success());
        assert!(!TerminationReason::TimeLimit.is_success());
        assert!(!TerminationReason::UserStop.is_success());
        assert!(!TerminationReason::NoSolution.is_success());
    }

    #[test]
    fn test_infeasible_probe() {
        assert_eq!(Probe::INFEASIBLE, Probe::Bound(UNBOUNDED));
        assert!(!Probe::INFEASIBLE.is_found());
        assert!(Probe::Found.is_found());
    }
}
