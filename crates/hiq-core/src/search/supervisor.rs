//! Threshold ladders
//!
//! Supervisor `i` of `n` tries thresholds `h0 + i`, `h0 + i + n`, ... and
//! fans out one [`SearchTask`] per legal root move at each threshold.

use log::debug;
use rayon::ThreadPool;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::board::BoardModel;
use crate::types::Move;

use super::shared::{RunState, SearchControl};
use super::task::{SearchTask, apply_generated};
use super::types::{Probe, Progress, UNBOUNDED};

/// How a ladder ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LadderOutcome {
    /// Some task committed a solution
    Solved,
    /// Stopped or timed out
    Interrupted,
    /// Threshold went past the depth estimate
    DepthExceeded,
    /// No root moves, or no finite bound left
    Exhausted,
}

pub(crate) struct Supervisor<'a, B: BoardModel> {
    pub index: usize,
    pub step: u32,
    pub root: &'a B,
    pub root_moves: &'a [Move],
    pub max_depth: u32,
    pub control: &'a SearchControl,
    pub run: &'a RunState,
    /// `None` runs root tasks inline in enumeration order
    pub pool: Option<&'a ThreadPool>,
}

impl<B: BoardModel> Supervisor<'_, B> {
    fn interrupted(&self) -> bool {
        self.control.is_stopped()
            || self.control.has_timed_out()
            || self.run.budget_exhausted(self.control)
    }

    pub fn run<F>(&self, base_heuristic: u32, progress: &F) -> LadderOutcome
    where
        F: Fn(Progress) + Sync,
    {
        let mut threshold = base_heuristic + self.index as u32;
        loop {
            if self.run.is_found() {
                return LadderOutcome::Solved;
            }
            if self.interrupted() {
                return LadderOutcome::Interrupted;
            }

            progress(Progress::Iteration {
                supervisor: self.index,
                threshold,
                max_depth: self.max_depth,
            });
            self.run.add_iteration();

            if threshold > self.max_depth + 2 {
                debug!(
                    "supervisor {}: threshold {threshold} exceeds depth estimate {}",
                    self.index, self.max_depth
                );
                return LadderOutcome::DepthExceeded;
            }
            if self.root_moves.is_empty() {
                return LadderOutcome::Exhausted;
            }

            let next_bound = AtomicU32::new(UNBOUNDED);
            match self.pool {
                Some(pool) => pool.scope(|scope| {
                    for &mv in self.root_moves {
                        let next_bound = &next_bound;
                        scope.spawn(move |_| self.run_root_task(mv, threshold, next_bound));
                    }
                }),
                None => {
                    for &mv in self.root_moves {
                        self.run_root_task(mv, threshold, &next_bound);
                    }
                }
            }

            if self.run.is_found() {
                return LadderOutcome::Solved;
            }
            if self.control.is_stopped() || self.control.has_timed_out() {
                return LadderOutcome::Interrupted;
            }

            let next = next_bound.into_inner();
            if next == UNBOUNDED {
                debug!("supervisor {}: no finite bound above {threshold}", self.index);
                return LadderOutcome::Exhausted;
            }
            let previous = threshold;
            threshold = (threshold + self.step).max(next);
            debug!(
                "supervisor {}: threshold {previous} -> {threshold} (min bound {next})",
                self.index
            );
        }
    }

    fn run_root_task(&self, mv: Move, threshold: u32, next_bound: &AtomicU32) {
        if self.run.is_found() || self.control.has_timed_out() || self.control.is_stopped() {
            return;
        }

        let mut board = self.root.clone();
        apply_generated(&mut board, mv);

        let mut task = SearchTask::new(self.control, self.run);
        let result = task.probe(&mut board, 1, threshold);
        self.run.add_nodes(task.nodes());

        match result {
            Probe::Found => {
                let mut path = Vec::with_capacity(self.max_depth as usize);
                path.push(mv);
                path.extend(task.into_path());
                self.run.commit(path, self.control);
            }
            Probe::Bound(bound) if bound < UNBOUNDED => {
                next_bound.fetch_min(bound, Ordering::Relaxed);
            }
            Probe::Bound(_) => {}
        }
    }
}
