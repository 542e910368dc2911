//! One bounded depth-first probe (a single IDA* iteration below a root move)

use std::collections::HashMap;

use crate::board::{BoardModel, Fingerprint};
use crate::eval::heuristic;
use crate::types::Move;

use super::shared::{RunState, SearchControl};
use super::types::{Probe, UNBOUNDED};

/// Apply a move produced by `legal_moves`.
///
/// # Panics
/// If the board rejects a move it generated itself.
pub(crate) fn apply_generated<B: BoardModel>(board: &mut B, mv: Move) {
    if let Err(err) = board.make_move(mv) {
        panic!("generated move was rejected by the board: {err}");
    }
}

/// Undo a move applied with [`apply_generated`].
///
/// # Panics
/// If the board does not hand back `mv`.
pub(crate) fn undo_generated<B: BoardModel>(board: &mut B, mv: Move) {
    let undone = board.undo_move();
    assert_eq!(undone, Some(mv), "board failed to undo generated move {mv}");
}

/// Sequential DFS with private memoization.
///
/// Caches are never shared between tasks.
pub struct SearchTask<'a> {
    control: &'a SearchControl,
    run: &'a RunState,
    heuristic_cache: HashMap<Fingerprint, u32>,
    transpositions: HashMap<Fingerprint, u32>,
    /// Moves of the found path, deepest first
    path: Vec<Move>,
    nodes: u64,
}

impl<'a> SearchTask<'a> {
    pub fn new(control: &'a SearchControl, run: &'a RunState) -> Self {
        Self {
            control,
            run,
            heuristic_cache: HashMap::new(),
            transpositions: HashMap::new(),
            path: Vec::new(),
            nodes: 0,
        }
    }

    /// Probe calls made by this task
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Entries in the heuristic cache and the transposition table
    pub fn table_sizes(&self) -> (usize, usize) {
        (self.heuristic_cache.len(), self.transpositions.len())
    }

    /// Moves from `board` to the goal after a [`Probe::Found`]
    pub fn into_path(mut self) -> Vec<Move> {
        self.path.reverse();
        self.path
    }

    /// Search below `board`, which was reached in `g` moves.
    ///
    /// The board is restored before returning.
    pub fn probe<B: BoardModel>(&mut self, board: &mut B, g: u32, threshold: u32) -> Probe {
        self.nodes += 1;

        if self.control.is_stopped() {
            return Probe::INFEASIBLE;
        }
        self.control.wait_while_paused();
        if self.control.is_stopped() || self.control.has_timed_out() || self.run.is_found() {
            return Probe::INFEASIBLE;
        }
        if self.run.budget_exhausted(self.control) {
            return Probe::INFEASIBLE;
        }
        if g >= self.run.best_depth() {
            return Probe::INFEASIBLE;
        }

        let key = board.fingerprint();
        let h = *self
            .heuristic_cache
            .entry(key)
            .or_insert_with(|| heuristic(&*board));
        let f = g.saturating_add(h);
        if f > threshold {
            return Probe::Bound(f);
        }

        if let Some(&bound) = self.transpositions.get(&key) {
            if bound <= f {
                return Probe::Bound(bound);
            }
        }

        if board.peg_count() <= self.run.target() {
            self.run.lower_best_depth(g);
            return Probe::Found;
        }

        let mut min_bound = UNBOUNDED;
        for mv in board.legal_moves() {
            apply_generated(board, mv);
            let result = self.probe(board, g + 1, threshold);
            undo_generated(board, mv);

            if self.control.is_stopped() {
                return Probe::INFEASIBLE;
            }
            match result {
                Probe::Found => {
                    self.path.push(mv);
                    return Probe::Found;
                }
                Probe::Bound(bound) => min_bound = min_bound.min(bound),
            }
        }

        self.transpositions.insert(key, min_bound);
        Probe::Bound(min_bound)
    }
}
