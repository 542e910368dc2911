mod common;

use common::level1;
use hiq_core::{
    Board, BoardModel, Fingerprint, Move, MoveError, Solver, SolverConfig, Topology,
};

/// Board whose `make_move` rejects everything, including its own moves.
#[derive(Clone)]
struct RejectsMoves(Board);

impl BoardModel for RejectsMoves {
    fn topology(&self) -> Topology {
        self.0.topology()
    }

    fn is_peg(&self, sq: hiq_core::Square) -> bool {
        self.0.is_peg(sq)
    }

    fn peg_count(&self) -> u32 {
        self.0.peg_count()
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.0.legal_moves()
    }

    fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        Err(MoveError::Malformed { mv })
    }

    fn undo_move(&mut self) -> Option<Move> {
        self.0.undo_move()
    }

    fn fingerprint(&self) -> Fingerprint {
        self.0.fingerprint()
    }
}

/// Board that applies moves but loses its history on undo.
#[derive(Clone)]
struct ForgetsUndo(Board);

impl BoardModel for ForgetsUndo {
    fn topology(&self) -> Topology {
        self.0.topology()
    }

    fn is_peg(&self, sq: hiq_core::Square) -> bool {
        self.0.is_peg(sq)
    }

    fn peg_count(&self) -> u32 {
        self.0.peg_count()
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.0.legal_moves()
    }

    fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.0.make_move(mv)
    }

    fn undo_move(&mut self) -> Option<Move> {
        None
    }

    fn fingerprint(&self) -> Fingerprint {
        self.0.fingerprint()
    }
}

#[test]
#[should_panic(expected = "generated move was rejected")]
fn rejected_generated_move_is_fatal_inline() {
    let solver = Solver::new(RejectsMoves(level1()), 1)
        .with_config(SolverConfig::new().deterministic());
    let _ = solver.solve();
}

#[test]
#[should_panic(expected = "generated move was rejected")]
fn rejected_generated_move_is_fatal_on_pool() {
    let solver = Solver::new(RejectsMoves(level1()), 1)
        .with_config(SolverConfig::new().supervisors(2).worker_threads(2));
    let _ = solver.solve();
}

#[test]
#[should_panic(expected = "failed to undo generated move")]
fn lost_undo_is_fatal() {
    let solver = Solver::new(ForgetsUndo(level1()), 1)
        .with_config(SolverConfig::new().deterministic());
    let _ = solver.solve();
}
