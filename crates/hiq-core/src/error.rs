//! Error types for board construction, move application and solver setup.

use crate::types::{Move, Square, Topology};

/// Errors raised while building a board from text or explicit cells.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Character that is not part of the board text format
    #[error("unknown cell character {ch:?} at {square}")]
    UnknownCell { ch: char, square: Square },

    /// Row or column outside the topology's grid
    #[error("{square} lies outside the {width}x{height} grid of a {topology} board")]
    OutOfGrid {
        square: Square,
        topology: Topology,
        width: usize,
        height: usize,
    },

    /// Hole or peg placed on a square the topology does not contain
    #[error("{square} is not a hole on a {topology} board")]
    OffBoard { square: Square, topology: Topology },

    /// Attempt to turn a hole of the topology into an off-board square
    #[error("{square} is a hole of every {topology} board and cannot be removed")]
    FixedHole { square: Square, topology: Topology },
}

/// Why a move was rejected by the board.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("{mv}: {square} is off the board")]
    OffBoard { mv: Move, square: Square },

    #[error("{mv}: no peg on the source square")]
    NoPegAtSource { mv: Move },

    #[error("{mv}: no peg to jump over")]
    NoPegToJump { mv: Move },

    #[error("{mv}: landing square is occupied")]
    LandingOccupied { mv: Move },

    #[error("{mv}: not a jump over an adjacent peg")]
    Malformed { mv: Move },
}

/// Errors surfaced by [`crate::search::Solver`].
#[derive(thiserror::Error, Debug)]
pub enum SolverError {
    /// Invalid solver configuration
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),

    /// Worker pool could not be created
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Supervisor thread could not be spawned
    #[error("failed to spawn supervisor thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// A move in a path could not be replayed
    #[error(transparent)]
    IllegalMove(#[from] MoveError),
}

/// Result type for board construction
pub type BoardResult<T> = Result<T, BoardError>;

/// Result type for solver operations
pub type SolverResult<T> = Result<T, SolverError>;
