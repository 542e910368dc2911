//! # hiq-core
//!
//! ペグソリティア（Hi-Q）の最短手順を並列 IDA* で求めるライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Square, Move, Cell, Topology）
//! - `board`: 盤面表現と合法手生成、テキスト形式
//! - `eval`: 島数による残り手数の下界
//! - `search`: 並列探索とその制御
//! - `cache`: 解のキャッシュ
//! - `error`: エラー型
//!
//! ```no_run
//! use hiq_core::{Board, Solver, Topology};
//!
//! let solver = Solver::with_defaults(Board::standard(Topology::Triangle));
//! let result = solver.solve()?;
//! for mv in &result.path {
//!     println!("{mv}");
//! }
//! # Ok::<(), hiq_core::SolverError>(())
//! ```

pub mod types;

pub mod board;

pub mod eval;

pub mod search;

pub mod cache;

pub mod error;

pub use board::{Board, BoardModel, Fingerprint, replay};
pub use cache::{CacheKey, SolutionCache};
pub use error::{BoardError, BoardResult, MoveError, SolverError, SolverResult};
pub use search::{
    Progress, SearchResult, SearchStats, Solver, SolverConfig, TerminationReason,
};
pub use types::{Cell, Direction, Move, Square, Topology};
