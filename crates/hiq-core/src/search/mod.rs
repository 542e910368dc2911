//! 並列 IDA* 探索
//!
//! - [`Solver`]: 探索の起動と一時停止・再開・中断
//! - `supervisor`: しきい値ラダー（スーパーバイザごとに1本）
//! - `task`: ルート手ごとの逐次 DFS
//! - [`SearchControl`] / [`RunState`]: スレッド間で共有する状態

mod limits;
mod shared;
mod solver;
mod supervisor;
mod task;
mod types;

#[cfg(test)]
mod tests;

pub use limits::{DEFAULT_TIME_LIMIT_MS, SolverConfig};
pub use shared::{RunState, SearchControl};
pub use solver::Solver;
pub use supervisor::LadderOutcome;
pub use task::SearchTask;
pub use types::{Probe, Progress, SearchResult, SearchStats, TerminationReason, UNBOUNDED};
