//! 探索設定（SolverConfig）
//!
//! 時間制限とスレッド数。TOML などから serde で読み込める。

use crate::error::{SolverError, SolverResult};
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;

/// 既定の時間制限（10分）
pub const DEFAULT_TIME_LIMIT_MS: u64 = 600_000;

/// ソルバーの設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// 探索全体の時間制限（ミリ秒、0 は不正）
    pub time_limit_ms: u64,

    /// しきい値ラダーの数（0なら自動: max(1, 論理CPU数 / 2)）
    pub supervisors: usize,

    /// ルート手タスクを走らせるワーカー数（0なら自動: 論理CPU数）
    /// 1 のときはスーパーバイザのスレッド上で列挙順に実行する
    pub worker_threads: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            supervisors: 0,
            worker_threads: 0,
        }
    }
}

fn available_parallelism() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 時間制限を設定
    pub fn time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// スーパーバイザ数を設定（0で自動）
    pub fn supervisors(mut self, n: usize) -> Self {
        self.supervisors = n;
        self
    }

    /// ワーカー数を設定（0で自動）
    pub fn worker_threads(mut self, n: usize) -> Self {
        self.worker_threads = n;
        self
    }

    /// 単一スレッドで決定的に動く設定
    pub fn deterministic(self) -> Self {
        self.supervisors(1).worker_threads(1)
    }

    /// 実際に起動するスーパーバイザ数
    pub fn supervisor_count(&self) -> usize {
        match self.supervisors {
            0 => (available_parallelism() / 2).max(1),
            n => n,
        }
    }

    /// 実際のワーカー数
    pub fn worker_count(&self) -> usize {
        match self.worker_threads {
            0 => available_parallelism(),
            n => n,
        }
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    pub fn validate(&self) -> SolverResult<()> {
        if self.time_limit_ms == 0 {
            return Err(SolverError::InvalidConfig("time_limit_ms must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.time_limit(), Duration::from_secs(600));
        assert!(config.supervisor_count() >= 1);
        assert!(config.worker_count() >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = SolverConfig::new().time_limit_ms(50).supervisors(3).worker_threads(2);
        assert_eq!(config.time_limit_ms, 50);
        assert_eq!(config.supervisor_count(), 3);
        assert_eq!(config.worker_count(), 2);

        let det = SolverConfig::new().deterministic();
        assert_eq!((det.supervisor_count(), det.worker_count()), (1, 1));
    }

    #[test]
    fn test_zero_time_limit_is_rejected() {
        let err = SolverConfig::new().time_limit_ms(0).validate().unwrap_err();
        assert!(matches!(err, SolverError::InvalidConfig(_)));
    }
}
