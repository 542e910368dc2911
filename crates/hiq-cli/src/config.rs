//! 設定ファイル（TOML）とコマンドライン引数の合成

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hiq_core::SolverConfig;

/// TOML から `SolverConfig` を読み込む。未指定の項目は既定値
pub fn load(path: &Path) -> Result<SolverConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse(text: &str) -> Result<SolverConfig> {
    Ok(toml::from_str(text)?)
}

/// コマンドラインで指定された値で上書きする
pub fn apply_overrides(
    mut config: SolverConfig,
    time_limit_ms: Option<u64>,
    supervisors: Option<usize>,
    threads: Option<usize>,
) -> SolverConfig {
    if let Some(ms) = time_limit_ms {
        config = config.time_limit_ms(ms);
    }
    if let Some(n) = supervisors {
        config = config.supervisors(n);
    }
    if let Some(n) = threads {
        config = config.worker_threads(n);
    }
    config
}
