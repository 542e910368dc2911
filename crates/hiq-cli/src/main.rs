//! hiq-solve: ペグソリティアの最短手順を探索する

mod config;
mod interactive;
mod render;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use hiq_core::{Board, Progress, Solver, SolverConfig, Topology, replay};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest jump sequence for peg solitaire boards")]
struct Cli {
    /// 盤の形（triangle / square / hexagon）
    #[arg(long, default_value = "square")]
    board: Topology,

    /// 盤面ファイル（1行1段、o=ペグ .=穴 -=盤外）。未指定なら標準の初期配置
    #[arg(long)]
    file: Option<PathBuf>,

    /// 残すペグの数
    #[arg(long, default_value_t = 1)]
    target: u32,

    /// 時間制限（ミリ秒）
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// しきい値ラダーの数（0で自動）
    #[arg(long)]
    supervisors: Option<usize>,

    /// ワーカースレッド数（0で自動、1で決定的な逐次実行）
    #[arg(long)]
    threads: Option<usize>,

    /// SolverConfig の TOML ファイル
    #[arg(long)]
    config: Option<PathBuf>,

    /// 結果を JSON で出力
    #[arg(long)]
    json: bool,

    /// 標準入力から pause / resume / stop を受け付ける
    #[arg(long)]
    interactive: bool,
}

fn load_board(cli: &Cli) -> Result<Board> {
    match &cli.file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read board {}", path.display()))?;
            Board::parse(cli.board, &text)
                .with_context(|| format!("invalid {} board in {}", cli.board, path.display()))
        }
        None => Ok(Board::standard(cli.board)),
    }
}

fn load_config(cli: &Cli) -> Result<SolverConfig> {
    let base = match &cli.config {
        Some(path) => config::load(path)?,
        None => SolverConfig::default(),
    };
    let merged = config::apply_overrides(base, cli.time_limit_ms, cli.supervisors, cli.threads);
    merged.validate()?;
    Ok(merged)
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if cli.target == 0 {
        bail!("--target must be >= 1");
    }

    let board = load_board(&cli)?;
    let config = load_config(&cli)?;
    info!(
        "{} board with {} pegs, target {}, time limit {} ms",
        board.topology(),
        board.peg_count(),
        cli.target,
        config.time_limit_ms
    );

    let solver = Arc::new(Solver::new(board.clone(), cli.target).with_config(config));

    {
        let solver = Arc::clone(&solver);
        ctrlc::set_handler(move || {
            eprintln!("\nInterrupted!");
            solver.stop();
        })
        .context("Failed to set Ctrl-C handler")?;
    }

    if cli.interactive {
        interactive::spawn_reader(Arc::clone(&solver)).context("failed to start stdin reader")?;
    }

    let result = solver
        .find_solution(|progress| {
            if let Progress::Iteration {
                supervisor,
                threshold,
                max_depth,
            } = progress
            {
                info!("[{supervisor}] threshold {threshold} (max depth {max_depth})");
            }
        })
        .context("search failed")?;

    if result.is_solved() {
        let end = replay(&board, &result.path).context("solver returned an illegal path")?;
        if end.peg_count() > cli.target {
            bail!("path leaves {} pegs, expected at most {}", end.peg_count(), cli.target);
        }
    }

    if cli.json {
        println!("{}", render::json(&board, cli.target, &result)?);
    } else if result.is_solved() {
        print!("{}", render::text(&board, &result.path)?);
    }
    info!("{}", render::summary(&result));

    Ok(if result.is_solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
