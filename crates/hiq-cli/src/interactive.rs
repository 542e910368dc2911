//! 標準入力からの pause / resume / stop

use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;

use hiq_core::Solver;
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pause,
    Resume,
    Stop,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim().to_ascii_lowercase().as_str() {
            "pause" | "p" => Some(Command::Pause),
            "resume" | "r" | "continue" => Some(Command::Resume),
            "stop" | "s" | "quit" | "q" => Some(Command::Stop),
            _ => None,
        }
    }
}

pub fn apply(solver: &Solver, command: Command) {
    match command {
        Command::Pause => solver.pause(),
        Command::Resume => solver.resume(),
        Command::Stop => solver.stop(),
    }
}

/// 標準入力を読むスレッドを起動する。
///
/// EOF またはエラーで終了する。探索終了後も残るが detach しておく。
pub fn spawn_reader(solver: Arc<Solver>) -> io::Result<()> {
    thread::Builder::new().name("hiq-stdin".into()).spawn(move || {
        info!("commands: pause | resume | stop");
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!("stdin closed: {err}");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Some(command) => {
                    apply(&solver, command);
                    if command == Command::Stop {
                        break;
                    }
                }
                None => warn!("unknown command: {}", line.trim()),
            }
        }
    })?;
    Ok(())
}
