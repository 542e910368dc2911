//! 解の表示（テキスト / JSON）

use std::fmt::Write as _;

use anyhow::Result;
use hiq_core::{Board, Move, SearchResult, Topology};
use serde::Serialize;

/// `--json` の出力
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub topology: Topology,
    pub pegs: u32,
    pub target: u32,
    #[serde(flatten)]
    pub result: &'a SearchResult,
}

pub fn json(board: &Board, target: u32, result: &SearchResult) -> Result<String> {
    let report = Report {
        topology: board.topology(),
        pegs: board.peg_count(),
        target,
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// 初期局面と、各手の後の局面を順に並べる
pub fn text(board: &Board, path: &[Move]) -> Result<String> {
    let mut out = String::new();
    let mut current = board.clone();
    writeln!(out, "start ({} pegs):\n{current}\n", current.peg_count())?;
    for (i, &mv) in path.iter().enumerate() {
        current.make_move(mv)?;
        writeln!(out, "{:>2}. {mv}\n{current}\n", i + 1)?;
    }
    Ok(out)
}

pub fn summary(result: &SearchResult) -> String {
    format!(
        "{}: {} moves, {} nodes, {} iterations, {:.3}s",
        result.reason,
        result.path.len(),
        result.stats.nodes,
        result.stats.iterations,
        result.stats.elapsed.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiq_core::{SearchStats, Square, TerminationReason};

    fn single_jump() -> (Board, Vec<Move>) {
        let board = Board::parse(Topology::Triangle, ".\n..\n...\n....\noo...").unwrap();
        (board, vec![Move::jump(Square::new(0, 4), 2, 0)])
    }

    #[test]
    fn test_text_shows_each_position() {
        let (board, path) = single_jump();
        let out = text(&board, &path).unwrap();
        assert!(out.starts_with("start (2 pegs):"));
        assert!(out.contains(" 1. (0,4)->(2,4)"));
        assert!(out.contains("..o.."));
    }

    #[test]
    fn test_text_rejects_illegal_path() {
        let (board, _) = single_jump();
        assert!(text(&board, &[Move::jump(Square::new(1, 4), 2, 0)]).is_err());
    }

    #[test]
    fn test_json_report() {
        let (board, path) = single_jump();
        let result = SearchResult::new(path, TerminationReason::Solved, SearchStats::default());
        let value: serde_json::Value = serde_json::from_str(&json(&board, 1, &result).unwrap()).unwrap();
        assert_eq!(value["topology"], "triangle");
        assert_eq!(value["pegs"], 2);
        assert_eq!(value["reason"], "solved");
        assert_eq!(value["path"][0]["to"]["x"], 2);
    }
}
