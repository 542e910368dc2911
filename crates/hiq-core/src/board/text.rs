//! 盤面のテキスト表現
//!
//! 1行が1段。`o` / `x` / `1` がペグ、`.` / `0` が空き穴、`-` / 空白が盤外。
//! 短い行は右側を盤外として扱う。
//!
//! ```text
//!   ...
//!   .o.
//! ..ooo..
//! ```

use super::Board;
use crate::error::{BoardError, BoardResult};
use crate::types::{Cell, Square, Topology};
use std::fmt;

impl Board {
    /// テキストから盤面を作る
    pub fn parse(topology: Topology, text: &str) -> BoardResult<Self> {
        let (width, height) = (topology.width(), topology.height());
        let mut board = Board::empty(topology);

        for (y, line) in text.lines().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let square = Square::new(clamp_coord(x), clamp_coord(y));
                let cell = Cell::from_char(ch).ok_or(BoardError::UnknownCell { ch, square })?;
                if cell == Cell::OffBoard {
                    continue;
                }
                if x >= width || y >= height {
                    return Err(BoardError::OutOfGrid {
                        square,
                        topology,
                        width,
                        height,
                    });
                }
                board.set_peg(square, cell == Cell::Peg)?;
            }
        }

        Ok(board)
    }
}

fn clamp_coord(v: usize) -> i8 {
    i8::try_from(v).unwrap_or(i8::MAX)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut row = String::with_capacity(self.width());
        for y in 0..self.height() {
            row.clear();
            for x in 0..self.width() {
                row.push(self.cell(Square::new(x as i8, y as i8)).to_char());
            }
            if y > 0 {
                writeln!(f)?;
            }
            f.write_str(row.trim_end())?;
        }
        Ok(())
    }
}
