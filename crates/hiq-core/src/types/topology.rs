//! 盤の形（Topology）

use super::Square;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ジャンプ方向（偶数ベクトル）
pub type Direction = (i8, i8);

const TRIANGLE_DIRECTIONS: [Direction; 6] = [(2, 0), (-2, 0), (0, 2), (0, -2), (2, 2), (-2, -2)];
const SQUARE_DIRECTIONS: [Direction; 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];
const HEXAGON_DIRECTIONS: [Direction; 8] =
    [(2, 0), (-2, 0), (0, 2), (0, -2), (2, 2), (-2, -2), (2, -2), (-2, 2)];

/// 盤の形
///
/// - `Triangle`: 5x5 の下三角（`x <= y`）、15穴
/// - `Square`: 7x7 の十字盤（英国式）、33穴
/// - `Hexagon`: 9x9 のひし形（`|x-4| + |y-4| <= 4`）、41穴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    Triangle,
    Square,
    Hexagon,
}

impl Topology {
    pub const ALL: [Topology; 3] = [Topology::Triangle, Topology::Square, Topology::Hexagon];

    #[inline]
    pub const fn width(self) -> usize {
        match self {
            Topology::Triangle => 5,
            Topology::Square => 7,
            Topology::Hexagon => 9,
        }
    }

    #[inline]
    pub const fn height(self) -> usize {
        self.width()
    }

    /// 盤内の升目か
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        let (x, y) = (sq.x, sq.y);
        let w = self.width() as i8;
        if x < 0 || y < 0 || x >= w || y >= w {
            return false;
        }
        match self {
            Topology::Triangle => x <= y,
            Topology::Square => (x >= 2 && x <= 4) || (y >= 2 && y <= 4),
            Topology::Hexagon => (x - 4).abs() + (y - 4).abs() <= 4,
        }
    }

    /// 合法手生成で使う方向の固定順リスト
    #[inline]
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Topology::Triangle => &TRIANGLE_DIRECTIONS,
            Topology::Square => &SQUARE_DIRECTIONS,
            Topology::Hexagon => &HEXAGON_DIRECTIONS,
        }
    }

    /// 初期局面で空けておく穴
    #[inline]
    pub const fn initial_hole(self) -> Square {
        match self {
            Topology::Triangle => Square::new(2, 2),
            Topology::Square => Square::new(3, 3),
            Topology::Hexagon => Square::new(4, 4),
        }
    }

    /// 盤内の升目を走査順（行優先）で列挙
    pub fn squares(self) -> impl Iterator<Item = Square> {
        let w = self.width();
        (0..w * self.height())
            .map(move |i| Square::from_index(i, w))
            .filter(move |&sq| self.contains(sq))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Topology::Triangle => "triangle",
            Topology::Square => "square",
            Topology::Hexagon => "hexagon",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 未知の盤名
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown board topology: {0} (expected triangle, square or hexagon)")]
pub struct ParseTopologyError(pub String);

impl FromStr for Topology {
    type Err = ParseTopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "triangle" | "tri" => Ok(Topology::Triangle),
            "square" | "cross" | "english" => Ok(Topology::Square),
            "hexagon" | "hex" | "diamond" => Ok(Topology::Hexagon),
            _ => Err(ParseTopologyError(s.to_string())),
        }
    }
}
