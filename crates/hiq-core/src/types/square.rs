//! 升目（Square）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤上の座標（x: 列, y: 行）
///
/// 盤外の座標も表現できる。合法性の判定は [`crate::board::BoardModel`] が行う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub x: i8,
    pub y: i8,
}

impl Square {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// (dx, dy) だけ平行移動した升目
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// 幅 `width` の盤での線形インデックス（盤内前提）
    #[inline]
    pub const fn index(self, width: usize) -> usize {
        self.y as usize * width + self.x as usize
    }

    /// 線形インデックスから生成
    #[inline]
    pub const fn from_index(index: usize, width: usize) -> Self {
        Self {
            x: (index % width) as i8,
            y: (index / width) as i8,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip_on_7x7() {
        let sq = Square::new(3, 5);
        assert_eq!(sq.index(7), 38);
        assert_eq!(Square::from_index(38, 7), sq);
    }

    #[test]
    fn test_offset_can_leave_board() {
        assert_eq!(Square::new(0, 1).offset(-2, 0), Square::new(-2, 1));
    }
}
