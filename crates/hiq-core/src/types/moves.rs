//! 指し手（Move）

use super::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ジャンプ1回分の指し手
///
/// `from` のペグが `over` のペグを飛び越えて `to` に着地する。
/// `to - from` は偶数ベクトルで、その中点が `over`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub over: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, over: Square, to: Square) -> Self {
        Self { from, over, to }
    }

    /// `from` から方向 `(dx, dy)`（偶数ベクトル）へのジャンプ
    #[inline]
    pub const fn jump(from: Square, dx: i8, dy: i8) -> Self {
        Self {
            from,
            over: from.offset(dx / 2, dy / 2),
            to: from.offset(dx, dy),
        }
    }

    /// 移動ベクトル
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        (self.to.x - self.from.x, self.to.y - self.from.y)
    }

    /// 偶数ベクトルかつ中点が `over` になっているか
    pub const fn is_well_formed(self) -> bool {
        let (dx, dy) = self.delta();
        if dx == 0 && dy == 0 {
            return false;
        }
        if dx % 2 != 0 || dy % 2 != 0 {
            return false;
        }
        self.over.x == self.from.x + dx / 2 && self.over.y == self.from.y + dy / 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_midpoint() {
        let mv = Move::jump(Square::new(0, 4), 2, 0);
        assert_eq!(mv.over, Square::new(1, 4));
        assert_eq!(mv.to, Square::new(2, 4));
        assert!(mv.is_well_formed());
    }

    #[test]
    fn test_odd_vector_is_malformed() {
        let mv = Move::new(Square::new(0, 0), Square::new(0, 0), Square::new(1, 1));
        assert!(!mv.is_well_formed());
    }

    #[test]
    fn test_display() {
        let mv = Move::jump(Square::new(3, 1), 0, 2);
        assert_eq!(mv.to_string(), "(3,1)->(3,3)");
    }
}
