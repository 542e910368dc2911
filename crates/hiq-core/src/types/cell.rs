//! 升目の状態

/// 升目の状態（盤外 / 空き穴 / ペグ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    OffBoard,
    Empty,
    Peg,
}

impl Cell {
    /// テキスト表現の1文字
    pub const fn to_char(self) -> char {
        match self {
            Cell::OffBoard => ' ',
            Cell::Empty => '.',
            Cell::Peg => 'o',
        }
    }

    /// テキスト表現からの変換。未知の文字は `None`
    pub const fn from_char(c: char) -> Option<Cell> {
        match c {
            'o' | 'x' | '1' => Some(Cell::Peg),
            '.' | '0' => Some(Cell::Empty),
            '-' | ' ' => Some(Cell::OffBoard),
            _ => None,
        }
    }
}
