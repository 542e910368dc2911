//! ビットボードによる盤面表現

use super::{BoardModel, Fingerprint};
use crate::error::{BoardError, BoardResult, MoveError};
use crate::types::{Cell, Move, Square, Topology};

/// ペグソリティアの盤面
///
/// ペグの配置を `u128` のビット集合（`y * width + x` 番目のビット）で持つ。
/// 盤外かどうかは `topology` から決まるので保持しない。
#[derive(Clone, Debug)]
pub struct Board {
    topology: Topology,
    pegs: u128,
    history: Vec<Move>,
}

impl Board {
    /// ペグのない盤
    pub fn empty(topology: Topology) -> Self {
        Self {
            topology,
            pegs: 0,
            history: Vec::new(),
        }
    }

    /// 標準の初期配置（中央付近の1穴以外すべてペグ）
    pub fn standard(topology: Topology) -> Self {
        let hole = topology.initial_hole();
        let pegs = topology
            .squares()
            .filter(|&sq| sq != hole)
            .fold(0u128, |acc, sq| acc | Self::bit_of(topology, sq));
        Self {
            topology,
            pegs,
            history: Vec::new(),
        }
    }

    /// 指定した升目にペグを置いた盤
    pub fn from_pegs<I>(topology: Topology, pegs: I) -> BoardResult<Self>
    where
        I: IntoIterator<Item = Square>,
    {
        let mut board = Self::empty(topology);
        for sq in pegs {
            board.set_peg(sq, true)?;
        }
        Ok(board)
    }

    #[inline]
    fn bit_of(topology: Topology, sq: Square) -> u128 {
        1u128 << sq.index(topology.width())
    }

    #[inline]
    fn bit(&self, sq: Square) -> u128 {
        Self::bit_of(self.topology, sq)
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn width(&self) -> usize {
        self.topology.width()
    }

    pub fn height(&self) -> usize {
        self.topology.height()
    }

    pub fn is_valid_position(&self, sq: Square) -> bool {
        self.topology.contains(sq)
    }

    pub fn cell(&self, sq: Square) -> Cell {
        if !self.is_valid_position(sq) {
            Cell::OffBoard
        } else if self.pegs & self.bit(sq) != 0 {
            Cell::Peg
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn is_peg(&self, sq: Square) -> bool {
        self.is_valid_position(sq) && self.pegs & self.bit(sq) != 0
    }

    /// ペグを置く / 取り除く。盤外の升目はエラー
    pub fn set_peg(&mut self, sq: Square, peg: bool) -> BoardResult<()> {
        if !self.is_valid_position(sq) {
            return Err(BoardError::OffBoard {
                square: sq,
                topology: self.topology,
            });
        }
        if peg {
            self.pegs |= self.bit(sq);
        } else {
            self.pegs &= !self.bit(sq);
        }
        Ok(())
    }

    /// 升目の状態を設定する
    ///
    /// 盤の形は固定なので、盤外に穴やペグを置くことも、穴を盤外にすることもできない。
    pub fn set_cell(&mut self, sq: Square, cell: Cell) -> BoardResult<()> {
        match cell {
            Cell::OffBoard if self.is_valid_position(sq) => Err(BoardError::FixedHole {
                square: sq,
                topology: self.topology,
            }),
            Cell::OffBoard => Ok(()),
            Cell::Empty => self.set_peg(sq, false),
            Cell::Peg => self.set_peg(sq, true),
        }
    }

    #[inline]
    pub fn peg_count(&self) -> u32 {
        self.pegs.count_ones()
    }

    /// ペグのある升目（走査順）
    pub fn peg_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.topology.squares().filter(|&sq| self.pegs & self.bit(sq) != 0)
    }

    /// 指し手の合法性チェック
    pub fn check_move(&self, mv: Move) -> Result<(), MoveError> {
        for sq in [mv.from, mv.over, mv.to] {
            if !self.is_valid_position(sq) {
                return Err(MoveError::OffBoard { mv, square: sq });
            }
        }
        if !mv.is_well_formed() {
            return Err(MoveError::Malformed { mv });
        }
        if !self.is_peg(mv.from) {
            return Err(MoveError::NoPegAtSource { mv });
        }
        if !self.is_peg(mv.over) {
            return Err(MoveError::NoPegToJump { mv });
        }
        if self.is_peg(mv.to) {
            return Err(MoveError::LandingOccupied { mv });
        }
        Ok(())
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// 合法手の列挙
    ///
    /// 行優先で升目を走査し、各ペグについて盤形の方向リスト順に試す。
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.peg_squares() {
            for &(dx, dy) in self.topology.directions() {
                let mv = Move::jump(from, dx, dy);
                if self.is_peg(mv.over)
                    && self.is_valid_position(mv.to)
                    && !self.is_peg(mv.to)
                {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    pub fn has_legal_move(&self) -> bool {
        self.peg_squares().any(|from| {
            self.topology.directions().iter().any(|&(dx, dy)| {
                let mv = Move::jump(from, dx, dy);
                self.is_peg(mv.over) && self.is_valid_position(mv.to) && !self.is_peg(mv.to)
            })
        })
    }

    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.check_move(mv)?;
        self.pegs &= !(self.bit(mv.from) | self.bit(mv.over));
        self.pegs |= self.bit(mv.to);
        self.history.push(mv);
        Ok(())
    }

    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.pegs &= !self.bit(mv.to);
        self.pegs |= self.bit(mv.from) | self.bit(mv.over);
        Some(mv)
    }

    /// 適用済みの手順
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// 標準の初期配置に戻す
    pub fn reset(&mut self) {
        *self = Self::standard(self.topology);
    }

    /// 残り1ペグ
    pub fn is_won(&self) -> bool {
        self.peg_count() == 1
    }

    /// 合法手がなく、ペグが2本以上残っている
    pub fn is_lost(&self) -> bool {
        self.peg_count() > 1 && !self.has_legal_move()
    }

    #[inline]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::new(self.pegs)
    }
}

// 手順（history）は局面の同一性に含めない
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.topology == other.topology && self.pegs == other.pegs
    }
}

impl Eq for Board {}

impl BoardModel for Board {
    fn topology(&self) -> Topology {
        self.topology
    }

    fn is_valid_position(&self, sq: Square) -> bool {
        Board::is_valid_position(self, sq)
    }

    fn is_peg(&self, sq: Square) -> bool {
        Board::is_peg(self, sq)
    }

    fn peg_count(&self) -> u32 {
        Board::peg_count(self)
    }

    fn legal_moves(&self) -> Vec<Move> {
        Board::legal_moves(self)
    }

    fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        Board::make_move(self, mv)
    }

    fn undo_move(&mut self) -> Option<Move> {
        Board::undo_move(self)
    }

    fn fingerprint(&self) -> Fingerprint {
        Board::fingerprint(self)
    }
}
