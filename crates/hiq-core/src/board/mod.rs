//! 盤面モデル
//!
//! 探索が盤面に要求する能力を [`BoardModel`] トレイトとして定義し、
//! 3種類の盤形（三角・十字・六角）を1つの [`Board`] 型で実装する。

mod state;
mod text;

pub use state::Board;

use crate::error::MoveError;
use crate::types::{Direction, Move, Square, Topology};
use std::fmt;

/// 局面の正規化キー
///
/// ペグのある升目の集合だけから決まる（手順・空き穴と盤外の区別には依存しない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(u128);

impl Fingerprint {
    #[inline]
    pub const fn new(occupancy: u128) -> Self {
        Self(occupancy)
    }

    #[inline]
    pub const fn raw(self) -> u128 {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// 探索から見た盤面の能力
///
/// 探索スレッドごとに盤面を clone して使うため `Clone + Send + Sync` を要求する。
pub trait BoardModel: Clone + Send + Sync {
    /// 盤の形
    fn topology(&self) -> Topology;

    /// 盤内の升目か
    fn is_valid_position(&self, sq: Square) -> bool {
        self.topology().contains(sq)
    }

    /// ペグがあるか（盤外は常に false）
    fn is_peg(&self, sq: Square) -> bool;

    /// 残りペグ数
    fn peg_count(&self) -> u32;

    /// 合法手の列挙（走査順 → 方向リスト順で決定的）
    fn legal_moves(&self) -> Vec<Move>;

    /// 指し手を適用する。不正な手は盤面を変更せずにエラーを返す
    fn make_move(&mut self, mv: Move) -> Result<(), MoveError>;

    /// 直前の手を戻す。履歴が空なら `None`
    fn undo_move(&mut self) -> Option<Move>;

    /// 局面の正規化キー
    fn fingerprint(&self) -> Fingerprint;

    /// ジャンプ方向（島の隣接関係にも使う）
    fn jump_directions(&self) -> &'static [Direction] {
        self.topology().directions()
    }
}

/// `path` を先頭から順に適用した盤面を返す。
///
/// 途中で不正な手があればその手のエラーを返す（元の盤面は変更しない）。
pub fn replay<B: BoardModel>(board: &B, path: &[Move]) -> Result<B, MoveError> {
    let mut board = board.clone();
    for &mv in path {
        board.make_move(mv)?;
    }
    Ok(board)
}
