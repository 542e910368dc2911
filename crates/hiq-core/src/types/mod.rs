//! 基本型モジュール
//!
//! 盤面・探索で使用する基本的な型を定義する。
//!
//! ```text
//! Topology
//!   ↓
//! Square → Move
//!   ↓
//! Cell
//! ```

mod cell;
mod moves;
mod square;
mod topology;

pub use cell::Cell;
pub use moves::Move;
pub use square::Square;
pub use topology::{Direction, ParseTopologyError, Topology};
