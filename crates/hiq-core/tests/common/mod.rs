#![allow(dead_code)]

use hiq_core::{Board, Move, Square, Topology};

pub fn sq(x: i8, y: i8) -> Square {
    Square::new(x, y)
}

pub fn board(topology: Topology, pegs: &[(i8, i8)]) -> Board {
    Board::from_pegs(topology, pegs.iter().map(|&(x, y)| sq(x, y))).expect("valid pegs")
}

/// Five pegs on the triangle, solvable to one peg in four jumps.
pub fn level1() -> Board {
    Board::parse(Topology::Triangle, "o\noo\n.o.\n..o.\n.....").expect("level1 parses")
}

pub fn level1_solution() -> Vec<Move> {
    vec![
        Move::jump(sq(0, 0), 0, 2),
        Move::jump(sq(1, 1), 0, 2),
        Move::jump(sq(0, 2), 2, 2),
        Move::jump(sq(2, 4), 0, -2),
    ]
}
