//! 島数による残り手数の下界
//!
//! ペグの連結成分（島）を数える。隣接関係は盤形のジャンプ方向 `d` について
//! `d` と `d/2` の両方（直交 ±1/±2、斜めジャンプのある盤では斜め ±1/±2）。
//!
//! 1手で取り除けるペグは1本なので、k 本のペグを1本にするには k-1 手かかる。
//! 島の数はペグ数以下なので `islands - 1` は残り手数を超えない。

use crate::board::BoardModel;
use crate::types::Square;
use std::collections::VecDeque;

/// ペグの島の数（幅優先の塗りつぶし）
pub fn island_count<B: BoardModel>(board: &B) -> u32 {
    let topology = board.topology();
    let width = topology.width();
    let directions = board.jump_directions();

    let mut visited = 0u128;
    let mut queue: VecDeque<Square> = VecDeque::with_capacity(16);
    let mut islands = 0;

    for start in topology.squares() {
        if !board.is_peg(start) || visited & (1u128 << start.index(width)) != 0 {
            continue;
        }
        islands += 1;
        visited |= 1u128 << start.index(width);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &(dx, dy) in directions {
                for neighbor in [current.offset(dx / 2, dy / 2), current.offset(dx, dy)] {
                    if !board.is_peg(neighbor) {
                        continue;
                    }
                    let bit = 1u128 << neighbor.index(width);
                    if visited & bit == 0 {
                        visited |= bit;
                        queue.push_back(neighbor);
                    }
                }
            }
        }
    }

    islands
}

/// 残り手数の下界 `islands - 1`（0 で下限）
#[inline]
pub fn heuristic<B: BoardModel>(board: &B) -> u32 {
    island_count(board).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::Topology;

    fn board(topology: Topology, pegs: &[(i8, i8)]) -> Board {
        Board::from_pegs(topology, pegs.iter().map(|&(x, y)| Square::new(x, y))).unwrap()
    }

    #[test]
    fn test_empty_board_has_no_islands() {
        let b = Board::empty(Topology::Square);
        assert_eq!(island_count(&b), 0);
        assert_eq!(heuristic(&b), 0);
    }

    #[test]
    fn test_full_opening_is_one_island() {
        for topology in Topology::ALL {
            assert_eq!(island_count(&Board::standard(topology)), 1, "{topology}");
        }
    }

    #[test]
    fn test_distance_two_is_still_connected() {
        // (3,0) と (3,2) はジャンプ1回分の距離なので同じ島
        let b = board(Topology::Square, &[(3, 0), (3, 2)]);
        assert_eq!(island_count(&b), 1);
    }

    #[test]
    fn test_distance_three_splits() {
        let b = board(Topology::Square, &[(3, 0), (3, 3)]);
        assert_eq!(island_count(&b), 2);
        assert_eq!(heuristic(&b), 1);
    }

    #[test]
    fn test_diagonal_links_depend_on_topology() {
        // 十字盤には斜めジャンプがないので斜め隣は別の島
        let square = board(Topology::Square, &[(2, 2), (3, 3)]);
        assert_eq!(island_count(&square), 2);
        // 六角盤では斜め隣も連結
        let hexagon = board(Topology::Hexagon, &[(2, 2), (3, 3)]);
        assert_eq!(island_count(&hexagon), 1);
        // 三角盤は (1,1) 方向のみ斜め
        let triangle = board(Topology::Triangle, &[(0, 0), (1, 1)]);
        assert_eq!(island_count(&triangle), 1);
        let anti = board(Topology::Triangle, &[(1, 3), (2, 2)]);
        assert_eq!(island_count(&anti), 2);
    }

    #[test]
    fn test_trapped_corner_pegs() {
        let b = board(Topology::Triangle, &[(0, 0), (2, 4)]);
        assert_eq!(heuristic(&b), 1);
    }

    /// 1本になるまでの最短手数（不可能なら None）
    fn exact_distance(
        board: &mut Board,
        memo: &mut std::collections::HashMap<crate::board::Fingerprint, Option<u32>>,
    ) -> Option<u32> {
        let key = board.fingerprint();
        if let Some(&d) = memo.get(&key) {
            return d;
        }
        let result = if board.peg_count() <= 1 {
            Some(0)
        } else {
            let mut best = None;
            for mv in board.legal_moves() {
                board.make_move(mv).unwrap();
                if let Some(d) = exact_distance(board, memo) {
                    best = Some(best.map_or(d + 1, |b: u32| b.min(d + 1)));
                }
                board.undo_move();
            }
            best
        };
        memo.insert(key, result);
        result
    }

    #[test]
    fn test_admissible_on_every_reachable_position() {
        let mut root = board(
            Topology::Triangle,
            &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 3), (3, 4), (4, 4)],
        );
        let mut memo = std::collections::HashMap::new();
        exact_distance(&mut root, &mut memo);
        assert!(memo.len() > 1);

        let mut checked = 0;
        let mut stack = vec![root];
        let mut seen = std::collections::HashSet::new();
        while let Some(mut b) = stack.pop() {
            if !seen.insert(b.fingerprint()) {
                continue;
            }
            if let Some(distance) = memo[&b.fingerprint()] {
                assert!(heuristic(&b) <= distance, "{b}");
                checked += 1;
            }
            for mv in b.legal_moves() {
                b.make_move(mv).unwrap();
                stack.push(b.clone());
                b.undo_move();
            }
        }
        assert!(checked > 0);
    }
}
