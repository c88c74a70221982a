//! Winning-pattern analysis for Teeko
//!
//! A side wins with 4 identical pieces forming a horizontal, vertical,
//! or diagonal line of 4, or a 2×2 block. Both the terminal and the
//! heuristic evaluator consume the same pattern enumeration.

use super::board::{BOARD_SIZE, Board, Cell, Pos, Side, WIN_LENGTH};

/// Top-left anchors of the "\" diagonals
const DOWN_RIGHT_ANCHORS: [(usize, usize); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Top-right anchors of the "/" diagonals
const DOWN_LEFT_ANCHORS: [(usize, usize); 4] = [(0, 3), (0, 4), (1, 3), (1, 4)];

/// Cell offsets of a 2×2 block relative to its top-left anchor
const BLOCK_OFFSETS: [(usize, usize); 4] = [(0, 0), (1, 0), (1, 1), (0, 1)];

/// Number of 4-cell windows per row or column (5 - 4 + 1)
const WINDOWS_PER_LINE: usize = BOARD_SIZE - WIN_LENGTH + 1;

/// Enumerate every winning pattern as a group of 4 positions.
///
/// Families in order: horizontal windows (2 per row), vertical windows
/// (2 per column), "\" diagonals, "/" diagonals, and 2×2 blocks, for
/// 44 patterns total. The order is deterministic so scans over it are
/// reproducible.
pub fn winning_patterns() -> impl Iterator<Item = [Pos; WIN_LENGTH]> {
    let horizontals = (0..BOARD_SIZE).flat_map(|row| {
        (0..WINDOWS_PER_LINE)
            .map(move |start| std::array::from_fn(|k| Pos::new(row, start + k)))
    });
    let verticals = (0..BOARD_SIZE).flat_map(|col| {
        (0..WINDOWS_PER_LINE)
            .map(move |start| std::array::from_fn(|k| Pos::new(start + k, col)))
    });
    let down_right = DOWN_RIGHT_ANCHORS
        .into_iter()
        .map(|(row, col)| std::array::from_fn(|k| Pos::new(row + k, col + k)));
    let down_left = DOWN_LEFT_ANCHORS
        .into_iter()
        .map(|(row, col)| std::array::from_fn(|k| Pos::new(row + k, col - k)));
    let blocks = (0..BOARD_SIZE - 1).flat_map(|row| {
        (0..BOARD_SIZE - 1).map(move |col| {
            std::array::from_fn(|k| {
                let (dr, dc) = BLOCK_OFFSETS[k];
                Pos::new(row + dr, col + dc)
            })
        })
    });

    horizontals
        .chain(verticals)
        .chain(down_right)
        .chain(down_left)
        .chain(blocks)
}

/// Find the side holding a completed pattern, if any.
///
/// Scans the pattern families in enumeration order and returns on the
/// first match. Valid on any 5×5 board, including positions not
/// reachable through legal play.
pub fn winner(board: &Board) -> Option<Side> {
    for pattern in winning_patterns() {
        let first = board.get(pattern[0]);
        if first == Cell::Empty {
            continue;
        }
        if pattern[1..].iter().all(|&pos| board.get(pos) == first) {
            return match first {
                Cell::Black => Some(Side::Black),
                Cell::Red => Some(Side::Red),
                Cell::Empty => unreachable!(),
            };
        }
    }
    None
}
