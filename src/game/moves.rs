//! Moves, move notation, and successor generation

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Phase, Pos, Side};

/// Neighbor scan order for move-phase relocation: NW, N, NE, W, E, SW,
/// S, SE. Any fixed order would be legal; this one is kept stable so
/// search results and tie-breaks are reproducible.
pub const NEIGHBOR_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A move in the game
///
/// The variant doubles as the phase discriminant: drop-phase moves
/// carry only a destination, move-phase moves carry a destination and
/// the source being vacated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a new piece on an empty cell (drop phase)
    Drop { dest: Pos },
    /// Relocate a piece to an adjacent empty cell (move phase)
    Shift { dest: Pos, src: Pos },
}

impl Move {
    /// Destination cell of the move
    pub fn dest(&self) -> Pos {
        match self {
            Move::Drop { dest } => *dest,
            Move::Shift { dest, .. } => *dest,
        }
    }

    /// Source cell being vacated, if this is a move-phase relocation
    pub fn src(&self) -> Option<Pos> {
        match self {
            Move::Drop { .. } => None,
            Move::Shift { src, .. } => Some(*src),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Drop { dest } => write!(f, "{dest}"),
            Move::Shift { dest, src } => write!(f, "{dest} {src}"),
        }
    }
}

impl FromStr for Move {
    type Err = crate::Error;

    /// Parse `"B3"` as a drop, or `"B3 A2"` (destination, then source)
    /// as a relocation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let dest: Pos = tokens
            .next()
            .ok_or_else(|| crate::Error::InvalidCoordinate {
                input: s.to_string(),
            })?
            .parse()?;
        match tokens.next() {
            None => Ok(Move::Drop { dest }),
            Some(src) => {
                let src: Pos = src.parse()?;
                if tokens.next().is_some() {
                    return Err(crate::Error::InvalidCoordinate {
                        input: s.to_string(),
                    });
                }
                Ok(Move::Shift { dest, src })
            }
        }
    }
}

/// Generate all legal successors for `side`, paired with the move that
/// produces each.
///
/// The phase is derived from the board. Drop phase: one placement per
/// empty cell in row-major order. Move phase: for each of `side`'s
/// pieces in row-major order, one relocation per empty on-board
/// neighbor in [`NEIGHBOR_DIRECTIONS`] order. Each successor is an
/// owned copy of the board; the input is never mutated.
pub fn successors(board: &Board, side: Side) -> Vec<(Move, Board)> {
    match board.phase() {
        Phase::Drop => board
            .empty_positions()
            .map(|dest| {
                let mut next = *board;
                next.set(dest, side.to_cell());
                (Move::Drop { dest }, next)
            })
            .collect(),
        Phase::Move => {
            let mut moves = Vec::new();
            for src in board.pieces_of(side) {
                for (dr, dc) in NEIGHBOR_DIRECTIONS {
                    let row = src.row as isize + dr;
                    let col = src.col as isize + dc;
                    if !Pos::in_bounds(row, col) {
                        continue;
                    }
                    let dest = Pos::new(row as usize, col as usize);
                    if !board.is_empty(dest) {
                        continue;
                    }
                    let mut next = *board;
                    next.set(src, Cell::Empty);
                    next.set(dest, side.to_cell());
                    moves.push((Move::Shift { dest, src }, next));
                }
            }
            moves
        }
    }
}
