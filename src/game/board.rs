//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Board side length
pub const BOARD_SIZE: usize = 5;

/// Number of pieces a side must align to win
pub const WIN_LENGTH: usize = 4;

/// Total pieces on the board once the drop phase ends (4 per side)
pub const DROP_PHASE_PIECES: usize = 8;

/// A cell on the Teeko board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Black,
    Red,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'b',
            Cell::Red => 'r',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'b' | 'B' => Some(Cell::Black),
            'r' | 'R' => Some(Cell::Red),
            _ => None,
        }
    }
}

/// A side (piece color) in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    Red,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::Red,
            Side::Red => Side::Black,
        }
    }

    /// Convert side to the cell value it places
    pub fn to_cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::Red => Cell::Red,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "b"),
            Side::Red => write!(f, "r"),
        }
    }
}

/// Game phase, derived from the piece count on every query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Fewer than 8 pieces placed: moves are placements on empty cells
    Drop,
    /// All 8 pieces placed: moves relocate a piece to an adjacent empty cell
    Move,
}

/// A position on the 5×5 board
///
/// Textual notation is a column letter `A`-`E` followed by a row digit
/// `0`-`4`, so `"B3"` is column 1, row 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Pos { row, col }
    }

    /// Check signed coordinates against the board bounds
    pub fn in_bounds(row: isize, col: isize) -> bool {
        row >= 0 && row < BOARD_SIZE as isize && col >= 0 && col < BOARD_SIZE as isize
    }

    /// Whether `other` lies within a 1-cell (8-neighbor) radius of `self`
    pub fn is_adjacent(self, other: Pos) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = (b'A' + self.col as u8) as char;
        write!(f, "{column}{}", self.row)
    }
}

impl FromStr for Pos {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::Error::InvalidCoordinate {
            input: s.to_string(),
        };

        let mut chars = s.trim().chars();
        let column = chars.next().ok_or_else(invalid)?;
        let row = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        let col = match column.to_ascii_uppercase() {
            c @ 'A'..='E' => c as usize - 'A' as usize,
            _ => return Err(invalid()),
        };
        let row = match row {
            r @ '0'..='4' => r as usize - '0' as usize,
            _ => return Err(invalid()),
        };

        Ok(Pos::new(row, col))
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    black: usize,
    red: usize,
}

/// Complete 5×5 board state
///
/// This type implements `Copy` since it's only 25 single-byte cells;
/// search nodes are plain copies, never aliased references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get cell at position
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Set cell at position
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { black: 0, red: 0 };
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::Black => count.black += 1,
                    Cell::Red => count.red += 1,
                    Cell::Empty => {}
                }
            }
        }
        count
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.black + count.red
    }

    /// Current game phase, recomputed from the piece count on every call
    pub fn phase(&self) -> Phase {
        if self.occupied_count() < DROP_PHASE_PIECES {
            Phase::Drop
        } else {
            Phase::Move
        }
    }

    /// All positions in row-major scan order (row 0→4, column 0→4)
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos::new(row, col)))
    }

    /// Empty positions in row-major scan order
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        Self::positions().filter(|&pos| self.is_empty(pos))
    }

    /// Positions holding `side`'s pieces, in row-major scan order
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = Pos> + '_ {
        Self::positions().filter(move |&pos| self.get(pos) == side.to_cell())
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 25 cell characters (`.`, `b`, `r`;
    /// whitespace is filtered out), row by row from the top.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string has fewer than 25 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - Either side has more than 4 pieces, or the counts differ by
    ///   more than 1
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < BOARD_SIZE * BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE * BOARD_SIZE,
                got: chars.len(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().take(BOARD_SIZE * BOARD_SIZE).enumerate() {
            let cell =
                Cell::from_char(c).ok_or(crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                })?;
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = cell;
        }

        let count = board.count_pieces();
        if count.black > 4 || count.red > 4 || count.black.abs_diff(count.red) > 1 {
            return Err(crate::Error::InvalidPieceCounts {
                black: count.black,
                red: count.red,
            });
        }

        Ok(board)
    }

    /// Get a compact single-line representation for use as a key
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .flat_map(|row| row.iter().map(|&c| c.to_char()))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{i}:")?;
            for cell in row {
                write!(f, " {}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "   A B C D E")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        for pos in Board::positions() {
            assert_eq!(board.get(pos), Cell::Empty);
        }
    }

    #[test]
    fn test_phase_derivation() {
        let mut board = Board::new();
        assert_eq!(board.phase(), Phase::Drop);

        // 7 pieces: still the drop phase
        for i in 0..7 {
            let side = if i % 2 == 0 { Cell::Black } else { Cell::Red };
            board.set(Pos::new(i / 5, i % 5), side);
        }
        assert_eq!(board.phase(), Phase::Drop);

        // 8th piece flips to the move phase
        board.set(Pos::new(1, 2), Cell::Red);
        assert_eq!(board.phase(), Phase::Move);
    }

    #[test]
    fn test_pos_notation_roundtrip() {
        let pos: Pos = "B3".parse().unwrap();
        assert_eq!(pos, Pos::new(3, 1));
        assert_eq!(pos.to_string(), "B3");

        let corner: Pos = "e4".parse().unwrap();
        assert_eq!(corner, Pos::new(4, 4));
    }

    #[test]
    fn test_pos_notation_rejects_garbage() {
        assert!("F0".parse::<Pos>().is_err());
        assert!("A5".parse::<Pos>().is_err());
        assert!("A".parse::<Pos>().is_err());
        assert!("A12".parse::<Pos>().is_err());
        assert!("".parse::<Pos>().is_err());
    }

    #[test]
    fn test_adjacency() {
        let center = Pos::new(2, 2);
        assert!(center.is_adjacent(Pos::new(1, 1)));
        assert!(center.is_adjacent(Pos::new(2, 3)));
        assert!(center.is_adjacent(Pos::new(3, 2)));
        assert!(!center.is_adjacent(center));
        assert!(!center.is_adjacent(Pos::new(0, 2)));
        assert!(!center.is_adjacent(Pos::new(4, 4)));
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string(
            "b r . . .\
             . . . . .\
             . . b . .\
             . . . . .\
             . . . . r",
        )
        .unwrap();
        assert_eq!(board.get(Pos::new(0, 0)), Cell::Black);
        assert_eq!(board.get(Pos::new(0, 1)), Cell::Red);
        assert_eq!(board.get(Pos::new(2, 2)), Cell::Black);
        assert_eq!(board.get(Pos::new(4, 4)), Cell::Red);
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_from_string_rejects_short_input() {
        let result = Board::from_string("b r .");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidBoardLength { expected: 25, .. })
        ));
    }

    #[test]
    fn test_from_string_rejects_bad_character() {
        let mut s = ".".repeat(25);
        s.replace_range(3..4, "x");
        let result = Board::from_string(&s);
        assert!(matches!(
            result,
            Err(crate::Error::InvalidCellCharacter {
                character: 'x',
                position: 3
            })
        ));
    }

    #[test]
    fn test_from_string_rejects_unbalanced_counts() {
        let result = Board::from_string("bbb......................");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidPieceCounts { black: 3, red: 0 })
        ));
    }

    #[test]
    fn test_from_string_rejects_more_than_four_pieces() {
        let result = Board::from_string("bbbbb rrrr. ..... ..... .....");
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("br... ..... ..b.. ..... ....r").unwrap();
        let encoded = board.encode();
        assert_eq!(encoded.len(), 25);
        let parsed = Board::from_string(&encoded).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_display_format() {
        let board = Board::new();
        let display = board.to_string();
        assert!(display.starts_with("0: . . . . ."));
        assert!(display.ends_with("   A B C D E"));
    }

    #[test]
    fn test_piece_scan_order_is_row_major() {
        let board = Board::from_string("....b .r... b.... ..... .....").unwrap();
        let pieces: Vec<Pos> = board.pieces_of(Side::Black).collect();
        assert_eq!(pieces, vec![Pos::new(0, 4), Pos::new(2, 0)]);
    }
}
