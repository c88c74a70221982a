//! Teeko game implementation

pub mod board;
pub mod moves;
pub mod patterns;

pub use board::{BOARD_SIZE, Board, Cell, Phase, Pos, Side, WIN_LENGTH};
pub use moves::{Move, successors};
pub use patterns::{winner, winning_patterns};
