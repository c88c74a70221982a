//! Error types for the Teeko crate

use thiserror::Error;

use crate::game::Pos;

/// Main error type for the Teeko crate
///
/// The illegal-move variants (`SourceNotOwned`, `NonAdjacentShift`,
/// `DestinationOccupied`) are recoverable: a play loop is expected to
/// report them and re-prompt rather than abort.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: no opponent piece at source {pos}")]
    SourceNotOwned { pos: Pos },

    #[error("illegal move: {dest} is not adjacent to {src}")]
    NonAdjacentShift { src: Pos, dest: Pos },

    #[error("illegal move: destination {pos} is already occupied")]
    DestinationOccupied { pos: Pos },

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("game already over")]
    GameOver,

    #[error("invalid coordinate '{input}' (expected letter A-E followed by digit 0-4)")]
    InvalidCoordinate { input: String },

    #[error("board string too short: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position} in board string")]
    InvalidCellCharacter { character: char, position: usize },

    #[error(
        "invalid piece counts: black={black}, red={red} (each at most 4, differing by at most 1)"
    )]
    InvalidPieceCounts { black: usize, red: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
