//! Teeko game-playing agent
//!
//! This crate provides:
//! - Complete Teeko rules: drop/move phases, 4-in-a-line and 2×2 wins
//! - Deterministic successor generation over owned board copies
//! - Terminal and heuristic evaluation sharing one pattern enumeration
//! - Depth-limited alpha-beta minimax move selection
//! - An agent owning the authoritative board with opponent-move
//!   validation, plus a small interactive CLI

pub mod agent;
pub mod cli;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;

pub use agent::TeekoAgent;
pub use error::{Error, Result};
pub use eval::Evaluator;
pub use game::{Board, Cell, Move, Phase, Pos, Side, successors, winning_patterns};
pub use search::{DEPTH_LIMIT, best_move, best_move_scored};
