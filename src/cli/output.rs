//! Output formatting helpers for CLI commands

use crate::game::Board;

/// Print the board in the interactive-play format: one digit-prefixed
/// line per row, column letters underneath.
pub fn print_board(board: &Board) {
    println!("{board}");
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{key}:"), value);
}
