//! Position evaluation from a fixed side's perspective
//!
//! One evaluator covers both roles: "mine" versus "the opponent's" is a
//! perspective parameter, not a separate implementation. The terminal
//! check and the heuristic share the pattern enumeration in
//! [`crate::game::patterns`].

use crate::game::{Board, Side, WIN_LENGTH, winner, winning_patterns};

/// Evaluates boards from the perspective of one side
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    pub perspective: Side,
}

impl Evaluator {
    pub fn new(perspective: Side) -> Self {
        Evaluator { perspective }
    }

    /// Definitive game value: +1 if the perspective side holds a
    /// completed pattern, -1 if the opponent does, 0 otherwise.
    ///
    /// Total over arbitrary 5×5 boards, reachable or not; successor
    /// boards are scored with the same function as real ones.
    pub fn terminal_value(&self, board: &Board) -> i32 {
        match winner(board) {
            Some(side) if side == self.perspective => 1,
            Some(_) => -1,
            None => 0,
        }
    }

    /// Continuous advantage estimate in [-1.0, 1.0] for non-terminal
    /// boards reached at the search depth limit.
    ///
    /// Per pattern, each side's occupancy fraction is the share of the
    /// 4 cells it holds; a single running maximum per side is tracked
    /// across all patterns. The score is `my_max - opp_max`, except
    /// when `my_max` reaches 1.0 (a completed pattern, which the
    /// terminal check intercepts first on any guarded call path) where
    /// `my_max` alone is returned.
    pub fn heuristic_value(&self, board: &Board) -> f64 {
        let mine = self.perspective.to_cell();
        let theirs = self.perspective.opponent().to_cell();

        let mut my_max = 0.0f64;
        let mut opp_max = 0.0f64;
        for pattern in winning_patterns() {
            let mut my_count = 0;
            let mut opp_count = 0;
            for pos in pattern {
                let cell = board.get(pos);
                if cell == mine {
                    my_count += 1;
                } else if cell == theirs {
                    opp_count += 1;
                }
            }
            my_max = my_max.max(my_count as f64 / WIN_LENGTH as f64);
            opp_max = opp_max.max(opp_count as f64 / WIN_LENGTH as f64);
        }

        if my_max < 1.0 { my_max - opp_max } else { my_max }
    }
}
