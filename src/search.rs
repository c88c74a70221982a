//! Depth-limited alpha-beta minimax search
//!
//! Two mutually recursive routines walk the successor tree: the
//! maximizing side is the searching agent, the minimizing side its
//! opponent. Terminal positions stop the recursion immediately; the
//! heuristic scores leaves at the depth cap. Every node operates on its
//! own copied board, so no recursion level can observe a sibling's
//! mutations. No transposition table and no iterative deepening.

use crate::{
    eval::Evaluator,
    game::{Board, Move, Side, successors},
};

/// Fixed search depth in plies
pub const DEPTH_LIMIT: u32 = 4;

/// Select the best move for `side` on `board`.
///
/// Runs `max_value` from the root with open bounds. The move attached
/// to the best root score is returned; deeper levels track their local
/// best only to propagate scores.
///
/// # Errors
///
/// Returns [`crate::Error::NoLegalMoves`] if the side to move has no
/// successors, which cannot happen in positions reachable by legal
/// play.
pub fn best_move(board: &Board, side: Side) -> crate::Result<Move> {
    let (_, best) = best_move_scored(board, side);
    best.ok_or(crate::Error::NoLegalMoves)
}

/// Root search returning the score alongside the move, for callers
/// that need the searched value itself. The move is `None` on terminal
/// boards and in positions with no successors.
pub fn best_move_scored(board: &Board, side: Side) -> (f64, Option<Move>) {
    let evaluator = Evaluator::new(side);
    max_value(board, &evaluator, 0, f64::NEG_INFINITY, f64::INFINITY)
}

/// Maximizing node: the perspective side is to move.
///
/// Keeps the largest score seen in `alpha`; prunes by returning `beta`
/// once `alpha >= beta`. The cutoff returns the bound itself so the
/// pruned score equals what unpruned minimax would compute at the root.
fn max_value(
    board: &Board,
    evaluator: &Evaluator,
    depth: u32,
    mut alpha: f64,
    beta: f64,
) -> (f64, Option<Move>) {
    let value = evaluator.terminal_value(board);
    if value != 0 {
        return (f64::from(value), None);
    }
    if depth == DEPTH_LIMIT {
        return (evaluator.heuristic_value(board), None);
    }

    let mut best = None;
    for (mv, next) in successors(board, evaluator.perspective) {
        let (score, _) = min_value(&next, evaluator, depth + 1, alpha, beta);
        if score > alpha {
            alpha = score;
            best = Some(mv);
        }
        if alpha >= beta {
            return (beta, best);
        }
    }
    (alpha, best)
}

/// Minimizing node: the opponent is to move. Mirror of [`max_value`].
fn min_value(
    board: &Board,
    evaluator: &Evaluator,
    depth: u32,
    alpha: f64,
    mut beta: f64,
) -> (f64, Option<Move>) {
    let value = evaluator.terminal_value(board);
    if value != 0 {
        return (f64::from(value), None);
    }
    if depth == DEPTH_LIMIT {
        return (evaluator.heuristic_value(board), None);
    }

    let mut best = None;
    for (mv, next) in successors(board, evaluator.perspective.opponent()) {
        let (score, _) = max_value(&next, evaluator, depth + 1, alpha, beta);
        if score < beta {
            beta = score;
            best = Some(mv);
        }
        if alpha >= beta {
            return (alpha, best);
        }
    }
    (beta, best)
}
