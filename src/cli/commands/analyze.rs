//! Analyze command - Score a position and report the searched best move

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        commands::play::parse_side_token,
        output::{print_board, print_kv, print_section},
    },
    eval::Evaluator,
    game::{Board, Phase},
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a board position")]
pub struct AnalyzeArgs {
    /// Board string: 25 cells (`.`, `b`, `r`), row by row from the top
    pub board: String,

    /// Perspective side (`b` or `r`)
    #[arg(long, default_value = "b")]
    pub side: String,

    /// Emit machine-readable JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Analysis {
    side: String,
    phase: Phase,
    terminal_value: i32,
    /// Present only for non-terminal positions (the heuristic contract)
    #[serde(skip_serializing_if = "Option::is_none")]
    heuristic_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_move: Option<String>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let side = parse_side_token(&args.side, "--side")?;

    let evaluator = Evaluator::new(side);
    let terminal_value = evaluator.terminal_value(&board);
    let (heuristic_value, best_move) = if terminal_value == 0 {
        (
            Some(evaluator.heuristic_value(&board)),
            Some(search::best_move(&board, side)?.to_string()),
        )
    } else {
        (None, None)
    };

    let analysis = Analysis {
        side: side.to_string(),
        phase: board.phase(),
        terminal_value,
        heuristic_value,
        best_move,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_section("Position analysis");
    print_board(&board);
    print_kv("side", &analysis.side);
    print_kv("phase", &format!("{:?}", analysis.phase));
    print_kv("terminal value", &analysis.terminal_value.to_string());
    if let Some(h) = analysis.heuristic_value {
        print_kv("heuristic", &format!("{h:.4}"));
    }
    if let Some(mv) = &analysis.best_move {
        print_kv("best move", mv);
    }
    Ok(())
}
