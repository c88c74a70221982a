//! Play command - Interactive game against the agent on stdin

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    TeekoAgent,
    cli::output::print_board,
    game::{Move, Phase, Side},
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the agent")]
pub struct PlayArgs {
    /// Side the agent plays (`b`, `r`, or `random`)
    #[arg(long, default_value = "random")]
    pub side: String,

    /// Seed for the random side assignment, for reproducible setups
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Parse a side token (`b`/`black` or `r`/`red`) from a CLI flag
pub fn parse_side_token(value: &str, flag: &str) -> Result<Side> {
    match value.to_lowercase().as_str() {
        "b" | "black" => Ok(Side::Black),
        "r" | "red" => Ok(Side::Red),
        other => Err(anyhow::anyhow!(
            "invalid value '{other}' for {flag} (expected 'b' or 'r')"
        )),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let agent = if args.side.eq_ignore_ascii_case("random") {
        match args.seed {
            Some(seed) => TeekoAgent::from_seed(seed),
            None => TeekoAgent::new(),
        }
    } else {
        TeekoAgent::with_side(parse_side_token(&args.side, "--side")?)
    };

    println!("Teeko: the agent plays '{}'", agent.piece());
    let stdin = io::stdin();
    run_game(agent, &mut stdin.lock())
}

/// Drive one full game: black moves first, turns alternate, and the
/// loop ends as soon as a winning pattern appears. Illegal or
/// unparseable human input is reported and re-prompted, never fatal.
fn run_game(mut agent: TeekoAgent, input: &mut impl BufRead) -> Result<()> {
    let mut turn = Side::Black;

    while agent.game_value() == 0 {
        print_board(agent.board());
        if turn == agent.piece() {
            let mv = agent.select_move(agent.board())?;
            agent.apply_move(&mv, turn);
            announce(turn, &mv);
        } else {
            println!("'{turn}' to move");
            human_move(&mut agent, input)?;
        }
        turn = turn.opponent();
    }

    print_board(agent.board());
    if agent.game_value() == 1 {
        println!("The agent wins! Game over.");
    } else {
        println!("You win! Game over.");
    }
    Ok(())
}

fn announce(side: Side, mv: &Move) {
    match mv {
        Move::Drop { dest } => println!("'{side}' dropped at {dest}"),
        Move::Shift { dest, src } => println!("'{side}' moved from {src} to {dest}"),
    }
}

/// Prompt the human for a move matching the current phase until one
/// parses and validates.
fn human_move(agent: &mut TeekoAgent, input: &mut impl BufRead) -> Result<()> {
    loop {
        let mv = match agent.board().phase() {
            Phase::Drop => {
                let dest = prompt("Move (e.g. B3): ", input)?;
                match dest.parse() {
                    Ok(dest) => Move::Drop { dest },
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                }
            }
            Phase::Move => {
                let src = prompt("Move from (e.g. B3): ", input)?;
                let dest = prompt("Move to (e.g. B3): ", input)?;
                match (dest.parse(), src.parse()) {
                    (Ok(dest), Ok(src)) => Move::Shift { dest, src },
                    (Err(e), _) | (_, Err(e)) => {
                        println!("{e}");
                        continue;
                    }
                }
            }
        };

        match agent.apply_opponent_move(&mv) {
            Ok(()) => return Ok(()),
            Err(e) => println!("{e}"),
        }
    }
}

fn prompt(label: &str, input: &mut impl BufRead) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("input stream closed before the game finished");
    }
    Ok(line.trim().to_string())
}
