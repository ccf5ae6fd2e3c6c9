use std::io::{self, BufRead};

use clap::Parser;
use serde::Serialize;

use chessvar::{zobrist_key, Color, GameState, GameStatus, Square};

#[derive(Debug, Parser)]
#[command(name = "play", about = "Capture-variant chess session driver")]
struct Args {
    /// Scripted move sequence, e.g. "a2a4 a7a5 b1c3". Moves are read line
    /// by line from stdin when absent.
    #[arg(long)]
    moves: Option<String>,

    /// Suppress the board rendering after each accepted move
    #[arg(long, default_value_t = false)]
    quiet: bool,

    /// Emit a final JSON summary on stdout
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct Summary {
    status: GameStatus,
    turn: Color,
    applied: usize,
    key: String,
}

/// Accepts "a2a4" or "a2 a4".
fn parse_move(line: &str) -> Option<(Square, Square)> {
    let compact: String = line.split_whitespace().collect();
    if !compact.is_ascii() || compact.len() != 4 {
        return None;
    }
    let from = Square::parse(&compact[0..2])?;
    let to = Square::parse(&compact[2..4])?;
    Some((from, to))
}

fn render(state: &GameState) {
    for row in 0..8u8 {
        let mut line = format!("{} ", 8 - row);
        for col in 0..8u8 {
            let c = state
                .board
                .get(Square::new(row, col))
                .map_or('.', chessvar::Piece::symbol);
            line.push(c);
            line.push(' ');
        }
        println!("{line}");
    }
    println!("  a b c d e f g h");
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut state = GameState::new();
    let mut applied = 0usize;

    let script: Vec<String> = match &args.moves {
        Some(s) => s.split_whitespace().map(str::to_string).collect(),
        None => io::stdin().lock().lines().collect::<Result<_, _>>()?,
    };

    if !args.quiet {
        render(&state);
    }

    for line in &script {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((from, to)) = parse_move(line) else {
            eprintln!("[play] unreadable move '{line}', expected e.g. a2a4");
            continue;
        };
        if state.try_move(from, to) {
            applied += 1;
            println!("[play] {from} -> {to}");
            if !args.quiet {
                render(&state);
            }
        } else {
            println!("[play] rejected: {line}");
        }
        match state.status {
            GameStatus::WhiteWon => {
                println!("[play] White wins");
                break;
            }
            GameStatus::BlackWon => {
                println!("[play] Black wins");
                break;
            }
            GameStatus::InProgress => {}
        }
    }

    if state.status == GameStatus::InProgress {
        println!("[play] {} to move", side_name(state.turn));
    }

    if args.json {
        let summary = Summary {
            status: state.status,
            turn: state.turn,
            applied,
            key: format!("{:032x}", zobrist_key(&state)),
        };
        println!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}
