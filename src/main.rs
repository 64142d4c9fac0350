//! Interactive terminal play

use std::io::{self, BufRead, Write};

use clap::Parser;
use tilt_maze::grid::Direction;
use tilt_maze::render::render_ascii;
use tilt_maze::{MazeGame, MoveOutcome};

/// Steer the marker `o` to the goal `X`; every solved maze is replaced by
/// a fresh one
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Read moves from stdin, redraw after every line
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut game = MazeGame::new(args.cols, args.rows, args.seed)?;

    draw(&game, "Moves: w/a/s/d, applied per line. q quits.")?;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let mut message = "";
        for key in line?.trim().chars() {
            let direction = match key.to_ascii_lowercase() {
                'w' => Direction::Up,
                'd' => Direction::Right,
                's' => Direction::Down,
                'a' => Direction::Left,
                'q' => return Ok(()),
                _ => continue,
            };
            if game.attempt_move(direction) == MoveOutcome::GoalReached {
                message = "Goal reached! A fresh maze has been carved.";
                // Leftover keys were aimed at the old maze
                break;
            }
        }
        draw(&game, message)?;
    }
    Ok(())
}

fn draw(game: &MazeGame, message: &str) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "\x1B[2J\x1B[1;1H")?;
    writeln!(out, "{}", render_ascii(game.grid(), game.marker(), game.goal()))?;
    if !message.is_empty() {
        writeln!(out, "{message}")?;
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
