//! CLI for carving and printing a single maze

use clap::Parser;
use tilt_maze::render::render_ascii;
use tilt_maze::MazeGame;

/// Carve one maze and print it as ASCII art
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

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let game = MazeGame::new(args.cols, args.rows, args.seed)?;
    println!("{}", render_ascii(game.grid(), game.marker(), game.goal()));
    Ok(())
}
