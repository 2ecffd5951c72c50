//! daedal — solve a text maze and render the result.
//!
//! The core crates do all the work; this binary only selects a file and a
//! strategy, runs one solve, and draws walls, markers, and the solution
//! overlay to the terminal.

mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use daedal_core::Maze;
use daedal_search::{Solver, Strategy};

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve a text maze and draw the path")]
struct Cli {
    /// Path to the maze file.
    maze: PathBuf,

    /// Search strategy: bfs, dfs, a-star (aliases: heuristic, optimal).
    #[arg(short, long, default_value = "bfs")]
    strategy: Strategy,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let maze = Maze::load(&cli.maze)
        .with_context(|| format!("failed to load maze from {}", cli.maze.display()))?;
    tracing::debug!(
        width = maze.width(),
        height = maze.height(),
        "maze loaded"
    );

    let mut solver = Solver::new();
    let solution = solver
        .solve(&maze, cli.strategy)
        .with_context(|| format!("{} search failed", cli.strategy))?;

    let color = !cli.no_color && std::io::stdout().is_terminal();
    print!("{}", render::render(&maze, Some(solution), color));
    println!("strategy:        {}", cli.strategy);
    println!("states explored: {}", solution.num_explored());
    println!("path length:     {}", solution.len());
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
