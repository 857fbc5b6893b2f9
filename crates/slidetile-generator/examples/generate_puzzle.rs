//! Example demonstrating sliding-tile puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a board size
//! - Generate a random puzzle
//! - Display the puzzle, its seed and the solver's move count
//! - Sample many puzzles in parallel and keep the one needing the most moves
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Choose the board size (default: 4):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 6
//! ```
//!
//! Keep the puzzle whose solution is longest among a number of samples:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 5 --max-tries 1000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use slidetile_generator::{GeneratedPuzzle, PuzzleGenerator};
use slidetile_solver::LayeredSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(short, long, value_name = "SIZE", default_value_t = 4)]
    size: u8,

    /// Puzzles to sample; the one with the longest solution is printed.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();
    if args.size < 2 {
        eprintln!("--size must be at least 2.");
        process::exit(2);
    }
    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(2);
    }

    let generator = PuzzleGenerator::new(args.size);
    let solver = LayeredSolver::new();

    let best = (0..args.max_tries)
        .into_par_iter()
        .map(|_| {
            let puzzle = generator.generate();
            let moves = solver.solve(&puzzle.board).unwrap().len();
            (puzzle, moves)
        })
        .max_by_key(|(_, moves)| *moves);

    if let Some((puzzle, moves)) = best {
        print_puzzle(&puzzle, moves, args.max_tries);
        return;
    }

    eprintln!("No puzzle was generated.");
    process::exit(1);
}

fn print_puzzle(puzzle: &GeneratedPuzzle, moves: usize, tries: usize) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Board:");
    for line in puzzle.board.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Stats:");
    println!("  inversions: {}", puzzle.board.inversions());
    println!("  solver moves: {moves}");
    if tries > 1 {
        println!("  sampled: {tries}");
    }
}
