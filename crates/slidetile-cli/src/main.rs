//! Slidetile terminal front end.
//!
//! Generates (or reads) a board, solves it with the layered solver and replays
//! the solution through a game session.
//!
//! # Usage
//!
//! ```sh
//! slidetile --size 4
//! slidetile --size 5 --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! slidetile --board "8 6 7 / 2 5 4 / 3 _ 1" --show-moves
//! slidetile --board "1 2 3 / 4 5 6 / 8 7 _" --check
//! ```
//!
//! Exit status is `2` for invalid arguments or boards and `1` when the board is
//! unsolvable or the solver fails. Set `RUST_LOG=debug` to see solver progress.

use std::{
    io::{self, Write},
    process,
};

use clap::Parser;
use slidetile_core::{Board, BoardError};
use slidetile_game::{Game, GameError, Level};
use slidetile_generator::PuzzleSeed;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length for generated puzzles (2 to 9).
    #[arg(short, long, value_name = "SIZE", default_value_t = 4)]
    size: u8,

    /// Seed for a reproducible puzzle, as 64 hex characters.
    #[arg(long, value_name = "SEED", conflicts_with = "board")]
    seed: Option<PuzzleSeed>,

    /// Solve this board instead of generating one, e.g. "1 2 3 / 4 _ 5 / 7 8 6".
    #[arg(short, long, value_name = "BOARD", conflicts_with = "size")]
    board: Option<String>,

    /// Print every move of the solution.
    #[arg(long)]
    show_moves: bool,

    /// Only report whether the board is solvable.
    #[arg(long)]
    check: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("no level uses board size {size}; choose 2 to 9")]
    UnsupportedSize { size: u8 },
    #[display("invalid board: {_0}")]
    Board(#[from] BoardError),
    #[display("{_0}")]
    Game(#[from] GameError),
    #[display("failed to write output: {_0}")]
    Io(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::UnsupportedSize { .. } | Self::Board(_) => 2,
            Self::Game(_) | Self::Io(_) => 1,
        }
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let result = run(&args, &mut io::stdout().lock());
    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(err.exit_code());
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let game = match &args.board {
        Some(text) => {
            let board = text.parse::<Board>()?;
            if args.check {
                return report_solvability(&board, out);
            }
            Game::from_board(board)?
        }
        None => {
            let level = Level::from_size(args.size)
                .ok_or(CliError::UnsupportedSize { size: args.size })?;
            let puzzle = match args.seed {
                Some(seed) => level.generate_with_seed(seed),
                None => level.generate(),
            };
            writeln!(out, "Seed: {}", puzzle.seed)?;
            if args.check {
                return report_solvability(&puzzle.board, out);
            }
            Game::new(puzzle)
        }
    };
    play_solution(game, args.show_moves, out)
}

fn report_solvability(board: &Board, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{board}")?;
    writeln!(out, "Inversions: {}", board.inversions())?;
    if !board.is_solvable() {
        writeln!(out, "Not solvable")?;
        return Err(GameError::Unsolvable.into());
    }
    writeln!(out, "Solvable")?;
    Ok(())
}

fn play_solution(mut game: Game, show_moves: bool, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{}", game.board())?;
    writeln!(out)?;

    let moves = game.solve_moves()?;
    for (i, mv) in moves.iter().enumerate() {
        if show_moves {
            writeln!(out, "{:>5}  {mv}", i + 1)?;
        }
        game.apply_solver_move(mv)?;
    }
    if show_moves && !moves.is_empty() {
        writeln!(out)?;
    }

    log::info!("replayed {} solver moves", game.move_count());
    writeln!(out, "Solved in {} moves", game.move_count())?;
    writeln!(out, "{}", game.board())?;
    Ok(())
}
