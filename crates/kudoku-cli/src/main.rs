//! Kudoku terminal front end.
//!
//! A thin shell around the engine crates: `generate` prints a puzzle with
//! its solution and seed, `solve` reads a grid and solves it, optionally
//! tracing every trial and backtrack step of the search.
//!
//! # Usage
//!
//! ```sh
//! kudoku generate --difficulty hard
//! kudoku generate --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! kudoku generate --out puzzle.txt   # writes puzzle.txt + puzzle.txt.solution
//! kudoku solve puzzle.txt --trace
//! cat puzzle.txt | kudoku solve
//! ```
//!
//! Grids are read and written in the 81-cell text format of
//! `kudoku_core::Grid`: digits for filled cells, `_`/`.`/`0` for empty,
//! whitespace ignored.
//!
//! Exit codes: `1` when the puzzle has no solution, `2` for unreadable or
//! inconsistent input.

use std::{
    ffi::OsString,
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, Subcommand};
use derive_more::{Display, Error, From};
use kudoku_core::{Difficulty, Grid, GridError, ParseGridError};
use kudoku_generator::{GeneratedPuzzle, ParseSeedError, PuzzleGenerator, PuzzleSeed};
use kudoku_solver::{BacktrackingSolver, SearchStep};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a puzzle and print it with its solution and seed.
    Generate {
        /// Difficulty label; anything but easy/medium/hard means medium.
        #[arg(long, value_name = "LABEL", default_value = "medium")]
        difficulty: String,

        /// Reproduce the puzzle identified by this 64-hex-char seed.
        #[arg(long, value_name = "HEX")]
        seed: Option<String>,

        /// Write the problem to FILE and the solution to FILE.solution
        /// instead of printing the grids.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Solve a puzzle read from a file or standard input.
    Solve {
        /// Grid file; omit or pass `-` for standard input.
        file: Option<PathBuf>,

        /// Print one line per trial and backtrack step.
        #[arg(long)]
        trace: bool,
    },
}

#[derive(Debug, Display, Error, From)]
enum InputError {
    #[display("failed to read input: {_0}")]
    Io(io::Error),
    #[display("{_0}")]
    Grid(ParseGridError),
    #[display("{_0}")]
    Clues(GridError),
    #[display("{_0}")]
    Seed(ParseSeedError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match args.command {
        Command::Generate {
            difficulty,
            seed,
            out,
        } => generate(&difficulty, seed.as_deref(), out.as_deref()),
        Command::Solve { file, trace } => solve(file.as_deref(), trace),
    }
}

fn generate(difficulty: &str, seed: Option<&str>, out: Option<&Path>) -> ExitCode {
    let difficulty = Difficulty::from_label(difficulty);
    let seed = match seed.map(str::parse) {
        Some(Ok(seed)) => Some(seed),
        Some(Err(err)) => {
            eprintln!("error: {}", InputError::Seed(err));
            return ExitCode::from(2);
        }
        None => None,
    };

    let solver = BacktrackingSolver::new();
    let generator = PuzzleGenerator::new(&solver);
    let started = Instant::now();
    let puzzle = match seed {
        Some(seed) => generator.generate_with_seed(difficulty, seed),
        None => generator.generate(difficulty),
    };
    log::info!(
        "generated a {difficulty} puzzle with {} clues in {:?}",
        puzzle.problem.filled_count(),
        started.elapsed()
    );

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!("  {difficulty}");

    if let Some(path) = out {
        if let Err(err) = write_puzzle(path, &puzzle) {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
        println!();
        println!("Problem written to:");
        println!("  {}", path.display());
        println!("Solution written to:");
        println!("  {}", solution_path(path).display());
    } else {
        println!();
        println!("Problem:");
        println!("  {}", puzzle.problem);
        println!();
        println!("Solution:");
        println!("  {}", puzzle.solution);
    }

    ExitCode::SUCCESS
}

/// Returns the answer-key path for a problem file: the same name with
/// `.solution` appended.
fn solution_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(OsString::new, ToOwned::to_owned);
    name.push(".solution");
    path.with_file_name(name)
}

/// Writes the problem and solution grids in the canonical text format.
fn write_puzzle(path: &Path, puzzle: &GeneratedPuzzle) -> Result<(), InputError> {
    fs::write(path, format!("{:#}\n", puzzle.problem))?;
    fs::write(solution_path(path), format!("{:#}\n", puzzle.solution))?;
    Ok(())
}

fn solve(file: Option<&Path>, trace: bool) -> ExitCode {
    let mut grid = match read_grid(file) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let solver = BacktrackingSolver::new();
    let started = Instant::now();
    let mut steps = 0_u64;
    let solved = if trace {
        solver.solve_with_observer(&mut grid, &mut |step: SearchStep| {
            steps += 1;
            println!("{step}");
        })
    } else {
        solver.solve_with_observer(&mut grid, &mut |_step: SearchStep| steps += 1)
    };
    log::info!("search took {steps} steps in {:?}", started.elapsed());

    if !solved {
        eprintln!("No solution found");
        return ExitCode::from(1);
    }

    println!("{grid:#}");
    ExitCode::SUCCESS
}

/// Reads and validates a grid, failing fast on conflicting clues so the
/// search never runs on inconsistent input.
fn read_grid(file: Option<&Path>) -> Result<Grid, InputError> {
    let text = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)?,
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let grid: Grid = text.parse()?;
    grid.validate()?;
    Ok(grid)
}
