//! Command-line interface for generating and filling mini crossword grids

use crate::engine::executor::FillEngine;
use crate::engine::options::{CandidateOptions, FillOptions, GenerateOptions, Symmetry};
use crate::engine::report::FillReport;
use crate::io::configuration::{
    DEFAULT_CANDIDATE_LIMIT, DEFAULT_MAX_RETRIES, DEFAULT_MIN_SCORE, DEFAULT_SEED,
    DEFAULT_TIMEOUT_MS,
};
use crate::io::dictionary;
use crate::io::error::Result;
use crate::io::prefill::{load_exclusion_file, load_grid_file};
use crate::io::progress::ProgressManager;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

/// Command-line arguments for the fill tool
#[derive(Parser)]
#[command(name = "minifill")]
#[command(
    author,
    version,
    about = "Fill 5x5 mini crossword grids from a scored dictionary"
)]
pub struct Cli {
    /// Dictionary file with one WORD;SCORE entry per line
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// The available operations
#[derive(Clone, Subcommand)]
pub enum Command {
    /// Generate puzzles from scratch
    Generate(GenerateArgs),
    /// Fill a partial grid loaded from a file
    Fill(FillArgs),
    /// List arc-consistent candidates for one slot
    Candidates(CandidateArgs),
}

/// Block symmetry choices exposed on the command line
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SymmetryArg {
    /// Use selected templates as-is
    #[default]
    None,
    /// Mirror blocks through the board center
    Rotational,
}

impl From<SymmetryArg> for Symmetry {
    fn from(arg: SymmetryArg) -> Self {
        match arg {
            SymmetryArg::None => Self::None,
            SymmetryArg::Rotational => Self::Rotational,
        }
    }
}

/// Arguments for the generate operation
#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Number of puzzles to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Block layout symmetry
    #[arg(short, long, value_enum, default_value_t = SymmetryArg::None)]
    pub symmetry: SymmetryArg,

    /// Random seed for reproducible output
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Minimum dictionary score for chosen words
    #[arg(short, long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: u32,

    /// Maximum attempts per puzzle
    #[arg(short, long, default_value_t = DEFAULT_MAX_RETRIES)]
    pub retries: usize,

    /// Wall-clock budget per puzzle in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// File with words to exclude, one per line
    #[arg(short, long, value_name = "FILE")]
    pub exclude_file: Option<PathBuf>,

    /// Exclude each puzzle's words from the puzzles after it
    #[arg(long)]
    pub no_repeat: bool,

    /// Print statistics after each puzzle
    #[arg(long)]
    pub stats: bool,
}

/// Arguments for the fill operation
#[derive(Args, Clone)]
pub struct FillArgs {
    /// Grid file with 5 rows of '#', '.', and letters
    #[arg(value_name = "GRID")]
    pub grid: PathBuf,

    /// Random seed for reproducible output
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Minimum dictionary score for chosen words
    #[arg(short, long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: u32,

    /// Maximum fill attempts
    #[arg(short, long, default_value_t = 1)]
    pub retries: usize,

    /// Wall-clock budget in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// File with words to exclude, one per line
    #[arg(short, long, value_name = "FILE")]
    pub exclude_file: Option<PathBuf>,

    /// Shuffle candidates within score tiers for diverse output
    #[arg(long)]
    pub quick: bool,

    /// Print statistics after the fill
    #[arg(long)]
    pub stats: bool,
}

/// Arguments for the candidates operation
#[derive(Args, Clone)]
pub struct CandidateArgs {
    /// Grid file with 5 rows of '#', '.', and letters
    #[arg(value_name = "GRID")]
    pub grid: PathBuf,

    /// Slot handle such as across-0-0 or down-2-1
    #[arg(short, long)]
    pub slot: String,

    /// Truncation limit for the candidate list
    #[arg(short, long, default_value_t = DEFAULT_CANDIDATE_LIMIT)]
    pub limit: usize,

    /// Minimum dictionary score for listed words
    #[arg(short, long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: u32,

    /// File with words to exclude, one per line
    #[arg(short, long, value_name = "FILE")]
    pub exclude_file: Option<PathBuf>,
}

/// Runs the selected operation against a loaded dictionary
pub struct CommandRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CommandRunner {
    /// Create a runner from parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = (!cli.quiet).then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load the dictionary and run the selected operation
    ///
    /// # Errors
    ///
    /// Returns an error when the dictionary or any input file cannot be
    /// loaded, or when the engine reports failure.
    pub fn run(&mut self) -> Result<()> {
        let index = dictionary::load_index(&self.cli.dictionary)?;
        let engine = FillEngine::new(index);

        match self.cli.command.clone() {
            Command::Generate(args) => self.run_generate(&engine, &args),
            Command::Fill(args) => Self::run_fill(&engine, &args),
            Command::Candidates(args) => Self::run_candidates(&engine, &args),
        }
    }

    fn run_generate(&mut self, engine: &FillEngine, args: &GenerateArgs) -> Result<()> {
        let mut exclude = match &args.exclude_file {
            Some(path) => load_exclusion_file(path)?,
            None => Vec::new(),
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(args.count);
        }

        for puzzle in 0..args.count.max(1) {
            let started = Instant::now();

            let options = GenerateOptions {
                symmetry: args.symmetry.into(),
                min_score: args.min_score,
                max_retries: args.retries,
                timeout_ms: Some(args.timeout_ms),
                exclude: exclude.clone(),
                seed: args.seed.wrapping_add(puzzle as u64),
                quick_fill: true,
            };

            let report = engine.generate(&options)?;

            if args.no_repeat {
                exclude.extend(report.placements.iter().map(|p| p.word.clone()));
            }

            print_report(&report, puzzle, args.count, args.stats);

            if let Some(ref pm) = self.progress_manager {
                pm.complete_puzzle(puzzle, started.elapsed());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn run_fill(engine: &FillEngine, args: &FillArgs) -> Result<()> {
        let grid = load_grid_file(&args.grid)?;
        let exclude = match &args.exclude_file {
            Some(path) => load_exclusion_file(path)?,
            None => Vec::new(),
        };

        let options = FillOptions {
            min_score: args.min_score,
            max_retries: args.retries,
            timeout_ms: Some(args.timeout_ms),
            exclude,
            seed: args.seed,
            quick_fill: args.quick,
        };

        let report = engine.fill(&grid, &options)?;
        print_report(&report, 0, 1, args.stats);

        Ok(())
    }

    // Allow print for the candidate listing, the command's product output
    #[allow(clippy::print_stdout)]
    fn run_candidates(engine: &FillEngine, args: &CandidateArgs) -> Result<()> {
        let grid = load_grid_file(&args.grid)?;
        let exclude = match &args.exclude_file {
            Some(path) => load_exclusion_file(path)?,
            None => Vec::new(),
        };

        let options = CandidateOptions {
            limit: args.limit,
            min_score: args.min_score,
            exclude,
        };

        let list = engine.candidates(&grid, &args.slot, &options)?;

        match &list.slot {
            Some(descriptor) => {
                println!(
                    "{} length {} pattern {}",
                    descriptor.handle, descriptor.length, descriptor.pattern
                );
            }
            None => {
                println!("unknown slot '{}'", args.slot);
                return Ok(());
            }
        }

        for candidate in &list.candidates {
            println!("{} {}", candidate.word, candidate.score);
        }
        println!(
            "{} of {} candidates",
            list.candidates.len(),
            list.total_candidates
        );

        Ok(())
    }
}

// Allow print for puzzle output, the tool's product surface
#[allow(clippy::print_stdout)]
fn print_report(report: &FillReport, puzzle: usize, count: usize, stats: bool) {
    if count > 1 {
        println!("# Puzzle {}", puzzle + 1);
    }

    println!("{}", report.grid.render());

    for placement in &report.placements {
        println!(
            "{}-{}-{} {} {}",
            placement.direction, placement.row, placement.col, placement.word, placement.score
        );
    }

    if stats {
        println!(
            "quality {} attempts {} backtracks {} searches {} elapsed {} ms",
            report.quality.score,
            report.stats.attempts,
            report.stats.backtracks,
            report.stats.pattern_searches,
            report.stats.elapsed_ms
        );
    }

    println!();
}
