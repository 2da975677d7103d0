//! Wordle Hints - CLI
//!
//! Hint engine for Wordle with TUI and line modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_hints::{
    commands::{
        BenchmarkConfig, SolveConfig, run_benchmark, run_simple, session_from_rows, solve_word,
    },
    engine::EngineState,
    output::{print_benchmark_result, print_found, print_hints, print_solve_result, print_victory},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_hints",
    about = "Wordle hints: candidate filtering, frequency ranking and probe words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Suggestions shown per list
    #[arg(short = 't', long, global = true, default_value = "3")]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line based, without TUI)
    Simple,

    /// Print hints for rows given as WORD:FEEDBACK, e.g. crane:G-Y--
    Suggest {
        /// Submitted rows in order
        rows: Vec<String>,
    },

    /// Play a known target word with the top suggestion each turn
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and probe words per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the frequency strategy on random dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List dictionary words containing all the given letters
    Find {
        /// Letters that must all appear
        letters: String,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(Dictionary::embedded()),
        path => Dictionary::load(path),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.wordlist)?;
    log::debug!("dictionary has {} words", dictionary.len());

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, cli.top),
        Commands::Simple => run_simple(&dictionary, cli.top),
        Commands::Suggest { rows } => run_suggest_command(&dictionary, &rows, cli.top),
        Commands::Solve { word, verbose } => {
            let result = solve_word(SolveConfig::new(word), &dictionary)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random words...");
            let config = BenchmarkConfig {
                seed,
                ..BenchmarkConfig::new(count)
            };
            let result = run_benchmark(&dictionary, &config)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Find { letters } => {
            let words = dictionary.find_containing(&letters)?;
            print_found(&words);
            Ok(())
        }
    }
}

fn run_suggest_command(dictionary: &Dictionary, rows: &[String], top: usize) -> Result<()> {
    let session = session_from_rows(dictionary, rows)?;

    match session.state() {
        EngineState::Solved => print_victory(&session),
        EngineState::Exhausted => {
            print_hints(&session, top);
            println!("No dictionary word fits this feedback; check the rows.");
        }
        EngineState::Collecting => print_hints(&session, top),
    }
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, top: usize) -> Result<()> {
    use wordle_hints::interactive::{App, run_tui};

    let app = App::new(dictionary, top);
    run_tui(app)
}
