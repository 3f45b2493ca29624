use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use wordgrid::boggle::lexicon::length_range;
use wordgrid::boggle::search::{find_all_words, find_all_words_par, sort_by_length};
use wordgrid::boggle::{self, Board, BoggleError, Lexicon};

/// Find every word hidden in a letter grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list, one word per line
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    dict: PathBuf,

    /// Number of board rows
    #[arg(short, long, default_value_t = boggle::DEFAULT_ROWS)]
    rows: usize,

    /// Number of board columns
    #[arg(short, long, default_value_t = boggle::DEFAULT_COLS)]
    cols: usize,

    /// Shortest accepted word, counting "qu" as one letter
    #[arg(long, default_value_t = boggle::DEFAULT_MIN_LENGTH)]
    min_len: usize,

    /// Longest accepted word, counting "qu" as one letter
    #[arg(long, default_value_t = boggle::DEFAULT_MAX_LENGTH)]
    max_len: usize,

    /// Puzzle letters in row-major order. Read from stdin when omitted
    #[arg(short, long, conflicts_with_all = ["board_json", "random"])]
    board: Option<String>,

    /// JSON board file: an array of rows of tokens
    #[arg(long, conflicts_with = "random")]
    board_json: Option<PathBuf>,

    /// Roll a random board instead of reading one
    #[arg(long)]
    random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Search the starting cells in parallel
    #[arg(long)]
    parallel: bool,

    /// Print the board and words as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    board: Vec<Vec<String>>,
    count: usize,
    words: &'a [String],
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    wordgrid::logging::init_logger(cli.verbose);

    if let Err(e) = try_main(&cli) {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Builds the board the user asked for. A short puzzle is only a warning
fn read_board(cli: &Cli) -> anyhow::Result<Board> {
    if let Some(path) = &cli.board_json {
        return Ok(Board::from_json_file(path)?);
    }
    if cli.random {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        return Ok(Board::random(cli.rows, cli.cols, &mut rng)?);
    }

    let mut board = Board::new(cli.rows, cli.cols)?;
    let text = match &cli.board {
        Some(text) => text.clone(),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read puzzle from stdin")?;
            text
        }
    };

    match board.parse(&text) {
        Ok(()) => {}
        Err(e @ BoggleError::LengthMismatch { .. }) => log::warn!("{}", e),
        Err(e) => return Err(e.into()),
    }
    Ok(board)
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let range = length_range(cli.min_len, cli.max_len)?;

    let t_load = Instant::now();
    let lexicon = Lexicon::from_file(&cli.dict, range)?;
    log::info!(
        "Loaded {} words in {:.3}s",
        lexicon.len(),
        t_load.elapsed().as_secs_f64()
    );
    if lexicon.is_empty() {
        log::warn!("No words of length {:?} in {}", lexicon.length_range(), cli.dict.display());
    }
    log::debug!("{} distinct first letters", lexicon.root().next_letters().count());

    let board = read_board(cli)?;
    log::debug!("Board is {}x{}", board.rows(), board.cols());

    let t_solve = Instant::now();
    let words = if cli.parallel {
        find_all_words_par(&board, &lexicon)
    } else {
        find_all_words(&board, &lexicon)
    };
    let words = sort_by_length(words);
    log::info!(
        "Found {} words in {:.3}s",
        words.len(),
        t_solve.elapsed().as_secs_f64()
    );

    if cli.json {
        let report = Report {
            board: board.to_rows(),
            count: words.len(),
            words: &words,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprint!("{}", board);
        for word in &words {
            println!("{}", word);
        }
    }
    Ok(())
}
