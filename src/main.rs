//! Wordle Keys - CLI
//!
//! Interactive assistant (default) plus word list utilities.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wordle_keys::{
    commands::{classify_words, parse_frequencies, rank_by_letter_frequency, sort_by_frequency},
    input::{ScriptedKeys, TerminalKeys},
    interactive::{Flow, Session, SessionConfig, TerminalPresenter, run_session},
    output::{print_classify_result, print_missing_words, write_words},
    wordlists::{
        ALLOWED_GUESSES_FILE, ANSWER_WORDS_FILE, Vocabulary, loader::load_from_file,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_keys",
    about = "Key in Wordle colours, get remaining answers and probe words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print compiled patterns and vocabulary sizes
    #[arg(short, long, global = true)]
    debug: bool,

    /// Keep answers from past puzzles in the candidate pool
    #[arg(short = 'u', long, global = true)]
    include_used: bool,

    /// Answer word list, most frequent first
    #[arg(long, global = true, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/", "wordle-words/answer-words.manual.sorted.by.freq.txt"))]
    answers: PathBuf,

    /// Allowed guess list, most frequent first
    #[arg(long, global = true, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/", "wordle-words/allowed-guesses.wordle-code.sorted.by.freq.txt"))]
    allowed: PathBuf,

    /// List of answers already used in past puzzles
    #[arg(long, global = true, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/", "wordle-words/used-answers.txt"))]
    used: PathBuf,

    /// Maximum number of candidates and probes shown after each guess
    #[arg(short, long, global = true, default_value_t = 20)]
    show: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Show the feedback a guess gets against a secret
    Classify {
        /// The guessed word
        guess: String,
        /// The secret word
        secret: String,
    },

    /// Reorder a word list by usage frequency from a `word,count` CSV
    SortByFreq {
        /// Word list to reorder
        words: PathBuf,
        /// Frequency table
        freq_csv: PathBuf,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Order a word list by how common its letters are across the list
    LetterRank {
        /// Word list to score
        words: PathBuf,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    wordle_keys::log::init_logger(cli.debug);

    match try_main(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<ExitCode> {
    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => run_play_command(cli),
        Some(Commands::Classify { guess, secret }) => {
            let result = classify_words(guess, secret)?;
            print_classify_result(&result);
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::SortByFreq {
            words,
            freq_csv,
            output,
        }) => {
            run_sort_command(words, freq_csv, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::LetterRank { words, output }) => {
            run_rank_command(words, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_play_command(cli: &Cli) -> Result<ExitCode> {
    let mut vocabulary = Vocabulary::load(&cli.answers, &cli.allowed).with_context(|| {
        format!("loading vocabularies (defaults are {ANSWER_WORDS_FILE} and {ALLOWED_GUESSES_FILE})")
    })?;
    if cli.include_used {
        log::debug!("keeping past answers listed in {}", cli.used.display());
    } else {
        vocabulary = vocabulary.without_used(&cli.used);
    }

    let config = SessionConfig {
        debug: cli.debug,
        show_limit: cli.show,
    };
    let mut presenter = TerminalPresenter::stdout();
    presenter.print_banner(vocabulary.answers.len(), vocabulary.allowed.len())?;
    let mut session = Session::new(config, &vocabulary.answers, &vocabulary.allowed, presenter);

    let flow = if io::stdin().is_terminal() {
        run_session(&mut session, &mut TerminalKeys)?
    } else {
        // Piped input: replay the bytes as key chords
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("reading keys from stdin")?;
        run_session(&mut session, &mut ScriptedKeys::from_bytes(&bytes))?
    };

    Ok(match flow {
        Flow::Lost => ExitCode::FAILURE,
        Flow::Continue | Flow::Won(_) | Flow::Aborted => ExitCode::SUCCESS,
    })
}

fn run_sort_command(words: &Path, freq_csv: &Path, output: Option<&Path>) -> Result<()> {
    let list = load_from_file(words)?;
    let csv = fs::read_to_string(freq_csv)
        .with_context(|| format!("cannot read frequency table {}", freq_csv.display()))?;

    let result = sort_by_frequency(&list, &parse_frequencies(&csv));
    print_missing_words(&words.display().to_string(), &result);
    write_output(output, result.sorted.iter().map(|(w, _)| *w))
}

fn run_rank_command(words: &Path, output: Option<&Path>) -> Result<()> {
    let list = load_from_file(words)?;
    let ranked = rank_by_letter_frequency(&list);
    write_output(output, ranked.iter().map(|(w, _)| *w))
}

fn write_output<'a>(
    output: Option<&Path>,
    words: impl IntoIterator<Item = &'a wordle_keys::core::Word>,
) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write_words(&mut file, words)?;
        }
        None => write_words(&mut io::stdout().lock(), words)?,
    }
    Ok(())
}
