use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use vocab::{
    evaluate_answer, known_subset, next_question, remaining_subset, render_list, render_progress,
    render_question, Outcome, VocabularyEntry,
};

const DEFAULT_VOCAB_FILE: &str = "hsk-vocab.txt";
const DEFAULT_KNOWN_WORDS_FILE: &str = "words.duo";
const LEGACY_KNOWN_WORDS_FILE: &str = "known-words.txt";

const USAGE: &str = "
Usage: hsk-check [actions...]

Actions:
    print-full-hsk          Print the full HSK vocabulary from the vocabulary file.
    print-remaining-hsk     Print HSK vocabulary words those are unknown yet.
    print-known-hsk         Print only known HSK words with meanings from HSK vocabulary.
    print-progress          Print graphics \"I know this count - I need to learn this count\".
    play-game               Play a multiple choice quiz over the known words (0 quits).
";

#[derive(Debug, Parser)]
#[command(about = "Checks HSK vocabulary learning progress")]
struct Cli {
    /// Actions to perform; unrecognized tokens are ignored.
    actions: Vec<String>,
    /// Tab separated vocabulary file (headword, reading, meaning).
    #[arg(long, default_value = DEFAULT_VOCAB_FILE)]
    vocab_file: PathBuf,
    /// Known words file, one word per line; extra fields after a `;` or a
    /// tab are ignored. Defaults to words.duo, falling back to the legacy
    /// known-words.txt when words.duo does not exist.
    #[arg(long)]
    known_words_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.actions.is_empty() {
        print!("{USAGE}");
        return Ok(());
    }

    let known_words_file = cli
        .known_words_file
        .unwrap_or_else(default_known_words_file);
    let known_words = vocab::load_known_words(&known_words_file)
        .with_context(|| format!("failed to load {}", known_words_file.display()))?;
    let vocabulary = vocab::load_vocabulary(&cli.vocab_file)
        .with_context(|| format!("failed to load {}", cli.vocab_file.display()))?;

    let wants = |action: &str| cli.actions.iter().any(|token| token == action);

    if wants("print-known-hsk") {
        println!("\nYou do know this words:\n");
        print!("{}", render_list(&known_subset(&known_words, &vocabulary)));
    }
    if wants("print-remaining-hsk") {
        println!("\nYou should learn these words:\n");
        print!(
            "{}",
            render_list(&remaining_subset(&known_words, &vocabulary))
        );
    }
    if wants("print-full-hsk") {
        println!("\nHSK Vocabulary:\n");
        print!("{}", render_list(&vocabulary));
    }
    if wants("print-progress") {
        println!();
        print!("{}", render_progress(&vocabulary, &known_words));
    }
    if wants("play-game") {
        play_game(&known_subset(&known_words, &vocabulary))?;
    }
    Ok(())
}

fn default_known_words_file() -> PathBuf {
    let default = Path::new(DEFAULT_KNOWN_WORDS_FILE);
    if !default.exists() && Path::new(LEGACY_KNOWN_WORDS_FILE).exists() {
        PathBuf::from(LEGACY_KNOWN_WORDS_FILE)
    } else {
        default.to_owned()
    }
}

fn play_game(words: &[VocabularyEntry]) -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    'game: loop {
        let question = next_question(words, &mut rng)?;
        println!("{}", render_question(words, &question));
        loop {
            let answer = input("Enter the correct answer (0 to quit): ")?;
            match evaluate_answer(&question, &answer) {
                Outcome::Exit => {
                    println!("Goodbye!");
                    break 'game;
                }
                Outcome::Correct => {
                    println!("The answer is correct. Well done!");
                    break;
                }
                Outcome::Incorrect { correct_option } => {
                    println!("The answer is incorrect. The right answer is [{correct_option}].");
                    break;
                }
                Outcome::Invalid => {
                    println!("Couldn't understand your answer, please try again.");
                }
            }
        }
        println!("----------------------------------------");
    }
    Ok(())
}

fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
