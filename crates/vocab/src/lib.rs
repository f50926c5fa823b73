use std::io;
use std::path::PathBuf;

use thiserror::Error;

mod quiz;
mod report;
mod vocabulary;

pub use quiz::{evaluate_answer, next_question, render_question, Outcome, Question, OPTION_COUNT};
pub use report::{render_list, render_progress};
pub use vocabulary::{
    known_subset, load_known_words, load_vocabulary, parse_known_words, parse_vocabulary,
    remaining_subset, KnownWords, VocabularyEntry,
};

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed vocabulary entry on line {line}: expected headword, reading and meaning separated by tabs")]
    Format { line: usize },
    #[error("the quiz needs at least {OPTION_COUNT} words to choose answers from, only {count} available")]
    InsufficientData { count: usize },
}
