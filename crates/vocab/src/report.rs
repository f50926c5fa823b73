//! Plain text rendering of vocabulary listings and the progress chart.

use crate::{KnownWords, VocabularyEntry};

/// Renders one numbered line per entry. Headwords shorter than three
/// characters get an extra tab so the annotation column lines up.
pub fn render_list(entries: &[VocabularyEntry]) -> String {
    let mut output = String::new();
    for (index, entry) in entries.iter().enumerate() {
        let counter = index + 1;
        if entry.headword.chars().count() < 3 {
            output.push_str(&format!(
                "{} \t {} \t {}\n",
                counter, entry.headword, entry.annotation
            ));
        } else {
            output.push_str(&format!(
                "{} \t {} {}\n",
                counter, entry.headword, entry.annotation
            ));
        }
    }
    output
}

/// Renders the learned and remaining counts as labeled bars of asterisks.
pub fn render_progress(vocab: &[VocabularyEntry], known: &KnownWords) -> String {
    let learned = vocab
        .iter()
        .filter(|entry| known.contains(&entry.headword))
        .count();
    let remaining = vocab.len() - learned;
    format!(
        "Learned {learned}:\n{}\n\nNeed to learn {remaining}/{total}:\n{}\n",
        "*".repeat(learned),
        "*".repeat(remaining),
        total = vocab.len(),
    )
}
