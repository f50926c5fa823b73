//! Multiple choice quiz over a vocabulary subset.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{VocabError, VocabularyEntry};

/// Answer options shown per question, one correct plus three distractors.
pub const OPTION_COUNT: usize = 4;

/// One quiz round. All indices point into the vocabulary slice the
/// question was generated from; the answer index and the distractor
/// indices are pairwise distinct, and `display_order` is a permutation
/// of those four.
#[derive(Debug, Clone)]
pub struct Question {
    pub answer_index: usize,
    pub distractor_indices: [usize; OPTION_COUNT - 1],
    pub display_order: [usize; OPTION_COUNT],
    /// 1-based position of the answer within `display_order`.
    pub correct_option: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Exit,
    Correct,
    Incorrect { correct_option: usize },
    Invalid,
}

/// Generates a fresh question by shuffling the full index list and taking
/// the first four, so the picks are distinct and uniform without any
/// retry loop. Needs at least four entries to fill the options.
pub fn next_question(
    vocab: &[VocabularyEntry],
    rng: &mut impl Rng,
) -> Result<Question, VocabError> {
    if vocab.len() < OPTION_COUNT {
        return Err(VocabError::InsufficientData { count: vocab.len() });
    }
    let mut indices: Vec<usize> = (0..vocab.len()).collect();
    indices.shuffle(rng);

    let answer_index = indices[0];
    let distractor_indices = [indices[1], indices[2], indices[3]];
    let mut display_order = [indices[0], indices[1], indices[2], indices[3]];
    display_order.shuffle(rng);

    let correct_option = display_order
        .iter()
        .position(|&index| index == answer_index)
        .unwrap() // the answer is always one of the four
        + 1;
    Ok(Question {
        answer_index,
        distractor_indices,
        display_order,
        correct_option,
    })
}

/// Renders the headword prompt followed by the four candidate annotations
/// in display order.
pub fn render_question(vocab: &[VocabularyEntry], question: &Question) -> String {
    let mut output = format!(
        "What does '{}' mean?\n",
        vocab[question.answer_index].headword
    );
    for (position, &index) in question.display_order.iter().enumerate() {
        output.push_str(&format!("[{}]: {}\n", position + 1, vocab[index].annotation));
    }
    output
}

/// Interprets one line of user input for the given question. Only
/// non-numeric input is `Invalid`; out of range numbers simply count as
/// incorrect answers.
pub fn evaluate_answer(question: &Question, input: &str) -> Outcome {
    match input.trim().parse::<i64>() {
        Ok(0) => Outcome::Exit,
        Ok(choice) if choice == question.correct_option as i64 => Outcome::Correct,
        Ok(_) => Outcome::Incorrect {
            correct_option: question.correct_option,
        },
        Err(_) => Outcome::Invalid,
    }
}
