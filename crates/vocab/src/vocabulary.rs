//! Loading and filtering of the HSK vocabulary and the known words list.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::VocabError;

/// Headwords the user has already learned. Only presence matters.
pub type KnownWords = HashSet<String>;

/// One vocabulary record: the headword is the lookup key, the annotation
/// is the pre-joined reading and meaning shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub headword: String,
    pub annotation: String,
}

/// Parses a tab separated vocabulary source, one entry per line, in file
/// order. Blank lines are skipped; any other line needs at least three
/// fields (headword, reading, meaning).
pub fn parse_vocabulary(content: &str) -> Result<Vec<VocabularyEntry>, VocabError> {
    let mut entries = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(headword), Some(reading), Some(meaning)) => {
                entries.push(VocabularyEntry {
                    headword: headword.trim().to_owned(),
                    annotation: format!("{}\t\t{}", reading.trim(), meaning.trim()),
                });
            }
            _ => return Err(VocabError::Format { line: index + 1 }),
        }
    }
    Ok(entries)
}

pub fn load_vocabulary(path: impl AsRef<Path>) -> Result<Vec<VocabularyEntry>, VocabError> {
    parse_vocabulary(&read_source(path.as_ref())?)
}

/// Parses the known words source. Each line yields one headword: the part
/// before the first `;` if there is one, else the part before the first
/// tab, else the whole trimmed line. Blank lines are skipped so that an
/// empty-string key never ends up in the set.
pub fn parse_known_words(content: &str) -> KnownWords {
    let mut words = HashSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let key = match line.split_once(';') {
            Some((key, _)) => key,
            None => match line.split_once('\t') {
                Some((key, _)) => key,
                None => line,
            },
        };
        words.insert(key.trim().to_owned());
    }
    words
}

pub fn load_known_words(path: impl AsRef<Path>) -> Result<KnownWords, VocabError> {
    Ok(parse_known_words(&read_source(path.as_ref())?))
}

/// Entries of `vocab` the user already knows, in vocabulary order.
pub fn known_subset(known: &KnownWords, vocab: &[VocabularyEntry]) -> Vec<VocabularyEntry> {
    vocab
        .iter()
        .filter(|entry| known.contains(&entry.headword))
        .cloned()
        .collect()
}

/// Entries of `vocab` still left to learn, in vocabulary order.
pub fn remaining_subset(known: &KnownWords, vocab: &[VocabularyEntry]) -> Vec<VocabularyEntry> {
    vocab
        .iter()
        .filter(|entry| !known.contains(&entry.headword))
        .cloned()
        .collect()
}

fn read_source(path: &Path) -> Result<String, VocabError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            VocabError::NotFound {
                path: path.to_owned(),
            }
        } else {
            VocabError::Io {
                path: path.to_owned(),
                source,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(headword: &str, annotation: &str) -> VocabularyEntry {
        VocabularyEntry {
            headword: headword.to_owned(),
            annotation: annotation.to_owned(),
        }
    }

    #[test]
    fn parses_entries_in_file_order() {
        let source = "你\tnǐ\tyou\n好\thǎo\tgood\n我\twǒ\tI\n";
        let vocabulary = parse_vocabulary(source).unwrap();
        assert_eq!(
            vocabulary,
            vec![
                entry("你", "nǐ\t\tyou"),
                entry("好", "hǎo\t\tgood"),
                entry("我", "wǒ\t\tI"),
            ]
        );
    }

    #[test]
    fn trims_fields_and_skips_blank_lines() {
        let source = " 你 \t nǐ \t you \n\n好\thǎo\tgood\n";
        let vocabulary = parse_vocabulary(source).unwrap();
        assert_eq!(
            vocabulary,
            vec![entry("你", "nǐ\t\tyou"), entry("好", "hǎo\t\tgood")]
        );
    }

    #[test]
    fn extra_fields_beyond_the_third_are_ignored() {
        let vocabulary = parse_vocabulary("你\tnǐ\tyou\tHSK1\n").unwrap();
        assert_eq!(vocabulary, vec![entry("你", "nǐ\t\tyou")]);
    }

    #[test]
    fn short_line_is_a_format_error() {
        let source = "你\tnǐ\tyou\n好\thǎo\n";
        let error = parse_vocabulary(source).unwrap_err();
        assert!(matches!(error, VocabError::Format { line: 2 }));
    }

    #[test]
    fn missing_vocabulary_file_is_not_found() {
        let error = load_vocabulary("no-such-vocab-file.txt").unwrap_err();
        assert!(matches!(error, VocabError::NotFound { .. }));
    }

    #[test]
    fn known_words_take_the_field_before_the_semicolon() {
        let known = parse_known_words("你;level2\n");
        assert_eq!(known, HashSet::from(["你".to_owned()]));
    }

    #[test]
    fn known_words_fall_back_to_tab_then_whole_line() {
        let known = parse_known_words("你\tsome note\n好\n");
        assert_eq!(known, HashSet::from(["你".to_owned(), "好".to_owned()]));
    }

    #[test]
    fn semicolon_takes_priority_over_tab() {
        let known = parse_known_words("你;level\textra\n");
        assert_eq!(known, HashSet::from(["你".to_owned()]));
    }

    #[test]
    fn blank_known_words_lines_are_skipped() {
        let known = parse_known_words("你\n\n   \n好\n");
        assert_eq!(known.len(), 2);
        assert!(!known.contains(""));
    }

    #[test]
    fn missing_known_words_file_is_not_found() {
        let error = load_known_words("no-such-words-file.duo").unwrap_err();
        assert!(matches!(error, VocabError::NotFound { .. }));
    }

    #[test]
    fn subsets_partition_the_vocabulary() {
        let vocabulary = parse_vocabulary("你\tnǐ\tyou\n好\thǎo\tgood\n我\twǒ\tI\n").unwrap();
        let known = parse_known_words("你\n我\n");

        let learned = known_subset(&known, &vocabulary);
        let remaining = remaining_subset(&known, &vocabulary);

        assert_eq!(learned, vec![vocabulary[0].clone(), vocabulary[2].clone()]);
        assert_eq!(remaining, vec![vocabulary[1].clone()]);
        assert_eq!(learned.len() + remaining.len(), vocabulary.len());
        for entry in &learned {
            assert!(!remaining.contains(entry));
        }
    }

    #[test]
    fn unknown_known_words_do_not_affect_the_partition() {
        let vocabulary = parse_vocabulary("你\tnǐ\tyou\n").unwrap();
        let known = parse_known_words("苹果\n");
        assert!(known_subset(&known, &vocabulary).is_empty());
        assert_eq!(remaining_subset(&known, &vocabulary), vocabulary);
    }
}
