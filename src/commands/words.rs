//! Word list report and export
//!
//! Filters combine: a word is listed only if it satisfies every filter given.

use crate::core::Word;
use crate::wordlists::WordSource;
use crate::wordlists::loader::save_to_file;
use anyhow::{Context, Result};
use log::info;
use rand::Rng;
use std::path::Path;

/// Filters for the word report
#[derive(Debug, Clone, Default)]
pub struct WordQuery {
    pub prefix: Option<String>,
    pub letter: Option<char>,
    /// `?` matches any letter
    pub pattern: Option<String>,
    /// Words to list and common letters to show
    pub top: usize,
}

impl WordQuery {
    fn is_filtered(&self) -> bool {
        self.prefix.is_some() || self.letter.is_some() || self.pattern.is_some()
    }

    fn describe(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(prefix) = &self.prefix {
            parts.push(format!("prefix '{prefix}'"));
        }
        if let Some(letter) = self.letter {
            parts.push(format!("letter '{letter}'"));
        }
        if let Some(pattern) = &self.pattern {
            parts.push(format!("pattern '{pattern}'"));
        }
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

/// Summary of the loaded word lists
pub struct WordReport {
    pub word_length: usize,
    pub answers: usize,
    pub accepted: usize,
    pub common_letters: Vec<(char, usize)>,
    pub filter: Option<String>,
    pub matches: Vec<String>,
    pub total_matches: usize,
}

/// Build a report over the secret word list
///
/// Without filters the listed words are a random sample.
pub fn word_report<R: Rng + ?Sized>(
    source: &WordSource,
    query: &WordQuery,
    rng: &mut R,
) -> WordReport {
    let common_letters = source
        .most_common_letters(query.top)
        .into_iter()
        .map(|(letter, count)| (char::from(letter), count))
        .collect();

    let (matches, total_matches) = if query.is_filtered() {
        let found = filtered(source, query);
        let total = found.len();
        (found.into_iter().take(query.top).collect(), total)
    } else {
        (source.sample(query.top, rng), source.len())
    };

    WordReport {
        word_length: source.word_length(),
        answers: source.len(),
        accepted: source.accepted_count(),
        common_letters,
        filter: query.describe(),
        matches: matches.iter().map(|w| w.text().to_string()).collect(),
        total_matches,
    }
}

fn filtered<'a>(source: &'a WordSource, query: &WordQuery) -> Vec<&'a Word> {
    let mut words: Vec<&Word> = source.answers().iter().collect();

    if let Some(prefix) = &query.prefix {
        let allowed = source.words_starting_with(prefix);
        words.retain(|w| allowed.contains(w));
    }
    if let Some(letter) = query.letter {
        let allowed = source.words_containing(letter);
        words.retain(|w| allowed.contains(w));
    }
    if let Some(pattern) = &query.pattern {
        let allowed = source.words_matching(pattern);
        words.retain(|w| allowed.contains(w));
    }

    words
}

/// Write the secret word list to `path`, returning the number of words
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_words(source: &WordSource, path: &Path) -> Result<usize> {
    save_to_file(path, source.answers())
        .with_context(|| format!("Failed to export words to {}", path.display()))?;
    info!("Exported {} words to {}", source.len(), path.display());
    Ok(source.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::{load_from_file, words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn source() -> WordSource {
        WordSource::new(
            words_from_slice(&["apple", "ample", "angle", "crane", "trace", "alloy"]),
            words_from_slice(&["zesty"]),
            5,
        )
        .unwrap()
    }

    fn query() -> WordQuery {
        WordQuery {
            top: 10,
            ..WordQuery::default()
        }
    }

    #[test]
    fn unfiltered_report_samples_words() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(7);
        let report = word_report(
            &source,
            &WordQuery {
                top: 3,
                ..WordQuery::default()
            },
            &mut rng,
        );

        assert_eq!(report.answers, 6);
        assert_eq!(report.accepted, 7);
        assert_eq!(report.matches.len(), 3);
        assert!(report.filter.is_none());
        assert_eq!(report.common_letters.len(), 3);
        assert_eq!(report.common_letters[0].0, 'a');
    }

    #[test]
    fn filters_combine() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(7);

        let report = word_report(
            &source,
            &WordQuery {
                prefix: Some("a".to_string()),
                pattern: Some("a??le".to_string()),
                ..query()
            },
            &mut rng,
        );
        assert_eq!(report.matches, vec!["apple", "ample", "angle"]);
        assert_eq!(report.total_matches, 3);
        assert_eq!(
            report.filter.as_deref(),
            Some("prefix 'a', pattern 'a??le'")
        );

        let report = word_report(
            &source,
            &WordQuery {
                letter: Some('p'),
                pattern: Some("a??le".to_string()),
                ..query()
            },
            &mut rng,
        );
        assert_eq!(report.matches, vec!["apple", "ample"]);
    }

    #[test]
    fn top_limits_listing_but_not_total() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(7);
        let report = word_report(
            &source,
            &WordQuery {
                letter: Some('a'),
                top: 2,
                ..WordQuery::default()
            },
            &mut rng,
        );

        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.total_matches, 6);
    }

    #[test]
    fn export_writes_secret_words() {
        let source = source();
        let path = std::env::temp_dir()
            .join(format!("wordle_export_{}", std::process::id()))
            .join("words.txt");

        assert_eq!(export_words(&source, &path).unwrap(), 6);
        assert_eq!(load_from_file(&path).unwrap(), source.answers());

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
