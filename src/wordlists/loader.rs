//! Word list loading and saving
//!
//! The file format is one word per line, no header. Blank lines are ignored
//! and words are case-normalized on load.

use crate::core::Word;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(load_from_str(&content))
}

/// Parse newline-separated words, skipping blank and malformed lines
#[must_use]
pub fn load_from_str(data: &str) -> Vec<Word> {
    data.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("Skipping word list entry {:?}: {e}", line.trim());
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Write words to a file in the word list format
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an I/O error if the directory or file cannot be written.
pub fn save_to_file<P: AsRef<Path>>(path: P, words: &[Word]) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut content = String::with_capacity(words.len() * 6);
    for word in words {
        content.push_str(word.text());
        content.push('\n');
    }
    fs::write(path, content)
}
