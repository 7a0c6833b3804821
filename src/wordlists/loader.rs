//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::config::Language;
use crate::core::Word;
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
/// use wordle_feedback::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_en.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    tracing::debug!(
        path = %path.as_ref().display(),
        count = words.len(),
        "loaded word list"
    );

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_feedback::wordlists::loader::words_from_slice;
/// use wordle_feedback::wordlists::WORDS_EN;
///
/// let words = words_from_slice(WORDS_EN);
/// assert_eq!(words.len(), WORDS_EN.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Resolve the word list: a custom file if given, else the embedded list for `language`
///
/// # Errors
///
/// Returns an I/O error if the custom file cannot be read.
pub fn resolve(language: Language, custom: Option<&Path>) -> io::Result<Vec<Word>> {
    match custom {
        Some(path) => load_from_file(path),
        None => Ok(words_from_slice(super::for_language(language))),
    }
}
