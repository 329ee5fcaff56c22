use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::LoadError;

/// One language's vocabulary: lowercase, trimmed words in file order.
pub type WordList = Vec<String>;

/// Read a word list from disk.
///
/// Format: a count header line, then one word per line. See [`parse_word_list`].
pub fn load_word_list(path: &Path) -> Result<WordList, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::InvalidData => LoadError::InvalidEncoding {
            path: path.to_path_buf(),
        },
        _ => LoadError::ResourceNotFound {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let words = parse_word_list(&text);
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Parse word-list text.
///
/// The first line is always skipped. Its count is advisory: a mismatch with
/// the number of words is logged, never rejected. Blank lines are dropped.
pub fn parse_word_list(text: &str) -> WordList {
    let mut lines = text.lines();
    let header = lines.next().unwrap_or_default();

    let words: WordList = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect();

    if let Ok(declared) = header.trim().parse::<usize>() {
        if declared != words.len() {
            debug!(declared, actual = words.len(), "word count header mismatch");
        }
    }
    words
}
