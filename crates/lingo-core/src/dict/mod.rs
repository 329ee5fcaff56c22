//! Word-list loading and the two per-language models derived from it.
//!
//! `UniversalDictionary` maps a lowercase word to every language claiming it.
//! `TransitionMatrix` stores normalized character-bigram frequencies.

#[cfg(test)]
mod tests;
pub mod transition;
mod universal;
mod wordlist;

pub use transition::{build_matrix, TransitionMatrix};
pub use universal::{build_language_set, build_universal_dictionary, UniversalDictionary};
pub use wordlist::{load_word_list, parse_word_list, WordList};

use std::io;
use std::path::PathBuf;

/// Error raised while reading a word-list resource.
///
/// An empty but readable list is not an error; it loads as an empty `WordList`.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("word list not found or unreadable: {}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list is not valid UTF-8: {}", path.display())]
    InvalidEncoding { path: PathBuf },
}

impl LoadError {
    /// Path of the resource that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::ResourceNotFound { path, .. } | LoadError::InvalidEncoding { path } => path,
        }
    }
}
