//! Acquiring the text to analyze: direct argument, file, or interactive prompt.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

pub const PROMPT: &str = "Type a text to analyze: ";

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("--file cannot be combined with --text")]
    Conflicting,

    #[error("input file does not exist or is not readable: {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read from stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Where the text comes from. Exactly one source per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Interactive,
}

impl InputSource {
    /// Choose a source from the optional `--text` / `--file` arguments.
    ///
    /// Both present is a usage error; neither means an interactive prompt.
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> Result<Self, InputError> {
        match (text, file) {
            (Some(_), Some(_)) => Err(InputError::Conflicting),
            (Some(text), None) => Ok(InputSource::Text(text)),
            (None, Some(path)) => Ok(InputSource::File(path)),
            (None, None) => Ok(InputSource::Interactive),
        }
    }
}

/// Read the text for `source`.
///
/// `Ok(None)` means no usable text was obtained (empty or whitespace only).
/// The prompt is written to `prompt_out` and a single line is read from
/// `stdin` when the source is interactive.
pub fn acquire_text<R: BufRead, W: Write>(
    source: InputSource,
    mut stdin: R,
    mut prompt_out: W,
) -> Result<Option<String>, InputError> {
    let text = match source {
        InputSource::Text(text) => text,
        InputSource::File(path) => match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(source) => return Err(InputError::Unreadable { path, source }),
        },
        InputSource::Interactive => {
            write!(prompt_out, "{PROMPT}").map_err(InputError::Stdin)?;
            prompt_out.flush().map_err(InputError::Stdin)?;
            let mut line = String::new();
            stdin.read_line(&mut line).map_err(InputError::Stdin)?;
            line
        }
    };

    if text.trim().is_empty() {
        debug!("no usable input text");
        return Ok(None);
    }
    Ok(Some(text))
}
