use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use tracing::info;

use crate::input::{acquire_text, InputSource};
use crate::report;

use super::{load_settings, ResourceOptions};

pub const EXIT_FAILURE: i32 = 1;
/// Usage error, e.g. `--text` combined with `--file`.
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn detect_cmd(
    opts: &ResourceOptions,
    text: Option<String>,
    file: Option<PathBuf>,
    format: OutputFormat,
) {
    let stdin = io::stdin();
    let code = run_detect(opts, text, file, format, stdin.lock(), &mut io::stdout());
    if code != 0 {
        process::exit(code);
    }
}

/// Acquire the text, score it and write the report to `out`.
///
/// Returns the process exit code. Diagnostics go to stderr.
pub fn run_detect<R: BufRead, W: Write>(
    opts: &ResourceOptions,
    text: Option<String>,
    file: Option<PathBuf>,
    format: OutputFormat,
    stdin: R,
    out: &mut W,
) -> i32 {
    let source = match InputSource::from_args(text, file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_USAGE;
        }
    };
    let settings = load_settings(opts);

    let text = match acquire_text(source, stdin, io::stderr()) {
        Ok(Some(text)) => text,
        Ok(None) => {
            eprintln!("No text to analyze.");
            return 0;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_FAILURE;
        }
    };

    let detection = match lingo_core::detect(&settings, &text) {
        Ok(Some(detection)) => detection,
        Ok(None) => {
            eprintln!("No text to analyze.");
            return 0;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_FAILURE;
        }
    };
    info!(
        dictionary = ?detection.best_dictionary(),
        matrix = ?detection.best_matrix(),
        "detection complete"
    );

    let rendered = match format {
        OutputFormat::Text => Ok(report::format_text(&detection, settings.report.decimals)),
        OutputFormat::Json => report::format_json(&detection).map(|json| json + "\n"),
    };
    let written = match rendered {
        Ok(body) => out.write_all(body.as_bytes()),
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_FAILURE;
        }
    };
    if let Err(e) = written {
        eprintln!("Error writing report: {e}");
        return EXIT_FAILURE;
    }
    0
}
