use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lingo_cli::commands::detect_ops::OutputFormat;
use lingo_cli::commands::{config_ops, detect_ops, dict_ops, ResourceOptions};
use lingo_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "lingotool", about = "Guess whether a text is French, English or Spanish")]
struct Cli {
    /// Settings TOML (defaults to the embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory holding the word lists (overrides word_lists.base_dir)
    #[arg(long, global = true)]
    assets: Option<String>,
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Emit log events as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a text with the dictionary and matrix methods
    Detect {
        /// Text to analyze (incompatible with --file)
        #[arg(short, long)]
        text: Option<String>,
        /// File whose contents to analyze (incompatible with --text)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show which languages claim a word
    Lookup {
        /// Word to look up (case-insensitive)
        word: String,
    },
    /// Show word-list and dictionary statistics
    Info,
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let opts = ResourceOptions {
        settings: cli.settings,
        assets: cli.assets,
    };

    match cli.command {
        Command::Detect { text, file, format } => {
            detect_ops::detect_cmd(&opts, text, file, format)
        }
        Command::Lookup { word } => dict_ops::lookup(&opts, &word),
        Command::Info => dict_ops::info(&opts),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
