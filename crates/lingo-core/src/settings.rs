//! Settings loaded from TOML.
//!
//! - `parse_settings_toml(content)` parses and validates a custom file
//! - `Settings::default()` parses the embedded `default_settings.toml`
//! - There is no global instance: callers build a `Settings` and pass it in

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::language::Language;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Upper bound for `report.decimals`.
const MAX_DECIMALS: usize = 6;

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub word_lists: WordListSettings,
    pub report: ReportSettings,
}

/// Language → word-list resource mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct WordListSettings {
    #[serde(default)]
    pub base_dir: PathBuf,
    pub french: PathBuf,
    pub english: PathBuf,
    pub spanish: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    pub decimals: usize,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    }
}

impl Settings {
    /// Replace the directory word-list names are resolved against.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.word_lists.base_dir = dir.into();
        self
    }

    /// Resolved word-list path for `language`. `None` for `Unknown`.
    pub fn word_list_path(&self, language: Language) -> Option<PathBuf> {
        let file = match language {
            Language::Unknown => return None,
            Language::French => &self.word_lists.french,
            Language::English => &self.word_lists.english,
            Language::Spanish => &self.word_lists.spanish,
        };
        Some(self.word_lists.base_dir.join(file))
    }

    /// Configured languages paired with their resolved word-list paths.
    pub fn languages(&self) -> Vec<(Language, PathBuf)> {
        Language::KNOWN
            .into_iter()
            .filter_map(|l| self.word_list_path(l).map(|p| (l, p)))
            .collect()
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

/// Parse a settings file, resolving a relative `base_dir` against the file's
/// own directory.
pub fn load_settings_file(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let mut s = parse_settings_toml(&content)?;
    if s.word_lists.base_dir.is_relative() {
        if let Some(parent) = path.parent() {
            s.word_lists.base_dir = parent.join(&s.word_lists.base_dir);
        }
    }
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty_path {
        ($section:ident . $field:ident) => {
            if s.$section.$field.as_os_str().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty_path!(word_lists.french);
    check_non_empty_path!(word_lists.english);
    check_non_empty_path!(word_lists.spanish);

    if s.report.decimals > MAX_DECIMALS {
        return Err(SettingsError::InvalidValue {
            field: "report.decimals".to_string(),
            reason: format!("must be at most {MAX_DECIMALS}"),
        });
    }

    Ok(())
}
