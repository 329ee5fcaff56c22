use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages a text can be attributed to.
///
/// `Unknown` is the catch-all for tokens no configured language claims.
/// The derived ordering puts it first so reports list it consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Unknown,
    French,
    English,
    Spanish,
}

/// Set of languages a single word is valid in.
pub type LanguageSet = BTreeSet<Language>;

impl Language {
    /// Every language, including `Unknown`.
    pub const ALL: [Language; 4] = [
        Language::Unknown,
        Language::French,
        Language::English,
        Language::Spanish,
    ];

    /// Languages backed by a word list, in report order.
    pub const KNOWN: [Language; 3] = [Language::French, Language::English, Language::Spanish];

    pub fn name(self) -> &'static str {
        match self {
            Language::Unknown => "unknown",
            Language::French => "french",
            Language::English => "english",
            Language::Spanish => "spanish",
        }
    }

    /// Human-readable label used in text reports.
    pub fn label(self) -> &'static str {
        match self {
            Language::Unknown => "unrecognized",
            Language::French => "French",
            Language::English => "English",
            Language::Spanish => "Spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_excludes_unknown() {
        assert!(!Language::KNOWN.contains(&Language::Unknown));
        assert_eq!(Language::ALL.len(), Language::KNOWN.len() + 1);
    }

    #[test]
    fn display_matches_serde_name() {
        #[derive(Serialize)]
        struct Row {
            lang: Language,
        }
        let row = toml::to_string(&Row {
            lang: Language::Spanish,
        })
        .unwrap();
        assert_eq!(row.trim(), format!("lang = \"{}\"", Language::Spanish));
    }
}
