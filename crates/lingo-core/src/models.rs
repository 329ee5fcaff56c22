//! Per-invocation language models and the detection entry points.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::dict::{
    build_language_set, build_universal_dictionary, load_word_list, LoadError, TransitionMatrix,
    UniversalDictionary, WordList,
};
use crate::language::Language;
use crate::score::{score_with_dictionary, score_with_matrices, tokenize, ScoreDistribution};
use crate::settings::Settings;

/// Both scoring methods applied to one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    /// Word-lookup distribution, including the `unknown` bucket.
    pub dictionary: ScoreDistribution,
    /// Character-bigram distribution over the configured languages only.
    pub matrix: ScoreDistribution,
}

impl Detection {
    pub fn best_dictionary(&self) -> Option<Language> {
        self.dictionary.best()
    }

    pub fn best_matrix(&self) -> Option<Language> {
        self.matrix.best()
    }
}

/// Summary of one language's loaded resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    pub words: usize,
    pub transitions: u64,
}

/// Universal dictionary plus one transition matrix per configured language,
/// all derived from a single load of each word list.
#[derive(Debug, Clone, Default)]
pub struct LanguageModels {
    dictionary: UniversalDictionary,
    matrices: BTreeMap<Language, TransitionMatrix>,
    stats: BTreeMap<Language, LanguageStats>,
}

impl LanguageModels {
    /// Load every word list named in `settings`.
    ///
    /// Any missing list fails the whole load; nothing is substituted.
    pub fn load(settings: &Settings) -> Result<Self, LoadError> {
        let _span = debug_span!("load_models").entered();
        let mut lists = Vec::new();
        for (language, path) in settings.languages() {
            let words = load_word_list(&path)?;
            debug!(%language, path = %path.display(), words = words.len());
            lists.push((language, words));
        }
        Ok(Self::from_word_lists(lists))
    }

    /// Build from already-loaded word lists. `Unknown` entries are ignored.
    pub fn from_word_lists<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = (Language, WordList)>,
    {
        let mut sets = Vec::new();
        let mut matrices = BTreeMap::new();
        let mut stats = BTreeMap::new();
        for (language, words) in lists {
            if language == Language::Unknown {
                continue;
            }
            let matrix = TransitionMatrix::from_words(&words);
            stats.insert(
                language,
                LanguageStats {
                    words: words.len(),
                    transitions: matrix.total_transitions(),
                },
            );
            sets.push(build_language_set(&words, language));
            matrices.insert(language, matrix);
        }
        Self {
            dictionary: build_universal_dictionary(sets),
            matrices,
            stats,
        }
    }

    pub fn dictionary(&self) -> &UniversalDictionary {
        &self.dictionary
    }

    pub fn matrix(&self, language: Language) -> Option<&TransitionMatrix> {
        self.matrices.get(&language)
    }

    pub fn stats(&self, language: Language) -> Option<LanguageStats> {
        self.stats.get(&language).copied()
    }

    /// Languages with a loaded word list, in report order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.matrices.keys().copied()
    }

    /// Score `text` with both methods.
    ///
    /// Returns `None` when the text holds no tokens.
    pub fn detect(&self, text: &str) -> Option<Detection> {
        if is_blank(text) {
            debug!("empty input, nothing to score");
            return None;
        }
        let _span = debug_span!("detect", chars = text.chars().count()).entered();
        Some(Detection {
            dictionary: score_with_dictionary(text, &self.dictionary),
            matrix: score_with_matrices(text, self.matrices.iter().map(|(&l, m)| (l, m))),
        })
    }
}

/// Load fresh models from `settings` and score `text`.
///
/// Empty input short-circuits before any word list is read.
pub fn detect(settings: &Settings, text: &str) -> Result<Option<Detection>, LoadError> {
    if is_blank(text) {
        debug!("empty input, skipping model load");
        return Ok(None);
    }
    Ok(LanguageModels::load(settings)?.detect(text))
}

fn is_blank(text: &str) -> bool {
    tokenize(text).next().is_none()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn words(list: &[&str]) -> WordList {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn sample_models() -> LanguageModels {
        LanguageModels::from_word_lists([
            (Language::French, words(&["le", "chat", "est", "noir", "table"])),
            (Language::English, words(&["the", "cat", "is", "black", "table"])),
            (Language::Spanish, words(&["el", "gato", "es", "negro"])),
        ])
    }

    fn write_lists(dir: &std::path::Path) {
        fs::write(dir.join("wordsFR.txt"), "2\nle\nchat\n").unwrap();
        fs::write(dir.join("wordsEN.txt"), "2\nthe\ncat\n").unwrap();
        fs::write(dir.join("wordsES.txt"), "2\nel\ngato\n").unwrap();
    }

    #[test]
    fn whitespace_only_input_short_circuits() {
        assert_eq!(sample_models().detect("  \n\t "), None);
        assert_eq!(sample_models().detect(""), None);
    }

    #[test]
    fn detects_french_sentence() {
        let d = sample_models().detect("le chat est noir").unwrap();
        assert_eq!(d.best_dictionary(), Some(Language::French));
        assert!((d.dictionary.get(Language::French) - 1.0).abs() < 1e-9);
        assert!((d.matrix.total() - 1.0).abs() < 1e-9);
        assert!(!d.matrix.contains(Language::Unknown));
    }

    #[test]
    fn detects_spanish_sentence_with_unknown_word() {
        let d = sample_models().detect("el gato es xyz").unwrap();
        assert!((d.dictionary.get(Language::Spanish) - 0.75).abs() < 1e-9);
        assert!((d.dictionary.get(Language::Unknown) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn stats_per_language() {
        let m = sample_models();
        let fr = m.stats(Language::French).unwrap();
        assert_eq!(fr.words, 5);
        // le(1) chat(3) est(2) noir(3) table(4)
        assert_eq!(fr.transitions, 13);
        assert!(m.stats(Language::Unknown).is_none());
        assert_eq!(m.dictionary().len(), 13);
    }

    #[test]
    fn mixed_case_word_lists_still_match() {
        let m = LanguageModels::from_word_lists([(Language::French, words(&["Bonjour"]))]);
        let d = m.detect("Bonjour").unwrap();
        assert!((d.dictionary.get(Language::French) - 1.0).abs() < 1e-9);
        assert_eq!(d.dictionary.get(Language::Unknown), 0.0);
    }

    #[test]
    fn unknown_word_list_is_ignored() {
        let m = LanguageModels::from_word_lists([(Language::Unknown, words(&["zzz"]))]);
        assert!(m.dictionary().is_empty());
        assert_eq!(m.languages().count(), 0);
    }

    #[test]
    fn load_from_settings() {
        let dir = tempfile::tempdir().unwrap();
        write_lists(dir.path());
        let settings = Settings::default().with_base_dir(dir.path());
        let m = LanguageModels::load(&settings).unwrap();
        assert_eq!(
            m.languages().collect::<Vec<_>>(),
            Language::KNOWN.to_vec()
        );
        assert!(m.dictionary().lookup("gato").is_some());
        assert!(m.matrix(Language::English).is_some());
    }

    #[test]
    fn missing_list_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        write_lists(dir.path());
        fs::remove_file(dir.path().join("wordsES.txt")).unwrap();
        let settings = Settings::default().with_base_dir(dir.path());
        let err = LanguageModels::load(&settings).unwrap_err();
        assert!(err.path().ends_with("wordsES.txt"));
    }

    #[test]
    fn detect_loads_fresh() {
        let dir = tempfile::tempdir().unwrap();
        write_lists(dir.path());
        let settings = Settings::default().with_base_dir(dir.path());
        let d = detect(&settings, "the cat").unwrap().unwrap();
        assert_eq!(d.best_dictionary(), Some(Language::English));
    }

    #[test]
    fn detect_skips_loading_for_empty_input() {
        // No word lists exist here; empty input must not touch them.
        let settings = Settings::default().with_base_dir("/nonexistent");
        assert!(detect(&settings, "   ").unwrap().is_none());
        assert!(detect(&settings, "word").is_err());
    }
}
