use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::language::{Language, LanguageSet};

/// Map every word of one language's list to the singleton `{language}`.
///
/// Keys are lowercased to match [`UniversalDictionary::lookup`]. Duplicate
/// words are idempotent.
pub fn build_language_set<S: AsRef<str>>(
    words: &[S],
    language: Language,
) -> HashMap<String, LanguageSet> {
    words
        .iter()
        .map(|w| (w.as_ref().to_lowercase(), LanguageSet::from([language])))
        .collect()
}

/// Merge per-language mappings into one [`UniversalDictionary`].
///
/// Memberships are combined with set union, so merge order does not matter.
pub fn build_universal_dictionary<I>(per_language: I) -> UniversalDictionary
where
    I: IntoIterator<Item = HashMap<String, LanguageSet>>,
{
    let _span = debug_span!("build_universal_dictionary").entered();
    let mut entries: HashMap<String, LanguageSet> = HashMap::new();
    for set in per_language {
        for (word, languages) in set {
            entries.entry(word).or_default().extend(languages);
        }
    }
    entries.retain(|_, languages| !languages.is_empty());
    debug!(words = entries.len());
    UniversalDictionary { entries }
}

/// Word → languages mapping spanning every configured language.
#[derive(Debug, Clone, Default)]
pub struct UniversalDictionary {
    entries: HashMap<String, LanguageSet>,
}

impl UniversalDictionary {
    /// Languages claiming `word`, compared case-insensitively.
    pub fn lookup(&self, word: &str) -> Option<&LanguageSet> {
        self.entries.get(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Words valid in more than one language, sorted.
    pub fn ambiguous_words(&self) -> Vec<(&str, &LanguageSet)> {
        let mut words: Vec<(&str, &LanguageSet)> = self
            .entries
            .iter()
            .filter(|(_, langs)| langs.len() > 1)
            .map(|(w, langs)| (w.as_str(), langs))
            .collect();
        words.sort_by(|a, b| a.0.cmp(b.0));
        words
    }

    /// Number of words claimed by `language`.
    pub fn count_for(&self, language: Language) -> usize {
        self.entries
            .values()
            .filter(|langs| langs.contains(&language))
            .count()
    }
}

impl FromIterator<(String, LanguageSet)> for UniversalDictionary {
    fn from_iter<T: IntoIterator<Item = (String, LanguageSet)>>(iter: T) -> Self {
        let mut entries: HashMap<String, LanguageSet> = HashMap::new();
        for (word, languages) in iter {
            entries.entry(word.to_lowercase()).or_default().extend(languages);
        }
        entries.retain(|_, languages| !languages.is_empty());
        UniversalDictionary { entries }
    }
}
