//! Language-membership scoring shared by the dictionary and matrix methods.

mod dictionary;
mod matrix;

pub use dictionary::{count_with_dictionary, score_with_dictionary};
pub use matrix::{score_with_matrices, score_with_matrix};

use std::collections::BTreeMap;

use serde::Serialize;

use crate::language::Language;

/// Per-language scores.
///
/// Languages absent from the map score 0. The matrix method never inserts
/// `Unknown`, the dictionary method always does.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreDistribution {
    scores: BTreeMap<Language, f64>,
}

impl ScoreDistribution {
    /// A distribution with every listed language at 0.
    pub fn zeroed(languages: &[Language]) -> Self {
        Self {
            scores: languages.iter().map(|&l| (l, 0.0)).collect(),
        }
    }

    pub fn add(&mut self, language: Language, amount: f64) {
        *self.scores.entry(language).or_insert(0.0) += amount;
    }

    pub fn get(&self, language: Language) -> f64 {
        self.scores.get(&language).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, language: Language) -> bool {
        self.scores.contains_key(&language)
    }

    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, f64)> + '_ {
        self.scores.iter().map(|(&l, &s)| (l, s))
    }

    /// Highest-scoring language. `None` when every score is 0.
    ///
    /// Ties resolve to the language listed first in [`Language::ALL`].
    pub fn best(&self) -> Option<Language> {
        let mut best: Option<(Language, f64)> = None;
        for (language, score) in self.iter() {
            if score > 0.0 && best.map_or(true, |(_, s)| score > s) {
                best = Some((language, score));
            }
        }
        best.map(|(l, _)| l)
    }
}

impl FromIterator<(Language, f64)> for ScoreDistribution {
    fn from_iter<T: IntoIterator<Item = (Language, f64)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Scale scores so they sum to 1.0.
///
/// A zero total returns the input unchanged.
pub fn normalize(scores: ScoreDistribution) -> ScoreDistribution {
    let total = scores.total();
    if total <= 0.0 {
        return scores;
    }
    scores.iter().map(|(l, s)| (l, s / total)).collect()
}

/// Split text on runs of whitespace, skipping empty tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(char::is_whitespace).filter(|t| !t.is_empty())
}
