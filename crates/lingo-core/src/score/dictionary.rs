use tracing::{debug, debug_span};

use super::{normalize, tokenize, ScoreDistribution};
use crate::dict::UniversalDictionary;
use crate::language::Language;

/// Raw per-language word counts.
///
/// Each token adds 1 to every language claiming it, or 1 to `Unknown` when
/// no language does.
pub fn count_with_dictionary(text: &str, dict: &UniversalDictionary) -> ScoreDistribution {
    let mut counts = ScoreDistribution::zeroed(&Language::ALL);
    let mut tokens = 0usize;
    for token in tokenize(text) {
        tokens += 1;
        match dict.lookup(token) {
            Some(languages) => {
                for &language in languages {
                    counts.add(language, 1.0);
                }
            }
            None => counts.add(Language::Unknown, 1.0),
        }
    }
    debug!(tokens, unknown = counts.get(Language::Unknown));
    counts
}

/// Normalized dictionary-method distribution over all four languages.
pub fn score_with_dictionary(text: &str, dict: &UniversalDictionary) -> ScoreDistribution {
    let _span = debug_span!("score_with_dictionary").entered();
    normalize(count_with_dictionary(text, dict))
}
