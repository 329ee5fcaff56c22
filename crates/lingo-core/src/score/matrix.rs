use tracing::{debug, debug_span};

use super::{normalize, tokenize, ScoreDistribution};
use crate::dict::transition::char_code;
use crate::dict::TransitionMatrix;
use crate::language::Language;

/// Sum of the matrix frequencies of every adjacent character pair in every
/// token. Not normalized.
pub fn score_with_matrix(text: &str, matrix: &TransitionMatrix) -> f64 {
    let mut score = 0.0;
    for token in tokenize(text) {
        let mut codes = token.chars().map(char_code);
        let Some(mut prev) = codes.next() else {
            continue;
        };
        for code in codes {
            score += matrix.get(prev, code);
            prev = code;
        }
    }
    score
}

/// Normalized matrix-method distribution over the given languages.
///
/// There is no `Unknown` entry: a text unlike every language still splits
/// its (small) mass across them.
pub fn score_with_matrices<'a, I>(text: &str, matrices: I) -> ScoreDistribution
where
    I: IntoIterator<Item = (Language, &'a TransitionMatrix)>,
{
    let _span = debug_span!("score_with_matrices").entered();
    let raw: ScoreDistribution = matrices
        .into_iter()
        .map(|(language, matrix)| (language, score_with_matrix(text, matrix)))
        .collect();
    debug!(total = raw.total());
    normalize(raw)
}
