use tracing::{debug, debug_span};

/// Number of character codes: 0..=255 plus the catch-all bucket.
pub const NUM_CODES: usize = 257;

/// Code shared by every character above U+00FF.
pub const OTHER_CODE: u16 = 256;

/// Map a character to its matrix index, capping at [`OTHER_CODE`].
pub fn char_code(ch: char) -> u16 {
    (ch as u32).min(OTHER_CODE as u32) as u16
}

/// Dense character-bigram frequency table for one language.
///
/// Index: `left * NUM_CODES + right`. Cells sum to 1.0 once built from at
/// least one transition, otherwise every cell is zero.
#[derive(Debug, Clone)]
pub struct TransitionMatrix {
    cells: Vec<f64>,
    total_transitions: u64,
}

impl Default for TransitionMatrix {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl TransitionMatrix {
    /// The all-zero matrix.
    pub fn zeroed() -> Self {
        Self {
            cells: vec![0.0; NUM_CODES * NUM_CODES],
            total_transitions: 0,
        }
    }

    /// Count adjacent character pairs inside each word and normalize by the
    /// total. Pairs never cross word boundaries.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let _span = debug_span!("build_matrix", words = words.len()).entered();
        let mut matrix = Self::zeroed();

        for word in words {
            let mut codes = word.as_ref().chars().map(char_code);
            let Some(mut prev) = codes.next() else {
                continue;
            };
            for code in codes {
                matrix.cells[index(prev, code)] += 1.0;
                matrix.total_transitions += 1;
                prev = code;
            }
        }

        if matrix.total_transitions == 0 {
            debug!("no transitions observed, matrix left at zero");
            return matrix;
        }
        let total = matrix.total_transitions as f64;
        for cell in &mut matrix.cells {
            *cell /= total;
        }
        debug!(total_transitions = matrix.total_transitions);
        matrix
    }

    /// Frequency of the transition `left → right`, by code.
    /// Codes beyond [`OTHER_CODE`] are clamped to it.
    pub fn get(&self, left: u16, right: u16) -> f64 {
        self.cells[index(left.min(OTHER_CODE), right.min(OTHER_CODE))]
    }

    /// Frequency of the transition `a → b`.
    pub fn transition(&self, a: char, b: char) -> f64 {
        self.get(char_code(a), char_code(b))
    }

    /// Raw number of character pairs counted while building.
    pub fn total_transitions(&self) -> u64 {
        self.total_transitions
    }

    pub fn is_zero(&self) -> bool {
        self.cells.iter().all(|&c| c == 0.0)
    }

    pub fn sum(&self) -> f64 {
        self.cells.iter().sum()
    }
}

/// Build a normalized transition matrix from one language's words.
pub fn build_matrix<S: AsRef<str>>(words: &[S]) -> TransitionMatrix {
    TransitionMatrix::from_words(words)
}

#[inline]
fn index(left: u16, right: u16) -> usize {
    left as usize * NUM_CODES + right as usize
}
