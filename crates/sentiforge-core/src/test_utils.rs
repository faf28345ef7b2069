//! Test utilities for sentiforge-core
//!
//! Provides common fixtures used across the crate's test modules.

use crate::estimator::{Polarity, PolarityEstimator};
use crate::lexicon::{Lexicon, LexiconEntry};
use crate::scorer::Scorer;

/// An estimator that ignores its input and returns a fixed polarity.
#[derive(Debug, Clone, Copy)]
pub struct FixedEstimator(pub Polarity);

impl FixedEstimator {
    /// Fixed polarity with zero subjectivity.
    pub fn polarity(polarity: f64) -> Self {
        Self(Polarity::new(polarity, 0.0))
    }
}

impl PolarityEstimator for FixedEstimator {
    fn estimate(&self, _text: &str) -> Polarity {
        self.0
    }
}

/// Builds a lexicon from `(word, label, score)` triples.
pub fn lexicon(entries: &[(&str, &str, f64)]) -> Lexicon {
    Lexicon::from_entries(
        entries
            .iter()
            .map(|&(word, label, score)| LexiconEntry::new(word, label, score)),
    )
    .unwrap()
}

/// Scorer over `entries` with a fixed external polarity.
pub fn scorer(entries: &[(&str, &str, f64)], external: f64) -> Scorer<FixedEstimator> {
    Scorer::with_estimator(lexicon(entries), FixedEstimator::polarity(external))
}
