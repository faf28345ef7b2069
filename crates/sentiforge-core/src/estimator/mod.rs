//! General-purpose polarity estimation.
//!
//! The scorer treats the estimator as an opaque collaborator: it only needs a
//! polarity in [-1, 1] and a subjectivity in [0, 1] for arbitrary text.

mod pattern;
mod words;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use pattern::PatternEstimator;

/// Polarity and subjectivity of a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Polarity {
    /// Negative to positive, in [-1, 1].
    pub polarity: f64,
    /// Factual to opinionated, in [0, 1].
    pub subjectivity: f64,
}

impl Polarity {
    /// Creates a polarity, clamping both values into range.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    /// Neutral, fully objective text.
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// Estimates polarity for arbitrary text.
///
/// Implementations must be deterministic: the same text always yields the
/// same [`Polarity`].
pub trait PolarityEstimator: Send + Sync {
    fn estimate(&self, text: &str) -> Polarity;
}

impl<E: PolarityEstimator + ?Sized> PolarityEstimator for Box<E> {
    fn estimate(&self, text: &str) -> Polarity {
        (**self).estimate(text)
    }
}

impl<E: PolarityEstimator + ?Sized> PolarityEstimator for std::sync::Arc<E> {
    fn estimate(&self, text: &str) -> Polarity {
        (**self).estimate(text)
    }
}
