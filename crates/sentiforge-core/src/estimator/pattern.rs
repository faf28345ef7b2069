//! Pattern-style adjective estimator.

use std::collections::HashMap;

use super::words::{INTENSIFIERS, NEGATORS, SENTIMENT_WORDS};
use super::{Polarity, PolarityEstimator};

/// Polarity multiplier for a negated sentiment word.
const NEGATION_FACTOR: f64 = -0.5;

/// Averages the polarity of known adjectives, adjusting for negators and
/// intensifiers that precede them.
///
/// # Examples
///
/// ```
/// use sentiforge_core::{PatternEstimator, PolarityEstimator};
///
/// let estimator = PatternEstimator::new();
/// assert!(estimator.estimate("a very good day").polarity > 0.7);
/// assert!(estimator.estimate("not good at all").polarity < 0.0);
/// assert_eq!(estimator.estimate("the meeting is at noon").polarity, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PatternEstimator {
    // word -> (polarity, subjectivity)
    words: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for PatternEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternEstimator {
    /// Creates an estimator with the built-in word tables.
    pub fn new() -> Self {
        Self {
            words: SENTIMENT_WORDS
                .iter()
                .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
                .collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Returns the number of sentiment-bearing words known.
    pub fn vocabulary_size(&self) -> usize {
        self.words.len()
    }
}

impl PolarityEstimator for PatternEstimator {
    fn estimate(&self, text: &str) -> Polarity {
        let lower = text.to_lowercase();

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut assessments = 0usize;

        let mut negated = false;
        let mut intensity: Option<f64> = None;

        for token in tokens(&lower) {
            if is_negator(token) {
                negated = true;
                continue;
            }
            if let Some(&factor) = self.intensifiers.get(token) {
                intensity = Some(intensity.unwrap_or(1.0) * factor);
                continue;
            }

            // A negator stays pending until the next sentiment word.
            if let Some(&(polarity, subjectivity)) = self.words.get(token) {
                let factor = intensity.unwrap_or(1.0);
                let mut polarity = (polarity * factor).clamp(-1.0, 1.0);
                let subjectivity = (subjectivity * factor).clamp(0.0, 1.0);
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                polarity_sum += polarity;
                subjectivity_sum += subjectivity;
                assessments += 1;
                negated = false;
            }
            intensity = None;
        }

        if assessments == 0 {
            return Polarity::neutral();
        }
        let n = assessments as f64;
        Polarity::new(polarity_sum / n, subjectivity_sum / n)
    }
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}
