//! Lexicon-weighted sentiment scorer.
//!
//! When any lexicon word is present, the curated lexicon dominates the
//! blend and the estimator contributes a small adjustment. Otherwise the
//! estimator's polarity is used on its own.

use crate::estimator::{PatternEstimator, Polarity, PolarityEstimator};
use crate::lexicon::Lexicon;
use crate::result::{AnalysisDetails, AnalysisResult, FoundWord, SentimentLabel, THRESHOLD_INFO};

/// Weight of the lexicon average when at least one word matched.
pub const LEXICON_WEIGHT: f64 = 0.95;

/// Weight of the estimator polarity when at least one word matched.
pub const EXTERNAL_WEIGHT: f64 = 0.05;

/// Scores strictly beyond this magnitude are fully positive/negative.
pub const STRONG_THRESHOLD: f64 = 0.1;

/// Scores strictly beyond this magnitude (but within the strong band) are
/// slightly positive/negative.
pub const SLIGHT_THRESHOLD: f64 = 0.02;

/// Buckets a final score into a label. First matching check wins.
///
/// # Examples
///
/// ```
/// use sentiforge_core::{classify, SentimentLabel};
///
/// assert_eq!(classify(0.1), SentimentLabel::SlightlyPositive);
/// assert_eq!(classify(0.1000001), SentimentLabel::Positive);
/// assert_eq!(classify(0.0), SentimentLabel::Neutral);
/// ```
pub fn classify(final_score: f64) -> SentimentLabel {
    if final_score > STRONG_THRESHOLD {
        SentimentLabel::Positive
    } else if final_score < -STRONG_THRESHOLD {
        SentimentLabel::Negative
    } else if final_score > SLIGHT_THRESHOLD {
        SentimentLabel::SlightlyPositive
    } else if final_score < -SLIGHT_THRESHOLD {
        SentimentLabel::SlightlyNegative
    } else {
        SentimentLabel::Neutral
    }
}

/// Combines the lexicon average (if any word matched) with the external
/// polarity.
pub fn blend(lexicon_avg: Option<f64>, external_polarity: f64) -> f64 {
    match lexicon_avg {
        Some(avg) => avg * LEXICON_WEIGHT + external_polarity * EXTERNAL_WEIGHT,
        None => external_polarity,
    }
}

/// Rounds to four decimal places.
///
/// Ties on `value * 10_000` round half away from zero, so a value whose
/// exact binary expansion sits on a tie may differ in the last place from
/// half-to-even rounding.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Scores text against an immutable lexicon and a polarity estimator.
///
/// Construct once at startup and share by reference; scoring never mutates
/// the scorer.
#[derive(Debug, Clone)]
pub struct Scorer<E = PatternEstimator> {
    lexicon: Lexicon,
    estimator: E,
}

impl Scorer<PatternEstimator> {
    /// Creates a scorer using the built-in [`PatternEstimator`].
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_estimator(lexicon, PatternEstimator::new())
    }
}

impl<E: PolarityEstimator> Scorer<E> {
    /// Creates a scorer with a custom estimator.
    pub fn with_estimator(lexicon: Lexicon, estimator: E) -> Self {
        Self { lexicon, estimator }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Analyzes `text`, consulting the estimator for external polarity.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let external = self.estimator.estimate(text);
        self.score_with(text, external)
    }

    /// Analyzes `text` with an already computed external polarity.
    ///
    /// Pure: the result depends only on `text`, the lexicon and `external`.
    pub fn score_with(&self, text: &str, external: Polarity) -> AnalysisResult {
        let lower = text.to_lowercase();

        let found_words: Vec<FoundWord> = self
            .lexicon
            .matches(&lower)
            .map(|entry| FoundWord {
                word: entry.word.clone(),
                sentiment: entry.label.clone(),
                score: entry.score,
            })
            .collect();

        let lexicon_avg = if found_words.is_empty() {
            None
        } else {
            let total: f64 = found_words.iter().map(|w| w.score).sum();
            Some(total / found_words.len() as f64)
        };
        let final_score = blend(lexicon_avg, external.polarity);

        AnalysisResult {
            text: text.to_string(),
            sentiment: classify(final_score),
            polarity: round4(final_score),
            subjectivity: round4(external.subjectivity),
            word_count: text.split_whitespace().count(),
            found_words,
            analysis_details: AnalysisDetails {
                external_score: round4(external.polarity),
                lexicon_avg: lexicon_avg.map(round4).unwrap_or(0.0),
                final_score: round4(final_score),
                threshold_info: THRESHOLD_INFO.to_string(),
            },
        }
    }
}
