//! Analysis output returned to dashboard clients.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Human-readable description of the label thresholds.
pub const THRESHOLD_INFO: &str = "positive if > 0.1, negative if < -0.1, \
slightly positive if > 0.02, slightly negative if < -0.02, otherwise neutral";

/// Sentiment bucket derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "slightly positive")]
    SlightlyPositive,
    #[serde(rename = "slightly negative")]
    SlightlyNegative,
    #[serde(rename = "neutral")]
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::SlightlyPositive => "slightly positive",
            SentimentLabel::SlightlyNegative => "slightly negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexicon word found in the analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundWord {
    pub word: String,
    pub sentiment: String,
    pub score: f64,
}

/// Intermediate scores behind the final label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    /// Polarity reported by the estimator.
    pub external_score: f64,
    /// Mean score of found words, 0 when none were found.
    pub lexicon_avg: f64,
    pub final_score: f64,
    pub threshold_info: String,
}

/// Full result of analyzing one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub polarity: f64,
    pub subjectivity: f64,
    pub word_count: usize,
    pub found_words: Vec<FoundWord>,
    pub analysis_details: AnalysisDetails,
}
