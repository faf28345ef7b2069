//! SentiForge Core - Lexicon-weighted sentiment scoring
//!
//! This crate provides the scoring pipeline behind the SentiForge dashboard:
//! - [`Lexicon`] for curated word scores loaded from CSV
//! - [`PolarityEstimator`] for general-purpose polarity/subjectivity
//! - [`Scorer`] which blends both signals into an [`AnalysisResult`]
//!
//! # Example
//!
//! ```
//! use sentiforge_core::{Lexicon, Scorer, SentimentLabel};
//!
//! let scorer = Scorer::new(Lexicon::fallback());
//! let result = scorer.analyze("What a gloomy afternoon");
//!
//! assert_eq!(result.sentiment, SentimentLabel::Negative);
//! assert_eq!(result.found_words[0].word, "gloomy");
//! ```

pub mod error;
pub mod estimator;
pub mod lexicon;
pub mod result;
pub mod scorer;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{LexiconError, Result};
pub use estimator::{PatternEstimator, Polarity, PolarityEstimator};
pub use lexicon::{Lexicon, LexiconEntry, LexiconLoad, ProbeResult};
pub use result::{AnalysisDetails, AnalysisResult, FoundWord, SentimentLabel};
pub use scorer::{blend, classify, round4, Scorer};
