//! Curated word-sentiment lexicon.
//!
//! A [`Lexicon`] maps lowercase words to a label and score. It is built once,
//! usually from a CSV file with a `word,sentiment,score` header, and is
//! read-only afterwards. Each entry carries a precompiled whole-word matcher
//! so scoring never compiles patterns on the request path.

use std::path::Path;

use csv_core::ReadFieldResult;
use indexmap::IndexMap;
use regex::Regex;
use tracing::{info, warn};

use crate::error::{LexiconError, Result};

/// Entries substituted when the dataset cannot be loaded.
pub const FALLBACK_ENTRIES: [(&str, &str, f64); 4] = [
    ("gloomy", "negative", -0.6),
    ("happy", "positive", 0.7),
    ("terrible", "negative", -0.8),
    ("displeased", "negative", -0.5),
];

const WORD_COLUMN: &str = "word";
const LABEL_COLUMN: &str = "sentiment";
const SCORE_COLUMN: &str = "score";

/// A single curated word with its label and score.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    pub word: String,
    pub label: String,
    pub score: f64,
}

impl LexiconEntry {
    /// Creates an entry, normalizing word and label to trimmed lowercase.
    pub fn new(word: &str, label: &str, score: f64) -> Self {
        Self {
            word: word.trim().to_lowercase(),
            label: label.trim().to_lowercase(),
            score,
        }
    }
}

/// Read-only mapping from word to [`LexiconEntry`].
///
/// Iteration order is the order in which words were first seen. A later
/// entry for the same word replaces the earlier value without moving it.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: IndexMap<String, LexiconEntry>,
    // Parallel to `entries`.
    matchers: Vec<Regex>,
}

/// Outcome of [`Lexicon::load`].
///
/// `error` is set exactly when the dataset failed to load and the fallback
/// lexicon was substituted.
#[derive(Debug)]
pub struct LexiconLoad {
    pub lexicon: Lexicon,
    pub error: Option<LexiconError>,
}

impl LexiconLoad {
    /// Returns true if the fallback lexicon is in use.
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Presence of a single probe word, see [`Lexicon::probe`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult<'a> {
    pub word: String,
    pub entry: Option<&'a LexiconEntry>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a lexicon from a CSV file, substituting the fallback on failure.
    ///
    /// Never fails; inspect [`LexiconLoad::error`] to tell a real load from
    /// the fallback.
    pub fn load(path: impl AsRef<Path>) -> LexiconLoad {
        let path = path.as_ref();
        match Self::from_csv_path(path) {
            Ok(lexicon) => {
                info!(
                    event = "lexicon_loaded",
                    path = %path.display(),
                    entries = lexicon.len() as u64,
                );
                LexiconLoad {
                    lexicon,
                    error: None,
                }
            }
            Err(error) => {
                let lexicon = Self::fallback();
                warn!(
                    event = "lexicon_fallback",
                    path = %path.display(),
                    reason = %error,
                    entries = lexicon.len() as u64,
                );
                LexiconLoad {
                    lexicon,
                    error: Some(error),
                }
            }
        }
    }

    /// Loads a lexicon from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or any row is malformed.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_csv_str(&contents)
    }

    /// Parses a lexicon from CSV text with a `word,sentiment,score` header.
    ///
    /// Columns are located by header name, so their order is free and extra
    /// columns are ignored. Blank lines are skipped. A header with no rows
    /// yields an empty lexicon.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentiforge_core::Lexicon;
    ///
    /// let lexicon = Lexicon::from_csv_str("word,sentiment,score\nSad , Negative,-0.4\n").unwrap();
    /// let entry = lexicon.get("sad").unwrap();
    /// assert_eq!(entry.label, "negative");
    /// assert_eq!(entry.score, -0.4);
    /// ```
    pub fn from_csv_str(contents: &str) -> Result<Self> {
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
        let mut lines = contents
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (header_line, header) = lines.next().ok_or(LexiconError::Empty)?;
        let header = split_record(header, header_line)?;
        let column = |name: &'static str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or(LexiconError::MissingColumn(name))
        };
        let word_col = column(WORD_COLUMN)?;
        let label_col = column(LABEL_COLUMN)?;
        let score_col = column(SCORE_COLUMN)?;
        let required = word_col.max(label_col).max(score_col) + 1;

        let mut entries = IndexMap::new();
        for (line, row) in lines {
            let fields = split_record(row, line)?;
            if fields.len() < required {
                return Err(LexiconError::MalformedRow {
                    line,
                    reason: format!(
                        "expected at least {} fields, found {}",
                        required,
                        fields.len()
                    ),
                });
            }

            let raw_score = fields[score_col].trim();
            let score = parse_score(raw_score).ok_or_else(|| LexiconError::InvalidScore {
                line,
                value: raw_score.to_string(),
            })?;
            let entry = LexiconEntry::new(&fields[word_col], &fields[label_col], score);
            if entry.word.is_empty() {
                return Err(LexiconError::EmptyWord { line });
            }
            entries.insert(entry.word.clone(), entry);
        }

        Self::build(entries)
    }

    /// Builds a lexicon from entries in order; later duplicates overwrite.
    ///
    /// # Errors
    ///
    /// Returns error for a blank word or a non-finite score. The `line` of
    /// such errors is the 1-based position in `entries`.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = LexiconEntry>,
    {
        let mut map = IndexMap::new();
        for (idx, entry) in entries.into_iter().enumerate() {
            let entry = LexiconEntry::new(&entry.word, &entry.label, entry.score);
            if entry.word.is_empty() {
                return Err(LexiconError::EmptyWord { line: idx + 1 });
            }
            if !entry.score.is_finite() {
                return Err(LexiconError::InvalidScore {
                    line: idx + 1,
                    value: entry.score.to_string(),
                });
            }
            map.insert(entry.word.clone(), entry);
        }
        Self::build(map)
    }

    /// Returns the built-in four-word lexicon.
    pub fn fallback() -> Self {
        let entries = FALLBACK_ENTRIES
            .iter()
            .map(|&(word, label, score)| LexiconEntry::new(word, label, score));
        Self::from_entries(entries).expect("fallback lexicon entries are valid literals")
    }

    fn build(entries: IndexMap<String, LexiconEntry>) -> Result<Self> {
        let matchers = entries
            .keys()
            .map(|word| Regex::new(&format!(r"\b{}\b", regex::escape(word))))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { entries, matchers })
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a word, ignoring case and surrounding whitespace.
    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word.trim().to_lowercase().as_str())
    }

    /// Iterates entries in lexicon order.
    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.values()
    }

    /// Returns the entries whose word occurs in `text` as a whole word.
    ///
    /// `text` must already be lowercased. Results follow lexicon order, not
    /// position in the text, and each entry appears at most once.
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a LexiconEntry> + 'a {
        self.entries
            .values()
            .zip(&self.matchers)
            .filter(move |(_, matcher)| matcher.is_match(text))
            .map(|(entry, _)| entry)
    }

    /// Reports which of `words` are present.
    pub fn probe<'a, I, S>(&'a self, words: I) -> Vec<ProbeResult<'a>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| {
                let word = word.as_ref().trim().to_lowercase();
                let entry = self.entries.get(word.as_str());
                ProbeResult { word, entry }
            })
            .collect()
    }
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|score| score.is_finite())
}

// Splits one CSV record into unquoted fields.
fn split_record(row: &str, line: usize) -> Result<Vec<String>> {
    let mut fields = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    // A field is never longer than the record it came from.
    let mut output = vec![0; row.len() + 1];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        let end = match result {
            ReadFieldResult::InputEmpty => true,
            ReadFieldResult::End => break,
            ReadFieldResult::Field { record_end } => record_end,
            ReadFieldResult::OutputFull => {
                return Err(LexiconError::MalformedRow {
                    line,
                    reason: "field too large".to_string(),
                })
            }
        };
        let field =
            std::str::from_utf8(&output[..nout]).map_err(|e| LexiconError::MalformedRow {
                line,
                reason: e.to_string(),
            })?;
        fields.push(field.to_string());
        if end {
            break;
        }
        bytes = &bytes[nin..];
    }
    Ok(fields)
}
