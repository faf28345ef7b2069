// Adjective polarity/subjectivity table and modifier word lists.

/// (word, polarity, subjectivity)
pub(super) const SENTIMENT_WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("cheerful", 0.7, 0.8),
    ("cool", 0.35, 0.65),
    ("delightful", 1.0, 1.0),
    ("enjoyable", 0.4, 0.5),
    ("excellent", 1.0, 1.0),
    ("excited", 0.375, 0.75),
    ("fantastic", 0.4, 0.9),
    ("fine", 0.4, 0.5),
    ("friendly", 0.375, 0.5),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("impressive", 1.0, 1.0),
    ("interesting", 0.5, 0.5),
    ("love", 0.5, 0.6),
    ("lovely", 0.5, 0.75),
    ("nice", 0.6, 1.0),
    ("ok", 0.5, 0.5),
    ("okay", 0.5, 0.5),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.73, 0.97),
    ("positive", 0.23, 0.55),
    ("satisfied", 0.5, 1.0),
    ("superb", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    // negative
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("average", -0.15, 0.4),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("bored", -0.5, 1.0),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("dirty", -0.6, 0.8),
    ("dreadful", -1.0, 1.0),
    ("dull", -0.3, 0.6),
    ("frustrated", -0.7, 0.4),
    ("frustrating", -0.4, 0.6),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("mediocre", -0.3, 0.6),
    ("miserable", -1.0, 1.0),
    ("nasty", -1.0, 1.0),
    ("painful", -0.7, 0.9),
    ("poor", -0.4, 0.6),
    ("rude", -0.3, 0.6),
    ("sad", -0.5, 1.0),
    ("slow", -0.3, 0.39),
    ("sorry", -0.5, 1.0),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("tired", -0.4, 0.7),
    ("ugly", -0.7, 1.0),
    ("unfortunate", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("useless", -0.5, 0.2),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// (word, intensity) applied to the next sentiment word.
pub(super) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("barely", 0.5),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("pretty", 1.1),
    ("quite", 1.1),
    ("rather", 1.1),
    ("really", 1.3),
    ("slightly", 0.7),
    ("so", 1.2),
    ("somewhat", 0.8),
    ("totally", 1.3),
    ("very", 1.3),
];

pub(super) const NEGATORS: &[&str] = &["never", "no", "not"];
