use super::*;

fn estimate(text: &str) -> Polarity {
    PatternEstimator::new().estimate(text)
}

#[test]
fn test_positive_adjective() {
    let p = estimate("I am happy");
    assert_eq!(p.polarity, 0.8);
    assert_eq!(p.subjectivity, 1.0);
}

#[test]
fn test_negative_adjective() {
    assert!(estimate("This is terrible").polarity < -0.9);
}

#[test]
fn test_no_known_words_is_neutral() {
    assert_eq!(estimate("The train leaves at nine"), Polarity::neutral());
    assert_eq!(estimate(""), Polarity::neutral());
}

#[test]
fn test_negation_flips_and_dampens() {
    let p = estimate("I am not happy");
    assert!((p.polarity - -0.4).abs() < 1e-9);
}

#[test]
fn test_contraction_negates() {
    assert!(estimate("it isn't good").polarity < 0.0);
}

#[test]
fn test_negation_waits_for_next_sentiment_word() {
    // Filler tokens between the negator and the adjective don't cancel it.
    let p = estimate("not that it matters much, good");
    assert!((p.polarity - -0.35).abs() < 1e-9);
}

#[test]
fn test_negation_applies_once() {
    let p = estimate("not good, bad");
    assert!((p.polarity - (-0.35 + -0.7) / 2.0).abs() < 1e-9);
}

#[test]
fn test_cannot_is_not_a_negator() {
    assert_eq!(estimate("cannot be happy").polarity, 0.8);
}

#[test]
fn test_vocabulary_has_no_duplicate_words() {
    assert_eq!(
        PatternEstimator::new().vocabulary_size(),
        words::SENTIMENT_WORDS.len()
    );
}

#[test]
fn test_intensifier_strengthens() {
    let plain = estimate("good").polarity;
    let strong = estimate("very good").polarity;
    assert!(strong > plain);
}

#[test]
fn test_intensified_polarity_is_clamped() {
    let p = estimate("extremely excellent");
    assert_eq!(p.polarity, 1.0);
    assert_eq!(p.subjectivity, 1.0);
}

#[test]
fn test_mixed_words_average() {
    let p = estimate("great food, bad service");
    assert!((p.polarity - 0.05).abs() < 1e-9);
}

#[test]
fn test_case_and_punctuation_ignored() {
    assert_eq!(estimate("HAPPY!!!"), estimate("happy"));
}

#[test]
fn test_polarity_new_clamps() {
    let p = Polarity::new(3.0, -1.0);
    assert_eq!(p.polarity, 1.0);
    assert_eq!(p.subjectivity, 0.0);
}

#[test]
fn test_boxed_estimator_delegates() {
    let boxed: Box<dyn PolarityEstimator> = Box::new(PatternEstimator::new());
    assert_eq!(boxed.estimate("sad").polarity, -0.5);
}
