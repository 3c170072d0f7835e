// Lexicon scorer: per-token polarity with a context window.
//
// For a polarity word at position i:
//   1. every intensifier/diminisher in [i-2, i+2] (excluding i) multiplies
//      the base score, factors composing multiplicatively;
//   2. any negation in [i-3, i-1] flips the sign and scales by 0.8.
// Tokens with no base polarity score 0 and skip the window entirely.
// Emoji add their table value directly, with no context window.

use std::collections::HashSet;

use super::lexicon::{self, DIMINISHERS, INTENSIFIERS};
use super::models::{Keywords, SentimentScore};

/// Modifier window half-width (tokens on either side).
const MODIFIER_WINDOW: usize = 2;

/// How many tokens back a negation still applies.
const NEGATION_WINDOW: usize = 3;

/// Negated scores are flipped and dampened by this factor.
const NEGATION_FACTOR: f64 = -0.8;

/// Neutral keywords are sampled from this many leading neutral tokens.
const NEUTRAL_SAMPLE: usize = 10;

/// Product of every intensifier/diminisher factor around `index`.
fn modifier_multiplier(tokens: &[String], index: usize) -> f64 {
    let start = index.saturating_sub(MODIFIER_WINDOW);
    let end = (index + MODIFIER_WINDOW + 1).min(tokens.len());

    (start..end)
        .filter(|&i| i != index)
        .filter_map(|i| {
            let word = tokens[i].as_str();
            INTENSIFIERS
                .get(word)
                .or_else(|| DIMINISHERS.get(word))
                .copied()
        })
        .product()
}

/// Whether a negation word precedes `index` within the negation window.
fn is_negated(tokens: &[String], index: usize) -> bool {
    let start = index.saturating_sub(NEGATION_WINDOW);
    tokens[start..index]
        .iter()
        .any(|t| lexicon::is_negation(t))
}

/// Context-adjusted score of the token at `index`.
pub fn score_token(tokens: &[String], index: usize) -> f64 {
    let base = lexicon::word_polarity(&tokens[index]);
    if base == 0.0 {
        return 0.0;
    }

    let mut score = base;
    if is_negated(tokens, index) {
        score *= NEGATION_FACTOR;
    }
    score * modifier_multiplier(tokens, index)
}

/// Compound score plus the keyword buckets for a text.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconScore {
    pub scores: SentimentScore,
    pub keywords: Keywords,
}

/// Score a token sequence and its extracted emoji.
///
/// `compound = (token scores + emoji scores) / max(token count, 1)`.
///
/// Token scores and then emoji scores go into a single running total, in
/// input order. Regrouping the sum shifts the last bit of `compound`, which
/// decides the tag when it lands exactly on a tie.
pub fn score(tokens: &[String], emojis: &[&str]) -> LexiconScore {
    let mut total = 0.0;
    let mut positive = Vec::new();
    let mut negative = Vec::new();
    let mut neutral = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        let s = score_token(tokens, index);
        total += s;

        if s > 0.0 {
            positive.push(token.clone());
        } else if s < 0.0 {
            negative.push(token.clone());
        } else if !lexicon::is_polarity_word(token) {
            neutral.push(token.clone());
        }
    }

    for emoji in emojis {
        total += lexicon::emoji_polarity(emoji);
    }

    let compound = total / tokens.len().max(1) as f64;

    neutral.truncate(NEUTRAL_SAMPLE);

    LexiconScore {
        scores: SentimentScore::from_compound(compound),
        keywords: Keywords {
            positive: dedup_in_order(positive),
            negative: dedup_in_order(negative),
            neutral: dedup_in_order(neutral),
        },
    }
}

fn dedup_in_order(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
