// Emotion aggregation over eight fixed buckets.
//
// Word signal: a token matches a keyword when either contains the other, so
// short tokens like "i" hit many keywords. Each match is worth 20 points,
// capped at 100 per bucket.
//
// Emoji signal: positive emoji bleed into joy (x10) and trust (x5),
// negative emoji into sadness (x8) and anger (x6).

use super::lexicon::{self, Emotion};
use super::models::EmotionScores;

const POINTS_PER_MATCH: f64 = 20.0;
const BUCKET_CAP: f64 = 100.0;

fn loose_match(token: &str, keyword: &str) -> bool {
    token.contains(keyword) || keyword.contains(token)
}

/// Number of (keyword, token) pairs that loosely match for one emotion.
fn keyword_matches(emotion: Emotion, tokens: &[String]) -> usize {
    emotion
        .keywords()
        .iter()
        .map(|keyword| tokens.iter().filter(|t| loose_match(t, keyword)).count())
        .sum()
}

/// Score the eight emotion buckets from tokens and extracted emoji.
pub fn analyze_emotions(tokens: &[String], emojis: &[&str]) -> EmotionScores {
    let mut emotions = EmotionScores::default();

    for emotion in Emotion::ALL {
        let count = keyword_matches(emotion, tokens);
        *emotions.get_mut(emotion) = (count as f64 * POINTS_PER_MATCH).min(BUCKET_CAP);
    }

    for emoji in emojis {
        let polarity = lexicon::emoji_polarity(emoji);
        if polarity > 0.0 {
            emotions.joy += polarity * 10.0;
            emotions.trust += polarity * 5.0;
        } else if polarity < 0.0 {
            emotions.sadness += polarity.abs() * 8.0;
            emotions.anger += polarity.abs() * 6.0;
        }
    }

    for emotion in Emotion::ALL {
        let value = emotions.get_mut(emotion);
        *value = value.min(BUCKET_CAP);
    }

    emotions
}
