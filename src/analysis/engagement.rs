// Engagement heuristic: virality estimate and engagement tier.
//
// Virality is additive:
//   |compound| * 30
//   + 15 emoji, + 10 hashtags, + 10 exclamations, + 8 questions
//   + emotional intensity * 0.3
//   + 10 when word count is in the (10, 50) sweet spot
// clamped to 0-100.
//
// The tier uses OR logic, so a strong emotional signal alone can lift it
// even when virality is modest.

use super::models::{Engagement, EngagementLevel, EmotionScores, SentimentScore, TextFeatures};

const COMPOUND_WEIGHT: f64 = 30.0;
const EMOJI_BONUS: f64 = 15.0;
const HASHTAG_BONUS: f64 = 10.0;
const EXCLAMATION_BONUS: f64 = 10.0;
const QUESTION_BONUS: f64 = 8.0;
const INTENSITY_WEIGHT: f64 = 0.3;
const LENGTH_BONUS: f64 = 10.0;

impl EngagementLevel {
    /// Tier from virality and emotional intensity.
    pub fn from_signals(virality: f64, emotional_intensity: f64) -> Self {
        if virality > 70.0 || emotional_intensity > 60.0 {
            EngagementLevel::High
        } else if virality > 40.0 || emotional_intensity > 30.0 {
            EngagementLevel::Medium
        } else {
            EngagementLevel::Low
        }
    }
}

/// Compute the virality estimate (0-100).
pub fn virality(scores: &SentimentScore, features: &TextFeatures, emotional_intensity: f64) -> f64 {
    let mut v = scores.compound.abs() * COMPOUND_WEIGHT;
    if features.has_emojis {
        v += EMOJI_BONUS;
    }
    if features.has_hashtags {
        v += HASHTAG_BONUS;
    }
    if features.has_exclamations {
        v += EXCLAMATION_BONUS;
    }
    if features.has_questions {
        v += QUESTION_BONUS;
    }
    v += emotional_intensity * INTENSITY_WEIGHT;

    if features.word_count > 10 && features.word_count < 50 {
        v += LENGTH_BONUS;
    }

    v.clamp(0.0, 100.0)
}

/// Combine sentiment, emotions and structure into an engagement estimate.
pub fn calculate_engagement(
    scores: &SentimentScore,
    emotions: &EmotionScores,
    features: &TextFeatures,
) -> Engagement {
    let emotional_intensity = emotions.max();
    let virality = virality(scores, features, emotional_intensity);

    Engagement {
        likely_engagement: EngagementLevel::from_signals(virality, emotional_intensity),
        virality,
        emotional_intensity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_features(word_count: usize) -> TextFeatures {
        TextFeatures {
            has_emojis: false,
            has_hashtags: false,
            has_mentions: false,
            has_questions: false,
            has_exclamations: false,
            word_count,
            sentence_count: 1,
            avg_words_per_sentence: word_count as f64,
        }
    }

    #[test]
    fn test_virality_from_compound_only() {
        let scores = SentimentScore::from_compound(-0.5);
        let v = virality(&scores, &bare_features(3), 0.0);
        assert!((v - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_virality_structural_bonuses() {
        let features = TextFeatures {
            has_emojis: true,
            has_hashtags: true,
            has_questions: true,
            has_exclamations: true,
            ..bare_features(20)
        };
        let scores = SentimentScore::from_compound(0.0);
        // 15 + 10 + 10 + 8 + 10 (sweet spot) + 40 * 0.3
        let v = virality(&scores, &features, 40.0);
        assert!((v - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_sweet_spot_bounds_are_exclusive() {
        let scores = SentimentScore::from_compound(0.0);
        assert_eq!(virality(&scores, &bare_features(10), 0.0), 0.0);
        assert_eq!(virality(&scores, &bare_features(11), 0.0), 10.0);
        assert_eq!(virality(&scores, &bare_features(49), 0.0), 10.0);
        assert_eq!(virality(&scores, &bare_features(50), 0.0), 0.0);
    }

    #[test]
    fn test_virality_clamped() {
        let scores = SentimentScore::from_compound(3.0);
        let v = virality(&scores, &bare_features(20), 100.0);
        assert_eq!(v, 100.0);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(EngagementLevel::from_signals(71.0, 0.0), EngagementLevel::High);
        assert_eq!(EngagementLevel::from_signals(0.0, 61.0), EngagementLevel::High);
        assert_eq!(EngagementLevel::from_signals(70.0, 60.0), EngagementLevel::Medium);
        assert_eq!(EngagementLevel::from_signals(41.0, 0.0), EngagementLevel::Medium);
        assert_eq!(EngagementLevel::from_signals(0.0, 31.0), EngagementLevel::Medium);
        assert_eq!(EngagementLevel::from_signals(40.0, 30.0), EngagementLevel::Low);
    }
}
