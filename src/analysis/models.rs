// Result types for a single analysed text.
//
// These are plain data: built fresh by `analyze()`, never mutated afterwards,
// and serialized in camelCase for JSON output.

use serde::{Deserialize, Serialize};

use super::lexicon::Emotion;

/// Overall polarity tag of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentTag {
    Positive,
    Negative,
    Neutral,
}

impl SentimentTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentTag::Positive => "positive",
            SentimentTag::Negative => "negative",
            SentimentTag::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Polarity percentages plus the signed compound score.
///
/// `positive + negative + neutral` is not forced to 100: the percentages come
/// straight from clamped formulas over `compound`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

impl SentimentScore {
    /// Derive the percentages from a compound score.
    pub fn from_compound(compound: f64) -> Self {
        let positive = compound.max(0.0) * 100.0;
        let negative = (-compound).max(0.0) * 100.0;
        let neutral = (100.0 - positive - negative).max(0.0);
        Self {
            positive,
            negative,
            neutral,
            compound,
        }
    }

    /// Strict three-way maximum; anything short of a strict winner is neutral.
    pub fn overall(&self) -> SentimentTag {
        if self.positive > self.negative && self.positive > self.neutral {
            SentimentTag::Positive
        } else if self.negative > self.positive && self.negative > self.neutral {
            SentimentTag::Negative
        } else {
            SentimentTag::Neutral
        }
    }

    pub fn confidence(&self) -> f64 {
        self.positive.max(self.negative).max(self.neutral)
    }
}

/// Intensity (0-100) for each of the eight emotion buckets.
///
/// The axes are independent: several can be high at once, or all near zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub joy: f64,
    pub anger: f64,
    pub fear: f64,
    pub sadness: f64,
    pub surprise: f64,
    pub disgust: f64,
    pub trust: f64,
    pub anticipation: f64,
}

impl EmotionScores {
    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Anger => self.anger,
            Emotion::Fear => self.fear,
            Emotion::Sadness => self.sadness,
            Emotion::Surprise => self.surprise,
            Emotion::Disgust => self.disgust,
            Emotion::Trust => self.trust,
            Emotion::Anticipation => self.anticipation,
        }
    }

    pub fn get_mut(&mut self, emotion: Emotion) -> &mut f64 {
        match emotion {
            Emotion::Joy => &mut self.joy,
            Emotion::Anger => &mut self.anger,
            Emotion::Fear => &mut self.fear,
            Emotion::Sadness => &mut self.sadness,
            Emotion::Surprise => &mut self.surprise,
            Emotion::Disgust => &mut self.disgust,
            Emotion::Trust => &mut self.trust,
            Emotion::Anticipation => &mut self.anticipation,
        }
    }

    /// Iterate buckets in canonical order (joy first, anticipation last).
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    /// Highest bucket value.
    pub fn max(&self) -> f64 {
        self.iter().map(|(_, v)| v).fold(0.0, f64::max)
    }

    /// The strongest emotion. Ties go to the earliest in canonical order.
    pub fn dominant(&self) -> (Emotion, f64) {
        self.iter()
            .fold((Emotion::Joy, self.joy), |best, (e, v)| {
                if v > best.1 {
                    (e, v)
                } else {
                    best
                }
            })
    }
}

/// Tokens that drove the score, deduplicated in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keywords {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    /// A small sample of tokens absent from both polarity tables
    pub neutral: Vec<String>,
}

/// Structural features of the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFeatures {
    pub has_emojis: bool,
    pub has_hashtags: bool,
    pub has_mentions: bool,
    pub has_questions: bool,
    pub has_exclamations: bool,
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_words_per_sentence: f64,
}

/// Predicted engagement tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

impl EngagementLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementLevel::Low => "low",
            EngagementLevel::Medium => "medium",
            EngagementLevel::High => "high",
        }
    }
}

impl std::fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    pub likely_engagement: EngagementLevel,
    /// 0-100 virality estimate
    pub virality: f64,
    /// Highest emotion bucket (0-100)
    pub emotional_intensity: f64,
}

/// Complete analysis of one text unit (a post, a comment, or a combined blob).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub overall: SentimentTag,
    /// Equal to the largest of the three percentages
    pub confidence: f64,
    pub scores: SentimentScore,
    pub emotions: EmotionScores,
    pub keywords: Keywords,
    pub features: TextFeatures,
    pub engagement: Engagement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_from_positive_compound() {
        let s = SentimentScore::from_compound(0.25);
        assert!((s.positive - 25.0).abs() < 1e-9);
        assert_eq!(s.negative, 0.0);
        assert!((s.neutral - 75.0).abs() < 1e-9);
        assert_eq!(s.overall(), SentimentTag::Neutral);
    }

    #[test]
    fn test_percentages_clamp_neutral_at_zero() {
        let s = SentimentScore::from_compound(-1.5);
        assert!((s.negative - 150.0).abs() < 1e-9);
        assert_eq!(s.neutral, 0.0);
        assert_eq!(s.overall(), SentimentTag::Negative);
        assert!((s.confidence() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_tie_resolves_to_neutral() {
        // compound 0.5 -> positive 50, neutral 50
        let s = SentimentScore::from_compound(0.5);
        assert_eq!(s.overall(), SentimentTag::Neutral);
    }

    #[test]
    fn test_dominant_emotion_tie_prefers_canonical_order() {
        let e = EmotionScores {
            fear: 40.0,
            trust: 40.0,
            ..Default::default()
        };
        assert_eq!(e.dominant(), (Emotion::Fear, 40.0));
        assert_eq!(e.max(), 40.0);
    }

    #[test]
    fn test_dominant_of_all_zero_is_joy() {
        assert_eq!(EmotionScores::default().dominant(), (Emotion::Joy, 0.0));
    }

    #[test]
    fn test_tags_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&SentimentTag::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&EngagementLevel::High).unwrap(),
            "\"high\""
        );
    }
}
