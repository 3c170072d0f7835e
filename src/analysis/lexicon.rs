// Static lexicon tables: word polarity, context modifiers, emoji polarity,
// and emotion keywords.
//
// Everything here is read-only and built once on first access. Lookups are
// verbatim: no stemming, no case folding (the tokenizer lowercases first).

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Positive words, weighted 1.5 (mild) to 3.0 (strong).
pub static POSITIVE_WORDS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("love", 3.0),
        ("amazing", 3.0),
        ("awesome", 3.0),
        ("fantastic", 3.0),
        ("incredible", 3.0),
        ("wonderful", 3.0),
        ("perfect", 3.0),
        ("excellent", 3.0),
        ("outstanding", 3.0),
        ("brilliant", 3.0),
        ("beautiful", 2.5),
        ("great", 2.5),
        ("good", 2.0),
        ("nice", 2.0),
        ("happy", 2.5),
        ("excited", 2.5),
        ("thrilled", 3.0),
        ("delighted", 2.5),
        ("pleased", 2.0),
        ("satisfied", 2.0),
        ("grateful", 2.5),
        ("thankful", 2.5),
        ("blessed", 2.5),
        ("lucky", 2.0),
        ("fortunate", 2.0),
        ("stunning", 3.0),
        ("gorgeous", 3.0),
        ("magnificent", 3.0),
        ("spectacular", 3.0),
        ("breathtaking", 3.0),
        ("inspiring", 2.5),
        ("motivating", 2.5),
        ("uplifting", 2.5),
        ("encouraging", 2.5),
        ("fun", 2.0),
        ("enjoyable", 2.0),
        ("entertaining", 2.0),
        ("amusing", 2.0),
        ("hilarious", 2.5),
        ("cool", 2.0),
        ("sweet", 2.0),
        ("cute", 2.0),
        ("adorable", 2.5),
        ("charming", 2.5),
        ("successful", 2.5),
        ("winning", 2.5),
        ("victorious", 3.0),
        ("triumphant", 3.0),
        ("proud", 2.5),
        ("confident", 2.0),
        ("strong", 2.0),
        ("powerful", 2.5),
        ("capable", 2.0),
        ("fresh", 1.5),
        ("new", 1.5),
        ("innovative", 2.0),
        ("creative", 2.0),
        ("original", 2.0),
        ("peaceful", 2.0),
        ("calm", 2.0),
        ("relaxed", 2.0),
        ("comfortable", 2.0),
        ("cozy", 2.0),
        ("healthy", 2.0),
        ("fit", 2.0),
        ("energetic", 2.5),
        ("vibrant", 2.5),
        ("alive", 2.5),
    ]
    .into_iter()
    .collect()
});

/// Negative words, weighted -1.5 (mild) to -3.0 (strong).
pub static NEGATIVE_WORDS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("hate", -3.0),
        ("terrible", -3.0),
        ("awful", -3.0),
        ("horrible", -3.0),
        ("disgusting", -3.0),
        ("worst", -3.0),
        ("pathetic", -3.0),
        ("useless", -3.0),
        ("worthless", -3.0),
        ("devastating", -3.0),
        ("bad", -2.0),
        ("poor", -2.0),
        ("sad", -2.5),
        ("angry", -2.5),
        ("mad", -2.5),
        ("frustrated", -2.5),
        ("annoyed", -2.0),
        ("irritated", -2.0),
        ("upset", -2.5),
        ("disappointed", -2.5),
        ("depressed", -3.0),
        ("miserable", -3.0),
        ("hopeless", -3.0),
        ("desperate", -3.0),
        ("devastated", -3.0),
        ("broken", -2.5),
        ("hurt", -2.5),
        ("pain", -2.5),
        ("suffering", -3.0),
        ("agony", -3.0),
        ("scared", -2.5),
        ("afraid", -2.5),
        ("terrified", -3.0),
        ("worried", -2.0),
        ("anxious", -2.5),
        ("stressed", -2.5),
        ("overwhelmed", -2.5),
        ("exhausted", -2.0),
        ("tired", -1.5),
        ("drained", -2.0),
        ("boring", -2.0),
        ("dull", -2.0),
        ("bland", -2.0),
        ("monotonous", -2.0),
        ("tedious", -2.0),
        ("ugly", -2.5),
        ("hideous", -3.0),
        ("repulsive", -3.0),
        ("gross", -2.5),
        ("nasty", -2.5),
        ("stupid", -2.5),
        ("dumb", -2.5),
        ("idiotic", -3.0),
        ("foolish", -2.0),
        ("ridiculous", -2.0),
        ("fake", -2.0),
        ("false", -2.0),
        ("dishonest", -2.5),
        ("lying", -2.5),
        ("deceptive", -2.5),
        ("wrong", -2.0),
        ("incorrect", -1.5),
        ("mistake", -1.5),
        ("error", -1.5),
        ("failure", -2.5),
        ("lost", -2.0),
        ("confused", -1.5),
        ("uncertain", -1.5),
        ("doubtful", -2.0),
        ("skeptical", -1.5),
    ]
    .into_iter()
    .collect()
});

/// Words that amplify a nearby polarity word (factor > 1).
pub static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("very", 1.3),
        ("extremely", 1.5),
        ("incredibly", 1.4),
        ("absolutely", 1.4),
        ("totally", 1.3),
        ("completely", 1.4),
        ("utterly", 1.5),
        ("quite", 1.2),
        ("really", 1.3),
        ("truly", 1.3),
        ("genuinely", 1.3),
        ("seriously", 1.3),
        ("super", 1.4),
        ("mega", 1.5),
        ("ultra", 1.5),
        ("so", 1.2),
        ("too", 1.2),
    ]
    .into_iter()
    .collect()
});

/// Words that soften a nearby polarity word (factor < 1).
///
/// The multi-word entries never equal a single token, so only the one-word
/// diminishers take effect in the context window.
pub static DIMINISHERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("slightly", 0.7),
        ("somewhat", 0.8),
        ("rather", 0.9),
        ("fairly", 0.9),
        ("pretty", 0.9),
        ("kind of", 0.8),
        ("sort of", 0.8),
        ("a bit", 0.7),
        ("a little", 0.7),
        ("barely", 0.6),
        ("hardly", 0.6),
        ("scarcely", 0.6),
    ]
    .into_iter()
    .collect()
});

/// Negation words. Contractions are listed but the tokenizer splits on the
/// apostrophe, so only the plain words ("not", "no", "never", ...) match.
pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nowhere", "isn't", "aren't",
    "wasn't", "weren't", "haven't", "hasn't", "hadn't", "won't", "wouldn't", "don't", "doesn't",
    "didn't", "can't", "couldn't", "shouldn't", "mustn't", "needn't", "daren't", "mayn't",
    "oughtn't",
];

/// Emoji polarity, keyed by the exact extracted string.
///
/// Entries outside the extractor's code point ranges, or carrying a
/// variation selector, are kept for completeness but never match a
/// single extracted code point.
pub static EMOJI_SENTIMENT: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // Very positive
        ("😍", 3.0),
        ("🥰", 3.0),
        ("😘", 2.5),
        ("💕", 2.5),
        ("💖", 3.0),
        ("💗", 2.5),
        ("💓", 2.5),
        ("\u{2764}\u{FE0F}", 2.5),
        ("🧡", 2.0),
        ("💛", 2.0),
        ("💚", 2.0),
        ("💙", 2.0),
        ("💜", 2.0),
        ("🤍", 2.0),
        ("🤎", 1.5),
        ("\u{2763}\u{FE0F}", 2.5),
        ("💞", 2.5),
        ("💝", 2.5),
        ("💘", 2.5),
        ("😊", 2.5),
        ("😄", 2.5),
        ("😃", 2.5),
        ("😀", 2.0),
        ("😁", 2.5),
        ("😆", 2.5),
        ("🤣", 2.5),
        ("😂", 2.5),
        ("🙂", 2.0),
        ("🙃", 1.5),
        ("😉", 2.0),
        ("😌", 2.0),
        ("😋", 2.0),
        ("😎", 2.5),
        ("🤩", 3.0),
        ("🥳", 3.0),
        ("😇", 2.5),
        ("🤗", 2.5),
        ("🎉", 2.5),
        ("🎊", 2.5),
        ("🎈", 2.0),
        ("🎁", 2.0),
        ("🏆", 2.5),
        ("🥇", 2.5),
        ("⭐", 2.0),
        ("🌟", 2.5),
        ("✨", 2.0),
        ("💫", 2.0),
        ("🔥", 2.5),
        ("💯", 2.5),
        ("👍", 2.0),
        ("🙌", 2.5),
        ("👏", 2.0),
        ("👌", 2.0),
        ("\u{270C}\u{FE0F}", 2.0),
        ("🤞", 1.5),
        ("💪", 2.0),
        ("🦾", 2.0),
        ("🧠", 1.5),
        ("🫶", 2.5),
        ("👑", 2.5),
        ("💎", 2.0),
        // Negative
        ("😢", -2.5),
        ("😭", -3.0),
        ("😞", -2.0),
        ("😔", -2.0),
        ("😟", -2.0),
        ("😕", -1.5),
        ("🙁", -2.0),
        ("\u{2639}\u{FE0F}", -2.0),
        ("😣", -2.0),
        ("😖", -2.0),
        ("😫", -2.5),
        ("😩", -2.5),
        ("🥺", -1.5),
        ("😤", -2.0),
        ("😠", -2.5),
        ("😡", -3.0),
        ("🤬", -3.0),
        ("😱", -2.5),
        ("😨", -2.5),
        ("😰", -2.5),
        ("😥", -2.0),
        ("😓", -2.0),
        ("🤢", -2.5),
        ("🤮", -3.0),
        ("🤧", -1.5),
        ("🥴", -1.5),
        ("😵", -2.0),
        ("😬", -1.5),
        ("😒", -2.0),
        ("🤐", -1.0),
        ("🤫", -0.5),
        ("💔", -3.0),
        ("🖤", -1.5),
        ("⚡", -1.0),
        ("💀", -2.5),
        ("\u{2620}\u{FE0F}", -2.5),
        ("👎", -2.0),
        // Neutral / mixed
        ("😐", 0.0),
        ("😑", -0.5),
        ("🤔", 0.0),
        ("🧐", 0.0),
        ("🤨", -0.5),
        ("😏", 0.5),
        ("😶", 0.0),
        ("🙄", -1.0),
        ("😮", 0.5),
        ("😯", 0.5),
        ("😲", 0.5),
        ("🤯", 1.0),
        ("🤷", 0.0),
        ("🤷\u{200D}\u{2640}\u{FE0F}", 0.0),
        ("🤷\u{200D}\u{2642}\u{FE0F}", 0.0),
        ("🤦", -1.0),
        ("🤦\u{200D}\u{2640}\u{FE0F}", -1.0),
        ("🤦\u{200D}\u{2642}\u{FE0F}", -1.0),
    ]
    .into_iter()
    .collect()
});

/// The eight emotion buckets, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Joy,
    Anger,
    Fear,
    Sadness,
    Surprise,
    Disgust,
    Trust,
    Anticipation,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Sadness,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Trust,
        Emotion::Anticipation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Trust => "trust",
            Emotion::Anticipation => "anticipation",
        }
    }

    /// Keywords matched (loosely, by substring) against tokens.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Emotion::Joy => &[
                "happy", "joyful", "cheerful", "delighted", "elated", "ecstatic", "blissful",
                "content", "pleased", "glad",
            ],
            Emotion::Anger => &[
                "angry", "furious", "mad", "irritated", "annoyed", "frustrated", "outraged",
                "livid", "enraged", "irate",
            ],
            Emotion::Fear => &[
                "scared",
                "afraid",
                "terrified",
                "frightened",
                "anxious",
                "worried",
                "nervous",
                "panicked",
                "alarmed",
                "apprehensive",
            ],
            Emotion::Sadness => &[
                "sad",
                "depressed",
                "melancholy",
                "sorrowful",
                "mournful",
                "dejected",
                "despondent",
                "gloomy",
                "downhearted",
                "blue",
            ],
            Emotion::Surprise => &[
                "surprised",
                "amazed",
                "astonished",
                "shocked",
                "stunned",
                "bewildered",
                "startled",
                "astounded",
                "flabbergasted",
                "dumbfounded",
            ],
            Emotion::Disgust => &[
                "disgusted",
                "revolted",
                "repulsed",
                "sickened",
                "nauseated",
                "appalled",
                "horrified",
                "repelled",
                "grossed",
                "offended",
            ],
            Emotion::Trust => &[
                "trust",
                "confident",
                "secure",
                "safe",
                "reliable",
                "dependable",
                "faithful",
                "loyal",
                "honest",
                "genuine",
            ],
            Emotion::Anticipation => &[
                "excited",
                "eager",
                "hopeful",
                "expectant",
                "optimistic",
                "enthusiastic",
                "keen",
                "anticipating",
                "looking forward",
                "can't wait",
            ],
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Base polarity of a token: positive table first, then negative, else 0.
pub fn word_polarity(token: &str) -> f64 {
    POSITIVE_WORDS
        .get(token)
        .or_else(|| NEGATIVE_WORDS.get(token))
        .copied()
        .unwrap_or(0.0)
}

/// Whether a token appears in either polarity table.
pub fn is_polarity_word(token: &str) -> bool {
    POSITIVE_WORDS.contains_key(token) || NEGATIVE_WORDS.contains_key(token)
}

/// Polarity of an extracted emoji, 0 when unknown.
pub fn emoji_polarity(emoji: &str) -> f64 {
    EMOJI_SENTIMENT.get(emoji).copied().unwrap_or(0.0)
}

pub fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_polarity_lookup() {
        assert_eq!(word_polarity("love"), 3.0);
        assert_eq!(word_polarity("tired"), -1.5);
        assert_eq!(word_polarity("table"), 0.0);
    }

    #[test]
    fn test_tables_do_not_overlap() {
        for word in POSITIVE_WORDS.keys() {
            assert!(!NEGATIVE_WORDS.contains_key(word), "{word} in both tables");
        }
        for word in INTENSIFIERS.keys() {
            assert!(!DIMINISHERS.contains_key(word), "{word} is both modifiers");
        }
    }

    #[test]
    fn test_modifier_factors_on_correct_side_of_one() {
        assert!(INTENSIFIERS.values().all(|&f| f > 1.0));
        assert!(DIMINISHERS.values().all(|&f| f < 1.0));
    }

    #[test]
    fn test_emoji_polarity() {
        assert_eq!(emoji_polarity("😍"), 3.0);
        assert_eq!(emoji_polarity("💔"), -3.0);
        assert_eq!(emoji_polarity("🤯"), 1.0);
        assert_eq!(emoji_polarity("x"), 0.0);
    }

    #[test]
    fn test_every_emotion_has_ten_keywords() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.keywords().len(), 10, "{emotion}");
        }
    }
}
