// Tokenizer and structural feature extraction.
//
// Tokens are lowercase runs of ASCII word characters plus '#' and '@';
// everything else is a separator. Emoji, hashtags and mentions are pulled
// from the raw text by independent pattern passes, duplicates kept.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::models::TextFeatures;

/// Single code points in the emoticon, pictograph, transport, regional
/// indicator, misc-symbol and dingbat blocks.
static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}",
        r"\x{1F1E0}-\x{1F1FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]",
    ))
    .expect("emoji pattern is valid")
});

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"));

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@\w+").expect("mention pattern is valid"));

static SENTENCE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

/// Whitespace as far as blank-input checks are concerned: Unicode
/// White_Space minus NEL (U+0085), plus the byte order mark (U+FEFF).
pub fn is_blank_char(c: char) -> bool {
    match c {
        '\u{0085}' => false,
        '\u{FEFF}' => true,
        c => c.is_whitespace(),
    }
}

/// Strip leading and trailing blank characters.
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank_char)
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '#' || c == '@'
}

/// Split text into lowercase word tokens, in order, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_token_char(c) { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// All emoji in order of appearance (one code point per match).
pub fn extract_emojis(text: &str) -> Vec<&str> {
    EMOJI_RE.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn extract_hashtags(text: &str) -> Vec<&str> {
    HASHTAG_RE.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn extract_mentions(text: &str) -> Vec<&str> {
    MENTION_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Number of non-blank segments between runs of '.', '!' and '?'.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_SPLIT_RE
        .split(text)
        .filter(|s| !trim_blank(s).is_empty())
        .count()
}

/// Compute structural flags and counts for the raw text.
pub fn extract_features(text: &str) -> TextFeatures {
    let word_count = tokenize(text).len();
    let sentence_count = count_sentences(text);

    TextFeatures {
        has_emojis: EMOJI_RE.is_match(text),
        has_hashtags: HASHTAG_RE.is_match(text),
        has_mentions: MENTION_RE.is_match(text),
        has_questions: text.contains('?'),
        has_exclamations: text.contains('!'),
        word_count,
        sentence_count,
        avg_words_per_sentence: word_count as f64 / sentence_count.max(1) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Hello, World! #Rust @dev"),
            vec!["hello", "world", "#rust", "@dev"]
        );
    }

    #[test]
    fn test_tokenize_splits_contractions() {
        assert_eq!(tokenize("don't"), vec!["don", "t"]);
    }

    #[test]
    fn test_tokenize_drops_emoji_and_keeps_order() {
        assert_eq!(tokenize("good 😍 good"), vec!["good", "good"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("   ...  ").is_empty());
    }

    #[test]
    fn test_extract_emojis_keeps_duplicates() {
        assert_eq!(extract_emojis("🔥 wow 🔥😍"), vec!["🔥", "🔥", "😍"]);
    }

    #[test]
    fn test_extract_emojis_misses_supplemental_symbols() {
        // U+1F970 sits outside the matched blocks
        assert!(extract_emojis("🥰").is_empty());
    }

    #[test]
    fn test_extract_emojis_splits_variation_selector() {
        assert_eq!(extract_emojis("\u{2764}\u{FE0F}"), vec!["\u{2764}"]);
    }

    #[test]
    fn test_hashtags_and_mentions() {
        let text = "Thanks @ana and @bo_b! #travel #food";
        assert_eq!(extract_mentions(text), vec!["@ana", "@bo_b"]);
        assert_eq!(extract_hashtags(text), vec!["#travel", "#food"]);
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(count_sentences("One. Two!! Three?"), 3);
        assert_eq!(count_sentences("no terminator"), 1);
        assert_eq!(count_sentences("?!"), 0);
    }

    #[test]
    fn test_features_never_divide_by_zero() {
        let f = extract_features("!!!");
        assert_eq!(f.sentence_count, 0);
        assert_eq!(f.word_count, 0);
        assert_eq!(f.avg_words_per_sentence, 0.0);
        assert!(f.has_exclamations);
    }

    #[test]
    fn test_features_flags() {
        let f = extract_features("Where to next? 🌏 #travel @friend");
        assert!(f.has_emojis);
        assert!(f.has_hashtags);
        assert!(f.has_mentions);
        assert!(f.has_questions);
        assert!(!f.has_exclamations);
        assert_eq!(f.word_count, 5);
        assert_eq!(f.sentence_count, 2);
    }
}
