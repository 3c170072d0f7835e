// Single-text sentiment pipeline.
//
// raw text -> tokens/emoji/features -> per-token scores -> compound and
// percentages -> emotions -> engagement. Every call is independent: the
// lexicon tables are read-only statics and nothing is cached between calls.

pub mod emotion;
pub mod engagement;
pub mod error;
pub mod lexicon;
pub mod models;
pub mod scorer;
pub mod tokenize;

use tracing::debug;

pub use error::AnalysisError;
pub use models::{
    Engagement, EngagementLevel, EmotionScores, Keywords, SentimentAnalysis, SentimentScore,
    SentimentTag, TextFeatures,
};

/// Analyze one text unit.
///
/// Fails only when `text` is empty or whitespace-only.
pub fn analyze(text: &str) -> error::Result<SentimentAnalysis> {
    if tokenize::trim_blank(text).is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let tokens = tokenize::tokenize(text);
    let emojis = tokenize::extract_emojis(text);

    let lexicon_score = scorer::score(&tokens, &emojis);
    let scores = lexicon_score.scores;

    let emotions = emotion::analyze_emotions(&tokens, &emojis);
    let features = tokenize::extract_features(text);
    let engagement = engagement::calculate_engagement(&scores, &emotions, &features);

    debug!(
        tokens = tokens.len(),
        emojis = emojis.len(),
        compound = scores.compound,
        "Analyzed text"
    );

    Ok(SentimentAnalysis {
        overall: scores.overall(),
        confidence: scores.confidence(),
        scores,
        emotions,
        keywords: lexicon_score.keywords,
        features,
        engagement,
    })
}
