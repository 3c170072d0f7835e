// Pulse: lexicon-based sentiment scoring for social posts.
//
// This is the library root. Each module corresponds to one stage of the
// scoring pipeline or one way of driving it.

pub mod analysis;
pub mod comments;
pub mod config;
pub mod output;
pub mod pipeline;

pub use analysis::{analyze, AnalysisError, SentimentAnalysis};
pub use comments::{analyze_post_with_comments, PostWithCommentsAnalysis};
