// Comment handling: parsing a comments blob and aggregating the
// per-comment analyses against the post.

pub mod aggregate;
pub mod parser;

pub use aggregate::{
    analyze_post_with_comments, CommentAnalysis, CommentStats, OverallAnalysis,
    PostWithCommentsAnalysis, SentimentDistribution,
};
