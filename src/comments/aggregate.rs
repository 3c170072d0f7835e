// Post + comments aggregate analysis.
//
// Every comment runs through the full single-text pipeline, then the
// comment list is summarised:
//   - average compound and tag distribution (percent of comments)
//   - strongest positive / negative comment
//   - engagement score from volume, sentiment strength and polarisation
//   - alignment between the post and the comment average
//   - controversy, high when positive and negative comments balance out
// The combined sentiment is a fresh analysis of "post + ' ' + comments",
// not a merge of the scores already computed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parser::{self, ParsedComment};
use crate::analysis::{self, error::Result, SentimentAnalysis, SentimentTag};

/// One comment line with its own analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAnalysis {
    /// "comment-{n}", n being the 0-based position among non-blank lines
    pub id: String,
    pub text: String,
    pub sentiment: SentimentAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Percentage of comments carrying each tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentStats {
    pub total_comments: usize,
    /// Mean compound over all comments
    pub average_sentiment: f64,
    pub sentiment_distribution: SentimentDistribution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_positive_comment: Option<CommentAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_negative_comment: Option<CommentAnalysis>,
    /// 0-100
    pub engagement_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAnalysis {
    pub combined_sentiment: SentimentAnalysis,
    /// 0-100, 100 when post and comment average agree exactly
    pub post_vs_comments_alignment: f64,
    /// 0-100, 100 when comments split evenly between positive and negative
    pub controversy_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithCommentsAnalysis {
    pub post: SentimentAnalysis,
    pub comments: Vec<CommentAnalysis>,
    pub comment_stats: CommentStats,
    pub overall_analysis: OverallAnalysis,
}

impl PostWithCommentsAnalysis {
    /// The result for a post with no comments at all.
    pub fn without_comments(post: SentimentAnalysis) -> Self {
        Self {
            comments: Vec::new(),
            comment_stats: CommentStats::default(),
            overall_analysis: OverallAnalysis {
                combined_sentiment: post.clone(),
                post_vs_comments_alignment: 100.0,
                controversy_score: 0.0,
            },
            post,
        }
    }
}

fn clamp100(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Analyze each parsed comment, assigning positional ids.
pub fn analyze_comments(parsed: Vec<ParsedComment>) -> Result<Vec<CommentAnalysis>> {
    parsed
        .into_iter()
        .enumerate()
        .map(|(index, comment)| {
            let sentiment = analysis::analyze(&comment.text)?;
            Ok(CommentAnalysis {
                id: format!("comment-{index}"),
                text: comment.text,
                sentiment,
                timestamp: None,
                author: comment.author,
            })
        })
        .collect()
}

/// First comment with the given tag whose compound beats all others by `better`.
fn top_comment(
    comments: &[CommentAnalysis],
    tag: SentimentTag,
    better: impl Fn(f64, f64) -> bool,
) -> Option<CommentAnalysis> {
    comments
        .iter()
        .filter(|c| c.sentiment.overall == tag)
        .fold(None::<&CommentAnalysis>, |best, c| match best {
            Some(b) if !better(c.sentiment.scores.compound, b.sentiment.scores.compound) => {
                Some(b)
            }
            _ => Some(c),
        })
        .cloned()
}

/// Count of (positive, negative, neutral) comments.
pub fn tag_counts(comments: &[CommentAnalysis]) -> (usize, usize, usize) {
    comments
        .iter()
        .fold((0, 0, 0), |(p, n, u), c| match c.sentiment.overall {
            SentimentTag::Positive => (p + 1, n, u),
            SentimentTag::Negative => (p, n + 1, u),
            SentimentTag::Neutral => (p, n, u + 1),
        })
}

impl CommentStats {
    /// Summarise an ordered comment list.
    pub fn from_comments(comments: &[CommentAnalysis]) -> Self {
        let total = comments.len();
        let denom = total.max(1) as f64;

        let average_sentiment = comments
            .iter()
            .map(|c| c.sentiment.scores.compound)
            .sum::<f64>()
            / denom;

        let (positive, negative, neutral) = tag_counts(comments);

        let engagement_score = clamp100(
            total as f64 * 2.0
                + average_sentiment.abs() * 30.0
                + ((positive + negative) as f64 / denom) * 40.0,
        );

        Self {
            total_comments: total,
            average_sentiment,
            sentiment_distribution: SentimentDistribution {
                positive: positive as f64 / denom * 100.0,
                negative: negative as f64 / denom * 100.0,
                neutral: neutral as f64 / denom * 100.0,
            },
            top_positive_comment: top_comment(comments, SentimentTag::Positive, |a, b| a > b),
            top_negative_comment: top_comment(comments, SentimentTag::Negative, |a, b| a < b),
            engagement_score,
        }
    }
}

/// How closely the comment average tracks the post, 0-100.
pub fn alignment(post_compound: f64, average_sentiment: f64) -> f64 {
    (100.0 - (post_compound - average_sentiment).abs() * 100.0).max(0.0)
}

/// How evenly comments split between positive and negative, 0-100.
pub fn controversy(positive: usize, negative: usize, total: usize) -> f64 {
    clamp100(positive.min(negative) as f64 / total.max(1) as f64 * 200.0)
}

/// Analyze a post together with its newline-delimited comments.
///
/// Fails only when the post text is blank. A blank comments blob means
/// zero comments, not an error.
pub fn analyze_post_with_comments(
    post_text: &str,
    comments_text: &str,
) -> Result<PostWithCommentsAnalysis> {
    let post = analysis::analyze(post_text)?;

    let parsed = parser::parse_comments(comments_text);
    if parsed.is_empty() {
        return Ok(PostWithCommentsAnalysis::without_comments(post));
    }

    let comments = analyze_comments(parsed)?;
    let comment_stats = CommentStats::from_comments(&comments);
    let (positive, negative, _) = tag_counts(&comments);

    let combined_sentiment = analysis::analyze(&format!("{post_text} {comments_text}"))?;

    let overall_analysis = OverallAnalysis {
        combined_sentiment,
        post_vs_comments_alignment: alignment(
            post.scores.compound,
            comment_stats.average_sentiment,
        ),
        controversy_score: controversy(positive, negative, comments.len()),
    };

    debug!(
        comments = comments.len(),
        average = comment_stats.average_sentiment,
        controversy = overall_analysis.controversy_score,
        "Analyzed post with comments"
    );

    Ok(PostWithCommentsAnalysis {
        post,
        comments,
        comment_stats,
        overall_analysis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_formula() {
        assert_eq!(alignment(0.5, 0.5), 100.0);
        assert!((alignment(0.5, 0.25) - 75.0).abs() < 1e-9);
        assert_eq!(alignment(2.0, -1.0), 0.0);
    }

    #[test]
    fn test_controversy_formula() {
        assert_eq!(controversy(5, 5, 10), 100.0);
        assert_eq!(controversy(10, 0, 10), 0.0);
        assert!((controversy(1, 3, 10) - 20.0).abs() < 1e-9);
        assert_eq!(controversy(0, 0, 0), 0.0);
    }

    #[test]
    fn test_ids_follow_filtered_position() {
        let parsed = parser::parse_comments("\nfirst\n\nsecond");
        let comments = analyze_comments(parsed).unwrap();
        assert_eq!(comments[0].id, "comment-0");
        assert_eq!(comments[1].id, "comment-1");
    }

    #[test]
    fn test_empty_stats_are_zero() {
        let stats = CommentStats::from_comments(&[]);
        assert_eq!(stats.total_comments, 0);
        assert_eq!(stats.average_sentiment, 0.0);
        assert_eq!(stats.engagement_score, 0.0);
        assert!(stats.top_positive_comment.is_none());
    }

    #[test]
    fn test_top_comment_ties_keep_first() {
        let parsed = parser::parse_comments("a: amazing\nb: amazing");
        let comments = analyze_comments(parsed).unwrap();
        let stats = CommentStats::from_comments(&comments);
        let top = stats.top_positive_comment.unwrap();
        assert_eq!(top.id, "comment-0");
        assert!(stats.top_negative_comment.is_none());
    }
}
