// Unit tests for comment parsing and post + comments aggregation.
//
// Covers the two author prefix forms, blank-line handling, the zero-comment
// result, distribution/engagement arithmetic, controversy extremes and the
// choice of top comments.

use pulse::analysis::{analyze, AnalysisError, SentimentTag};
use pulse::comments::parser::{parse_comments, parse_line};
use pulse::comments::{analyze_post_with_comments, CommentStats};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================
// Parsing
// ============================================================

#[test]
fn colon_form_keeps_at_sign() {
    let c = parse_line("@alice: nice!");
    assert_eq!(c.author.as_deref(), Some("@alice"));
    assert_eq!(c.text, "nice!");
}

#[test]
fn dash_form_gains_at_sign() {
    let c = parse_line("bob - cool");
    assert_eq!(c.author.as_deref(), Some("@bob"));
    assert_eq!(c.text, "cool");
}

#[test]
fn line_without_prefix_has_no_author() {
    let c = parse_line("just text");
    assert!(c.author.is_none());
    assert_eq!(c.text, "just text");
}

#[test]
fn blank_lines_are_ignored() {
    let parsed = parse_comments("\n  \nalice: hi\n\n\t\nbob - yo\n");
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].author.as_deref(), Some("@alice"));
    assert_eq!(parsed[1].author.as_deref(), Some("@bob"));
}

#[test]
fn windows_line_endings_are_trimmed() {
    let parsed = parse_comments("one\r\ntwo\r\n");
    let texts: Vec<&str> = parsed.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);
}

// ============================================================
// Zero comments
// ============================================================

#[test]
fn empty_comments_blob_degenerates_to_post() {
    let result = analyze_post_with_comments("good", "").unwrap();
    assert!(result.comments.is_empty());
    assert_eq!(result.comment_stats, CommentStats::default());
    assert_eq!(result.overall_analysis.combined_sentiment, result.post);
    assert_eq!(result.overall_analysis.post_vs_comments_alignment, 100.0);
    assert_eq!(result.overall_analysis.controversy_score, 0.0);
}

#[test]
fn whitespace_only_comments_count_as_none() {
    let result = analyze_post_with_comments("good", " \n\n \t").unwrap();
    assert_eq!(result.comment_stats.total_comments, 0);
    assert_eq!(result.overall_analysis.combined_sentiment, analyze("good").unwrap());
}

#[test]
fn bom_only_comment_line_is_blank() {
    let result = analyze_post_with_comments("good", "\u{FEFF}\nalice: nice").unwrap();
    assert_eq!(result.comment_stats.total_comments, 1);
    assert_eq!(result.comments[0].id, "comment-0");
}

#[test]
fn blank_post_is_an_error_even_with_comments() {
    let err = analyze_post_with_comments("  ", "alice: nice").unwrap_err();
    assert_eq!(err, AnalysisError::EmptyInput);
    let err = analyze_post_with_comments("\u{FEFF}", "alice: nice").unwrap_err();
    assert_eq!(err, AnalysisError::EmptyInput);
}

// ============================================================
// Statistics
// ============================================================

#[test]
fn mixed_comments_distribution_and_engagement() {
    let result =
        analyze_post_with_comments("hello there", "amazing\nterrible\nthe cat sat").unwrap();
    let stats = &result.comment_stats;

    assert_eq!(stats.total_comments, 3);
    assert!(approx(stats.average_sentiment, 0.0));
    let dist = stats.sentiment_distribution;
    assert!(approx(dist.positive, 100.0 / 3.0));
    assert!(approx(dist.negative, 100.0 / 3.0));
    assert!(approx(dist.neutral, 100.0 / 3.0));
    assert!(approx(dist.positive + dist.negative + dist.neutral, 100.0));

    // 3 * 2 + 0 * 30 + (2 / 3) * 40
    assert!(approx(stats.engagement_score, 6.0 + 80.0 / 3.0));
    // min(1, 1) / 3 * 200
    assert!(approx(result.overall_analysis.controversy_score, 200.0 / 3.0));
    // post compound 0, average 0
    assert!(approx(result.overall_analysis.post_vs_comments_alignment, 100.0));
}

#[test]
fn comment_ids_and_authors_follow_input() {
    let result =
        analyze_post_with_comments("post", "@ann: good\n\nplain words\nzed - bad").unwrap();
    let ids: Vec<&str> = result.comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["comment-0", "comment-1", "comment-2"]);
    assert_eq!(result.comments[0].author.as_deref(), Some("@ann"));
    assert!(result.comments[1].author.is_none());
    assert_eq!(result.comments[2].author.as_deref(), Some("@zed"));
    assert!(result.comments.iter().all(|c| c.timestamp.is_none()));
}

#[test]
fn each_comment_is_analyzed_on_its_own_text() {
    let result = analyze_post_with_comments("post", "alice: not good").unwrap();
    assert_eq!(result.comments[0].text, "not good");
    assert_eq!(result.comments[0].sentiment, analyze("not good").unwrap());
}

#[test]
fn engagement_score_is_capped() {
    let blob = vec!["amazing"; 60].join("\n");
    let result = analyze_post_with_comments("post", &blob).unwrap();
    assert_eq!(result.comment_stats.engagement_score, 100.0);
}

// ============================================================
// Controversy and alignment
// ============================================================

#[test]
fn unanimous_comments_have_no_controversy() {
    let result = analyze_post_with_comments("post", "good\nnice\ncool").unwrap();
    assert_eq!(result.overall_analysis.controversy_score, 0.0);
}

#[test]
fn even_split_is_maximally_controversial() {
    let mut lines = vec!["amazing!"; 5];
    lines.extend(vec!["terrible!"; 5]);
    let result = analyze_post_with_comments("post", &lines.join("\n")).unwrap();
    assert_eq!(result.overall_analysis.controversy_score, 100.0);
    assert!(approx(result.comment_stats.average_sentiment, 0.0));
}

#[test]
fn alignment_floors_at_zero() {
    // post +3.0, comments average -3.0
    let result = analyze_post_with_comments("amazing", "awful").unwrap();
    assert_eq!(result.overall_analysis.post_vs_comments_alignment, 0.0);
}

// ============================================================
// Top comments
// ============================================================

#[test]
fn top_comments_pick_extremes() {
    let result = analyze_post_with_comments("post", "good\nawesome\nbad\nawful\nmeh").unwrap();
    let stats = &result.comment_stats;

    let top_pos = stats.top_positive_comment.as_ref().unwrap();
    assert_eq!(top_pos.text, "awesome");
    assert_eq!(top_pos.sentiment.overall, SentimentTag::Positive);

    let top_neg = stats.top_negative_comment.as_ref().unwrap();
    assert_eq!(top_neg.text, "awful");
    assert_eq!(top_neg.sentiment.overall, SentimentTag::Negative);
}

#[test]
fn tied_top_comment_keeps_first_in_order() {
    let result = analyze_post_with_comments("post", "a: terrible\nb: terrible").unwrap();
    let top = result.comment_stats.top_negative_comment.unwrap();
    assert_eq!(top.id, "comment-0");
    assert_eq!(top.author.as_deref(), Some("@a"));
    assert!(result.comment_stats.top_positive_comment.is_none());
}

#[test]
fn all_neutral_comments_have_no_top_comments() {
    let result = analyze_post_with_comments("post", "hello there\nthe cat sat").unwrap();
    assert!(result.comment_stats.top_positive_comment.is_none());
    assert!(result.comment_stats.top_negative_comment.is_none());
}

// ============================================================
// Serialization
// ============================================================

#[test]
fn result_serializes_with_camel_case_keys() {
    let result = analyze_post_with_comments("good", "bob - nice").unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["commentStats"]["totalComments"], 1);
    assert!(json["commentStats"]["sentimentDistribution"]["positive"].is_number());
    assert!(json["overallAnalysis"]["postVsCommentsAlignment"].is_number());
    assert_eq!(json["comments"][0]["author"], "@bob");
    assert!(json["comments"][0].get("timestamp").is_none());
}
