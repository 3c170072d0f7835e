// Markdown report generation for a post + comments analysis.
//
// The report is a shareable snapshot: post summary, emotion breakdown,
// per-comment table and the aggregate statistics. The generation timestamp
// lives only here; analysis results themselves carry no clock data.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use super::truncate_chars;
use crate::analysis::SentimentAnalysis;
use crate::comments::{CommentAnalysis, PostWithCommentsAnalysis};

/// Write a markdown report to `path`, creating parent directories as needed.
///
/// Returns the path that was written.
pub fn generate_report(
    post_text: &str,
    result: &PostWithCommentsAnalysis,
    path: &str,
    preview_chars: usize,
) -> Result<String> {
    let content = render_report(post_text, result, preview_chars);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create report directory {}", parent.display())
            })?;
        }
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write report to {path}"))?;

    Ok(path.to_string())
}

/// Render the report body without touching the filesystem.
pub fn render_report(
    post_text: &str,
    result: &PostWithCommentsAnalysis,
    preview_chars: usize,
) -> String {
    let mut md = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(md, "# Pulse Sentiment Report\n");
    let _ = writeln!(
        md,
        "Generated: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    );

    let _ = writeln!(md, "## Post\n");
    let _ = writeln!(md, "> {}\n", truncate_chars(post_text.trim(), preview_chars * 3));
    write_analysis_table(&mut md, &result.post);

    let stats = &result.comment_stats;
    let _ = writeln!(md, "## Comments\n");
    if result.comments.is_empty() {
        let _ = writeln!(md, "No comments analyzed.\n");
    } else {
        write_comment_table(&mut md, &result.comments, preview_chars);

        let dist = &stats.sentiment_distribution;
        let _ = writeln!(md, "## Comment Statistics\n");
        let _ = writeln!(md, "| Metric | Value |");
        let _ = writeln!(md, "|--------|-------|");
        let _ = writeln!(md, "| Total comments | {} |", stats.total_comments);
        let _ = writeln!(md, "| Average sentiment | {:.3} |", stats.average_sentiment);
        let _ = writeln!(md, "| Positive | {:.1}% |", dist.positive);
        let _ = writeln!(md, "| Negative | {:.1}% |", dist.negative);
        let _ = writeln!(md, "| Neutral | {:.1}% |", dist.neutral);
        let _ = writeln!(md, "| Engagement score | {:.1} |", stats.engagement_score);
        let _ = writeln!(md);

        if let Some(top) = &stats.top_positive_comment {
            let _ = writeln!(
                md,
                "**Most positive comment** ({:+.2}): {}\n",
                top.sentiment.scores.compound,
                quote(&top.text, preview_chars)
            );
        }
        if let Some(top) = &stats.top_negative_comment {
            let _ = writeln!(
                md,
                "**Most negative comment** ({:+.2}): {}\n",
                top.sentiment.scores.compound,
                quote(&top.text, preview_chars)
            );
        }
    }

    let overall = &result.overall_analysis;
    let _ = writeln!(md, "## Overall\n");
    let _ = writeln!(md, "| Metric | Value |");
    let _ = writeln!(md, "|--------|-------|");
    let _ = writeln!(
        md,
        "| Combined sentiment | {} ({:.3}) |",
        overall.combined_sentiment.overall, overall.combined_sentiment.scores.compound
    );
    let _ = writeln!(md, "| Post/comment alignment | {:.1}% |", overall.post_vs_comments_alignment);
    let _ = writeln!(md, "| Controversy | {:.1}% |", overall.controversy_score);

    md
}

fn write_analysis_table(md: &mut String, analysis: &SentimentAnalysis) {
    let s = &analysis.scores;
    let _ = writeln!(md, "| Metric | Value |");
    let _ = writeln!(md, "|--------|-------|");
    let _ = writeln!(md, "| Overall | {} |", analysis.overall);
    let _ = writeln!(md, "| Confidence | {:.1}% |", analysis.confidence);
    let _ = writeln!(md, "| Compound | {:.3} |", s.compound);
    let _ = writeln!(
        md,
        "| Positive / Negative / Neutral | {:.1}% / {:.1}% / {:.1}% |",
        s.positive, s.negative, s.neutral
    );
    let _ = writeln!(
        md,
        "| Engagement | {} (virality {:.1}) |",
        analysis.engagement.likely_engagement, analysis.engagement.virality
    );
    let _ = writeln!(md);

    let _ = writeln!(md, "### Emotions\n");
    let _ = writeln!(md, "| Emotion | Intensity |");
    let _ = writeln!(md, "|---------|-----------|");
    for (emotion, value) in analysis.emotions.iter() {
        let _ = writeln!(md, "| {} | {:.0} |", emotion, value);
    }
    let _ = writeln!(md);

    if !analysis.keywords.positive.is_empty() || !analysis.keywords.negative.is_empty() {
        let _ = writeln!(md, "**Positive words:** {}  ", analysis.keywords.positive.join(", "));
        let _ = writeln!(md, "**Negative words:** {}\n", analysis.keywords.negative.join(", "));
    }
}

fn write_comment_table(md: &mut String, comments: &[CommentAnalysis], preview_chars: usize) {
    let _ = writeln!(md, "| # | Author | Sentiment | Compound | Top emotion | Text |");
    let _ = writeln!(md, "|---|--------|-----------|----------|-------------|------|");
    for (i, c) in comments.iter().enumerate() {
        let (emotion, value) = c.sentiment.emotions.dominant();
        let _ = writeln!(
            md,
            "| {} | {} | {} | {:.3} | {}: {:.0} | {} |",
            i + 1,
            c.author.as_deref().unwrap_or("-"),
            c.sentiment.overall,
            c.sentiment.scores.compound,
            emotion,
            value,
            escape_cell(&truncate_chars(&c.text, preview_chars))
        );
    }
    let _ = writeln!(md);
}

fn quote(text: &str, max_chars: usize) -> String {
    format!("\"{}\"", truncate_chars(text, max_chars))
}

/// Keep pipes and newlines from breaking the table layout.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b\nc"), "a\\|b c");
    }
}
