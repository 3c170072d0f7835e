// Colored terminal output for analyses, comment breakdowns and batches.
//
// Everything terminal-specific lives here; main.rs only decides what to show.

use colored::Colorize;

use super::{percent_bar, truncate_chars};
use crate::analysis::{EngagementLevel, SentimentAnalysis, SentimentTag};
use crate::comments::{CommentAnalysis, PostWithCommentsAnalysis};
use crate::pipeline::batch::BatchReport;

const BAR_WIDTH: usize = 20;

/// Display a single text's analysis.
pub fn display_analysis(title: &str, analysis: &SentimentAnalysis) {
    println!("\n{}", format!("=== {title} ===").bold());

    println!(
        "  Overall: {}  (confidence {:.1}%, compound {:+.3})",
        colorize_tag(analysis.overall),
        analysis.confidence,
        analysis.scores.compound
    );

    let s = &analysis.scores;
    println!("  Positive {} {:>6.1}%", percent_bar(s.positive, BAR_WIDTH).green(), s.positive);
    println!("  Negative {} {:>6.1}%", percent_bar(s.negative, BAR_WIDTH).red(), s.negative);
    println!("  Neutral  {} {:>6.1}%", percent_bar(s.neutral, BAR_WIDTH).dimmed(), s.neutral);

    println!("\n  Emotions:");
    for (emotion, value) in analysis.emotions.iter() {
        if value > 0.0 {
            println!(
                "    {:<13} {} {:>5.0}",
                emotion.as_str(),
                percent_bar(value, BAR_WIDTH).bright_blue(),
                value
            );
        }
    }
    if analysis.emotions.max() == 0.0 {
        println!("    {}", "none detected".dimmed());
    }

    let k = &analysis.keywords;
    if !k.positive.is_empty() {
        println!("\n  Positive words: {}", k.positive.join(", ").green());
    }
    if !k.negative.is_empty() {
        println!("  Negative words: {}", k.negative.join(", ").red());
    }

    let f = &analysis.features;
    println!(
        "\n  Words: {}  Sentences: {}  Avg words/sentence: {:.1}",
        f.word_count, f.sentence_count, f.avg_words_per_sentence
    );
    let flags: Vec<&str> = [
        (f.has_emojis, "emoji"),
        (f.has_hashtags, "hashtags"),
        (f.has_mentions, "mentions"),
        (f.has_questions, "questions"),
        (f.has_exclamations, "exclamations"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect();
    if !flags.is_empty() {
        println!("  Contains: {}", flags.join(", ").dimmed());
    }

    let e = &analysis.engagement;
    println!(
        "  Engagement: {}  (virality {:.1}, emotional intensity {:.0})",
        colorize_engagement(e.likely_engagement),
        e.virality,
        e.emotional_intensity
    );
}

/// Display a post analysis with its comment breakdown and aggregate stats.
pub fn display_post_with_comments(result: &PostWithCommentsAnalysis, preview_chars: usize) {
    display_analysis("Post", &result.post);

    if result.comments.is_empty() {
        println!("\n  {}", "No comments to analyze.".dimmed());
        return;
    }

    display_comment_table(&result.comments, preview_chars);

    let stats = &result.comment_stats;
    let dist = &stats.sentiment_distribution;
    println!("\n{}", "=== Comment Statistics ===".bold());
    println!("  Total comments:    {}", stats.total_comments);
    println!("  Average sentiment: {:+.2}", stats.average_sentiment);
    println!(
        "  Distribution:      {} {:.1}%  {} {:.1}%  {} {:.1}%",
        "positive".green(),
        dist.positive,
        "negative".red(),
        dist.negative,
        "neutral".dimmed(),
        dist.neutral
    );
    println!("  Engagement score:  {:.1}/100", stats.engagement_score);

    if let Some(top) = &stats.top_positive_comment {
        println!(
            "  Most positive:     {} {}",
            format!("[{:+.2}]", top.sentiment.scores.compound).green(),
            truncate_chars(&top.text, preview_chars)
        );
    }
    if let Some(top) = &stats.top_negative_comment {
        println!(
            "  Most negative:     {} {}",
            format!("[{:+.2}]", top.sentiment.scores.compound).red(),
            truncate_chars(&top.text, preview_chars)
        );
    }

    let overall = &result.overall_analysis;
    println!("\n{}", "=== Overall ===".bold());
    println!(
        "  Combined sentiment: {} ({:+.3})",
        colorize_tag(overall.combined_sentiment.overall),
        overall.combined_sentiment.scores.compound
    );
    println!("  Post/comment alignment: {:.1}%", overall.post_vs_comments_alignment);

    let controversy = format!("{:.1}%", overall.controversy_score);
    let controversy = if overall.controversy_score >= 50.0 {
        controversy.red().bold()
    } else if overall.controversy_score > 0.0 {
        controversy.yellow()
    } else {
        controversy.green()
    };
    println!("  Controversy: {controversy}");
}

fn display_comment_table(comments: &[CommentAnalysis], preview_chars: usize) {
    println!(
        "\n{}",
        format!("=== Comments ({}) ===", comments.len()).bold()
    );
    println!(
        "  {:>4}  {:<20} {:<10} {:>7}  {:<12} Text",
        "#".dimmed(),
        "Author".dimmed(),
        "Sentiment".dimmed(),
        "Score".dimmed(),
        "Emotion".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, comment) in comments.iter().enumerate() {
        let (emotion, value) = comment.sentiment.emotions.dominant();
        let emotion = if value > 0.0 { emotion.as_str() } else { "-" };
        println!(
            "  {:>4}. {:<20} {:<10} {:>+7.2}  {:<12} {}",
            i + 1,
            comment.author.as_deref().unwrap_or("-"),
            colorize_tag(comment.sentiment.overall),
            comment.sentiment.scores.compound,
            emotion,
            truncate_chars(&comment.text, preview_chars).dimmed()
        );
    }
}

/// Display a batch run: one line per row plus the summary.
pub fn display_batch(report: &BatchReport) {
    println!(
        "\n{}",
        format!("=== Batch Results ({} rows) ===", report.rows.len()).bold()
    );
    println!(
        "  {:>4}  {:<10} {:>7}  {:>8}  {:>11}  Post",
        "Row".dimmed(),
        "Sentiment".dimmed(),
        "Score".dimmed(),
        "Comments".dimmed(),
        "Controversy".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for row in &report.rows {
        match (&row.analysis, &row.error) {
            (Some(a), _) => println!(
                "  {:>4}  {:<10} {:>+7.2}  {:>8}  {:>10.1}%  {}",
                row.row,
                colorize_tag(a.post.overall),
                a.post.scores.compound,
                row.comments_count,
                a.overall_analysis.controversy_score,
                row.post_preview.dimmed()
            ),
            (None, error) => println!(
                "  {:>4}  {}  {}",
                row.row,
                format!("Error: {}", error.as_deref().unwrap_or("unknown")).red(),
                row.post_preview.dimmed()
            ),
        }
    }

    let s = &report.summary;
    println!(
        "\n  Analyzed {} of {} rows ({} failed), average post sentiment {:+.2}",
        s.analyzed, s.total_rows, s.failed, s.average_post_sentiment
    );
}

/// Colorize a sentiment tag.
fn colorize_tag(tag: SentimentTag) -> colored::ColoredString {
    match tag {
        SentimentTag::Positive => tag.as_str().green().bold(),
        SentimentTag::Negative => tag.as_str().red().bold(),
        SentimentTag::Neutral => tag.as_str().normal(),
    }
}

fn colorize_engagement(level: EngagementLevel) -> colored::ColoredString {
    match level {
        EngagementLevel::High => level.as_str().bright_green().bold(),
        EngagementLevel::Medium => level.as_str().yellow(),
        EngagementLevel::Low => level.as_str().dimmed(),
    }
}
