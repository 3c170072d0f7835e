// Batch pipeline: analyze many post/comment rows.
//
// Each row is independent, so rows are fanned out to blocking workers
// (bounded by `concurrency`) and the results re-sorted into input order.
// A row that fails is recorded with its error and the batch carries on.
//
// Input is either a JSON array of rows or JSON Lines, one row per line:
//   {"post": "caption text", "comments": "alice: nice\nbob - cool"}
// `caption` and `content` are accepted as aliases for `post`.

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::comments::{self, parser, PostWithCommentsAnalysis};
use crate::output::truncate_chars;

/// One input row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRow {
    #[serde(default, alias = "caption", alias = "content")]
    pub post: String,
    #[serde(default)]
    pub comments: String,
}

/// Outcome for one row: an analysis or the error that prevented it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowResult {
    /// 1-based position in the input
    pub row: usize,
    pub post_preview: String,
    pub comments_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<PostWithCommentsAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total_rows: usize,
    pub analyzed: usize,
    pub failed: usize,
    /// Mean post compound across analyzed rows (0 when none succeeded)
    pub average_post_sentiment: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub rows: Vec<RowResult>,
    pub summary: BatchSummary,
}

/// Parse batch input as a JSON array, or as JSON Lines.
pub fn parse_rows(input: &str) -> Result<Vec<BatchRow>> {
    if input.trim_start().starts_with('[') {
        return serde_json::from_str(input).context("Batch input is not a valid JSON array of rows");
    }

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid JSON row on line {}", i + 1))
        })
        .collect()
}

/// Analyze one row. Never fails: errors are captured in the result.
pub fn analyze_row(row: usize, input: &BatchRow, preview_chars: usize) -> RowResult {
    let comments_count = parser::split_lines(&input.comments).len();
    let post_preview = truncate_chars(input.post.trim(), preview_chars);

    match comments::analyze_post_with_comments(&input.post, &input.comments) {
        Ok(analysis) => RowResult {
            row,
            post_preview,
            comments_count,
            analysis: Some(analysis),
            error: None,
        },
        Err(e) => {
            warn!(row, error = %e, "Failed to analyze row, skipping");
            RowResult {
                row,
                post_preview,
                comments_count: 0,
                analysis: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Summarise a set of row results.
pub fn summarize(rows: &[RowResult]) -> BatchSummary {
    let compounds: Vec<f64> = rows
        .iter()
        .filter_map(|r| r.analysis.as_ref())
        .map(|a| a.post.scores.compound)
        .collect();

    let analyzed = compounds.len();
    let average_post_sentiment = if analyzed == 0 {
        0.0
    } else {
        compounds.iter().sum::<f64>() / analyzed as f64
    };

    BatchSummary {
        total_rows: rows.len(),
        analyzed,
        failed: rows.len() - analyzed,
        average_post_sentiment,
    }
}

/// Run the batch pipeline over `rows`.
///
/// `show_progress` draws a progress bar on the terminal; tests and JSON
/// output pass `false`.
pub async fn run(
    rows: Vec<BatchRow>,
    concurrency: usize,
    preview_chars: usize,
    show_progress: bool,
) -> Result<BatchReport> {
    let pb = if show_progress {
        let pb = ProgressBar::new(rows.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar().template("  Analyzing [{bar:30}] {pos}/{len} ({eta})")?,
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let joined: Vec<_> = stream::iter(rows.into_iter().enumerate().map(|(i, row)| {
        let pb = pb.clone();
        async move {
            let result =
                tokio::task::spawn_blocking(move || analyze_row(i + 1, &row, preview_chars)).await;
            pb.inc(1);
            result
        }
    }))
    .buffer_unordered(concurrency.max(1))
    .collect()
    .await;

    pb.finish_and_clear();

    let mut results = joined
        .into_iter()
        .collect::<std::result::Result<Vec<RowResult>, _>>()
        .context("Batch worker panicked")?;
    results.sort_by_key(|r| r.row);

    let summary = summarize(&results);
    info!(
        rows = summary.total_rows,
        analyzed = summary.analyzed,
        failed = summary.failed,
        "Batch complete"
    );

    Ok(BatchReport {
        rows: results,
        summary,
    })
}
