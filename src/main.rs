use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use pulse::analysis::lexicon;
use pulse::config::{Config, OutputFormat};

/// Pulse: lexicon-based sentiment scoring for social posts.
///
/// Scores a post and its comments for polarity, emotion mix and likely
/// engagement using fixed word and emoji tables. No models, no network.
#[derive(Parser)]
#[command(name = "pulse", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single piece of text
    Analyze {
        /// The text to analyze (or use --file)
        text: Option<String>,

        /// Read the text from a file ("-" for stdin)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print JSON instead of the terminal view
        #[arg(long)]
        json: bool,
    },

    /// Analyze a post together with its comments
    Post {
        /// Post caption text
        #[arg(long)]
        post: Option<String>,

        /// Read the post from a file ("-" for stdin)
        #[arg(long)]
        post_file: Option<PathBuf>,

        /// Comments, one per line ("author: text" or "author - text")
        #[arg(long)]
        comments: Option<String>,

        /// Read the comments from a file
        #[arg(long)]
        comments_file: Option<PathBuf>,

        /// Print JSON instead of the terminal view
        #[arg(long)]
        json: bool,

        /// Also write a markdown report
        #[arg(long)]
        report: bool,
    },

    /// Analyze many posts from a JSON array or JSON Lines file
    Batch {
        /// Input file ("-" for stdin)
        input: PathBuf,

        /// Number of rows to analyze in parallel (default: PULSE_CONCURRENCY or 4)
        #[arg(long)]
        concurrency: Option<usize>,

        /// Write the full JSON results to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print JSON instead of the terminal view
        #[arg(long)]
        json: bool,
    },

    /// Show the size of the built-in lexicon tables
    Lexicon,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pulse=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { text, file, json } => {
            let text = read_input(text, file.as_deref(), "text")?;
            let analysis = pulse::analysis::analyze(&text)?;

            if json || config.output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                pulse::output::terminal::display_analysis("Sentiment Analysis", &analysis);
            }
        }

        Commands::Post {
            post,
            post_file,
            comments,
            comments_file,
            json,
            report,
        } => {
            let post_text = read_input(post, post_file.as_deref(), "post")?;
            let comments_text = match (comments, comments_file) {
                (Some(text), _) => text,
                (None, Some(path)) => read_path(&path)?,
                (None, None) => String::new(),
            };

            let result = pulse::comments::analyze_post_with_comments(&post_text, &comments_text)?;
            info!(
                comments = result.comment_stats.total_comments,
                overall = %result.post.overall,
                "Post analyzed"
            );

            if json || config.output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                pulse::output::terminal::display_post_with_comments(&result, config.preview_chars);
            }

            if report {
                let path = pulse::output::markdown::generate_report(
                    &post_text,
                    &result,
                    &config.report_path,
                    config.preview_chars,
                )?;
                eprintln!("\n{}", format!("Markdown report saved to: {path}").bold());
            }
        }

        Commands::Batch {
            input,
            concurrency,
            output,
            json,
        } => {
            let raw = read_path(&input)?;
            let rows = pulse::pipeline::batch::parse_rows(&raw)?;
            if rows.is_empty() {
                anyhow::bail!("No rows found in {}", input.display());
            }

            let concurrency = concurrency.unwrap_or(config.concurrency).max(1);
            let as_json = json || config.output == OutputFormat::Json;

            info!(rows = rows.len(), concurrency, "Starting batch analysis");
            let report =
                pulse::pipeline::batch::run(rows, concurrency, config.preview_chars, !as_json)
                    .await?;

            if let Some(path) = &output {
                let body = serde_json::to_string_pretty(&report)?;
                std::fs::write(path, body)
                    .with_context(|| format!("Failed to write results to {}", path.display()))?;
                eprintln!("Results saved to: {}", path.display());
            }

            if as_json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                pulse::output::terminal::display_batch(&report);
            }
        }

        Commands::Lexicon => {
            println!("{}", "=== Lexicon ===".bold());
            println!("  Positive words: {}", lexicon::POSITIVE_WORDS.len());
            println!("  Negative words: {}", lexicon::NEGATIVE_WORDS.len());
            println!("  Intensifiers:   {}", lexicon::INTENSIFIERS.len());
            println!("  Diminishers:    {}", lexicon::DIMINISHERS.len());
            println!("  Negations:      {}", lexicon::NEGATIONS.len());
            println!("  Emoji:          {}", lexicon::EMOJI_SENTIMENT.len());
            for emotion in lexicon::Emotion::ALL {
                println!(
                    "  {:<13} {}",
                    format!("{emotion}:"),
                    emotion.keywords().join(", ").dimmed()
                );
            }
        }
    }

    Ok(())
}

/// Resolve a text argument: inline value first, then a file.
fn read_input(inline: Option<String>, path: Option<&Path>, what: &str) -> Result<String> {
    match (inline, path) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => read_path(path),
        (None, None) => anyhow::bail!("No {what} given. Pass it inline or with a file flag."),
    }
}

/// Read a whole file, or stdin when the path is "-".
fn read_path(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
