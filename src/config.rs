use std::env;

use anyhow::{Context, Result};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored human-readable output (default)
    Terminal,
    /// Pretty-printed JSON on stdout
    Json,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override whatever is set here. The lexicon itself is not configurable.
#[derive(Debug, Clone)]
pub struct Config {
    pub output: OutputFormat,
    /// Rows analyzed in parallel by `pulse batch`
    pub concurrency: usize,
    /// Where `--report` writes the markdown report
    pub report_path: String,
    /// Characters of text shown in previews and tables
    pub preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Terminal,
            concurrency: 4,
            report_path: "output/pulse-report.md".to_string(),
            preview_chars: 100,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let output = match env::var("PULSE_OUTPUT").as_deref() {
            Ok("json") => OutputFormat::Json,
            Ok("terminal") | Err(_) => OutputFormat::Terminal,
            Ok(other) => anyhow::bail!(
                "PULSE_OUTPUT must be \"terminal\" or \"json\", got \"{other}\""
            ),
        };

        let concurrency = parse_usize_var("PULSE_CONCURRENCY", defaults.concurrency)?;
        if concurrency == 0 {
            anyhow::bail!("PULSE_CONCURRENCY must be at least 1");
        }

        Ok(Self {
            output,
            concurrency,
            report_path: env::var("PULSE_REPORT_PATH").unwrap_or(defaults.report_path),
            preview_chars: parse_usize_var("PULSE_PREVIEW_CHARS", defaults.preview_chars)?,
        })
    }
}

fn parse_usize_var(name: &str, default: usize) -> Result<usize> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a non-negative integer, got \"{raw}\"")),
        Err(_) => Ok(default),
    }
}
