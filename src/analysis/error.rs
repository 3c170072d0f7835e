use thiserror::Error;

/// Failures of the scoring core.
///
/// Unknown words, unknown emoji and lexicon misses are never errors; they
/// simply contribute nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The required text was empty or whitespace-only.
    #[error("text cannot be empty")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
