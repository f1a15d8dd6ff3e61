//! Error types for the medal table
//!
//! Ranking itself never fails; these errors cover the edges around it:
//! persisting edited scores, loading configuration and reading division sheets.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific scoring scenarios
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("Failed to save score for competitor {competitor_id}: {message}")]
    SaveFailed {
        competitor_id: String,
        message: String,
    },

    #[error("Invalid division sheet: {reason}")]
    InvalidDivisionSheet { reason: String },

    #[error("Duplicate competitor in division {division_id}: {competitor_id}")]
    DuplicateCompetitor {
        division_id: String,
        competitor_id: String,
    },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
