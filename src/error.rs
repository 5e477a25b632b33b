//! Error types for the leadimage library.

use thiserror::Error;

/// Result type alias for leadimage operations
pub type Result<T> = std::result::Result<T, LeadImageError>;

/// Errors that can occur while configuring a resolver.
///
/// Resolution itself never fails: degraded input is handled by falling back,
/// and "no image found" is reported as `None`.
#[derive(Error, Debug)]
pub enum LeadImageError {
    /// An extra scoring rule pattern could not be compiled
    #[error("Invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Options are inconsistent
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}
