//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Import Errors
    // =========================================================================
    #[error("Malformed CSV: {0}")]
    MalformedCsv(String),

    /// A data row failed the response schema. `index` is zero-based and
    /// `email` is whatever the row held in its `Email` column.
    #[error("There was an error parsing row #{index} ({email}).")]
    InvalidRow { index: usize, email: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Job queue error: {0}")]
    QueueError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedCsv(_) => "MALFORMED_CSV",
            Self::InvalidRow { .. } => "INVALID_ROW",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::QueueError(_) => "QUEUE_ERROR",
        }
    }

    /// Check if this error was caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MalformedCsv(_) | Self::InvalidRow { .. })
    }
}
