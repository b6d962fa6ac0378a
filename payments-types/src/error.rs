//! Error types for the payment query service.

/// Domain-level errors (value construction violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("Invalid year-month '{0}', expected YYYY-MM")]
    InvalidYearMonth(String),

    #[error("Amount overflow while summing prices")]
    AmountOverflow,
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed payment data: {0}")]
    Parse(String),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

/// Clock-level errors.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("Clock unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by query operations.
///
/// Collaborator failures are carried through unchanged; the query layer
/// adds only `InvalidArgument` and `Overflow` of its own.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Clock(#[from] ClockError),
}

impl From<DomainError> for QueryError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::AmountOverflow => QueryError::Overflow(err.to_string()),
            DomainError::InvalidMonth(_) | DomainError::InvalidYearMonth(_) => {
                QueryError::InvalidArgument(err.to_string())
            }
        }
    }
}
