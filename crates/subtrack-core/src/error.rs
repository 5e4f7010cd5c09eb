//! Error types for Subtrack

use thiserror::Error;

/// The analysis operation an error surfaced from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Prediction,
    BudgetRecommendation,
    ReminderSuggestions,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Prediction => "Prediction",
            Operation::BudgetRecommendation => "Budget recommendation",
            Operation::ReminderSuggestions => "Reminder suggestions",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid billing date for {subscription}: {value:?} (expected YYYY-MM-DD)")]
    InvalidBillingDate { subscription: String, value: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("{operation} failed: {source}")]
    OperationFailed {
        operation: Operation,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error at an operation boundary. Already-wrapped errors are kept as-is.
    pub fn in_operation(self, operation: Operation) -> Self {
        match self {
            Error::OperationFailed { .. } => self,
            other => Error::OperationFailed {
                operation,
                source: Box::new(other),
            },
        }
    }

    /// The innermost error, skipping operation wrappers
    pub fn root(&self) -> &Error {
        match self {
            Error::OperationFailed { source, .. } => source.root(),
            other => other,
        }
    }

    /// Well-typed input whose content is semantically invalid (e.g. an unparseable date)
    pub fn is_content_error(&self) -> bool {
        matches!(
            self.root(),
            Error::InvalidBillingDate { .. } | Error::InvalidData(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
