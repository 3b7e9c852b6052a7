use thiserror::Error;

/// Errors raised by the dashboard aggregates.
///
/// Every variant is a user-visible, non-blocking rejection: the operation that
/// produced it leaves its aggregate unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("Please fill in all required fields (missing {0})")]
    MissingField(&'static str),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("A refresh is already in progress")]
    RefreshInProgress,

    #[error("Export failed: {0}")]
    Export(String),
}

impl DashboardError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        DashboardError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
