use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can abort a single polling cycle.
///
/// None of these are fatal; the poller reports them and tries again next period.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("Could not reach the homework API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Homework API responded with status {status} instead of 200: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Homework API returned a body that is not JSON: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("API response is not a JSON object (got {0})")]
    NotAnObject(&'static str),

    #[error("API response is missing the key {0:?}")]
    MissingKey(&'static str),

    #[error("Value of \"homeworks\" is not a list (got {0})")]
    HomeworksNotAList(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Latest homework has no name")]
    MissingName,

    #[error("Latest homework has no status")]
    MissingStatus,

    #[error("Latest homework has an unknown review verdict {0:?}")]
    UnknownVerdict(String),
}
