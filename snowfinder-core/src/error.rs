/// Error types surfaced by the table controllers
use thiserror::Error;

/// Every failure a table controller can report to the user.
///
/// The `Display` text is the message shown in the page's single error banner
/// (or printed by the CLI), so it is written for people rather than logs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// Input was rejected before any network call was made
    #[error("{0}")]
    Validation(String),

    /// The service answered with a non-2xx status; the body is not parsed
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The request never produced a response (network failure, CORS, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// A 2xx response whose body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// A successful call that produced nothing to show
    #[error("{0}")]
    EmptyResult(String),

    /// The resort selector could not be populated; logged, never shown
    #[error("Failed to load resorts list: {0}")]
    ResortList(String),
}

impl ControllerError {
    /// Validation failure for a search submitted without any picked date.
    pub fn no_dates() -> Self {
        ControllerError::Validation("Please select at least one date".to_string())
    }

    /// Empty ranking response.
    pub fn no_results() -> Self {
        ControllerError::EmptyResult("No results found for the selected criteria.".to_string())
    }

    /// Peak query where every resort in the payload had an empty peak list.
    pub fn no_peaks() -> Self {
        ControllerError::EmptyResult("No peak snowfall periods found.".to_string())
    }

    /// True for errors that only go to the log and never reach the error banner.
    pub fn is_log_only(&self) -> bool {
        matches!(self, ControllerError::ResortList(_))
    }
}

impl From<serde_json::Error> for ControllerError {
    fn from(e: serde_json::Error) -> Self {
        ControllerError::Decode(e.to_string())
    }
}

/// Type alias for Results using ControllerError
pub type Result<T> = std::result::Result<T, ControllerError>;
