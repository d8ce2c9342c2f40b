//! API Errors
//!
//! Failure taxonomy shared by the list view, detail view and add form.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Http failure during request: {0}")]
    Transport(String),
    /// The server answered with a non-success status
    #[error("Http failure response: {status} {message}")]
    Status { status: u16, message: String },
    /// A success response whose body could not be read
    #[error("Could not read server response: {0}")]
    Decode(String),
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status, 0 when no response was received
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Status { status, .. } => *status,
            _ => 0,
        }
    }

    /// True when the client itself produced the error, not the server or network
    pub fn is_client_side(&self) -> bool {
        matches!(self, ApiError::Decode(_) | ApiError::InvalidUrl(_))
    }

    /// Message shown in the list view when a remote read fails
    pub fn list_message(&self) -> String {
        if self.is_client_side() {
            format!("Problem in the client – Error: {self}")
        } else {
            format!(
                "Problem contacting the server – Error Code: {}\nMessage: {self}",
                self.status()
            )
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidUrl(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status { status: status.as_u16(), message: err.to_string() }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// How a failed create should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddFailure {
    /// 400: the server rejected the draft
    BadRequest,
    /// 500: the server could not process the request
    ServerFailure,
    /// Anything else, including transport failures
    Unexpected,
}

impl AddFailure {
    pub fn classify(err: &ApiError) -> Self {
        match err.status() {
            400 => AddFailure::BadRequest,
            500 => AddFailure::ServerFailure,
            _ => AddFailure::Unexpected,
        }
    }

    pub fn message(self, err: &ApiError) -> String {
        let status = err.status();
        match self {
            AddFailure::BadRequest => format!(
                "Tried to add an illegal new todo – Error Code: {status}\nMessage: {err}"
            ),
            AddFailure::ServerFailure => format!(
                "The server failed to process your request to add a new todo. Is the server up? – Error Code: {status}\nMessage: {err}"
            ),
            AddFailure::Unexpected => format!(
                "An unexpected error occurred – Error Code: {status}\nMessage: {err}"
            ),
        }
    }
}
