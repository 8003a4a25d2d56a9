/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Convenience result type used across the crate
pub type ModelResult<T> = Result<T, AppError>;

/// Failure reported by a [`Transport`](crate::transport::Transport)
///
/// The model layer treats every variant the same way: the execution failed
/// and the output fields keep their previous values.
#[derive(Debug)]
pub enum TransportError {
    /// Network or protocol failure raised by the HTTP client
    Http(reqwest::Error),
    /// Non-success HTTP status with the response body
    Status {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// The server answered with an error payload
    Server {
        /// Error code reported in the `status` field
        status: String,
        /// Human readable message reported by the server
        message: String,
    },
    /// Too many requests and the retry budget is exhausted
    RateLimitExceeded,
    /// The response body was not a usable JSON document
    InvalidPayload(String),
    /// Any other failure, used by custom transports
    Other(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Http(e) => write!(f, "http error: {e}"),
            TransportError::Status { status, body } => {
                write!(f, "unexpected status {status}: {body}")
            }
            TransportError::Server { status, message } => {
                write!(f, "server error [{status}]: {message}")
            }
            TransportError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            TransportError::InvalidPayload(msg) => write!(f, "invalid payload: {msg}"),
            TransportError::Other(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Http(err)
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The field is not declared, or not writable, on the model
    UnknownField {
        /// Model the lookup was made against
        model: &'static str,
        /// Requested field name
        field: String,
    },
    /// A field name was registered twice for the same model
    DuplicateField {
        /// Model being declared
        model: &'static str,
        /// Offending field name
        field: String,
    },
    /// A value does not conform to the declared field type
    TypeMismatch {
        /// Path of the value, e.g. `a_session.C1[0]`
        field: String,
        /// Declared type
        expected: String,
        /// Kind of the value that was supplied
        found: String,
    },
    /// A non-nullable input without default was never set
    MissingRequiredField {
        /// Field name
        field: String,
    },
    /// A non-nullable output is absent from a successful response
    MissingResponseField {
        /// Field name
        field: String,
    },
    /// An output was read before any successful execution
    FieldNotYetAvailable {
        /// Field name
        field: String,
    },
    /// The transport failed
    Transport(TransportError),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnknownField { model, field } => {
                write!(f, "unknown field: {model}.{field}")
            }
            AppError::DuplicateField { model, field } => {
                write!(f, "duplicate field: {model}.{field}")
            }
            AppError::TypeMismatch {
                field,
                expected,
                found,
            } => write!(f, "type mismatch on {field}: expected {expected}, found {found}"),
            AppError::MissingRequiredField { field } => {
                write!(f, "missing required field: {field}")
            }
            AppError::MissingResponseField { field } => {
                write!(f, "missing response field: {field}")
            }
            AppError::FieldNotYetAvailable { field } => {
                write!(f, "field not yet available: {field}")
            }
            AppError::Transport(e) => write!(f, "{e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Transport(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransportError> for AppError {
    fn from(err: TransportError) -> Self {
        AppError::Transport(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(TransportError::Http(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl AppError {
    /// Returns `true` for errors caused by the caller misusing a model
    ///
    /// These should be fixed in code rather than retried.
    #[must_use]
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            AppError::UnknownField { .. }
                | AppError::DuplicateField { .. }
                | AppError::MissingRequiredField { .. }
                | AppError::FieldNotYetAvailable { .. }
        )
    }
}
