use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic};

/// Error kinds for docspace operations
///
/// Each kind names one category of failure so callers can match on it instead
/// of parsing messages.
///
/// # Examples
///
/// ```rust,ignore
/// use docspace::errors::{DocspaceError, DocspaceResult, ErrorKind};
///
/// fn example() -> DocspaceResult<()> {
///     Err(DocspaceError::new("No namespace selected", ErrorKind::NoNamespaceSelected))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    // Namespace Errors
    /// The namespace name is not a non-empty run of ASCII letters and digits
    InvalidNamespace,
    /// Neither the document nor the repository carries a namespace
    NoNamespaceSelected,

    // Repository Errors
    /// The repository does not implement the requested method
    UnsupportedOperation,

    // Identity Errors
    /// The requested record was not found
    NotFound,
    /// The document has no storage identity
    NotIdentifiable,

    // Document Errors
    /// Invalid field name
    InvalidFieldName,

    // Engine Errors
    /// Error during filter evaluation or construction
    FilterError,
    /// The operation is not valid in the current context
    InvalidOperation,
    /// Error from the persistence engine
    BackendError,

    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidNamespace => write!(f, "Invalid namespace"),
            ErrorKind::NoNamespaceSelected => write!(f, "No namespace selected"),
            ErrorKind::UnsupportedOperation => write!(f, "Unsupported operation"),
            ErrorKind::NotFound => write!(f, "Not found"),
            ErrorKind::NotIdentifiable => write!(f, "Not identifiable"),
            ErrorKind::InvalidFieldName => write!(f, "Invalid field name"),
            ErrorKind::FilterError => write!(f, "Filter error"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::BackendError => write!(f, "Backend error"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom docspace error type.
///
/// `DocspaceError` carries the error message, its kind and an optional cause.
/// A backtrace is captured at construction and printed by `Debug` when there
/// is no cause to chain to.
///
/// # Examples
///
/// ```rust,ignore
/// use docspace::errors::{DocspaceError, ErrorKind};
///
/// let err = DocspaceError::new("Record not found", ErrorKind::NotFound);
///
/// let cause = DocspaceError::new("Engine unavailable", ErrorKind::BackendError);
/// let err = DocspaceError::new_with_cause("Update failed", ErrorKind::BackendError, cause);
/// ```
#[derive(Clone)]
pub struct DocspaceError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<DocspaceError>>,
    backtrace: Atomic<Backtrace>,
}

impl DocspaceError {
    /// Creates a new `DocspaceError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        DocspaceError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `DocspaceError` that wraps the error which caused it.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: DocspaceError) -> Self {
        DocspaceError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&DocspaceError> {
        self.cause.as_deref()
    }
}

impl Display for DocspaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for DocspaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for DocspaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for docspace operations.
pub type DocspaceResult<T> = Result<T, DocspaceError>;

impl From<String> for DocspaceError {
    fn from(msg: String) -> Self {
        DocspaceError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for DocspaceError {
    fn from(msg: &str) -> Self {
        DocspaceError::new(msg, ErrorKind::InternalError)
    }
}
