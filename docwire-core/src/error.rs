//! Error types and result types for the docwire core.
//!
//! Every failure surfaced by this crate is a deterministic input or usage error, so
//! nothing here is retryable. Use [`DocwireResult<T>`] as the return type for fallible
//! operations.

use bson::error::Error as BsonError;
use thiserror::Error;

/// Represents all possible errors raised while resolving connection strings or building
/// update modifier documents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocwireError {
    /// The connection string violates the connection grammar or carries an invalid option.
    #[error("Malformed connection string: {0}")]
    MalformedConnectionString(String),
    /// A field selector was not a direct single-member access on the entity.
    #[error("Unsupported expression: {0}")]
    UnsupportedExpression(String),
    /// Two incompatible update operators target the same field in one update.
    #[error("Conflicting modifier on field {field}: {existing} already applied, cannot apply {attempted}")]
    ConflictingModifier {
        /// The field both operators target.
        field: String,
        /// The operator token already registered for the field.
        existing: &'static str,
        /// The operator token that was rejected.
        attempted: &'static str,
    },
    /// An operation was added to a builder that has already produced its document.
    #[error("Modifier builder has already been built")]
    BuilderFinalized,
    /// A typed operand could not be serialized to BSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The document handed to the executor has an invalid structure.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// Error during client initialization in a transport adapter.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// An error occurred in the underlying transport backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for docwire operations.
pub type DocwireResult<T> = Result<T, DocwireError>;

impl DocwireError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        DocwireError::MalformedConnectionString(message.into())
    }
}

impl From<BsonError> for DocwireError {
    fn from(err: BsonError) -> Self {
        DocwireError::Serialization(err.to_string())
    }
}
