//! Errors raised while assembling a condition tree.

use thiserror::Error;

/// Errors produced by the condition compiler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
	/// A composite node was built from an operand that is not a condition.
	#[error("{0}")]
	InvalidArgument(String),
}

pub type QueryResult<T> = Result<T, QueryError>;
