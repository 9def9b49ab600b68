//! Error types for the record client.

use cloudrecord_query::QueryError;
use thiserror::Error;

/// Errors raised while building, sending or decoding a request.
#[derive(Debug, Error)]
pub enum ClientError {
	/// A caller supplied an argument the service cannot accept
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// An operation was called out of order
	#[error("{0}")]
	IllegalState(String),

	/// The service answered with a non-success status
	#[error("{0}")]
	TransportError(String),

	/// A required key is absent from the service response
	#[error("Missing field in response: {0}")]
	MissingField(String),

	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Settings error: {0}")]
	Settings(String),
}

impl ClientError {
	/// Returns true if the error originated on the wire or at the service
	pub fn is_transport(&self) -> bool {
		matches!(self, ClientError::TransportError(_) | ClientError::Http(_))
	}

	/// Returns true if the error is a timeout error
	pub fn is_timeout(&self) -> bool {
		match self {
			ClientError::Http(e) => e.is_timeout(),
			_ => false,
		}
	}
}

impl From<QueryError> for ClientError {
	fn from(err: QueryError) -> Self {
		match err {
			QueryError::InvalidArgument(msg) => ClientError::InvalidArgument(msg),
		}
	}
}

pub type ClientResult<T> = Result<T, ClientError>;
