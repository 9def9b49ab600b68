//! In-memory transports for tests.
//!
//! [`ScriptedTransport`] replays queued bodies in order. [`InMemoryRecords`]
//! serves pages of a fixed record set, slicing by the `{count}` and
//! `{offset}` segments of record URLs.

use crate::error::{ClientError, ClientResult};
use crate::transport::{ServiceRequest, Transport};
use async_trait::async_trait;
use serde_json::{Value as JsonValue, json};
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// Build a records page body as the service returns it.
pub fn records_page(total: usize, records: &[JsonValue]) -> String {
	json!({
		"status": 200,
		"records": {
			"total": total,
			"size": records.len(),
			"records": records,
		}
	})
	.to_string()
}

/// Transport answering from a queue of scripted results.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
	responses: Mutex<VecDeque<ClientResult<String>>>,
	requests: Mutex<Vec<ServiceRequest>>,
}

impl ScriptedTransport {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queue a successful body
	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.responses.get_mut().push_back(Ok(body.into()));
		self
	}

	/// Queue a JSON body
	pub fn with_json(self, body: JsonValue) -> Self {
		self.with_body(body.to_string())
	}

	/// Queue a failure
	pub fn with_error(mut self, error: ClientError) -> Self {
		self.responses.get_mut().push_back(Err(error));
		self
	}

	/// Requests received so far, oldest first.
	pub async fn requests(&self) -> Vec<ServiceRequest> {
		self.requests.lock().await.clone()
	}
}

#[async_trait]
impl Transport for ScriptedTransport {
	async fn send(&self, request: ServiceRequest) -> ClientResult<String> {
		self.requests.lock().await.push(request);
		self.responses
			.lock()
			.await
			.pop_front()
			.unwrap_or_else(|| Err(ClientError::TransportError("no scripted response left".into())))
	}
}

/// Transport serving pages of a fixed record set.
#[derive(Debug, Default)]
pub struct InMemoryRecords {
	records: Vec<JsonValue>,
	requests: Mutex<Vec<ServiceRequest>>,
}

impl InMemoryRecords {
	pub fn new(records: Vec<JsonValue>) -> Self {
		Self {
			records,
			requests: Mutex::new(Vec::new()),
		}
	}

	/// Requests received so far, oldest first.
	pub async fn requests(&self) -> Vec<ServiceRequest> {
		self.requests.lock().await.clone()
	}

	fn page_bounds(url: &str) -> ClientResult<(usize, usize)> {
		let mut segments = url.trim_end_matches('/').rsplit('/');
		let offset = segments.next().and_then(|s| s.parse().ok());
		let count = segments.next().and_then(|s| s.parse().ok());
		match (count, offset) {
			(Some(count), Some(offset)) => Ok((count, offset)),
			_ => Err(ClientError::TransportError(format!("not a records url: {}", url))),
		}
	}
}

#[async_trait]
impl Transport for InMemoryRecords {
	async fn send(&self, request: ServiceRequest) -> ClientResult<String> {
		let (count, offset) = Self::page_bounds(&request.url)?;
		self.requests.lock().await.push(request);

		let page: Vec<JsonValue> = self.records.iter().skip(offset).take(count).cloned().collect();
		Ok(records_page(self.records.len(), &page))
	}
}
