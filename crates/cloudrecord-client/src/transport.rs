//! Transport abstraction and the default HTTP implementation.

use crate::error::{ClientError, ClientResult};
use crate::settings::ClientSettings;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value as JsonValue;

const USER_AGENT: &str = "cloudrecord client";
const LANGUAGE: &str = "Rust";
const FATAL_ERROR: &str = "Fatal error executing request";

/// HTTP method of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	Get,
	Post,
}

/// A request to the record service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
	pub url: String,
	pub method: HttpMethod,
	/// Form parameters, sent in the body for POST and as query string for GET
	pub params: Vec<(String, String)>,
}

impl ServiceRequest {
	pub fn get(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			method: HttpMethod::Get,
			params: Vec::new(),
		}
	}

	pub fn post(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			method: HttpMethod::Post,
			params: Vec::new(),
		}
	}

	/// Append a form parameter
	pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.push((name.into(), value.into()));
		self
	}

	/// Returns the value of the first parameter called `name`.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.params
			.iter()
			.find(|(k, _)| k == name)
			.map(|(_, v)| v.as_str())
	}
}

/// Sends a request and returns the raw response body.
///
/// Implementations must return [`ClientError::TransportError`] for
/// non-success statuses.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn send(&self, request: ServiceRequest) -> ClientResult<String>;
}

/// [`Transport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: reqwest::Client,
	version: String,
}

impl HttpTransport {
	pub fn new(settings: &ClientSettings) -> ClientResult<Self> {
		let client = reqwest::Client::builder()
			.connect_timeout(settings.connect_timeout())
			.user_agent(USER_AGENT)
			.build()?;

		Ok(Self {
			client,
			version: settings.version.clone(),
		})
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn send(&self, request: ServiceRequest) -> ClientResult<String> {
		tracing::debug!(method = ?request.method, url = %request.url, "sending service request");

		let builder = match request.method {
			HttpMethod::Get => self.client.get(&request.url).query(&request.params),
			HttpMethod::Post => self.client.post(&request.url).form(&request.params),
		};

		let response = builder
			.header("APIVersion", &self.version)
			.header("Language", LANGUAGE)
			.send()
			.await?;

		let status = response.status();
		let body = response.text().await?;
		handle_response(status, body)
	}
}

/// Turn an HTTP status and body into the body or a transport error.
///
/// Only `200 OK` is a success. Otherwise the `message` key of a JSON body
/// becomes the error text.
pub fn handle_response(status: StatusCode, body: String) -> ClientResult<String> {
	if status == StatusCode::OK {
		return Ok(body);
	}

	tracing::warn!(status = %status, "service request failed");
	Err(ClientError::TransportError(error_message(&body)))
}

/// Check the `status` key of a decoded service envelope.
///
/// Missing or non-200 statuses become [`ClientError::TransportError`]
/// carrying the envelope `message`.
pub fn check_envelope(json: &JsonValue) -> ClientResult<()> {
	if json.get("status").and_then(JsonValue::as_i64) == Some(200) {
		return Ok(());
	}

	let message = json
		.get("message")
		.and_then(JsonValue::as_str)
		.unwrap_or(FATAL_ERROR);
	tracing::warn!(status = ?json.get("status"), "service envelope reported an error: {}", message);
	Err(ClientError::TransportError(message.to_string()))
}

fn error_message(body: &str) -> String {
	serde_json::from_str::<JsonValue>(body)
		.ok()
		.and_then(|json| json.get("message").and_then(JsonValue::as_str).map(str::to_string))
		.unwrap_or_else(|| FATAL_ERROR.to_string())
}
