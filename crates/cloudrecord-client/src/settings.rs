//! Client settings, credentials and endpoint templates.
//!
//! Settings come from three layers applied in order: built-in defaults, an
//! optional TOML document, and `CLOUDRECORD_*` environment variables.
//!
//! ```toml
//! url = "https://records.example.com"
//! version = "1.0.4"
//! connect_timeout_secs = 5
//!
//! [endpoints]
//! get_models = "/api_models/{csk}/{aci}/get_models"
//! ```

use crate::error::{ClientError, ClientResult};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Prefix of the environment variables read by [`ClientSettings::with_env_overrides`].
pub const ENV_PREFIX: &str = "CLOUDRECORD_";

const DEFAULT_URL: &str = "http://api.dynamicloud.org";
const DEFAULT_VERSION: &str = "1.0.4";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Access keys issued by the service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	/// Client secret key
	pub csk: String,
	/// Access client identifier
	pub aci: String,
}

impl Credentials {
	pub fn new(csk: impl Into<String>, aci: impl Into<String>) -> Self {
		Self {
			csk: csk.into(),
			aci: aci.into(),
		}
	}
}

impl std::fmt::Debug for Credentials {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Credentials")
			.field("csk", &"***")
			.field("aci", &self.aci)
			.finish()
	}
}

/// Service operations reachable from this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
	GetRecords,
	GetRecordsByProjection,
	GetRecordInfo,
	GetModelInfo,
	GetModels,
	GetFields,
}

/// Path templates for every [`Endpoint`].
///
/// Placeholders: `{csk}`, `{aci}`, `{mid}`, `{rid}`, `{count}`, `{offset}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
	pub get_records: String,
	pub get_records_by_projection: String,
	pub get_record_info: String,
	pub get_model_info: String,
	pub get_models: String,
	pub get_fields: String,
}

impl Default for Endpoints {
	fn default() -> Self {
		Self {
			get_records: "/api_models/{csk}/{aci}/get_records/{mid}/{count}/{offset}/".to_string(),
			get_records_by_projection:
				"/api_models/{csk}/{aci}/get_records_by_projection/{mid}/{count}/{offset}/"
					.to_string(),
			get_record_info: "/api_records/{csk}/{aci}/get_record_info/{mid}/{rid}".to_string(),
			get_model_info: "/api_models/{csk}/{aci}/get_model_info/{mid}".to_string(),
			get_models: "/api_models/{csk}/{aci}/get_models".to_string(),
			get_fields: "/api_models/{csk}/{aci}/get_fields/{mid}".to_string(),
		}
	}
}

impl Endpoints {
	/// Returns the path template for an endpoint.
	pub fn template(&self, endpoint: Endpoint) -> &str {
		match endpoint {
			Endpoint::GetRecords => &self.get_records,
			Endpoint::GetRecordsByProjection => &self.get_records_by_projection,
			Endpoint::GetRecordInfo => &self.get_record_info,
			Endpoint::GetModelInfo => &self.get_model_info,
			Endpoint::GetModels => &self.get_models,
			Endpoint::GetFields => &self.get_fields,
		}
	}
}

/// Connection settings for the record service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
	/// Base URL of the service
	pub url: String,
	/// API version sent in the `APIVersion` header
	pub version: String,
	/// Connect timeout of the HTTP client, in seconds
	pub connect_timeout_secs: u64,
	pub endpoints: Endpoints,
}

impl Default for ClientSettings {
	fn default() -> Self {
		Self {
			url: DEFAULT_URL.to_string(),
			version: DEFAULT_VERSION.to_string(),
			connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
			endpoints: Endpoints::default(),
		}
	}
}

impl ClientSettings {
	/// Parse settings from a TOML document. Missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> ClientResult<Self> {
		toml::from_str(source).map_err(|e| ClientError::Settings(e.to_string()))
	}

	/// Set the base URL
	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = url.into();
		self
	}
	/// Set the API version
	pub fn with_version(mut self, version: impl Into<String>) -> Self {
		self.version = version.into();
		self
	}
	/// Set the connect timeout
	pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
		self.connect_timeout_secs = timeout.as_secs();
		self
	}

	/// Apply `CLOUDRECORD_URL`, `CLOUDRECORD_VERSION` and
	/// `CLOUDRECORD_CONNECT_TIMEOUT_SECS` from the process environment.
	pub fn with_env_overrides(self) -> ClientResult<Self> {
		self.with_overrides_from(|key| env::var(key).ok())
	}

	/// Apply overrides from an arbitrary lookup keyed by full variable name.
	pub fn with_overrides_from<F>(mut self, lookup: F) -> ClientResult<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let key = |name: &str| format!("{}{}", ENV_PREFIX, name);

		if let Some(url) = lookup(&key("URL")) {
			self.url = url;
		}
		if let Some(version) = lookup(&key("VERSION")) {
			self.version = version;
		}
		if let Some(raw) = lookup(&key("CONNECT_TIMEOUT_SECS")) {
			self.connect_timeout_secs = raw.trim().parse().map_err(|e| {
				ClientError::Settings(format!(
					"{}CONNECT_TIMEOUT_SECS must be a whole number of seconds: {}",
					ENV_PREFIX, e
				))
			})?;
		}

		Ok(self)
	}

	pub fn connect_timeout(&self) -> Duration {
		Duration::from_secs(self.connect_timeout_secs)
	}

	/// Build the absolute URL of an endpoint.
	///
	/// `{csk}` and `{aci}` are percent-encoded; every `(name, value)` pair in
	/// `vars` replaces `{name}` verbatim.
	pub fn endpoint_url(
		&self,
		endpoint: Endpoint,
		credentials: &Credentials,
		vars: &[(&str, String)],
	) -> String {
		let mut path = self
			.endpoints
			.template(endpoint)
			.replace("{csk}", &urlencoding::encode(&credentials.csk))
			.replace("{aci}", &urlencoding::encode(&credentials.aci));

		for (name, value) in vars {
			path = path.replace(&format!("{{{}}}", name), value);
		}

		let url = format!("{}{}", self.url.trim_end_matches('/'), path);
		tracing::debug!(endpoint = ?endpoint, url = %url, "resolved endpoint");
		url
	}
}
