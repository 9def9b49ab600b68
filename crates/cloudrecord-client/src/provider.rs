//! Entry point bound to one set of credentials.

use crate::error::{ClientError, ClientResult};
use crate::model::{RecordField, RecordModel, integer};
use crate::query::RecordQuery;
use crate::response::{Record, normalize_record};
use crate::settings::{ClientSettings, Credentials, Endpoint};
use crate::transport::{HttpTransport, ServiceRequest, Transport, check_envelope};
use cloudrecord_query::ModelId;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

/// Creates queries and loads metadata for one account.
///
/// The provider is cheap to clone and can be shared between tasks; every
/// query it creates shares its transport.
#[derive(Clone)]
pub struct RecordProvider {
	credentials: Credentials,
	settings: Arc<ClientSettings>,
	transport: Arc<dyn Transport>,
}

impl fmt::Debug for RecordProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RecordProvider")
			.field("credentials", &self.credentials)
			.field("settings", &self.settings)
			.finish_non_exhaustive()
	}
}

impl RecordProvider {
	pub fn new(
		credentials: Credentials,
		settings: ClientSettings,
		transport: Arc<dyn Transport>,
	) -> Self {
		Self {
			credentials,
			settings: Arc::new(settings),
			transport,
		}
	}

	/// Provider talking to the service over HTTP.
	pub fn http(credentials: Credentials, settings: ClientSettings) -> ClientResult<Self> {
		let transport = HttpTransport::new(&settings)?;
		Ok(Self::new(credentials, settings, Arc::new(transport)))
	}

	pub fn settings(&self) -> &ClientSettings {
		&self.settings
	}

	/// Start a new query against `model_id`.
	pub fn create_query(&self, model_id: impl Into<ModelId>) -> RecordQuery {
		RecordQuery::new(
			model_id,
			self.credentials.clone(),
			Arc::clone(&self.settings),
			Arc::clone(&self.transport),
		)
	}

	/// Load one record by record id and model id.
	pub async fn load_record(
		&self,
		record_id: i64,
		model_id: impl Into<ModelId>,
	) -> ClientResult<Record> {
		let url = self.settings.endpoint_url(
			Endpoint::GetRecordInfo,
			&self.credentials,
			&[
				("mid", model_id.into().to_string()),
				("rid", record_id.to_string()),
			],
		);

		let json = self.get_json(url).await?;
		let record = json
			.get("record")
			.and_then(JsonValue::as_object)
			.ok_or_else(|| ClientError::MissingField("record".to_string()))?;

		Ok(normalize_record(record))
	}

	/// Load name and description of a model.
	pub async fn load_model(&self, model_id: impl Into<ModelId>) -> ClientResult<RecordModel> {
		let model_id = model_id.into();
		let url = self.settings.endpoint_url(
			Endpoint::GetModelInfo,
			&self.credentials,
			&[("mid", model_id.to_string())],
		);

		let json = self.get_json(url).await?;
		check_envelope(&json)?;
		Ok(RecordModel::from_json(model_id, &json))
	}

	/// Load every model visible to these credentials.
	pub async fn load_models(&self) -> ClientResult<Vec<RecordModel>> {
		let url = self
			.settings
			.endpoint_url(Endpoint::GetModels, &self.credentials, &[]);

		let json = self.get_json(url).await?;
		check_envelope(&json)?;

		let models = json
			.get("models")
			.and_then(JsonValue::as_array)
			.ok_or_else(|| ClientError::MissingField("models".to_string()))?;

		models
			.iter()
			.map(|item| {
				let id = integer(item, "id").ok_or_else(|| ClientError::MissingField("id".to_string()))?;
				Ok(RecordModel::from_json(ModelId(id), item))
			})
			.collect()
	}

	/// Load the fields of a model.
	pub async fn load_fields(&self, model_id: impl Into<ModelId>) -> ClientResult<Vec<RecordField>> {
		let model_id = model_id.into();
		let url = self.settings.endpoint_url(
			Endpoint::GetFields,
			&self.credentials,
			&[("mid", model_id.to_string())],
		);

		let json = self.get_json(url).await?;
		check_envelope(&json)?;

		let fields = json
			.get("fields")
			.and_then(JsonValue::as_object)
			.ok_or_else(|| ClientError::MissingField("fields".to_string()))?;

		Ok(fields
			.values()
			.map(|field| RecordField::from_json(model_id, field))
			.collect())
	}

	async fn get_json(&self, url: String) -> ClientResult<JsonValue> {
		let body = self.transport.send(ServiceRequest::get(url)).await?;
		Ok(serde_json::from_str(&body)?)
	}
}
