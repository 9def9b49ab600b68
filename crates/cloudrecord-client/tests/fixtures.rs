//! Shared fixtures for client integration tests

// Each test binary compiles this file separately.
#![allow(dead_code)]

use cloudrecord_client::testing::{InMemoryRecords, ScriptedTransport};
use cloudrecord_client::{ClientSettings, Credentials, RecordProvider};
use rstest::fixture;
use serde_json::{Value as JsonValue, json};
use std::sync::Arc;

pub const BASE_URL: &str = "http://records.test";

pub fn credentials() -> Credentials {
	Credentials::new("csk-test", "aci-test")
}

pub fn settings() -> ClientSettings {
	ClientSettings::default().with_url(BASE_URL)
}

/// Two users, in insertion order.
#[fixture]
pub fn users() -> Vec<JsonValue> {
	vec![
		json!({"id": 1, "name": "Eleazar", "email": "eleazar@example.com", "langs": {"value": ["es", "en"]}}),
		json!({"id": 2, "name": "Ana", "email": "ana@example.com", "langs": {"value": ["en"]}}),
	]
}

pub fn provider_with(transport: Arc<dyn cloudrecord_client::Transport>) -> RecordProvider {
	RecordProvider::new(credentials(), settings(), transport)
}

pub fn records_provider(records: Vec<JsonValue>) -> (RecordProvider, Arc<InMemoryRecords>) {
	let transport = Arc::new(InMemoryRecords::new(records));
	(provider_with(transport.clone()), transport)
}

pub fn scripted_provider(transport: ScriptedTransport) -> (RecordProvider, Arc<ScriptedTransport>) {
	let transport = Arc::new(transport);
	(provider_with(transport.clone()), transport)
}
