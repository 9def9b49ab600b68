//! Response normalization.
//!
//! The service wraps field values in several shapes. Records are flattened
//! into an ordered map of [`RecordValue`]s:
//!
//! | Wire value | Result |
//! |------------|--------|
//! | string, number, bool, null | same scalar |
//! | array | [`RecordValue::List`] of the items as text |
//! | object whose first value is an array | [`RecordValue::List`] of that array |
//! | any other object | [`RecordValue::Json`] (bulk results) |

use crate::error::{ClientError, ClientResult};
use indexmap::IndexMap;
use serde_json::{Map, Number, Value as JsonValue};

/// A normalized field value.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
	Text(String),
	List(Vec<String>),
	Number(Number),
	Bool(bool),
	Null,
	/// Structured value kept as received
	Json(JsonValue),
}

impl RecordValue {
	/// Returns the text of a [`RecordValue::Text`].
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the items of a [`RecordValue::List`].
	pub fn as_list(&self) -> Option<&[String]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Number(n) => n.as_i64(),
			_ => None,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl From<JsonValue> for RecordValue {
	fn from(value: JsonValue) -> Self {
		match value {
			JsonValue::String(s) => Self::Text(s),
			JsonValue::Number(n) => Self::Number(n),
			JsonValue::Bool(b) => Self::Bool(b),
			JsonValue::Null => Self::Null,
			JsonValue::Array(items) => Self::List(stringify_items(&items)),
			object @ JsonValue::Object(_) => Self::Json(object),
		}
	}
}

/// A record as an ordered field map.
pub type Record = IndexMap<String, RecordValue>;

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordResults {
	/// Number of records matching the query
	pub total_records: i64,
	/// Number of records in this page
	pub fast_returned_size: i64,
	pub records: Vec<Record>,
}

impl RecordResults {
	/// Returns true when this page holds no records.
	pub fn is_exhausted(&self) -> bool {
		self.fast_returned_size == 0
	}
}

fn stringify_items(items: &[JsonValue]) -> Vec<String> {
	items
		.iter()
		.map(|item| match item {
			JsonValue::String(s) => s.clone(),
			other => other.to_string(),
		})
		.collect()
}

fn required<'a>(json: &'a JsonValue, key: &str) -> ClientResult<&'a JsonValue> {
	json.get(key)
		.ok_or_else(|| ClientError::MissingField(key.to_string()))
}

fn required_i64(json: &JsonValue, key: &str) -> ClientResult<i64> {
	required(json, key)?
		.as_i64()
		.ok_or_else(|| ClientError::MissingField(key.to_string()))
}

/// Decode a records response body.
///
/// Expects `{"records": {"total": n, "size": m, "records": [...]}}`.
pub fn build_record_results(body: &str) -> ClientResult<RecordResults> {
	let json: JsonValue = serde_json::from_str(body)?;
	let data = required(&json, "records")?;

	let total_records = required_i64(data, "total")?;
	let fast_returned_size = required_i64(data, "size")?;
	let records = required(data, "records")?
		.as_array()
		.ok_or_else(|| ClientError::MissingField("records".to_string()))?
		.iter()
		.filter_map(|item| match item.as_object() {
			Some(fields) => Some(build_record(fields)),
			None => {
				tracing::warn!(value = %item, "skipping record that is not an object");
				None
			}
		})
		.collect();

	tracing::trace!(total_records, fast_returned_size, "decoded record page");

	Ok(RecordResults {
		total_records,
		fast_returned_size,
		records,
	})
}

/// Normalize one record of a records page.
pub fn build_record(fields: &Map<String, JsonValue>) -> Record {
	let mut record = Record::with_capacity(fields.len());

	for (key, value) in fields {
		let normalized = match value {
			JsonValue::Object(inner) => match inner.values().next() {
				Some(JsonValue::Array(items)) => RecordValue::List(stringify_items(items)),
				Some(_) => RecordValue::Json(value.clone()),
				None => {
					tracing::warn!(field = %key, "dropping empty object field");
					continue;
				}
			},
			other => RecordValue::from(other.clone()),
		};
		record.insert(key.clone(), normalized);
	}

	record
}

/// Normalize a single record as returned by the record info endpoint.
///
/// Object values keep only the first key's value, which must be a list or
/// text.
pub fn normalize_record(fields: &Map<String, JsonValue>) -> Record {
	let mut record = Record::with_capacity(fields.len());

	for (key, value) in fields {
		let normalized = match value {
			JsonValue::Object(inner) => match inner.values().next() {
				Some(JsonValue::Array(items)) => RecordValue::List(stringify_items(items)),
				Some(JsonValue::String(text)) => RecordValue::Text(text.clone()),
				_ => {
					tracing::warn!(field = %key, "dropping field that cannot be normalized");
					continue;
				}
			},
			other => RecordValue::from(other.clone()),
		};
		record.insert(key.clone(), normalized);
	}

	record
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde_json::json;

	fn object(value: JsonValue) -> Map<String, JsonValue> {
		match value {
			JsonValue::Object(map) => map,
			_ => panic!("expected an object"),
		}
	}

	#[rstest]
	fn test_build_record_results() {
		let body = json!({
			"status": 200,
			"records": {
				"total": 2,
				"size": 1,
				"records": [{"name": "Eleazar", "age": 33, "langs": {"value": ["en", 3]}}]
			}
		})
		.to_string();

		let results = build_record_results(&body).unwrap();

		assert_eq!(results.total_records, 2);
		assert_eq!(results.fast_returned_size, 1);
		assert!(!results.is_exhausted());

		let record = &results.records[0];
		assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "age", "langs"]);
		assert_eq!(record["name"].as_text(), Some("Eleazar"));
		assert_eq!(record["age"].as_i64(), Some(33));
		assert_eq!(record["langs"].as_list(), Some(&["en".to_string(), "3".to_string()][..]));
	}

	#[rstest]
	fn test_empty_page_is_exhausted() {
		let body = r#"{"records": {"total": 2, "size": 0, "records": []}}"#;
		let results = build_record_results(body).unwrap();
		assert!(results.is_exhausted());
		assert!(results.records.is_empty());
	}

	#[rstest]
	#[case::no_records(r#"{"status": 200}"#, "records")]
	#[case::no_total(r#"{"records": {"size": 0, "records": []}}"#, "total")]
	#[case::no_size(r#"{"records": {"total": 0, "records": []}}"#, "size")]
	#[case::no_list(r#"{"records": {"total": 0, "size": 0}}"#, "records")]
	fn test_build_record_results_missing_field(#[case] body: &str, #[case] field: &str) {
		let err = build_record_results(body).unwrap_err();
		assert!(matches!(err, ClientError::MissingField(ref f) if f == field));
	}

	#[rstest]
	fn test_build_record_results_rejects_bad_json() {
		let err = build_record_results("not json").unwrap_err();
		assert!(matches!(err, ClientError::Json(_)));
	}

	#[rstest]
	fn test_build_record_keeps_structured_objects() {
		let record = build_record(&object(json!({
			"country": {"value": "ve", "text": "Venezuela"},
			"tags": ["a", "b"],
			"empty": {}
		})));

		assert_eq!(
			record["country"],
			RecordValue::Json(json!({"value": "ve", "text": "Venezuela"}))
		);
		assert_eq!(record["tags"], RecordValue::List(vec!["a".into(), "b".into()]));
		assert!(!record.contains_key("empty"));
	}

	#[rstest]
	fn test_normalize_record_unwraps_first_key() {
		let record = normalize_record(&object(json!({
			"name": "Eleazar",
			"country": {"value": "ve", "text": "Venezuela"},
			"hobbies": {"value": [1, 2]},
			"score": {"value": 9},
			"deleted": null
		})));

		assert_eq!(record["name"], RecordValue::Text("Eleazar".into()));
		assert_eq!(record["country"], RecordValue::Text("ve".into()));
		assert_eq!(record["hobbies"], RecordValue::List(vec!["1".into(), "2".into()]));
		assert!(!record.contains_key("score"));
		assert!(record["deleted"].is_null());
	}
}
