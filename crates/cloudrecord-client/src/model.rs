//! Model metadata: models, fields and field items.

use cloudrecord_query::ModelId;
use serde_json::Value as JsonValue;

/// A model (the service's equivalent of a table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordModel {
	pub id: ModelId,
	pub name: Option<String>,
	pub description: Option<String>,
}

impl RecordModel {
	pub fn new(id: impl Into<ModelId>) -> Self {
		Self {
			id: id.into(),
			name: None,
			description: None,
		}
	}

	pub(crate) fn from_json(id: ModelId, json: &JsonValue) -> Self {
		Self {
			id,
			name: text(json, "name"),
			description: text(json, "description"),
		}
	}
}

/// Type of a model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordFieldType {
	Text,
	Number,
	Checkbox,
	RadioButton,
	Select,
	SelectMultiSelection,
	Textarea,
	BigText,
	Password,
	Date,
}

impl RecordFieldType {
	/// Map a wire type code to a field type. Unknown codes are numbers.
	pub fn from_code(code: i64) -> Self {
		match code {
			1 => Self::Text,
			2 => Self::Checkbox,
			3 => Self::RadioButton,
			4 => Self::Select,
			5 => Self::SelectMultiSelection,
			6 => Self::Textarea,
			7 => Self::BigText,
			8 => Self::Password,
			9 => Self::Date,
			_ => Self::Number,
		}
	}

	pub fn code(&self) -> i64 {
		match self {
			Self::Text => 1,
			Self::Checkbox => 2,
			Self::RadioButton => 3,
			Self::Select => 4,
			Self::SelectMultiSelection => 5,
			Self::Textarea => 6,
			Self::BigText => 7,
			Self::Password => 8,
			Self::Date => 9,
			Self::Number => 10,
		}
	}
}

/// An option of a select, radio or checkbox field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordFieldItem {
	pub value: String,
	pub text: String,
}

/// A field of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
	pub id: i64,
	pub identifier: Option<String>,
	pub label: Option<String>,
	pub comment: Option<String>,
	pub uniqueness: bool,
	pub required: bool,
	pub field_type: RecordFieldType,
	pub items: Vec<RecordFieldItem>,
	pub model_id: ModelId,
}

impl RecordField {
	pub(crate) fn from_json(model_id: ModelId, json: &JsonValue) -> Self {
		Self {
			id: integer(json, "id").unwrap_or(-1),
			identifier: text(json, "identifier"),
			label: text(json, "label"),
			comment: text(json, "comment"),
			uniqueness: flag(json, "uniqueness"),
			required: flag(json, "required"),
			field_type: RecordFieldType::from_code(integer(json, "field_type").unwrap_or(0)),
			items: json
				.get("items")
				.and_then(JsonValue::as_array)
				.map(|items| items.iter().map(build_item).collect())
				.unwrap_or_default(),
			model_id,
		}
	}
}

fn build_item(json: &JsonValue) -> RecordFieldItem {
	RecordFieldItem {
		value: scalar_text(json.get("value")).unwrap_or_default(),
		text: scalar_text(json.get("text")).unwrap_or_default(),
	}
}

fn scalar_text(value: Option<&JsonValue>) -> Option<String> {
	match value? {
		JsonValue::String(s) => Some(s.clone()),
		JsonValue::Null => None,
		other => Some(other.to_string()),
	}
}

fn text(json: &JsonValue, key: &str) -> Option<String> {
	json.get(key).and_then(JsonValue::as_str).map(str::to_string)
}

/// Integer value that may arrive as a number or a numeric string.
pub(crate) fn integer(json: &JsonValue, key: &str) -> Option<i64> {
	match json.get(key)? {
		JsonValue::Number(n) => n.as_i64(),
		JsonValue::String(s) => s.trim().parse().ok(),
		_ => None,
	}
}

fn flag(json: &JsonValue, key: &str) -> bool {
	match json.get(key) {
		Some(JsonValue::Bool(b)) => *b,
		Some(JsonValue::Number(n)) => n.as_i64() == Some(1),
		Some(JsonValue::String(s)) => matches!(s.as_str(), "1" | "true"),
		_ => false,
	}
}
