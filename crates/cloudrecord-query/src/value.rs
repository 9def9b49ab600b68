//! Scalar operands used on the right-hand side of conditions.

use crate::writer::FragmentWriter;
use std::fmt;

/// A scalar operand.
///
/// The variant decides the quoting rule: [`Value::Text`] is written between
/// double quotes, every other variant is written verbatim.
///
/// Floats always keep a fractional part (`1.0`, not `1`). NaN and the
/// infinities have no JSON form and are written as `null`.
///
/// ## Example
///
/// ```rust
/// use cloudrecord_query::Value;
///
/// assert_eq!(Value::from(32).to_string(), "32");
/// assert_eq!(Value::from("32").to_string(), "\"32\"");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Integer value
	Int(i64),
	/// Floating point value
	Float(f64),
	/// Boolean value
	Bool(bool),
	/// Text value (quoted on render)
	Text(String),
}

impl Value {
	/// Returns `true` if this value renders between quotes.
	pub fn is_text(&self) -> bool {
		matches!(self, Self::Text(_))
	}

	/// Write the value following the quoting rule.
	pub fn write_to(&self, writer: &mut FragmentWriter) {
		match self {
			Self::Int(v) => writer.push(&v.to_string()),
			Self::Float(v) if v.is_finite() => writer.push(&format!("{v:?}")),
			Self::Float(_) => writer.push("null"),
			Self::Bool(v) => writer.push(if *v { "true" } else { "false" }),
			Self::Text(v) => writer.push_quoted(v),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut writer = FragmentWriter::new();
		self.write_to(&mut writer);
		f.write_str(writer.as_str())
	}
}

macro_rules! impl_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					Self::Int(i64::from(v))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
	fn from(v: f32) -> Self {
		Self::Float(f64::from(v))
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Self::Float(v)
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::Text(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Self::Text(v)
	}
}

impl From<&String> for Value {
	fn from(v: &String) -> Self {
		Self::Text(v.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case::int(Value::from(32), "32")]
	#[case::negative(Value::from(-7i64), "-7")]
	#[case::float(Value::from(31.5), "31.5")]
	#[case::whole_float(Value::from(1.0), "1.0")]
	#[case::negative_float(Value::from(-2.25f32), "-2.25")]
	#[case::nan(Value::from(f64::NAN), "null")]
	#[case::infinity(Value::from(f64::INFINITY), "null")]
	#[case::negative_infinity(Value::from(f64::NEG_INFINITY), "null")]
	#[case::bool(Value::from(true), "true")]
	#[case::text(Value::from("32"), "\"32\"")]
	#[case::owned_text(Value::from(String::from("vip.user_id")), "\"vip.user_id\"")]
	fn test_value_quoting(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(value.to_string(), expected);
	}

	#[rstest]
	fn test_text_is_not_escaped() {
		let value = Value::from("say \"hi\"");
		assert_eq!(value.to_string(), "\"say \"hi\"\"");
	}

	#[rstest]
	fn test_is_text() {
		assert!(Value::from("a").is_text());
		assert!(!Value::from(1).is_text());
	}
}
