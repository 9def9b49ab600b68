//! Fragment writer helper for constructing query text
//!
//! [`FragmentWriter`] is the single place where query text is appended to.
//! Every node renderer writes through it so quoting and list separators stay
//! consistent across the grammar.

use crate::value::Value;

/// Writer for query fragments.
///
/// # Examples
///
/// ```rust
/// use cloudrecord_query::{FragmentWriter, Value};
///
/// let mut writer = FragmentWriter::new();
/// writer.push_quoted("age");
/// writer.push(": ");
/// writer.push_value(&Value::from(32));
///
/// assert_eq!(writer.into_string(), "\"age\": 32");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FragmentWriter {
	buf: String,
}

impl FragmentWriter {
	/// Create an empty writer
	pub fn new() -> Self {
		Self::default()
	}

	/// Push raw text
	pub fn push(&mut self, s: &str) {
		self.buf.push_str(s);
	}

	/// Push text wrapped in double quotes, without escaping
	pub fn push_quoted(&mut self, s: &str) {
		self.buf.push('"');
		self.buf.push_str(s);
		self.buf.push('"');
	}

	/// Push a value following the quoting rule
	pub fn push_value(&mut self, value: &Value) {
		value.write_to(self);
	}

	/// Push a list of items with a separator
	///
	/// # Arguments
	///
	/// * `items` - Iterator of items
	/// * `separator` - Separator string between items
	/// * `f` - Function to write each item
	pub fn push_list<I, T, F>(&mut self, items: I, separator: &str, mut f: F)
	where
		I: IntoIterator<Item = T>,
		F: FnMut(&mut Self, T),
	{
		let mut first = true;
		for item in items {
			if !first {
				self.buf.push_str(separator);
			}
			f(self, item);
			first = false;
		}
	}

	/// Get the text written so far
	pub fn as_str(&self) -> &str {
		&self.buf
	}

	/// Check if nothing has been written
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	/// Consume the writer and return the text
	pub fn into_string(self) -> String {
		self.buf
	}
}
