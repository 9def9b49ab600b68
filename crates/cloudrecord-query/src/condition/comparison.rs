//! Leaf comparison nodes.
//!
//! None of these nodes look at the parent kind; the parameter is kept so
//! every node shares the same rendering signature.

use crate::types::ParentKind;
use crate::value::Value;
use crate::writer::FragmentWriter;

/// Inclusive bound attached to an equality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EqualMode {
	/// Plain equality
	#[default]
	Exact,
	/// `>=`
	GreaterOrEqual,
	/// `<=`
	LesserOrEqual,
}

/// Strict comparison direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
	/// `>`
	Greater,
	/// `<`
	Lesser,
}

/// `left == right`, or an inclusive bound on `left`.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualCondition {
	pub left: String,
	pub right: Value,
	pub mode: EqualMode,
}

impl EqualCondition {
	pub fn new(left: impl Into<String>, right: impl Into<Value>, mode: EqualMode) -> Self {
		Self {
			left: left.into(),
			right: right.into(),
			mode,
		}
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, _parent: ParentKind) {
		writer.push_quoted(&self.left);
		writer.push(" : ");

		let operator = match self.mode {
			EqualMode::Exact => {
				writer.push_value(&self.right);
				return;
			}
			EqualMode::GreaterOrEqual => "$gte",
			EqualMode::LesserOrEqual => "$lte",
		};

		writer.push("{ ");
		writer.push_quoted(operator);
		writer.push(": ");
		writer.push_value(&self.right);
		writer.push(" }");
	}
}

/// `left != right`.
#[derive(Debug, Clone, PartialEq)]
pub struct NotEqualCondition {
	pub left: String,
	pub right: Value,
}

impl NotEqualCondition {
	pub fn new(left: impl Into<String>, right: impl Into<Value>) -> Self {
		Self {
			left: left.into(),
			right: right.into(),
		}
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, _parent: ParentKind) {
		writer.push("\"$ne\" : {");
		writer.push_quoted(&self.left);
		writer.push(" : ");
		writer.push_value(&self.right);
		writer.push("}");
	}
}

/// Strict `>` / `<` comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct GreaterLesserCondition {
	pub left: String,
	pub right: Value,
	pub comparison: Comparison,
}

impl GreaterLesserCondition {
	pub fn new(left: impl Into<String>, right: impl Into<Value>, comparison: Comparison) -> Self {
		Self {
			left: left.into(),
			right: right.into(),
			comparison,
		}
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, _parent: ParentKind) {
		let operator = match self.comparison {
			Comparison::Greater => "$gt",
			Comparison::Lesser => "$lt",
		};

		writer.push_quoted(&self.left);
		writer.push(": { ");
		writer.push_quoted(operator);
		writer.push(": ");
		writer.push_value(&self.right);
		writer.push(" }");
	}
}

/// `lo <= field <= hi`.
#[derive(Debug, Clone, PartialEq)]
pub struct BetweenCondition {
	pub field: String,
	pub low: Value,
	pub high: Value,
}

impl BetweenCondition {
	pub fn new(field: impl Into<String>, low: impl Into<Value>, high: impl Into<Value>) -> Self {
		Self {
			field: field.into(),
			low: low.into(),
			high: high.into(),
		}
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, _parent: ParentKind) {
		writer.push_quoted(&self.field);
		writer.push(": { \"$between\": [");
		writer.push_value(&self.low);
		writer.push(",");
		writer.push_value(&self.high);
		writer.push("]}");
	}
}

/// Set membership (`IN` / `NOT IN`).
#[derive(Debug, Clone, PartialEq)]
pub struct InCondition {
	pub left: String,
	pub values: Vec<Value>,
	pub negated: bool,
}

impl InCondition {
	pub fn new<I, V>(left: impl Into<String>, values: I, negated: bool) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		Self {
			left: left.into(),
			values: values.into_iter().map(Into::into).collect(),
			negated,
		}
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, _parent: ParentKind) {
		writer.push_quoted(&self.left);
		writer.push(": {");
		writer.push_quoted(if self.negated { "$nin" } else { "$in" });
		writer.push(": [");
		writer.push_list(&self.values, ",", |w, v| w.push_value(v));
		writer.push("]}");
	}
}

/// Pattern match (`LIKE` / `NOT LIKE`). The pattern is always textual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeCondition {
	pub left: String,
	pub pattern: String,
	pub negated: bool,
}

impl LikeCondition {
	pub fn new(left: impl Into<String>, pattern: impl Into<String>, negated: bool) -> Self {
		Self {
			left: left.into(),
			pattern: pattern.into(),
			negated,
		}
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, _parent: ParentKind) {
		writer.push_quoted(&self.left);
		writer.push(": { ");
		writer.push_quoted(if self.negated { "$nlike" } else { "$like" });
		writer.push(" : ");
		writer.push_quoted(&self.pattern);
		writer.push(" }");
	}
}

/// `IS NULL` / `IS NOT NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullCondition {
	pub left: String,
	pub not_null: bool,
}

impl NullCondition {
	pub fn new(left: impl Into<String>, not_null: bool) -> Self {
		Self {
			left: left.into(),
			not_null,
		}
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, _parent: ParentKind) {
		writer.push_quoted(&self.left);
		writer.push(": {");
		writer.push_quoted(if self.not_null { "$notNull" } else { "$null" });
		writer.push(": \"1\"}");
	}
}
