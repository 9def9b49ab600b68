//! Join, order-by and group-by clauses.
//!
//! Clauses render like any other node but produce their own top-level keys
//! instead of filter fragments. They ignore the parent kind.

use crate::types::{JoinKind, ModelId, ParentKind};
use crate::writer::FragmentWriter;

/// A join against another model.
///
/// The `on` condition is caller-supplied raw text and is written verbatim.
///
/// # Example
///
/// ```rust
/// use cloudrecord_query::{JoinClause, JoinKind, ParentKind};
///
/// let join = JoinClause::new(JoinKind::Left, 234, "user", "user.id = id");
/// assert_eq!(
/// 	join.render(ParentKind::Root),
/// 	r#"{ "type": "left", "alias": "user", "target": "234", "on": "user.id = id" }"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
	pub kind: JoinKind,
	pub model_id: ModelId,
	pub alias: String,
	pub on: String,
}

impl JoinClause {
	/// Build a join with a kind, target model, alias and raw join condition.
	pub fn new(
		kind: JoinKind,
		model_id: impl Into<ModelId>,
		alias: impl Into<String>,
		on: impl Into<String>,
	) -> Self {
		Self {
			kind,
			model_id: model_id.into(),
			alias: alias.into(),
			on: on.into(),
		}
	}

	pub fn render(&self, parent: ParentKind) -> String {
		let mut writer = FragmentWriter::new();
		self.write_to(&mut writer, parent);
		writer.into_string()
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, _parent: ParentKind) {
		writer.push("{ \"type\": ");
		writer.push_quoted(self.kind.as_str());
		writer.push(", \"alias\": ");
		writer.push_quoted(&self.alias);
		writer.push(", \"target\": ");
		writer.push_quoted(&self.model_id.to_string());
		writer.push(", \"on\": ");
		writer.push_quoted(&self.on);
		writer.push(" }");
	}
}

/// Ordering on a single attribute. Ascending unless told otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByClause {
	pub attribute: String,
	pub ascending: bool,
}

impl OrderByClause {
	/// Ascending ordering on `attribute`
	pub fn asc(attribute: impl Into<String>) -> Self {
		Self {
			attribute: attribute.into(),
			ascending: true,
		}
	}

	/// Descending ordering on `attribute`
	pub fn desc(attribute: impl Into<String>) -> Self {
		Self {
			attribute: attribute.into(),
			ascending: false,
		}
	}

	pub fn render(&self, parent: ParentKind) -> String {
		let mut writer = FragmentWriter::new();
		self.write_to(&mut writer, parent);
		writer.into_string()
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, _parent: ParentKind) {
		let direction = if self.ascending { "ASC" } else { "DESC" };
		writer.push("\"order\": ");
		writer.push_quoted(&format!("{} {}", self.attribute, direction));
	}
}

/// Grouping on an ordered list of attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupByClause {
	pub attributes: Vec<String>,
}

impl GroupByClause {
	pub fn new<I, S>(attributes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			attributes: attributes.into_iter().map(Into::into).collect(),
		}
	}

	pub fn render(&self, parent: ParentKind) -> String {
		let mut writer = FragmentWriter::new();
		self.write_to(&mut writer, parent);
		writer.into_string()
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, _parent: ParentKind) {
		writer.push("\"groupBy\": [");
		writer.push_list(&self.attributes, ",", |w, attr| w.push_quoted(attr));
		writer.push("]");
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	fn test_group_by_clause() {
		let clause = GroupByClause::new(["name", "age"]);
		assert_eq!(clause.render(ParentKind::Root), r#""groupBy": ["name","age"]"#);
	}

	#[rstest]
	fn test_group_by_single_attribute() {
		let clause = GroupByClause::new(vec![String::from("name")]);
		assert_eq!(clause.render(ParentKind::Root), r#""groupBy": ["name"]"#);
	}

	#[rstest]
	#[case::asc(OrderByClause::asc("name"), r#""order": "name ASC""#)]
	#[case::desc(OrderByClause::desc("name"), r#""order": "name DESC""#)]
	fn test_order_by_clause(#[case] clause: OrderByClause, #[case] expected: &str) {
		assert_eq!(clause.render(ParentKind::Root), expected);
	}

	#[rstest]
	#[case::left(JoinKind::Left, "left")]
	#[case::left_outer(JoinKind::LeftOuter, "left outer")]
	#[case::right(JoinKind::Right, "right")]
	#[case::right_outer(JoinKind::RightOuter, "right outer")]
	#[case::inner(JoinKind::Inner, "inner")]
	fn test_join_clause(#[case] kind: JoinKind, #[case] text: &str) {
		let join = JoinClause::new(kind, 234, "user", "user.id = language.userid");
		let expected = format!(
			r#"{{ "type": "{}", "alias": "user", "target": "234", "on": "user.id = language.userid" }}"#,
			text
		);
		assert_eq!(join.render(ParentKind::Root), expected);
	}

	#[rstest]
	fn test_clauses_ignore_parent() {
		let join = JoinClause::new(JoinKind::Inner, 1, "a", "a.id = id");
		assert_eq!(join.render(ParentKind::Or), join.render(ParentKind::Root));

		let order = OrderByClause::asc("name");
		assert_eq!(order.render(ParentKind::And), order.render(ParentKind::Root));
	}
}
