//! Query payload assembly.
//!
//! A payload is one JSON object with a fixed key order:
//!
//! ```text
//! { ["alias": "...", ]"joins": [...][, "columns": [...]], "where": {...}[,"groupBy": [...]][,"order": "..."]}
//! ```
//!
//! The `where` body is the AND-fold of the accumulated conditions rendered
//! under the root.

use crate::clause::{GroupByClause, JoinClause, OrderByClause};
use crate::condition::{AndCondition, Condition};
use crate::types::ParentKind;
use crate::writer::FragmentWriter;

/// Left-fold a condition list into a single AND tree.
///
/// `[c0, c1, c2]` becomes `And(And(c0, c1), c2)`. Returns `None` for an
/// empty list.
pub fn and_fold(conditions: &[Condition]) -> Option<Condition> {
	let (first, rest) = conditions.split_first()?;
	Some(rest.iter().fold(first.clone(), |acc, next| {
		Condition::And(AndCondition::new(acc, next.clone()))
	}))
}

/// Write the body of a `where` object for a condition list.
///
/// Produces the same text as rendering [`and_fold`] under
/// [`ParentKind::Root`], without cloning the conditions: inside a left-deep
/// AND chain every leaf is rendered with an AND parent.
pub fn write_where_body(writer: &mut FragmentWriter, conditions: &[Condition]) {
	match conditions {
		[] => {}
		[single] => single.write_to(writer, ParentKind::Root),
		many => writer.push_list(many, ",", |w, c| c.write_to(w, ParentKind::And)),
	}
}

/// Render the body of a `where` object; empty when there are no conditions.
pub fn render_where_body(conditions: &[Condition]) -> String {
	let mut writer = FragmentWriter::new();
	write_where_body(&mut writer, conditions);
	writer.into_string()
}

/// Write the `"joins": [...]` tag.
pub fn write_join_tag(writer: &mut FragmentWriter, joins: &[JoinClause]) {
	writer.push("\"joins\": [");
	writer.push_list(joins, ", ", |w, j| j.write_to(w, ParentKind::Root));
	writer.push("]");
}

/// Render the `"joins": [...]` tag; `"joins": []` when there are no joins.
pub fn build_join_tag(joins: &[JoinClause]) -> String {
	let mut writer = FragmentWriter::new();
	write_join_tag(&mut writer, joins);
	writer.into_string()
}

/// Render the `"columns": [...]` fragment for a projection.
///
/// Returns an empty string when there is no projection or it is empty.
pub fn build_projection<S: AsRef<str>>(projection: Option<&[S]>) -> String {
	let Some(columns) = projection.filter(|p| !p.is_empty()) else {
		return String::new();
	};

	let mut writer = FragmentWriter::new();
	writer.push("\"columns\": [");
	writer.push_list(columns, ",", |w, c| w.push_quoted(c.as_ref()));
	writer.push("]");
	writer.into_string()
}

/// Builder for a complete query payload.
///
/// # Example
///
/// ```rust
/// use cloudrecord_query::prelude::*;
///
/// let payload = Selection::new()
/// 	.alias(Some("vip"))
/// 	.conditions(&[conditions::equals("age", 32)])
/// 	.projection("\"columns\": [\"name\"]")
/// 	.build();
///
/// assert_eq!(
/// 	payload,
/// 	r#"{"alias": "vip", "joins": [], "columns": ["name"], "where": {"age" : 32}}"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
	alias: Option<&'a str>,
	joins: &'a [JoinClause],
	projection: &'a str,
	conditions: &'a [Condition],
	group_by: Option<&'a GroupByClause>,
	order_by: Option<&'a OrderByClause>,
}

impl<'a> Selection<'a> {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn alias(mut self, alias: Option<&'a str>) -> Self {
		self.alias = alias;
		self
	}

	#[must_use]
	pub fn joins(mut self, joins: &'a [JoinClause]) -> Self {
		self.joins = joins;
		self
	}

	/// Set a pre-rendered projection fragment (see [`build_projection`]).
	/// A fragment that is blank after trimming is left out of the payload.
	#[must_use]
	pub fn projection(mut self, projection: &'a str) -> Self {
		self.projection = projection;
		self
	}

	#[must_use]
	pub fn conditions(mut self, conditions: &'a [Condition]) -> Self {
		self.conditions = conditions;
		self
	}

	#[must_use]
	pub fn group_by(mut self, group_by: Option<&'a GroupByClause>) -> Self {
		self.group_by = group_by;
		self
	}

	#[must_use]
	pub fn order_by(mut self, order_by: Option<&'a OrderByClause>) -> Self {
		self.order_by = order_by;
		self
	}

	/// Render the payload.
	pub fn build(&self) -> String {
		let mut writer = FragmentWriter::new();
		writer.push("{");

		if let Some(alias) = self.alias {
			writer.push("\"alias\": ");
			writer.push_quoted(alias);
			writer.push(", ");
		}

		write_join_tag(&mut writer, self.joins);

		let projection = self.projection.trim();
		if !projection.is_empty() {
			writer.push(", ");
			writer.push(projection);
		}

		writer.push(", \"where\": {");
		write_where_body(&mut writer, self.conditions);
		writer.push("}");

		if let Some(group_by) = self.group_by {
			writer.push(",");
			group_by.write_to(&mut writer, ParentKind::Root);
		}

		if let Some(order_by) = self.order_by {
			writer.push(",");
			order_by.write_to(&mut writer, ParentKind::Root);
		}

		writer.push("}");
		let payload = writer.into_string();
		tracing::trace!(payload = %payload, "assembled selection payload");
		payload
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::conditions;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	fn test_and_fold_is_left_deep() {
		let c0 = conditions::equals("a", 1);
		let c1 = conditions::equals("b", 2);
		let c2 = conditions::equals("c", 3);

		let folded = and_fold(&[c0.clone(), c1.clone(), c2.clone()]).unwrap();

		let expected = Condition::And(AndCondition::new(
			Condition::And(AndCondition::new(c0, c1)),
			c2,
		));
		assert_eq!(folded, expected);
	}

	#[rstest]
	fn test_and_fold_empty_and_single() {
		assert!(and_fold(&[]).is_none());

		let only = conditions::is_null("name");
		assert_eq!(and_fold(&[only.clone()]), Some(only));
	}

	#[rstest]
	#[case::empty(vec![])]
	#[case::single(vec![conditions::equals("a", 1)])]
	#[case::pair(vec![conditions::equals("a", 1), conditions::like("b", "%x%")])]
	#[case::with_or(vec![
		conditions::equals("a", 1),
		conditions::or(conditions::equals("b", 2), conditions::equals("c", 3)),
		conditions::and(conditions::is_null("d"), conditions::is_not_null("e")),
	])]
	fn test_where_body_matches_folded_render(#[case] list: Vec<Condition>) {
		let folded = and_fold(&list)
			.map(|c| c.render(ParentKind::Root))
			.unwrap_or_default();
		assert_eq!(render_where_body(&list), folded);
	}

	#[rstest]
	fn test_build_join_tag() {
		assert_eq!(build_join_tag(&[]), r#""joins": []"#);

		let joins = vec![
			conditions::left_join(234, "user", "user.id = language.userid"),
			conditions::left_join(235, "countries", "user.id = countries.userid"),
		];
		assert_eq!(
			build_join_tag(&joins),
			r#""joins": [{ "type": "left", "alias": "user", "target": "234", "on": "user.id = language.userid" }, { "type": "left", "alias": "countries", "target": "235", "on": "user.id = countries.userid" }]"#
		);
	}

	#[rstest]
	#[case::name(&["name"], r#""columns": ["name"]"#)]
	#[case::aggregate(&["count(name)"], r#""columns": ["count(name)"]"#)]
	#[case::many(&["name", "email"], r#""columns": ["name","email"]"#)]
	fn test_build_projection(#[case] columns: &[&str], #[case] expected: &str) {
		assert_eq!(build_projection(Some(columns)), expected);
	}

	#[rstest]
	fn test_build_projection_absent() {
		assert_eq!(build_projection::<&str>(None), "");
		assert_eq!(build_projection::<&str>(Some(&[])), "");
	}

	#[rstest]
	fn test_selection_without_conditions() {
		assert_eq!(Selection::new().build(), r#"{"joins": [], "where": {}}"#);
	}

	#[rstest]
	fn test_selection_blank_projection_is_omitted() {
		let payload = Selection::new().projection("   ").build();
		assert_eq!(payload, r#"{"joins": [], "where": {}}"#);
	}

	#[rstest]
	fn test_selection_full_order() {
		let joins = vec![conditions::inner_join(7, "u", "u.id = uid")];
		let conds = vec![conditions::equals("a", 1), conditions::equals("b", "x")];
		let group = GroupByClause::new(["a"]);
		let order = OrderByClause::desc("b");
		let projection = build_projection(Some(&["a", "count(*)"][..]));

		let payload = Selection::new()
			.alias(Some("t"))
			.joins(&joins)
			.projection(&projection)
			.conditions(&conds)
			.group_by(Some(&group))
			.order_by(Some(&order))
			.build();

		assert_eq!(
			payload,
			concat!(
				r#"{"alias": "t", "joins": [{ "type": "inner", "alias": "u", "target": "7", "on": "u.id = uid" }], "#,
				r#""columns": ["a","count(*)"], "where": {"a" : 1,"b" : "x"},"groupBy": ["a"],"order": "b DESC"}"#
			)
		);
	}
}
