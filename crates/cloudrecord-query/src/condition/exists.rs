//! Existence checks (`$exists` / `$nexists`).

use super::Condition;
use crate::clause::JoinClause;
use crate::selection::{write_join_tag, write_where_body};
use crate::types::{ModelId, ParentKind};
use crate::writer::FragmentWriter;

/// A correlated existence check against another model.
///
/// Inner conditions are AND-folded on render. They may reference aliases of
/// the enclosing query and may contain further existence checks.
///
/// # Example
///
/// ```rust
/// use cloudrecord_query::prelude::*;
///
/// let mut exists = ExistsCondition::new(Some(1455545.into()), Some("inner".into()), false);
/// exists.add(conditions::equals("inner.user_id", "vip.user_id"));
///
/// assert_eq!(
/// 	exists.render(ParentKind::Root),
/// 	r#""$exists": { "joins": [], "model": 1455545, "alias": "inner", "where": {"inner.user_id" : "vip.user_id"}}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExistsCondition {
	pub model_id: Option<ModelId>,
	pub alias: Option<String>,
	pub joins: Vec<JoinClause>,
	pub conditions: Vec<Condition>,
	pub negated: bool,
}

impl ExistsCondition {
	pub fn new(model_id: Option<ModelId>, alias: Option<String>, negated: bool) -> Self {
		Self {
			model_id,
			alias,
			joins: Vec::new(),
			conditions: Vec::new(),
			negated,
		}
	}

	/// Add a condition to the AND list of this check.
	// Intentional builder-pattern method, not std::ops::Add
	#[allow(clippy::should_implement_trait)]
	pub fn add(&mut self, condition: impl Into<Condition>) -> &mut Self {
		self.conditions.push(condition.into());
		self
	}

	/// Add a join to the inner model.
	pub fn join(&mut self, join: JoinClause) -> &mut Self {
		self.joins.push(join);
		self
	}

	/// Set the alias of the inner model.
	pub fn set_alias(&mut self, alias: impl Into<String>) -> &mut Self {
		self.alias = Some(alias.into());
		self
	}

	/// Set the inner model.
	pub fn set_model(&mut self, model_id: impl Into<ModelId>) -> &mut Self {
		self.model_id = Some(model_id.into());
		self
	}

	/// Consuming variant of [`add`](Self::add) for inline construction.
	#[must_use]
	pub fn with(mut self, condition: impl Into<Condition>) -> Self {
		self.conditions.push(condition.into());
		self
	}

	/// Consuming variant of [`join`](Self::join) for inline construction.
	#[must_use]
	pub fn with_join(mut self, join: JoinClause) -> Self {
		self.joins.push(join);
		self
	}

	pub fn render(&self, parent: ParentKind) -> String {
		let mut writer = FragmentWriter::new();
		self.write_to(&mut writer, parent);
		writer.into_string()
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, _parent: ParentKind) {
		writer.push_quoted(if self.negated { "$nexists" } else { "$exists" });
		writer.push(": { ");
		write_join_tag(writer, &self.joins);
		writer.push(", ");

		if let Some(model_id) = &self.model_id {
			writer.push("\"model\": ");
			writer.push(&model_id.to_string());
			writer.push(", ");
		}

		if let Some(alias) = &self.alias {
			writer.push("\"alias\": ");
			writer.push_quoted(alias);
			writer.push(", ");
		}

		writer.push("\"where\": {");
		write_where_body(writer, &self.conditions);
		writer.push("}}");
	}
}
