//! Factory functions for condition nodes.
//!
//! These mirror the grammar operators one to one and are the usual way of
//! building a condition tree:
//!
//! ```rust
//! use cloudrecord_query::prelude::*;
//!
//! let cond = conditions::and(
//! 	conditions::like("email", "%.com%"),
//! 	conditions::in_values("country", ["us", "ve"]),
//! );
//! assert_eq!(
//! 	cond.render(ParentKind::Root),
//! 	r#""email": { "$like" : "%.com%" },"country": {"$in": ["us","ve"]}"#
//! );
//! ```

use crate::clause::JoinClause;
use crate::condition::{
	AndCondition, BetweenCondition, Comparison, Condition, EqualCondition, EqualMode,
	ExistsCondition, GreaterLesserCondition, InCondition, LikeCondition, NotEqualCondition,
	NullCondition, OrCondition,
};
use crate::types::{JoinKind, ModelId};
use crate::value::Value;

/// `left AND right`
pub fn and(left: Condition, right: Condition) -> Condition {
	Condition::And(AndCondition::new(left, right))
}

/// `left OR right`
pub fn or(left: Condition, right: Condition) -> Condition {
	Condition::Or(OrCondition::new(left, right))
}

/// `field BETWEEN low AND high`
pub fn between(
	field: impl Into<String>,
	low: impl Into<Value>,
	high: impl Into<Value>,
) -> Condition {
	Condition::Between(BetweenCondition::new(field, low, high))
}

/// Existence check, optionally bound to a model and alias.
///
/// Returns the node itself rather than a [`Condition`] so inner conditions
/// and joins can still be added.
pub fn exists(model_id: Option<ModelId>, alias: Option<&str>) -> ExistsCondition {
	ExistsCondition::new(model_id, alias.map(str::to_string), false)
}

/// Negated existence check. See [`exists`].
pub fn not_exists(model_id: Option<ModelId>, alias: Option<&str>) -> ExistsCondition {
	ExistsCondition::new(model_id, alias.map(str::to_string), true)
}

/// `left IN (values)`
pub fn in_values<I, V>(left: impl Into<String>, values: I) -> Condition
where
	I: IntoIterator<Item = V>,
	V: Into<Value>,
{
	Condition::In(InCondition::new(left, values, false))
}

/// `left NOT IN (values)`
pub fn not_in<I, V>(left: impl Into<String>, values: I) -> Condition
where
	I: IntoIterator<Item = V>,
	V: Into<Value>,
{
	Condition::In(InCondition::new(left, values, true))
}

/// `left LIKE pattern`
pub fn like(left: impl Into<String>, pattern: impl Into<String>) -> Condition {
	Condition::Like(LikeCondition::new(left, pattern, false))
}

/// `left NOT LIKE pattern`
pub fn not_like(left: impl Into<String>, pattern: impl Into<String>) -> Condition {
	Condition::Like(LikeCondition::new(left, pattern, true))
}

/// `left = right`
pub fn equals(left: impl Into<String>, right: impl Into<Value>) -> Condition {
	Condition::Equal(EqualCondition::new(left, right, EqualMode::Exact))
}

/// `left != right`
pub fn not_equals(left: impl Into<String>, right: impl Into<Value>) -> Condition {
	Condition::NotEqual(NotEqualCondition::new(left, right))
}

/// `left >= right`
pub fn greater_equals(left: impl Into<String>, right: impl Into<Value>) -> Condition {
	Condition::Equal(EqualCondition::new(left, right, EqualMode::GreaterOrEqual))
}

/// `left > right`
pub fn greater_than(left: impl Into<String>, right: impl Into<Value>) -> Condition {
	Condition::GreaterLesser(GreaterLesserCondition::new(left, right, Comparison::Greater))
}

/// `left < right`
pub fn lesser_than(left: impl Into<String>, right: impl Into<Value>) -> Condition {
	Condition::GreaterLesser(GreaterLesserCondition::new(left, right, Comparison::Lesser))
}

/// `left <= right`
pub fn lesser_equals(left: impl Into<String>, right: impl Into<Value>) -> Condition {
	Condition::Equal(EqualCondition::new(left, right, EqualMode::LesserOrEqual))
}

/// `left IS NULL`
pub fn is_null(left: impl Into<String>) -> Condition {
	Condition::Null(NullCondition::new(left, false))
}

/// `left IS NOT NULL`
pub fn is_not_null(left: impl Into<String>) -> Condition {
	Condition::Null(NullCondition::new(left, true))
}

/// Left join against `model_id`, aliased as `alias`.
pub fn left_join(
	model_id: impl Into<ModelId>,
	alias: impl Into<String>,
	on: impl Into<String>,
) -> JoinClause {
	JoinClause::new(JoinKind::Left, model_id, alias, on)
}

/// Left outer join against `model_id`, aliased as `alias`.
pub fn left_outer_join(
	model_id: impl Into<ModelId>,
	alias: impl Into<String>,
	on: impl Into<String>,
) -> JoinClause {
	JoinClause::new(JoinKind::LeftOuter, model_id, alias, on)
}

/// Right join against `model_id`, aliased as `alias`.
pub fn right_join(
	model_id: impl Into<ModelId>,
	alias: impl Into<String>,
	on: impl Into<String>,
) -> JoinClause {
	JoinClause::new(JoinKind::Right, model_id, alias, on)
}

/// Right outer join against `model_id`, aliased as `alias`.
pub fn right_outer_join(
	model_id: impl Into<ModelId>,
	alias: impl Into<String>,
	on: impl Into<String>,
) -> JoinClause {
	JoinClause::new(JoinKind::RightOuter, model_id, alias, on)
}

/// Inner join against `model_id`, aliased as `alias`.
pub fn inner_join(
	model_id: impl Into<ModelId>,
	alias: impl Into<String>,
	on: impl Into<String>,
) -> JoinClause {
	JoinClause::new(JoinKind::Inner, model_id, alias, on)
}
