//! AND / OR composites.
//!
//! These are the only nodes whose output depends on the parent kind:
//!
//! - An AND nested directly in an OR wraps itself in `"where": {...}`.
//! - An OR wraps itself in `"$or": {...}` unless its parent is also an OR,
//!   in which case its children are spliced into the enclosing OR.

use super::Condition;
use crate::error::{QueryError, QueryResult};
use crate::types::ParentKind;
use crate::value::Value;
use crate::writer::FragmentWriter;

const NOT_A_CONDITION: &str = "left and right should implement Condition";

/// Operand accepted by the fallible composite constructors.
///
/// Anything that is not a [`Condition`] ends up in [`Operand::Raw`] and is
/// rejected by [`AndCondition::try_new`] and [`OrCondition::try_new`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
	Node(Condition),
	Raw(Value),
}

impl Operand {
	fn into_node(self) -> Option<Condition> {
		match self {
			Self::Node(c) => Some(c),
			Self::Raw(_) => None,
		}
	}
}

impl From<Condition> for Operand {
	fn from(c: Condition) -> Self {
		Self::Node(c)
	}
}

macro_rules! impl_node_operand {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Operand {
				fn from(c: $ty) -> Self {
					Self::Node(Condition::from(c))
				}
			}
		)*
	};
}

impl_node_operand!(
	super::EqualCondition,
	super::NotEqualCondition,
	super::GreaterLesserCondition,
	super::BetweenCondition,
	super::InCondition,
	super::LikeCondition,
	super::NullCondition,
	AndCondition,
	OrCondition,
	super::ExistsCondition,
);

impl From<Value> for Operand {
	fn from(v: Value) -> Self {
		Self::Raw(v)
	}
}

impl From<&str> for Operand {
	fn from(v: &str) -> Self {
		Self::Raw(Value::from(v))
	}
}

impl From<String> for Operand {
	fn from(v: String) -> Self {
		Self::Raw(Value::from(v))
	}
}

fn nodes(left: Operand, right: Operand) -> QueryResult<(Condition, Condition)> {
	match (left.into_node(), right.into_node()) {
		(Some(l), Some(r)) => Ok((l, r)),
		_ => Err(QueryError::InvalidArgument(NOT_A_CONDITION.to_string())),
	}
}

fn write_pair(
	writer: &mut FragmentWriter,
	left: &Condition,
	right: &Condition,
	this: ParentKind,
) {
	left.write_to(writer, this);
	writer.push(",");
	right.write_to(writer, this);
}

/// Conjunction of two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct AndCondition {
	pub left: Box<Condition>,
	pub right: Box<Condition>,
}

impl AndCondition {
	pub fn new(left: Condition, right: Condition) -> Self {
		Self {
			left: Box::new(left),
			right: Box::new(right),
		}
	}

	/// Build from loosely typed operands, rejecting non-condition operands.
	pub fn try_new(left: impl Into<Operand>, right: impl Into<Operand>) -> QueryResult<Self> {
		let (left, right) = nodes(left.into(), right.into())?;
		Ok(Self::new(left, right))
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, parent: ParentKind) {
		let wrapped = parent == ParentKind::Or;
		if wrapped {
			writer.push("\"where\": {");
		}
		write_pair(writer, &self.left, &self.right, ParentKind::And);
		if wrapped {
			writer.push("}");
		}
	}
}

/// Disjunction of two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct OrCondition {
	pub left: Box<Condition>,
	pub right: Box<Condition>,
}

impl OrCondition {
	pub fn new(left: Condition, right: Condition) -> Self {
		Self {
			left: Box::new(left),
			right: Box::new(right),
		}
	}

	/// Build from loosely typed operands, rejecting non-condition operands.
	pub fn try_new(left: impl Into<Operand>, right: impl Into<Operand>) -> QueryResult<Self> {
		let (left, right) = nodes(left.into(), right.into())?;
		Ok(Self::new(left, right))
	}

	pub fn write_to(&self, writer: &mut FragmentWriter, parent: ParentKind) {
		// nested ORs flatten into the outermost one
		let wrapped = parent != ParentKind::Or;
		if wrapped {
			writer.push("\"$or\": {");
		}
		write_pair(writer, &self.left, &self.right, ParentKind::Or);
		if wrapped {
			writer.push("}");
		}
	}
}
