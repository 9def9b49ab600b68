//! The condition tree.
//!
//! [`Condition`] is the expression node of the query grammar: a closed sum
//! type over every node kind. Each node renders itself into a JSON fragment
//! given the kind of its parent (see [`ParentKind`]).
//!
//! - Comparisons: [`EqualCondition`], [`NotEqualCondition`],
//!   [`GreaterLesserCondition`], [`BetweenCondition`], [`InCondition`],
//!   [`LikeCondition`], [`NullCondition`]
//! - Composites: [`AndCondition`], [`OrCondition`]
//! - Existence checks: [`ExistsCondition`]
//! - Clauses: [`JoinClause`], [`OrderByClause`], [`GroupByClause`]

mod comparison;
mod composite;
mod exists;

pub use comparison::{
	BetweenCondition, Comparison, EqualCondition, EqualMode, GreaterLesserCondition, InCondition,
	LikeCondition, NotEqualCondition, NullCondition,
};
pub use composite::{AndCondition, Operand, OrCondition};
pub use exists::ExistsCondition;

use crate::clause::{GroupByClause, JoinClause, OrderByClause};
use crate::error::QueryResult;
use crate::types::ParentKind;
use crate::writer::FragmentWriter;

/// A node of the condition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
	Equal(EqualCondition),
	NotEqual(NotEqualCondition),
	GreaterLesser(GreaterLesserCondition),
	Between(BetweenCondition),
	In(InCondition),
	Like(LikeCondition),
	Null(NullCondition),
	And(AndCondition),
	Or(OrCondition),
	Exists(ExistsCondition),
	Join(JoinClause),
	OrderBy(OrderByClause),
	GroupBy(GroupByClause),
}

impl Condition {
	/// Render this node as a fragment, given the kind of its parent.
	///
	/// Rendering never mutates the node; calling it twice yields the same
	/// text.
	pub fn render(&self, parent: ParentKind) -> String {
		let mut writer = FragmentWriter::new();
		self.write_to(&mut writer, parent);
		writer.into_string()
	}

	/// Write this node into an existing writer.
	pub fn write_to(&self, writer: &mut FragmentWriter, parent: ParentKind) {
		match self {
			Self::Equal(c) => c.write_to(writer, parent),
			Self::NotEqual(c) => c.write_to(writer, parent),
			Self::GreaterLesser(c) => c.write_to(writer, parent),
			Self::Between(c) => c.write_to(writer, parent),
			Self::In(c) => c.write_to(writer, parent),
			Self::Like(c) => c.write_to(writer, parent),
			Self::Null(c) => c.write_to(writer, parent),
			Self::And(c) => c.write_to(writer, parent),
			Self::Or(c) => c.write_to(writer, parent),
			Self::Exists(c) => c.write_to(writer, parent),
			Self::Join(c) => c.write_to(writer, parent),
			Self::OrderBy(c) => c.write_to(writer, parent),
			Self::GroupBy(c) => c.write_to(writer, parent),
		}
	}

	/// Combine two nodes with AND.
	#[must_use]
	pub fn and(self, other: Condition) -> Condition {
		Condition::And(AndCondition::new(self, other))
	}

	/// Combine two nodes with OR.
	#[must_use]
	pub fn or(self, other: Condition) -> Condition {
		Condition::Or(OrCondition::new(self, other))
	}

	/// Build an AND composite from loosely typed operands.
	///
	/// Fails with [`QueryError::InvalidArgument`](crate::QueryError) when
	/// either operand is not a condition.
	pub fn try_and(left: impl Into<Operand>, right: impl Into<Operand>) -> QueryResult<Self> {
		AndCondition::try_new(left, right).map(Self::And)
	}

	/// Build an OR composite from loosely typed operands.
	///
	/// Fails with [`QueryError::InvalidArgument`](crate::QueryError) when
	/// either operand is not a condition.
	pub fn try_or(left: impl Into<Operand>, right: impl Into<Operand>) -> QueryResult<Self> {
		OrCondition::try_new(left, right).map(Self::Or)
	}
}

macro_rules! impl_into_condition {
	($($ty:ident => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Condition {
				fn from(c: $ty) -> Self {
					Self::$variant(c)
				}
			}
		)*
	};
}

impl_into_condition!(
	EqualCondition => Equal,
	NotEqualCondition => NotEqual,
	GreaterLesserCondition => GreaterLesser,
	BetweenCondition => Between,
	InCondition => In,
	LikeCondition => Like,
	NullCondition => Null,
	AndCondition => And,
	OrCondition => Or,
	ExistsCondition => Exists,
	JoinClause => Join,
	OrderByClause => OrderBy,
	GroupByClause => GroupBy,
);
