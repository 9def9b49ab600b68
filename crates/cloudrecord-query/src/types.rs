//! Small supporting types for the condition tree.

use std::fmt;

/// Kind of the node enclosing the one being rendered.
///
/// Only the AND and OR composites change their output depending on the
/// parent; every other node ignores it. [`ParentKind::Root`] is used for
/// top-level rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParentKind {
	/// No enclosing node
	#[default]
	Root,
	/// Enclosed by an AND composite
	And,
	/// Enclosed by an OR composite
	Or,
}

/// Join types supported by the query grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
	/// LEFT JOIN
	Left,
	/// RIGHT JOIN
	Right,
	/// INNER JOIN
	Inner,
	/// LEFT OUTER JOIN
	LeftOuter,
	/// RIGHT OUTER JOIN
	RightOuter,
}

impl JoinKind {
	/// Returns the text used for the `type` key of a join.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Left => "left",
			Self::Right => "right",
			Self::Inner => "inner",
			Self::LeftOuter => "left outer",
			Self::RightOuter => "right outer",
		}
	}
}

impl fmt::Display for JoinKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Identifier of a model (the service's equivalent of a table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub i64);

impl ModelId {
	/// Returns the raw identifier.
	pub fn get(&self) -> i64 {
		self.0
	}
}

impl From<i64> for ModelId {
	fn from(id: i64) -> Self {
		Self(id)
	}
}

impl From<i32> for ModelId {
	fn from(id: i32) -> Self {
		Self(i64::from(id))
	}
}

impl From<u32> for ModelId {
	fn from(id: u32) -> Self {
		Self(i64::from(id))
	}
}

impl fmt::Display for ModelId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case::left(JoinKind::Left, "left")]
	#[case::right(JoinKind::Right, "right")]
	#[case::inner(JoinKind::Inner, "inner")]
	#[case::left_outer(JoinKind::LeftOuter, "left outer")]
	#[case::right_outer(JoinKind::RightOuter, "right outer")]
	fn test_join_kind_text(#[case] kind: JoinKind, #[case] expected: &str) {
		assert_eq!(kind.as_str(), expected);
		assert_eq!(kind.to_string(), expected);
	}

	#[rstest]
	fn test_parent_kind_default_is_root() {
		assert_eq!(ParentKind::default(), ParentKind::Root);
	}

	#[rstest]
	fn test_model_id_display() {
		assert_eq!(ModelId::from(1455545i64).to_string(), "1455545");
	}
}
