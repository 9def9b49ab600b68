//! # cloudrecord-query
//!
//! Condition compiler for the cloudrecord JSON query grammar.
//!
//! This crate turns a tree of conditions (comparisons, AND/OR composites,
//! existence checks, joins, ordering and grouping clauses) into the textual
//! JSON fragments understood by the remote record-storage service. It does
//! no I/O: the HTTP side lives in `cloudrecord-client`.
//!
//! ## Architecture
//!
//! - [`value`]: Scalar operands and the quoting rule
//! - [`types`]: [`ParentKind`], [`JoinKind`] and [`ModelId`]
//! - [`condition`]: The [`Condition`] sum type and every node variant
//! - [`clause`]: Join, order-by and group-by clauses
//! - [`conditions`]: Factory functions for building nodes
//! - [`selection`]: AND-folding and assembly of the full query payload
//! - [`writer`]: Low-level fragment writer shared by all renderers
//!
//! ## Quick Start
//!
//! ```rust
//! use cloudrecord_query::prelude::*;
//!
//! let cond = conditions::or(
//! 	conditions::equals("name", "Eleazar"),
//! 	conditions::greater_than("age", 30),
//! );
//!
//! assert_eq!(
//! 	cond.render(ParentKind::Root),
//! 	r#""$or": {"name" : "Eleazar","age": { "$gt": 30 }}"#
//! );
//!
//! let payload = Selection::new()
//! 	.conditions(&[cond])
//! 	.order_by(Some(&OrderByClause::desc("age")))
//! 	.build();
//! assert!(payload.starts_with(r#"{"joins": [], "where": {"#));
//! ```
//!
//! ## Rendering Rules
//!
//! Every node renders with knowledge of its immediate parent. Only the AND
//! and OR composites look at it:
//!
//! | Node | Parent is OR | Any other parent |
//! |------|--------------|------------------|
//! | AND | `"where": {l,r}` | `l,r` |
//! | OR | `l,r` | `"$or": {l,r}` |
//!
//! Values are quoted when textual and written verbatim otherwise. Embedded
//! quotes are never escaped; callers pass pre-sanitized strings.

pub mod clause;
pub mod condition;
pub mod conditions;
pub mod error;
pub mod selection;
pub mod types;
pub mod value;
pub mod writer;

pub use clause::{GroupByClause, JoinClause, OrderByClause};
pub use condition::{
	AndCondition, BetweenCondition, Comparison, Condition, EqualCondition, EqualMode,
	ExistsCondition, GreaterLesserCondition, InCondition, LikeCondition, NotEqualCondition,
	NullCondition, Operand, OrCondition,
};
pub use error::{QueryError, QueryResult};
pub use selection::{Selection, and_fold, build_join_tag, build_projection, render_where_body};
pub use types::{JoinKind, ModelId, ParentKind};
pub use value::Value;
pub use writer::FragmentWriter;

/// Convenient re-exports for building conditions and payloads.
pub mod prelude {
	pub use crate::clause::{GroupByClause, JoinClause, OrderByClause};
	pub use crate::condition::{Condition, ExistsCondition, Operand};
	pub use crate::conditions;
	pub use crate::error::{QueryError, QueryResult};
	pub use crate::selection::Selection;
	pub use crate::types::{JoinKind, ModelId, ParentKind};
	pub use crate::value::Value;
}
