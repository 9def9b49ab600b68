//! # cloudrecord
//!
//! Query builder and async client for the cloudrecord record-storage service.
//!
//! Conditions, joins, ordering and grouping are composed as a typed tree and
//! compiled into the service's JSON query grammar. Queries run over an async
//! transport and walk large result sets page by page.
//!
//! ## Feature Flags
//!
//! - `client` (default) - [`RecordQuery`], [`RecordProvider`] and the reqwest transport
//!
//! Without `client` only the synchronous condition compiler is built.
//!
//! ## Crates
//!
//! - [`query`]: Condition compiler and payload assembly (`cloudrecord-query`)
//! - [`client`]: Queries, pagination, transport and provider (`cloudrecord-client`)
//!
//! ## Quick Example
//!
//! ```rust
//! use cloudrecord::prelude::*;
//!
//! let cond = conditions::and(
//! 	conditions::equals("status", "active"),
//! 	conditions::or(
//! 		conditions::between("age", 18, 30),
//! 		conditions::is_null("age"),
//! 	),
//! );
//!
//! assert_eq!(
//! 	cond.render(ParentKind::Root),
//! 	r#""status" : "active","$or": {"age": { "$between": [18,30]},"age": {"$null": "1"}}"#
//! );
//! ```

pub use cloudrecord_query as query;

#[cfg(feature = "client")]
pub use cloudrecord_client as client;

pub use cloudrecord_query::{
	Condition, ExistsCondition, GroupByClause, JoinClause, JoinKind, ModelId, OrderByClause,
	ParentKind, QueryError, QueryResult, Selection, Value, conditions,
};

#[cfg(feature = "client")]
pub use cloudrecord_client::{
	ClientError, ClientResult, ClientSettings, Credentials, PageState, Record, RecordField,
	RecordFieldType, RecordModel, RecordProvider, RecordQuery, RecordResults, RecordValue,
	Transport,
};

/// Everything needed to build and run queries.
pub mod prelude {
	pub use cloudrecord_query::prelude::*;

	#[cfg(feature = "client")]
	pub use cloudrecord_client::{
		ClientError, ClientResult, ClientSettings, Credentials, PageState, RecordProvider,
		RecordQuery, RecordResults, RecordValue,
	};
}
