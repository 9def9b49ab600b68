//! Record queries and pagination.

use crate::error::{ClientError, ClientResult};
use crate::response::{RecordResults, build_record_results};
use crate::settings::{ClientSettings, Credentials, Endpoint};
use crate::transport::{ServiceRequest, Transport};
use cloudrecord_query::{
	Condition, GroupByClause, JoinClause, ModelId, OrderByClause, Selection, build_projection,
};
use std::fmt;
use std::sync::Arc;

/// Page size used when no positive count is set.
pub const DEFAULT_COUNT: i64 = 15;

const ORDER_BY_REQUIRED: &str = "You must call order_by method before call this method";

/// Pagination state of a [`RecordQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
	/// No page has been advanced yet
	#[default]
	Fresh,
	/// [`RecordQuery::next`] has been called at least once
	Paged,
}

/// A query against one model.
///
/// Conditions added with [`add`](Self::add) are AND-folded when the query
/// runs. The query keeps its offset and projection between calls so that
/// [`next`](Self::next) can walk the result set.
///
/// # Example
///
/// ```rust,no_run
/// use cloudrecord_client::{Credentials, RecordProvider, ClientSettings};
/// use cloudrecord_query::prelude::*;
///
/// # async fn run() -> cloudrecord_client::ClientResult<()> {
/// let provider = RecordProvider::http(
/// 	Credentials::new("csk", "aci"),
/// 	ClientSettings::default(),
/// )?;
///
/// let mut query = provider.create_query(1455545);
/// query
/// 	.add(conditions::like("name", "%eleazar%"))
/// 	.set_count(10)
/// 	.order_by("name")
/// 	.desc()?;
///
/// let first = query.execute(Some(&["name", "email"][..])).await?;
/// let second = query.next().await?;
/// # Ok(())
/// # }
/// ```
pub struct RecordQuery {
	model_id: ModelId,
	alias: Option<String>,
	conditions: Vec<Condition>,
	joins: Vec<JoinClause>,
	order_by: Option<OrderByClause>,
	group_by: Option<GroupByClause>,
	offset: i64,
	count: i64,
	projection: Option<Vec<String>>,
	state: PageState,
	credentials: Credentials,
	settings: Arc<ClientSettings>,
	transport: Arc<dyn Transport>,
}

impl fmt::Debug for RecordQuery {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RecordQuery")
			.field("model_id", &self.model_id)
			.field("alias", &self.alias)
			.field("conditions", &self.conditions.len())
			.field("joins", &self.joins.len())
			.field("offset", &self.offset)
			.field("count", &self.count)
			.field("state", &self.state)
			.finish_non_exhaustive()
	}
}

impl RecordQuery {
	pub fn new(
		model_id: impl Into<ModelId>,
		credentials: Credentials,
		settings: Arc<ClientSettings>,
		transport: Arc<dyn Transport>,
	) -> Self {
		Self {
			model_id: model_id.into(),
			alias: None,
			conditions: Vec::new(),
			joins: Vec::new(),
			order_by: None,
			group_by: None,
			offset: -1,
			count: -1,
			projection: None,
			state: PageState::Fresh,
			credentials,
			settings,
			transport,
		}
	}

	/// Add a condition to the AND list of this query.
	///
	/// Join, order-by and group-by clauses are query-level: they are routed
	/// to [`join`](Self::join), and replace the current ordering or grouping,
	/// instead of entering the where body.
	// Intentional builder-pattern method, not std::ops::Add
	#[allow(clippy::should_implement_trait)]
	pub fn add(&mut self, condition: impl Into<Condition>) -> &mut Self {
		match condition.into() {
			Condition::Join(join) => self.joins.push(join),
			Condition::OrderBy(order_by) => self.order_by = Some(order_by),
			Condition::GroupBy(group_by) => self.group_by = Some(group_by),
			condition => self.conditions.push(condition),
		}
		self
	}

	/// Alias of the queried model, used by joins and correlated checks.
	pub fn set_alias(&mut self, alias: impl Into<String>) -> &mut Self {
		self.alias = Some(alias.into());
		self
	}

	pub fn join(&mut self, join: JoinClause) -> &mut Self {
		self.joins.push(join);
		self
	}

	/// Order by `attribute`, ascending until [`desc`](Self::desc) is called.
	pub fn order_by(&mut self, attribute: impl Into<String>) -> &mut Self {
		self.order_by = Some(OrderByClause::asc(attribute));
		self
	}

	/// Switch the current ordering to ascending.
	///
	/// Fails with [`ClientError::IllegalState`] when
	/// [`order_by`](Self::order_by) has not been called.
	pub fn asc(&mut self) -> ClientResult<&mut Self> {
		self.set_direction(true)
	}

	/// Switch the current ordering to descending.
	///
	/// Fails with [`ClientError::IllegalState`] when
	/// [`order_by`](Self::order_by) has not been called.
	pub fn desc(&mut self) -> ClientResult<&mut Self> {
		self.set_direction(false)
	}

	fn set_direction(&mut self, ascending: bool) -> ClientResult<&mut Self> {
		let order_by = self
			.order_by
			.as_mut()
			.ok_or_else(|| ClientError::IllegalState(ORDER_BY_REQUIRED.to_string()))?;
		order_by.ascending = ascending;
		Ok(self)
	}

	pub fn group_by<I, S>(&mut self, attributes: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.group_by = Some(GroupByClause::new(attributes));
		self
	}

	pub fn set_offset(&mut self, offset: i64) -> &mut Self {
		self.offset = offset;
		self
	}

	/// Page size. Values below one fall back to [`DEFAULT_COUNT`].
	pub fn set_count(&mut self, count: i64) -> &mut Self {
		self.count = count;
		self
	}

	/// Offset sent with the next request; never negative.
	pub fn current_offset(&self) -> i64 {
		self.offset.max(0)
	}

	pub fn effective_count(&self) -> i64 {
		if self.count > 0 { self.count } else { DEFAULT_COUNT }
	}

	pub fn model_id(&self) -> ModelId {
		self.model_id
	}

	pub fn alias(&self) -> Option<&str> {
		self.alias.as_deref()
	}

	pub fn conditions(&self) -> &[Condition] {
		&self.conditions
	}

	pub fn joins(&self) -> &[JoinClause] {
		&self.joins
	}

	pub fn order_by_clause(&self) -> Option<&OrderByClause> {
		self.order_by.as_ref()
	}

	pub fn group_by_clause(&self) -> Option<&GroupByClause> {
		self.group_by.as_ref()
	}

	/// Projection stored by the last [`execute`](Self::execute).
	pub fn projection(&self) -> Option<&[String]> {
		self.projection.as_deref()
	}

	pub fn page_state(&self) -> PageState {
		self.state
	}

	/// Render the payload this query would send, without sending it.
	pub fn selection(&self) -> String {
		let projection = build_projection(self.projection.as_deref());
		Selection::new()
			.alias(self.alias.as_deref())
			.joins(&self.joins)
			.projection(&projection)
			.conditions(&self.conditions)
			.group_by(self.group_by.as_ref())
			.order_by(self.order_by.as_ref())
			.build()
	}

	/// Run the query at the current offset.
	///
	/// With a non-empty projection only those columns are fetched. The
	/// projection is kept for [`next`](Self::next).
	pub async fn execute<S: AsRef<str>>(
		&mut self,
		projection: Option<&[S]>,
	) -> ClientResult<RecordResults> {
		self.projection =
			projection.map(|columns| columns.iter().map(|c| c.as_ref().to_string()).collect());
		self.fetch().await
	}

	/// Advance the offset by one page and run the query again.
	///
	/// There is no terminal state: past the end of the result set the page
	/// comes back with `fast_returned_size == 0`. The offset saturates at
	/// `i64::MAX`.
	pub async fn next(&mut self) -> ClientResult<RecordResults> {
		self.offset = self.current_offset().saturating_add(self.effective_count());
		self.state = PageState::Paged;
		tracing::trace!(model_id = %self.model_id, offset = self.offset, "advancing to next page");
		self.fetch().await
	}

	async fn fetch(&self) -> ClientResult<RecordResults> {
		let payload = self.selection();

		let endpoint = match self.projection.as_deref() {
			Some(columns) if !columns.is_empty() => Endpoint::GetRecordsByProjection,
			_ => Endpoint::GetRecords,
		};
		let url = self.settings.endpoint_url(
			endpoint,
			&self.credentials,
			&[
				("mid", self.model_id.to_string()),
				("count", self.effective_count().to_string()),
				("offset", self.current_offset().to_string()),
			],
		);

		tracing::debug!(model_id = %self.model_id, payload = %payload, "executing record query");

		let request = ServiceRequest::post(url).with_param("criteria", payload);
		let body = self.transport.send(request).await?;
		build_record_results(&body)
	}
}
