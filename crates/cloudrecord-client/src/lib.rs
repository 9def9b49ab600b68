//! # cloudrecord-client
//!
//! Async client for the cloudrecord record-storage service.
//!
//! Conditions are built with `cloudrecord-query`; this crate attaches them
//! to a [`RecordQuery`], sends the rendered payload through a [`Transport`]
//! and normalizes the response into ordered field maps.
//!
//! ## Architecture
//!
//! - [`provider`]: [`RecordProvider`], the entry point bound to one set of credentials
//! - [`query`]: [`RecordQuery`] and pagination
//! - [`transport`]: The [`Transport`] trait and the reqwest-backed [`HttpTransport`]
//! - [`response`]: Response decoding and record normalization
//! - [`model`]: Model and field metadata
//! - [`settings`]: [`ClientSettings`], [`Credentials`] and endpoint templates
//! - [`testing`]: In-memory transports
//!
//! ## Paging through results
//!
//! ```rust
//! use cloudrecord_client::testing::InMemoryRecords;
//! use cloudrecord_client::{ClientSettings, Credentials, RecordProvider};
//! use cloudrecord_query::prelude::*;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> cloudrecord_client::ClientResult<()> {
//! let transport = Arc::new(InMemoryRecords::new(vec![
//! 	json!({"name": "Ana"}),
//! 	json!({"name": "Luis"}),
//! ]));
//! let provider = RecordProvider::new(
//! 	Credentials::new("csk", "aci"),
//! 	ClientSettings::default(),
//! 	transport,
//! );
//!
//! let mut query = provider.create_query(10);
//! query.add(conditions::is_not_null("name")).set_count(1);
//!
//! let mut page = query.execute::<&str>(None).await?;
//! let mut names = Vec::new();
//! while !page.is_exhausted() {
//! 	for record in &page.records {
//! 		names.extend(record["name"].as_text().map(str::to_string));
//! 	}
//! 	page = query.next().await?;
//! }
//! assert_eq!(names, vec!["Ana", "Luis"]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod model;
pub mod provider;
pub mod query;
pub mod response;
pub mod settings;
pub mod testing;
pub mod transport;

pub use error::{ClientError, ClientResult};
pub use model::{RecordField, RecordFieldItem, RecordFieldType, RecordModel};
pub use provider::RecordProvider;
pub use query::{DEFAULT_COUNT, PageState, RecordQuery};
pub use response::{Record, RecordResults, RecordValue, build_record_results, normalize_record};
pub use settings::{ClientSettings, Credentials, Endpoint, Endpoints};
pub use transport::{HttpMethod, HttpTransport, ServiceRequest, Transport};
