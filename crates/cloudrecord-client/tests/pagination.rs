//! Pagination integration tests

#[path = "fixtures.rs"]
mod fixtures;

use cloudrecord_client::{PageState, RecordValue};
use cloudrecord_query::prelude::*;
use fixtures::{records_provider, users};
use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::Value as JsonValue;

#[rstest]
#[tokio::test]
async fn test_pages_of_one_then_empty(users: Vec<JsonValue>) {
	let (provider, _) = records_provider(users);
	let mut query = provider.create_query(100);
	query.set_count(1);

	let first = query.execute::<&str>(None).await.unwrap();
	assert_eq!(first.total_records, 2);
	assert_eq!(first.fast_returned_size, 1);
	assert_eq!(first.records[0]["name"], RecordValue::Text("Eleazar".into()));
	assert_eq!(query.page_state(), PageState::Fresh);

	let second = query.next().await.unwrap();
	assert_eq!(second.fast_returned_size, 1);
	assert_eq!(second.records[0]["name"], RecordValue::Text("Ana".into()));
	assert_eq!(query.page_state(), PageState::Paged);

	let third = query.next().await.unwrap();
	assert_eq!(third.fast_returned_size, 0);
	assert!(third.records.is_empty());
	assert_eq!(third.total_records, 2);
}

#[rstest]
#[tokio::test]
async fn test_offset_advances_by_effective_count(users: Vec<JsonValue>) {
	let (provider, transport) = records_provider(users);
	let mut query = provider.create_query(100);
	query.set_offset(-3);

	query.execute::<&str>(None).await.unwrap();
	query.next().await.unwrap();
	query.next().await.unwrap();

	assert_eq!(query.current_offset(), 30);

	let urls: Vec<String> = transport.requests().await.into_iter().map(|r| r.url).collect();
	assert_eq!(
		urls,
		vec![
			"http://records.test/api_models/csk-test/aci-test/get_records/100/15/0/",
			"http://records.test/api_models/csk-test/aci-test/get_records/100/15/15/",
			"http://records.test/api_models/csk-test/aci-test/get_records/100/15/30/",
		]
	);
}

#[rstest]
#[tokio::test]
async fn test_next_keeps_projection_and_conditions(users: Vec<JsonValue>) {
	let (provider, transport) = records_provider(users);
	let mut query = provider.create_query(100);
	query
		.set_alias("u")
		.add(conditions::like("u.email", "%@example.com"))
		.set_count(1)
		.order_by("u.name")
		.desc()
		.unwrap();

	query.execute(Some(&["u.name", "u.email"][..])).await.unwrap();
	query.next().await.unwrap();

	let requests = transport.requests().await;
	assert_eq!(requests.len(), 2);

	let expected = concat!(
		r#"{"alias": "u", "joins": [], "columns": ["u.name","u.email"], "#,
		r#""where": {"u.email": { "$like" : "%@example.com" }},"order": "u.name DESC"}"#
	);
	for request in &requests {
		assert!(request.url.contains("/get_records_by_projection/100/1/"));
		assert_eq!(request.param("criteria"), Some(expected));
	}
}

#[rstest]
#[tokio::test]
async fn test_records_keep_field_order_and_lists(users: Vec<JsonValue>) {
	let (provider, _) = records_provider(users);
	let mut query = provider.create_query(100);

	let page = query.execute::<&str>(None).await.unwrap();
	let record = &page.records[0];

	assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "name", "email", "langs"]);
	assert_eq!(record["langs"], RecordValue::List(vec!["es".into(), "en".into()]));
}
