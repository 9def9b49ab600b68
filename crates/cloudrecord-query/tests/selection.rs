//! Full payload integration tests
//!
//! Builds realistic condition trees with the public API and checks the exact
//! payload text sent to the service.

use cloudrecord_query::prelude::*;
use cloudrecord_query::{and_fold, build_projection, render_where_body};
use pretty_assertions::assert_eq;
use rstest::*;

#[fixture]
fn vip_conditions() -> Vec<Condition> {
	vec![
		conditions::like("name", "%eleazar%"),
		conditions::greater_equals("age", 21),
		conditions::in_values("country", ["us", "ve"]),
	]
}

#[rstest]
fn test_payload_with_alias_and_joins(vip_conditions: Vec<Condition>) {
	let joins = vec![
		conditions::left_join(234, "user", "user.id = vip.userid"),
		conditions::inner_join(235, "countries", "countries.code = vip.country"),
	];

	let payload = Selection::new()
		.alias(Some("vip"))
		.joins(&joins)
		.conditions(&vip_conditions)
		.build();

	assert_eq!(
		payload,
		concat!(
			r#"{"alias": "vip", "joins": [{ "type": "left", "alias": "user", "target": "234", "on": "user.id = vip.userid" }, "#,
			r#"{ "type": "inner", "alias": "countries", "target": "235", "on": "countries.code = vip.country" }], "#,
			r#""where": {"name": { "$like" : "%eleazar%" },"age" : { "$gte": 21 },"country": {"$in": ["us","ve"]}}}"#
		)
	);
}

#[rstest]
fn test_payload_with_projection_group_and_order(vip_conditions: Vec<Condition>) {
	let projection = build_projection(Some(&["country", "count(*)"][..]));
	let group = GroupByClause::new(["country"]);
	let order = OrderByClause::asc("country");

	let payload = Selection::new()
		.projection(&projection)
		.conditions(&vip_conditions[2..])
		.group_by(Some(&group))
		.order_by(Some(&order))
		.build();

	assert_eq!(
		payload,
		concat!(
			r#"{"joins": [], "columns": ["country","count(*)"], "#,
			r#""where": {"country": {"$in": ["us","ve"]}},"groupBy": ["country"],"order": "country ASC"}"#
		)
	);
}

#[rstest]
fn test_payload_where_matches_and_fold(vip_conditions: Vec<Condition>) {
	let folded = and_fold(&vip_conditions).map(|c| c.render(ParentKind::Root));
	assert_eq!(folded.as_deref(), Some(render_where_body(&vip_conditions).as_str()));
}

#[rstest]
fn test_payload_with_correlated_exists() {
	let mut exists = conditions::exists(Some(ModelId(1455545)), Some("inner"));
	exists.add(conditions::equals("inner.user_id", "$vip.user_id$"));

	let conds = vec![conditions::is_not_null("vip.user_id"), exists.into()];
	let payload = Selection::new().alias(Some("vip")).conditions(&conds).build();

	assert_eq!(
		payload,
		concat!(
			r#"{"alias": "vip", "joins": [], "where": {"vip.user_id": {"$notNull": "1"},"#,
			r#""$exists": { "joins": [], "model": 1455545, "alias": "inner", "where": {"inner.user_id" : "$vip.user_id$"}}}}"#
		)
	);
}

#[rstest]
fn test_payload_with_mixed_composites() {
	let conds = vec![conditions::or(
		conditions::and(conditions::equals("a", 1), conditions::lesser_than("b", 2)),
		conditions::or(conditions::is_null("c"), conditions::not_equals("d", "x")),
	)];

	assert_eq!(
		Selection::new().conditions(&conds).build(),
		concat!(
			r#"{"joins": [], "where": {"$or": {"where": {"a" : 1,"b": { "$lt": 2 }},"#,
			r#""c": {"$null": "1"},"$ne" : {"d" : "x"}}}}"#
		)
	);
}

#[rstest]
fn test_payload_render_is_repeatable(vip_conditions: Vec<Condition>) {
	let selection = Selection::new().alias(Some("vip")).conditions(&vip_conditions);
	assert_eq!(selection.build(), selection.build());
}
