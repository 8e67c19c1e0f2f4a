//! Tests for `#[derive(Query)]` as used by endpoint options.

#![allow(missing_docs)]

use powerbi::prelude::*;
use powerbi::types::{GroupOptions, GroupsOptions, ListGroupsOptions};
use powerbi::{add_options, encode_query};

#[derive(Debug, Clone, Default, Query)]
#[query(rename_all = "camelCase")]
struct ActivityOptions {
    start_date_time: String,
    continuation_token: Option<String>,
    #[query(format = "csv")]
    activity_types: Vec<String>,
    #[query(rename = "$top")]
    top: u32,
    #[query(skip)]
    #[allow(dead_code)]
    cache_key: String,
}

#[derive(Debug, Clone, Default, Query)]
struct MultiOptions {
    #[query(rename = "id")]
    ids: Vec<u32>,
}

#[derive(Debug, Clone, Default, Query)]
struct NoOptions;

#[test]
fn all_defaults_produce_no_pairs() {
    assert!(ActivityOptions::default().to_query_pairs().is_empty());
    assert!(NoOptions.to_query_pairs().is_empty());
    assert_eq!(
        add_options("admin/activityevents", Some(&ActivityOptions::default())),
        "admin/activityevents"
    );
}

#[test]
fn rename_all_and_explicit_renames() {
    let options = ActivityOptions {
        start_date_time: "'2026-10-17T00:00:00'".to_string(),
        continuation_token: Some("next".to_string()),
        activity_types: vec!["ViewReport".to_string(), "ExportReport".to_string()],
        top: 5,
        cache_key: "never sent".to_string(),
    };

    let pairs = options.to_query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("startDateTime".to_string(), "'2026-10-17T00:00:00'".to_string()),
            ("continuationToken".to_string(), "next".to_string()),
            ("activityTypes".to_string(), "ViewReport,ExportReport".to_string()),
            ("$top".to_string(), "5".to_string()),
        ]
    );
}

#[test]
fn multi_format_repeats_the_key() {
    let options = MultiOptions { ids: vec![1, 2] };
    insta::assert_snapshot!(encode_query(&options.to_query_pairs()), @"id=1&id=2");
}

#[test]
fn zero_and_empty_values_are_omitted() {
    let options = ListGroupsOptions {
        top: 10,
        skip: 0,
        filter: String::new(),
    };
    insta::assert_snapshot!(add_options("groups", Some(&options)), @"groups?$top=10");
}

#[test]
fn filter_is_passed_through_and_escaped() {
    let options = ListGroupsOptions {
        filter: "contains(name,'Sales & Ops')".to_string(),
        skip: 5,
        ..ListGroupsOptions::default()
    };
    insta::assert_snapshot!(
        add_options("groups", Some(&options)),
        @"groups?$filter=contains%28name%2C%27Sales%20%26%20Ops%27%29&$skip=5"
    );
}

#[test]
fn flattened_group_shares_the_query_string() {
    let options = GroupsOptions {
        group: GroupOptions {
            expand: "reports".to_string(),
        },
        top: 50,
        skip: 100,
        ..GroupsOptions::default()
    };
    insta::assert_snapshot!(
        add_options("admin/groups", Some(&options)),
        @"admin/groups?$expand=reports&$skip=100&$top=50"
    );
}

#[test]
fn options_append_to_an_existing_query() {
    let options = GroupOptions {
        expand: "users".to_string(),
    };
    insta::assert_snapshot!(
        add_options("admin/groups/g1?x=1", Some(&options)),
        @"admin/groups/g1?x=1&$expand=users"
    );
}
