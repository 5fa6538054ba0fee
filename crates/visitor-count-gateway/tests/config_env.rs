#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use visitor_count_gateway::config;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn unset_table_name_falls_back() {
    let cfg = config::load_from_lookup(lookup(&[]));
    assert_eq!(cfg.table_name, "VisitorCount");
}

#[test]
fn blank_table_name_falls_back() {
    let cfg = config::load_from_lookup(lookup(&[("TABLE_NAME", "  ")]));
    assert_eq!(cfg.table_name, config::DEFAULT_TABLE_NAME);
}

#[test]
fn explicit_table_name_is_trimmed() {
    let cfg = config::load_from_lookup(lookup(&[("TABLE_NAME", " prod.visitor-count_v2\n")]));
    assert_eq!(cfg.table_name, "prod.visitor-count_v2");
}

#[test]
fn table_arn_loads_unchanged() {
    let arn = "arn:aws:dynamodb:us-east-1:123456789012:table/VisitorCount";
    let cfg = config::load_from_lookup(lookup(&[("TABLE_NAME", arn)]));
    assert_eq!(cfg.table_name, arn);
}

#[test]
fn other_variables_are_ignored() {
    let cfg = config::load_from_lookup(lookup(&[("TABLE", "Other"), ("table_name", "Other")]));
    assert_eq!(cfg, config::GatewayConfig::default());
}
