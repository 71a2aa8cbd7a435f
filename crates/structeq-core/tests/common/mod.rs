use structeq_core::Value;

/// Build a fresh value graph from a JSON literal
#[allow(dead_code)]
pub fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Date at an RFC 3339 instant
#[allow(dead_code)]
pub fn date(text: &str) -> Value {
    Value::parse_date(text).unwrap()
}

/// Regex with valid flags
#[allow(dead_code)]
pub fn re(source: &str, flags: &str) -> Value {
    Value::regex(source, flags).unwrap()
}

/// Assert the result is the same in both argument orders
#[allow(dead_code)]
pub fn eq_both_ways(a: &Value, b: &Value) -> bool {
    let forward = structeq_core::deep_equal(a, b);
    let backward = structeq_core::deep_equal(b, a);
    assert_eq!(forward, backward, "asymmetric result for {:?} vs {:?}", a, b);
    forward
}
