//! Row and column shapes produced by the flattener

use proptest::prelude::*;
use rowcast::{Error, JsonFlattener, ParseLimits};
use serde_json::{json, Map, Value};

fn flatten(data: &str) -> Map<String, Value> {
    JsonFlattener::new().flatten(data.as_bytes()).unwrap()
}

#[test]
fn test_header_fields_repeat_across_rows() {
    let columns = flatten(
        r#"{
            "header": {"version": 2, "source": "sensor-7"},
            "readings": [
                {"ts": "2024-01-01", "value": 1.5},
                {"ts": "2024-01-02", "value": 2.5, "flag": true},
                {"ts": "2024-01-03", "value": 3.5}
            ]
        }"#,
    );
    assert_eq!(columns.len(), 5);
    assert_eq!(columns["header_version"], json!([2, 2, 2]));
    assert_eq!(
        columns["header_source"],
        json!(["sensor-7", "sensor-7", "sensor-7"])
    );
    assert_eq!(
        columns["readings_ts"],
        json!(["2024-01-01", "2024-01-02", "2024-01-03"])
    );
    assert_eq!(columns["readings_value"], json!([1.5, 2.5, 3.5]));
    // the field only the middle element carried is null elsewhere
    assert_eq!(columns["readings_flag"], json!([null, true, null]));
}

#[test]
fn test_uniform_root_array_has_no_padding() {
    let mut elements = Vec::new();
    for i in 0..10 {
        elements.push(format!(r#"{{"id": {i}, "name": "row {i}"}}"#));
    }
    let document = format!("[{}]", elements.join(","));
    let columns = flatten(&document);
    assert_eq!(columns.len(), 2);
    let Value::Array(ids) = &columns["id"] else {
        panic!("expected a column");
    };
    assert_eq!(ids.len(), 10);
    assert!(ids.iter().all(|cell| cell.is_number()));
    let Value::Array(names) = &columns["name"] else {
        panic!("expected a column");
    };
    assert_eq!(names.len(), 10);
    assert!(names.iter().all(|cell| cell.is_string()));
}

#[test]
fn test_matrix_rows_index_their_cells() {
    // 24 rows of 12 values: columns "0".."11", 24 cells each
    let mut rows = Vec::new();
    for r in 0..24 {
        let cells: Vec<String> = (0..12).map(|c| (r * 12 + c).to_string()).collect();
        rows.push(format!("[{}]", cells.join(",")));
    }
    let document = format!("[{}]", rows.join(","));
    let columns = flatten(&document);
    assert_eq!(columns.len(), 12);
    for c in 0..12 {
        let Value::Array(cells) = &columns[&c.to_string()] else {
            panic!("expected a column");
        };
        assert_eq!(cells.len(), 24);
        assert_eq!(cells[0], json!(c));
        assert_eq!(cells[23], json!(23 * 12 + c));
    }
}

#[test]
fn test_root_array_of_scalars_uses_the_empty_column() {
    let columns = flatten("[1, 2, 3]");
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[""], json!([1, 2, 3]));
}

#[test]
fn test_named_scalar_array_emits_one_row_per_value() {
    let columns = flatten(r#"{"data": [10, 20], "unit": "ms"}"#);
    assert_eq!(columns["data"], json!([10, 20, null]));
    assert_eq!(columns["unit"], json!([null, null, "ms"]));
}

#[test]
fn test_deep_nesting_joins_with_underscores() {
    let columns = flatten(r#"{"a": {"b": {"c": {"d": 1}}}}"#);
    assert_eq!(columns["a_b_c_d"], json!([1]));
}

#[test]
fn test_element_objects_with_nested_objects() {
    let columns = flatten(
        r#"{"users": [
            {"name": "a", "contact": {"city": "x"}},
            {"name": "b", "contact": {"city": "y"}}
        ]}"#,
    );
    assert_eq!(columns["users_name"], json!(["a", "b"]));
    assert_eq!(columns["users_contact_city"], json!(["x", "y"]));
}

#[test]
fn test_sibling_prefix_is_not_cleared_by_substring() {
    // clearing "ab" between elements must leave "abc" alone
    let columns = flatten(r#"{"abc": 1, "ab": [{"x": 1}, {"x": 2}]}"#);
    assert_eq!(columns["abc"], json!([1, 1]));
    assert_eq!(columns["ab_x"], json!([1, 2]));
}

#[test]
fn test_header_matches_flatten_columns() {
    let document = br#"{"header": {"version": 1.0}, "data": [1, 2]}"#;
    let flattener = JsonFlattener::new();
    let header = flattener.header(document).unwrap();
    assert_eq!(header, vec!["header_version", "data"]);
    let columns = flattener.flatten(document).unwrap();
    assert_eq!(columns.keys().cloned().collect::<Vec<_>>(), header);
    assert_eq!(columns["header_version"], json!([1.0, 1.0]));
    assert_eq!(columns["data"], json!([1, 2]));
}

#[test]
fn test_degenerate_documents_flatten_empty() {
    assert!(flatten("{}").is_empty());
    assert!(flatten("[]").is_empty());
    assert!(flatten(r#"{"a": {}}"#).is_empty());
}

#[test]
fn test_malformed_documents_error() {
    let flattener = JsonFlattener::new();
    assert!(matches!(
        flattener.flatten(br#"{"a": tru"#),
        Err(Error::Tokenizer { .. })
    ));
    assert!(matches!(
        flattener.flatten(b"[1, 2] tail"),
        Err(Error::Tokenizer { .. })
    ));
    assert!(matches!(
        flattener.flatten(b"\"scalar\""),
        Err(Error::UnsupportedInput(_))
    ));
}

#[test]
fn test_limits_are_enforced() {
    let flattener = JsonFlattener::with_limits(ParseLimits {
        max_input_size: 8,
        ..ParseLimits::default()
    });
    assert!(matches!(
        flattener.flatten(br#"{"a": [1, 2, 3]}"#),
        Err(Error::InputTooLarge { .. })
    ));
}

proptest! {
    /// Every column a document produces holds the same number of cells.
    #[test]
    fn prop_columns_stay_aligned(values in proptest::collection::vec(
        proptest::collection::btree_map("[a-d]", -100i64..100, 0..4),
        1..8,
    )) {
        let elements: Vec<String> = values
            .iter()
            .map(|row| {
                let fields: Vec<String> = row
                    .iter()
                    .map(|(key, value)| format!("\"{key}\": {value}"))
                    .collect();
                format!("{{{}}}", fields.join(","))
            })
            .collect();
        let document = format!("[{}]", elements.join(","));
        let columns = JsonFlattener::new().flatten(document.as_bytes()).unwrap();
        let lengths: Vec<usize> = columns
            .values()
            .map(|column| match column {
                Value::Array(cells) => cells.len(),
                _ => 0,
            })
            .collect();
        if let Some(first) = lengths.first() {
            prop_assert!(lengths.iter().all(|len| len == first));
        }
    }
}
