//! Schema merging across documents and external schemas

use rowcast::AvroSchemaHandler;
use serde_json::json;

#[test]
fn test_conflicting_types_widen_to_a_union() {
    let mut handler = AvroSchemaHandler::new();
    handler.create_schema(br#"{"a": 1}"#).unwrap();
    let schema = handler.create_schema(br#"{"a": "x"}"#).unwrap();
    assert_eq!(
        schema,
        json!({
            "type": "record",
            "fields": [{"name": "a", "type": ["string", "int"]}],
            "name": "root",
        })
    );
}

#[test]
fn test_missing_fields_become_nullable_with_default() {
    let mut handler = AvroSchemaHandler::new();
    handler.create_schema(br#"{"id": "a", "job": "x"}"#).unwrap();
    let schema = handler.create_schema(br#"{"id": "b"}"#).unwrap();
    assert_eq!(
        schema,
        json!({
            "type": "record",
            "fields": [
                {"name": "id", "type": "string"},
                {"name": "job", "type": ["null", "string"], "default": null},
            ],
            "name": "root",
        })
    );
    // the reverse direction marks the newcomer nullable too
    let mut handler = AvroSchemaHandler::new();
    handler.create_schema(br#"{"id": "a"}"#).unwrap();
    let schema = handler.create_schema(br#"{"id": "b", "job": "x"}"#).unwrap();
    assert_eq!(
        schema,
        json!({
            "type": "record",
            "fields": [
                {"name": "id", "type": "string"},
                {"name": "job", "type": ["null", "string"], "default": null},
            ],
            "name": "root",
        })
    );
}

#[test]
fn test_the_newest_document_anchors_field_order() {
    let mut handler = AvroSchemaHandler::new();
    handler.create_schema(br#"{"a": 1, "shared": true}"#).unwrap();
    let schema = handler.create_schema(br#"{"b": "x", "shared": false}"#).unwrap();
    assert_eq!(
        schema,
        json!({
            "type": "record",
            "fields": [
                {"name": "b", "type": ["null", "string"], "default": null},
                {"name": "shared", "type": "boolean"},
                {"name": "a", "type": ["null", "int"], "default": null},
            ],
            "name": "root",
        })
    );
}

#[test]
fn test_merging_the_same_document_is_idempotent() {
    let document = br#"{
        "id": "a",
        "tags": ["x", "y"],
        "items": [{"sku": "s1", "count": 2}, {"sku": "s2"}]
    }"#;
    let mut handler = AvroSchemaHandler::new();
    let first = handler.create_schema(document).unwrap();
    let second = handler.create_schema(document).unwrap();
    let third = handler.create_schema(document).unwrap();
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn test_element_fields_merge_across_documents() {
    let mut handler = AvroSchemaHandler::new();
    handler
        .create_schema(br#"{"items": [{"sku": "s1"}]}"#)
        .unwrap();
    let schema = handler
        .create_schema(br#"{"items": [{"sku": 7, "count": 1}]}"#)
        .unwrap();
    assert_eq!(
        schema,
        json!({
            "type": "record",
            "fields": [{
                "name": "items",
                "type": {
                    "type": "array",
                    "items": [{
                        "type": "record",
                        "fields": [
                            {"name": "sku", "type": ["int", "string"]},
                            {"name": "count", "type": ["null", "int"], "default": null},
                        ],
                        "name": "root_items_",
                    }],
                },
            }],
            "name": "root",
        })
    );
}

#[test]
fn test_external_schema_names_survive_read_and_update() {
    let external = json!({
        "type": "record",
        "fields": [
            {"name": "userId", "type": "string"},
            {"name": "age", "type": "int"},
        ],
        "name": "UserProfile",
    });
    let mut handler = AvroSchemaHandler::new();
    handler.read_existing_schema(&external).unwrap();
    assert_eq!(handler.schema(), external);

    // updating with a partial schema widens without renaming
    handler
        .update_schema(&json!({
            "type": "record",
            "fields": [{"name": "age", "type": "string"}],
            "name": "UserProfile",
        }))
        .unwrap();
    assert_eq!(
        handler.schema(),
        json!({
            "type": "record",
            "fields": [
                {"name": "userId", "type": ["null", "string"], "default": null},
                {"name": "age", "type": ["int", "string"]},
            ],
            "name": "UserProfile",
        })
    );
}

#[test]
fn test_update_schema_without_a_current_schema_adopts_it() {
    let external = json!({
        "type": "record",
        "fields": [{"name": "a", "type": ["null", "int"], "default": null}],
        "name": "root",
    });
    let mut handler = AvroSchemaHandler::new();
    handler.update_schema(&external).unwrap();
    assert_eq!(handler.schema(), external);
}

#[test]
fn test_structural_conflict_keeps_the_structural_side() {
    let mut handler = AvroSchemaHandler::new();
    handler.create_schema(br#"{"payload": "raw"}"#).unwrap();
    let schema = handler
        .create_schema(br#"{"payload": {"kind": "parsed"}}"#)
        .unwrap();
    assert_eq!(
        schema,
        json!({
            "type": "record",
            "fields": [{
                "name": "payload",
                "type": {
                    "type": "record",
                    "fields": [{"name": "kind", "type": "string"}],
                    "name": "root_payload",
                },
            }],
            "name": "root",
        })
    );
    // a later scalar observation does not undo the structural type
    let schema = handler.create_schema(br#"{"payload": "raw"}"#).unwrap();
    assert_eq!(
        schema,
        json!({
            "type": "record",
            "fields": [{
                "name": "payload",
                "type": {
                    "type": "record",
                    "fields": [{"name": "kind", "type": "string"}],
                    "name": "root_payload",
                },
            }],
            "name": "root",
        })
    );
}

#[test]
fn test_record_and_array_roots_merge_into_a_union() {
    let mut handler = AvroSchemaHandler::new();
    handler.create_schema(br#"{"a": 1}"#).unwrap();
    let schema = handler.create_schema(br#"[1, 2]"#).unwrap();
    assert_eq!(
        schema,
        json!([
            {"type": "array", "items": ["int"]},
            {"type": "record", "fields": [{"name": "a", "type": "int"}], "name": "root"},
        ])
    );
}

#[test]
fn test_failed_parse_preserves_the_prior_schema() {
    let mut handler = AvroSchemaHandler::new();
    let before = handler.create_schema(br#"{"a": 1}"#).unwrap();
    assert!(handler.create_schema(b"nonsense").is_err());
    assert_eq!(handler.schema(), before);
}
