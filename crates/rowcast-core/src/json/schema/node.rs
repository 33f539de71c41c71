//! The schema type model and its serialized form
//!
//! In memory a schema is a closed sum over the Avro primitives plus
//! records, arrays, and unions. Serialization pins the historical key
//! order: records are `{"type", "fields", "name"}`, fields are
//! `{"name", "type"}` with `"default": null` appended for nullable
//! fields, arrays are `{"type", "items"}` with items always a list. A
//! field holding an array of exactly one anonymous array serializes in
//! the collapsed `{"items": {"items": [..], "type": "array"}, "type":
//! "array"}` form; the model keeps the uncollapsed shape and the reader
//! expands the collapsed form back.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaType {
    Null,
    Boolean,
    Int,
    Long,
    Double,
    String,
    Record(RecordType),
    Array(ArrayType),
    Union(Vec<SchemaType>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordType {
    /// Underscore-joined path from the document root, e.g.
    /// `root_metadata_contributors_`.
    pub name: String,
    pub fields: Vec<FieldType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    pub name: String,
    pub ty: SchemaType,
    pub default_null: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub items: Vec<SchemaType>,
}

impl SchemaType {
    pub(crate) fn primitive_name(&self) -> Option<&'static str> {
        match self {
            SchemaType::Null => Some("null"),
            SchemaType::Boolean => Some("boolean"),
            SchemaType::Int => Some("int"),
            SchemaType::Long => Some("long"),
            SchemaType::Double => Some("double"),
            SchemaType::String => Some("string"),
            _ => None,
        }
    }

    pub(crate) fn from_primitive_name(name: &str) -> Option<SchemaType> {
        match name {
            "null" => Some(SchemaType::Null),
            "boolean" => Some(SchemaType::Boolean),
            "int" => Some(SchemaType::Int),
            "long" => Some(SchemaType::Long),
            "double" => Some(SchemaType::Double),
            "string" => Some(SchemaType::String),
            _ => None,
        }
    }

    pub(crate) fn is_primitive(&self) -> bool {
        self.primitive_name().is_some()
    }

    pub(crate) fn is_structural(&self) -> bool {
        matches!(self, SchemaType::Record(_) | SchemaType::Array(_))
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            SchemaType::Record(_) => "record",
            SchemaType::Array(_) => "array",
            SchemaType::Union(_) => "union",
            primitive => primitive.primitive_name().unwrap_or("string"),
        }
    }

    /// Serializes in a non-field position, where arrays never collapse.
    pub(crate) fn to_value(&self) -> Value {
        match self {
            SchemaType::Record(record) => record_value(record),
            SchemaType::Array(array) => array_value(array),
            SchemaType::Union(members) => {
                Value::Array(members.iter().map(SchemaType::to_value).collect())
            }
            primitive => Value::String(primitive.kind_name().to_owned()),
        }
    }

    pub(crate) fn from_value(value: &Value) -> Result<SchemaType> {
        match value {
            Value::String(name) => SchemaType::from_primitive_name(name)
                .ok_or_else(|| Error::schema_validation(format!("unknown type name: {name}"))),
            Value::Array(members) => Ok(SchemaType::Union(
                members
                    .iter()
                    .map(SchemaType::from_value)
                    .collect::<Result<_>>()?,
            )),
            Value::Object(map) => from_object(map),
            other => Err(Error::schema_validation(format!(
                "unsupported schema node: {other}"
            ))),
        }
    }
}

fn record_value(record: &RecordType) -> Value {
    let mut map = Map::new();
    map.insert("type".to_owned(), Value::String("record".to_owned()));
    map.insert(
        "fields".to_owned(),
        Value::Array(record.fields.iter().map(field_value).collect()),
    );
    map.insert("name".to_owned(), Value::String(record.name.clone()));
    Value::Object(map)
}

fn field_value(field: &FieldType) -> Value {
    let mut map = Map::new();
    map.insert("name".to_owned(), Value::String(field.name.clone()));
    map.insert("type".to_owned(), field_type_value(&field.ty));
    if field.default_null {
        map.insert("default".to_owned(), Value::Null);
    }
    Value::Object(map)
}

fn items_value(items: &[SchemaType]) -> Value {
    Value::Array(items.iter().map(SchemaType::to_value).collect())
}

fn array_value(array: &ArrayType) -> Value {
    let mut map = Map::new();
    map.insert("type".to_owned(), Value::String("array".to_owned()));
    map.insert("items".to_owned(), items_value(&array.items));
    Value::Object(map)
}

/// Serializes a type in field position, applying the collapsed form to
/// an array whose only item is itself an array.
pub(crate) fn field_type_value(ty: &SchemaType) -> Value {
    if let SchemaType::Array(array) = ty {
        if let [SchemaType::Array(inner)] = array.items.as_slice() {
            let mut inner_map = Map::new();
            inner_map.insert("items".to_owned(), items_value(&inner.items));
            inner_map.insert("type".to_owned(), Value::String("array".to_owned()));
            let mut outer = Map::new();
            outer.insert("items".to_owned(), Value::Object(inner_map));
            outer.insert("type".to_owned(), Value::String("array".to_owned()));
            return Value::Object(outer);
        }
    }
    ty.to_value()
}

/// Serializes the document root. An array root takes the field-position
/// form plus a trailing `"name": "root"`.
pub(crate) fn root_value(ty: &SchemaType) -> Value {
    match ty {
        SchemaType::Array(_) => {
            let mut value = field_type_value(ty);
            if let Value::Object(map) = &mut value {
                map.insert("name".to_owned(), Value::String("root".to_owned()));
            }
            value
        }
        other => other.to_value(),
    }
}

fn from_object(map: &Map<String, Value>) -> Result<SchemaType> {
    match map.get("type") {
        Some(Value::String(kind)) if kind == "record" => {
            let name = map
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned();
            let mut fields = Vec::new();
            if let Some(Value::Array(raw_fields)) = map.get("fields") {
                for raw in raw_fields {
                    let Value::Object(field_map) = raw else {
                        return Err(Error::schema_validation("record field must be an object"));
                    };
                    let field_name = field_map
                        .get("name")
                        .and_then(Value::as_str)
                        .ok_or_else(|| Error::schema_validation("record field missing a name"))?
                        .to_owned();
                    let ty = match field_map.get("type") {
                        Some(raw_type) => SchemaType::from_value(raw_type)?,
                        None => SchemaType::String,
                    };
                    fields.push(FieldType {
                        name: field_name,
                        ty,
                        default_null: field_map.contains_key("default"),
                    });
                }
            }
            Ok(SchemaType::Record(RecordType { name, fields }))
        }
        Some(Value::String(kind)) if kind == "array" => Ok(SchemaType::Array(ArrayType {
            items: parse_items(map.get("items"))?,
        })),
        Some(Value::String(kind)) => SchemaType::from_primitive_name(kind)
            .ok_or_else(|| Error::schema_validation(format!("unknown type name: {kind}"))),
        Some(other) => SchemaType::from_value(other),
        None => Err(Error::schema_validation("schema node missing a type")),
    }
}

fn parse_items(items: Option<&Value>) -> Result<Vec<SchemaType>> {
    match items {
        None => Ok(Vec::new()),
        Some(Value::Array(list)) => list.iter().map(SchemaType::from_value).collect(),
        Some(single @ Value::Object(_)) => Ok(vec![SchemaType::from_value(single)?]),
        Some(Value::String(name)) => Ok(vec![SchemaType::from_primitive_name(name)
            .ok_or_else(|| Error::schema_validation(format!("unknown type name: {name}")))?]),
        Some(other) => Err(Error::schema_validation(format!(
            "unsupported items node: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, fields: Vec<FieldType>) -> SchemaType {
        SchemaType::Record(RecordType {
            name: name.to_owned(),
            fields,
        })
    }

    fn field(name: &str, ty: SchemaType) -> FieldType {
        FieldType {
            name: name.to_owned(),
            ty,
            default_null: false,
        }
    }

    #[test]
    fn test_record_key_order() {
        let schema = record("root", vec![field("id", SchemaType::String)]);
        let text = serde_json::to_string(&schema.to_value()).unwrap();
        assert_eq!(
            text,
            r#"{"type":"record","fields":[{"name":"id","type":"string"}],"name":"root"}"#
        );
    }

    #[test]
    fn test_nullable_field_appends_default() {
        let schema = record(
            "root",
            vec![FieldType {
                name: "job".to_owned(),
                ty: SchemaType::Union(vec![SchemaType::Null, SchemaType::String]),
                default_null: true,
            }],
        );
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "record",
                "fields": [{"name": "job", "type": ["null", "string"], "default": null}],
                "name": "root",
            })
        );
    }

    #[test]
    fn test_array_items_stay_a_list() {
        let array = SchemaType::Array(ArrayType {
            items: vec![SchemaType::Int],
        });
        let text = serde_json::to_string(&array.to_value()).unwrap();
        assert_eq!(text, r#"{"type":"array","items":["int"]}"#);
    }

    #[test]
    fn test_field_level_array_of_arrays_collapses() {
        let inner = SchemaType::Array(ArrayType {
            items: vec![SchemaType::Int, SchemaType::String],
        });
        let outer = SchemaType::Array(ArrayType { items: vec![inner] });
        let text = serde_json::to_string(&field_type_value(&outer)).unwrap();
        assert_eq!(
            text,
            r#"{"items":{"items":["int","string"],"type":"array"},"type":"array"}"#
        );
    }

    #[test]
    fn test_collapsed_form_expands_on_read() {
        let collapsed = json!({
            "items": {"items": ["int", "string"], "type": "array"},
            "type": "array",
        });
        let parsed = SchemaType::from_value(&collapsed).unwrap();
        assert_eq!(
            parsed,
            SchemaType::Array(ArrayType {
                items: vec![SchemaType::Array(ArrayType {
                    items: vec![SchemaType::Int, SchemaType::String],
                })],
            })
        );
    }

    #[test]
    fn test_root_array_carries_a_name() {
        let root = SchemaType::Array(ArrayType {
            items: vec![SchemaType::Int],
        });
        let text = serde_json::to_string(&root_value(&root)).unwrap();
        assert_eq!(text, r#"{"type":"array","items":["int"],"name":"root"}"#);
    }

    #[test]
    fn test_external_schema_round_trip() {
        let external = json!({
            "type": "record",
            "fields": [
                {"name": "userId", "type": "string"},
                {"name": "age", "type": ["int", "string"]},
                {"name": "email", "type": ["null", "string"], "default": null},
            ],
            "name": "UserProfile",
        });
        let parsed = SchemaType::from_value(&external).unwrap();
        assert_eq!(parsed.to_value(), external);
    }

    #[test]
    fn test_unknown_type_name_is_rejected() {
        let err = SchemaType::from_value(&json!("varchar")).unwrap_err();
        assert!(matches!(err, Error::SchemaValidation(_)));
    }
}
