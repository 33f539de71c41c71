//! Incremental schema inference over the event stream
//!
//! Each document is inferred into a typed schema while its events
//! replay: objects open record frames named by their underscore-joined
//! path, arrays collect item types, and sibling array elements merge as
//! the stream goes. A document whose root is an array is wrapped in a
//! synthetic `ArrayWrapper` member first, then the array type is pulled
//! back out of the wrapper record. Schemas from consecutive documents
//! merge with the newest document anchoring field order.

use serde_json::Value;
use smallvec::SmallVec;
use tracing::debug;

use crate::config::ParseLimits;
use crate::error::{Error, Result};
use crate::json::events::{stream_events, EventSink, Scalar};

use super::merge::{merge_field_types, normalize, union_merge};
use super::node::{root_value, ArrayType, FieldType, RecordType, SchemaType};

/// Infers and accumulates a schema across documents.
#[derive(Debug, Clone, Default)]
pub struct AvroSchemaHandler {
    schema: Option<SchemaType>,
    limits: ParseLimits,
}

impl AvroSchemaHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ParseLimits) -> Self {
        Self {
            schema: None,
            limits,
        }
    }

    /// Infers the schema of one document and merges it into the schema
    /// accumulated so far, returning the merged result. The new
    /// document anchors field order; fields only the prior schema knew
    /// append as nullable.
    ///
    /// A document that breaks off mid-stream still contributes its
    /// well-formed prefix, as long as at least its root container
    /// opened.
    pub fn create_schema(&mut self, data: &[u8]) -> Result<Value> {
        let document = self.infer_document(data)?;
        self.schema = Some(match self.schema.take() {
            None => document,
            Some(prior) => merge_field_types(document, prior),
        });
        if let Some(schema) = &mut self.schema {
            normalize(schema);
        }
        Ok(self.schema())
    }

    /// Merges an externally supplied schema value into the current one.
    /// The current schema anchors field order.
    pub fn update_schema(&mut self, external: &Value) -> Result<()> {
        let incoming = SchemaType::from_value(external)?;
        self.schema = Some(match self.schema.take() {
            None => incoming,
            Some(current) => merge_field_types(current, incoming),
        });
        if let Some(schema) = &mut self.schema {
            normalize(schema);
        }
        Ok(())
    }

    /// Replaces the current schema wholesale with an external one,
    /// keeping its names as given.
    pub fn read_existing_schema(&mut self, external: &Value) -> Result<()> {
        self.schema = Some(SchemaType::from_value(external)?);
        Ok(())
    }

    /// Serializes the accumulated schema. Before any document or
    /// external schema arrives this is JSON null.
    pub fn schema(&self) -> Value {
        match &self.schema {
            Some(ty) => root_value(ty),
            None => Value::Null,
        }
    }

    fn infer_document(&self, data: &[u8]) -> Result<SchemaType> {
        let owned: Vec<u8>;
        let (bytes, array_root): (&[u8], bool) = if data.first() == Some(&b'[') {
            let mut buf = Vec::with_capacity(data.len() + 17);
            buf.extend_from_slice(b"{\"ArrayWrapper\":");
            buf.extend_from_slice(data);
            buf.push(b'}');
            owned = buf;
            (&owned, true)
        } else {
            (data, false)
        };
        let mut sink = InferenceSink::default();
        match stream_events(bytes, &mut sink, &self.limits) {
            Ok(()) => {}
            Err(error @ Error::Tokenizer { .. }) => {
                if sink.frames.is_empty() && sink.document.is_none() {
                    return Err(error);
                }
                debug!(%error, "keeping partial schema from malformed document");
            }
            Err(error) => return Err(error),
        }
        sink.into_document(array_root)
    }
}

/// Joins a record path and a member key. Array elements contribute an
/// empty key, which leaves the trailing underscore element records are
/// named with.
fn child_name(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}_{key}")
    }
}

#[derive(Debug)]
enum Binding {
    Root,
    Field(String),
    Item,
}

#[derive(Debug)]
enum Frame {
    Record {
        record: RecordType,
        pending_key: Option<String>,
        binding: Binding,
    },
    Array {
        items: Vec<SchemaType>,
        prefix: String,
        binding: Binding,
    },
}

#[derive(Debug, Default)]
struct InferenceSink {
    frames: SmallVec<[Frame; 16]>,
    document: Option<SchemaType>,
}

impl InferenceSink {
    /// Resolves where the next container hangs and the path name it
    /// takes. Consumes the pending member key of a record parent.
    fn open_binding(&mut self) -> (Binding, String) {
        match self.frames.last_mut() {
            None => (Binding::Root, "root".to_owned()),
            Some(Frame::Record {
                record,
                pending_key,
                ..
            }) => {
                let key = pending_key.take().unwrap_or_default();
                let name = child_name(&record.name, &key);
                (Binding::Field(key), name)
            }
            Some(Frame::Array { prefix, .. }) => (Binding::Item, child_name(prefix, "")),
        }
    }

    fn attach(&mut self, binding: Binding, ty: SchemaType) {
        match binding {
            Binding::Root => self.document = Some(ty),
            Binding::Field(name) => {
                if let Some(Frame::Record { record, .. }) = self.frames.last_mut() {
                    record.fields.push(FieldType {
                        name,
                        ty,
                        default_null: false,
                    });
                }
            }
            Binding::Item => {
                if let Some(Frame::Array { items, .. }) = self.frames.last_mut() {
                    items.push(ty);
                }
            }
        }
    }

    fn merge_top_array_items(&mut self) {
        if let Some(Frame::Array { items, .. }) = self.frames.last_mut() {
            let pending = std::mem::take(items);
            *items = union_merge(pending);
        }
    }

    fn close_record(&mut self) {
        if let Some(Frame::Record {
            record, binding, ..
        }) = self.frames.pop()
        {
            self.attach(binding, SchemaType::Record(record));
            self.merge_top_array_items();
        }
    }

    fn close_array(&mut self) {
        if let Some(Frame::Array { items, binding, .. }) = self.frames.pop() {
            let items = union_merge(items);
            self.attach(binding, SchemaType::Array(ArrayType { items }));
        }
    }

    /// Closes every container a truncated document left open.
    fn fold_open_frames(&mut self) {
        while let Some(frame) = self.frames.last() {
            match frame {
                Frame::Record { .. } => self.close_record(),
                Frame::Array { .. } => self.close_array(),
            }
        }
    }

    fn into_document(mut self, array_root: bool) -> Result<SchemaType> {
        self.fold_open_frames();
        let document = self
            .document
            .ok_or_else(|| Error::unsupported_input("document produced no value"))?;
        if array_root {
            // The wrapper record's last field holds the root array.
            let SchemaType::Record(mut record) = document else {
                return Err(Error::unsupported_input(
                    "top-level value must be an object or an array",
                ));
            };
            return match record.fields.pop() {
                Some(field) => Ok(field.ty),
                None => Err(Error::unsupported_input(
                    "top-level value must be an object or an array",
                )),
            };
        }
        match document {
            record @ SchemaType::Record(_) => Ok(record),
            _ => Err(Error::unsupported_input(
                "top-level value must be an object or an array",
            )),
        }
    }
}

impl EventSink for InferenceSink {
    fn start_object(&mut self) -> Result<()> {
        self.merge_top_array_items();
        let (binding, name) = self.open_binding();
        self.frames.push(Frame::Record {
            record: RecordType {
                name,
                fields: Vec::new(),
            },
            pending_key: None,
            binding,
        });
        Ok(())
    }

    fn key(&mut self, key: &str) -> Result<()> {
        if let Some(Frame::Record { pending_key, .. }) = self.frames.last_mut() {
            *pending_key = Some(key.to_owned());
        }
        Ok(())
    }

    fn end_object(&mut self) -> Result<()> {
        self.close_record();
        Ok(())
    }

    fn start_array(&mut self) -> Result<()> {
        let (binding, prefix) = self.open_binding();
        self.frames.push(Frame::Array {
            items: Vec::new(),
            prefix,
            binding,
        });
        Ok(())
    }

    fn end_array(&mut self) -> Result<()> {
        self.close_array();
        Ok(())
    }

    fn scalar(&mut self, value: Scalar<'_>) -> Result<()> {
        let ty = match value {
            Scalar::Null => SchemaType::Null,
            Scalar::Bool(_) => SchemaType::Boolean,
            Scalar::Int(_) => SchemaType::Int,
            Scalar::BigInt(_) => SchemaType::Long,
            Scalar::Double(_) => SchemaType::Double,
            Scalar::Str(_) => SchemaType::String,
        };
        match self.frames.last_mut() {
            None => self.document = Some(ty),
            Some(Frame::Record {
                record,
                pending_key,
                ..
            }) => {
                let key = pending_key.take().unwrap_or_default();
                match record.fields.iter_mut().find(|field| field.name == key) {
                    Some(field) => {
                        let existing = std::mem::replace(&mut field.ty, SchemaType::Null);
                        field.ty = merge_field_types(existing, ty);
                    }
                    None => record.fields.push(FieldType {
                        name: key,
                        ty,
                        default_null: false,
                    }),
                }
            }
            Some(Frame::Array { items, .. }) => {
                if !items.contains(&ty) {
                    items.push(ty);
                }
            }
        }
        Ok(())
    }
}
