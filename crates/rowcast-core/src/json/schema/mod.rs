//! Avro-style schema inference and merging
//!
//! [`AvroSchemaHandler`] infers a schema per document and folds it into
//! the schema accumulated across documents and externally supplied
//! schema values. The typed model lives in [`node`], the union and
//! record merging rules in [`merge`].

mod handler;
mod merge;
mod node;

pub use handler::AvroSchemaHandler;
pub use node::{ArrayType, FieldType, RecordType, SchemaType};
