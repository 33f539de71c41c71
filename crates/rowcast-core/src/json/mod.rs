//! Streaming JSON processing
//!
//! Everything here drives off one pull tokenizer pass: [`events`]
//! replays a document into an [`EventSink`], and the sinks built on it
//! project rows ([`flatten`]), infer schemas ([`schema`]), and rebuild
//! truncated documents ([`repair`]).

pub mod events;
pub mod flatten;
pub mod repair;
pub mod schema;

pub use events::{stream_events, EventSink, Scalar};
pub use flatten::JsonFlattener;
pub use repair::JsonRepairer;
pub use schema::AvroSchemaHandler;
