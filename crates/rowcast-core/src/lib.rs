//! # Rowcast
//!
//! Parsing engines for semi-structured data: a brute-force datetime
//! parser that matches raw tokens against a fixed catalog of layouts,
//! streaming JSON projection into flat rows and columns with
//! incremental Avro-style schema inference, and a heuristic evaluator
//! that types raw scalar tokens.

#![warn(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod error;
pub mod json;
pub mod scalar;
pub mod temporal;

// Configuration exports
pub use config::ParseLimits;
pub use error::{Error, Result};

// JSON streaming exports
pub use json::{AvroSchemaHandler, EventSink, JsonFlattener, JsonRepairer, Scalar, stream_events};

// Scalar evaluation exports
pub use scalar::{TypedValue, evaluate};

// Temporal exports
pub use temporal::{DateTimeValue, Temporal, parse_temporal};

/// Re-export commonly used types
pub mod prelude {
    pub use super::{
        AvroSchemaHandler, Error, JsonFlattener, JsonRepairer, ParseLimits, Result, Temporal,
        TypedValue, evaluate, parse_temporal,
    };
}
