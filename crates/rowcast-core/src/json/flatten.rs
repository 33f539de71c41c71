//! Row and column projection of nested documents
//!
//! A document is read as a stream of events and materialized into named
//! columns of equal length. Object member keys concatenate with `_` to
//! form column names, array elements add no segment of their own, and a
//! row is cut each time an array element closes or an array-held scalar
//! lands. Fields written above an array repeat into every row the array
//! produces, and fields a later row never rewrites stay behind as nulls.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::config::ParseLimits;
use crate::error::{Error, Result};
use crate::json::events::{stream_events, EventSink, Scalar};

/// Projects documents into columns, one document per call.
#[derive(Debug, Clone, Default)]
pub struct JsonFlattener {
    limits: ParseLimits,
}

impl JsonFlattener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ParseLimits) -> Self {
        Self { limits }
    }

    /// Flattens one document into a map of column name to cell array.
    ///
    /// Every column in the result holds the same number of cells. A
    /// document that never produces a row flattens to an empty map.
    pub fn flatten(&self, data: &[u8]) -> Result<Map<String, Value>> {
        let mut sink = FlattenSink::default();
        stream_events(data, &mut sink, &self.limits)?;
        sink.finish();
        Ok(sink.columns)
    }

    /// Returns just the column names `flatten` would produce, in the
    /// order they first appear.
    pub fn header(&self, data: &[u8]) -> Result<Vec<String>> {
        let columns = self.flatten(data)?;
        Ok(columns.keys().cloned().collect())
    }
}

#[derive(Debug)]
enum FrameKind {
    Record,
    Array,
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    prefix: String,
    /// Whether this container sits directly inside an array.
    is_element: bool,
    /// Scalars written so far by an element array, used to name its cells.
    child_index: usize,
    /// Row count when the container opened. An element object whose row
    /// count moved past this closed over rows of its own and must not cut
    /// another one.
    rows_at_open: usize,
}

#[derive(Default)]
struct FlattenSink {
    frames: SmallVec<[Frame; 16]>,
    current_row: Map<String, Value>,
    columns: Map<String, Value>,
    row_idx: usize,
    writes_since_emit: usize,
    pending_key: Option<String>,
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else if segment.is_empty() {
        prefix.to_owned()
    } else {
        format!("{prefix}_{segment}")
    }
}

fn big_to_value(big: &BigInt) -> Value {
    if let Ok(value) = u64::try_from(big) {
        return Value::Number(value.into());
    }
    if let Ok(value) = i64::try_from(big) {
        return Value::Number(value.into());
    }
    match big.to_f64().and_then(serde_json::Number::from_f64) {
        Some(number) => Value::Number(number),
        None => Value::String(big.to_string()),
    }
}

fn scalar_to_value(value: Scalar<'_>) -> Value {
    match value {
        Scalar::Null => Value::Null,
        Scalar::Bool(value) => Value::Bool(value),
        Scalar::Int(value) => Value::Number(value.into()),
        Scalar::BigInt(ref big) => big_to_value(big),
        Scalar::Double(value) => {
            serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
        }
        Scalar::Str(value) => Value::String(value.to_owned()),
    }
}

impl FlattenSink {
    fn open_container(&mut self, kind: FrameKind) -> Result<()> {
        let key = self.pending_key.take();
        let (prefix, is_element) = match self.frames.last() {
            None => (String::new(), false),
            Some(parent) => match parent.kind {
                FrameKind::Record => (
                    join_path(&parent.prefix, key.as_deref().unwrap_or_default()),
                    false,
                ),
                FrameKind::Array => (parent.prefix.clone(), true),
            },
        };
        if is_element {
            // A new element starts from a clean copy of the outer fields:
            // whatever the previous sibling wrote under this prefix is
            // nulled, not carried over.
            let scope = prefix.clone();
            self.clear_scope(&scope);
        }
        self.frames.push(Frame {
            kind,
            prefix,
            is_element,
            child_index: 0,
            rows_at_open: self.row_idx,
        });
        Ok(())
    }

    fn clear_scope(&mut self, prefix: &str) {
        if prefix.is_empty() {
            for value in self.current_row.values_mut() {
                *value = Value::Null;
            }
            return;
        }
        let child_prefix = format!("{prefix}_");
        for (key, value) in self.current_row.iter_mut() {
            if key == prefix || key.starts_with(&child_prefix) {
                *value = Value::Null;
            }
        }
    }

    fn emit_row(&mut self) {
        for (column, cell) in &self.current_row {
            let slot = self
                .columns
                .entry(column.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(cells) = slot {
                while cells.len() < self.row_idx {
                    cells.push(Value::Null);
                }
                cells.push(cell.clone());
            }
        }
        self.row_idx += 1;
        self.writes_since_emit = 0;
    }

    /// Cuts a final row for fields written after the last array closed.
    fn finish(&mut self) {
        if self.writes_since_emit > 0 {
            self.emit_row();
        }
    }
}

impl EventSink for FlattenSink {
    fn start_object(&mut self) -> Result<()> {
        self.open_container(FrameKind::Record)
    }

    fn key(&mut self, key: &str) -> Result<()> {
        self.pending_key = Some(key.to_owned());
        Ok(())
    }

    fn end_object(&mut self) -> Result<()> {
        if let Some(frame) = self.frames.pop() {
            if frame.is_element && self.row_idx == frame.rows_at_open {
                self.emit_row();
                self.clear_scope(&frame.prefix);
            }
        }
        Ok(())
    }

    fn start_array(&mut self) -> Result<()> {
        self.open_container(FrameKind::Array)
    }

    fn end_array(&mut self) -> Result<()> {
        if let Some(frame) = self.frames.pop() {
            if frame.is_element && frame.child_index > 0 {
                self.emit_row();
                self.clear_scope(&frame.prefix);
            }
        }
        Ok(())
    }

    fn scalar(&mut self, value: Scalar<'_>) -> Result<()> {
        let cell = scalar_to_value(value);
        let Some(frame) = self.frames.last_mut() else {
            return Err(Error::unsupported_input(
                "top-level value must be an object or an array",
            ));
        };
        match frame.kind {
            FrameKind::Record => {
                let key = self.pending_key.take().unwrap_or_default();
                let column = join_path(&frame.prefix, &key);
                self.current_row.insert(column, cell);
                self.writes_since_emit += 1;
            }
            FrameKind::Array if frame.is_element => {
                let column = join_path(&frame.prefix, &frame.child_index.to_string());
                frame.child_index += 1;
                self.current_row.insert(column, cell);
                self.writes_since_emit += 1;
            }
            FrameKind::Array => {
                let column = frame.prefix.clone();
                self.current_row.insert(column.clone(), cell);
                self.writes_since_emit += 1;
                self.emit_row();
                self.clear_scope(&column);
            }
        }
        Ok(())
    }
}
