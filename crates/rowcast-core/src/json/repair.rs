//! Best-effort completion of truncated documents
//!
//! The event stream is re-serialized into a minified document as it
//! arrives. When tokenization breaks off, everything already emitted
//! stands: a key left without a value completes as `null` and every
//! container still open closes in reverse order. Strings re-escape on
//! the way out, so the rebuilt text is valid JSON even when the input
//! was not.

use serde_json::Value;
use smallvec::SmallVec;

use crate::config::ParseLimits;
use crate::error::{Error, Result};
use crate::json::events::{stream_events, EventSink, Scalar};

/// Rebuilds truncated documents into closed, minified JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonRepairer {
    limits: ParseLimits,
}

impl JsonRepairer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ParseLimits) -> Self {
        Self { limits }
    }

    /// Returns the longest well-formed prefix of `data`, completed into
    /// a closed document. Well-formed input passes through minified;
    /// input with no tokenizable prefix rebuilds to an empty string.
    pub fn repair(&self, data: &[u8]) -> Result<String> {
        let mut sink = RepairSink::default();
        match stream_events(data, &mut sink, &self.limits) {
            Ok(()) => {}
            Err(Error::Tokenizer { .. }) => {}
            Err(error) => return Err(error),
        }
        Ok(sink.finish())
    }
}

#[derive(Debug)]
struct Level {
    closer: char,
    /// Whether the next entry at this level needs a leading comma.
    element_added: bool,
}

#[derive(Debug, Default)]
struct RepairSink {
    rebuilt: String,
    open: SmallVec<[Level; 16]>,
    /// A key has been written and its value is still outstanding.
    expecting_value: bool,
}

impl RepairSink {
    fn maybe_comma(&mut self) {
        if self.open.last().is_some_and(|level| level.element_added) {
            self.rebuilt.push(',');
        }
    }

    fn push_value(&mut self, text: &str) {
        self.maybe_comma();
        self.rebuilt.push_str(text);
        if let Some(level) = self.open.last_mut() {
            level.element_added = true;
        }
        self.expecting_value = false;
    }

    fn complete_dangling_key(&mut self) {
        if self.expecting_value {
            self.rebuilt.push_str("null");
            self.expecting_value = false;
        }
    }

    fn open_level(&mut self, opener: char, closer: char) {
        self.maybe_comma();
        self.rebuilt.push(opener);
        self.open.push(Level {
            closer,
            element_added: false,
        });
        self.expecting_value = false;
    }

    fn close_level(&mut self) {
        if let Some(level) = self.open.pop() {
            self.rebuilt.push(level.closer);
        }
        if let Some(parent) = self.open.last_mut() {
            parent.element_added = true;
        }
        self.expecting_value = false;
    }

    fn finish(mut self) -> String {
        self.complete_dangling_key();
        while let Some(level) = self.open.pop() {
            self.rebuilt.push(level.closer);
        }
        self.rebuilt
    }
}

impl EventSink for RepairSink {
    fn start_object(&mut self) -> Result<()> {
        self.open_level('{', '}');
        Ok(())
    }

    fn key(&mut self, key: &str) -> Result<()> {
        self.complete_dangling_key();
        self.maybe_comma();
        self.rebuilt
            .push_str(&Value::String(key.to_owned()).to_string());
        self.rebuilt.push(':');
        self.expecting_value = true;
        if let Some(level) = self.open.last_mut() {
            level.element_added = false;
        }
        Ok(())
    }

    fn end_object(&mut self) -> Result<()> {
        self.complete_dangling_key();
        self.close_level();
        Ok(())
    }

    fn start_array(&mut self) -> Result<()> {
        self.open_level('[', ']');
        Ok(())
    }

    fn end_array(&mut self) -> Result<()> {
        self.close_level();
        Ok(())
    }

    fn scalar(&mut self, value: Scalar<'_>) -> Result<()> {
        let text = match value {
            Scalar::Null => "null".to_owned(),
            Scalar::Bool(value) => value.to_string(),
            Scalar::Int(value) => value.to_string(),
            Scalar::BigInt(value) => value.to_string(),
            Scalar::Double(value) => Value::from(value).to_string(),
            Scalar::Str(value) => Value::String(value.to_owned()).to_string(),
        };
        self.push_value(&text);
        Ok(())
    }
}
