//! Streaming events over a JSON byte buffer
//!
//! A single forward pass over the input drives an [`EventSink`] with
//! container boundaries, member keys, and terminal scalars. Sinks never
//! see a partial token: when the tokenizer rejects the input, the error
//! surfaces after every event for the well-formed prefix has already
//! been delivered.

use jiter::{Jiter, NumberAny, NumberInt, Peek};
use num_bigint::BigInt;

use crate::config::ParseLimits;
use crate::error::{Error, Result};

/// A terminal value as it appears in the event stream.
///
/// Strings borrow the tokenizer's buffer and are only valid for the
/// duration of the callback.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
    Null,
    Bool(bool),
    Int(i64),
    BigInt(BigInt),
    Double(f64),
    Str(&'a str),
}

/// Receiver for the event stream of one document.
pub trait EventSink {
    fn start_object(&mut self) -> Result<()>;
    fn key(&mut self, key: &str) -> Result<()>;
    fn end_object(&mut self) -> Result<()>;
    fn start_array(&mut self) -> Result<()>;
    fn end_array(&mut self) -> Result<()>;
    fn scalar(&mut self, value: Scalar<'_>) -> Result<()>;
}

/// Tokenizes `data` and replays it into `sink`.
///
/// The whole input must be a single document; trailing content is a
/// tokenizer error. Events delivered before the error stand, which lets
/// callers keep the well-formed prefix of a truncated document.
pub fn stream_events<S>(data: &[u8], sink: &mut S, limits: &ParseLimits) -> Result<()>
where
    S: EventSink,
{
    if data.len() > limits.max_input_size {
        return Err(Error::InputTooLarge {
            size: data.len(),
            limit: limits.max_input_size,
        });
    }
    let mut jiter = Jiter::new(data);
    let peek = jiter.peek()?;
    drive_value(&mut jiter, peek, sink, limits, 0)?;
    jiter.finish()?;
    Ok(())
}

fn drive_value<S>(
    jiter: &mut Jiter<'_>,
    peek: Peek,
    sink: &mut S,
    limits: &ParseLimits,
    depth: usize,
) -> Result<()>
where
    S: EventSink,
{
    if depth > limits.max_recursion_depth {
        return Err(Error::RecursionLimit {
            limit: limits.max_recursion_depth,
        });
    }
    if peek == Peek::Object {
        sink.start_object()?;
        let mut next = jiter.known_object()?;
        while let Some(key) = next {
            sink.key(key)?;
            let value_peek = jiter.peek()?;
            drive_value(jiter, value_peek, sink, limits, depth + 1)?;
            next = jiter.next_key()?;
        }
        sink.end_object()
    } else if peek == Peek::Array {
        sink.start_array()?;
        let mut next = jiter.known_array()?;
        while let Some(element_peek) = next {
            drive_value(jiter, element_peek, sink, limits, depth + 1)?;
            next = jiter.array_step()?;
        }
        sink.end_array()
    } else if peek == Peek::Null {
        jiter.known_null()?;
        sink.scalar(Scalar::Null)
    } else if peek == Peek::True || peek == Peek::False {
        let value = jiter.known_bool(peek)?;
        sink.scalar(Scalar::Bool(value))
    } else if peek == Peek::String {
        let value = jiter.known_str()?;
        sink.scalar(Scalar::Str(value))
    } else {
        match jiter.known_number(peek)? {
            NumberAny::Int(NumberInt::Int(value)) => sink.scalar(Scalar::Int(value)),
            NumberAny::Int(NumberInt::BigInt(value)) => sink.scalar(Scalar::BigInt(value)),
            NumberAny::Float(value) => sink.scalar(Scalar::Double(value)),
        }
    }
}
