//! Limits applied to caller-supplied documents

/// Default maximum accepted input size in bytes (64 MiB).
pub const DEFAULT_MAX_INPUT_SIZE: usize = 64 * 1024 * 1024;

/// Default maximum container nesting depth.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 128;

/// Limits enforced while tokenizing a document.
///
/// The size limit rejects oversized payloads before tokenization starts;
/// the depth limit bounds the recursion of the event pump over nested
/// containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum accepted input size in bytes
    pub max_input_size: usize,
    /// Maximum container nesting depth
    pub max_recursion_depth: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}
