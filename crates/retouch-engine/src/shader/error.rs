use std::fmt;

/// Failure to resolve `#import` directives in a WGSL stage body.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeError {
    pub message: String,
    /// 1-based line of the offending directive.
    pub line: usize,
}

impl ComposeError {
    pub(crate) fn new(msg: impl Into<String>, line: usize) -> Self {
        Self { message: msg.into(), line }
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wgsl compose error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ComposeError {}
