//! Error types for the shape language compiler.

use std::fmt;

/// An error that occurred while checking a program.
///
/// `pos` is the index of the token at which the error was raised. It is kept
/// for callers and tests; the displayed message is fixed text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub message: String,
    pub pos: usize,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SyntaxError,
}

impl CompileError {
    pub fn syntax(message: impl Into<String>, pos: usize) -> Self {
        Self {
            message: message.into(),
            pos,
            kind: ErrorKind::SyntaxError,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::SyntaxError => write!(f, "Syntax error: {}", self.message),
        }
    }
}

impl std::error::Error for CompileError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_no_position() {
        let err = CompileError::syntax("Expected '='", 7);
        assert_eq!(err.to_string(), "Syntax error: Expected '='");
        assert_eq!(err.pos, 7);
    }
}
