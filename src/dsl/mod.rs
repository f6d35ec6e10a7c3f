//! Shape language front end — source → tokens → grammar check.
//!
//! The [`Compiler`] ties the front end to the emitters: a program is lexed,
//! validated, and only then walked by exactly one target emitter.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use error::{CompileError, ErrorKind};
pub use lexer::LexMode;
pub use token::{Token, TokenKind};

use crate::emit::{FallbackLog, Target};
use lexer::Lexer;
use parser::Parser;

/// The result of compiling a program for one target.
#[derive(Debug, Clone)]
pub struct CompiledProgram {
    pub target: Target,
    pub lines: Vec<String>,
    pub fallbacks: FallbackLog,
}

/// The shape language compiler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compiler {
    mode: LexMode,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: LexMode) -> Self {
        Self { mode }
    }

    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        Lexer::with_mode(source, self.mode).tokenize()
    }

    /// Lex and validate, returning the accepted tokens.
    pub fn check(&self, source: &str) -> Result<Vec<Token>, CompileError> {
        let tokens = self.tokenize(source);
        Parser::new(&tokens).parse()?;
        Ok(tokens)
    }

    /// Lex, validate, and emit code for `target`.
    pub fn compile(&self, source: &str, target: Target) -> Result<CompiledProgram, CompileError> {
        let tokens = self.check(source)?;
        Ok(Self::emit(&tokens, target))
    }

    /// Emit code from tokens that have already passed [`Compiler::check`].
    pub fn emit(tokens: &[Token], target: Target) -> CompiledProgram {
        let emission = target.emit(tokens);
        CompiledProgram {
            target,
            lines: emission.lines,
            fallbacks: emission.fallbacks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_rejects_before_emitting() {
        let err = Compiler::new()
            .compile("a = point(1, 2", Target::Prolog)
            .unwrap_err();
        assert_eq!(err.to_string(), "Syntax error: Expected ')'");
    }

    #[test]
    fn compile_valid_program_has_no_fallbacks() {
        let out = Compiler::new()
            .compile("a = point(1, 2); test(square, a).", Target::Scheme)
            .unwrap();
        assert_eq!(out.target, Target::Scheme);
        assert_eq!(out.lines, vec!["(process-square (make-point 1 2))"]);
        assert!(out.fallbacks.is_empty());
    }

    #[test]
    fn strict_mode_compiles_keyword_prefixed_names() {
        let out = Compiler::with_mode(LexMode::Strict)
            .compile("pointer = point(1, 2); test(square, pointer).", Target::Scheme)
            .unwrap();
        assert_eq!(out.lines, vec!["(process-square (make-point 1 2))"]);
    }

    #[test]
    fn default_mode_rejects_keyword_prefixed_names() {
        assert!(Compiler::new()
            .check("pointer = point(1, 2).")
            .is_err());
    }
}
