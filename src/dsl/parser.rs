//! Grammar validator for the shape language.
//!
//! ```text
//! STMT_LIST  := STMT (';' STMT)* '.'
//! STMT       := POINT_DEF | TEST_STMT
//! POINT_DEF  := ID '=' 'point' '(' NUM ',' NUM ')'
//! TEST_STMT  := 'test' '(' ('triangle' | 'square') ',' POINT_LIST ')'
//! POINT_LIST := ID (',' ID)*
//! ```
//!
//! The parser is a recognizer: it keeps nothing it matches. It stops at the
//! first mismatch and returns the error to the caller.

use super::cursor::Cursor;
use super::error::CompileError;
use super::token::{Token, TokenKind};

pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            cursor: Cursor::new(tokens),
        }
    }

    pub fn parse(&mut self) -> Result<(), CompileError> {
        self.parse_stmt_list()?;
        if !self.cursor.is_at_end() {
            return Err(self.error("Expected end of input after '.'"));
        }
        Ok(())
    }

    fn parse_stmt_list(&mut self) -> Result<(), CompileError> {
        self.parse_stmt()?;
        while self.cursor.eat(TokenKind::Semicolon) {
            self.parse_stmt()?;
        }
        self.expect(
            TokenKind::Period,
            "Expected '.' at the end of the statement list",
        )
    }

    fn parse_stmt(&mut self) -> Result<(), CompileError> {
        match self.cursor.kind() {
            TokenKind::Id => self.parse_point_def(),
            TokenKind::Test => self.parse_test(),
            _ => Err(self.error("Expected a statement")),
        }
    }

    fn parse_point_def(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::Id, "Expected an identifier")?;
        self.expect(TokenKind::Assign, "Expected '='")?;
        self.expect(TokenKind::Point, "Expected 'point'")?;
        self.expect(TokenKind::LeftParen, "Expected '('")?;
        self.expect(TokenKind::Num, "Expected a number")?;
        self.expect(TokenKind::Comma, "Expected ','")?;
        self.expect(TokenKind::Num, "Expected a number")?;
        self.expect(TokenKind::RightParen, "Expected ')'")
    }

    fn parse_test(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::Test, "Expected 'test'")?;
        self.expect(TokenKind::LeftParen, "Expected '('")?;
        if !(self.cursor.check(TokenKind::Triangle) || self.cursor.check(TokenKind::Square)) {
            return Err(self.error("Expected 'triangle' or 'square'"));
        }
        self.cursor.advance();
        self.expect(TokenKind::Comma, "Expected ','")?;
        self.parse_point_list()?;
        self.expect(TokenKind::RightParen, "Expected ')'")
    }

    fn parse_point_list(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::Id, "Expected an identifier")?;
        while self.cursor.eat(TokenKind::Comma) {
            self.expect(TokenKind::Id, "Expected an identifier")?;
        }
        Ok(())
    }

    // --- Utility methods ---

    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<(), CompileError> {
        if self.cursor.eat(kind) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    fn error(&self, message: &str) -> CompileError {
        CompileError::syntax(message, self.cursor.pos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::lexer::Lexer;

    fn parse(src: &str) -> Result<(), CompileError> {
        let tokens = Lexer::new(src).tokenize();
        Parser::new(&tokens).parse()
    }

    fn message(src: &str) -> String {
        parse(src).unwrap_err().message
    }

    #[test]
    fn parse_single_point() {
        assert!(parse("a = point(1, 2).").is_ok());
    }

    #[test]
    fn parse_full_program() {
        let src = "a = point(0,0); b = point(1,0); c = point(0,1);\n\
                   test(triangle, a, b, c);\n\
                   d = point(1,1); test(square, a, b, d, c).";
        assert!(parse(src).is_ok());
    }

    #[test]
    fn parse_single_identifier_point_list() {
        assert!(parse("test(square, a).").is_ok());
    }

    #[test]
    fn parse_undefined_points_are_grammatical() {
        assert!(parse("test(triangle, x, y, z).").is_ok());
    }

    #[test]
    fn parse_error_empty_input() {
        assert_eq!(message(""), "Expected a statement");
    }

    #[test]
    fn parse_error_missing_period() {
        let err = parse("a = point(1, 2)").unwrap_err();
        assert_eq!(err.message, "Expected '.' at the end of the statement list");
        assert_eq!(err.pos, 8);
    }

    #[test]
    fn parse_error_trailing_tokens() {
        let err = parse("a = point(1, 2). b").unwrap_err();
        assert_eq!(err.message, "Expected end of input after '.'");
        assert_eq!(err.pos, 9);
    }

    #[test]
    fn parse_error_missing_close_paren_in_point() {
        let err = parse("a = point(1, 2; b = point(3, 4).").unwrap_err();
        assert_eq!(err.message, "Expected ')'");
        assert_eq!(err.pos, 7);
    }

    #[test]
    fn parse_error_messages_per_position() {
        let cases = [
            ("a point(1, 2).", "Expected '='"),
            ("a = pt(1, 2).", "Expected 'point'"),
            ("a = point 1, 2).", "Expected '('"),
            ("a = point(x, 2).", "Expected a number"),
            ("a = point(1 2).", "Expected ','"),
            ("a = point(1, ).", "Expected a number"),
            ("test triangle, a).", "Expected '('"),
            ("test(circle, a).", "Expected 'triangle' or 'square'"),
            ("test(square a).", "Expected ','"),
            ("test(square, ).", "Expected an identifier"),
            ("test(square, a, ).", "Expected an identifier"),
            ("test(square, a b).", "Expected ')'"),
            ("= point(1, 2).", "Expected a statement"),
            ("a = point(1, 2);.", "Expected a statement"),
        ];
        for (src, expected) in cases {
            assert_eq!(message(src), expected, "for {src:?}");
        }
    }

    #[test]
    fn parse_error_on_invalid_token() {
        assert_eq!(message("a = point(1, @2)."), "Expected a number");
    }

    #[test]
    fn parse_error_on_keyword_prefixed_identifier() {
        // `pointer` lexes as `point` `er`, so it cannot start a statement.
        assert_eq!(message("pointer = point(1, 2)."), "Expected a statement");
    }

    #[test]
    fn parse_strict_mode_accepts_keyword_prefixed_identifier() {
        let tokens = Lexer::strict("pointer = point(1, 2).").tokenize();
        assert!(Parser::new(&tokens).parse().is_ok());
    }
}
