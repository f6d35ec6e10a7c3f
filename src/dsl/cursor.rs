//! Cursor over a token slice.
//!
//! Every pass (the parser and each emitter) owns its own cursor starting at
//! zero. Reading past the end is not an error: there is simply no current
//! token, and nothing matches.

use super::token::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Kind of the current token; past the end this reads as `Invalid`.
    pub fn kind(&self) -> TokenKind {
        self.peek().map_or(TokenKind::Invalid, |t| t.kind)
    }

    /// Lexeme of the current token; empty past the end.
    pub fn lexeme(&self) -> &'a str {
        self.peek().map_or("", |t| t.lexeme.as_str())
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.kind() == kind
    }

    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Advance past the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a numeric literal.
    ///
    /// Returns `None` without moving if the current token is not a number,
    /// and `Some(Err(lexeme))` if the digits do not fit in a `u64`.
    pub fn eat_number(&mut self) -> Option<Result<u64, &'a str>> {
        let token = self.peek().filter(|t| t.kind == TokenKind::Num)?;
        self.advance();
        Some(token.lexeme.parse().map_err(|_| token.lexeme.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::lexer::Lexer;

    #[test]
    fn eat_matches_and_advances() {
        let tokens = Lexer::new("a = 1").tokenize();
        let mut cursor = Cursor::new(&tokens);
        assert!(!cursor.eat(TokenKind::Assign));
        assert!(cursor.eat(TokenKind::Id));
        assert!(cursor.eat(TokenKind::Assign));
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn past_the_end_reads_as_invalid() {
        let tokens = Lexer::new("a").tokenize();
        let mut cursor = Cursor::new(&tokens);
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.kind(), TokenKind::Invalid);
        assert_eq!(cursor.lexeme(), "");
        assert!(!cursor.check(TokenKind::Invalid));
    }

    #[test]
    fn eat_number_parses_digits() {
        let tokens = Lexer::new("042 x").tokenize();
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.eat_number(), Some(Ok(42)));
        assert_eq!(cursor.eat_number(), None);
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn eat_number_overflow() {
        let tokens = Lexer::new("99999999999999999999999").tokenize();
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.eat_number(), Some(Err("99999999999999999999999")));
        assert!(cursor.is_at_end());
    }
}
