//! Token types for the shape language lexer.

use std::fmt;

/// A token produced by the lexer: a kind plus the exact source text it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Point,
    Triangle,
    Square,
    Test,

    // Literals
    Id,
    Num,

    // Punctuation
    Assign,     // =
    Semicolon,  // ;
    Comma,      // ,
    Period,     // .
    LeftParen,  // (
    RightParen, // )

    // Any character no pattern accepts
    Invalid,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Id => "id",
            TokenKind::Point => "point",
            TokenKind::Num => "num",
            TokenKind::Assign => "assign",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Comma => "comma",
            TokenKind::Period => "period",
            TokenKind::LeftParen => "left_paren",
            TokenKind::RightParen => "right_paren",
            TokenKind::Triangle => "triangle",
            TokenKind::Square => "square",
            TokenKind::Test => "test",
            TokenKind::Invalid => "invalid",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Point | TokenKind::Triangle | TokenKind::Square | TokenKind::Test
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(TokenKind::LeftParen.to_string(), "left_paren");
        assert_eq!(TokenKind::Id.to_string(), "id");
        assert_eq!(TokenKind::Invalid.to_string(), "invalid");
    }

    #[test]
    fn keyword_kinds() {
        assert!(TokenKind::Point.is_keyword());
        assert!(TokenKind::Test.is_keyword());
        assert!(!TokenKind::Id.is_keyword());
        assert!(!TokenKind::Num.is_keyword());
    }
}
