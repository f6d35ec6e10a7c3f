//! Lexer for the shape language.
//!
//! Converts source text into a sequence of [`Token`]s. Lexing never fails:
//! a character no pattern accepts becomes a one-character
//! [`TokenKind::Invalid`] token and rejection is left to the parser.
//!
//! Patterns are tried in a fixed priority order and the first one matching a
//! prefix of the remaining input wins. Keywords come before identifiers, so by
//! default `pointer` lexes as `point` followed by the identifier `er`.
//! [`LexMode::Strict`] requires a word boundary after a keyword instead.

use super::token::{Token, TokenKind};

/// How keyword prefixes are resolved against identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexMode {
    /// First pattern in priority order wins, even mid-word.
    #[default]
    Priority,
    /// A keyword only matches when not followed by an identifier character.
    Strict,
}

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Keyword(&'static str, TokenKind),
    Digits,
    Punct(char, TokenKind),
    Ident,
}

const PATTERNS: [Pattern; 12] = [
    Pattern::Keyword("point", TokenKind::Point),
    Pattern::Keyword("triangle", TokenKind::Triangle),
    Pattern::Keyword("square", TokenKind::Square),
    Pattern::Keyword("test", TokenKind::Test),
    Pattern::Digits,
    Pattern::Punct('=', TokenKind::Assign),
    Pattern::Punct(';', TokenKind::Semicolon),
    Pattern::Punct(',', TokenKind::Comma),
    Pattern::Punct('.', TokenKind::Period),
    Pattern::Punct('(', TokenKind::LeftParen),
    Pattern::Punct(')', TokenKind::RightParen),
    Pattern::Ident,
];

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    mode: LexMode,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self::with_mode(source, LexMode::Priority)
    }

    pub fn strict(source: &str) -> Self {
        Self::with_mode(source, LexMode::Strict)
    }

    pub fn with_mode(source: &str, mode: LexMode) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            mode,
        }
    }

    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }

            let matched = PATTERNS
                .iter()
                .find_map(|&pattern| self.match_len(pattern).map(|len| (pattern, len)));

            let token = match matched {
                Some((pattern, len)) => {
                    let lexeme: String = self.chars[self.pos..self.pos + len].iter().collect();
                    self.pos += len;
                    Token::new(kind_of(pattern), lexeme)
                }
                None => {
                    let ch = self.chars[self.pos];
                    self.pos += 1;
                    Token::new(TokenKind::Invalid, ch.to_string())
                }
            };

            tokens.push(token);
        }

        tokens
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek_at(0) {
            self.pos += 1;
        }
    }

    /// Length of the prefix `pattern` matches at the current position.
    fn match_len(&self, pattern: Pattern) -> Option<usize> {
        match pattern {
            Pattern::Keyword(word, _) => {
                let len = word.chars().count();
                let hit = word
                    .chars()
                    .enumerate()
                    .all(|(i, c)| self.peek_at(i) == Some(c));
                if !hit {
                    return None;
                }
                if self.mode == LexMode::Strict && self.peek_at(len).is_some_and(is_ident_tail) {
                    return None;
                }
                Some(len)
            }
            Pattern::Digits => {
                let len = self.run_len(0, |c| c.is_ascii_digit());
                (len > 0).then_some(len)
            }
            Pattern::Punct(ch, _) => (self.peek_at(0) == Some(ch)).then_some(1),
            Pattern::Ident => match self.peek_at(0) {
                Some(c) if c.is_ascii_lowercase() => Some(1 + self.run_len(1, is_ident_tail)),
                _ => None,
            },
        }
    }

    fn run_len(&self, start: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut len = 0;
        while self.peek_at(start + len).is_some_and(&pred) {
            len += 1;
        }
        len
    }
}

fn kind_of(pattern: Pattern) -> TokenKind {
    match pattern {
        Pattern::Keyword(_, kind) | Pattern::Punct(_, kind) => kind,
        Pattern::Digits => TokenKind::Num,
        Pattern::Ident => TokenKind::Id,
    }
}

fn is_ident_tail(c: char) -> bool {
    c.is_ascii_lowercase() || c == '_'
}
