//! Code emitters — token walks that turn a checked program into target text.
//!
//! Each emitter walks the token sequence from the start with its own cursor,
//! rebuilding a point table as definitions go by and producing lines for every
//! test statement. Walks are permissive: anything unexpected is skipped and
//! noted in the [`FallbackLog`], never reported as an error.

pub mod fallback_log;
pub mod prolog;
pub mod scheme;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dsl::cursor::Cursor;
use crate::dsl::token::{Token, TokenKind};

pub use fallback_log::{Fallback, FallbackEntry, FallbackLog};
pub use prolog::Prolog;
pub use scheme::Scheme;

/// Output notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Scheme,
    Prolog,
}

impl Target {
    /// Map a command-line mode flag (`-s`, `-p`) to a target.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "-s" => Some(Target::Scheme),
            "-p" => Some(Target::Prolog),
            _ => None,
        }
    }

    /// Run this target's emitter over the tokens.
    pub fn emit(self, tokens: &[Token]) -> Emission {
        match self {
            Target::Scheme => walk(tokens, &mut Scheme),
            Target::Prolog => walk(tokens, &mut Prolog),
        }
    }

    /// The three header lines printed ahead of the generated code.
    pub fn banner(self, file_name: &str) -> [String; 3] {
        match self {
            Target::Scheme => [
                format!("; Processing Input File {file_name}"),
                "; Lexical and Syntax analysis passed".to_string(),
                "; Generating Scheme Code".to_string(),
            ],
            Target::Prolog => [
                format!("/* Processing Input File {file_name}"),
                "   Lexical and Syntax analysis passed".to_string(),
                "   Generating Prolog Code */".to_string(),
            ],
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Scheme => f.write_str("scheme"),
            Target::Prolog => f.write_str("prolog"),
        }
    }
}

/// Lines produced by one walk plus the recoveries it took.
#[derive(Debug, Clone, Default)]
pub struct Emission {
    pub lines: Vec<String>,
    pub fallbacks: FallbackLog,
}

/// Identifier → formatted coordinate literal, for one walk. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct PointTable {
    points: HashMap<String, String>,
}

impl PointTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `id`; returns true if an earlier binding was replaced.
    pub fn define(&mut self, id: &str, literal: String) -> bool {
        self.points.insert(id.to_string(), literal).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.points.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A test statement as read off the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestClause<'a> {
    /// Lexeme of the token after `test(`, normally `triangle` or `square`.
    pub kind: &'a str,
    pub ids: Vec<&'a str>,
    /// Token index of the closing `)`.
    pub pos: usize,
}

impl TestClause<'_> {
    /// Look every identifier up, in order. Undefined points become `""`.
    pub fn resolve<'t>(&self, points: &'t PointTable, log: &mut FallbackLog) -> Vec<&'t str> {
        self.ids
            .iter()
            .map(|id| {
                points.get(id).unwrap_or_else(|| {
                    log.push(
                        self.pos,
                        Fallback::UndefinedPoint {
                            id: id.to_string(),
                        },
                    );
                    ""
                })
            })
            .collect()
    }
}

/// What differs between targets: literal syntax and statement rendering.
pub trait Backend {
    fn point_literal(&self, x: u64, y: u64) -> String;

    fn emit_test(
        &mut self,
        test: &TestClause<'_>,
        points: &PointTable,
        log: &mut FallbackLog,
        out: &mut Vec<String>,
    );

    /// Lines appended once the whole token sequence has been walked.
    fn finish(&mut self, _out: &mut Vec<String>) {}
}

/// Walk `tokens` from the start, feeding statements to `backend`.
pub fn walk<B: Backend>(tokens: &[Token], backend: &mut B) -> Emission {
    let mut cursor = Cursor::new(tokens);
    let mut points = PointTable::new();
    let mut emission = Emission::default();

    while !cursor.is_at_end() {
        match cursor.kind() {
            TokenKind::Id => {
                let pos = cursor.pos();
                if let Some((id, x, y)) = read_point_def(&mut cursor, &mut emission.fallbacks) {
                    if points.define(id, backend.point_literal(x, y)) {
                        emission
                            .fallbacks
                            .push(pos, Fallback::Redefined { id: id.to_string() });
                    }
                }
            }
            TokenKind::Test => {
                if let Some(test) = read_test(&mut cursor, &mut emission.fallbacks) {
                    backend.emit_test(&test, &points, &mut emission.fallbacks, &mut emission.lines);
                }
            }
            _ => cursor.advance(),
        }
    }

    backend.finish(&mut emission.lines);
    emission
}

/// Read `ID = point ( NUM , NUM )` starting at an identifier.
///
/// On a mismatch the statement is abandoned: the cursor steps one token past
/// the point of failure and `None` is returned.
fn read_point_def<'a>(
    cursor: &mut Cursor<'a>,
    log: &mut FallbackLog,
) -> Option<(&'a str, u64, u64)> {
    let id = cursor.lexeme();
    cursor.advance();

    let header = cursor.eat(TokenKind::Assign)
        && cursor.eat(TokenKind::Point)
        && cursor.eat(TokenKind::LeftParen);
    if !header {
        return abandon_point_def(cursor, log, id);
    }
    let x = read_coordinate(cursor, log);
    if !cursor.eat(TokenKind::Comma) {
        return abandon_point_def(cursor, log, id);
    }
    let y = read_coordinate(cursor, log);
    if !cursor.eat(TokenKind::RightParen) {
        return abandon_point_def(cursor, log, id);
    }
    Some((id, x, y))
}

fn abandon_point_def<T>(cursor: &mut Cursor<'_>, log: &mut FallbackLog, id: &str) -> Option<T> {
    log.push(
        cursor.pos(),
        Fallback::AbandonedPointDef { id: id.to_string() },
    );
    cursor.advance();
    None
}

fn read_coordinate(cursor: &mut Cursor<'_>, log: &mut FallbackLog) -> u64 {
    let pos = cursor.pos();
    match cursor.eat_number() {
        Some(Ok(value)) => value,
        Some(Err(lexeme)) => {
            log.push(
                pos,
                Fallback::NumberOutOfRange {
                    lexeme: lexeme.to_string(),
                },
            );
            u64::MAX
        }
        None => {
            log.push(pos, Fallback::MissingNumber);
            0
        }
    }
}

/// Read `test ( KIND , ID (, ID)* )` starting at `test`.
///
/// The kind is whatever token follows `(`; identifiers are collected up to the
/// closing `)` and any other token in between is skipped.
fn read_test<'a>(cursor: &mut Cursor<'a>, log: &mut FallbackLog) -> Option<TestClause<'a>> {
    cursor.advance();
    if !cursor.eat(TokenKind::LeftParen) {
        log.push(cursor.pos(), Fallback::AbandonedTest);
        cursor.advance();
        return None;
    }

    let kind = cursor.lexeme();
    let mut ids = Vec::new();
    while !cursor.check(TokenKind::RightParen) {
        if cursor.is_at_end() {
            log.push(cursor.pos(), Fallback::AbandonedTest);
            return None;
        }
        if cursor.check(TokenKind::Id) {
            ids.push(cursor.lexeme());
            cursor.advance();
            cursor.eat(TokenKind::Comma);
        } else {
            cursor.advance();
        }
    }

    let pos = cursor.pos();
    cursor.advance();
    Some(TestClause { kind, ids, pos })
}
