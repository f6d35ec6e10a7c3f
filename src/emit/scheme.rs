//! Scheme emitter — one `(process-<kind> ...)` form per test statement.

use super::{Backend, FallbackLog, PointTable, TestClause};

/// Points render as `(make-point X Y)`.
pub struct Scheme;

impl Backend for Scheme {
    fn point_literal(&self, x: u64, y: u64) -> String {
        format!("(make-point {x} {y})")
    }

    fn emit_test(
        &mut self,
        test: &TestClause<'_>,
        points: &PointTable,
        log: &mut FallbackLog,
        out: &mut Vec<String>,
    ) {
        let mut line = format!("(process-{}", test.kind);
        for literal in test.resolve(points, log) {
            line.push(' ');
            line.push_str(literal);
        }
        line.push(')');
        out.push(line);
    }
}
