//! Prolog emitter — query facts per test plus a fixed driver trailer.
//!
//! A `triangle` test also queries every shape predicate in
//! [`TRIANGLE_PREDICATES`] over the same points.

use super::{Backend, FallbackLog, PointTable, TestClause};

/// Extra queries emitted for every triangle test, in output order.
pub const TRIANGLE_PREDICATES: [&str; 10] = [
    "line",
    "triangle",
    "vertical",
    "horizontal",
    "equilateral",
    "isosceles",
    "right",
    "scalene",
    "acute",
    "obtuse",
];

const TRAILER: [&str; 5] = [
    "",
    "/* Query Processing */",
    "writeln(T) :- write(T), nl.",
    "main:- forall(query(Q), Q-> (writeln('yes')) ; (writeln('no'))),",
    "       halt.",
];

/// Points render as `point2d(X, Y)`.
pub struct Prolog;

impl Backend for Prolog {
    fn point_literal(&self, x: u64, y: u64) -> String {
        format!("point2d({x}, {y})")
    }

    fn emit_test(
        &mut self,
        test: &TestClause<'_>,
        points: &PointTable,
        log: &mut FallbackLog,
        out: &mut Vec<String>,
    ) {
        let echoed: String = test.ids.iter().map(|id| format!(", {id}")).collect();
        out.push(String::new());
        out.push(format!("/* Processing test({} {echoed}) */", test.kind));

        let args = test.resolve(points, log).join(", ");
        out.push(query(test.kind, &args));
        if test.kind == "triangle" {
            out.extend(TRIANGLE_PREDICATES.iter().map(|p| query(p, &args)));
        }
    }

    fn finish(&mut self, out: &mut Vec<String>) {
        out.extend(TRAILER.iter().map(|line| line.to_string()));
    }
}

fn query(predicate: &str, args: &str) -> String {
    format!("query({predicate}({args})).")
}
