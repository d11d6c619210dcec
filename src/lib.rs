//! Step-by-step solving of recognized math problems: parsing expressions
//! and equations, simplification, symbolic differentiation, rule-based
//! integration, and linear, Newton-Raphson and separable differential
//! equation solving.

pub mod calculus;
pub mod classify;
pub mod error;
pub mod eval;
pub mod expr;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod prelude;
pub mod simplify;
pub mod solver;
pub mod ui;

#[cfg(test)]
mod proptests;

pub use calculus::{differentiate, integrate};
pub use classify::{classify, normalize_input, ProblemKind};
pub use error::{EvalError, ParseError, Result, SolverError};
pub use eval::{evaluate, evaluate_at, evaluate_constant, Bindings};
pub use expr::{add, call, div, mul, neg, num, one, pow, sub, zero, BinaryOp, Expr, Func, UnaryOp};
pub use format::{format_value, pretty, pretty_solution};
pub use lexer::{tokenize, Token};
pub use parser::{parse_equation, parse_expr};
pub use simplify::simplify;
pub use solver::{
    decompose_linear, solve, FoundRoot, LinearComponents, NewtonRaphson, SolutionResult,
    SolutionStep, Solver, SolverConfig,
};
