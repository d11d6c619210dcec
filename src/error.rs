use thiserror::Error;

use crate::lexer::Token;

pub type Result<T> = std::result::Result<T, SolverError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected token {0}")]
    UnexpectedToken(Token),
    #[error("missing closing parenthesis")]
    MissingClosingParen,
    #[error("unexpected trailing input starting at {0}")]
    TrailingTokens(Token),
    #[error("equation must contain '='")]
    MissingEquals,
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),
    #[error("{name} expects {expected} argument(s), got {found}")]
    Arity {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("missing {0} variable")]
    MissingVariable(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),
    #[error("unsupported function '{0}'")]
    UnsupportedFunction(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("could not evaluate: {0}")]
    Evaluation(#[from] EvalError),
    #[error("no numeric solution found for {variable}")]
    NoNumericSolution { variable: String },
}
