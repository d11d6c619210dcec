//! Numeric evaluation of expression trees under variable bindings.

use std::collections::HashMap;

use crate::error::EvalError;
use crate::expr::{BinaryOp, Expr, Func, UnaryOp};

pub type Bindings = HashMap<String, f64>;

pub fn evaluate(expr: &Expr, bindings: &Bindings) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Variable(name) => bindings
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
        Expr::Binary(op, a, b) => {
            let lhs = evaluate(a, bindings)?;
            let rhs = evaluate(b, bindings)?;
            apply_binary(*op, lhs, rhs)
        }
        Expr::Unary(op, a) => Ok(apply_unary(*op, evaluate(a, bindings)?)),
        Expr::Function(func, args) => {
            let values = args
                .iter()
                .map(|arg| evaluate(arg, bindings))
                .collect::<Result<Vec<_>, _>>()?;
            apply_function(func, &values)
        }
    }
}

/// Evaluate with no bindings at all; succeeds only for variable-free trees.
pub fn evaluate_constant(expr: &Expr) -> Result<f64, EvalError> {
    evaluate(expr, &Bindings::new())
}

/// Evaluate with a single variable bound.
pub fn evaluate_at(expr: &Expr, var: &str, value: f64) -> Result<f64, EvalError> {
    let mut bindings = Bindings::new();
    bindings.insert(var.to_string(), value);
    evaluate(expr, &bindings)
}

pub fn apply_binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Sub => Ok(lhs - rhs),
        BinaryOp::Mul => Ok(lhs * rhs),
        BinaryOp::Div if rhs == 0.0 => Err(EvalError::DivisionByZero),
        BinaryOp::Div => Ok(lhs / rhs),
        BinaryOp::Pow => Ok(lhs.powf(rhs)),
    }
}

pub fn apply_unary(op: UnaryOp, value: f64) -> f64 {
    match op {
        UnaryOp::Plus => value,
        UnaryOp::Minus => -value,
    }
}

pub fn apply_function(func: &Func, args: &[f64]) -> Result<f64, EvalError> {
    let apply: fn(f64) -> f64 = match func {
        Func::Sin => f64::sin,
        Func::Cos => f64::cos,
        Func::Tan => f64::tan,
        Func::Log => f64::log10,
        Func::Ln => f64::ln,
        Func::Sqrt => f64::sqrt,
        Func::Exp => f64::exp,
        Func::Unknown(name) => return Err(EvalError::UnsupportedFunction(name.clone())),
    };
    // Arity is checked when a call is parsed; only hand-built trees can get here empty.
    let x = args
        .first()
        .ok_or_else(|| EvalError::UnsupportedFunction(func.name().to_string()))?;
    Ok(apply(*x))
}
