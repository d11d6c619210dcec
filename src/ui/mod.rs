//! String-based helpers for quick usage and rendering.

use crate::calculus::{differentiate as differentiate_expr, integrate as integrate_expr};
use crate::error::Result;
use crate::eval::{evaluate as evaluate_expr, Bindings};
use crate::expr::Expr;
use crate::format::pretty;
use crate::parser::parse_expr;
use crate::simplify::simplify as simplify_expr;

pub fn parse(input: &str) -> Result<Expr> {
    Ok(parse_expr(input)?)
}

pub fn differentiate(input: &str, var: &str) -> Result<Expr> {
    let expr = parse_expr(input)?;
    Ok(simplify_expr(differentiate_expr(var, &expr)))
}

pub fn diff(input: &str, var: &str) -> Result<String> {
    Ok(pretty(&differentiate(input, var)?))
}

/// Antiderivative without the constant of integration, if a rule applies.
pub fn integrate(input: &str, var: &str) -> Result<Option<Expr>> {
    let expr = simplify_expr(parse_expr(input)?);
    Ok(integrate_expr(var, &expr).map(simplify_expr))
}

pub fn inte(input: &str, var: &str) -> Result<String> {
    Ok(match integrate(input, var)? {
        Some(result) => format!("{} + C", pretty(&result)),
        None => format!("∫ {} d{var} + C", pretty(&parse_expr(input)?)),
    })
}

pub fn simplify(input: &str) -> Result<Expr> {
    Ok(simplify_expr(parse_expr(input)?))
}

pub fn simp(input: &str) -> Result<String> {
    Ok(pretty(&simplify(input)?))
}

pub fn evaluate(input: &str, bindings: &[(&str, f64)]) -> Result<f64> {
    let expr = parse_expr(input)?;
    let bindings: Bindings = bindings
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect();
    Ok(evaluate_expr(&expr, &bindings)?)
}
