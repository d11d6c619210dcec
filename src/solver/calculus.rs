use log::debug;

use super::extract::{derivative_parts, differential_equation_parts, integral_parts};
use super::{ProblemKind, SolutionResult, SolutionStep};
use crate::calculus::{differentiate, integrate};
use crate::error::Result;
use crate::expr::Expr;
use crate::parser::parse_expr;
use crate::simplify::simplify;

const DEPENDENT_VARIABLE: &str = "y";

pub(super) fn solve_derivative(text: &str) -> Result<SolutionResult> {
    let (var, target) = derivative_parts(text)?;
    let expr = simplify(parse_expr(&target)?);
    let derivative = differentiate(&var, &expr);
    let simplified = simplify(derivative.clone());

    let steps = vec![
        SolutionStep::new(
            "Differentiate",
            format!("d/d{var} [{expr}] = {derivative}"),
        ),
        SolutionStep::new("Simplify", simplified.to_string()),
    ];
    Ok(SolutionResult::new(
        simplified.to_string(),
        steps,
        ProblemKind::Derivative,
    ))
}

pub(super) fn solve_integral(text: &str) -> Result<SolutionResult> {
    let (var, integrand) = integral_parts(text);
    let integrand = simplify(parse_expr(&integrand)?);
    let unresolved = format!("∫ {integrand} d{var}");

    let mut steps = vec![SolutionStep::new(
        "Identify the integrand",
        format!("{unresolved}, integrating with respect to {var}"),
    )];

    let answer = match antiderivative(&var, &integrand) {
        Some(result) => {
            steps.push(SolutionStep::new(
                "Apply integration rules",
                format!("{unresolved} = {result}"),
            ));
            format!("{result} + C")
        }
        None => {
            steps.push(SolutionStep::new(
                "No closed form",
                "No antiderivative rule applies; the integral is left unevaluated",
            ));
            format!("{unresolved} + C")
        }
    };
    steps.push(SolutionStep::new("Add the constant of integration", answer.clone()));
    Ok(SolutionResult::new(answer, steps, ProblemKind::Integral))
}

/// Separable `dy/dx = f(x)`: integrate the right-hand side directly.
pub(super) fn solve_differential_equation(text: &str) -> Result<SolutionResult> {
    let (var, rhs) = differential_equation_parts(text)?;
    let rhs = simplify(parse_expr(&rhs)?);
    let unresolved = format!("∫ {rhs} d{var}");

    let mut steps = vec![
        SolutionStep::new(
            "Separate variables",
            format!("d{DEPENDENT_VARIABLE} = ({rhs}) d{var}"),
        ),
        SolutionStep::new(
            "Integrate both sides",
            format!("∫ d{DEPENDENT_VARIABLE} = {unresolved}"),
        ),
    ];

    // A right-hand side in `y` is not separable by direct integration.
    let result = if rhs.contains_var(DEPENDENT_VARIABLE) {
        debug!("right-hand side depends on {DEPENDENT_VARIABLE}; leaving it unevaluated");
        None
    } else {
        antiderivative(&var, &rhs)
    };

    let answer = match result {
        Some(result) => format!("{DEPENDENT_VARIABLE} = {result} + C"),
        None => format!("{DEPENDENT_VARIABLE} = {unresolved} + C"),
    };
    steps.push(SolutionStep::new("Solution", answer.clone()));
    Ok(SolutionResult::new(
        answer,
        steps,
        ProblemKind::DifferentialEquation,
    ))
}

fn antiderivative(var: &str, integrand: &Expr) -> Option<Expr> {
    let result = integrate(var, integrand).map(simplify);
    if result.is_none() {
        debug!("no antiderivative rule for {integrand} in {var}");
    }
    result
}
