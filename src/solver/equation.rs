use log::debug;

use super::linear::decompose_linear;
use super::{ProblemKind, SolutionResult, SolutionStep, SolverConfig};
use crate::calculus::differentiate;
use crate::error::{Result, SolverError};
use crate::expr::{sub, Expr};
use crate::format::format_value;
use crate::parser::parse_equation;
use crate::simplify::simplify;

const DEFAULT_VARIABLE: &str = "x";

pub(super) fn solve_equation(config: &SolverConfig, text: &str) -> Result<SolutionResult> {
    let (lhs, rhs) = parse_equation(text)?;

    let mut variables = lhs.variables();
    rhs.collect_variables(&mut variables);
    let var = variables
        .into_iter()
        .next()
        .unwrap_or_else(|| DEFAULT_VARIABLE.to_string());

    if let Some(result) = solve_linear(config, &lhs, &rhs, &var) {
        return Ok(result);
    }
    debug!("equation is not linear in {var}; trying Newton-Raphson");
    solve_nonlinear(config, &lhs, &rhs, &var)
}

fn solve_linear(config: &SolverConfig, lhs: &Expr, rhs: &Expr, var: &str) -> Option<SolutionResult> {
    let left = decompose_linear(lhs, var)?;
    let right = decompose_linear(rhs, var)?;

    let a = left.coefficient - right.coefficient;
    let b = right.constant - left.constant;
    if a.abs() <= config.linear_epsilon {
        return None;
    }

    let (a_str, b_str) = (format_value(a), format_value(b));
    let answer = format!("{var} = {}", format_value(b / a));
    let steps = vec![
        SolutionStep::new(
            "Collect like terms",
            format!("{} = {}", left.describe(var), right.describe(var)),
        ),
        SolutionStep::new("Simplify", format!("{a_str}{var} = {b_str}")),
        SolutionStep::new("Divide", format!("Divide both sides by {a_str}")),
        SolutionStep::new("Solution", answer.clone()),
    ];
    Some(SolutionResult::new(answer, steps, ProblemKind::Equation))
}

fn solve_nonlinear(config: &SolverConfig, lhs: &Expr, rhs: &Expr, var: &str) -> Result<SolutionResult> {
    let difference = simplify(sub(lhs.clone(), rhs.clone()));
    let derivative = simplify(differentiate(var, &difference));
    let newton = config.newton();

    for &seed in &config.seeds {
        let Some(root) = newton.find_root(&difference, &derivative, var, seed) else {
            debug!("Newton-Raphson from {var} = {seed} did not converge");
            continue;
        };

        let answer = format!("{var} = {}", format_value(root.value));
        let mut steps = vec![
            SolutionStep::new("Rearrange", format!("f({var}) = {difference} = 0")),
            SolutionStep::new("Differentiate", format!("f'({var}) = {derivative}")),
            SolutionStep::new(
                "Initial guess",
                format!("Start Newton-Raphson at {var} = {}", format_value(seed)),
            ),
        ];
        steps.extend(
            root.steps
                .into_iter()
                .enumerate()
                .map(|(i, step)| SolutionStep::new(format!("Iteration {}", i + 1), step)),
        );
        steps.push(SolutionStep::new("Solution", answer.clone()));
        return Ok(SolutionResult::new(answer, steps, ProblemKind::Equation));
    }

    Err(SolverError::NoNumericSolution {
        variable: var.to_string(),
    })
}
