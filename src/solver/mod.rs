//! Problem solving: classify recognized text, build expression trees and
//! apply the strategy for the problem kind, recording the steps taken.

mod calculus;
mod equation;
mod extract;
pub mod linear;
pub mod newton;

use std::fmt;

use log::debug;

use crate::classify::{classify, normalize_input};
use crate::error::Result;
use crate::eval::evaluate_constant;
use crate::format::{format_value, pretty_solution};
use crate::parser::parse_expr;
use crate::simplify::simplify;

pub use crate::classify::ProblemKind;
pub use linear::{decompose_linear, LinearComponents};
pub use newton::{FoundRoot, NewtonRaphson};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionStep {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionResult {
    pub final_answer: String,
    pub steps: Vec<SolutionStep>,
    pub kind: ProblemKind,
}

/// Numeric knobs for the equation solver.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Starting points tried in order by Newton-Raphson.
    pub seeds: Vec<f64>,
    pub max_iterations: usize,
    pub derivative_epsilon: f64,
    pub convergence_epsilon: f64,
    /// A linear coefficient at or below this is treated as zero.
    pub linear_epsilon: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl SolutionStep {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl SolutionResult {
    pub fn new(final_answer: impl Into<String>, steps: Vec<SolutionStep>, kind: ProblemKind) -> Self {
        Self {
            final_answer: final_answer.into(),
            steps,
            kind,
        }
    }
}

impl fmt::Display for SolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", pretty_solution(self).join("\n"))
    }
}

impl SolverConfig {
    pub const DEFAULT_SEEDS: [f64; 5] = [-10.0, -5.0, 0.0, 5.0, 10.0];
    pub const DEFAULT_LINEAR_EPSILON: f64 = 1e-10;

    pub fn newton(&self) -> NewtonRaphson {
        NewtonRaphson::new(
            self.max_iterations,
            self.derivative_epsilon,
            self.convergence_epsilon,
        )
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            seeds: Self::DEFAULT_SEEDS.to_vec(),
            max_iterations: NewtonRaphson::DEFAULT_MAX_ITERATIONS,
            derivative_epsilon: NewtonRaphson::DEFAULT_DERIVATIVE_EPSILON,
            convergence_epsilon: NewtonRaphson::DEFAULT_CONVERGENCE_EPSILON,
            linear_epsilon: Self::DEFAULT_LINEAR_EPSILON,
        }
    }
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self, input: &str) -> Result<SolutionResult> {
        let text = normalize_input(input);
        let kind = classify(&text);
        debug!("solving {text:?} as {kind}");
        match kind {
            ProblemKind::Expression => solve_expression(&text),
            ProblemKind::Derivative => calculus::solve_derivative(&text),
            ProblemKind::Integral => calculus::solve_integral(&text),
            ProblemKind::DifferentialEquation => calculus::solve_differential_equation(&text),
            ProblemKind::Equation => equation::solve_equation(&self.config, &text),
        }
    }
}

/// Solve recognized text with the default configuration.
pub fn solve(input: &str) -> Result<SolutionResult> {
    Solver::default().solve(input)
}

fn solve_expression(text: &str) -> Result<SolutionResult> {
    let expr = parse_expr(text)?;
    let simplified = simplify(expr.clone());
    let mut steps = vec![SolutionStep::new(
        "Simplify",
        format!("{expr} = {simplified}"),
    )];

    if !simplified.variables().is_empty() {
        return Ok(SolutionResult::new(
            simplified.to_string(),
            steps,
            ProblemKind::Expression,
        ));
    }

    // Evaluate the tree as written where possible: folding turns a literal
    // `1 / 0` into NaN, evaluation reports it. `0 * x` only folds away.
    let source = if expr.variables().is_empty() { &expr } else { &simplified };
    let value = format_value(evaluate_constant(source)?);
    steps.push(SolutionStep::new("Evaluate", format!("{simplified} = {value}")));
    Ok(SolutionResult::new(value, steps, ProblemKind::Expression))
}
