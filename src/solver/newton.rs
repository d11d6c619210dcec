//! Newton-Raphson root finding on a single-variable expression.
//!
//! See <https://en.wikipedia.org/wiki/Newton%27s_method>.

use log::trace;

use crate::eval::evaluate_at;
use crate::expr::Expr;
use crate::format::format_value;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonRaphson {
    max_iterations: usize,
    derivative_epsilon: f64,
    convergence_epsilon: f64,
}

/// A converged root together with one description per iteration taken.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundRoot {
    pub value: f64,
    pub steps: Vec<String>,
}

impl NewtonRaphson {
    pub const DEFAULT_MAX_ITERATIONS: usize = 12;
    pub const DEFAULT_DERIVATIVE_EPSILON: f64 = 1e-8;
    pub const DEFAULT_CONVERGENCE_EPSILON: f64 = 1e-8;

    pub fn new(max_iterations: usize, derivative_epsilon: f64, convergence_epsilon: f64) -> Self {
        Self {
            max_iterations,
            derivative_epsilon,
            convergence_epsilon,
        }
    }

    /// Iterate from `seed`. Returns `None` if `f` or `f'` cannot be evaluated,
    /// `f'` gets too flat, or the iteration cap is hit before two successive
    /// guesses agree.
    pub fn find_root(
        &self,
        function: &Expr,
        derivative: &Expr,
        var: &str,
        seed: f64,
    ) -> Option<FoundRoot> {
        let mut x = seed;
        let mut steps = Vec::new();
        for iteration in 1..=self.max_iterations {
            let fx = evaluate_at(function, var, x).ok()?;
            let dfx = evaluate_at(derivative, var, x).ok()?;
            if dfx.abs() < self.derivative_epsilon {
                trace!("derivative vanished at {var} = {x}");
                return None;
            }

            let next = x - fx / dfx;
            if !next.is_finite() {
                trace!("iteration {iteration} left the finite range");
                return None;
            }
            trace!("iteration {iteration}: {var} = {x}, f = {fx}, f' = {dfx}, next = {next}");
            steps.push(format!(
                "{var} = {}, f({var}) = {}, f'({var}) = {} → {var} = {}",
                format_value(x),
                format_value(fx),
                format_value(dfx),
                format_value(next),
            ));

            if (next - x).abs() < self.convergence_epsilon {
                return Some(FoundRoot { value: next, steps });
            }
            x = next;
        }
        None
    }
}

impl Default for NewtonRaphson {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_ITERATIONS,
            Self::DEFAULT_DERIVATIVE_EPSILON,
            Self::DEFAULT_CONVERGENCE_EPSILON,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculus::differentiate;
    use crate::parser::parse_expr;
    use crate::simplify::simplify;
    use approx::assert_abs_diff_eq;

    fn root_from(input: &str, seed: f64) -> Option<FoundRoot> {
        let f = parse_expr(input).expect("parse input");
        let df = simplify(differentiate("x", &f));
        NewtonRaphson::default().find_root(&f, &df, "x", seed)
    }

    #[test]
    fn converges_on_quadratic() {
        let root = root_from("x^2 - 4", 5.0).expect("converges");
        assert_abs_diff_eq!(root.value, 2.0, epsilon = 1e-9);
        assert!(!root.steps.is_empty());
        assert!(root.steps.len() <= NewtonRaphson::DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn flat_derivative_aborts() {
        assert_eq!(root_from("x^2 - 4", 0.0), None);
    }

    #[test]
    fn evaluation_failure_aborts() {
        assert_eq!(root_from("1 / x - 1", 0.0), None);
    }

    #[test]
    fn no_real_root_exhausts_iterations() {
        assert_eq!(root_from("x^2 + 1", 5.0), None);
    }
}
