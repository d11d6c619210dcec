use std::ops::{Add, Neg, Sub};

use crate::eval::evaluate_constant;
use crate::expr::{BinaryOp, Expr, UnaryOp};
use crate::format::format_value;

/// `coefficient * var + constant`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct LinearComponents {
    pub coefficient: f64,
    pub constant: f64,
}

impl LinearComponents {
    pub fn constant(value: f64) -> Self {
        Self {
            coefficient: 0.0,
            constant: value,
        }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self {
            coefficient: self.coefficient * factor,
            constant: self.constant * factor,
        }
    }

    /// Human-readable `2x + 3` form used in solution steps.
    pub fn describe(&self, var: &str) -> String {
        if self.coefficient == 0.0 {
            return format_value(self.constant);
        }
        let term = match self.coefficient {
            c if c == 1.0 => var.to_string(),
            c if c == -1.0 => format!("-{var}"),
            c => format!("{}{var}", format_value(c)),
        };
        if self.constant == 0.0 {
            term
        } else if self.constant < 0.0 {
            format!("{term} - {}", format_value(-self.constant))
        } else {
            format!("{term} + {}", format_value(self.constant))
        }
    }
}

impl Add for LinearComponents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            coefficient: self.coefficient + rhs.coefficient,
            constant: self.constant + rhs.constant,
        }
    }
}

impl Sub for LinearComponents {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Neg for LinearComponents {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

/// Decompose `expr` as `a * var + b` when that is syntactically derivable.
/// Subtrees that do not mention `var` count as constants if they evaluate
/// to a finite number. Products and quotients scale by such a constant;
/// powers and function calls of `var` are never linear.
pub fn decompose_linear(expr: &Expr, var: &str) -> Option<LinearComponents> {
    if !expr.contains_var(var) {
        return constant_value(expr).map(LinearComponents::constant);
    }

    match expr {
        Expr::Variable(_) => Some(LinearComponents {
            coefficient: 1.0,
            constant: 0.0,
        }),
        Expr::Unary(UnaryOp::Plus, a) => decompose_linear(a, var),
        Expr::Unary(UnaryOp::Minus, a) => decompose_linear(a, var).map(|c| -c),
        Expr::Binary(BinaryOp::Add, a, b) => {
            Some(decompose_linear(a, var)? + decompose_linear(b, var)?)
        }
        Expr::Binary(BinaryOp::Sub, a, b) => {
            Some(decompose_linear(a, var)? - decompose_linear(b, var)?)
        }
        Expr::Binary(BinaryOp::Mul, a, b) => match (a.contains_var(var), b.contains_var(var)) {
            (false, true) => Some(decompose_linear(b, var)?.scale(constant_value(a)?)),
            (true, false) => Some(decompose_linear(a, var)?.scale(constant_value(b)?)),
            _ => None,
        },
        Expr::Binary(BinaryOp::Div, a, b) if !b.contains_var(var) => {
            let divisor = constant_value(b).filter(|c| *c != 0.0)?;
            Some(decompose_linear(a, var)?.scale(1.0 / divisor))
        }
        Expr::Binary(BinaryOp::Div, _, _) => None,
        Expr::Binary(BinaryOp::Pow, _, _) | Expr::Function(_, _) | Expr::Number(_) => None,
    }
}

fn constant_value(expr: &Expr) -> Option<f64> {
    evaluate_constant(expr).ok().filter(|value| value.is_finite())
}
