//! Expression tree definitions and helpers.

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnaryOp {
    Plus,
    Minus,
}

/// Functions the engine knows how to evaluate, differentiate and (partly)
/// integrate. Names are resolved once, case-insensitively, when the tree is
/// built; anything unrecognized is carried as `Unknown` and only fails when
/// evaluated.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    /// Base-10 logarithm.
    Log,
    Ln,
    Sqrt,
    Exp,
    Unknown(String),
}

#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Number(f64),
    Variable(String),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Unary(UnaryOp, Box<Expr>),
    Function(Func, Vec<Expr>),
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
}

impl Func {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "log" => Func::Log,
            "ln" => Func::Ln,
            "sqrt" => Func::Sqrt,
            "exp" => Func::Exp,
            _ => Func::Unknown(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Log => "log",
            Func::Ln => "ln",
            Func::Sqrt => "sqrt",
            Func::Exp => "exp",
            Func::Unknown(name) => name,
        }
    }

    /// Number of arguments a known function takes. Unknown functions accept
    /// any arity since they can never be evaluated anyway.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Func::Unknown(_) => None,
            _ => Some(1),
        }
    }
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    pub fn as_number(&self) -> Option<f64> {
        if let Expr::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn is_number(&self, value: f64) -> bool {
        matches!(self, Expr::Number(n) if *n == value)
    }

    pub fn contains_var(&self, var: &str) -> bool {
        match self {
            Expr::Number(_) => false,
            Expr::Variable(name) => name == var,
            Expr::Binary(_, a, b) => a.contains_var(var) || b.contains_var(var),
            Expr::Unary(_, a) => a.contains_var(var),
            Expr::Function(_, args) => args.iter().any(|arg| arg.contains_var(var)),
        }
    }

    /// Free variable names in first-encountered order (left to right,
    /// depth first), without duplicates.
    pub fn variables(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_variables(&mut out);
        out
    }

    pub(crate) fn collect_variables(&self, out: &mut Vec<String>) {
        match self {
            Expr::Number(_) => {}
            Expr::Variable(name) => {
                if !out.iter().any(|v| v == name) {
                    out.push(name.clone());
                }
            }
            Expr::Binary(_, a, b) => {
                a.collect_variables(out);
                b.collect_variables(out);
            }
            Expr::Unary(_, a) => a.collect_variables(out),
            Expr::Function(_, args) => {
                for arg in args {
                    arg.collect_variables(out);
                }
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty(self))
    }
}

pub fn num(value: f64) -> Expr {
    Expr::Number(value)
}

pub fn zero() -> Expr {
    Expr::Number(0.0)
}

pub fn one() -> Expr {
    Expr::Number(1.0)
}

pub fn binary(op: BinaryOp, a: Expr, b: Expr) -> Expr {
    Expr::Binary(op, a.boxed(), b.boxed())
}

pub fn add(a: Expr, b: Expr) -> Expr {
    binary(BinaryOp::Add, a, b)
}

pub fn sub(a: Expr, b: Expr) -> Expr {
    binary(BinaryOp::Sub, a, b)
}

pub fn mul(a: Expr, b: Expr) -> Expr {
    binary(BinaryOp::Mul, a, b)
}

pub fn div(a: Expr, b: Expr) -> Expr {
    binary(BinaryOp::Div, a, b)
}

pub fn pow(base: Expr, exp: Expr) -> Expr {
    binary(BinaryOp::Pow, base, exp)
}

pub fn neg(a: Expr) -> Expr {
    Expr::Unary(UnaryOp::Minus, a.boxed())
}

pub fn call(func: Func, arg: Expr) -> Expr {
    Expr::Function(func, vec![arg])
}
