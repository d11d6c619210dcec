use crate::eval::{apply_binary, apply_function, apply_unary};
use crate::expr::{binary, one, zero, BinaryOp, Expr, Func, UnaryOp};

/// Simplify children first, then the node itself. One pass only: the result
/// can still contain foldable subtrees (e.g. `(2 * x) * 3`).
pub fn simplify(expr: Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Variable(_) => expr,
        Expr::Binary(op, a, b) => simplify_binary(op, simplify(*a), simplify(*b)),
        Expr::Unary(op, a) => simplify_unary(op, simplify(*a)),
        Expr::Function(func, args) => {
            simplify_call(func, args.into_iter().map(simplify).collect())
        }
    }
}

pub fn simplify_binary(op: BinaryOp, x: Expr, y: Expr) -> Expr {
    if let (Some(a), Some(b)) = (x.as_number(), y.as_number()) {
        // Folding is total: a literal division by zero becomes NaN here and
        // is reported by evaluation instead.
        return Expr::Number(apply_binary(op, a, b).unwrap_or(f64::NAN));
    }

    match op {
        BinaryOp::Add => match (x, y) {
            (x, y) if is_zero(&x) => y,
            (x, y) if is_zero(&y) => x,
            (x, y) => binary(op, x, y),
        },
        BinaryOp::Sub => match (x, y) {
            (x, y) if is_zero(&y) => x,
            (x, y) if is_zero(&x) => simplify_unary(UnaryOp::Minus, y),
            (x, y) => binary(op, x, y),
        },
        BinaryOp::Mul => match (x, y) {
            (x, y) if is_zero(&x) || is_zero(&y) => zero(),
            (x, y) if is_one(&x) => y,
            (x, y) if is_one(&y) => x,
            (x, y) => binary(op, x, y),
        },
        BinaryOp::Div => match (x, y) {
            (x, y) if is_one(&y) => x,
            (x, y) => binary(op, x, y),
        },
        BinaryOp::Pow => match (x, y) {
            (_, y) if is_zero(&y) => one(),
            (x, y) if is_one(&y) => x,
            (x, y) => binary(op, x, y),
        },
    }
}

pub fn simplify_unary(op: UnaryOp, x: Expr) -> Expr {
    match (op, x) {
        (_, Expr::Number(n)) => Expr::Number(apply_unary(op, n)),
        (UnaryOp::Plus, x) => x,
        (UnaryOp::Minus, Expr::Unary(UnaryOp::Minus, inner)) => *inner,
        (UnaryOp::Minus, x) => Expr::Unary(UnaryOp::Minus, x.boxed()),
    }
}

/// Fold a call on a single literal argument through the evaluation table;
/// calls that cannot be evaluated are kept as written.
pub fn simplify_call(func: Func, args: Vec<Expr>) -> Expr {
    if let [Expr::Number(n)] = args.as_slice() {
        if let Ok(value) = apply_function(&func, &[*n]) {
            return Expr::Number(value);
        }
    }
    Expr::Function(func, args)
}

fn is_zero(expr: &Expr) -> bool {
    expr.is_number(0.0)
}

fn is_one(expr: &Expr) -> bool {
    expr.is_number(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{add, call, mul, neg, num, pow};
    use crate::parser::parse_expr;

    fn simp(input: &str) -> Expr {
        simplify(parse_expr(input).expect("parse input"))
    }

    fn x() -> Expr {
        Expr::var("x")
    }

    #[test]
    fn folds_literals() {
        assert_eq!(simp("2 + 3 * 4"), num(14.0));
        assert_eq!(simp("-(3)"), num(-3.0));
        assert_eq!(simp("cos(0)"), num(1.0));
        assert_eq!(simp("x + 2 * 3"), add(x(), num(6.0)));
    }

    #[test]
    fn literal_division_by_zero_folds_to_nan() {
        assert!(simp("1 / 0").as_number().unwrap().is_nan());
    }

    #[test]
    fn identities() {
        assert_eq!(simp("x * 1 + 0"), x());
        assert_eq!(simp("0 * sin(x)"), num(0.0));
        assert_eq!(simp("x^1 / 1"), x());
        assert_eq!(simp("(x + 1)^0"), num(1.0));
        assert_eq!(simp("0 - x"), neg(x()));
        assert_eq!(simp("--x"), x());
        assert_eq!(simp("+x"), x());
    }

    #[test]
    fn unknown_functions_are_left_alone() {
        assert_eq!(
            simp("foo(2)"),
            Expr::Function(Func::Unknown("foo".to_string()), vec![num(2.0)])
        );
        assert_eq!(simp("sin(x * 1)"), call(Func::Sin, x()));
    }

    #[test]
    fn single_pass_leaves_nested_constants() {
        assert_eq!(
            simp("2 * x * 3"),
            mul(mul(num(2.0), x()), num(3.0))
        );
        assert_eq!(simp("x^(1 + 1)"), pow(x(), num(2.0)));
    }
}
