use crate::expr::{BinaryOp, Expr, UnaryOp};

/// Render an expression so that parsing the output yields an equivalent
/// tree. Binary operators are spaced (`2 * x + 3`) except `^`.
pub fn pretty(expr: &Expr) -> String {
    fn pp(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::Number(n) if *n < 0.0 => bracket(ctx, 4, show_number(*n)),
            Expr::Number(n) => show_number(*n),
            Expr::Variable(v) => v.clone(),

            Expr::Binary(BinaryOp::Add, a, b) => {
                let (neg_b, b_inner) = split_neg(b);
                let sign = if neg_b { "-" } else { "+" };
                bracket(ctx, 1, format!("{} {sign} {}", pp(1, a), pp(2, &b_inner)))
            }
            Expr::Binary(BinaryOp::Sub, a, b) => {
                let (neg_b, b_inner) = split_neg(b);
                let sign = if neg_b { "+" } else { "-" };
                bracket(ctx, 1, format!("{} {sign} {}", pp(1, a), pp(2, &b_inner)))
            }
            Expr::Binary(op @ (BinaryOp::Mul | BinaryOp::Div), a, b) => bracket(
                ctx,
                2,
                format!("{} {} {}", pp(2, a), op.symbol(), pp(3, b)),
            ),
            // `^` is left-associative, so only the exponent needs brackets
            // when it is itself a power.
            Expr::Binary(BinaryOp::Pow, a, b) => {
                bracket(ctx, 3, format!("{}^{}", pp(3, a), pp(4, b)))
            }

            Expr::Unary(UnaryOp::Plus, a) => bracket(ctx, 4, format!("+{}", pp(4, a))),
            Expr::Unary(UnaryOp::Minus, a) => bracket(ctx, 4, format!("-{}", pp(4, a))),

            Expr::Function(func, args) => {
                let args: Vec<String> = args.iter().map(|arg| pp(0, arg)).collect();
                format!("{}({})", func.name(), args.join(", "))
            }
        }
    }

    pp(0, expr)
}

fn split_neg(expr: &Expr) -> (bool, Expr) {
    match expr {
        Expr::Unary(UnaryOp::Minus, inner) => (true, *inner.clone()),
        Expr::Number(n) if *n < 0.0 => (true, Expr::Number(-n)),
        other => (false, other.clone()),
    }
}

fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("({body})")
    } else {
        body
    }
}

fn show_number(n: f64) -> String {
    if n == 0.0 {
        // Avoid printing `-0`.
        "0".to_string()
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{add, div, mul, neg, num, pow, sub};

    fn x() -> Expr {
        Expr::var("x")
    }

    #[test]
    fn spacing_and_precedence() {
        assert_eq!(pretty(&add(mul(num(2.0), x()), num(3.0))), "2 * x + 3");
        assert_eq!(pretty(&div(pow(x(), num(2.0)), num(2.0))), "x^2 / 2");
        assert_eq!(pretty(&mul(num(2.0), add(x(), num(1.0)))), "2 * (x + 1)");
        assert_eq!(pretty(&sub(x(), sub(x(), num(1.0)))), "x - (x - 1)");
        assert_eq!(pretty(&div(x(), mul(x(), num(2.0)))), "x / (x * 2)");
    }

    #[test]
    fn negatives() {
        assert_eq!(pretty(&add(x(), num(-3.0))), "x - 3");
        assert_eq!(pretty(&sub(x(), neg(x()))), "x + x");
        assert_eq!(pretty(&neg(pow(x(), num(2.0)))), "-(x^2)");
        assert_eq!(pretty(&pow(neg(x()), num(2.0))), "-x^2");
        assert_eq!(pretty(&num(-0.0)), "0");
    }

    #[test]
    fn powers_respect_left_associativity() {
        assert_eq!(pretty(&pow(pow(x(), num(2.0)), num(3.0))), "x^2^3");
        assert_eq!(pretty(&pow(x(), pow(num(2.0), num(3.0)))), "x^(2^3)");
    }

    #[test]
    fn numbers() {
        assert_eq!(pretty(&num(2.0)), "2");
        assert_eq!(pretty(&num(0.25)), "0.25");
    }
}
