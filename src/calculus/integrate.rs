use crate::expr::{add, call, div, mul, neg, num, pow, sub, BinaryOp, Expr, Func, UnaryOp};

/// Antiderivative of `expr` with respect to `var` from a small rule table,
/// without the constant of integration. `None` means no rule applies, not
/// that the integral does not exist.
pub fn integrate(var: &str, expr: &Expr) -> Option<Expr> {
    if !expr.contains_var(var) {
        return Some(mul(expr.clone(), Expr::var(var)));
    }

    match expr {
        // Variable-free trees were handled above, so this is `var` itself.
        Expr::Variable(_) => Some(div(pow(Expr::var(var), num(2.0)), num(2.0))),

        Expr::Binary(BinaryOp::Add, a, b) => Some(add(integrate(var, a)?, integrate(var, b)?)),
        Expr::Binary(BinaryOp::Sub, a, b) => Some(sub(integrate(var, a)?, integrate(var, b)?)),

        // A factor free of `var` is a constant.
        Expr::Binary(BinaryOp::Mul, a, b) if !a.contains_var(var) => {
            integrate(var, b).map(|r| mul((**a).clone(), r))
        }
        Expr::Binary(BinaryOp::Mul, a, b) if !b.contains_var(var) => {
            integrate(var, a).map(|r| mul((**b).clone(), r))
        }
        Expr::Binary(BinaryOp::Div, a, b) if !b.contains_var(var) => {
            integrate(var, a).map(|r| div(r, (**b).clone()))
        }
        Expr::Binary(BinaryOp::Mul | BinaryOp::Div, _, _) => None,
        Expr::Binary(BinaryOp::Pow, base, exp) => match (&**base, &**exp) {
            (Expr::Variable(name), Expr::Number(n)) if name == var && *n != -1.0 => {
                let raised = n + 1.0;
                Some(div(pow(Expr::var(var), num(raised)), num(raised)))
            }
            _ => None,
        },

        Expr::Unary(UnaryOp::Plus, a) => integrate(var, a),
        Expr::Unary(UnaryOp::Minus, a) => integrate(var, a).map(neg),

        Expr::Function(func, args) => match args.as_slice() {
            [Expr::Variable(name)] if name == var => integrate_call(func, var),
            _ => None,
        },

        Expr::Number(_) => None,
    }
}

fn integrate_call(func: &Func, var: &str) -> Option<Expr> {
    let x = Expr::var(var);
    match func {
        Func::Sin => Some(neg(call(Func::Cos, x))),
        Func::Cos => Some(call(Func::Sin, x)),
        Func::Exp => Some(call(Func::Exp, x)),
        Func::Tan => Some(neg(call(Func::Ln, call(Func::Cos, x)))),
        Func::Log | Func::Ln | Func::Sqrt | Func::Unknown(_) => None,
    }
}
