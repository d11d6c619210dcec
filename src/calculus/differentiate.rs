use crate::expr::{add, call, div, mul, neg, num, one, pow, sub, zero, BinaryOp, Expr, Func, UnaryOp};

/// Symbolic derivative of `expr` with respect to `var`. Total: functions
/// without a rule (unknown names) differentiate to `0`. The result is not
/// simplified.
pub fn differentiate(var: &str, expr: &Expr) -> Expr {
    Differentiator { var }.derive(expr)
}

struct Differentiator<'a> {
    var: &'a str,
}

impl<'a> Differentiator<'a> {
    fn derive(&self, expr: &Expr) -> Expr {
        match expr {
            Expr::Number(_) => zero(),
            Expr::Variable(name) if name == self.var => one(),
            Expr::Variable(_) => zero(),

            Expr::Binary(BinaryOp::Add, a, b) => add(self.derive(a), self.derive(b)),
            Expr::Binary(BinaryOp::Sub, a, b) => sub(self.derive(a), self.derive(b)),
            Expr::Binary(BinaryOp::Mul, a, b) => self.product_rule(a, b),
            Expr::Binary(BinaryOp::Div, a, b) => self.quotient_rule(a, b),
            Expr::Binary(BinaryOp::Pow, a, b) => self.power_rule(a, b),

            Expr::Unary(UnaryOp::Plus, a) => self.derive(a),
            Expr::Unary(UnaryOp::Minus, a) => neg(self.derive(a)),

            Expr::Function(func, args) => match args.as_slice() {
                [arg] => self.chain_rule(func, arg),
                _ => zero(),
            },
        }
    }

    fn product_rule(&self, a: &Expr, b: &Expr) -> Expr {
        add(
            mul(self.derive(a), b.clone()),
            mul(a.clone(), self.derive(b)),
        )
    }

    fn quotient_rule(&self, a: &Expr, b: &Expr) -> Expr {
        div(
            sub(
                mul(self.derive(a), b.clone()),
                mul(a.clone(), self.derive(b)),
            ),
            pow(b.clone(), num(2.0)),
        )
    }

    fn power_rule(&self, base: &Expr, exp: &Expr) -> Expr {
        match exp {
            Expr::Number(n) => mul(
                mul(num(*n), pow(base.clone(), num(n - 1.0))),
                self.derive(base),
            ),
            // d(f^g) = f^g * (g * f' / f + g' * ln f)
            _ => mul(
                pow(base.clone(), exp.clone()),
                add(
                    div(mul(exp.clone(), self.derive(base)), base.clone()),
                    mul(self.derive(exp), call(Func::Ln, base.clone())),
                ),
            ),
        }
    }

    fn chain_rule(&self, func: &Func, arg: &Expr) -> Expr {
        let da = self.derive(arg);
        let u = arg.clone();
        match func {
            Func::Sin => mul(call(Func::Cos, u), da),
            Func::Cos => mul(neg(call(Func::Sin, u)), da),
            Func::Tan => div(da, pow(call(Func::Cos, u), num(2.0))),
            Func::Exp => mul(call(Func::Exp, u), da),
            Func::Ln => div(da, u),
            Func::Log => div(da, mul(u, call(Func::Ln, num(10.0)))),
            Func::Sqrt => div(da, mul(num(2.0), call(Func::Sqrt, u))),
            Func::Unknown(_) => zero(),
        }
    }
}
