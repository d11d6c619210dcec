//! Property-based tests for evaluation, simplification and differentiation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::calculus::differentiate;
    use crate::eval::{evaluate_at, evaluate_constant};
    use crate::expr::{add, div, mul, neg, num, pow, sub, Expr};
    use crate::format::pretty;
    use crate::parser::parse_expr;
    use crate::simplify::simplify;

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
    }

    // Small integer literals, optionally mixed with `x`.
    fn leaf(with_var: bool) -> BoxedStrategy<Expr> {
        let literal = (-20i32..20).prop_map(|n| num(n as f64));
        if with_var {
            prop_oneof![literal, Just(Expr::var("x"))].boxed()
        } else {
            literal.boxed()
        }
    }

    fn tree(with_var: bool) -> impl Strategy<Value = Expr> {
        leaf(with_var).prop_recursive(4, 32, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(a, b)| add(a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| sub(a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| mul(a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| div(a, b)),
                (inner.clone(), 0u8..3).prop_map(|(a, n)| pow(a, num(n as f64))),
                inner.prop_map(neg),
            ]
        })
    }

    proptest! {
        #[test]
        fn simplify_preserves_constant_value(e in tree(false)) {
            let direct = evaluate_constant(&e);
            prop_assume!(matches!(direct, Ok(v) if v.is_finite()));
            let direct = direct.unwrap();
            let folded = evaluate_constant(&simplify(e)).unwrap();
            prop_assert!(close(direct, folded, 1e-9), "{direct} vs {folded}");
        }

        #[test]
        fn simplify_twice_evaluates_like_once(e in tree(true), x in -5.0f64..5.0) {
            let once = simplify(e);
            let first = evaluate_at(&once, "x", x);
            prop_assume!(matches!(first, Ok(v) if v.is_finite()));
            let first = first.unwrap();
            let second = evaluate_at(&simplify(once), "x", x).unwrap();
            prop_assert!(close(first, second, 1e-9), "{first} vs {second}");
        }

        #[test]
        fn derivative_is_linear(f in tree(true), g in tree(true), x in 0.5f64..3.0) {
            let sum = differentiate("x", &add(f.clone(), g.clone()));
            let parts = add(differentiate("x", &f), differentiate("x", &g));
            let lhs = evaluate_at(&sum, "x", x);
            prop_assume!(matches!(lhs, Ok(v) if v.is_finite()));
            let lhs = lhs.unwrap();
            let rhs = evaluate_at(&parts, "x", x).unwrap();
            prop_assert!(close(lhs, rhs, 1e-9), "{lhs} vs {rhs}");
        }

        #[test]
        fn printed_numbers_parse_back(n in -1.0e9f64..1.0e9) {
            let printed = pretty(&num(n));
            let parsed = parse_expr(&printed).unwrap();
            let value = evaluate_constant(&parsed).unwrap();
            prop_assert!(close(value, n, 1e-12), "{printed} -> {value}");
        }

        #[test]
        fn printed_trees_parse_back(e in tree(true), x in -5.0f64..5.0) {
            let expected = evaluate_at(&e, "x", x);
            prop_assume!(matches!(expected, Ok(v) if v.is_finite()));
            let reparsed = parse_expr(&pretty(&e)).unwrap();
            let got = evaluate_at(&reparsed, "x", x).unwrap();
            prop_assert!(close(expected.unwrap(), got, 1e-9));
        }
    }
}
