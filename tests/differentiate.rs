use approx::assert_relative_eq;
use mathsnap::{differentiate, evaluate_at, parse_expr, pretty, simplify};

fn diff_str(var: &str, input: &str) -> String {
    let expr = parse_expr(input).expect("parse input");
    pretty(&simplify(differentiate(var, &expr)))
}

/// Compare against a hand-written derivative at a few points in (0, 2].
fn assert_diff_matches(input: &str, expected: &str) {
    let expr = parse_expr(input).expect("parse input");
    let derivative = simplify(differentiate("x", &expr));
    let expected = parse_expr(expected).expect("parse expected");
    for x in [0.3, 0.7, 1.1, 1.9] {
        let got = evaluate_at(&derivative, "x", x).expect("evaluate derivative");
        let want = evaluate_at(&expected, "x", x).expect("evaluate expected");
        assert_relative_eq!(got, want, max_relative = 1e-9);
    }
}

#[test]
fn basic_vars_and_constants() {
    assert_eq!(diff_str("x", "x"), "1");
    assert_eq!(diff_str("x", "y"), "0");
    assert_eq!(diff_str("x", "5"), "0");
}

#[test]
fn polynomials_and_products() {
    assert_eq!(diff_str("x", "x^3"), "3 * x^2");
    assert_eq!(diff_str("x", "x^2 + 3x"), "2 * x + 3");
    assert_eq!(diff_str("x", "x*y"), "y");
    assert_diff_matches("(x + 1) * (x - 2)", "2x - 1");
    assert_diff_matches("x / (x + 1)", "1 / (x + 1)^2");
}

#[test]
fn trig_and_exponentials() {
    assert_eq!(diff_str("x", "sin(x)"), "cos(x)");
    assert_eq!(diff_str("x", "cos(x)"), "-sin(x)");
    assert_eq!(diff_str("x", "exp(x)"), "exp(x)");
    assert_diff_matches("tan(x)", "1 / cos(x)^2");
    assert_diff_matches("exp(x^2)", "2x * exp(x^2)");
    assert_diff_matches("sin(3x)", "3cos(3x)");
}

#[test]
fn logarithms_and_roots() {
    assert_eq!(diff_str("x", "ln(x)"), "1 / x");
    assert_diff_matches("log(x)", "1 / (x * ln(10))");
    assert_diff_matches("sqrt(x)", "0.5 / sqrt(x)");
}

#[test]
fn general_power_rule() {
    assert_diff_matches("x^x", "x^x * (ln(x) + 1)");
    assert_diff_matches("2^x", "2^x * ln(2)");
}

#[test]
fn unknown_functions_have_zero_derivative() {
    assert_eq!(diff_str("x", "f(x)"), "0");
}
