//! Pulling the variable and the expression text out of calculus problems.
//! Markers match regardless of case; the extracted text keeps its case.

use crate::error::ParseError;

const DERIVATIVE_MARKER: &str = "d/d";
const INTEGRAL_MARKERS: &[&str] = &["∫", "integrate", "integral"];
const DEFAULT_VARIABLE: &str = "x";

/// `d/dx (x^2 + 3x) = ?` gives `("x", "x^2 + 3x")`.
pub(super) fn derivative_parts(text: &str) -> Result<(String, String), ParseError> {
    let start = text
        .to_ascii_lowercase()
        .find(DERIVATIVE_MARKER)
        .ok_or(ParseError::MissingVariable("differentiation"))?;
    let mut chars = text[start + DERIVATIVE_MARKER.len()..].chars();
    let var = match chars.next() {
        Some(c) if c.is_alphabetic() => c.to_string(),
        _ => return Err(ParseError::MissingVariable("differentiation")),
    };

    let mut target = chars.as_str().trim();
    if let Some((before, _)) = target.split_once('=') {
        target = before.trim();
    }
    let target = strip_enclosing_parens(strip_filler(target));
    Ok((var, target.to_string()))
}

/// `∫ x^2 dx` gives `("x", "x^2")`. Without a trailing differential the
/// whole text is the integrand in `x`; an empty integrand is `1`.
pub(super) fn integral_parts(text: &str) -> (String, String) {
    let body = blank_markers(text);
    let body = strip_filler(body.trim());

    let (var, integrand) = match body.to_ascii_lowercase().rfind('d') {
        Some(idx) => {
            let var: String = body[idx + 1..]
                .trim_start()
                .chars()
                .take_while(|c| c.is_alphabetic())
                .collect();
            if var.is_empty() {
                (DEFAULT_VARIABLE.to_string(), body)
            } else {
                (var, body[..idx].trim())
            }
        }
        None => (DEFAULT_VARIABLE.to_string(), body),
    };

    let integrand = if integrand.is_empty() { "1" } else { integrand };
    (var, integrand.to_string())
}

/// `dy/dx = 2x` gives `("x", "2x")`. The variable is the last character of a
/// `dy/d?` left side; `y' = ...` and anything else integrate in `x`.
pub(super) fn differential_equation_parts(text: &str) -> Result<(String, String), ParseError> {
    let (lhs, rhs) = text.split_once('=').ok_or(ParseError::MissingEquals)?;
    let lhs = lhs.trim();
    let var = match lhs.chars().last() {
        Some(c) if lhs.to_ascii_lowercase().contains("dy/d") && c.is_alphabetic() => {
            c.to_string()
        }
        _ => DEFAULT_VARIABLE.to_string(),
    };
    Ok((var, rhs.trim().to_string()))
}

fn blank_markers(text: &str) -> String {
    let mut body = text.to_string();
    for marker in INTEGRAL_MARKERS {
        while let Some(idx) = body.to_ascii_lowercase().find(marker) {
            body.replace_range(idx..idx + marker.len(), " ");
        }
    }
    body
}

/// Drop a leading `of`, as in `integral of x dx`.
fn strip_filler(text: &str) -> &str {
    let rest = match text.get(..2) {
        Some(word) if word.eq_ignore_ascii_case("of") => &text[2..],
        _ => return text,
    };
    if rest.starts_with(|c: char| c.is_whitespace() || c == '(') {
        rest.trim_start()
    } else {
        text
    }
}

/// Remove one pair of parentheses only when they enclose the whole text,
/// so `(x + 1)` loses them but `(x + 1) * (x - 1)` does not.
fn strip_enclosing_parens(text: &str) -> &str {
    let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
        return text;
    };
    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return text,
            ')' => depth -= 1,
            _ => {}
        }
    }
    inner.trim()
}
