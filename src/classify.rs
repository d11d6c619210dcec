//! Routing of recognized text to a solving strategy by lexical markers.

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ProblemKind {
    Expression,
    Derivative,
    Integral,
    Equation,
    DifferentialEquation,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProblemKind::Expression => "expression",
            ProblemKind::Derivative => "derivative",
            ProblemKind::Integral => "integral",
            ProblemKind::Equation => "equation",
            ProblemKind::DifferentialEquation => "differential equation",
        };
        f.write_str(name)
    }
}

/// Glyphs that text recognition commonly produces in place of ASCII
/// operators.
const GLYPHS: &[(char, &str)] = &[
    ('×', "*"),
    ('·', "*"),
    ('÷', "/"),
    ('−', "-"),
    ('–', "-"),
    ('²', "^2"),
    ('³', "^3"),
];

/// Map recognition glyphs to ASCII and collapse every run of whitespace
/// (including the newlines between recognized lines) to a single space.
/// Case is kept so variable names survive.
pub fn normalize_input(text: &str) -> String {
    let mut mapped = String::with_capacity(text.len());
    for c in text.chars() {
        match GLYPHS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, ascii)) => mapped.push_str(ascii),
            None => mapped.push(c),
        }
    }
    mapped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classify normalized text. Markers are matched ignoring case and checked
/// in priority order, so `d/dx (x = 1)` is a derivative, not an equation.
pub fn classify(text: &str) -> ProblemKind {
    let text = text.to_ascii_lowercase();
    if text.contains("d/d") {
        ProblemKind::Derivative
    } else if text.contains('∫') || text.contains("integral") || text.contains("integrate") {
        ProblemKind::Integral
    } else if text.contains("dy/d") || text.contains("y'") {
        ProblemKind::DifferentialEquation
    } else if text.contains('=') {
        ProblemKind::Equation
    } else {
        ProblemKind::Expression
    }
}
