//! String-based convenience API for quick experimentation.

pub use crate::solver::{solve, SolutionResult, SolutionStep, Solver};
pub use crate::ui::{diff, differentiate, evaluate, inte, integrate, parse, simp, simplify};
