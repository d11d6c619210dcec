//! Formatting helpers for rendering expressions, numeric answers and solver
//! output.

pub mod expr;
pub mod solution;
pub mod value;

pub use expr::pretty;
pub use solution::pretty_solution;
pub use value::format_value;
