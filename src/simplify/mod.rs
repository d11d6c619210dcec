//! Single-pass, bottom-up simplification: constant folding plus the
//! additive and multiplicative identities.

mod rules;

pub use rules::{simplify, simplify_binary, simplify_call, simplify_unary};
