/// Entry points, result type, and nesting limits.
///
/// Holds `parse_expression`, the top-level `parse_source` that rejects
/// trailing tokens, and the `Bounds` threaded through every production.
pub mod core;

/// Binary operator productions.
///
/// Additive and multiplicative levels, each a left fold over the level below.
pub mod binary;

/// Factor production: numbers and parenthesized expressions.
pub mod factor;
