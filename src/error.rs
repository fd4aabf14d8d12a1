/// Parsing errors.
///
/// Defines every error that can occur while tokenizing, parsing, and
/// evaluating an expression. Evaluation itself cannot fail: arithmetic follows
/// IEEE-754, so all failures are syntactic.
pub mod parse_error;

pub use parse_error::ParseError;
