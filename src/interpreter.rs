/// The evaluator module holds the arithmetic applied while parsing.
///
/// No syntax tree is built: each production folds its operands as soon as
/// they are parsed, using the operators defined here.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer reads the raw source and produces numbers and the six operator
/// and parenthesis symbols, each paired with its byte offset. Anything else
/// in the input is dropped.
///
/// # Responsibilities
/// - Converts the input into tokens with source offsets.
/// - Reports `InvalidExpression` when nothing is recognisable.
pub mod lexer;
/// The parser module parses and evaluates tokens in a single pass.
///
/// A recursive descent over three precedence levels (additive,
/// multiplicative, factor), consuming each token at most once with one token
/// of lookahead.
///
/// # Responsibilities
/// - Enforces precedence, left associativity, and parenthesis matching.
/// - Rejects tokens left over after a complete expression.
/// - Bounds parenthesis nesting depth.
pub mod parser;
