/// Entry points and shared helpers.
///
/// Contains the result type, the `expression` rule and the two public
/// evaluation entry points that enforce end of input.
pub mod core;

/// Binary operator levels.
///
/// Implements assignment, addition and subtraction, multiplication and
/// division, and exponentiation.
pub mod binary;

/// Unary, postfix index and atom levels.
pub mod unary;

/// Statement parsing.
///
/// Handles `@defmap` declarations and falls back to expressions.
pub mod statement;

/// Statement sequences.
///
/// Evaluates several statements, or a whole script, against one shared
/// context.
pub mod block;
