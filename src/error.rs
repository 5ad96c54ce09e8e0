/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing a
/// statement: lexing failures, unexpected tokens, unbalanced brackets and
/// trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while reading or writing values against the
/// evaluation context, such as assigning to an rvalue or indexing a map that
/// was never declared.
pub mod runtime_error;
/// Errors surfaced by the public entry points.
///
/// Wraps parse and runtime errors into a single type for a statement, and
/// attaches line numbers when whole scripts are evaluated.
pub mod eval_error;

pub use eval_error::{EvalError, ScriptError};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
