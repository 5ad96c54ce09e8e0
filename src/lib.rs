//! # defmap-calc
//!
//! defmap-calc is an eager calculator: it parses arithmetic statements and
//! evaluates them in the same pass, against a context of named scalars and
//! named numeric maps.
//!
//! ```text
//! a = b = 5            // chained assignment, right-associative
//! -2 ** 2              // 4: unary minus binds to the base
//! 2 ** -2              // 0.25
//! @defmap zz           // declare an empty map
//! zz[1] = 50           // maps are indexed by number
//! zz[2]                // NaN: unset entries are not errors
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{
        context::Context,
        parser::core::{evaluate_expression, evaluate_statement},
        stream::LexerStream,
    },
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a statement, plus the line-aware wrapper used for scripts.
///
/// # Responsibilities
/// - Defines error enums for syntax failures and failed reads/writes.
/// - Attaches offsets and names for context.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, the token stream, the evaluation
/// context, the value type and the grammar levels.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for evaluating expressions and statements.
/// - Manages the flow of values and errors between levels.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use interpreter::parser::block::{run_block, run_script};

/// Evaluates a single expression from source text.
///
/// `@defmap` is not accepted here; use [`process_statement`] for that.
///
/// # Errors
/// Returns an error if the text does not lex or parse as one expression, or
/// if a read or write against `context` fails.
///
/// # Examples
/// ```
/// use defmap_calc::{calc_expression, interpreter::context::Context};
///
/// let mut context = Context::new();
/// assert_eq!(calc_expression(&mut context, "2**3**2").unwrap(), 512.0);
/// assert_eq!(calc_expression(&mut context, "(2+3) * -(7-4) + 11").unwrap(), -4.0);
///
/// // Trailing tokens are rejected.
/// assert!(calc_expression(&mut context, "-(2+3))").is_err());
/// ```
pub fn calc_expression(context: &mut Context, source: &str) -> Result<f64, EvalError> {
    let mut stream = LexerStream::new(source)?;
    evaluate_expression(context, &mut stream)
}

/// Evaluates a single statement from source text.
///
/// Returns `None` for map declarations and the statement's value otherwise.
///
/// # Errors
/// Same as [`calc_expression`], plus a malformed `@defmap`.
///
/// # Examples
/// ```
/// use defmap_calc::{interpreter::context::Context, process_statement};
///
/// let mut context = Context::new();
/// assert_eq!(process_statement(&mut context, "@defmap zz").unwrap(), None);
/// assert_eq!(process_statement(&mut context, "zz[1] = 50").unwrap(), Some(50.0));
/// assert!(process_statement(&mut context, "zz = 1").is_err());
/// ```
pub fn process_statement(context: &mut Context, source: &str) -> Result<Option<f64>, EvalError> {
    let mut stream = LexerStream::new(source)?;
    evaluate_statement(context, &mut stream)
}
