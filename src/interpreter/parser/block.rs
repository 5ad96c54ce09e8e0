use crate::{
    error::{EvalError, ScriptError},
    interpreter::{
        context::Context,
        parser::core::{ParseResult, evaluate_statement},
        stream::{LexerStream, TokenStream},
    },
};

/// Evaluates a sequence of statements against one shared context.
///
/// Statements run in order and each sees every write made by the ones
/// before it. The result is the value of the last statement that produced
/// one, or `None` if none did.
///
/// # Errors
/// Stops at the first statement that fails and returns its error. Writes
/// made by earlier statements are kept.
///
/// # Example
/// ```
/// use defmap_calc::{interpreter::context::Context, run_block};
///
/// let mut context = Context::new();
/// let result = run_block(&mut context, ["@defmap yx", "yx[2] = yx[3] = 4", "mm = 8"]);
/// assert_eq!(result.unwrap(), Some(8.0));
/// ```
pub fn run_block<I, T>(context: &mut Context, statements: I) -> Result<Option<f64>, EvalError>
    where I: IntoIterator<Item = T>,
          T: AsRef<str>
{
    let mut result = None;
    for statement in statements {
        let mut stream = LexerStream::new(statement.as_ref())?;
        if let Some(value) = evaluate_statement(context, &mut stream)? {
            result = Some(value);
        }
    }
    Ok(result)
}

/// Evaluates a script with one statement per line.
///
/// Lines without tokens (blank, or holding only a `//` comment) are skipped.
/// The result is that of [`run_block`] over the remaining lines.
///
/// # Errors
/// Returns a [`ScriptError`] carrying the 1-based number of the failing line.
pub fn run_script(context: &mut Context, source: &str) -> Result<Option<f64>, ScriptError> {
    let mut result = None;
    for (index, line) in source.lines().enumerate() {
        let value = run_line(context, line).map_err(|error| ScriptError { line: index + 1,
                                                                           error })?;
        if value.is_some() {
            result = value;
        }
    }
    Ok(result)
}

fn run_line(context: &mut Context, line: &str) -> ParseResult<Option<f64>> {
    let mut stream = LexerStream::new(line)?;
    if stream.is_at_end() {
        return Ok(None);
    }
    evaluate_statement(context, &mut stream)
}
