use tracing::debug;

use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        context::Context,
        lexer::describe,
        parser::{binary::parse_assignment, statement::parse_statement},
        stream::TokenStream,
        value::Value,
    },
};

/// Result type used by every grammar level.
///
/// Parsing and evaluation happen in the same pass, so a level can fail with
/// either a [`ParseError`] or a
/// [`RuntimeError`](crate::error::RuntimeError).
pub type ParseResult<T> = Result<T, EvalError>;

/// Deepest recursion the grammar levels accept before giving up.
///
/// Every level that re-enters itself (groups, index expressions, prefix
/// operators, `**`, `*`, `/` and `=` chains) counts one step. The limit keeps
/// pathological input from exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Returns the depth for a recursive re-entry, or
/// [`ParseError::NestingTooDeep`] once [`MAX_NESTING_DEPTH`] is reached.
pub(in crate::interpreter::parser) fn descend<S>(stream: &S, depth: usize) -> ParseResult<usize>
    where S: TokenStream + ?Sized
{
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { position: stream.position() }.into());
    }
    Ok(depth + 1)
}

/// Parses and evaluates a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, assignment, and recursively descends through the
/// precedence hierarchy. `depth` is the current recursion depth; top-level
/// callers pass `0`.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<S>(stream: &mut S,
                           context: &mut Context,
                           depth: usize)
                           -> ParseResult<Value>
    where S: TokenStream + ?Sized
{
    parse_assignment(stream, context, depth)
}

/// Fails with [`ParseError::TrailingInput`] unless every token was consumed.
pub fn expect_end_of_input<S>(stream: &S) -> ParseResult<()>
    where S: TokenStream + ?Sized
{
    if stream.is_at_end() {
        return Ok(());
    }
    Err(ParseError::TrailingInput { token:    describe(stream.current()),
                                    position: stream.position(), }.into())
}

/// Evaluates one expression and returns its numeric value.
///
/// The whole stream must be consumed; any leftover token is an error.
///
/// # Errors
/// Returns an [`EvalError`] for syntax errors, trailing input, nesting
/// beyond [`MAX_NESTING_DEPTH`], or failed reads and writes. Nothing is
/// rolled back: assignments made before the failure remain in `context`.
///
/// # Example
/// ```
/// use defmap_calc::interpreter::{
///     context::Context, parser::core::evaluate_expression, stream::LexerStream,
/// };
///
/// let mut context = Context::new();
/// let mut stream = LexerStream::new("-2**2").unwrap();
/// assert_eq!(evaluate_expression(&mut context, &mut stream).unwrap(), 4.0);
/// ```
pub fn evaluate_expression<S>(context: &mut Context, stream: &mut S) -> ParseResult<f64>
    where S: TokenStream + ?Sized
{
    let value = parse_expression(stream, context, 0)?;
    expect_end_of_input(stream)?;
    Ok(value.read(context)?)
}

/// Evaluates one statement.
///
/// Returns `None` for statements that produce no value, such as
/// `@defmap name`, and the numeric value otherwise.
///
/// # Errors
/// Same as [`evaluate_expression`], plus a malformed `@defmap`.
///
/// # Example
/// ```
/// use defmap_calc::interpreter::{
///     context::Context, parser::core::evaluate_statement, stream::LexerStream,
/// };
///
/// let mut context = Context::new();
/// let mut declare = LexerStream::new("@defmap zz").unwrap();
/// assert_eq!(evaluate_statement(&mut context, &mut declare).unwrap(), None);
///
/// let mut assign = LexerStream::new("zz[1] = 50").unwrap();
/// assert_eq!(evaluate_statement(&mut context, &mut assign).unwrap(), Some(50.0));
/// ```
pub fn evaluate_statement<S>(context: &mut Context, stream: &mut S) -> ParseResult<Option<f64>>
    where S: TokenStream + ?Sized
{
    let value = parse_statement(stream, context, 0)?;
    expect_end_of_input(stream)?;
    let result = match value {
        Value::None => None,
        value => Some(value.read(context)?),
    };
    debug!(?result, "statement evaluated");
    Ok(result)
}
