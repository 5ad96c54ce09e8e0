use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        context::Context,
        lexer::{Token, describe},
        operator::token_to_unary_operator,
        parser::core::{ParseResult, descend, parse_expression},
        stream::TokenStream,
        value::Value,
    },
    util::num::i64_to_f64_checked,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+` (identity)
/// - `-` (numeric negation)
///
/// Unary operators nest, so `--x` is `-(-x)`. Applying either operator reads
/// the operand, so `+a` is no longer assignable.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
pub fn parse_unary<S>(stream: &mut S,
                      context: &mut Context,
                      depth: usize)
                      -> ParseResult<Value>
    where S: TokenStream + ?Sized
{
    let Some(op) = stream.current().and_then(token_to_unary_operator) else {
        return parse_primary(stream, context, depth);
    };
    let depth = descend(stream, depth)?;
    stream.advance()?;

    let operand = parse_unary(stream, context, depth)?.read(context)?;
    Ok(Value::Scalar(op.apply(operand)))
}

/// Parses an atom with an optional index suffix.
///
/// Only a plain identifier can be indexed: `zz[1]`, `zz[i + 1]`. The index
/// expression is evaluated immediately and the identifier's name moves into
/// the resulting [`Value::IndexedReference`].
///
/// Grammar: `primary := atom ("[" expression "]")?`
///
/// # Errors
/// - [`ParseError::IndexOnNonIdentifier`] if `[` follows anything but an
///   identifier, e.g. `1[2]` or `(a + 1)[2]`. `(a)[2]` is accepted since
///   parentheses keep the identifier.
/// - [`ParseError::ExpectedRightBracket`] if the index is not closed.
/// - [`ParseError::NestingTooDeep`] if the index nests too deeply.
pub fn parse_primary<S>(stream: &mut S,
                        context: &mut Context,
                        depth: usize)
                        -> ParseResult<Value>
    where S: TokenStream + ?Sized
{
    let base = parse_atom(stream, context, depth)?;
    if !matches!(stream.current(), Some(Token::LBracket)) {
        return Ok(base);
    }
    let Value::Identifier(map) = base else {
        return Err(ParseError::IndexOnNonIdentifier { position: stream.position() }.into());
    };
    let depth = descend(stream, depth)?;
    stream.advance()?;

    let index = parse_expression(stream, context, depth)?;
    if !matches!(stream.current(), Some(Token::RBracket)) {
        return Err(ParseError::ExpectedRightBracket { position: stream.position() }.into());
    }
    stream.advance()?;

    let index = index.read(context)?;
    trace!(%map, index, "indexed reference");
    Ok(Value::IndexedReference { map, index })
}

/// Parses a primary (atomic) expression.
///
/// Atoms are:
/// - numeric literals
/// - identifiers
/// - parenthesized expressions
///
/// Parentheses are transparent: `(a)` is still the identifier `a`, so
/// `(a) = 1` assigns to `a`.
///
/// Grammar:
/// ```text
///     atom := number
///           | identifier
///           | "(" expression ")"
/// ```
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] if the input ends here.
/// - [`ParseError::UnexpectedToken`] for any other token.
/// - [`ParseError::ExpectedRightParen`] if a group is not closed.
/// - [`ParseError::LiteralTooLarge`] for integers beyond `f64` precision.
/// - [`ParseError::NestingTooDeep`] if groups nest too deeply.
pub fn parse_atom<S>(stream: &mut S,
                     context: &mut Context,
                     depth: usize)
                     -> ParseResult<Value>
    where S: TokenStream + ?Sized
{
    trace!(token = ?stream.current(), "atom");
    if matches!(stream.current(), Some(Token::LParen)) {
        return parse_grouping(stream, context, depth);
    }

    let position = stream.position();
    let value = match stream.current() {
        Some(Token::Integer(n)) => {
            Value::Scalar(i64_to_f64_checked(*n, ParseError::LiteralTooLarge { position })?)
        },
        Some(Token::Real(r)) => Value::Scalar(*r),
        Some(Token::Identifier(name)) => Value::Identifier(name.clone()),
        None => return Err(ParseError::UnexpectedEndOfInput { position }.into()),
        Some(token) => {
            return Err(ParseError::UnexpectedToken { token: describe(Some(token)),
                                                     position }.into());
        },
    };
    stream.advance()?;
    Ok(value)
}

/// Parses a parenthesized expression and returns its value unchanged.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<S>(stream: &mut S,
                     context: &mut Context,
                     depth: usize)
                     -> ParseResult<Value>
    where S: TokenStream + ?Sized
{
    let depth = descend(stream, depth)?;
    stream.advance()?;
    let value = parse_expression(stream, context, depth)?;
    if !matches!(stream.current(), Some(Token::RParen)) {
        return Err(ParseError::ExpectedRightParen { position: stream.position() }.into());
    }
    stream.advance()?;
    Ok(value)
}
