use tracing::trace;

use crate::interpreter::{
    context::Context,
    lexer::Token,
    operator::{BinaryOperator, token_to_binary_operator},
    parser::{
        core::{ParseResult, descend},
        unary::parse_unary,
    },
    stream::TokenStream,
    value::Value,
};

/// Parses an assignment, or passes a lower-precedence value through.
///
/// Assignment is right-associative: `a = b = 5` assigns `5` to `b`, then to
/// `a`. The right-hand side is read first, then written into the left-hand
/// side, and the result becomes a plain [`Value::Scalar`], so the outcome of
/// an assignment can be read but not assigned to again.
///
/// Without `=`, the left operand is returned unchanged, keeping a bare or
/// parenthesized identifier writable.
///
/// Grammar: `assignment := additive ("=" assignment)?`
///
/// # Errors
/// Propagates [`NotWritable`], [`AssignToMapName`] and [`MapNotFound`] from
/// the write.
///
/// [`NotWritable`]: crate::error::RuntimeError::NotWritable
/// [`AssignToMapName`]: crate::error::RuntimeError::AssignToMapName
/// [`MapNotFound`]: crate::error::RuntimeError::MapNotFound
pub fn parse_assignment<S>(stream: &mut S,
                           context: &mut Context,
                           depth: usize)
                           -> ParseResult<Value>
    where S: TokenStream + ?Sized
{
    let target = parse_additive(stream, context, depth)?;
    if !matches!(stream.current(), Some(Token::Equals)) {
        return Ok(target);
    }
    let depth = descend(stream, depth)?;
    stream.advance()?;

    let value = parse_assignment(stream, context, depth)?.read(context)?;
    trace!(%target, value, "assignment");
    target.write(value, context)?;
    Ok(Value::Scalar(value))
}

/// Parses addition and subtraction.
///
/// Handles left-associative binary operators: `+` and `-`. Each step reads
/// both operands and folds them into a new [`Value::Scalar`].
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<S>(stream: &mut S,
                         context: &mut Context,
                         depth: usize)
                         -> ParseResult<Value>
    where S: TokenStream + ?Sized
{
    let mut left = parse_multiplicative(stream, context, depth)?;
    loop {
        let op = match stream.current().and_then(token_to_binary_operator) {
            Some(op @ (BinaryOperator::Add | BinaryOperator::Sub)) => op,
            _ => break,
        };
        let lhs = left.read(context)?;
        stream.advance()?;
        let rhs = parse_multiplicative(stream, context, depth)?.read(context)?;
        left = Value::Scalar(op.apply(lhs, rhs));
    }
    Ok(left)
}

/// Parses multiplication and division.
///
/// The right operand of both `*` and `/` is a whole multiplicative chain, so
/// `a / b / c` evaluates as `a / (b / c)` and `a / b * c` as `a / (b * c)`.
///
/// Grammar: `multiplicative := power (("*" | "/") multiplicative)*`
pub fn parse_multiplicative<S>(stream: &mut S,
                               context: &mut Context,
                               depth: usize)
                               -> ParseResult<Value>
    where S: TokenStream + ?Sized
{
    let mut left = parse_power(stream, context, depth)?;
    loop {
        let op = match stream.current().and_then(token_to_binary_operator) {
            Some(op @ (BinaryOperator::Mul | BinaryOperator::Div)) => op,
            _ => break,
        };
        let lhs = left.read(context)?;
        let inner = descend(stream, depth)?;
        stream.advance()?;
        let rhs = parse_multiplicative(stream, context, inner)?.read(context)?;
        left = Value::Scalar(op.apply(lhs, rhs));
    }
    Ok(left)
}

/// Parses exponentiation.
///
/// The left operand is a full unary expression, while the right operand
/// re-enters this level. Hence `-2 ** 2` is `(-2) ** 2 = 4`, `2 ** -2` is
/// `0.25`, and `2 ** 3 ** 2` is `2 ** 9`.
///
/// Grammar: `power := unary ("**" power)?`
pub fn parse_power<S>(stream: &mut S,
                      context: &mut Context,
                      depth: usize)
                      -> ParseResult<Value>
    where S: TokenStream + ?Sized
{
    let base = parse_unary(stream, context, depth)?;
    if !matches!(stream.current(), Some(Token::DoubleStar)) {
        return Ok(base);
    }
    let depth = descend(stream, depth)?;
    stream.advance()?;

    let base = base.read(context)?;
    let exponent = parse_power(stream, context, depth)?.read(context)?;
    Ok(Value::Scalar(BinaryOperator::Pow.apply(base, exponent)))
}
