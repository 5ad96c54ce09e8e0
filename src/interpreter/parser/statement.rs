use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{
        context::Context,
        lexer::{DEFMAP_KEYWORD, Token, describe},
        parser::core::{ParseResult, parse_expression},
        stream::TokenStream,
        value::Value,
    },
};

/// Parses a single statement.
///
/// A statement is either a map declaration introduced by `@defmap`, or an
/// expression. Any other keyword falls through to expression parsing, where
/// it is rejected as an unexpected token.
///
/// Grammar:
/// ```text
///     statement := "@defmap" identifier
///                | expression
/// ```
pub fn parse_statement<S>(stream: &mut S,
                          context: &mut Context,
                          depth: usize)
                          -> ParseResult<Value>
    where S: TokenStream + ?Sized
{
    if matches!(stream.current(), Some(Token::Keyword(keyword)) if keyword == DEFMAP_KEYWORD) {
        return parse_declare_map(stream, context);
    }
    parse_expression(stream, context, depth)
}

/// Parses `@defmap name` and declares an empty map called `name`.
///
/// Produces [`Value::None`]: a declaration has no numeric result.
///
/// # Errors
/// Returns [`ParseError::ExpectedMapName`] if the keyword is not followed by
/// an identifier.
fn parse_declare_map<S>(stream: &mut S, context: &mut Context) -> ParseResult<Value>
    where S: TokenStream + ?Sized
{
    stream.advance()?;
    let position = stream.position();
    let name = match stream.current() {
        Some(Token::Identifier(name)) => name.clone(),
        other => {
            return Err(ParseError::ExpectedMapName { found: describe(other),
                                                     position }.into());
        },
    };
    debug!(%name, "map declaration");
    context.declare_map(&name);
    stream.advance()?;
    Ok(Value::None)
}
