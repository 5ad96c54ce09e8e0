/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces tokens for numbers,
/// identifiers, keywords and operators. Whitespace and `//` comments are
/// skipped; anything else is a lexical error.
pub mod lexer;
/// The token stream seam between lexer and parser.
///
/// Defines the `TokenStream` trait the engine pulls tokens from, with an
/// on-demand lexing implementation and one over pre-built tokens.
pub mod stream;
/// The evaluation context: named scalars and named numeric maps.
///
/// Owned by the caller and mutated in place by every assignment and map
/// declaration.
pub mod context;
/// The value produced by every grammar level.
///
/// A small closed set of variants that can be read, and in some cases
/// written, against a context.
pub mod value;
/// Arithmetic operators and their mapping from tokens.
pub mod operator;
/// The parser module parses and evaluates in a single pass.
///
/// Each precedence level consumes tokens, builds values, and combines them
/// immediately by reading their numbers. No syntax tree is built.
///
/// # Responsibilities
/// - Implements the grammar from statements down to atoms.
/// - Reports syntax errors with the offset of the offending token.
/// - Enforces end of input after a complete statement.
pub mod parser;
