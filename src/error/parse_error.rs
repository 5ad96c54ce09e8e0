#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the byte offset of the token that triggered it.
pub enum ParseError {
    /// The lexer could not recognize the input.
    Lex {
        /// The text that failed to lex.
        text:     String,
        /// Byte offset of the failure.
        position: usize,
    },
    /// Found a token that cannot start or continue the current construct.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input where an operand was required.
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedRightParen {
        /// Byte offset where `)` was expected.
        position: usize,
    },
    /// A closing bracket `]` was expected but not found.
    ExpectedRightBracket {
        /// Byte offset where `]` was expected.
        position: usize,
    },
    /// `@defmap` was not followed by an identifier.
    ExpectedMapName {
        /// What was found instead.
        found:    String,
        /// Byte offset of the offending token.
        position: usize,
    },
    /// Extra tokens remained after a complete statement.
    TrailingInput {
        /// The first extra token.
        token:    String,
        /// Byte offset of the extra token.
        position: usize,
    },
    /// `[` was applied to something other than a plain identifier.
    IndexOnNonIdentifier {
        /// Byte offset of the `[` token.
        position: usize,
    },
    /// An integer literal is too large to be represented exactly as `f64`.
    LiteralTooLarge {
        /// Byte offset of the literal.
        position: usize,
    },
    /// Groups, prefix operators or right-recursive chains nest deeper than
    /// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
    NestingTooDeep {
        /// Byte offset of the token that exceeded the limit.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the source at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedRightParen { position }
            | Self::ExpectedRightBracket { position }
            | Self::ExpectedMapName { position, .. }
            | Self::TrailingInput { position, .. }
            | Self::IndexOnNonIdentifier { position }
            | Self::LiteralTooLarge { position }
            | Self::NestingTooDeep { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex { text, position } => {
                write!(f, "Unrecognized input '{text}' at offset {position}.")
            },
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token {token} at offset {position}.")
            },
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Unexpected end of input at offset {position}.")
            },
            Self::ExpectedRightParen { position } => write!(f,
                                                            "Expected closing parenthesis ')' at offset {position} but none found."),
            Self::ExpectedRightBracket { position } => write!(f,
                                                              "Expected closing bracket ']' at offset {position} but none found."),
            Self::ExpectedMapName { found, position } => write!(f,
                                                                "Expected a map name after '@defmap' at offset {position}, found {found}."),
            Self::TrailingInput { token, position } => write!(f,
                                                              "Extra tokens after statement at offset {position}: {token}"),
            Self::IndexOnNonIdentifier { position } => write!(f,
                                                              "Only an identifier can be indexed with '[' (offset {position})."),
            Self::LiteralTooLarge { position } => {
                write!(f, "Literal at offset {position} is too large.")
            },
            Self::NestingTooDeep { position } => {
                write!(f, "Expression nests too deeply at offset {position}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
