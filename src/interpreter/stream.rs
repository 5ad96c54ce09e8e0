use logos::{Lexer, Logos};

use crate::{error::ParseError, interpreter::lexer::Token};

/// A pull-based source of tokens.
///
/// The engine only ever looks at the current token and asks for the next
/// one; it never backtracks. End of input is reported as `None` from
/// [`current`](Self::current), and advancing past it is a no-op.
pub trait TokenStream {
    /// Peeks at the current token without consuming it.
    fn current(&self) -> Option<&Token>;

    /// Offset of the current token, used for error reporting.
    fn position(&self) -> usize;

    /// Consumes the current token and fetches the next one.
    ///
    /// # Errors
    /// Returns [`ParseError::Lex`] if the next token cannot be recognized.
    fn advance(&mut self) -> Result<(), ParseError>;

    /// Returns `true` once every token has been consumed.
    fn is_at_end(&self) -> bool {
        self.current().is_none()
    }
}

/// A [`TokenStream`] that lexes source text on demand.
///
/// Positions are byte offsets into the source text.
pub struct LexerStream<'source> {
    lexer:    Lexer<'source, Token>,
    current:  Option<Token>,
    position: usize,
}

impl<'source> LexerStream<'source> {
    /// Creates a stream over `source` positioned at its first token.
    ///
    /// # Errors
    /// Returns [`ParseError::Lex`] if the first token cannot be recognized.
    ///
    /// # Example
    /// ```
    /// use defmap_calc::interpreter::{
    ///     lexer::Token,
    ///     stream::{LexerStream, TokenStream},
    /// };
    ///
    /// let mut stream = LexerStream::new("a ** 2").unwrap();
    /// assert_eq!(stream.current(), Some(&Token::Identifier("a".to_string())));
    /// stream.advance().unwrap();
    /// assert_eq!(stream.current(), Some(&Token::DoubleStar));
    /// assert_eq!(stream.position(), 2);
    /// ```
    pub fn new(source: &'source str) -> Result<Self, ParseError> {
        let mut stream = Self { lexer:    Token::lexer(source),
                                current:  None,
                                position: 0, };
        stream.advance()?;
        Ok(stream)
    }
}

impl TokenStream for LexerStream<'_> {
    fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    fn position(&self) -> usize {
        self.position
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        match self.lexer.next() {
            Some(Ok(token)) => {
                self.position = self.lexer.span().start;
                self.current = Some(token);
                Ok(())
            },
            Some(Err(())) => Err(ParseError::Lex { text:     self.lexer.slice().to_string(),
                                                   position: self.lexer.span().start, }),
            None => {
                self.position = self.lexer.source().len();
                self.current = None;
                Ok(())
            },
        }
    }
}

/// A [`TokenStream`] over tokens that were produced ahead of time.
///
/// Positions are token indices rather than byte offsets.
#[derive(Debug, Clone, Default)]
pub struct VecStream {
    tokens: Vec<Token>,
    index:  usize,
}

impl From<Vec<Token>> for VecStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }
}

impl TokenStream for VecStream {
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn position(&self) -> usize {
        self.index
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
        Ok(())
    }
}
